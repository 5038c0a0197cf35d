use catalog_model::{CatalogState, ModelError, Product, ProductDraft, ProductId, seed_state};
use catalog_persistence::{
    PersistenceError, RESET_FLAG_KEY, StorageBackend, clear_state, load_state,
    reset_requested, save_state, set_reset_flag, take_reset_flag,
};
use catalog_query::{FilterSpec, PriceRange, derive, price_bounds};
use tracing::{debug, error, info, warn};

/// Catalog state plus the storage it persists to.
#[derive(Debug)]
pub struct CatalogStore<B> {
    backend: B,
    state: CatalogState,
    persist_error: Option<PersistenceError>,
}

impl<B: StorageBackend> CatalogStore<B> {
    /// Rehydrate from `backend`.
    ///
    /// A pending reset flag is consumed first. A flag that is still set
    /// because clearing failed still means seed data for this session.
    /// Missing or unreadable data falls back to the seed catalog; nothing
    /// is written in that case.
    pub fn load(mut backend: B) -> Self {
        let reset_pending = match take_reset_flag(&mut backend) {
            Ok(taken) => taken,
            Err(e) => {
                warn!(error = %e, "could not consume reset flag");
                reset_requested(&backend).unwrap_or(false)
            }
        };

        if reset_pending {
            info!("reset pending, starting from seed data");
            return Self::with_state(backend, seed_state());
        }

        let state = match load_state(&backend) {
            Ok(Some(state)) => state,
            Ok(None) => {
                info!("no stored catalog, starting from seed data");
                seed_state()
            }
            Err(e) => {
                warn!(
                    error = %e,
                    message = %e.user_message(),
                    suggestion = ?e.suggestion(),
                    "stored catalog unreadable, starting from seed data"
                );
                seed_state()
            }
        };

        Self::with_state(backend, state)
    }

    /// Wrap an existing state without touching storage.
    pub fn with_state(backend: B, state: CatalogState) -> Self {
        Self {
            backend,
            state,
            persist_error: None,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    pub fn next_id(&self) -> ProductId {
        self.state.next_id
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.state.get(id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Why the most recent write to storage failed, if it did.
    pub fn persist_error(&self) -> Option<&PersistenceError> {
        self.persist_error.as_ref()
    }

    pub fn last_persist_ok(&self) -> bool {
        self.persist_error.is_none()
    }

    /// Products visible under `filter`.
    pub fn visible(&self, filter: &FilterSpec) -> Vec<Product> {
        derive(&self.state.products, filter)
    }

    /// Price bounds of the full list.
    pub fn price_bounds(&self) -> PriceRange {
        price_bounds(&self.state.products)
    }

    /// Append a new product with the next id.
    ///
    /// Fails without touching the catalog once the id space is used up.
    pub fn create(&mut self, draft: ProductDraft) -> catalog_model::Result<Product> {
        let id = self.state.next_id;
        let next_id = id.next().ok_or(ModelError::IdSpaceExhausted(id))?;
        let product = draft.into_product(id);
        self.state.products.push(product.clone());
        self.state.next_id = next_id;
        debug!(%id, name = %product.name, "created product");
        self.persist();
        Ok(product)
    }

    /// Remove the product with `id`. Returns false if there was none.
    pub fn delete(&mut self, id: ProductId) -> bool {
        let Some(index) = self.state.position(id) else {
            debug!(%id, "delete ignored, no such product");
            return false;
        };
        self.state.products.remove(index);
        debug!(%id, "deleted product");
        self.persist();
        true
    }

    /// Replace the product whose id matches `product.id`.
    pub fn update(&mut self, product: Product) -> bool {
        let id = product.id;
        let Some(index) = self.state.position(id) else {
            debug!(%id, "update ignored, no such product");
            return false;
        };
        self.state.products[index] = product;
        debug!(%id, "updated product");
        self.persist();
        true
    }

    /// Flip availability. Returns the new value, or None if `id` is absent.
    pub fn toggle_availability(&mut self, id: ProductId) -> Option<bool> {
        let Some(index) = self.state.position(id) else {
            debug!(%id, "toggle ignored, no such product");
            return None;
        };
        let product = &mut self.state.products[index];
        product.available = !product.available;
        let available = product.available;
        debug!(%id, available, "toggled availability");
        self.persist();
        Some(available)
    }

    /// Write the full state. Failures are logged and kept for
    /// [`CatalogStore::persist_error`], not returned; the in-memory state
    /// stays authoritative.
    pub fn persist(&mut self) -> bool {
        match save_state(&mut self.backend, &self.state) {
            Ok(()) => {
                self.persist_error = None;
                true
            }
            Err(e) => {
                error!(
                    error = %e,
                    message = %e.user_message(),
                    suggestion = ?e.suggestion(),
                    "failed to persist catalog"
                );
                self.persist_error = Some(e);
                false
            }
        }
    }

    /// Drop stored data and go back to the seed catalog in place.
    pub fn reset(&mut self) {
        self.persist_error = None;
        if let Err(e) = clear_state(&mut self.backend) {
            warn!(error = %e, suggestion = ?e.suggestion(), "failed to clear stored catalog");
            self.persist_error = Some(e);
        }
        if let Err(e) = self.backend.remove(RESET_FLAG_KEY) {
            warn!(error = %e, "failed to clear reset flag");
            if self.persist_error.is_none() {
                self.persist_error = Some(e);
            }
        }
        self.state = seed_state();
        info!("catalog reset to seed data");
    }

    /// Leave the current session alone but start from seed data on the
    /// next [`CatalogStore::load`].
    pub fn request_reset(&mut self) -> bool {
        match set_reset_flag(&mut self.backend) {
            Ok(()) => {
                info!("reset requested for next start");
                true
            }
            Err(e) => {
                error!(error = %e, "failed to write reset flag");
                false
            }
        }
    }
}
