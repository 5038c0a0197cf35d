use std::io::Write;

use anyhow::{Context, Result, bail};
use catalog_model::{ProductForm, ProductId, validate_draft};
use catalog_persistence::StorageBackend;
use catalog_query::{AvailabilityFilter, FilterSpec, PriceRange};
use catalog_store::CatalogStore;
use tracing::{debug, warn};

use crate::cli::{AddArgs, Command, EditArgs, ListArgs, ListFormatArg, ResetArgs};
use crate::config::Settings;
use crate::render::{
    EMPTY_CATALOG, NO_MATCHES, availability_label, bounds_line, found_line, product_detail,
    product_table,
};

/// How a successfully executed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The requested product does not exist.
    NotFound(ProductId),
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::NotFound(_) => 2,
        }
    }
}

/// Run one command against `store`, writing user-facing output to `out`.
pub fn execute<B, W>(
    command: &Command,
    store: &mut CatalogStore<B>,
    settings: &Settings,
    out: &mut W,
) -> Result<Status>
where
    B: StorageBackend,
    W: Write,
{
    match command {
        Command::List(args) => run_list(args, store, settings, out),
        Command::Show(args) => run_show(args.id, store, settings, out),
        Command::Add(args) => run_add(args, store, out),
        Command::Edit(args) => run_edit(args, store, out),
        Command::Delete(args) => run_delete(args.id, store, out),
        Command::Toggle(args) => run_toggle(args.id, store, out),
        Command::Bounds => {
            writeln!(out, "{}", bounds_line(&store.price_bounds()))?;
            Ok(Status::Success)
        }
        Command::Reset(args) => run_reset(args, store, out),
    }
}

/// Translate `list` flags into a filter over the current price bounds.
pub fn filter_from_args(args: &ListArgs, settings: &Settings, bounds: PriceRange) -> FilterSpec {
    let range = PriceRange::new(
        args.min_price.unwrap_or(bounds.min),
        args.max_price.unwrap_or(bounds.max),
    );
    FilterSpec::with_bounds(bounds)
        .search(args.search.clone().unwrap_or_default())
        .price_range(range)
        .availability(AvailabilityFilter {
            available: !args.hide_available,
            unavailable: !args.hide_unavailable,
        })
        .sorted_by(args.sort.unwrap_or(settings.default_sort))
}

/// Fail the command if the change it made did not reach storage.
///
/// The in-memory change is kept for the rest of the process, but a one-shot
/// command would lose it on exit.
fn ensure_saved<B: StorageBackend>(store: &CatalogStore<B>) -> Result<()> {
    let Some(error) = store.persist_error() else {
        return Ok(());
    };
    let mut message = format!("change not saved: {}", error.user_message());
    if let Some(suggestion) = error.suggestion() {
        message.push_str("\n  hint: ");
        message.push_str(&suggestion);
    }
    bail!(message)
}

fn run_list<B: StorageBackend, W: Write>(
    args: &ListArgs,
    store: &CatalogStore<B>,
    settings: &Settings,
    out: &mut W,
) -> Result<Status> {
    let bounds = store.price_bounds();
    let filter = filter_from_args(args, settings, bounds);
    debug!(
        search = %filter.search,
        min = filter.price_range.min,
        max = filter.price_range.max,
        sort = %filter.sort,
        active = filter.is_active(&bounds),
        "listing products"
    );
    let products = store.visible(&filter);

    if args.format == ListFormatArg::Json {
        let json = serde_json::to_string_pretty(&products).context("encode products")?;
        writeln!(out, "{json}")?;
        return Ok(Status::Success);
    }

    if store.products().is_empty() {
        writeln!(out, "{EMPTY_CATALOG}")?;
    } else if products.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
    } else {
        writeln!(out, "{}", found_line(products.len()))?;
        if !filter.search.is_empty() {
            writeln!(out, "Search: \"{}\"", filter.search)?;
        }
        writeln!(out, "{}", product_table(&products, settings.table_style))?;
    }
    Ok(Status::Success)
}

fn run_show<B: StorageBackend, W: Write>(
    id: ProductId,
    store: &CatalogStore<B>,
    settings: &Settings,
    out: &mut W,
) -> Result<Status> {
    let Some(product) = store.get(id) else {
        return Ok(Status::NotFound(id));
    };
    writeln!(out, "{}", product_detail(product, settings.table_style))?;
    Ok(Status::Success)
}

fn run_add<B: StorageBackend, W: Write>(
    args: &AddArgs,
    store: &mut CatalogStore<B>,
    out: &mut W,
) -> Result<Status> {
    let form = ProductForm {
        name: args.name.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        price: args.price.clone().unwrap_or_default(),
        image_url: args.image_url.clone().unwrap_or_default(),
        available: !args.unavailable,
    };
    let draft = validate_draft(&form).context("product not added")?;
    let product = store.create(draft).context("product not added")?;
    ensure_saved(store)?;
    writeln!(out, "Added product {}: {}", product.id, product.name)?;
    Ok(Status::Success)
}

fn run_edit<B: StorageBackend, W: Write>(
    args: &EditArgs,
    store: &mut CatalogStore<B>,
    out: &mut W,
) -> Result<Status> {
    let Some(current) = store.get(args.id) else {
        warn!(id = %args.id, "edit ignored, no such product");
        writeln!(out, "No product with id {}, nothing changed.", args.id)?;
        return Ok(Status::Success);
    };

    let mut form = ProductForm::from_product(current);
    if let Some(name) = &args.name {
        form.name.clone_from(name);
    }
    if let Some(description) = &args.description {
        form.description.clone_from(description);
    }
    if let Some(price) = &args.price {
        form.price.clone_from(price);
    }
    if let Some(image_url) = &args.image_url {
        form.image_url.clone_from(image_url);
    }
    if let Some(available) = args.available {
        form.available = available;
    }

    let draft = validate_draft(&form).context("product not saved")?;
    let product = draft.into_product(args.id);
    let name = product.name.clone();
    store.update(product);
    ensure_saved(store)?;
    writeln!(out, "Saved product {}: {name}", args.id)?;
    Ok(Status::Success)
}

fn run_delete<B: StorageBackend, W: Write>(
    id: ProductId,
    store: &mut CatalogStore<B>,
    out: &mut W,
) -> Result<Status> {
    if store.delete(id) {
        ensure_saved(store)?;
        writeln!(out, "Deleted product {id}")?;
    } else {
        warn!(%id, "delete ignored, no such product");
        writeln!(out, "No product with id {id}, nothing changed.")?;
    }
    Ok(Status::Success)
}

fn run_toggle<B: StorageBackend, W: Write>(
    id: ProductId,
    store: &mut CatalogStore<B>,
    out: &mut W,
) -> Result<Status> {
    match store.toggle_availability(id) {
        Some(available) => {
            ensure_saved(store)?;
            writeln!(out, "Product {id}: {}", availability_label(available))?;
        }
        None => {
            warn!(%id, "toggle ignored, no such product");
            writeln!(out, "No product with id {id}, nothing changed.")?;
        }
    }
    Ok(Status::Success)
}

fn run_reset<B: StorageBackend, W: Write>(
    args: &ResetArgs,
    store: &mut CatalogStore<B>,
    out: &mut W,
) -> Result<Status> {
    if args.on_next_start {
        if !store.request_reset() {
            bail!("could not schedule the reset");
        }
        writeln!(out, "The catalog will be reset on the next start.")?;
    } else {
        store.reset();
        ensure_saved(store)?;
        writeln!(
            out,
            "Catalog reset to the built-in {} products.",
            store.products().len()
        )?;
    }
    Ok(Status::Success)
}
