use crate::Result;

/// Key under which the serialized catalog is stored.
pub const STATE_KEY: &str = "product_catalog_data";

/// Key of the one-shot "reset on next start" flag.
pub const RESET_FLAG_KEY: &str = "product_catalog_reset_flag";

/// Value written to [`RESET_FLAG_KEY`] when a reset is pending.
pub const RESET_FLAG_VALUE: &str = "true";

/// Key/value text storage the catalog store persists through.
///
/// Implementations must treat a missing key as `Ok(None)` on read and as a
/// successful no-op on remove.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
