//! Thread-safe handle around a [`CatalogIndex`].

use std::sync::{Arc, Mutex, MutexGuard};

use common::{CatalogError, CatalogResult};
use types::{Record, RecordId};

use crate::{CatalogIndex, Field};

/// Cloneable handle that serializes every operation behind one lock.
///
/// The four structures inside the index must change as a set, so the whole
/// index is guarded rather than each structure.
#[derive(Clone, Debug, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<CatalogIndex>>,
}

impl SharedCatalog {
    pub fn new(index: CatalogIndex) -> Self {
        Self {
            inner: Arc::new(Mutex::new(index)),
        }
    }

    /// Run `f` against the index while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&CatalogIndex) -> R) -> CatalogResult<R> {
        let guard = self.lock()?;
        Ok(f(&*guard))
    }

    /// Run `f` with mutable access while holding the lock.
    ///
    /// Use this to group several mutations, e.g. a remove followed by an add.
    pub fn write<R>(&self, f: impl FnOnce(&mut CatalogIndex) -> R) -> CatalogResult<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut *guard))
    }

    pub fn add(&self, record: Record) -> CatalogResult<()> {
        self.lock()?.add(record)
    }

    pub fn remove(&self, id: RecordId) -> CatalogResult<bool> {
        Ok(self.lock()?.remove(id))
    }

    pub fn replace(&self, record: Record) -> CatalogResult<bool> {
        self.lock()?.replace(record)
    }

    pub fn get_by_id(&self, id: RecordId) -> CatalogResult<Arc<Record>> {
        self.lock()?.get_by_id(id)
    }

    pub fn search(&self, field: Field, value: &str) -> CatalogResult<Vec<Arc<Record>>> {
        Ok(self.lock()?.search(field, value))
    }

    pub fn search_by_title_partial(&self, partial: &str) -> CatalogResult<Vec<Arc<Record>>> {
        Ok(self.lock()?.search_by_title_partial(partial))
    }

    pub fn search_by_year_range(&self, min: i32, max: i32) -> CatalogResult<Vec<Arc<Record>>> {
        Ok(self.lock()?.search_by_year_range(min, max))
    }

    pub fn all_sorted_by_title(&self) -> CatalogResult<Vec<Arc<Record>>> {
        Ok(self.lock()?.all_sorted_by_title())
    }

    pub fn all_records(&self) -> CatalogResult<Vec<Arc<Record>>> {
        Ok(self.lock()?.all_records())
    }

    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, CatalogIndex>> {
        self.inner.lock().map_err(|_| CatalogError::LockPoisoned)
    }
}

impl From<CatalogIndex> for SharedCatalog {
    fn from(index: CatalogIndex) -> Self {
        Self::new(index)
    }
}
