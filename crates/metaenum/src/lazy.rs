//! Build-once storage for tables.
//!
//! Each declared enum keeps its table in a `static LazyTable`. The first
//! caller of [`LazyTable::get`] runs the builder; concurrent first callers
//! block until that single build finishes and then share its result. A
//! builder that panics leaves the cell empty, so a half-built table can
//! never be observed.

use once_cell::sync::OnceCell;

use crate::table::MetaEnumTable;

/// A table built on first access and shared for the rest of the process.
pub struct LazyTable<V: 'static> {
    cell: OnceCell<MetaEnumTable<'static, V>>,
    init: fn() -> MetaEnumTable<'static, V>,
}

impl<V: 'static> LazyTable<V> {
    pub const fn new(init: fn() -> MetaEnumTable<'static, V>) -> Self {
        LazyTable {
            cell: OnceCell::new(),
            init,
        }
    }

    /// Return the table, building it if this is the first access.
    #[inline]
    pub fn get(&self) -> &MetaEnumTable<'static, V> {
        self.cell.get_or_init(self.init)
    }

    /// Whether the table has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<V: 'static> std::fmt::Debug for LazyTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyTable")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
