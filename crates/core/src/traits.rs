//! Core trait definitions
//!
//! [`Collection`] is the seam between the CRUD layer and persistence: anything
//! that can load a whole ordered list of one record kind and replace it
//! wholesale. The JSON-file stores implement it; tests can substitute their own.

use crate::error::Result;
use crate::records::Record;

/// A whole-collection load/save target for one record kind
///
/// # Contract
///
/// - `load` returns the records in stored order, or fails without side effects.
/// - `save` replaces the stored collection with `items`, in order. On failure
///   the previously stored collection is left intact.
pub trait Collection {
    /// Record kind held by this collection
    type Item: Record;

    /// Read and validate the entire collection
    fn load(&self) -> Result<Vec<Self::Item>>;

    /// Validate and write the entire collection
    fn save(&self, items: &[Self::Item]) -> Result<()>;
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn load(&self) -> Result<Vec<Self::Item>> {
        (**self).load()
    }

    fn save(&self, items: &[Self::Item]) -> Result<()> {
        (**self).save(items)
    }
}
