//! Keyed CRUD over any [`Collection`]
//!
//! Two layers:
//!
//! - List helpers (`find_by_key`, `ensure_absent`, `replace_by_key`,
//!   `remove_by_key`) work on an in-memory `Vec` and take the key accessor
//!   and error label as arguments. They never touch the disk.
//! - `list`/`get`/`create`/`update`/`delete` wrap a collection: load fresh,
//!   apply one helper, save the whole list. Key and label come from
//!   [`Record::key`] and [`Record::LABEL`].
//!
//! A failed check returns before `save` is called, so the file on disk is
//! left exactly as it was.

use rackstore_core::{Collection, Error, Record, Result};
use tracing::info;

/// First element whose key equals `key`
pub fn find_by_key<'a, T, K>(items: &'a [T], key: &str, key_of: K) -> Option<&'a T>
where
    K: Fn(&T) -> &str,
{
    items.iter().find(|item| key_of(*item) == key)
}

/// Fail with `AlreadyExists` if any element already uses `key`
pub fn ensure_absent<T, K>(items: &[T], key: &str, key_of: K, label: &'static str) -> Result<()>
where
    K: Fn(&T) -> &str,
{
    if find_by_key(items, key, key_of).is_some() {
        return Err(Error::AlreadyExists {
            label,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Substitute the element whose key matches `replacement`, keeping its position
///
/// Fails with `NotFound` if no element matched.
pub fn replace_by_key<T, K>(
    items: Vec<T>,
    replacement: T,
    key_of: K,
    label: &'static str,
) -> Result<Vec<T>>
where
    K: Fn(&T) -> &str,
{
    let position = items
        .iter()
        .position(|item| key_of(item) == key_of(&replacement));
    match position {
        Some(index) => {
            let mut items = items;
            items[index] = replacement;
            Ok(items)
        }
        None => Err(Error::NotFound {
            label,
            key: key_of(&replacement).to_string(),
        }),
    }
}

/// Drop the element whose key equals `key`; the rest keep their order
///
/// Fails with `NotFound` if no element matched.
pub fn remove_by_key<T, K>(
    items: Vec<T>,
    key: &str,
    key_of: K,
    label: &'static str,
) -> Result<Vec<T>>
where
    K: Fn(&T) -> &str,
{
    let before = items.len();
    let remaining: Vec<T> = items
        .into_iter()
        .filter(|item| key_of(item) != key)
        .collect();
    if remaining.len() == before {
        return Err(Error::NotFound {
            label,
            key: key.to_string(),
        });
    }
    Ok(remaining)
}

/// Every record, in file order
pub fn list<C: Collection>(collection: &C) -> Result<Vec<C::Item>> {
    collection.load()
}

/// The record with primary key `key`
pub fn get<C: Collection>(collection: &C, key: &str) -> Result<C::Item> {
    let items = collection.load()?;
    find_by_key(&items, key, C::Item::key)
        .cloned()
        .ok_or_else(|| Error::NotFound {
            label: C::Item::LABEL,
            key: key.to_string(),
        })
}

/// Append `record`; its key must not be in use
pub fn create<C: Collection>(collection: &C, record: C::Item) -> Result<C::Item> {
    let mut items = collection.load()?;
    ensure_absent(&items, record.key(), C::Item::key, C::Item::LABEL)?;
    items.push(record.clone());
    collection.save(&items)?;

    info!(target: "rackstore::crud", label = C::Item::LABEL, key = record.key(), "Created record");
    Ok(record)
}

/// Replace the record with the same key as `record`, in place
pub fn update<C: Collection>(collection: &C, record: C::Item) -> Result<C::Item> {
    let items = collection.load()?;
    let items = replace_by_key(items, record.clone(), C::Item::key, C::Item::LABEL)?;
    collection.save(&items)?;

    info!(target: "rackstore::crud", label = C::Item::LABEL, key = record.key(), "Updated record");
    Ok(record)
}

/// Remove the record with primary key `key`
pub fn delete<C: Collection>(collection: &C, key: &str) -> Result<()> {
    let items = collection.load()?;
    let items = remove_by_key(items, key, C::Item::key, C::Item::LABEL)?;
    collection.save(&items)?;

    info!(target: "rackstore::crud", label = C::Item::LABEL, key, "Deleted record");
    Ok(())
}
