//! # RestEntity Trait
//!
//! The `RestEntity` trait is the contract every record type (User, Resource, Profile, …)
//! implements so that one generic [`RestClient`](crate::RestClient) can serve all of them.
//! The record names its base endpoint, exposes its id, and knows how to apply a tagged
//! field update to itself.
//!
//! # The new/existing invariant
//! A record whose id is `0` (or absent on the wire, which deserializes as `0`) has never
//! been stored and must go through `save`. A positive id means the backend already holds
//! it and it must go through `update`. [`RestEntity::is_new`] encodes that rule and
//! [`RestClient::persist`](crate::RestClient::persist) routes on it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use validator::Validate;

/// Identifier assigned by the backend. `0` marks a record that was never saved.
pub type RecordId = i64;

/// Trait that any record must implement to be served by [`RestClient`](crate::RestClient).
///
/// `Default` is the empty record a form starts from; `Validate` carries the field-level
/// required-ness rules.
pub trait RestEntity:
    Clone + Debug + Default + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// Path segment of the base endpoint, relative to the API root (e.g. `"user"`).
    const RESOURCE: &'static str;

    /// Tagged single-field update, one variant per editable field.
    type Field: Debug + Send + Sync;

    fn id(&self) -> RecordId;

    /// Returns the same record carrying the given id.
    fn with_id(self, id: RecordId) -> Self;

    /// Applies one field update in place.
    fn apply(&mut self, field: Self::Field);

    fn is_new(&self) -> bool {
        self.id() <= 0
    }
}
