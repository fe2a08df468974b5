//! serde integration for host structures that derive their codecs.
//!
//! Unset serializes as `null`; pair the field with
//! `#[serde(skip_serializing_if = "Settable::is_unset")]` to omit it instead.
//! Deserialization goes through `Option<T>`, so both `null` and a missing key
//! produce an unset container.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Settable;

impl<T: Serialize> Serialize for Settable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Settable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Settable::<T>::from)
    }
}
