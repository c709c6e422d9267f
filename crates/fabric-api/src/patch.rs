// ── Optional patch fields ──
//
// A patch body must tell "not sent" apart from "sent". `Option` alone
// collapses that distinction once a default is applied, so every patch
// field carries this wrapper instead. A JSON `null` is treated as absent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single field of a partial-update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchField<T> {
    /// The caller did not send the field.
    Absent,
    /// The caller sent the field with this value.
    Present(T),
}

impl<T> PatchField<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Present(v) => Some(v),
        }
    }
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<PatchField<T>> for Option<T> {
    fn from(value: PatchField<T>) -> Self {
        value.into_option()
    }
}

impl<T: Serialize> Serialize for PatchField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Present(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatchField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
