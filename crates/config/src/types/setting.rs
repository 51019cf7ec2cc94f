//! Tri-state optional values.
//!
//! Responsibilities:
//! - Distinguish "never set" from an explicit value, including explicit
//!   `false`, so consumers can tell "inherit the default" apart from
//!   "explicitly disabled".
//!
//! Invariants:
//! - `Setting::Unset` never compares equal to `Setting::Set(_)`.
//! - A field holding a `Setting` is omitted from serialized output when
//!   unset (callers pair it with `skip_serializing_if = "Setting::is_unset"`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is either explicitly set or not set at all.
///
/// This replaces the nilable-pointer idiom: `Unset` means the field was
/// never touched, while `Set(false)` is a deliberate negative choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Setting<T> {
    /// The field was never set; consumers apply their own default.
    #[default]
    Unset,
    /// The field carries an explicit value.
    Set(T),
}

impl<T> Setting<T> {
    /// Returns true if no value has been set.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns true if an explicit value is present.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// The explicit value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// The explicit value, or `default` when unset.
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self {
            Self::Set(value) => value.clone(),
            Self::Unset => default,
        }
    }

    /// Store an explicit value.
    pub fn set(&mut self, value: T) {
        *self = Self::Set(value);
    }

    /// Return the field to the unset state.
    pub fn clear(&mut self) {
        *self = Self::Unset;
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Setting<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
