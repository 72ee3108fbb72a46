#![cfg(feature = "serde")]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::GameCode;

/// Serialize a wire code for Serde as its display code.
pub fn serialize<T, S>(wire: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Copy + Into<i32>,
    S: Serializer,
{
    let string = crate::to_display_code((*wire).into());
    serializer.serialize_str(&string)
}

/// Deserialize a wire code from Serde by parsing its display code.
pub fn deserialize<'a, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: From<i32>,
    D: Deserializer<'a>,
{
    use serde::de::Error;

    let encode = |string: String| crate::try_to_wire_code(string)
        .map_err(D::Error::custom);

    String::deserialize(deserializer)
        .and_then(encode)
        .map(T::from)
}

impl Serialize for GameCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self, serializer)
    }
}

impl<'a> Deserialize<'a> for GameCode {
    fn deserialize<D: Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer)
    }
}
