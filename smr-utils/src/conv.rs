//! The conv module provides several methods for type conversion, mostly
//! `Vec<u8>` from/to others.

use base64::Engine;
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `buffer` to a base64-string. Only useful with serde.
/// Can be applied to struct fields via:
/// `#[serde(serialize_with = "ser_vec_u8_to_str", deserialize_with = "de_str_to_vec_u8")]`
pub fn ser_vec_u8_to_str<T, S>(buffer: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(buffer.as_ref()))
}

/// Deserializes a string formatted in base64 to a `Vec<u8>`. Only useful with serde.
pub fn de_str_to_vec_u8<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer).and_then(|string| {
        base64::engine::general_purpose::STANDARD
            .decode(string.as_bytes())
            .map_err(|err| Error::custom(err.to_string()))
    })
}

use encoding::all::UTF_8;
use encoding::{DecoderTrap, Encoding};
/// Prints a `Vec<u8>` as a UTF-8 string, escaping unprintable bytes.
pub fn vec_u8_to_string(bytes: &[u8]) -> String {
    UTF_8
        .decode(bytes, DecoderTrap::Replace)
        .expect("cannot escape invalid byte")
}

/// Converts a `u32` to a little-endian `Vec<u8>` of 4 bytes.
pub fn u32_to_vec(int: u32) -> Vec<u8> {
    let mut result = Vec::new();
    result.push((int % 256) as u8);
    let mut int = int / 256;
    result.push((int % 256) as u8);
    int /= 256;
    result.push((int % 256) as u8);
    int /= 256;
    result.push(int as u8);
    result
}
