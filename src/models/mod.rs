pub mod board;
pub mod card;
pub mod comment;
pub mod list;
pub(crate) mod wire;

use serde::de::DeserializeOwned;

use crate::{error::Error, result::Result};

/// Decodes every top-level JSON value in `body`, in order.
///
/// An empty (or whitespace only) body yields no values. Any malformed value
/// fails the whole decode and drops whatever was read before it.
pub(crate) fn decode_all<T>(body: &[u8]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// Decodes `body` and keeps the last value; a later document replaces an earlier one.
pub(crate) fn decode_last<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    decode_all(body)?.pop().ok_or(Error::EmptyBody)
}

/// Decodes `body` as a run of JSON arrays and concatenates their elements.
pub(crate) fn decode_flat<T>(body: &[u8]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let pages: Vec<Vec<T>> = decode_all(body)?;
    Ok(pages.into_iter().flatten().collect())
}

/// Reads a value that the service may send as `null`, using its default instead.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
