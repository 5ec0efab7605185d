//! Lenient field decoders for the inventory API.
//!
//! The API is loose about types: free-text fields sometimes arrive as numbers,
//! percentages as fractions, and any field may be `null`. Only the fields that
//! decide navigation (`userId`) are strict; everything else decodes to a
//! sensible value instead of failing the whole response.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::id::MobileId;

/// Any JSON value, bucketed by how it can be displayed.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Other(_) => None,
        }
    }

    fn into_int(self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(n),
            Self::Float(n) => round(n),
            Self::Text(text) => text.trim().parse::<f64>().ok().and_then(round),
            Self::Other(_) => None,
        }
    }
}

/// Nearest integer, saturating at the `i64` bounds. `None` for NaN and infinities.
#[allow(clippy::cast_possible_truncation)]
fn round(n: f64) -> Option<i64> {
    n.is_finite().then(|| n.round() as i64)
}

/// Deserialize `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text from a string or number. Anything else is `None`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// Like [`lenient_text`], with an empty string for missing values.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Integer code from an integer, a fraction (rounded) or a numeric string.
/// Anything else is the target's default.
pub fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<i64> + Default,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .and_then(Scalar::into_int)
        .map_or_else(T::default, T::from))
}

/// Non-negative count; negative or unreadable values are zero.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n: i64 = lenient_int(deserializer)?;
    Ok(u64::try_from(n).unwrap_or_default())
}

/// Item id from a string or number; blank or unreadable ids are `None`.
pub fn lenient_mobile_id<'de, D>(deserializer: D) -> Result<Option<MobileId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.and_then(MobileId::new))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "lenient_text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "lenient_int")]
        int: i64,
        #[serde(default, deserialize_with = "lenient_count")]
        count: u64,
    }

    fn decode(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_accepts_numbers() {
        assert_eq!(decode(r#"{"text": 9876543210}"#).text.as_deref(), Some("9876543210"));
        assert_eq!(decode(r#"{"text": 128}"#).text.as_deref(), Some("128"));
        assert_eq!(decode(r#"{"text": 6.1}"#).text.as_deref(), Some("6.1"));
        assert_eq!(decode(r#"{"text": "Blue"}"#).text.as_deref(), Some("Blue"));
    }

    #[test]
    fn test_text_drops_other_shapes() {
        assert_eq!(decode(r#"{"text": null}"#).text, None);
        assert_eq!(decode(r#"{"text": true}"#).text, None);
        assert_eq!(decode(r#"{"text": {"a": 1}}"#).text, None);
        assert_eq!(decode(r#"{"text": [1, 2]}"#).text, None);
        assert_eq!(decode("{}").text, None);
    }

    #[test]
    fn test_int_rounds_fractions_and_parses_strings() {
        assert_eq!(decode(r#"{"int": 87.5}"#).int, 88);
        assert_eq!(decode(r#"{"int": 87.4}"#).int, 87);
        assert_eq!(decode(r#"{"int": " 91 "}"#).int, 91);
        assert_eq!(decode(r#"{"int": "91%"}"#).int, 0);
        assert_eq!(decode(r#"{"int": null}"#).int, 0);
        assert_eq!(decode(r#"{"int": 1e300}"#).int, i64::MAX);
    }

    #[test]
    fn test_count_is_never_negative() {
        assert_eq!(decode(r#"{"count": 41}"#).count, 41);
        assert_eq!(decode(r#"{"count": -5}"#).count, 0);
        assert_eq!(decode(r#"{"count": "12"}"#).count, 12);
    }
}
