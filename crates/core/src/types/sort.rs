//! Sort order for inventory listings.

use serde::{Deserialize, Serialize};

/// Error returned when a sort value is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort order: {0}")]
pub struct SortByError(pub String);

/// Sort order accepted by the listing endpoint.
///
/// The wire value is the display label, arrows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    #[serde(rename = "Price ↑")]
    PriceAsc,
    #[serde(rename = "Price ↓")]
    PriceDesc,
    #[serde(rename = "Name A-Z")]
    NameAsc,
    #[serde(rename = "Name Z-A")]
    NameDesc,
}

impl SortBy {
    /// Options in the order the sort control lists them.
    pub const ALL: [Self; 6] = [
        Self::Newest,
        Self::Oldest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// Wire and display value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::PriceAsc => "Price ↑",
            Self::PriceDesc => "Price ↓",
            Self::NameAsc => "Name A-Z",
            Self::NameDesc => "Name Z-A",
        }
    }

    /// Parse a URL value, falling back to the default for missing or unknown input.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortBy {
    type Err = SortByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| SortByError(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_option() {
        for option in SortBy::ALL {
            assert_eq!(option.as_str().parse::<SortBy>().unwrap(), option);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_newest() {
        assert_eq!(SortBy::parse_or_default(Some("Cheapest")), SortBy::Newest);
        assert_eq!(SortBy::parse_or_default(None), SortBy::Newest);
        assert_eq!(SortBy::parse_or_default(Some("Oldest")), SortBy::Oldest);
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        assert_eq!(
            serde_json::to_string(&SortBy::PriceDesc).unwrap(),
            "\"Price ↓\""
        );
        let parsed: SortBy = serde_json::from_str("\"Name Z-A\"").unwrap();
        assert_eq!(parsed, SortBy::NameDesc);
    }
}
