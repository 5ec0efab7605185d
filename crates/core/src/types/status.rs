//! Status enums for inventory items and their badges.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a badge scheme name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid badge scheme: {0} (expected `vivid` or `muted`)")]
pub struct BadgeSchemeError(pub String);

/// Product status as reported by the inventory API.
///
/// The API sends a numeric code (0-4). Unknown codes display as
/// [`ProductStatus::Warranty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "i64", into = "i64")]
pub enum ProductStatus {
    #[default]
    Warranty,
    OutOfWarranty,
    Damaged,
    Lost,
    Stolen,
}

impl ProductStatus {
    /// All statuses in code order.
    pub const ALL: [Self; 5] = [
        Self::Warranty,
        Self::OutOfWarranty,
        Self::Damaged,
        Self::Lost,
        Self::Stolen,
    ];

    /// Numeric code used by the API.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Warranty => 0,
            Self::OutOfWarranty => 1,
            Self::Damaged => 2,
            Self::Lost => 3,
            Self::Stolen => 4,
        }
    }

    /// Human-readable badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warranty => "Warranty",
            Self::OutOfWarranty => "Out of Warranty",
            Self::Damaged => "Damaged",
            Self::Lost => "Lost",
            Self::Stolen => "Stolen",
        }
    }

    /// Badge background colour for the given scheme.
    #[must_use]
    pub const fn color(self, scheme: BadgeScheme) -> &'static str {
        match scheme {
            BadgeScheme::Vivid => match self {
                Self::Warranty => "#22c55e",
                Self::OutOfWarranty => "#f59e0b",
                Self::Damaged => "#ef4444",
                Self::Lost => "#6b7280",
                Self::Stolen => "#dc2626",
            },
            BadgeScheme::Muted => match self {
                Self::Warranty => "#4d7c0f",
                Self::OutOfWarranty => "#b45309",
                Self::Damaged => "#b91c1c",
                Self::Lost => "#52525b",
                Self::Stolen => "#7f1d1d",
            },
        }
    }
}

impl From<i64> for ProductStatus {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::OutOfWarranty,
            2 => Self::Damaged,
            3 => Self::Lost,
            4 => Self::Stolen,
            _ => Self::Warranty,
        }
    }
}

impl From<ProductStatus> for i64 {
    fn from(status: ProductStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour scheme for status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BadgeScheme {
    #[default]
    Vivid,
    Muted,
}

impl std::fmt::Display for BadgeScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vivid => write!(f, "vivid"),
            Self::Muted => write!(f, "muted"),
        }
    }
}

impl std::str::FromStr for BadgeScheme {
    type Err = BadgeSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vivid" => Ok(Self::Vivid),
            "muted" => Ok(Self::Muted),
            _ => Err(BadgeSchemeError(s.to_string())),
        }
    }
}

/// Physical condition of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    /// Interpret the API's free-form condition field.
    ///
    /// `"new"` (any case) is new, any other non-blank value is used.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            None
        } else if raw.eq_ignore_ascii_case("new") {
            Some(Self::New)
        } else {
            Some(Self::Used)
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        let labels: Vec<_> = (0..5).map(|c| ProductStatus::from(c).label()).collect();
        assert_eq!(
            labels,
            ["Warranty", "Out of Warranty", "Damaged", "Lost", "Stolen"]
        );
    }

    #[test]
    fn test_unknown_status_falls_back_to_warranty() {
        assert_eq!(ProductStatus::from(9), ProductStatus::Warranty);
        assert_eq!(ProductStatus::from(-1), ProductStatus::Warranty);
    }

    #[test]
    fn test_status_deserializes_from_code() {
        let status: ProductStatus = serde_json::from_str("3").unwrap();
        assert_eq!(status, ProductStatus::Lost);
        assert_eq!(serde_json::to_string(&status).unwrap(), "3");
    }

    #[test]
    fn test_schemes_differ() {
        for status in ProductStatus::ALL {
            assert_ne!(
                status.color(BadgeScheme::Vivid),
                status.color(BadgeScheme::Muted)
            );
        }
    }

    #[test]
    fn test_badge_scheme_parse() {
        assert_eq!("Muted".parse::<BadgeScheme>().unwrap(), BadgeScheme::Muted);
        assert!("neon".parse::<BadgeScheme>().is_err());
    }

    #[test]
    fn test_condition_from_raw() {
        assert_eq!(Condition::from_raw(Some("NEW")), Some(Condition::New));
        assert_eq!(Condition::from_raw(Some("refurbished")), Some(Condition::Used));
        assert_eq!(Condition::from_raw(Some(" ")), None);
        assert_eq!(Condition::from_raw(None), None);
    }
}
