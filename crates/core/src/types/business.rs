//! Business identity resolved from a website name.

use serde::{Deserialize, Serialize};

use super::id::{RawId, UserId};
use super::wire::lenient_text;

/// Fallback logo shown when a business has none.
pub const DEFAULT_LOGO: &str = "https://cdn-icons-png.flaticon.com/512/3135/3135715.png";

/// The merchant record behind a website name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdentity {
    pub user_id: UserId,
    pub name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub mobile_number: Option<String>,
    pub logo: Option<String>,
}

impl BusinessIdentity {
    /// Both address lines joined with a comma, skipping blanks.
    #[must_use]
    pub fn address(&self) -> String {
        join_present(&[self.address1.as_deref(), self.address2.as_deref()])
    }

    #[must_use]
    pub fn state_name(&self) -> &str {
        self.state.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn country_name(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn contact(&self) -> &str {
        self.mobile_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Not Provided")
    }

    #[must_use]
    pub fn logo_url(&self) -> &str {
        self.logo
            .as_deref()
            .map(str::trim)
            .filter(|logo| super::mobile::is_web_url(logo))
            .unwrap_or(DEFAULT_LOGO)
    }
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|part| part.map(str::trim).filter(|p| !p.is_empty()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Response body of the user lookup endpoint.
///
/// Every field is optional on the wire; a response without a usable
/// `userId` means the website name is unknown. Display fields accept strings
/// or numbers and never fail the decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLookup {
    #[serde(default)]
    pub user_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address1: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address2: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub logo: Option<String>,
}

impl UserLookup {
    /// Convert into an identity, or `None` when no user id is present.
    #[must_use]
    pub fn into_identity(self) -> Option<BusinessIdentity> {
        let user_id = UserId::new(self.user_id?.into_string())?;
        Some(BusinessIdentity {
            user_id,
            name: self.name.unwrap_or_default(),
            address1: self.address1,
            address2: self.address2,
            state: self.state,
            country: self.country,
            mobile_number: self.mobile_number,
            logo: self.logo,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_user_id() {
        let lookup: UserLookup = serde_json::from_str(
            r#"{"userId": "42", "name": "Amrit Mobiles", "address1": "1 Main St",
                "address2": "", "state": "Punjab", "country": "India",
                "mobileNumber": null, "logo": null}"#,
        )
        .unwrap();

        let identity = lookup.into_identity().unwrap();
        assert_eq!(identity.user_id.as_str(), "42");
        assert_eq!(identity.address(), "1 Main St");
        assert_eq!(identity.contact(), "Not Provided");
        assert_eq!(identity.logo_url(), DEFAULT_LOGO);
    }

    #[test]
    fn test_lookup_with_numeric_contact_fields() {
        let lookup: UserLookup = serde_json::from_str(
            r#"{"userId": "42", "mobileNumber": 9876543210, "address1": 12,
                "state": {"code": "PB"}, "logo": false}"#,
        )
        .unwrap();

        let identity = lookup.into_identity().unwrap();
        assert_eq!(identity.user_id.as_str(), "42");
        assert_eq!(identity.contact(), "9876543210");
        assert_eq!(identity.address(), "12");
        assert_eq!(identity.state_name(), "");
        assert_eq!(identity.logo_url(), DEFAULT_LOGO);
    }

    #[test]
    fn test_lookup_with_numeric_user_id() {
        let lookup: UserLookup = serde_json::from_str(r#"{"userId": 42}"#).unwrap();
        assert_eq!(lookup.into_identity().unwrap().user_id.as_str(), "42");
    }

    #[test]
    fn test_empty_lookup_has_no_identity() {
        let lookup: UserLookup = serde_json::from_str("{}").unwrap();
        assert!(lookup.into_identity().is_none());

        let lookup: UserLookup = serde_json::from_str(r#"{"userId": ""}"#).unwrap();
        assert!(lookup.into_identity().is_none());

        let lookup: UserLookup = serde_json::from_str(r#"{"userId": null}"#).unwrap();
        assert!(lookup.into_identity().is_none());
    }
}
