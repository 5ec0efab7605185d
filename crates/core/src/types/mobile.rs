//! Inventory items and listing pages.

use serde::{Deserialize, Serialize};

use super::id::MobileId;
use super::status::{Condition, ProductStatus};
use super::wire::{
    lenient_count, lenient_int, lenient_mobile_id, lenient_string, lenient_text, null_as_default,
};

/// Returns true when `url` is an absolute `http` or `https` URL.
///
/// Image sources rendered into the page or passed back through fragment
/// requests must pass this check.
#[must_use]
pub fn is_web_url(url: &str) -> bool {
    url::Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}

/// A single image attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileMedia {
    /// Full-size image URL.
    #[serde(default, deserialize_with = "lenient_string")]
    pub original: String,
}

/// One tracked device in a business's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileItem {
    /// Missing on some records; cards then fall back to the list position.
    #[serde(default, deserialize_with = "lenient_mobile_id")]
    pub id: Option<MobileId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub storage: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub product_status: ProductStatus,
    /// Battery health in percent, rounded. Clamped by [`MobileItem::battery_percent`].
    #[serde(default, deserialize_with = "lenient_int")]
    pub battery_health: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile_medias: Vec<MobileMedia>,
}

impl MobileItem {
    /// Battery health clamped to 0..=100.
    #[must_use]
    pub fn battery_percent(&self) -> u8 {
        u8::try_from(self.battery_health.clamp(0, 100)).unwrap_or_default()
    }

    #[must_use]
    pub fn condition(&self) -> Option<Condition> {
        Condition::from_raw(self.condition.as_deref())
    }

    /// Image URLs in display order, skipping anything that is not a web URL.
    #[must_use]
    pub fn media_urls(&self) -> Vec<String> {
        self.mobile_medias
            .iter()
            .map(|media| media.original.trim())
            .filter(|url| is_web_url(url))
            .map(str::to_owned)
            .collect()
    }

    /// `storage - color`, with `N/A` for missing parts.
    #[must_use]
    pub fn spec_line(&self) -> String {
        fn or_na(value: Option<&String>) -> &str {
            value
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .unwrap_or("N/A")
        }
        format!(
            "{} - {}",
            or_na(self.storage.as_ref()),
            or_na(self.color.as_ref())
        )
    }
}

/// One page of a business's inventory, as returned by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobiles: Vec<MobileItem>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_count: u64,
}

impl InventoryPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mobiles.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let item: MobileItem = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "iPhone 13",
                "storage": "128GB",
                "color": "Blue",
                "productStatus": 2,
                "batteryHealth": 87,
                "condition": "new",
                "mobileMedias": [{"original": "https://img.example.com/a.jpg"}]
            }"#,
        )
        .unwrap();

        assert_eq!(item.id.as_ref().map(MobileId::as_str), Some("7"));
        assert_eq!(item.product_status, ProductStatus::Damaged);
        assert_eq!(item.battery_percent(), 87);
        assert_eq!(item.condition(), Some(Condition::New));
        assert_eq!(item.media_urls(), ["https://img.example.com/a.jpg"]);
        assert_eq!(item.spec_line(), "128GB - Blue");
    }

    #[test]
    fn test_deserialize_sparse_item() {
        let item: MobileItem = serde_json::from_str(
            r#"{"id": "x1", "name": null, "productStatus": null, "mobileMedias": null}"#,
        )
        .unwrap();

        assert_eq!(item.name, "");
        assert_eq!(item.product_status, ProductStatus::Warranty);
        assert!(item.mobile_medias.is_empty());
        assert_eq!(item.spec_line(), "N/A - N/A");
        assert_eq!(item.condition(), None);
    }

    #[test]
    fn test_loosely_typed_item_still_decodes() {
        let item: MobileItem = serde_json::from_str(
            r#"{"batteryHealth": 87.5, "storage": 128, "color": 7, "productStatus": "3",
                "condition": false, "mobileMedias": [{"original": null}]}"#,
        )
        .unwrap();

        assert_eq!(item.id, None);
        assert_eq!(item.battery_percent(), 88);
        assert_eq!(item.spec_line(), "128 - 7");
        assert_eq!(item.product_status, ProductStatus::Lost);
        assert_eq!(item.condition(), None);
        assert!(item.media_urls().is_empty());
    }

    #[test]
    fn test_page_with_odd_item_is_not_an_error() {
        let page: InventoryPage = serde_json::from_str(
            r#"{"mobiles": [{"id": 1, "name": "Pixel 7"}, {"batteryHealth": 87.5, "storage": 128}],
                "totalCount": 2.0}"#,
        )
        .unwrap();

        assert_eq!(page.mobiles.len(), 2);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_blank_id_is_missing() {
        let item: MobileItem = serde_json::from_str(r#"{"id": "  "}"#).unwrap();
        assert_eq!(item.id, None);
    }

    #[test]
    fn test_battery_is_clamped() {
        let mut item: MobileItem = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        item.battery_health = 140;
        assert_eq!(item.battery_percent(), 100);
        item.battery_health = -3;
        assert_eq!(item.battery_percent(), 0);
    }

    #[test]
    fn test_media_urls_skip_non_web_sources() {
        let item: MobileItem = serde_json::from_str(
            r#"{"id": 1, "mobileMedias": [
                {"original": "javascript:alert(1)"},
                {"original": "not a url"},
                {"original": "http://img.example.com/b.png"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(item.media_urls(), ["http://img.example.com/b.png"]);
    }

    #[test]
    fn test_page_defaults() {
        let page: InventoryPage = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);

        let page: InventoryPage =
            serde_json::from_str(r#"{"mobiles": null, "totalCount": null}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("https://cdn.example.com/x.jpg"));
        assert!(!is_web_url("data:image/png;base64,AAAA"));
        assert!(!is_web_url("/relative.png"));
    }
}
