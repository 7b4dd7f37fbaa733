use std::collections::HashMap;

use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Reads a page-injected global off `window`. Pages that don't carry the
/// value (or carry something unparseable) yield `None` and the unit that
/// asked stays inert.
pub fn injected<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}

/// Post/claim totals for the home-page donut, injected as `__DONUT_DATA__`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct DonutCounts {
    #[serde(default)]
    pub found: u32,
    #[serde(default)]
    pub lost: u32,
}

/// One reported item as grouped under a map location. Older rows can miss
/// any field except the title.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapItem {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date_found: String,
    #[serde(default)]
    pub location_found: String,
}

/// Location id -> items reported there, injected as `__MAP_ITEMS__`.
pub type MapItemsIndex = HashMap<String, Vec<MapItem>>;

/// A clickable pin on the campus map. Coordinates are percentages of the
/// map area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPin {
    pub id: &'static str,
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
}

pub const CAMPUS_PINS: &[MapPin] = &[
    MapPin { id: "softball-field", name: "Softball Field", x: 25.0, y: 12.0 },
    MapPin { id: "raider-stadium", name: "Raider Stadium", x: 25.0, y: 32.0 },
    MapPin { id: "stadium-entrance", name: "Stadium Entrance", x: 42.0, y: 34.0 },
    MapPin { id: "practice-field", name: "Practice Field", x: 42.0, y: 42.0 },
    MapPin { id: "tennis", name: "Tennis Courts", x: 65.0, y: 39.0 },
    MapPin { id: "baseball-field", name: "Baseball Field", x: 22.0, y: 58.0 },
    MapPin { id: "band", name: "Band Room", x: 40.0, y: 57.0 },
    MapPin { id: "gym", name: "Gym", x: 50.0, y: 60.0 },
    MapPin { id: "fine-arts", name: "Fine Arts", x: 50.0, y: 74.0 },
    MapPin { id: "main-entrance", name: "Main Entrance", x: 54.0, y: 66.0 },
    MapPin { id: "1000-hall", name: "1000 Hall", x: 65.0, y: 65.0 },
    MapPin { id: "2000-hall", name: "2000 Hall", x: 60.0, y: 75.0 },
    MapPin { id: "3000-hall", name: "3000 Hall", x: 67.0, y: 75.0 },
    MapPin { id: "4000-hall", name: "4000 Hall", x: 73.0, y: 75.0 },
    MapPin { id: "media-center", name: "Media Center", x: 62.0, y: 62.0 },
    MapPin { id: "cafeteria", name: "Cafeteria", x: 72.0, y: 62.0 },
    MapPin { id: "5000-hall", name: "5000 Hall", x: 90.0, y: 63.0 },
    MapPin { id: "student-parking", name: "Student Parking", x: 30.0, y: 80.0 },
    MapPin { id: "staff-parking", name: "Staff Parking", x: 45.0, y: 85.0 },
    MapPin { id: "visitor-parking", name: "Visitor Parking", x: 54.0, y: 88.0 },
    MapPin { id: "student-staff-parking", name: "Student/Staff Parking", x: 85.0, y: 79.0 },
    MapPin { id: "bus-lane", name: "Bus Lane", x: 85.0, y: 70.0 },
    MapPin { id: "unknown", name: "Other / Unknown", x: 5.0, y: 5.0 },
];

/// Detail fields captured from a browse-card trigger at click time. Every
/// field is optional; the accessors below encode the display fallbacks, and
/// an empty attribute counts the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    pub claim_url: Option<String>,
    pub image: Option<String>,
}

const FIELD_PLACEHOLDER: &str = "\u{2014}"; // em-dash

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl ItemDetails {
    pub fn from_element(el: &Element) -> Self {
        Self {
            title: el.get_attribute("data-title"),
            description: el.get_attribute("data-description"),
            category: el.get_attribute("data-category"),
            location: el.get_attribute("data-location"),
            date: el.get_attribute("data-date"),
            status: el.get_attribute("data-status"),
            claim_url: el.get_attribute("data-claim-url"),
            image: el.get_attribute("data-image"),
        }
    }

    pub fn title_text(&self) -> &str {
        present(&self.title).unwrap_or("Item details")
    }

    pub fn description_text(&self) -> &str {
        present(&self.description).unwrap_or("")
    }

    pub fn category_text(&self) -> &str {
        present(&self.category).unwrap_or(FIELD_PLACEHOLDER)
    }

    pub fn location_text(&self) -> &str {
        present(&self.location).unwrap_or(FIELD_PLACEHOLDER)
    }

    pub fn date_text(&self) -> &str {
        present(&self.date).unwrap_or(FIELD_PLACEHOLDER)
    }

    pub fn status_raw(&self) -> &str {
        present(&self.status).unwrap_or("")
    }

    pub fn claim_href(&self) -> &str {
        present(&self.claim_url).unwrap_or("#")
    }

    pub fn image_src(&self) -> Option<&str> {
        present(&self.image)
    }

    pub fn image_alt(&self) -> String {
        format!("Photo of {}", present(&self.title).unwrap_or("item"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donut_counts_default_missing_fields_to_zero() {
        let counts: DonutCounts = serde_json::from_str(r#"{"found": 7}"#).unwrap();
        assert_eq!(counts, DonutCounts { found: 7, lost: 0 });
    }

    #[test]
    fn map_item_tolerates_sparse_rows() {
        let item: MapItem = serde_json::from_str(r#"{"title": "Red Wallet"}"#).unwrap();
        assert_eq!(item.title, "Red Wallet");
        assert_eq!(item.category, "");
        assert_eq!(item.date_found, "");
        assert_eq!(item.location_found, "");
    }

    #[test]
    fn map_index_parses_location_groups() {
        let index: MapItemsIndex = serde_json::from_str(
            r#"{"loc1": [], "loc2": [{"title": "Red Wallet", "category": "Wallet",
                "date_found": "2024-01-01", "location_found": "Library"}]}"#,
        )
        .unwrap();
        assert!(index["loc1"].is_empty());
        assert_eq!(index["loc2"][0].category, "Wallet");
        // Missing ids read as empty, same as an empty group.
        assert!(index.get("loc3").map(Vec::as_slice).unwrap_or(&[]).is_empty());
    }

    #[test]
    fn pin_ids_are_unique() {
        let mut ids: Vec<_> = CAMPUS_PINS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CAMPUS_PINS.len());
    }

    #[test]
    fn pin_table_covers_every_campus_location() {
        assert_eq!(CAMPUS_PINS.len(), 23);
        assert!(CAMPUS_PINS.iter().any(|p| p.id == "unknown"));
    }

    #[test]
    fn details_fall_back_field_by_field() {
        let details = ItemDetails {
            title: Some("Red Wallet".into()),
            description: None,
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(details.title_text(), "Red Wallet");
        assert_eq!(details.description_text(), "");
        assert_eq!(details.category_text(), "\u{2014}");
        assert_eq!(details.location_text(), "\u{2014}");
        assert_eq!(details.date_text(), "\u{2014}");
        assert_eq!(details.claim_href(), "#");
        assert_eq!(details.image_src(), None);
        assert_eq!(details.image_alt(), "Photo of Red Wallet");
    }

    #[test]
    fn empty_details_use_generic_title() {
        let details = ItemDetails::default();
        assert_eq!(details.title_text(), "Item details");
        assert_eq!(details.image_alt(), "Photo of item");
        assert_eq!(details.status_raw(), "");
    }
}
