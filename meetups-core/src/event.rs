//! Event records as exchanged with the events API.
//!
//! The API owns these records; the client only reads them, posts new ones
//! and deletes them by id. Fields other than `title` are optional and often
//! sent as empty strings, so accessors treat "" the same as absent.

use serde::{Deserialize, Deserializer, Serialize};

use crate::time_format::{display_line, format_date, format_time};

/// Image shown wherever an event has no image of its own, or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/thumb-images/placeholder.jpg";

/// A board game meetup event (as returned by the API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server-assigned identifier, used for deletes
    #[serde(rename = "_id", alias = "id", deserialize_with = "loose_string")]
    pub id: String,
    /// URL-safe identifier, used for detail lookups
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Date-only value, e.g. "2025-07-14"
    #[serde(default)]
    pub date: Option<String>,
    /// Start time in any of the encodings `format_time` understands
    #[serde(default, deserialize_with = "loose_optional_string")]
    pub time: Option<String>,
    /// Large image for the detail view
    #[serde(default)]
    pub image: Option<String>,
    /// Thumbnail for list cards
    #[serde(default)]
    pub image_small: Option<String>,
    /// Image for the preview modal (typically a map screenshot)
    #[serde(default)]
    pub modal_image: Option<String>,
}

impl Event {
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    /// Time as it should be displayed (e.g. "7:00 PM"), or "" when unset.
    pub fn time_display(&self) -> String {
        format_time(self.time.as_deref(), self.date.as_deref())
    }

    /// Date as it should be displayed (e.g. "Jul 14, 2025"), or "" when unset.
    pub fn date_display(&self) -> String {
        format_date(self.date.as_deref())
    }

    /// "7:00 PM • Jul 14, 2025", or whichever half is present.
    pub fn when(&self) -> Option<String> {
        display_line(&self.time_display(), &self.date_display())
    }

    /// List thumbnail: small image, then large image, then the placeholder.
    pub fn thumbnail(&self) -> &str {
        non_empty(&self.image_small)
            .or_else(|| non_empty(&self.image))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Detail banner: large image, then the placeholder.
    pub fn banner(&self) -> &str {
        non_empty(&self.image).unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Preview image: modal image, then large image, then the placeholder.
    pub fn modal_image(&self) -> &str {
        non_empty(&self.modal_image)
            .or_else(|| non_empty(&self.image))
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Request body for creating an event.
///
/// Fields left blank are sent as empty strings; the server assigns `_id` and `slug`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub image: String,
    pub image_small: String,
    pub modal_image: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub description: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Some backends hand out numeric ids or store times as bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn loose_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_from(value: serde_json::Value) -> Event {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_api_record() {
        let event = event_from(json!({
            "_id": "665f1c2a9b1e8a0012345678",
            "slug": "catan-night",
            "title": "Catan Night",
            "description": "Bring snacks",
            "location": "Library Room B",
            "date": "2025-07-14",
            "time": "5:30 PM",
            "image": "https://img.example/catan.jpg",
            "imageSmall": "https://img.example/catan-small.jpg",
            "modalImage": "https://img.example/map.png",
            "__v": 0
        }));

        assert_eq!(event.id, "665f1c2a9b1e8a0012345678");
        assert_eq!(event.slug, "catan-night");
        assert_eq!(event.image_small.as_deref(), Some("https://img.example/catan-small.jpg"));
        assert_eq!(event.when().as_deref(), Some("5:30 PM • Jul 14, 2025"));
    }

    #[test]
    fn accepts_plain_id_and_numeric_fields() {
        let event = event_from(json!({
            "id": 42,
            "slug": "azul",
            "title": "Azul",
            "time": 1730,
            "date": null
        }));

        assert_eq!(event.id, "42");
        assert_eq!(event.time.as_deref(), Some("1730"));
        assert_eq!(event.time_display(), "5:30 PM");
        assert_eq!(event.date_display(), "");
        assert_eq!(event.when().as_deref(), Some("5:30 PM"));
    }

    #[test]
    fn images_fall_back_to_placeholder() {
        let bare = event_from(json!({ "_id": "1", "title": "Bare", "image": "" }));
        assert_eq!(bare.thumbnail(), PLACEHOLDER_IMAGE);
        assert_eq!(bare.banner(), PLACEHOLDER_IMAGE);
        assert_eq!(bare.modal_image(), PLACEHOLDER_IMAGE);

        let large_only = event_from(json!({ "_id": "2", "title": "Large", "image": "big.jpg" }));
        assert_eq!(large_only.thumbnail(), "big.jpg");
        assert_eq!(large_only.banner(), "big.jpg");
        assert_eq!(large_only.modal_image(), "big.jpg");

        let all = event_from(json!({
            "_id": "3",
            "title": "All",
            "image": "big.jpg",
            "imageSmall": "small.jpg",
            "modalImage": "map.png"
        }));
        assert_eq!(all.thumbnail(), "small.jpg");
        assert_eq!(all.banner(), "big.jpg");
        assert_eq!(all.modal_image(), "map.png");
    }

    #[test]
    fn blank_text_fields_read_as_absent() {
        let event = event_from(json!({
            "_id": "1",
            "title": "Blank",
            "description": "  ",
            "location": ""
        }));
        assert_eq!(event.description(), None);
        assert_eq!(event.location(), None);
        assert_eq!(event.when(), None);
    }

    #[test]
    fn new_event_serializes_camel_case() {
        let payload = NewEvent {
            title: "Wingspan".into(),
            image_small: "thumb.jpg".into(),
            time: "5:00 PM".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["title"], "Wingspan");
        assert_eq!(value["imageSmall"], "thumb.jpg");
        assert_eq!(value["modalImage"], "");
        assert_eq!(value["time"], "5:00 PM");
    }
}
