//! Typed mirror of the HERE Search JSON schema.
//!
//! Fields the service may leave out are `Option` or default to an empty
//! collection, so partial payloads (autosuggest query items, revgeocode
//! street results) decode without errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude/longitude pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Renders as the `at` query value: `lat,lng`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Bounding box of an item on the map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapView {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
}

/// A place or address record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number_type: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<Position>,
    /// Metres from the search center, only present for proximity searches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_view: Option<MapView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub food_types: Vec<FoodType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<OpeningHours>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone: Vec<ContactItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub www: Vec<ContactItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<ContactItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactItem {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodType {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningHours {
    pub text: Vec<String>,
    pub is_open: bool,
    pub structured: Vec<Structured>,
}

/// iCalendar-style opening period, e.g. start `T100000`, duration `PT11H00M`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Structured {
    pub start: String,
    pub duration: String,
    pub recurrence: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reference {
    pub supplier: Supplier,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
}

/// Envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Error payload sent with non-200 responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_formats_as_at_parameter() {
        assert_eq!(Position::new(42.36346, -71.05444).to_string(), "42.36346,-71.05444");
        assert_eq!(Position::new(52.0, 13.5).to_string(), "52,13.5");
    }

    #[test]
    fn test_decode_discover_place_item() {
        let body = serde_json::json!({
            "title": "Legal Sea Foods",
            "id": "here:pds:place:840drt3p-1a2b",
            "resultType": "place",
            "address": {
                "label": "Legal Sea Foods, 255 State St, Boston, MA 02109, United States",
                "countryCode": "USA",
                "countryName": "United States",
                "state": "Massachusetts",
                "county": "Suffolk",
                "city": "Boston",
                "district": "Downtown",
                "street": "State St",
                "postalCode": "02109",
                "houseNumber": "255"
            },
            "position": {"lat": 42.35911, "lng": -71.05098},
            "access": [{"lat": 42.35915, "lng": -71.05123}],
            "distance": 521,
            "categories": [{"id": "100-1000-0000", "name": "Restaurant", "primary": true}],
            "references": [{"supplier": {"id": "yelp"}, "id": "Z5pFmAqtEs"}],
            "foodTypes": [{"id": "101-070", "name": "Seafood", "primary": true}],
            "contacts": [{
                "phone": [{"value": "+16177423400"}],
                "www": [{"value": "http://www.legalseafoods.com"}]
            }],
            "openingHours": [{
                "text": ["Mon-Sun: 11:00 - 22:00"],
                "isOpen": true,
                "structured": [{
                    "start": "T110000",
                    "duration": "PT11H00M",
                    "recurrence": "FREQ:DAILY;BYDAY:MO,TU,WE,TH,FR,SA,SU"
                }]
            }],
            "someFutureField": {"ignored": true}
        });

        let item: Item = serde_json::from_value(body).unwrap();

        assert_eq!(item.title, "Legal Sea Foods");
        assert_eq!(item.result_type.as_deref(), Some("place"));
        assert_eq!(item.address.postal_code.as_deref(), Some("02109"));
        assert_eq!(item.position, Some(Position::new(42.35911, -71.05098)));
        assert_eq!(item.access.len(), 1);
        assert_eq!(item.distance, Some(521));
        assert_eq!(item.categories[0].primary, Some(true));
        assert_eq!(item.references[0].supplier.id, "yelp");
        assert_eq!(item.food_types[0].name, "Seafood");
        assert_eq!(item.contacts[0].phone[0].value, "+16177423400");
        assert!(item.contacts[0].email.is_empty());
        assert!(item.opening_hours[0].is_open);
        assert_eq!(item.opening_hours[0].structured[0].duration, "PT11H00M");
        assert!(item.map_view.is_none());
    }

    #[test]
    fn test_decode_geocode_address_item() {
        let body = serde_json::json!({
            "items": [{
                "title": "5 Rue Daunou, 75002 Paris, France",
                "id": "here:af:streetsection:z42doZW8OHQx",
                "resultType": "houseNumber",
                "houseNumberType": "PA",
                "address": {
                    "label": "5 Rue Daunou, 75002 Paris, France",
                    "countryCode": "FRA",
                    "city": "Paris",
                    "houseNumber": "5"
                },
                "position": {"lat": 48.86926, "lng": 2.3321},
                "mapView": {"west": 2.33068, "south": 48.86836, "east": 2.33352, "north": 48.87016}
            }]
        });

        let response: ItemsResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.items.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.house_number_type.as_deref(), Some("PA"));
        assert!(item.address.state.is_none());
        let view = item.map_view.unwrap();
        assert!(view.west < view.east);
        assert!(view.south < view.north);
    }

    #[test]
    fn test_decode_autosuggest_query_item_without_id() {
        let body = serde_json::json!({
            "title": "restaurant",
            "resultType": "categoryQuery",
            "href": "https://autosuggest.search.hereapi.com/v1/discover?q=restaurant"
        });

        let item: Item = serde_json::from_value(body).unwrap();
        assert_eq!(item.id, "");
        assert!(item.position.is_none());
    }

    #[test]
    fn test_serialized_item_omits_absent_fields() {
        let item = Item {
            title: "Somewhere".to_string(),
            id: "here:x".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("title"));
        assert!(!object.contains_key("mapView"));
        assert!(!object.contains_key("categories"));
    }
}
