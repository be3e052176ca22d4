//! Hotel search for a chosen stay.
//!
//! The picker only produces dates; fetching hotels belongs to whatever sits
//! behind [`HotelSource`]. This module defines the query handed to that
//! source and the records it returns.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calendar_date::CalendarDate;
use crate::date_range::{DateRange, nights_between};
use crate::error::{PickerError, PickerResult};

/// A committed stay plus where the user wants to stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub check_in: CalendarDate,
    pub check_out: CalendarDate,
}

impl StayQuery {
    /// Requires a complete range.
    pub fn new(range: &DateRange, location: Option<String>) -> PickerResult<Self> {
        let (check_in, check_out) = range.bounds().ok_or(PickerError::IncompleteRange)?;
        let location = location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        Ok(StayQuery {
            location,
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> u64 {
        nights_between(&self.check_in, &self.check_out)
    }

    /// URL-encoded query parameters: `checkIn`, `checkOut` and `location` when set.
    pub fn to_query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("checkIn", &self.check_in.to_string())
            .append_pair("checkOut", &self.check_out.to_string());
        if let Some(location) = &self.location {
            query.append_pair("location", location);
        }
        query.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    pub star: u8,
    pub address: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Hotel {
    /// Cheapest nightly price across room types.
    pub fn lowest_price(&self) -> Option<f64> {
        self.room_types
            .iter()
            .map(|room| room.price)
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// Where hotel records come from.
pub trait HotelSource {
    fn hotels(&self, query: &StayQuery) -> PickerResult<Vec<Hotel>>;
}

/// Hotel records held in memory, typically loaded from a JSON fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticHotels {
    hotels: Vec<Hotel>,
}

/// Accepts a bare list or the `{ "data": [...] }` envelope the API returns.
#[derive(Deserialize)]
#[serde(untagged)]
enum HotelPayload {
    Envelope { data: Vec<Hotel> },
    List(Vec<Hotel>),
}

impl StaticHotels {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        StaticHotels { hotels }
    }

    pub fn from_json_str(json: &str) -> PickerResult<Self> {
        let payload: HotelPayload =
            serde_json::from_str(json).map_err(|e| PickerError::Serialization(e.to_string()))?;

        let hotels = match payload {
            HotelPayload::Envelope { data } => data,
            HotelPayload::List(hotels) => hotels,
        };
        Ok(StaticHotels::new(hotels))
    }

    pub fn load(path: &Path) -> PickerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        StaticHotels::from_json_str(&content)
    }
}

impl HotelSource for StaticHotels {
    fn hotels(&self, query: &StayQuery) -> PickerResult<Vec<Hotel>> {
        log::debug!(
            "serving {} static hotels for {}",
            self.hotels.len(),
            query.to_query_string()
        );
        Ok(self.hotels.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    const HOTELS_JSON: &str = r#"{
        "data": [
            {
                "id": "hotel_001",
                "name": "上海陆家嘴玥酒店",
                "nameEn": "Shanghai Lujiazui Yue Hotel",
                "star": 4,
                "address": "上海市浦东新区陆家嘴环路1288号",
                "photos": ["https://picsum.photos/id/1031/800/400"],
                "status": "published",
                "roomTypes": [
                    { "id": "rt_001", "name": "经典双床房", "price": 936, "stock": 3 },
                    { "id": "rt_002", "name": "豪华大床房", "price": 1088, "stock": 0 }
                ]
            },
            {
                "id": "hotel_002",
                "name": "艺龙安悦酒店",
                "star": 3,
                "address": "上海市浦东新区浦东大道"
            }
        ]
    }"#;

    #[test]
    fn query_requires_complete_range() {
        let partial = DateRange::starting(date("2026-03-10"));
        assert!(matches!(
            StayQuery::new(&partial, None),
            Err(PickerError::IncompleteRange)
        ));
    }

    #[test]
    fn query_string_carries_dates_and_location() {
        let range = DateRange::new(date("2026-03-10"), date("2026-03-15"));
        let query = StayQuery::new(&range, Some(" Shanghai Pudong ".to_string())).unwrap();

        assert_eq!(query.nights(), 5);
        assert_eq!(
            query.to_query_string(),
            "checkIn=2026-03-10&checkOut=2026-03-15&location=Shanghai+Pudong"
        );
    }

    #[test]
    fn blank_location_is_dropped() {
        let range = DateRange::new(date("2026-03-10"), date("2026-03-11"));
        let query = StayQuery::new(&range, Some("   ".to_string())).unwrap();
        assert_eq!(query.location, None);
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"checkIn":"2026-03-10","checkOut":"2026-03-11"}"#
        );
    }

    #[test]
    fn parses_enveloped_hotels() {
        let source = StaticHotels::from_json_str(HOTELS_JSON).unwrap();
        let range = DateRange::new(date("2026-03-10"), date("2026-03-11"));
        let hotels = source.hotels(&StayQuery::new(&range, None).unwrap()).unwrap();

        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].name_en.as_deref(), Some("Shanghai Lujiazui Yue Hotel"));
        assert_eq!(hotels[0].lowest_price(), Some(936.0));
        assert_eq!(hotels[0].room_types[1].stock, 0);
        assert!(hotels[1].room_types.is_empty());
        assert_eq!(hotels[1].lowest_price(), None);
    }

    #[test]
    fn parses_bare_list_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "h", "name": "Inn", "star": 2, "address": "Main St"}}]"#
        )
        .unwrap();

        let source = StaticHotels::load(file.path()).unwrap();
        assert_eq!(source.hotels.len(), 1);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            StaticHotels::from_json_str("{ not json"),
            Err(PickerError::Serialization(_))
        ));
    }
}
