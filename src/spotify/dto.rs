//! Chart provider API Data Transfer Objects
//!
//! These types match EXACTLY what the chart provider returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! Two endpoints, both relative to the provider base URL:
//! - `GET toplist/charts` - the catalog of chart categories
//! - `GET toplist/{chart_id}/` - one ranked toplist

use serde::Deserialize;

/// Response of `GET toplist/charts`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartsIndex {
    /// Chart groups; geography and chart types are spread across them.
    #[serde(rename = "Charts", default)]
    pub charts: Vec<ChartGroup>,
}

/// One group in the catalog response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartGroup {
    /// Countries this group covers.
    #[serde(default)]
    pub geo: Vec<CatalogEntry>,
    /// Chart types this group offers.
    #[serde(default)]
    pub types: Vec<CatalogEntry>,
}

/// An id/name pair in the catalog (used for both geos and chart types).
///
/// For geo entries `name` holds the two-letter country code (or a special
/// label like "Everywhere"); for type entries it holds the display label.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Response of `GET toplist/{chart_id}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToplistResponse {
    #[serde(default)]
    pub toplist: Toplist,
}

/// The ranked result list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Toplist {
    #[serde(default)]
    pub result: Vec<ToplistRow>,
}

/// One ranked row. Which fields are populated depends on the chart kind;
/// missing fields come through as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToplistRow {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub name: String,
}

impl ToplistRow {
    /// A row with nothing usable in it; such rows are skipped silently.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.artist.is_empty() && self.name.is_empty()
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a full catalog response
    #[test]
    fn test_parse_charts_index() {
        let json = r#"{
            "Charts": [
                {
                    "types": [
                        {"id": "tracks", "name": "Top Tracks"},
                        {"id": "albums", "name": "Top Albums"}
                    ],
                    "geo": [
                        {"id": "us", "name": "US"},
                        {"id": "se", "name": "SE"}
                    ]
                },
                {
                    "geo": [
                        {"id": "everywhere", "name": "Everywhere"},
                        {"id": "us", "name": "US"}
                    ]
                }
            ]
        }"#;

        let index: ChartsIndex = serde_json::from_str(json).expect("Should parse catalog");

        assert_eq!(index.charts.len(), 2);
        assert_eq!(index.charts[0].types.len(), 2);
        assert_eq!(index.charts[0].types[0].id, "tracks");
        assert_eq!(index.charts[0].types[0].name, "Top Tracks");
        assert_eq!(index.charts[1].geo[0].name, "Everywhere");
        assert!(index.charts[1].types.is_empty());
    }

    /// Test parsing a catalog response with no chart groups at all
    #[test]
    fn test_parse_empty_charts_index() {
        let index: ChartsIndex = serde_json::from_str("{}").expect("Should parse empty object");
        assert!(index.charts.is_empty());
    }

    /// Test parsing a toplist response
    #[test]
    fn test_parse_toplist() {
        let json = r#"{
            "toplist": {
                "result": [
                    {"title": "A", "artist": "X"},
                    {"title": "B", "artist": "Y"}
                ]
            }
        }"#;

        let response: ToplistResponse = serde_json::from_str(json).expect("Should parse toplist");

        assert_eq!(response.toplist.result.len(), 2);
        assert_eq!(response.toplist.result[0].title, "A");
        assert_eq!(response.toplist.result[0].artist, "X");
        assert_eq!(response.toplist.result[1].title, "B");
    }

    /// Artist charts populate `name` instead of title/artist
    #[test]
    fn test_parse_toplist_artist_rows() {
        let json = r#"{
            "toplist": {
                "result": [
                    {"name": "Adele"},
                    {"name": "Coldplay"}
                ]
            }
        }"#;

        let response: ToplistResponse = serde_json::from_str(json).expect("Should parse");

        assert_eq!(response.toplist.result[0].name, "Adele");
        assert!(response.toplist.result[0].title.is_empty());
    }

    /// A response without a toplist object yields an empty result list
    #[test]
    fn test_parse_toplist_missing_body() {
        let response: ToplistResponse = serde_json::from_str("{}").expect("Should tolerate");
        assert!(response.toplist.result.is_empty());
    }

    #[test]
    fn test_row_is_empty() {
        assert!(ToplistRow::default().is_empty());
        assert!(
            !ToplistRow {
                title: "A".to_string(),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !ToplistRow {
                name: "Adele".to_string(),
                ..Default::default()
            }
            .is_empty()
        );
    }

    /// Extra fields the provider may add must not break parsing
    #[test]
    fn test_parse_toplist_extra_fields_ignored() {
        let json = r#"{
            "toplist": {
                "result": [
                    {"title": "A", "artist": "X", "rank": 1, "popularity": 0.93}
                ]
            }
        }"#;

        let response: ToplistResponse = serde_json::from_str(json).expect("Should parse");
        assert_eq!(response.toplist.result[0].title, "A");
    }
}
