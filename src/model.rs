//! Domain model for normalized chart data.
//!
//! These types are OUR types - the host's generic chart model. Provider
//! responses get converted into them by the adapter layer, and they know how
//! to render themselves into the key-value payloads the host expects.

use std::collections::BTreeMap;

use serde_json::{Value, json};

/// What kind of content a chart ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Track,
    Album,
    Artist,
}

impl ChartKind {
    /// The label used for the `type` field and the list key in payloads.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Track => "tracks",
            ChartKind::Album => "albums",
            ChartKind::Artist => "artists",
        }
    }
}

/// One ranked row of a chart, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEntry {
    Track { artist: String, title: String },
    Album { artist: String, title: String },
    Artist { name: String },
}

impl ChartEntry {
    fn to_payload(&self) -> Value {
        match self {
            ChartEntry::Track { artist, title } => json!({ "artist": artist, "track": title }),
            ChartEntry::Album { artist, title } => json!({ "artist": artist, "album": title }),
            // Artist charts are a plain list of names, not objects
            ChartEntry::Artist { name } => Value::String(name.clone()),
        }
    }
}

/// A fully normalized chart: entries of exactly one kind, in provider order.
///
/// `kind` is `None` when the request URL named no recognizable content kind;
/// such a result renders to a payload without any list fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResult {
    pub kind: Option<ChartKind>,
    pub entries: Vec<ChartEntry>,
}

impl ChartResult {
    /// A result with no recognizable kind and no entries.
    pub fn empty() -> Self {
        Self {
            kind: None,
            entries: Vec::new(),
        }
    }

    /// Render the payload handed back to the host:
    /// `{"type": "tracks", "tracks": [...]}` (likewise for albums/artists).
    pub fn to_payload(&self) -> Value {
        let Some(kind) = self.kind else {
            return json!({});
        };

        let items: Vec<Value> = self.entries.iter().map(ChartEntry::to_payload).collect();
        json!({
            "type": kind.label(),
            (kind.label()): items,
        })
    }
}

/// One chart offered by the provider for a given country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDescriptor {
    /// Composite identifier, `typeId/geoId` (e.g. `tracks/us`).
    pub id: String,
    /// Display label (e.g. "Top Tracks").
    pub label: String,
    /// The chart type id on its own (e.g. `tracks`).
    pub chart_type: String,
}

impl ChartDescriptor {
    fn to_payload(&self) -> Value {
        json!({
            "id": self.id,
            "label": self.label,
            "type": self.chart_type,
        })
    }
}

/// The set of all (country, chart-type) combinations the provider offers.
///
/// Built once per catalog refresh and replaced wholesale; countries are kept
/// sorted so repeated capability reads serialize identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartCatalog {
    countries: BTreeMap<String, Vec<ChartDescriptor>>,
}

impl ChartCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no catalog refresh has populated us yet.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Number of countries in the catalog.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Add (or replace) the chart list for one country.
    pub fn insert(&mut self, country: impl Into<String>, charts: Vec<ChartDescriptor>) {
        self.countries.insert(country.into(), charts);
    }

    /// The chart descriptors for one country, if present.
    pub fn charts_for(&self, country: &str) -> Option<&[ChartDescriptor]> {
        self.countries.get(country).map(Vec::as_slice)
    }

    /// Render the capabilities payload: `{"Spotify": {country: [{id, label, type}]}}`.
    pub fn to_payload(&self) -> Value {
        let mut by_country = serde_json::Map::new();
        for (country, charts) in &self.countries {
            let list: Vec<Value> = charts.iter().map(ChartDescriptor::to_payload).collect();
            by_country.insert(country.clone(), Value::Array(list));
        }
        json!({ "Spotify": by_country })
    }
}
