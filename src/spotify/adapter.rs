//! Adapter layer: Convert provider DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if the provider changes its response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::countries::CountryResolver;
use crate::model::{ChartCatalog, ChartDescriptor, ChartEntry, ChartKind, ChartResult};

/// Build the chart catalog from a catalog response.
///
/// Provider quirk: the usable geo list lives on the *last* chart group and
/// the type list on the *first*. Observed behavior of the live service;
/// don't "fix" it without a corrected provider contract.
pub fn build_catalog(index: &dto::ChartsIndex, countries: &dyn CountryResolver) -> ChartCatalog {
    let geos = index
        .charts
        .last()
        .map(|group| group.geo.as_slice())
        .unwrap_or_default();
    let types = index
        .charts
        .first()
        .map(|group| group.types.as_slice())
        .unwrap_or_default();

    let mut catalog = ChartCatalog::new();
    for geo in geos {
        let country = match geo.name.as_str() {
            // Needs a per-user identity we don't have
            "For me" => continue,
            "Everywhere" => geo.name.clone(),
            code => countries
                .full_country_from_code(code)
                .map(|name| insert_uppercase_spaces(&name))
                .unwrap_or_else(|| code.to_string()),
        };

        let charts: Vec<ChartDescriptor> = types
            .iter()
            .map(|t| ChartDescriptor {
                id: format!("{}/{}", t.id, geo.id),
                label: t.name.clone(),
                chart_type: t.id.clone(),
            })
            .collect();

        catalog.insert(country, charts);
    }

    catalog
}

/// Infer the chart content kind from the request URL.
pub fn kind_from_url(url: &str) -> Option<ChartKind> {
    if url.contains("albums") {
        Some(ChartKind::Album)
    } else if url.contains("tracks") {
        Some(ChartKind::Track)
    } else if url.contains("artists") {
        Some(ChartKind::Artist)
    } else {
        None
    }
}

/// Convert a toplist response into a normalized chart result.
///
/// The kind is threaded explicitly so repeated conversions share no state;
/// rows with nothing usable in them are skipped silently, everything else
/// keeps the provider's rank order.
pub fn toplist_to_result(kind: Option<ChartKind>, response: &dto::ToplistResponse) -> ChartResult {
    let Some(kind) = kind else {
        return ChartResult::empty();
    };

    let entries = response
        .toplist
        .result
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| match kind {
            ChartKind::Track => ChartEntry::Track {
                artist: row.artist.clone(),
                title: row.title.clone(),
            },
            ChartKind::Album => ChartEntry::Album {
                artist: row.artist.clone(),
                title: row.title.clone(),
            },
            // Artist charts only carry the name; title/artist are ignored
            ChartKind::Artist => ChartEntry::Artist {
                name: row.name.clone(),
            },
        })
        .collect();

    ChartResult {
        kind: Some(kind),
        entries,
    }
}

/// Insert a space before every internal uppercase letter
/// (e.g. "UnitedStates" -> "United States").
fn insert_uppercase_spaces(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
