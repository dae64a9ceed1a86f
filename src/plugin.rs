//! The charts plugin: request routing, catalog refresh, and chart fetches.
//!
//! Entry points mirror the host's plugin framework: [`SpotifyChartsPlugin::get_info`]
//! receives typed requests, [`SpotifyChartsPlugin::fetch_uncached`] is invoked
//! by the host after a cache miss, and [`SpotifyChartsPlugin::transport_changed`]
//! fires when a usable network transport (re)appears.
//!
//! All entry points return immediately; network work happens in spawned
//! tasks that deliver their terminal response through the [`InfoHost`] seam.
//! Every request gets exactly one terminal response, including on network
//! or parse failure.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use crate::config::ChartsConfig;
use crate::countries::CountryResolver;
use crate::error::ChartError;
use crate::host::{Criteria, InfoHost, InfoRequest, InfoType};
use crate::model::ChartCatalog;
use crate::spotify::{SpotifyChartsClient, adapter};

/// The provider tag a chart-list request must carry in `chart_source`.
pub const CHART_SOURCE: &str = "spotify";

/// Spotify charts info plugin
pub struct SpotifyChartsPlugin {
    host: Arc<dyn InfoHost>,
    countries: Arc<dyn CountryResolver>,
    /// Non-owning handle to the host's transport; upgraded before each call.
    transport: RwLock<Weak<SpotifyChartsClient>>,
    /// Replaced wholesale by each successful refresh, never merged.
    catalog: Arc<RwLock<ChartCatalog>>,
    cache_max_age_secs: u64,
}

impl SpotifyChartsPlugin {
    /// Create a plugin with default configuration.
    pub fn new(host: Arc<dyn InfoHost>, countries: Arc<dyn CountryResolver>) -> Self {
        Self::with_config(host, countries, &ChartsConfig::default())
    }

    /// Create a plugin with explicit configuration.
    pub fn with_config(
        host: Arc<dyn InfoHost>,
        countries: Arc<dyn CountryResolver>,
        config: &ChartsConfig,
    ) -> Self {
        Self {
            host,
            countries,
            transport: RwLock::new(Weak::new()),
            catalog: Arc::new(RwLock::new(ChartCatalog::new())),
            cache_max_age_secs: config.cache_max_age_secs,
        }
    }

    /// The host signals that a usable network transport became available.
    ///
    /// Stores a non-owning handle and kicks off a catalog refresh so the
    /// capabilities answer is ready before anyone asks for it. On failure
    /// the previously built catalog stays untouched.
    ///
    /// Must be called from within a Tokio runtime; the refresh runs on a
    /// spawned task.
    pub fn transport_changed(&self, transport: &Arc<SpotifyChartsClient>) {
        *self.write_transport() = Arc::downgrade(transport);

        tracing::debug!("transport available, refreshing chart catalog");
        let client = Arc::clone(transport);
        let countries = Arc::clone(&self.countries);
        let catalog = Arc::clone(&self.catalog);
        tokio::spawn(async move {
            match client.fetch_chart_index().await {
                Ok(index) => {
                    let fresh = adapter::build_catalog(&index, countries.as_ref());
                    tracing::info!("chart catalog refreshed: {} countries", fresh.len());
                    *catalog.write().unwrap_or_else(PoisonError::into_inner) = fresh;
                }
                Err(e) => {
                    // Keep whatever catalog we had; no partial overwrite
                    tracing::warn!("chart catalog refresh failed: {}", e);
                }
            }
        });
    }

    /// Route one typed request from the host.
    pub fn get_info(&self, request: InfoRequest) {
        match request.info_type {
            InfoType::ChartList => self.route_chart_list(request),
            InfoType::ChartCapabilities => self.route_capabilities(request),
        }
    }

    /// Pushed info is not something this plugin consumes.
    pub fn push_info(&self, _request: InfoRequest) {}

    /// Cache-miss re-entry: the host found nothing cached for `criteria`
    /// and hands the request back for an actual fetch.
    ///
    /// Must be called from within a Tokio runtime; chart-list fetches run
    /// on a spawned task.
    pub fn fetch_uncached(&self, criteria: Criteria, request: InfoRequest) {
        match request.info_type {
            InfoType::ChartCapabilities => {
                // May be empty if no refresh has completed yet
                let payload = self.read_catalog().to_payload();
                self.host.info(request, Some(payload));
            }
            InfoType::ChartList => self.fetch_chart(criteria, request),
        }
    }

    fn route_chart_list(&self, request: InfoRequest) {
        let Some(input) = request.input_map() else {
            return self.fail(
                request,
                ChartError::InvalidInput("input payload is not a string map".to_string()),
            );
        };

        if input.get("chart_source").map(String::as_str) != Some(CHART_SOURCE) {
            return self.fail(
                request,
                ChartError::InvalidInput("chart_source missing or not ours".to_string()),
            );
        }
        let Some(chart_id) = input.get("chart_id") else {
            return self.fail(
                request,
                ChartError::InvalidInput("chart_id missing".to_string()),
            );
        };

        let mut criteria = Criteria::new();
        criteria.insert("chart_id".to_string(), chart_id.clone());
        self.host
            .get_cached_info(criteria, self.cache_max_age_secs, request);
    }

    fn route_capabilities(&self, request: InfoRequest) {
        if request.input_map().is_none() {
            return self.fail(
                request,
                ChartError::InvalidInput("input payload is not a string map".to_string()),
            );
        }

        // No required fields; let the host check its cache first
        self.host
            .get_cached_info(Criteria::new(), self.cache_max_age_secs, request);
    }

    fn fetch_chart(&self, criteria: Criteria, request: InfoRequest) {
        let Some(chart_id) = criteria.get("chart_id").cloned() else {
            return self.fail(
                request,
                ChartError::InvalidInput("cache miss without chart_id".to_string()),
            );
        };

        let Some(client) = self.read_transport().upgrade() else {
            return self.fail(request, ChartError::TransportUnavailable);
        };

        let host = Arc::clone(&self.host);
        tokio::spawn(async move {
            // The content kind is inferred from the URL shape and threaded
            // through normalization explicitly
            let kind = adapter::kind_from_url(&client.toplist_url(&chart_id));

            match client.fetch_toplist(&chart_id).await {
                Ok(response) => {
                    let result = adapter::toplist_to_result(kind, &response);
                    tracing::debug!(
                        "chart {} returned {} entries",
                        chart_id,
                        result.entries.len()
                    );
                    host.info(request, Some(result.to_payload()));
                }
                Err(e) => {
                    // The request still terminates: one error response
                    tracing::warn!("chart fetch for {} failed: {}", chart_id, e);
                    host.info(request, None);
                }
            }
        });
    }

    /// Emit the terminal error response for a request.
    fn fail(&self, request: InfoRequest, error: ChartError) {
        tracing::debug!("request {} failed: {}", request.request_id, error);
        self.host.info(request, None);
    }

    // Both locks only ever hold complete values (the catalog is replaced
    // wholesale, the transport is a plain Weak), so a poisoned lock still
    // guards coherent data and is safe to recover.

    fn read_catalog(&self) -> RwLockReadGuard<'_, ChartCatalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_transport(&self) -> RwLockReadGuard<'_, Weak<SpotifyChartsClient>> {
        self.transport.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_transport(&self) -> RwLockWriteGuard<'_, Weak<SpotifyChartsClient>> {
        self.transport.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a catalog directly, bypassing the network refresh.
    #[cfg(test)]
    fn install_catalog(&self, catalog: ChartCatalog) {
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog;
    }

    /// Shared handle to the catalog lock, for tests that exercise it directly.
    #[cfg(test)]
    fn catalog_handle(&self) -> Arc<RwLock<ChartCatalog>> {
        Arc::clone(&self.catalog)
    }
}
