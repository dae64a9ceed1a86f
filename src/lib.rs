//! Spotify charts info plugin for a media-player info system.
//!
//! The plugin answers two request types from its host: *chart capabilities*
//! (which charts exist, grouped per country) and *chart lists* (the ranked
//! tracks, albums, or artists for one chart). It does so by querying a
//! remote toplist HTTP service and normalizing the provider JSON into the
//! host's generic chart model.
//!
//! # Architecture
//!
//! This crate follows a clean separation between:
//! - **Domain model** (`model.rs`) - the host's generic chart types
//! - **API DTOs** (`spotify/dto.rs`) - exact provider response shapes
//! - **Adapter** (`spotify/adapter.rs`) - converts DTOs to domain models
//! - **Client** (`spotify/client.rs`) - HTTP client for the provider API
//! - **Plugin** (`plugin.rs`) - request routing and fetch orchestration
//!
//! The host itself stays behind two seams: [`InfoHost`] (terminal responses
//! and cache lookups) and [`CountryResolver`] (geo code to country name).
//! Caching, retries, and authentication are the host's business, not ours.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use spotify_charts::{InfoRequest, InfoType, SpotifyChartsClient, SpotifyChartsPlugin};
//!
//! let plugin = SpotifyChartsPlugin::new(host, countries);
//!
//! // The host announces its transport; the plugin refreshes its catalog
//! let transport = Arc::new(SpotifyChartsClient::new());
//! plugin.transport_changed(&transport);
//!
//! // Requests come in through get_info and complete via host.info(...)
//! plugin.get_info(InfoRequest::new(1, InfoType::ChartCapabilities, input));
//! ```

pub mod config;
pub mod countries;
pub mod error;
pub mod host;
pub mod model;
pub mod plugin;
pub mod spotify;

pub use config::ChartsConfig;
pub use countries::{CountryResolver, NullCountryResolver};
pub use error::{ChartError, Result};
pub use host::{Criteria, InfoHost, InfoRequest, InfoType, RequestId};
pub use model::{ChartCatalog, ChartDescriptor, ChartEntry, ChartKind, ChartResult};
pub use plugin::{CHART_SOURCE, SpotifyChartsPlugin};
pub use spotify::SpotifyChartsClient;
