//! Chart provider integration: HTTP client, wire DTOs, and the adapter
//! that normalizes provider responses into the domain model.

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::{DEFAULT_API_URL, SpotifyChartsClient};
