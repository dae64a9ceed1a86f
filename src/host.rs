//! Host collaborator seam.
//!
//! The plugin lives inside a larger info-system host that owns the plugin
//! registry, request dispatch, and the cache. Everything the plugin needs
//! from the host goes through the [`InfoHost`] trait; everything the host
//! sends us arrives as an [`InfoRequest`].
//!
//! The contract the plugin upholds: exactly one terminal [`InfoHost::info`]
//! call per request id - never zero, never more than one. A `None` payload
//! signals an error.

use std::collections::HashMap;

use serde_json::Value;

/// Opaque request correlation id assigned by the host.
pub type RequestId = u32;

/// Criteria map handed to the host's cache lookup.
pub type Criteria = HashMap<String, String>;

/// The kinds of info requests this plugin answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    /// A ranked list for one specific chart (`chart_source` + `chart_id`).
    ChartList,
    /// The catalog of all charts we currently know about.
    ChartCapabilities,
}

/// One request from the host, discarded once its terminal response is out.
#[derive(Debug, Clone)]
pub struct InfoRequest {
    pub request_id: RequestId,
    pub info_type: InfoType,
    /// Opaque input payload; expected to be a JSON object of string values.
    pub input: Value,
}

impl InfoRequest {
    pub fn new(request_id: RequestId, info_type: InfoType, input: Value) -> Self {
        Self {
            request_id,
            info_type,
            input,
        }
    }

    /// Interpret the input payload as a string-to-string map.
    ///
    /// Returns `None` when the payload is not an object or any value is not
    /// a string - the router turns that into an immediate error response.
    pub fn input_map(&self) -> Option<HashMap<String, String>> {
        let obj = self.input.as_object()?;
        let mut map = HashMap::with_capacity(obj.len());
        for (key, value) in obj {
            map.insert(key.clone(), value.as_str()?.to_string());
        }
        Some(map)
    }
}

/// Callbacks back into the host.
///
/// Implementations must be cheap to call from spawned tasks; the plugin
/// invokes them from whatever task completed the fetch.
pub trait InfoHost: Send + Sync {
    /// Deliver the terminal response for a request. `payload` is `None` on
    /// error, `Some` with the normalized data on success.
    fn info(&self, request: InfoRequest, payload: Option<Value>);

    /// Ask the host to check its cache. On a hit the host answers the
    /// request itself; on a miss it re-enters the plugin via
    /// `fetch_uncached` with the same request.
    fn get_cached_info(&self, criteria: Criteria, max_age_secs: u64, request: InfoRequest);
}
