//! Country-name resolver seam.
//!
//! The provider's catalog identifies countries by two-letter geo codes
//! ("US", "SE", ...). Turning those into display names is the host's job -
//! it already has a locale layer - so the plugin only defines the seam and
//! lets the host plug in whatever lookup it has.
//!
//! Resolvers return the CamelCase full name ("UnitedStates"); the adapter
//! inserts the display spaces afterwards.

/// Maps a two-letter geo code to a full country name.
pub trait CountryResolver: Send + Sync {
    /// `"US"` -> `Some("UnitedStates")`; `None` when the code is unknown,
    /// in which case the adapter falls back to the raw code.
    fn full_country_from_code(&self, code: &str) -> Option<String>;
}

impl<F> CountryResolver for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn full_country_from_code(&self, code: &str) -> Option<String> {
        self(code)
    }
}

/// Resolver that knows no countries; labels fall back to the raw geo code.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCountryResolver;

impl CountryResolver for NullCountryResolver {
    fn full_country_from_code(&self, _code: &str) -> Option<String> {
        None
    }
}
