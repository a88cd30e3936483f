//! Nominatim (OpenStreetMap) place lookup client.
//!
//! API reference: <https://nominatim.org/release-docs/latest/>

use alert_core::Location;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::GeocodeError;

const BASE_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "tiretime-bot/0.1";

/// One search result from Nominatim.
#[derive(Debug, Clone, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

/// A Nominatim geocoding client.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a client against the public Nominatim instance.
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against a custom Nominatim instance.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GeocodeError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn first_result(&self, query: &str) -> Result<Option<SearchResult>, GeocodeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Nominatim returned {} for query {:?}", response.status(), query);
            return Ok(None);
        }

        let mut results: Vec<SearchResult> = response.json().await?;

        if results.is_empty() {
            return Ok(None);
        }
        Ok(Some(results.swap_remove(0)))
    }

    /// Resolve a free-text place name to coordinates.
    ///
    /// Returns `None` when the place is unknown.
    pub async fn search(&self, term: &str) -> Result<Option<Location>, GeocodeError> {
        let Some(result) = self.first_result(term).await? else {
            return Ok(None);
        };

        let latitude: f64 = result
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude: {}", result.lat)))?;
        let longitude: f64 = result
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude: {}", result.lon)))?;

        Ok(Some(Location::new(latitude, longitude)))
    }

    /// Look up a human-readable place name for coordinates.
    ///
    /// Returns `None` when nothing is known about the location.
    pub async fn place_name(&self, location: Location) -> Result<Option<String>, GeocodeError> {
        let query = format!("{},{}", location.latitude, location.longitude);
        let result = self.first_result(&query).await?;

        Ok(result.map(|r| r.display_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"[{
            "lat": "41.3828939",
            "lon": "2.1774322",
            "display_name": "Barcelona, Catalonia, Spain"
        }]"#;

        let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Barcelona, Catalonia, Spain");
        assert!(results[0].lat.parse::<f64>().is_ok());
    }
}
