//! Geocoding service handle.
//!
//! [`Service`] holds the shared HTTP client, the API key, and the base
//! endpoint URL. It is created once and acts as the factory for request
//! builders; each request borrows the service for the duration of one call.

use reqwest::blocking::Client;

use crate::reverse::ReverseGeocode;

/// Default base URL of the Geocoding API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode";

/// Handle to the Geocoding API.
///
/// The underlying [`Client`] is connection-pooled and safe to share, so a
/// single `Service` can serve many requests. Timeouts and TLS settings are
/// configured on the client the caller passes in; this layer adds none of
/// its own.
///
/// # Example
///
/// ```ignore
/// use revgeo::Service;
/// use reqwest::blocking::Client;
///
/// let service = Service::new(Client::new(), "my-api-key");
/// let response = service.reverse_geocode(40.714224, -73.961452).send()?;
/// println!("{}", response.results[0].formatted_address);
/// ```
pub struct Service {
    client: Client,
    key: String,
    base_url: String,
}

impl Service {
    /// Create a new service with the given HTTP client and API key.
    ///
    /// The key is not validated locally; an invalid key surfaces as an
    /// API-level error from the remote service on the first request.
    pub fn new(client: Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base endpoint URL used by subsequently sent requests.
    ///
    /// Mainly useful for pointing the client at a test server. Taking
    /// `&mut self` means the borrow checker rejects overriding the URL while
    /// request builders still borrow this service.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    /// The base endpoint URL currently in effect.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Start a reverse-geocoding request for the given coordinates.
    ///
    /// Reverse geocoding converts geographic coordinates into a
    /// human-readable address. Additional parameters can be set on the
    /// returned builder before calling [`ReverseGeocode::send`].
    ///
    /// # Arguments
    ///
    /// * `lat` - Latitude in decimal degrees
    /// * `lng` - Longitude in decimal degrees
    pub fn reverse_geocode(&self, lat: f64, lng: f64) -> ReverseGeocode<'_> {
        ReverseGeocode::new(self, lat, lng)
    }
}
