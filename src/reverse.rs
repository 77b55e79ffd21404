//! Reverse-geocoding request builder.
//!
//! [`ReverseGeocode`] accumulates optional parameters for one request,
//! validates the locator, serializes the query string, and performs the
//! blocking network call. A builder is created per request via
//! [`Service::reverse_geocode`](crate::Service::reverse_geocode) and
//! consumed by [`send`](ReverseGeocode::send); a failed send is terminal,
//! retrying means building a new request.

use url::form_urlencoded;

use crate::error::{GeocodeError, Result};
use crate::response::GeocodeResponse;
use crate::service::Service;

/// Builder for a single reverse-geocoding request.
///
/// # Locator
///
/// A request must carry either a nonzero coordinate pair or a non-empty
/// place ID. Known limitation: the exact origin point (0,0) is treated as
/// "coordinates unset" and cannot be queried by coordinates; use a place ID
/// for Null Island.
///
/// # Example
///
/// ```ignore
/// let response = service
///     .reverse_geocode(40.714224, -73.961452)
///     .language("en")
///     .result_type(["street_address"])
///     .send()?;
/// ```
pub struct ReverseGeocode<'a> {
    service: &'a Service,

    // Coordinates around which to retrieve place information.
    lat: f64,
    lng: f64,

    /// Place ID of the place whose human-readable address is wanted.
    place_id: Option<String>,

    /// Language in which to return results, when possible.
    language: Option<String>,

    /// Address-type filters (e.g. "country", "street_address", "postal_code").
    result_type: Vec<String>,

    /// Location-precision filters (e.g. "ROOFTOP", "APPROXIMATE").
    location_type: Vec<String>,
}

impl<'a> ReverseGeocode<'a> {
    pub(crate) fn new(service: &'a Service, lat: f64, lng: f64) -> Self {
        Self {
            service,
            lat,
            lng,
            place_id: None,
            language: None,
            result_type: Vec::new(),
            location_type: Vec::new(),
        }
    }

    /// Look up the address of a specific place by its place ID.
    ///
    /// When set (and non-empty), the place ID alone satisfies the locator
    /// requirement regardless of the coordinates.
    pub fn place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    /// Request results in the given language, when available.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restrict results to the given address types.
    pub fn result_type<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.result_type = types.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict results to the given location precisions.
    pub fn location_type<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location_type = types.into_iter().map(Into::into).collect();
        self
    }

    /// Check that the request carries a usable locator.
    ///
    /// Passes when the coordinate pair is nonzero or a non-empty place ID is
    /// set; fails with [`GeocodeError::MissingLocator`] otherwise. (0,0) with
    /// no place ID is indistinguishable from "unset" and fails — see the
    /// type-level docs.
    pub fn validate(&self) -> Result<()> {
        if self.lat != 0.0 || self.lng != 0.0 {
            return Ok(());
        }
        if self.place_id.as_deref().is_some_and(|id| !id.is_empty()) {
            return Ok(());
        }
        Err(GeocodeError::MissingLocator)
    }

    /// Serialize the configured parameters as a URL-encoded query string.
    ///
    /// Always contains the API key. `latlng` uses six-decimal formatting;
    /// `result_type` and `location_type` are `|`-joined (encoded as `%7C`).
    pub fn query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("key", self.service.key());

        if self.lat != 0.0 || self.lng != 0.0 {
            query.append_pair("latlng", &format!("{:.6},{:.6}", self.lat, self.lng));
        }
        if let Some(place_id) = self.place_id.as_deref().filter(|id| !id.is_empty()) {
            query.append_pair("place_id", place_id);
        }
        if let Some(language) = &self.language {
            query.append_pair("language", language);
        }
        if !self.result_type.is_empty() {
            query.append_pair("result_type", &self.result_type.join("|"));
        }
        if !self.location_type.is_empty() {
            query.append_pair("location_type", &self.location_type.join("|"));
        }

        query.finish()
    }

    /// Validate, send the request, and decode the response.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::MissingLocator`] - no usable locator configured
    /// - [`GeocodeError::Transport`] - network or connection failure
    /// - [`GeocodeError::HttpStatus`] - non-200 response (carries code and body)
    /// - [`GeocodeError::Decode`] - body is not valid response JSON
    /// - [`GeocodeError::Api`] - decoded status is not `"OK"`
    pub fn send(self) -> Result<GeocodeResponse> {
        self.validate()?;

        let url = format!("{}/json?{}", self.service.base_url(), self.query());

        let resp = self.service.client().get(&url).send()?;
        let code = resp.status().as_u16();
        let body = resp.text()?;
        if code != 200 {
            return Err(GeocodeError::HttpStatus { code, body });
        }

        let data: GeocodeResponse = serde_json::from_str(&body)?;
        if data.status != "OK" {
            return Err(GeocodeError::Api {
                status: data.status,
                message: data.error_message,
            });
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::blocking::Client;

    fn test_service() -> Service {
        Service::new(Client::new(), "test-key")
    }

    #[test]
    fn test_validate_nonzero_coords() {
        let service = test_service();
        assert!(service.reverse_geocode(40.714224, -73.961452).validate().is_ok());
        assert!(service.reverse_geocode(40.714224, 0.0).validate().is_ok());
        assert!(service.reverse_geocode(0.0, -73.961452).validate().is_ok());
    }

    #[test]
    fn test_validate_origin_without_place_id() {
        let service = test_service();
        let err = service.reverse_geocode(0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, GeocodeError::MissingLocator));
    }

    #[test]
    fn test_validate_place_id_alone() {
        let service = test_service();
        let req = service.reverse_geocode(0.0, 0.0).place_id("ChIJd8BlQ2BZwokR");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_place_id() {
        let service = test_service();
        let req = service.reverse_geocode(0.0, 0.0).place_id("");
        assert!(matches!(
            req.validate().unwrap_err(),
            GeocodeError::MissingLocator
        ));
    }

    #[test]
    fn test_query_always_contains_key() {
        let service = test_service();
        let query = service.reverse_geocode(40.714224, -73.961452).query();
        assert!(query.contains("key=test-key"));

        let query = service.reverse_geocode(0.0, 0.0).place_id("abc").query();
        assert!(query.contains("key=test-key"));
    }

    #[test]
    fn test_query_latlng_six_decimals() {
        let service = test_service();
        let query = service.reverse_geocode(40.714224, -73.961452).query();
        assert!(query.contains("latlng=40.714224%2C-73.961452"));

        // Origin coordinates are treated as unset and never serialized.
        let query = service.reverse_geocode(0.0, 0.0).place_id("abc").query();
        assert!(!query.contains("latlng"));
    }

    #[test]
    fn test_query_place_id() {
        let service = test_service();
        let query = service
            .reverse_geocode(0.0, 0.0)
            .place_id("ChIJd8BlQ2BZwokRAFUEcm_qrcA")
            .language("en")
            .query();
        // The place ID itself is sent, not the language field.
        assert!(query.contains("place_id=ChIJd8BlQ2BZwokRAFUEcm_qrcA"));
        assert!(query.contains("language=en"));
    }

    #[test]
    fn test_query_pipe_joined_filters() {
        let service = test_service();
        let query = service
            .reverse_geocode(40.714224, -73.961452)
            .result_type(["country", "postal_code"])
            .location_type(["ROOFTOP", "APPROXIMATE"])
            .query();
        assert!(query.contains("result_type=country%7Cpostal_code"));
        assert!(query.contains("location_type=ROOFTOP%7CAPPROXIMATE"));
    }

    #[test]
    fn test_query_omits_unset_fields() {
        let service = test_service();
        let query = service.reverse_geocode(40.714224, -73.961452).query();
        assert!(!query.contains("place_id"));
        assert!(!query.contains("language"));
        assert!(!query.contains("result_type"));
        assert!(!query.contains("location_type"));
    }

    #[test]
    fn test_send_ok() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/json")
            .match_query(mockito::Matcher::UrlEncoded(
                "key".into(),
                "test-key".into(),
            ))
            .with_status(200)
            .with_body(
                r#"{"status":"OK","results":[{"place_id":"abc","formatted_address":"1 Main St"}]}"#,
            )
            .create();

        let mut service = test_service();
        service.set_base_url(server.url());

        let resp = service.reverse_geocode(40.714224, -73.961452).send().unwrap();
        assert_eq!(resp.status, "OK");
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].place_id, "abc");
        assert_eq!(resp.results[0].formatted_address, "1 Main St");
        mock.assert();
    }

    #[test]
    fn test_send_api_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"ZERO_RESULTS"}"#)
            .create();

        let mut service = test_service();
        service.set_base_url(server.url());

        let err = service.reverse_geocode(40.714224, -73.961452).send().unwrap_err();
        match err {
            GeocodeError::Api { status, message } => {
                assert_eq!(status, "ZERO_RESULTS");
                assert_eq!(message, None);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_send_http_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/json")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("internal error")
            .create();

        let mut service = test_service();
        service.set_base_url(server.url());

        let err = service.reverse_geocode(40.714224, -73.961452).send().unwrap_err();
        match err {
            GeocodeError::HttpStatus { code, body } => {
                assert_eq!(code, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[test]
    fn test_send_decode_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("not json at all")
            .create();

        let mut service = test_service();
        service.set_base_url(server.url());

        let err = service.reverse_geocode(40.714224, -73.961452).send().unwrap_err();
        assert!(matches!(err, GeocodeError::Decode(_)));
    }

    #[test]
    fn test_send_invalid_request_skips_network() {
        // No server at all: validation must fail before any connection attempt.
        let mut service = test_service();
        service.set_base_url("http://127.0.0.1:1");

        let err = service.reverse_geocode(0.0, 0.0).send().unwrap_err();
        assert!(matches!(err, GeocodeError::MissingLocator));
    }
}
