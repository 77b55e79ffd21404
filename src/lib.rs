//! # revgeo - Google Geocoding API client
//!
//! Blocking client for the reverse-geocoding endpoint of the Google
//! Geocoding API: turn geographic coordinates (or a place ID) into
//! structured, human-readable address data.
//!
//! ## Features
//!
//! - **Shared transport**: one [`Service`] wraps a pooled `reqwest` client
//!   and serves any number of requests
//! - **Fluent requests**: per-call builder for optional parameters
//!   (language, result-type and location-type filters, place ID)
//! - **Typed responses**: the full response model, decoded with serde
//! - **Explicit errors**: validation, transport, HTTP-status, decode, and
//!   API-status failures are distinct [`GeocodeError`] variants
//!
//! ## Quick Start
//!
//! ```ignore
//! use revgeo::Service;
//! use reqwest::blocking::Client;
//!
//! let service = Service::new(Client::new(), "my-api-key");
//!
//! let response = service
//!     .reverse_geocode(40.714224, -73.961452)
//!     .language("en")
//!     .send()?;
//!
//! for result in &response.results {
//!     println!("{}: {}", result.place_id, result.formatted_address);
//! }
//! ```
//!
//! ## Scope
//!
//! This layer builds the query, performs one blocking GET per request, and
//! decodes the result. Retries, rate limiting, caching, and timeouts are the
//! caller's (or the underlying client's) concern.

pub mod error;
pub mod response;
pub mod reverse;
pub mod service;

// Re-export main types at crate root for convenience
pub use error::{GeocodeError, Result};
pub use response::{
    AddressComponent, GeocodeResponse, GeocodeResult, Geometry, LatLng, LatLngBounds,
};
pub use reverse::ReverseGeocode;
pub use service::{Service, DEFAULT_BASE_URL};
