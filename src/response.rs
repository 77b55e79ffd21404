//! Response model for the Geocoding API.
//!
//! These types mirror the JSON shape documented at
//! <https://developers.google.com/maps/documentation/geocoding/requests-reverse-geocoding#ReverseGeocoding>.
//! Fields the service omits for some result kinds carry serde defaults so a
//! sparse result still decodes.

use serde::Deserialize;

/// Top-level response returned by a geocoding request.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Results matching the query, ordered best match first.
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// Request status, `"OK"` on success (e.g. "ZERO_RESULTS", "REQUEST_DENIED" otherwise).
    pub status: String,
    /// Detail about why the request failed, present for error statuses.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Attributions that must be displayed to the user alongside the results.
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// A single geocoding result.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    /// Feature types describing this result (e.g. "country", "postal_code").
    #[serde(default)]
    pub types: Vec<String>,
    /// Human-readable address of the place.
    #[serde(default)]
    pub formatted_address: String,
    /// Components composing the formatted address.
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    /// Phone number of the place in its local format, if known.
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    /// Location of the result on the map.
    #[serde(default)]
    pub geometry: Geometry,
    /// Set when the geocoder returned an approximate rather than exact match.
    #[serde(default)]
    pub partial_match: Option<bool>,
    /// Textual identifier uniquely identifying the place.
    pub place_id: String,
}

/// A component used to compose an address.
///
/// For example, the state of Alaska has a `long_name` of "Alaska" and a
/// `short_name` of "AK".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressComponent {
    /// Types of this component (e.g. "administrative_area_level_1").
    #[serde(default)]
    pub types: Vec<String>,
    /// Full text description or name of the component.
    pub long_name: String,
    /// Abbreviated name of the component, if available.
    pub short_name: String,
}

/// Location information for a result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    /// Geocoded coordinates of the place.
    #[serde(default)]
    pub location: LatLng,
    /// Precision of the location (e.g. "ROOFTOP", "APPROXIMATE").
    #[serde(default)]
    pub location_type: String,
    /// Recommended bounding box for displaying the result on a map.
    // Wire name "view_port" follows the deployed endpoint, not the docs.
    #[serde(rename = "view_port", default)]
    pub viewport: LatLngBounds,
    /// Bounding box fully containing the result, when it differs from the viewport.
    #[serde(default)]
    pub bounds: Option<LatLngBounds>,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A bounding box given by its southwest and northeast corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LatLngBounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}
