//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use salonbook_domain::BookingError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BookingError);

impl From<InfraError> for BookingError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BookingError> for InfraError {
    fn from(value: BookingError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let booking = if err.is_decode() {
            BookingError::Parse(format!("http response decode failed: {err}"))
        } else if err.is_timeout() {
            BookingError::Network(format!("http request timed out: {err}"))
        } else if err.is_connect() {
            BookingError::Network(format!("http connection failed: {err}"))
        } else if err.is_builder() {
            BookingError::Internal(format!("http request could not be built: {err}"))
        } else {
            BookingError::Network(format!("http request failed: {err}"))
        };
        InfraError(booking)
    }
}

impl From<JsonError> for InfraError {
    fn from(err: JsonError) -> Self {
        InfraError(BookingError::Parse(format!("json parse failed: {err}")))
    }
}
