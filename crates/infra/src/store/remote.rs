//! Remote reservation store adapter.
//!
//! The store is a single HTTP endpoint: `GET` returns the full snapshot as
//! JSON under a `raw` field, `POST` takes one reservation as a urlencoded
//! form and answers with JSON whose `error` field, when present, carries a
//! human-readable rejection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use salonbook_core::booking::ports::{ReservationStore, SubmitOutcome};
use salonbook_domain::{day_key, BookingError, Reservation, ReservationRequest, Result};
use serde::Deserialize;
use tracing::debug;

use crate::http::HttpClient;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP adapter for the remote reservation store.
pub struct RemoteReservationStore {
    endpoint: String,
    http_client: HttpClient,
}

/// Snapshot response body: the record list lives under `raw`.
#[derive(Debug, Deserialize)]
struct SnapshotBody {
    #[serde(default)]
    raw: Vec<Reservation>,
}

/// Write response body: an `error` field means the write was rejected.
#[derive(Debug, Deserialize)]
struct WriteBody {
    error: Option<String>,
}

impl RemoteReservationStore {
    /// Create a store adapter for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .max_attempts(3)
            .build()?;
        Ok(Self::with_client(endpoint, http_client))
    }

    /// Create a store adapter with a custom HTTP client (for testing).
    pub fn with_client(endpoint: impl Into<String>, http_client: HttpClient) -> Self {
        Self { endpoint: endpoint.into(), http_client }
    }

    fn form_fields(request: &ReservationRequest) -> Vec<(&'static str, String)> {
        vec![
            ("nombre", request.holder_name.clone()),
            ("email", request.email.clone()),
            ("dni", request.national_id.clone()),
            ("telefono", request.phone.clone()),
            ("diaSeleccionado", day_key(request.day)),
            ("tramoHorario", request.slot.wire_label().to_string()),
            ("aceptaNormas", bool_field(request.accepts_terms)),
            ("palomitero", bool_field(request.popcorn_machine)),
            ("algodonAzucar", bool_field(request.cotton_candy)),
            ("fechaReserva", day_key(request.submitted_on)),
        ]
    }
}

fn bool_field(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

#[async_trait]
impl ReservationStore for RemoteReservationStore {
    async fn fetch_all(&self) -> Result<Vec<Reservation>> {
        let builder = self.http_client.request(Method::GET, &self.endpoint);
        let response = self.http_client.send(builder).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookingError::Network(format!("snapshot fetch returned {status}")));
        }

        let body: SnapshotBody = response
            .json()
            .await
            .map_err(|err| BookingError::Parse(format!("snapshot body parse failed: {err}")))?;
        debug!(records = body.raw.len(), "fetched reservation snapshot");
        Ok(body.raw)
    }

    async fn submit(&self, request: &ReservationRequest) -> Result<SubmitOutcome> {
        let builder = self
            .http_client
            .request(Method::POST, &self.endpoint)
            .form(&Self::form_fields(request));
        let response = self.http_client.send(builder).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookingError::Network(format!("reservation write returned {status}")));
        }

        let body: WriteBody = response
            .json()
            .await
            .map_err(|err| BookingError::Parse(format!("write response parse failed: {err}")))?;

        match body.error {
            Some(message) => Ok(SubmitOutcome::Rejected(message)),
            None => Ok(SubmitOutcome::Accepted),
        }
    }
}
