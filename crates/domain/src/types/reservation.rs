//! Reservation records, form drafts, and field-level validation errors.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::slot::SlotLabel;

/// One reservation as it appears in the remote store's snapshot.
///
/// Field names follow the store's wire vocabulary. `dia_seleccionado` stays a
/// raw string at this layer: individual snapshot records may carry malformed
/// dates and must be skippable during aggregation rather than failing the
/// whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "nombre")]
    pub holder_name: String,
    pub email: String,
    #[serde(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "tramoHorario")]
    pub slot_label: String,
    #[serde(rename = "diaSeleccionado")]
    pub day: String,
    #[serde(rename = "aceptaNormas", default)]
    pub accepts_terms: bool,
    #[serde(rename = "palomitero", default)]
    pub popcorn_machine: bool,
    #[serde(rename = "algodonAzucar", default)]
    pub cotton_candy: bool,
}

/// Contact and consent data entered by the visitor, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub holder_name: String,
    pub email: String,
    pub national_id: String,
    pub phone: String,
    pub accepts_terms: bool,
    pub popcorn_machine: bool,
    pub cotton_candy: bool,
}

/// A fully validated reservation request, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub holder_name: String,
    pub email: String,
    pub national_id: String,
    pub phone: String,
    pub day: NaiveDate,
    pub slot: SlotLabel,
    pub accepts_terms: bool,
    pub popcorn_machine: bool,
    pub cotton_candy: bool,
    /// Calendar date the request was submitted (`fechaReserva` on the wire).
    pub submitted_on: NaiveDate,
}

/// Field-level validation errors keyed by field name.
///
/// An empty map means the draft is valid. `BTreeMap` keeps error listings in
/// a stable order for display and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, keeping the first message per field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
