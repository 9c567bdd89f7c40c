use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A computed, never persisted, bookable window in the provider's local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub service_id: Uuid,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub available: bool,
}

impl Slot {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Wire shape of a slot as returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotResponse {
    #[serde(rename = "id_servicio")]
    pub service_id: Uuid,
    #[serde(rename = "fecha_inicio")]
    pub start: NaiveDateTime,
    #[serde(rename = "fecha_fin")]
    pub end: NaiveDateTime,
    #[serde(rename = "disponible")]
    pub available: bool,
    #[serde(rename = "precio_adicional")]
    pub extra_price: f64,
    #[serde(rename = "observaciones")]
    pub notes: Option<String>,
}

impl From<Slot> for SlotResponse {
    fn from(slot: Slot) -> Self {
        Self {
            service_id: slot.service_id,
            start: slot.start,
            end: slot.end,
            available: slot.available,
            extra_price: 0.0,
            notes: None,
        }
    }
}
