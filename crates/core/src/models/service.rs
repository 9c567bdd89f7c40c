use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable offering. Every service belongs to exactly one provider, whose
/// working hours decide when the service can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub name: String,
    /// Configured length of one appointment. The public slot listing ignores it
    /// in favour of the fixed listing granularity.
    pub duration_minutes: u32,
    pub active: bool,
}
