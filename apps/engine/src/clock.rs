//! Identifier and time source behind a trait seam, so record creation stays
//! deterministic under test while production uses the system clock.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Supplies record identifiers and creation/update timestamps.
///
/// Injected into the service the same way the scorer backend is swapped:
/// held as `Arc<dyn Clock>`, defaulting to [`SystemClock`].
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn new_record_id(&self) -> String;
}

/// Production clock: wall time plus random v4 identifiers.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn new_record_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
