use crate::domain::model::SerialNumber;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide container sequence shared by every variant. Starts at 1.
static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_serial(type_code: char) -> SerialNumber {
    let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SerialNumber::new(type_code, sequence)
}
