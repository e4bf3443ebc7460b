/// Receives a message when hazardous cargo would breach its container's limit.
pub trait HazardNotifier: Send + Sync {
    fn notify_hazard(&self, message: &str);
}

/// Default notifier: a warning through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHazardNotifier;

impl HazardNotifier for LogHazardNotifier {
    fn notify_hazard(&self, message: &str) {
        tracing::warn!("HAZARD: {}", message);
    }
}
