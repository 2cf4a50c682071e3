use std::time::Duration;

/// How long the bridge keeps re-reading a freshly provisioned user before
/// giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadPolicy {
    /// Total reads, including the first one. Zero is treated as one.
    pub attempts: u32,
    /// Pause between two reads
    pub delay: Duration,
}

impl ReloadPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    pub(crate) fn effective_attempts(&self) -> u32 {
        self.attempts.max(1)
    }
}

impl Default for ReloadPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_millis(50),
        }
    }
}
