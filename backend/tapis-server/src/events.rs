use tapis_core::User;

use log::{info, warn};
use metrics::counter;

/// Login outcome events, written to the log and counted as metrics
#[derive(Debug, Clone)]
pub struct LoginEvents {
    prefix: &'static str,
}

impl LoginEvents {
    pub fn new() -> Self {
        Self {
            prefix: "tapis_bridge",
        }
    }

    pub fn login_succeeded(&self, user: &User) {
        info!(
            "Login succeeded: user={} email={} method=email",
            user.id, user.email
        );
        counter!(
            format!("{}.login.succeeded", self.prefix),
            "authentication_method" => "email"
        )
        .increment(1);
    }

    pub fn login_failed(&self, identifier: &str, reason: &'static str) {
        warn!(
            "Login failed: identifier={} reason={} method=email",
            identifier, reason
        );
        counter!(
            format!("{}.login.failed", self.prefix),
            "reason" => reason,
            "authentication_method" => "email"
        )
        .increment(1);
    }
}

impl Default for LoginEvents {
    fn default() -> Self {
        Self::new()
    }
}
