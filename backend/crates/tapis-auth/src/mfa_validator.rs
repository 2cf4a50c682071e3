use crate::Result as AuthErrorResult;

use tapis_core::User;

use async_trait::async_trait;
use log::warn;

/// Second-factor check for users with MFA enabled.
///
/// Returns `Ok(false)` for a wrong code; errors are reserved for the
/// validator itself being unavailable.
#[async_trait]
pub trait MfaValidator: Send + Sync {
    async fn validate(
        &self,
        user: &User,
        mfa_code: Option<&str>,
        recovery_code: Option<&str>,
    ) -> AuthErrorResult<bool>;
}

/// Stand-in used when no MFA backend is configured: every code is rejected,
/// so MFA-enabled users cannot log in until one is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledMfa;

#[async_trait]
impl MfaValidator for DisabledMfa {
    async fn validate(
        &self,
        user: &User,
        _mfa_code: Option<&str>,
        _recovery_code: Option<&str>,
    ) -> AuthErrorResult<bool> {
        warn!("MFA requested for user {} but no MFA backend is configured", user.id);
        Ok(false)
    }
}
