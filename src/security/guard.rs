use derive_more::Display;

use crate::security::role::RequiredRole;
use crate::security::session::SessionState;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    #[display("/login")]
    Login,
    #[display("/forbidden")]
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Pending,
    Admit,
    Deny(Redirect),
}

/// Decides whether the session may see a route gated at `required`.
///
/// The session is only read. Public routes are admitted even while the
/// session is still loading; gated routes wait for it.
pub fn evaluate(required: RequiredRole, session: &SessionState) -> Decision {
    if required == RequiredRole::Public {
        return Decision::Admit;
    }

    let SessionState::Resolved(identity) = session else {
        return Decision::Pending;
    };

    if identity.level() >= required {
        Decision::Admit
    } else if !identity.is_authenticated {
        Decision::Deny(Redirect::Login)
    } else {
        Decision::Deny(Redirect::Forbidden)
    }
}
