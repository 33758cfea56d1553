use derive_more::Display;
use serde::Deserialize;

/// Role carried by the signed-in user record.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Role {
    #[display("none")]
    #[serde(skip)]
    None,
    #[display("default")]
    #[serde(rename = "default")]
    Member,
    #[display("manager")]
    #[serde(rename = "manager")]
    Manager,
    #[display("admin")]
    #[serde(rename = "admin")]
    Admin,
}

/// Capability level a route asks for. Variants are declared in ascending order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequiredRole {
    #[display("public")]
    Public,
    #[display("authenticated")]
    Authenticated,
    #[display("manager")]
    Manager,
    #[display("admin")]
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub is_authenticated: bool,
    pub role: Role,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            role: Role::None,
        }
    }

    pub fn authenticated(role: Role) -> Self {
        Self {
            is_authenticated: true,
            role,
        }
    }

    /// Highest requirement this identity satisfies.
    pub fn level(&self) -> RequiredRole {
        if !self.is_authenticated {
            return RequiredRole::Public;
        }

        match self.role {
            Role::None | Role::Member => RequiredRole::Authenticated,
            Role::Manager => RequiredRole::Manager,
            Role::Admin => RequiredRole::Admin,
        }
    }
}
