use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Operator clearance level. The derived ordering follows declaration order,
/// so `Role::Operator < Role::SystemCore` holds and `can_access` is a plain
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Operator,
    Manager,
    Administrator,
    SystemCore,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::Operator,
            Role::Manager,
            Role::Administrator,
            Role::SystemCore,
        ]
    }

    /// Position in the clearance ladder, 0 = lowest.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// True when this clearance meets or exceeds the required one.
    pub fn can_access(self, required: Role) -> bool {
        self >= required
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Operator => "OPERATOR",
            Role::Manager => "MANAGER",
            Role::Administrator => "ADMINISTRATOR",
            Role::SystemCore => "SYSTEM_CORE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPERATOR" | "operator" => Ok(Role::Operator),
            "MANAGER" | "manager" => Ok(Role::Manager),
            "ADMINISTRATOR" | "administrator" => Ok(Role::Administrator),
            "SYSTEM_CORE" | "system_core" | "system-core" => Ok(Role::SystemCore),
            _ => Err(crate::error::AtlasError::UnknownRole(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
