use crate::action::ActionDefinition;
use crate::audit::AuditLog;
use crate::catalog::Catalog;
use crate::error::{AtlasError, Result};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub permissions: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            permissions: vec!["*".to_string()],
        }
    }

    /// The console's stock operator identity.
    pub fn default_commander() -> Self {
        Self::new("user_9921", "Cmdr. J. Sterling", Role::Administrator)
    }
}

// ---------------------------------------------------------------------------
// SystemStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemStatus {
    Idle,
    Busy,
    Alert,
}

impl SystemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemStatus::Idle => "IDLE",
            SystemStatus::Busy => "BUSY",
            SystemStatus::Alert => "ALERT",
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One operator's console session: identity, status light, selected directive
/// and the audit trail. All state lives here and dies with the session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    user: User,
    status: SystemStatus,
    active: Option<String>,
    log: AuditLog,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            status: SystemStatus::Idle,
            active: None,
            log: AuditLog::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn status(&self) -> SystemStatus {
        self.status
    }

    pub fn log(&self) -> &AuditLog {
        &self.log
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Opens a directive for form entry. Only directives visible to this
    /// session's clearance can be selected; a denied selection records
    /// nothing, the tile simply does not exist for this caller.
    pub fn select<'a>(
        &mut self,
        catalog: &'a Catalog,
        action_id: &str,
    ) -> Result<&'a ActionDefinition> {
        self.ensure_available()?;
        let action = catalog.require(action_id)?;
        if !self.user.role.can_access(action.required_role) {
            return Err(AtlasError::AuthorizationDenied {
                action: action.id.clone(),
                role: self.user.role.to_string(),
            });
        }
        self.active = Some(action.id.clone());
        Ok(action)
    }

    /// Abandons the selected directive. The audit log is untouched.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Clears an `Alert` raised by a failed directive.
    pub fn acknowledge_alert(&mut self) -> Result<()> {
        if self.status != SystemStatus::Alert {
            return Err(AtlasError::NoActiveAlert);
        }
        self.status = SystemStatus::Idle;
        Ok(())
    }

    pub(crate) fn ensure_available(&self) -> Result<()> {
        if self.status == SystemStatus::Busy {
            return Err(AtlasError::SessionBusy);
        }
        Ok(())
    }

    pub(crate) fn begin(&mut self) {
        self.status = SystemStatus::Busy;
    }

    pub(crate) fn finish(&mut self, ok: bool) {
        self.status = if ok {
            SystemStatus::Idle
        } else {
            SystemStatus::Alert
        };
        self.active = None;
    }

    pub(crate) fn log_mut(&mut self) -> &mut AuditLog {
        &mut self.log
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
