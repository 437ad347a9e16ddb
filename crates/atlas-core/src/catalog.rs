use crate::action::{ActionDefinition, DangerLevel, ParamSpec, ParamType};
use crate::error::{AtlasError, Result};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The ordered set of directives this console can offer. Immutable after
/// loading; authorization filtering never reorders it.
#[derive(Debug, Clone)]
pub struct Catalog {
    actions: Vec<ActionDefinition>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    actions: Vec<ActionDefinition>,
}

impl Catalog {
    /// The standard directive set shipped with the console.
    pub fn builtin() -> Self {
        let actions = vec![
            ActionDefinition {
                id: "act_001".to_string(),
                action_type: "APPROVE_PAYMENT".to_string(),
                label: "Approve Strategic Payment".to_string(),
                description: "Release high-value funds to pre-authorized vendors.".to_string(),
                danger_level: DangerLevel::High,
                required_role: Role::Manager,
                parameters: vec![
                    ParamSpec::number("amount", "Transaction Amount", true),
                    ParamSpec::text("vendor_id", "Vendor Identifier", true),
                    ParamSpec::text("auth_code", "Internal Auth Code", true),
                ],
                icon: "fa-file-invoice-dollar".to_string(),
            },
            ActionDefinition {
                id: "act_002".to_string(),
                action_type: "GRANT_SYSTEM_ACCESS".to_string(),
                label: "Provision System Access".to_string(),
                description: "Grant temporary elevated privileges to an external auditor."
                    .to_string(),
                danger_level: DangerLevel::Medium,
                required_role: Role::Administrator,
                parameters: vec![
                    ParamSpec::text("target_user", "Target User Email", true),
                    ParamSpec::number("duration_hours", "Access Duration (Hours)", true),
                    ParamSpec::selection(
                        "environment",
                        "Environment",
                        true,
                        &["STAGING", "PRODUCTION", "LEGACY"],
                    ),
                ],
                icon: "fa-user-shield".to_string(),
            },
            ActionDefinition {
                id: "act_003".to_string(),
                action_type: "DELETE_RESOURCE".to_string(),
                label: "Purge Critical Resource".to_string(),
                description: "Irreversible deletion of encrypted dataset from cold storage."
                    .to_string(),
                danger_level: DangerLevel::Critical,
                required_role: Role::Administrator,
                parameters: vec![
                    ParamSpec::text("resource_id", "Global Resource ID", true),
                    ParamSpec::boolean("confirm_purge", "Acknowledge Data Loss", true),
                ],
                icon: "fa-trash-can".to_string(),
            },
            ActionDefinition {
                id: "act_004".to_string(),
                action_type: "ROTATE_KEYS".to_string(),
                label: "Rotate Root Credentials".to_string(),
                description: "Force immediate rotation of all system-level API keys.".to_string(),
                danger_level: DangerLevel::Critical,
                required_role: Role::Administrator,
                parameters: vec![ParamSpec::text("reason", "Rotation Reason", true)],
                icon: "fa-key".to_string(),
            },
            ActionDefinition {
                id: "act_005".to_string(),
                action_type: "REBOOT_CORE".to_string(),
                label: "Initiate Core Reset".to_string(),
                description: "Restart the primary decision engine orchestrator.".to_string(),
                danger_level: DangerLevel::Medium,
                required_role: Role::Operator,
                parameters: vec![ParamSpec::boolean("safe_mode", "Execute in Safe Mode", true)],
                icon: "fa-power-off".to_string(),
            },
        ];
        Self { actions }
    }

    pub fn from_actions(actions: Vec<ActionDefinition>) -> Result<Self> {
        validate_actions(&actions)?;
        Ok(Self { actions })
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(data)?;
        Self::from_actions(file.actions)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(&data)
    }

    pub fn get(&self, id: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&ActionDefinition> {
        self.get(id)
            .ok_or_else(|| AtlasError::UnknownAction(id.to_string()))
    }

    /// Directives the given clearance may see, in catalog order. Everything
    /// else behaves as if it does not exist for that caller.
    pub fn visible_for(&self, role: Role) -> Vec<&ActionDefinition> {
        self.actions
            .iter()
            .filter(|a| role.can_access(a.required_role))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Load-time validation
// ---------------------------------------------------------------------------

fn validate_actions(actions: &[ActionDefinition]) -> Result<()> {
    let mut problems = Vec::new();

    for (i, action) in actions.iter().enumerate() {
        if action.id.trim().is_empty() {
            problems.push(format!("action #{}: empty id", i + 1));
            continue;
        }
        if actions[..i].iter().any(|a| a.id == action.id) {
            problems.push(format!("duplicate action id '{}'", action.id));
        }
        if action.label.trim().is_empty() {
            problems.push(format!("action '{}': empty label", action.id));
        }
        if action.action_type.trim().is_empty() {
            problems.push(format!("action '{}': empty type", action.id));
        } else if actions[..i].iter().any(|a| a.action_type == action.action_type) {
            // Audit records name directives by type tag, so tags must be
            // unambiguous across the catalog.
            problems.push(format!(
                "action '{}': duplicate type '{}'",
                action.id, action.action_type
            ));
        }

        for (j, param) in action.parameters.iter().enumerate() {
            if param.id.trim().is_empty() {
                problems.push(format!("action '{}': parameter #{} has empty id", action.id, j + 1));
                continue;
            }
            if action.parameters[..j].iter().any(|p| p.id == param.id) {
                problems.push(format!(
                    "action '{}': duplicate parameter id '{}'",
                    action.id, param.id
                ));
            }
            match param.param_type {
                ParamType::Selection => {
                    if param.options.as_deref().unwrap_or_default().is_empty() {
                        problems.push(format!(
                            "action '{}': selection parameter '{}' has no options",
                            action.id, param.id
                        ));
                    }
                }
                _ => {
                    if param.options.is_some() {
                        problems.push(format!(
                            "action '{}': parameter '{}' is not a selection but lists options",
                            action.id, param.id
                        ));
                    }
                }
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AtlasError::InvalidCatalog(problems.join("; ")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
