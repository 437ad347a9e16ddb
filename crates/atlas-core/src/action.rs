use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DangerLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DangerLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl DangerLevel {
    pub fn all() -> &'static [DangerLevel] {
        &[
            DangerLevel::Low,
            DangerLevel::Medium,
            DangerLevel::High,
            DangerLevel::Critical,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DangerLevel::Low => "LOW",
            DangerLevel::Medium => "MEDIUM",
            DangerLevel::High => "HIGH",
            DangerLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DangerLevel {
    type Err = crate::error::AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" | "low" => Ok(DangerLevel::Low),
            "MEDIUM" | "medium" => Ok(DangerLevel::Medium),
            "HIGH" | "high" => Ok(DangerLevel::High),
            "CRITICAL" | "critical" => Ok(DangerLevel::Critical),
            _ => Err(crate::error::AtlasError::UnknownDangerLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ParamType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Selection,
}

impl ParamType {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Selection => "selection",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ParamType {
    type Err = crate::error::AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParamType::String),
            "number" => Ok(ParamType::Number),
            "boolean" => Ok(ParamType::Boolean),
            "selection" => Ok(ParamType::Selection),
            _ => Err(crate::error::AtlasError::UnknownParamType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ParamSpec
// ---------------------------------------------------------------------------

/// One field of an action's input schema. `options` is only meaningful for
/// `selection` parameters; catalog validation enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ParamSpec {
    pub fn text(id: &str, label: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            param_type: ParamType::String,
            required,
            options: None,
        }
    }

    pub fn number(id: &str, label: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            param_type: ParamType::Number,
            required,
            options: None,
        }
    }

    pub fn boolean(id: &str, label: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            param_type: ParamType::Boolean,
            required,
            options: None,
        }
    }

    pub fn selection(id: &str, label: &str, required: bool, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            param_type: ParamType::Selection,
            required,
            options: Some(options.iter().map(|s| s.to_string()).collect()),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionDefinition
// ---------------------------------------------------------------------------

/// A directive as declared in the catalog. `action_type` is the machine tag
/// recorded in audit entries; `id` is the catalog key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub label: String,
    pub description: String,
    pub danger_level: DangerLevel,
    pub required_role: crate::role::Role,
    #[serde(default)]
    pub parameters: Vec<ParamSpec>,
    #[serde(default)]
    pub icon: String,
}

impl ActionDefinition {
    pub fn param(&self, id: &str) -> Option<&ParamSpec> {
        self.parameters.iter().find(|p| p.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn danger_level_ordering() {
        assert!(DangerLevel::Low < DangerLevel::Medium);
        assert!(DangerLevel::High < DangerLevel::Critical);
    }

    #[test]
    fn danger_level_roundtrip() {
        use std::str::FromStr;
        for level in DangerLevel::all() {
            assert_eq!(DangerLevel::from_str(level.as_str()).unwrap(), *level);
        }
        assert!(DangerLevel::from_str("EXTREME").is_err());
    }

    #[test]
    fn param_type_wire_values() {
        let json = serde_json::to_string(&ParamType::Selection).unwrap();
        assert_eq!(json, "\"selection\"");
        let back: ParamType = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(back, ParamType::Boolean);
    }

    #[test]
    fn action_definition_wire_shape() {
        let action = ActionDefinition {
            id: "act_900".to_string(),
            action_type: "CUSTOM_OP".to_string(),
            label: "Custom Operation".to_string(),
            description: "A test directive.".to_string(),
            danger_level: DangerLevel::High,
            required_role: Role::Manager,
            parameters: vec![ParamSpec::number("amount", "Amount", true)],
            icon: "fa-gear".to_string(),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"dangerLevel\":\"HIGH\""));
        assert!(json.contains("\"requiredRole\":\"MANAGER\""));
        assert!(json.contains("\"type\":\"CUSTOM_OP\""));
        assert!(json.contains("\"type\":\"number\""));

        let back: ActionDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn selection_spec_carries_options() {
        let spec = ParamSpec::selection("env", "Environment", true, &["STAGING", "PRODUCTION"]);
        assert_eq!(spec.param_type, ParamType::Selection);
        assert_eq!(
            spec.options.as_deref(),
            Some(&["STAGING".to_string(), "PRODUCTION".to_string()][..])
        );
    }

    #[test]
    fn param_lookup() {
        let action = ActionDefinition {
            id: "a".to_string(),
            action_type: "T".to_string(),
            label: "L".to_string(),
            description: String::new(),
            danger_level: DangerLevel::Low,
            required_role: Role::Operator,
            parameters: vec![ParamSpec::text("x", "X", false)],
            icon: String::new(),
        };
        assert!(action.param("x").is_some());
        assert!(action.param("y").is_none());
    }
}
