use crate::action::{ActionDefinition, ParamType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// ParamValue
// ---------------------------------------------------------------------------

/// A submitted scalar. Selection values travel as `Text`; the schema decides
/// whether a text value must also be a member of an options list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Wire name of the value's own type, used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Flag(_) => "boolean",
            ParamValue::Number(_) => "number",
            ParamValue::Text(_) => "string",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag(b) => write!(f, "{b}"),
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Flag(b)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

/// Submitted values keyed by parameter id. Ordered map so rendering and
/// serialized audit metadata are deterministic.
pub type ParamValues = BTreeMap<String, ParamValue>;

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Checks submitted values against an action's schema. Collects every issue
/// rather than stopping at the first, so a caller can surface the whole form
/// state at once.
pub fn validate(action: &ActionDefinition, values: &ParamValues) -> ValidationReport {
    let mut report = ValidationReport::default();

    for spec in &action.parameters {
        let value = values.get(&spec.id);
        match (spec.param_type, value) {
            (_, None) => {
                if spec.required {
                    report.push(&spec.id, "required value missing");
                }
            }
            (ParamType::String, Some(ParamValue::Text(s))) => {
                if spec.required && s.trim().is_empty() {
                    report.push(&spec.id, "required value missing");
                }
            }
            (ParamType::Number, Some(ParamValue::Number(n))) => {
                if !n.is_finite() {
                    report.push(&spec.id, "not a finite number");
                }
            }
            (ParamType::Boolean, Some(ParamValue::Flag(b))) => {
                // A required flag encodes an acknowledgement; it must be
                // affirmatively set, not merely present.
                if spec.required && !*b {
                    report.push(&spec.id, "must be explicitly confirmed");
                }
            }
            (ParamType::Selection, Some(ParamValue::Text(s))) => {
                let allowed = spec.options.as_deref().unwrap_or_default();
                if !allowed.iter().any(|o| o == s) {
                    report.push(&spec.id, format!("must be one of: {}", allowed.join(", ")));
                }
            }
            (expected, Some(got)) => {
                report.push(
                    &spec.id,
                    format!("expected {}, got {}", expected.as_str(), got.kind()),
                );
            }
        }
    }

    for key in values.keys() {
        if action.param(key).is_none() {
            report.push(key, "not declared by this action");
        }
    }

    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{DangerLevel, ParamSpec};
    use crate::role::Role;

    fn payment_action() -> ActionDefinition {
        ActionDefinition {
            id: "act_001".to_string(),
            action_type: "APPROVE_PAYMENT".to_string(),
            label: "Approve Strategic Payment".to_string(),
            description: String::new(),
            danger_level: DangerLevel::High,
            required_role: Role::Manager,
            parameters: vec![
                ParamSpec::number("amount", "Transaction Amount", true),
                ParamSpec::text("vendor_id", "Vendor Identifier", true),
                ParamSpec::selection("env", "Environment", false, &["STAGING", "PRODUCTION"]),
                ParamSpec::boolean("expedite", "Expedite", false),
            ],
            icon: String::new(),
        }
    }

    fn values(pairs: &[(&str, ParamValue)]) -> ParamValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn valid_submission_passes() {
        let action = payment_action();
        let vals = values(&[
            ("amount", 2500.0.into()),
            ("vendor_id", "VN-884".into()),
            ("env", "STAGING".into()),
            ("expedite", true.into()),
        ]);
        let report = validate(&action, &vals);
        assert!(report.ok(), "unexpected issues: {report}");
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let action = payment_action();
        let report = validate(&action, &ParamValues::new());
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues.iter().any(|i| i.field == "amount"));
        assert!(report.issues.iter().any(|i| i.field == "vendor_id"));
    }

    #[test]
    fn blank_required_string_counts_as_missing() {
        let action = payment_action();
        let vals = values(&[("amount", 10.0.into()), ("vendor_id", "   ".into())]);
        let report = validate(&action, &vals);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field, "vendor_id");
        assert_eq!(report.issues[0].message, "required value missing");
    }

    #[test]
    fn type_mismatch_is_reported() {
        let action = payment_action();
        let vals = values(&[("amount", "lots".into()), ("vendor_id", "VN-1".into())]);
        let report = validate(&action, &vals);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].message, "expected number, got string");
    }

    #[test]
    fn selection_must_be_a_listed_option() {
        let action = payment_action();
        let vals = values(&[
            ("amount", 1.0.into()),
            ("vendor_id", "VN-1".into()),
            ("env", "LEGACY".into()),
        ]);
        let report = validate(&action, &vals);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field, "env");
        assert!(report.issues[0].message.contains("STAGING"));
    }

    #[test]
    fn required_boolean_must_be_set_true() {
        let action = ActionDefinition {
            id: "act_x".to_string(),
            action_type: "PURGE".to_string(),
            label: "Purge".to_string(),
            description: String::new(),
            danger_level: DangerLevel::Critical,
            required_role: Role::Administrator,
            parameters: vec![ParamSpec::boolean("confirm", "Acknowledge Data Loss", true)],
            icon: String::new(),
        };

        let report = validate(&action, &values(&[("confirm", false.into())]));
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].message, "must be explicitly confirmed");

        assert!(validate(&action, &values(&[("confirm", true.into())])).ok());
    }

    #[test]
    fn optional_boolean_false_is_valid() {
        let action = payment_action();
        let vals = values(&[
            ("amount", 1.0.into()),
            ("vendor_id", "VN-1".into()),
            ("expedite", false.into()),
        ]);
        assert!(validate(&action, &vals).ok());
    }

    #[test]
    fn non_finite_number_is_rejected() {
        let action = payment_action();
        let vals = values(&[
            ("amount", f64::NAN.into()),
            ("vendor_id", "VN-1".into()),
        ]);
        let report = validate(&action, &vals);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].message, "not a finite number");
    }

    #[test]
    fn undeclared_keys_are_rejected() {
        let action = payment_action();
        let vals = values(&[
            ("amount", 1.0.into()),
            ("vendor_id", "VN-1".into()),
            ("backdoor", "open".into()),
        ]);
        let report = validate(&action, &vals);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field, "backdoor");
    }

    #[test]
    fn report_display_joins_issues() {
        let action = payment_action();
        let report = validate(&action, &ParamValues::new());
        let text = report.to_string();
        assert!(text.contains("amount: required value missing"));
        assert!(text.contains("; "));
    }

    #[test]
    fn param_value_untagged_serde() {
        let vals = values(&[
            ("amount", 2500.0.into()),
            ("safe_mode", true.into()),
            ("vendor_id", "VN-884".into()),
        ]);
        let json = serde_json::to_string(&vals).unwrap();
        assert_eq!(
            json,
            "{\"amount\":2500.0,\"safe_mode\":true,\"vendor_id\":\"VN-884\"}"
        );
        let back: ParamValues = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vals);
    }
}
