use crate::action::{ActionDefinition, ParamType};
use crate::error::{AtlasError, Result};
use crate::params::{self, ParamValues, ValidationReport};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// A draft submission for one directive. Raw text goes in, typed values come
/// out; nothing here touches the session or the audit log, so dropping a form
/// is the cancel path.
#[derive(Debug, Clone)]
pub struct Form {
    action: ActionDefinition,
    raw: BTreeMap<String, String>,
}

impl Form {
    pub fn new(action: &ActionDefinition) -> Self {
        Self {
            action: action.clone(),
            raw: BTreeMap::new(),
        }
    }

    pub fn action(&self) -> &ActionDefinition {
        &self.action
    }

    /// Stores a raw value for a declared field. Coercion to the declared type
    /// happens at validation time so that every problem is reported together.
    pub fn set(&mut self, field: &str, raw: &str) -> Result<()> {
        if self.action.param(field).is_none() {
            return Err(AtlasError::UnknownField {
                action: self.action.id.clone(),
                field: field.to_string(),
            });
        }
        self.raw.insert(field.to_string(), raw.to_string());
        Ok(())
    }

    pub fn validate(&self) -> ValidationReport {
        let (values, mut report) = self.coerce();
        let schema_report = params::validate(&self.action, &values);
        for issue in schema_report.issues {
            if !report.issues.iter().any(|i| i.field == issue.field) {
                report.issues.push(issue);
            }
        }
        report
    }

    /// Typed values if the draft is valid, otherwise the full issue report.
    pub fn finish(&self) -> std::result::Result<ParamValues, ValidationReport> {
        let report = self.validate();
        if report.ok() {
            let (values, _) = self.coerce();
            Ok(values)
        } else {
            Err(report)
        }
    }

    fn coerce(&self) -> (ParamValues, ValidationReport) {
        let mut values = ParamValues::new();
        let mut report = ValidationReport::default();

        for (field, raw) in &self.raw {
            // set() guarantees the field exists in the schema
            let Some(spec) = self.action.param(field) else {
                continue;
            };
            match spec.param_type {
                ParamType::Number => match raw.trim().parse::<f64>() {
                    Ok(n) => {
                        values.insert(field.clone(), n.into());
                    }
                    Err(_) => report.push(field, "must be a number"),
                },
                ParamType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                    "true" => {
                        values.insert(field.clone(), true.into());
                    }
                    "false" => {
                        values.insert(field.clone(), false.into());
                    }
                    _ => report.push(field, "must be true or false"),
                },
                ParamType::String | ParamType::Selection => {
                    values.insert(field.clone(), raw.as_str().into());
                }
            }
        }

        (values, report)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::params::ParamValue;

    fn form_for(id: &str) -> Form {
        let catalog = Catalog::builtin();
        Form::new(catalog.require(id).unwrap())
    }

    #[test]
    fn unknown_field_rejected_at_set() {
        let mut form = form_for("act_001");
        let err = form.set("backdoor", "open").unwrap_err();
        assert!(matches!(err, AtlasError::UnknownField { .. }));
    }

    #[test]
    fn empty_draft_reports_all_required_fields() {
        let form = form_for("act_001");
        let report = form.validate();
        let fields: Vec<&str> = report.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["amount", "vendor_id", "auth_code"]);
    }

    #[test]
    fn missing_amount_blocks_finish() {
        let mut form = form_for("act_001");
        form.set("vendor_id", "VN-884").unwrap();
        form.set("auth_code", "AC-100").unwrap();
        let report = form.finish().unwrap_err();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field, "amount");
    }

    #[test]
    fn unparseable_number_is_an_issue_not_a_zero() {
        let mut form = form_for("act_001");
        form.set("amount", "a lot").unwrap();
        form.set("vendor_id", "VN-884").unwrap();
        form.set("auth_code", "AC-100").unwrap();
        let report = form.finish().unwrap_err();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].message, "must be a number");
    }

    #[test]
    fn boolean_coercion_is_case_insensitive() {
        let mut form = form_for("act_005");
        form.set("safe_mode", "TRUE").unwrap();
        let values = form.finish().unwrap();
        assert_eq!(values.get("safe_mode"), Some(&ParamValue::Flag(true)));

        let mut form = form_for("act_005");
        form.set("safe_mode", "maybe").unwrap();
        let report = form.finish().unwrap_err();
        assert_eq!(report.issues[0].message, "must be true or false");
    }

    #[test]
    fn required_acknowledgement_cannot_be_declined() {
        let mut form = form_for("act_003");
        form.set("resource_id", "ds-main").unwrap();
        form.set("confirm_purge", "false").unwrap();
        let report = form.finish().unwrap_err();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field, "confirm_purge");
        assert_eq!(report.issues[0].message, "must be explicitly confirmed");
    }

    #[test]
    fn happy_path_produces_typed_values() {
        let mut form = form_for("act_001");
        form.set("amount", "2500.50").unwrap();
        form.set("vendor_id", "VN-884").unwrap();
        form.set("auth_code", "AC-100").unwrap();
        let values = form.finish().unwrap();
        assert_eq!(values.get("amount"), Some(&ParamValue::Number(2500.5)));
        assert_eq!(
            values.get("vendor_id"),
            Some(&ParamValue::Text("VN-884".to_string()))
        );
    }

    #[test]
    fn selection_raw_value_checked_against_options() {
        let mut form = form_for("act_002");
        form.set("target_user", "audit@example.com").unwrap();
        form.set("duration_hours", "4").unwrap();
        form.set("environment", "SANDBOX").unwrap();
        let report = form.finish().unwrap_err();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field, "environment");

        let mut form = form_for("act_002");
        form.set("target_user", "audit@example.com").unwrap();
        form.set("duration_hours", "4").unwrap();
        form.set("environment", "STAGING").unwrap();
        assert!(form.finish().is_ok());
    }

    #[test]
    fn blank_required_string_is_missing() {
        let mut form = form_for("act_004");
        form.set("reason", "  ").unwrap();
        let report = form.validate();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].message, "required value missing");
    }
}
