use crate::action::ActionDefinition;
use crate::params::ParamValues;

// ---------------------------------------------------------------------------
// Advisory
// ---------------------------------------------------------------------------

/// Advisory text recorded when the risk layer cannot be reached. Fixed wording
/// so downstream tooling can match on it.
pub const FALLBACK_ADVISORY: &str =
    "External security layer offline. Proceed with manual verification.";

/// Advisory text recorded when the risk layer answered with empty content.
pub const EMPTY_ADVISORY: &str = "Assessment unavailable.";

/// Outcome of a risk assessment. Advisories are best effort: `Unavailable`
/// stands in for every upstream failure and always renders as the fixed
/// fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    Assessed(String),
    Unavailable,
}

impl Advisory {
    pub fn text(&self) -> &str {
        match self {
            Advisory::Assessed(s) => s,
            Advisory::Unavailable => FALLBACK_ADVISORY,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Advisory::Assessed(s) => s,
            Advisory::Unavailable => FALLBACK_ADVISORY.to_string(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Advisory::Unavailable)
    }
}

// ---------------------------------------------------------------------------
// RiskAdvisor
// ---------------------------------------------------------------------------

/// Produces a pre-execution risk advisory for a directive. Implementations
/// must not fail: any internal error maps to `Advisory::Unavailable`. The
/// execution pipeline additionally bounds the call with a timeout.
#[allow(async_fn_in_trait)]
pub trait RiskAdvisor {
    async fn assess(&self, action: &ActionDefinition, values: &ParamValues) -> Advisory;
}

/// Advisor used when no risk endpoint is configured. Every assessment reports
/// the offline fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAdvisor;

impl RiskAdvisor for OfflineAdvisor {
    async fn assess(&self, _action: &ActionDefinition, _values: &ParamValues) -> Advisory {
        Advisory::Unavailable
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn unavailable_renders_fallback_text() {
        let advisory = Advisory::Unavailable;
        assert_eq!(
            advisory.text(),
            "External security layer offline. Proceed with manual verification."
        );
        assert!(advisory.is_unavailable());
    }

    #[test]
    fn assessed_text_passes_through() {
        let advisory = Advisory::Assessed("- No concerns.".to_string());
        assert_eq!(advisory.text(), "- No concerns.");
        assert_eq!(advisory.into_text(), "- No concerns.");
    }

    #[tokio::test]
    async fn offline_advisor_is_always_unavailable() {
        let catalog = Catalog::builtin();
        let action = catalog.require("act_005").unwrap();
        let advisory = OfflineAdvisor.assess(action, &ParamValues::new()).await;
        assert!(advisory.is_unavailable());
    }
}
