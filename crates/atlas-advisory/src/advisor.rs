//! `RiskAdvisor` implementation backed by the generative client.

use crate::client::GenerativeClient;
use crate::types::{Content, GenerateRequest};
use atlas_core::action::ActionDefinition;
use atlas_core::advisor::{Advisory, RiskAdvisor, EMPTY_ADVISORY};
use atlas_core::params::ParamValues;
use tracing::warn;

/// Standing instruction sent with every assessment request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a senior security architect for ATLAS CONTROL. Your tone is cold, professional, and precise.";

/// Builds the assessment prompt for one directive submission.
pub fn build_prompt(action_type: &str, values: &ParamValues) -> String {
    let params_json = serde_json::to_string(values).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Perform a brief technical risk assessment for the following system action:\n\
         Action: {action_type}\n\
         Parameters: {params_json}\n\n\
         Respond in 3 short bullet points focusing on Security, Compliance, and Stability. \
         No conversational filler."
    )
}

// ─── GenerativeAdvisor ──────────────────────────────────────────────────────

/// Risk advisor that asks a generative model for an assessment. Upstream
/// failures never escape: every error path degrades to
/// [`Advisory::Unavailable`], and an empty model response records the fixed
/// "unavailable" assessment text.
#[derive(Debug, Clone)]
pub struct GenerativeAdvisor {
    client: GenerativeClient,
}

impl GenerativeAdvisor {
    pub fn new(client: GenerativeClient) -> Self {
        Self { client }
    }
}

impl RiskAdvisor for GenerativeAdvisor {
    async fn assess(&self, action: &ActionDefinition, values: &ParamValues) -> Advisory {
        let request = GenerateRequest {
            contents: vec![Content::user(build_prompt(&action.action_type, values))],
            system_instruction: Some(Content::text(SYSTEM_INSTRUCTION)),
        };

        match self.client.generate(&request).await {
            Ok(response) => match response.text() {
                Some(text) if !text.trim().is_empty() => Advisory::Assessed(text),
                _ => Advisory::Assessed(EMPTY_ADVISORY.to_string()),
            },
            Err(e) => {
                warn!(action = %action.id, error = %e, "risk assessment request failed");
                Advisory::Unavailable
            }
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::advisor::FALLBACK_ADVISORY;
    use atlas_core::catalog::Catalog;

    fn reset_action() -> ActionDefinition {
        Catalog::builtin().require("act_005").unwrap().clone()
    }

    fn reset_values() -> ParamValues {
        let mut values = ParamValues::new();
        values.insert("safe_mode".to_string(), true.into());
        values
    }

    fn client_for(server: &mockito::Server) -> GenerativeClient {
        GenerativeClient::new("test-key")
            .unwrap()
            .with_base_url(server.url())
    }

    #[test]
    fn prompt_carries_action_and_parameter_json() {
        let prompt = build_prompt("REBOOT_CORE", &reset_values());
        assert!(prompt.starts_with(
            "Perform a brief technical risk assessment for the following system action:"
        ));
        assert!(prompt.contains("Action: REBOOT_CORE"));
        assert!(prompt.contains("Parameters: {\"safe_mode\":true}"));
        assert!(prompt.ends_with("No conversational filler."));
    }

    #[tokio::test]
    async fn successful_assessment_passes_text_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-3-flash-preview:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"- Security: low.\n- Compliance: ok.\n- Stability: ok."}]}}]}"#,
            )
            .create_async()
            .await;

        let advisor = GenerativeAdvisor::new(client_for(&server));
        let advisory = advisor.assess(&reset_action(), &reset_values()).await;
        assert_eq!(
            advisory,
            Advisory::Assessed(
                "- Security: low.\n- Compliance: ok.\n- Stability: ok.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn server_error_degrades_to_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-3-flash-preview:generateContent")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let advisor = GenerativeAdvisor::new(client_for(&server));
        let advisory = advisor.assess(&reset_action(), &reset_values()).await;
        assert!(advisory.is_unavailable());
        assert_eq!(advisory.text(), FALLBACK_ADVISORY);
    }

    #[tokio::test]
    async fn unreachable_endpoint_degrades_to_unavailable() {
        let client = GenerativeClient::new("test-key")
            .unwrap()
            .with_base_url("http://127.0.0.1:1/");
        let advisor = GenerativeAdvisor::new(client);
        let advisory = advisor.assess(&reset_action(), &reset_values()).await;
        assert!(advisory.is_unavailable());
    }

    #[tokio::test]
    async fn empty_model_answer_records_fixed_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-3-flash-preview:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let advisor = GenerativeAdvisor::new(client_for(&server));
        let advisory = advisor.assess(&reset_action(), &reset_values()).await;
        assert_eq!(advisory, Advisory::Assessed("Assessment unavailable.".to_string()));
    }
}
