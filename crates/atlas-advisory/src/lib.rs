//! `atlas-advisory` — generative risk advisory client for the ATLAS console.
//!
//! Wraps the `generateContent` text API behind the [`RiskAdvisor`] trait from
//! `atlas-core`, so the execution pipeline can request a short pre-execution
//! risk assessment without knowing anything about the wire.
//!
//! # Architecture
//!
//! ```text
//! ActionDefinition + ParamValues
//!     │
//!     ▼
//! build_prompt     ← fixed assessment prompt + system instruction
//!     │
//!     ▼
//! GenerativeClient ← POST models/{model}:generateContent (reqwest)
//!     │
//!     ▼
//! Advisory         ← Assessed(text) | Unavailable (fallback wording)
//! ```
//!
//! Advisories are strictly best effort. `GenerativeAdvisor::assess` never
//! returns an error: timeouts, transport failures, non-success statuses and
//! malformed bodies all degrade to [`Advisory::Unavailable`], which renders
//! as the fixed offline fallback text.
//!
//! [`RiskAdvisor`]: atlas_core::advisor::RiskAdvisor
//! [`Advisory::Unavailable`]: atlas_core::advisor::Advisory

pub mod advisor;
pub mod client;
pub mod error;
pub mod types;

pub use advisor::{build_prompt, GenerativeAdvisor, SYSTEM_INSTRUCTION};
pub use client::{GenerativeClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::AdvisoryError;
pub use types::{Candidate, Content, GenerateRequest, GenerateResponse, Part};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, AdvisoryError>;
