use crate::action::ActionDefinition;
use crate::advisor::{Advisory, RiskAdvisor};
use crate::audit::{AuditEntry, EntryStatus};
use crate::catalog::Catalog;
use crate::error::{AtlasError, Result};
use crate::params::{self, ParamValues};
use crate::session::Session;
use std::time::Duration;
use tracing::{error, info, warn};

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Hands a validated directive to whatever actually performs it. The console
/// core treats dispatch as opaque: success or an error message.
#[allow(async_fn_in_trait)]
pub trait Dispatcher {
    async fn dispatch(&self, action: &ActionDefinition, values: &ParamValues) -> Result<()>;
}

/// Stand-in dispatcher for a console with no downstream systems attached.
/// Sleeps for a fixed latency, then succeeds (or fails, when primed).
#[derive(Debug, Clone)]
pub struct SimulatedDispatcher {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedDispatcher {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(1800),
            failure: None,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// Primes every dispatch to fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            latency: Duration::ZERO,
            failure: Some(message.into()),
        }
    }
}

impl Default for SimulatedDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for SimulatedDispatcher {
    async fn dispatch(&self, _action: &ActionDefinition, _values: &ParamValues) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        match &self.failure {
            Some(message) => Err(AtlasError::DispatchFailed(message.clone())),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// ExecuteOptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ExecuteOptions {
    /// Upper bound on the risk advisory call. On expiry the advisory is
    /// recorded as unavailable; execution itself is never blocked on it.
    pub advisory_timeout: Duration,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            advisory_timeout: Duration::from_secs(10),
        }
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Runs one directive submission end to end: availability and clearance
/// checks, schema validation, risk advisory, dispatch, audit record.
///
/// `Ok` means the submission ran and the returned entry is its audit record,
/// `EXECUTED` or `FAILED`. `Err` means the submission was refused; refusals
/// record nothing, except a clearance bypass which appends a `REJECTED` entry
/// before returning `AuthorizationDenied`.
pub async fn execute<A, D>(
    session: &mut Session,
    catalog: &Catalog,
    action_id: &str,
    values: ParamValues,
    advisor: &A,
    dispatcher: &D,
    opts: &ExecuteOptions,
) -> Result<AuditEntry>
where
    A: RiskAdvisor,
    D: Dispatcher,
{
    let action = catalog.require(action_id)?;
    session.ensure_available()?;

    let user = session.user().clone();
    if !user.role.can_access(action.required_role) {
        warn!(
            action = %action.id,
            role = %user.role,
            required = %action.required_role,
            "submission rejected: insufficient clearance"
        );
        session.log_mut().append(
            &user.name,
            user.role,
            &action.action_type,
            EntryStatus::Rejected,
            values,
            None,
        );
        return Err(AtlasError::AuthorizationDenied {
            action: action.id.clone(),
            role: user.role.to_string(),
        });
    }

    let report = params::validate(action, &values);
    if !report.ok() {
        return Err(AtlasError::InvalidParams(report));
    }

    session.begin();
    info!(action = %action.id, user = %user.name, "executing directive");

    let advisory =
        match tokio::time::timeout(opts.advisory_timeout, advisor.assess(action, &values)).await {
            Ok(advisory) => advisory,
            Err(_) => {
                warn!(action = %action.id, "risk advisory timed out");
                Advisory::Unavailable
            }
        };
    if advisory.is_unavailable() {
        warn!(action = %action.id, "risk advisory unavailable, recording fallback text");
    }

    let outcome = dispatcher.dispatch(action, &values).await;
    let (status, ok) = match &outcome {
        Ok(()) => (EntryStatus::Executed, true),
        Err(e) => {
            error!(action = %action.id, error = %e, "directive dispatch failed");
            (EntryStatus::Failed, false)
        }
    };

    let entry = session
        .log_mut()
        .append(
            &user.name,
            user.role,
            &action.action_type,
            status,
            values,
            Some(advisory.into_text()),
        )
        .clone();
    session.finish(ok);

    Ok(entry)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
