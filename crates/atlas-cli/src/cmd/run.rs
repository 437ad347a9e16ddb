use crate::output::{print_json, print_trail};
use anyhow::Context;
use atlas_advisory::{GenerativeAdvisor, GenerativeClient};
use atlas_core::{
    advisor::OfflineAdvisor,
    catalog::Catalog,
    error::AtlasError,
    form::Form,
    pipeline::{self, ExecuteOptions, SimulatedDispatcher},
    role::Role,
    session::{Session, SystemStatus, User},
};
use std::time::Duration;

#[derive(clap::Args)]
pub struct RunArgs {
    /// Catalog id of the directive to run
    pub action_id: String,

    /// Parameter value, repeatable (e.g. --param amount=1200)
    #[arg(long = "param", value_name = "FIELD=VALUE")]
    pub params: Vec<String>,

    /// Simulated dispatch latency in milliseconds
    #[arg(long, default_value = "1800")]
    pub latency_ms: u64,

    /// Advisory model override
    #[arg(long)]
    pub model: Option<String>,

    /// Skip the hosted advisory service and record the offline fallback text
    #[arg(long)]
    pub offline: bool,
}

pub fn run(catalog: &Catalog, role: Role, args: RunArgs, json: bool) -> anyhow::Result<()> {
    let action = catalog.require(&args.action_id)?;

    let mut user = User::default_commander();
    user.role = role;
    let mut session = Session::new(user);

    let mut form = Form::new(action);
    for pair in &args.params {
        let (field, value) = pair
            .split_once('=')
            .with_context(|| format!("invalid --param '{pair}', expected FIELD=VALUE"))?;
        form.set(field, value)?;
    }

    let values = match form.finish() {
        Ok(values) => values,
        Err(report) => {
            // A rejected draft never reaches the pipeline, so the trail below
            // stays empty.
            println!("Validation failed for '{}':", action.label);
            for issue in &report.issues {
                println!("  {}: {}", issue.field, issue.message);
            }
            println!();
            print_trail(session.log());
            anyhow::bail!("invalid parameters for '{}'", action.id);
        }
    };

    let dispatcher = SimulatedDispatcher::with_latency(Duration::from_millis(args.latency_ms));
    let opts = ExecuteOptions::default();
    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let outcome = match (args.offline, api_key) {
        (false, Some(key)) => {
            let mut client = GenerativeClient::new(key)?;
            if let Some(model) = args.model.as_deref() {
                client = client.with_model(model);
            }
            let advisor = GenerativeAdvisor::new(client);
            runtime.block_on(pipeline::execute(
                &mut session,
                catalog,
                &args.action_id,
                values,
                &advisor,
                &dispatcher,
                &opts,
            ))
        }
        _ => {
            tracing::debug!("no advisory service configured, recording fallback text");
            runtime.block_on(pipeline::execute(
                &mut session,
                catalog,
                &args.action_id,
                values,
                &OfflineAdvisor,
                &dispatcher,
                &opts,
            ))
        }
    };

    match outcome {
        Ok(entry) => {
            if json {
                print_json(&entry)?;
            } else {
                println!("Directive {}: {}", entry.action_type, entry.status);
                println!();
                print_trail(session.log());
                println!();
                println!("System status: {}", session.status());
            }
            if session.status() == SystemStatus::Alert {
                anyhow::bail!("directive '{}' failed, session in ALERT", args.action_id);
            }
            Ok(())
        }
        Err(e @ AtlasError::AuthorizationDenied { .. }) => {
            // The denial itself is on the record; show it before exiting.
            if !json {
                print_trail(session.log());
            }
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
