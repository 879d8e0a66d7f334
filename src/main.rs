use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use authform::config::{Config, ConfigError};
use authform::form::{FormController, FormMode, FormValues, SubmitError, ValidationError, validate_all};
use authform::services::account::{AccountError, AccountService};
use authform::services::appwrite::AppwriteClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("account client setup failed: {0}")]
    Client(#[from] AccountError),
    #[error("{}", format_field_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error("{0}")]
    Submit(#[from] SubmitError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Client(_) => 2,
            Self::Invalid(_) | Self::Submit(_) => 1,
        }
    }
}

fn format_field_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {e}", e.field))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Parser, Debug)]
#[command(name = "authform", about = "Sign in or sign up against the configured account backend")]
struct Cli {
    /// `sign-in` or `sign-up`
    mode: FormMode,

    #[arg(long, env = "AUTHFORM_EMAIL")]
    email: String,

    /// Required for `sign-up`, ignored for `sign-in`.
    #[arg(long)]
    full_name: Option<String>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with_writer(std::io::stderr)
        .init();

    match dotenv_failure(&dotenv) {
        Some(e) => tracing::warn!(error = %e, ".env could not be loaded"),
        None => tracing::debug!(loaded = dotenv.is_ok(), ".env checked"),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// A `.env` file that exists but could not be read or parsed. A missing file
/// is not a failure.
fn dotenv_failure(result: &Result<PathBuf, dotenvy::Error>) -> Option<&dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load()?;
    tracing::info!(endpoint = %config.endpoint_url, project = %config.project_id, "config loaded");

    let mode = cli.mode;
    let values = FormValues::new(cli.email, cli.full_name);

    println!("{}", mode.title());
    println!("{}", mode.subtitle());

    let errors = validate_all(&values, mode);
    if !errors.is_empty() {
        return Err(CliError::Invalid(errors));
    }

    let service: Arc<dyn AccountService> = Arc::new(AppwriteClient::new(&config)?);
    let form = FormController::new(mode, service);

    let account_id = form.submit(&values).await.inspect_err(|_| {
        let (prompt, link) = mode.switch_prompt();
        eprintln!("{prompt} {link}: {}", mode.alternate().route());
    })?;

    println!("{}: ok", mode.submit_label());
    println!("account id: {account_id}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
