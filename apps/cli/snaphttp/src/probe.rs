//! One-shot request runner behind the `snaphttp` binary.

use crate::cli::ProbeArgs;
use crate::error::SnaphttpError;

use snaphttp_core::config::default_config_dir;
use snaphttp_core::{BlockingClient, ClientConfig, ClientError, StatusCodeFailure};

use log::{error, info};

/// What a probe run produced.
#[derive(Debug)]
pub enum ProbeOutcome {
    Body(String),
    Failure {
        failure: Box<StatusCodeFailure>,
        /// Rendered with the identity the request was sent with.
        diagnostic: String,
    },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Body(_))
    }
}

/// Resolve config for `args`: explicit directory, then platform default.
pub fn load_config(args: &ProbeArgs) -> Result<ClientConfig, SnaphttpError> {
    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    let mut config = ClientConfig::load(&config_dir)?;
    if args.allow_empty {
        config.require_body = false;
    }

    Ok(config)
}

/// Send the request described by `args` using `config`.
///
/// # Errors
///
/// Returns [`SnaphttpError`] for anything other than a status-level failure,
/// which comes back as [`ProbeOutcome::Failure`].
pub fn run(args: &ProbeArgs, config: &ClientConfig) -> Result<ProbeOutcome, SnaphttpError> {
    let client = BlockingClient::new(config)?;

    let result = if args.form.is_empty() {
        client.get(&args.url)
    } else {
        client.post_form(&args.url, &args.form)
    };

    match result {
        Ok(body) => {
            info!("{} returned {} bytes", args.url, body.len());
            Ok(ProbeOutcome::Body(body))
        }
        Err(ClientError::Status(failure)) => {
            error!("{failure}");
            let diagnostic = failure.diagnostic(client.identity()).to_string();
            Ok(ProbeOutcome::Failure {
                failure,
                diagnostic,
            })
        }
        Err(other) => Err(SnaphttpError::from(other)),
    }
}
