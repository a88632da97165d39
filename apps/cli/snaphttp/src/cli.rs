use std::path::PathBuf;

use clap::Parser;

/// Send one request and print either the body or a failure diagnostic.
#[derive(Debug, Parser)]
#[command(name = "snaphttp", version)]
pub struct ProbeArgs {
    /// URL to request
    pub url: String,

    /// Form field to POST as `key=value`. Repeatable. Without any, sends GET.
    #[arg(short, long = "form", value_parser = parse_form_field)]
    pub form: Vec<(String, String)>,

    /// Directory holding snaphttp.toml
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Directory for snaphttp.log. Defaults to the system temp directory.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Accept successful responses with an empty body
    #[arg(long)]
    pub allow_empty: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_form_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("form field has no name: {raw}")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got: {raw}")),
    }
}
