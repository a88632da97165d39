// Unit tests for command line parsing

use crate::cli::ProbeArgs;

use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_only_url_when_parsing_then_defaults_apply() {
    let args = ProbeArgs::try_parse_from(["snaphttp", "https://api.example.com/v1/items"]).unwrap();

    assert_eq!(args.url, "https://api.example.com/v1/items");
    assert!(args.form.is_empty());
    assert!(args.config_dir.is_none());
    assert!(!args.allow_empty);
    assert!(!args.verbose);
}

/// **VALUE**: Verifies repeated `--form` flags are collected in order, with values
/// split on the first `=` only.
///
/// **BUG THIS CATCHES**: Would catch values containing `=` being truncated.
#[test]
fn given_form_flags_when_parsing_then_pairs_are_kept_in_order() {
    let args = ProbeArgs::try_parse_from([
        "snaphttp",
        "https://api.example.com/login",
        "--form",
        "user=ann",
        "-f",
        "token=a=b",
        "--config-dir",
        "/etc/snaphttp",
        "--allow-empty",
    ])
    .unwrap();

    assert_eq!(
        args.form,
        vec![
            (String::from("user"), String::from("ann")),
            (String::from("token"), String::from("a=b")),
        ]
    );
    assert_eq!(args.config_dir, Some(PathBuf::from("/etc/snaphttp")));
    assert!(args.allow_empty);
}

#[test]
fn given_malformed_form_field_when_parsing_then_rejected() {
    let missing_equals = ProbeArgs::try_parse_from(["snaphttp", "http://x", "--form", "user"]);
    let missing_name = ProbeArgs::try_parse_from(["snaphttp", "http://x", "--form", "=ann"]);

    assert!(missing_equals.is_err());
    assert!(missing_name.is_err());
}
