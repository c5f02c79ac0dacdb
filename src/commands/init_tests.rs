use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::config::{Config, validate_config_semantics};

fn args(output: PathBuf, force: bool) -> InitArgs {
    InitArgs { output, force }
}

#[test]
fn template_parses_to_defaults() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn creates_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".streamchart.toml");

    run_init_impl(&args(path.clone(), false)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[palette]"));
    assert!(content.contains("[mini_chart]"));
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".streamchart.toml");
    fs::write(&path, "# mine\n").unwrap();

    let err = run_init_impl(&args(path.clone(), false)).unwrap_err();
    assert!(err.to_string().contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn force_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".streamchart.toml");
    fs::write(&path, "# mine\n").unwrap();

    run_init_impl(&args(path.clone(), true)).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("[chart]"));
}

#[test]
fn run_init_reports_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(&path, "").unwrap();
    let cli = Cli::parse_from(["streamchart", "--color", "never", "init"]);
    assert_eq!(run_init(&args(path, false), &cli), EXIT_CONFIG_ERROR);
}
