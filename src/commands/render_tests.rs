use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::{Commands, OverflowChoice};
use crate::config::PaletteOverflow;
use crate::ingest::parse;

const MODELS: &str = "\
Date,GPT-4,Claude
2024-01-01,10,5
2024-02-01,20,0
2024-03-01,15,25
";

fn parse_render(args: &[&str]) -> (Cli, RenderArgs) {
    let mut argv = vec!["streamchart", "--no-config", "render"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv.clone());
    match Cli::parse_from(argv).command {
        Commands::Render(render) => (cli, render),
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn overrides_replace_config_values() {
    let (_, args) = parse_render(&[
        "data.csv",
        "--date-format",
        "%d/%m/%Y",
        "--palette-overflow",
        "reject",
    ]);
    let mut config = Config::default();
    apply_overrides(&mut config, &args).unwrap();
    assert_eq!(config.data.date_format, "%d/%m/%Y");
    assert_eq!(config.palette.overflow, PaletteOverflow::Reject);
    assert_eq!(args.palette_overflow, Some(OverflowChoice::Reject));
}

#[test]
fn missing_overrides_keep_config() {
    let (_, args) = parse_render(&["data.csv"]);
    let mut config = Config::default();
    apply_overrides(&mut config, &args).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn invalid_date_format_override_fails() {
    let (_, args) = parse_render(&["data.csv", "--date-format", "plain"]);
    let mut config = Config::default();
    assert!(apply_overrides(&mut config, &args).is_err());
}

#[test]
fn document_in_each_format() {
    let dataset = parse(MODELS);
    let html = render_document(&dataset, Config::default(), OutputFormat::Html, "models").unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));

    let svg = render_document(&dataset, Config::default(), OutputFormat::Svg, "models").unwrap();
    assert!(svg.starts_with("<svg"));

    let json = render_document(&dataset, Config::default(), OutputFormat::Json, "models").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["chart"]["status"], "chart");
    assert_eq!(value["legend"]["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn empty_dataset_renders_placeholder() {
    let json =
        render_document(&parse(""), Config::default(), OutputFormat::Json, "empty").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["chart"]["status"], "empty");
    assert_eq!(value["chart"]["reason"]["kind"], "no_records");
}

#[test]
fn run_render_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("models.csv");
    let output = dir.path().join("chart.svg");
    fs::write(&input, MODELS).unwrap();

    let input_arg = input.to_string_lossy().into_owned();
    let output_arg = output.to_string_lossy().into_owned();
    let (cli, args) = parse_render(&[&input_arg, "--format", "svg", "-o", &output_arg]);

    assert_eq!(run_render(&args, &cli), EXIT_SUCCESS);
    let svg = fs::read_to_string(output).unwrap();
    assert!(svg.contains("class=\"streamgraph\""));
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv").to_string_lossy().into_owned();
    let (cli, args) = parse_render(&[&input]);
    assert_eq!(run_render(&args, &cli), EXIT_CONFIG_ERROR);
}
