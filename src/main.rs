use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use flowlint::index::ConnectionIndex;
use flowlint::parse::{self, WorkflowGraph};
use flowlint::render;
use flowlint::validate;

#[derive(Parser)]
#[command(name = "flowlint")]
#[command(about = "Static validator for node-based workflow definitions")]
#[command(version)]
struct Cli {
    /// Path to the workflow JSON document
    file: PathBuf,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Exit 2 on unreadable/undecodable input, distinct from finding errors.
    let workflow = match parse::load(&cli.file) {
        Ok(workflow) => workflow,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::from(2);
        }
    };

    let graph = WorkflowGraph::build(&workflow);
    let index = ConnectionIndex::build(&graph);
    let report = validate::run_rules(&workflow, &index);

    match cli.format {
        OutputFormat::Text => print!("{}", render::render_text(&workflow, &index, &report)),
        OutputFormat::Json => println!("{}", render::render_json(&report)),
    }

    if report.has_errors() {
        eprintln!("{}", "validation failed".red().bold());
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
