use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::io;

#[derive(Parser)]
#[command(name = "autowire")]
#[command(about = "Wire a native continuity parser into the generated Android build", long_about = None)]
#[command(version)]
struct Cli {}

fn main() {
    // No flags: the repository root comes from the binary's own location
    // and everything else is confirmed interactively.
    let _cli = Cli::parse();

    let result = std::env::current_exe()
        .context("failed to locate the autowire binary")
        .and_then(|tool_path| autowire::wire::run(&tool_path, &mut io::stdin().lock()));

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
