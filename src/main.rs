//! CLI entry point for dirtree

use std::io::{self, BufWriter};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::{StreamingFormatter, TreeWalker, WalkerConfig};

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(
    about = "List files and folders under the current directory, skipping build and dependency directories"
)]
#[command(version)]
struct Args {}

fn run() -> Result<()> {
    let root = std::env::current_dir().context("cannot resolve current directory")?;

    let stdout = io::stdout();
    let mut formatter = StreamingFormatter::new(BufWriter::new(stdout.lock()));
    formatter
        .write_banner(&root)
        .context("error writing output")?;

    TreeWalker::new(WalkerConfig::default()).walk(&root, &mut formatter)?;

    formatter.finish().context("error writing output")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _args = Args::parse();

    // run() drops its writer on every path, so partial output is flushed here
    if let Err(e) = run() {
        eprintln!("dirtree: {:#}", e);
        process::exit(1);
    }
}
