//! Development tasks for the cramer-rs workspace.
//!
//! Usage: `cargo xtask <command>`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for cramer-rs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, test, doc)
    Ci,
    /// Generate API documentation for the solver crate
    Doc {
        /// Open documentation in browser after generation
        #[arg(long)]
        open: bool,
    },
    /// Run the determinant and solver benchmarks
    Bench {
        /// Only run benchmarks whose name contains this filter
        filter: Option<String>,
    },
    /// Run the demo that solves the 2x2 and 5x5 example systems
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => cmd_ci(),
        Commands::Doc { open } => cmd_doc(open),
        Commands::Bench { filter } => cmd_bench(filter.as_deref()),
        Commands::Demo => run_cargo(
            &project_root()?,
            &["run", "-p", "cramer", "--example", "cramer_demo"],
        ),
    }
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}

fn cmd_ci() -> Result<()> {
    let root = project_root()?;

    println!("Running cargo fmt...");
    run_cargo(&root, &["fmt", "--all", "--", "--check"])?;

    println!("Running cargo clippy...");
    run_cargo(
        &root,
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )?;

    println!("Running cargo test...");
    run_cargo(&root, &["test", "--workspace"])?;

    println!("Checking documentation...");
    run_cargo(&root, &["doc", "--workspace", "--no-deps"])?;

    println!("All CI checks passed");
    Ok(())
}

fn cmd_doc(open: bool) -> Result<()> {
    let root = project_root()?;

    let mut args = vec!["doc", "-p", "cramer", "--no-deps"];
    if open {
        args.push("--open");
    }
    run_cargo(&root, &args)?;

    println!(
        "Documentation generated at {}",
        root.join("target/doc/cramer/index.html").display()
    );
    Ok(())
}

fn cmd_bench(filter: Option<&str>) -> Result<()> {
    let root = project_root()?;

    let mut args = vec!["bench", "-p", "cramer", "--bench", "determinant_bench"];
    if let Some(filter) = filter {
        args.extend(["--", filter]);
    }
    run_cargo(&root, &args)
}

fn run_cargo(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("cargo {} failed", args.join(" "));
    }
    Ok(())
}
