use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for rasterlab")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Run tests
    Test {
        /// Run doc tests only
        #[arg(long)]
        doc: bool,
        /// Run only the property tests
        #[arg(long)]
        properties: bool,
    },
    /// Run benchmarks
    Bench,
    /// Render the lab demo scene in the terminal
    Demo {
        /// Grid edge length
        #[arg(long, default_value = "40")]
        size: usize,
        /// Display back end (ascii, pgm, json)
        #[arg(long, default_value = "ascii")]
        display: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Test { doc, properties } => run_test(doc, properties),
        Commands::Bench => run_bench(),
        Commands::Demo { size, display } => run_demo(size, &display),
    }
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== Running CI Pipeline ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;
    run_task("Test", || run_test(false, false), verbose)?;

    println!(
        "\n{} {}",
        "✓ CI passed in".green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );

    Ok(())
}

fn run_fmt(check: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("fmt").arg("--all");

    if check {
        cmd.arg("--").arg("--check");
    }

    execute_command(&mut cmd)
}

fn run_clippy(fix: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("clippy").arg("--workspace").arg("--all-targets");

    if fix {
        cmd.arg("--fix");
    } else {
        cmd.arg("--").arg("-D").arg("warnings");
    }

    execute_command(&mut cmd)
}

fn run_test(doc: bool, properties: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("test").arg("--package").arg("rasterlab");

    if doc {
        cmd.arg("--doc");
    } else if properties {
        cmd.arg("--test").arg("raster_properties");
    }

    execute_command(&mut cmd)
}

fn run_bench() -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--package").arg("rasterlab");

    execute_command(&mut cmd)
}

fn run_demo(size: usize, display: &str) -> Result<()> {
    println!(
        "{} {}x{} grid ({})",
        "Rendering lab demo on".bold().blue(),
        size,
        size,
        display
    );

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--bin", "rasterlab", "--"])
        .arg("--size")
        .arg(size.to_string())
        .arg("--display")
        .arg(display);

    execute_command(&mut cmd)
}

fn run_task<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();

    match task() {
        Ok(_) => {
            let elapsed = if verbose {
                format!("({:.2}s)", start.elapsed().as_secs_f64())
            } else {
                String::new()
            };
            println!("{} {}", "✓".green().bold(), elapsed);
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗".red().bold());
            Err(e)
        }
    }
}

fn execute_command(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("Command failed with exit code: {}", status);
    }

    Ok(())
}
