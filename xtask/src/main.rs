use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for pixelscreen")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci,
    /// Quick checks before commit (fmt, clippy)
    Check,
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
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Run doc tests only
        #[arg(long)]
        doc: bool,
        /// Run only display module tests
        #[arg(long)]
        display: bool,
        /// Run only input module tests
        #[arg(long)]
        input: bool,
    },
    /// Run benchmarks
    Bench,
    /// Install the pre-commit git hook
    InstallHooks,
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Ci => sequence(
            "CI Pipeline",
            &[
                ("Format Check", &["fmt", "--all", "--", "--check"]),
                ("Clippy", &["clippy", "--all-targets", "--", "-D", "warnings"]),
                ("Build", &["build"]),
                ("Test", &["test"]),
            ],
        ),
        Commands::Check => sequence(
            "Quick Checks",
            &[
                ("Format Check", &["fmt", "--all", "--", "--check"]),
                ("Clippy", &["clippy", "--all-targets", "--", "-D", "warnings"]),
            ],
        ),
        Commands::Fmt { check } => {
            if check {
                cargo(&["fmt", "--all", "--", "--check"])
            } else {
                cargo(&["fmt", "--all"])
            }
        }
        Commands::Clippy { fix } => {
            if fix {
                cargo(&["clippy", "--all-targets", "--fix"])
            } else {
                cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])
            }
        }
        Commands::Build { release } => {
            if release {
                cargo(&["build", "--release"])
            } else {
                cargo(&["build"])
            }
        }
        Commands::Test {
            doc,
            display,
            input,
        } => {
            if doc {
                cargo(&["test", "--doc"])
            } else if display {
                cargo(&["test", "--lib", "display"])
            } else if input {
                cargo(&["test", "--lib", "input"])
            } else {
                cargo(&["test"])
            }
        }
        Commands::Bench => cargo(&["bench"]),
        Commands::InstallHooks => install_hooks(),
    }
}

/// Run a named series of cargo invocations, stopping at the first failure.
fn sequence(title: &str, steps: &[(&str, &[&str])]) -> Result<()> {
    println!("{}", format!("=== {} ===", title).bold().blue());
    let start = Instant::now();

    for (name, args) in steps {
        println!("{} {}", "→".blue(), name.bold());
        cargo(args)?;
    }

    println!(
        "\n{} {:.2}s",
        "✓ passed in".green().bold(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        bail!("cargo {} failed with {}", args.join(" "), status);
    }
    Ok(())
}

fn install_hooks() -> Result<()> {
    use std::fs;

    let hook = ".git/hooks/pre-commit";
    fs::write(
        hook,
        "#!/bin/sh\n# Auto-generated by cargo x install-hooks\nset -e\ncargo x check\n",
    )?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(hook)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(hook, perms)?;
    }

    println!("{}", "✓ pre-commit hook installed".green());
    Ok(())
}
