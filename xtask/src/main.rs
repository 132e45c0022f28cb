use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for ia64dec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Quick checks before commit (fmt, clippy)
    Check {
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
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test(TestArgs),
    /// Run benchmarks
    Bench {
        /// Only run benchmarks whose name contains this filter
        filter: Option<String>,
    },
    /// Disassemble a code image with the release build
    Disasm {
        /// Raw code image
        image: String,
        /// Load address of the image
        #[arg(short = 'b', long, default_value = "0")]
        base: String,
        /// Emit JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Pre-commit hook (fmt, clippy, test)
    PreCommit,
    /// Install git hooks
    InstallHooks,
}

#[derive(Args, Default)]
struct TestArgs {
    #[arg(long)]
    doc: bool,
    #[arg(long)]
    ignored: bool,
    /// Run only bundle decoder tests
    #[arg(long)]
    decoder: bool,
    /// Run only disassembler tests
    #[arg(long)]
    disassembler: bool,
    /// Run only image loader and config tests
    #[arg(long)]
    loader: bool,
    /// Run only bit field helper tests
    #[arg(long)]
    bits: bool,
}

impl TestArgs {
    /// Library module filters selected on the command line
    fn modules(&self) -> Vec<(&'static str, &'static str)> {
        [
            (self.decoder, "core::decoder", "Decoder"),
            (self.disassembler, "core::disassembler", "Disassembler"),
            (self.loader, "core::loader", "Loader"),
            (self.loader, "core::config", "Config"),
            (self.bits, "core::bits", "Bits"),
        ]
        .into_iter()
        .filter(|(enabled, _, _)| *enabled)
        .map(|(_, path, name)| (path, name))
        .collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Check { verbose } => run_check(verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Build { release } => run_build(release),
        Commands::Test(args) => run_test(&args),
        Commands::Bench { filter } => run_bench(filter.as_deref()),
        Commands::Disasm { image, base, json } => run_disasm(&image, &base, json),
        Commands::PreCommit => run_pre_commit(),
        Commands::InstallHooks => install_hooks(),
    }
}

/// Run named stages in order and report the total time
fn run_pipeline(title: &str, done: &str, stages: &[Stage], verbose: bool) -> Result<()> {
    println!("{}", format!("=== {} ===", title).bold().blue());

    let start = Instant::now();
    for (name, task) in stages {
        run_task(name, task, verbose)?;
    }

    println!(
        "\n{} {}",
        format!("✓ {} in", done).green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );
    Ok(())
}

type Stage = (&'static str, fn() -> Result<()>);

fn fmt_check() -> Result<()> {
    run_fmt(true)
}

fn clippy_deny() -> Result<()> {
    run_clippy(false)
}

fn build_debug() -> Result<()> {
    run_build(false)
}

fn test_all() -> Result<()> {
    run_test(&TestArgs::default())
}

fn run_ci(verbose: bool) -> Result<()> {
    let stages: [Stage; 4] = [
        ("Format Check", fmt_check),
        ("Clippy", clippy_deny),
        ("Build", build_debug),
        ("Test", test_all),
    ];
    run_pipeline("Running CI Pipeline", "CI passed", &stages, verbose)
}

fn run_check(verbose: bool) -> Result<()> {
    let stages: [Stage; 2] = [("Format Check", fmt_check), ("Clippy", clippy_deny)];
    run_pipeline("Running Quick Checks", "Checks passed", &stages, verbose)
}

fn run_pre_commit() -> Result<()> {
    let stages: [Stage; 3] = [
        ("Format Check", fmt_check),
        ("Clippy", clippy_deny),
        ("Test", test_all),
    ];
    run_pipeline("Pre-commit Checks", "Pre-commit checks passed", &stages, false)
}

fn cargo(subcommand: &str) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg(subcommand);
    cmd
}

fn run_fmt(check: bool) -> Result<()> {
    let mut cmd = cargo("fmt");
    cmd.arg("--all");
    if check {
        cmd.args(["--", "--check"]);
    }
    execute_command(&mut cmd)
}

fn run_clippy(fix: bool) -> Result<()> {
    let mut cmd = cargo("clippy");
    cmd.args(["--workspace", "--all-targets"]);
    if fix {
        cmd.arg("--fix");
    } else {
        cmd.args(["--", "-D", "warnings"]);
    }
    execute_command(&mut cmd)
}

fn run_build(release: bool) -> Result<()> {
    let mut cmd = cargo("build");
    if release {
        cmd.arg("--release");
    }
    execute_command(&mut cmd)
}

fn run_test(args: &TestArgs) -> Result<()> {
    let ignored = |cmd: &mut Command| {
        if args.ignored {
            cmd.args(["--", "--ignored"]);
        }
    };

    if args.doc {
        let mut cmd = cargo("test");
        cmd.arg("--doc");
        ignored(&mut cmd);
        return execute_command(&mut cmd);
    }

    let modules = args.modules();
    if modules.is_empty() {
        let mut cmd = cargo("test");
        ignored(&mut cmd);
        return execute_command(&mut cmd);
    }

    let mut failed = Vec::new();
    for (path, name) in &modules {
        println!("{} Running {} tests...", "→".blue(), name.bold());

        let mut cmd = cargo("test");
        cmd.args(["--lib", *path]);
        ignored(&mut cmd);

        match execute_command(&mut cmd) {
            Ok(()) => println!("{} {} tests passed\n", "✓".green(), name),
            Err(e) if modules.len() == 1 => return Err(e),
            Err(_) => {
                println!("{} {} tests failed\n", "✗".red(), name);
                failed.push(*name);
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("Module tests failed: {}", failed.join(", "))
    }
}

fn run_bench(filter: Option<&str>) -> Result<()> {
    let mut cmd = cargo("bench");
    if let Some(filter) = filter {
        cmd.args(["--bench", "decode_bench", "--", filter]);
    }
    execute_command(&mut cmd)
}

fn run_disasm(image: &str, base: &str, json: bool) -> Result<()> {
    println!("{}", "=== Disassemble Image ===".bold().blue());

    let path = Path::new(image);
    if !path.exists() {
        println!("{} Image not found: {}", "✗".red().bold(), image.yellow());
        anyhow::bail!("Image not found");
    }

    let size = std::fs::metadata(path)?.len();
    if size % 16 != 0 {
        println!(
            "{} {} bytes is not a whole number of bundles, the tail is ignored",
            "ℹ".blue(),
            size
        );
    }
    println!("{} Image: {} ({} bundles)", "✓".green(), image.cyan(), size / 16);
    println!();

    let start = Instant::now();

    let mut cmd = cargo("run");
    cmd.args(["--release", "--bin", "ia64dec", "--", image, "--base", base]);
    if json {
        cmd.arg("--json");
    }
    execute_command(&mut cmd)?;

    println!(
        "\n{} Disassembly finished in {}",
        "✓".green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );
    Ok(())
}

fn install_hooks() -> Result<()> {
    use std::fs;

    println!("{}", "Installing git hooks...".bold());

    let hook_content = r#"#!/bin/sh
# Auto-generated by cargo x install-hooks
set -e

echo "Running pre-commit checks..."
cargo x pre-commit
"#;

    let hook_path = ".git/hooks/pre-commit";
    fs::write(hook_path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(hook_path, perms)?;
    }

    println!("{}", "✓ Git hooks installed".green());
    println!("  Pre-commit hook will run: fmt, clippy, test");

    Ok(())
}

fn run_task(name: &str, task: &fn() -> Result<()>, verbose: bool) -> Result<()> {
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();
    match task() {
        Ok(()) => {
            let timing = if verbose {
                format!("({:.2}s)", start.elapsed().as_secs_f64())
            } else {
                String::new()
            };
            println!("{} {}", "✓".green().bold(), timing);
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
