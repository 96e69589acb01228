//! Development automation tasks for the `MarketFeed` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{anyhow, Context};

mod features;

/// Where `codegen` copies the generated bindings unless overridden
const DEFAULT_TYPES_DIR: &str = "frontend/src/types/generated";

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("demo") => run_demo(),
        Some("codegen") => run_codegen(),
        Some("test-features") => features::test_feature_matrix(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("MarketFeed Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci             Run all CI checks (fmt, clippy, test, demo)");
    println!("    fmt            Check Rust code formatting");
    println!("    clippy         Run Clippy lints");
    println!("    test           Run all tests");
    println!("    demo           Run the scripted demo session without latency");
    println!("    codegen        Generate TypeScript types from Rust and sync to frontend");
    println!("    test-features  Verify every crate feature combination compiles");
    println!("    help           Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/4: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/4: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/4: Running tests...");
    run_test()?;

    println!("\n==> Step 4/4: Running demo session...");
    run_demo()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    let status = Command::new("cargo").args(["fmt", "--all", "--", "--check"]).status()?;

    if !status.success() {
        anyhow::bail!("Format check failed. Run 'cargo fmt --all' to fix.");
    }

    Ok(())
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    let status =
        Command::new("cargo").args(["clippy", "--all-targets", "--all-features"]).status()?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("Clippy run failed. See output above."))
    }
}

/// Run all workspace tests
fn run_test() -> anyhow::Result<()> {
    let status = Command::new("cargo").args(["test", "--workspace", "--all-features"]).status()?;

    if !status.success() {
        anyhow::bail!("Tests failed");
    }

    Ok(())
}

/// Run the `marketfeed` binary end to end with the mock latency switched off
fn run_demo() -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(["run", "-p", "marketfeed-app", "--bin", "marketfeed"])
        .env("MARKETFEED_LATENCY_ENABLED", "false")
        .status()
        .context("Failed to run the demo binary")?;

    if !status.success() {
        anyhow::bail!("Demo session failed");
    }

    println!("✓ Demo session completed");
    Ok(())
}

/// Generate TypeScript types from Rust and sync to frontend
fn run_codegen() -> anyhow::Result<()> {
    println!("==> Generating TypeScript types from Rust...\n");

    // Step 1: Run domain tests with ts-gen feature to generate bindings
    println!("Step 1/3: Running ts-gen tests to generate TypeScript files...");
    let status = Command::new("cargo")
        .args(["test", "-p", "marketfeed-domain", "--features", "ts-gen", "--lib"])
        .status()
        .context("Failed to run cargo test")?;

    if !status.success() {
        anyhow::bail!("TypeScript generation tests failed");
    }

    // Step 2: Verify bindings directory exists
    let bindings_dir = PathBuf::from("crates/domain/bindings");
    if !bindings_dir.exists() {
        anyhow::bail!(
            "Bindings directory not found at {}. TypeScript generation may have failed.",
            bindings_dir.display()
        );
    }

    // Step 3: Sync bindings to frontend
    let frontend_types_dir = env::var_os("MARKETFEED_TYPES_DIR")
        .map_or_else(|| PathBuf::from(DEFAULT_TYPES_DIR), PathBuf::from);
    println!(
        "\nStep 2/3: Syncing {} TypeScript files to {}...",
        count_ts_files(&bindings_dir)?,
        frontend_types_dir.display()
    );

    sync_bindings(&bindings_dir, &frontend_types_dir)?;

    // Step 4: Generate index.ts
    println!("\nStep 3/3: Generating index.ts...");
    generate_index_ts(&frontend_types_dir)?;

    println!("\n✓ TypeScript type generation complete!");
    println!("  Generated files: {}", frontend_types_dir.display());

    Ok(())
}

/// Count TypeScript files in a directory
fn count_ts_files(dir: &Path) -> anyhow::Result<usize> {
    let entries = fs::read_dir(dir).context("Failed to read bindings directory")?;

    Ok(entries
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(std::ffi::OsStr::to_str) == Some("ts"))
        .count())
}

/// Sync TypeScript bindings from source to destination
fn sync_bindings(src: &Path, dest: &Path) -> anyhow::Result<()> {
    // Create destination directory if it doesn't exist
    fs::create_dir_all(dest).context("Failed to create frontend types directory")?;

    // Read all .ts files from source
    let entries = fs::read_dir(src).context("Failed to read bindings directory")?;

    let mut synced = 0;
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.extension().and_then(std::ffi::OsStr::to_str) == Some("ts") {
            let file_name = path.file_name().ok_or_else(|| anyhow!("Invalid file name"))?;
            let dest_path = dest.join(file_name);

            fs::copy(&path, &dest_path).with_context(|| {
                format!("Failed to copy {} to {}", path.display(), dest_path.display())
            })?;

            synced += 1;
        }
    }

    println!("  Synced {synced} files");
    Ok(())
}

/// Generate index.ts that exports all types
fn generate_index_ts(types_dir: &Path) -> anyhow::Result<()> {
    let index_path = types_dir.join("index.ts");

    // Read all .ts files (excluding index.ts itself)
    let entries = fs::read_dir(types_dir).context("Failed to read types directory")?;

    let mut type_files: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|e| {
            let path = e.path();
            let file_name = path.file_name()?.to_str()?;

            // Skip index.ts, .gitkeep, and test files
            if file_name == "index.ts" || file_name == ".gitkeep" || file_name.ends_with(".test.ts")
            {
                return None;
            }

            // Only include .ts files
            if path.extension()?.to_str()? == "ts" {
                // Remove .ts extension to get the module name
                Some(file_name[..file_name.len() - 3].to_string())
            } else {
                None
            }
        })
        .collect();

    // Sort alphabetically for consistent output
    type_files.sort();

    // Generate index.ts content
    let mut content = String::from(
        "// Auto-generated types from Rust backend\n\
         // Generated by ts-rs via: cargo xtask codegen\n\
         // DO NOT EDIT MANUALLY - changes will be overwritten\n\n",
    );

    for type_name in &type_files {
        let _ = writeln!(content, "export type {{ {type_name} }} from './{type_name}';");
    }

    fs::write(&index_path, content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("  Generated index.ts with {} exports", type_files.len());

    Ok(())
}
