use anyhow::Result;
use std::path::PathBuf;

use crate::cli::DoctorArgs;
use crate::cli_utils::tasker_prefix;
use crate::config_discovery::load_config_with_discovery;
use crate::merger::MergedTaskConfig;

pub fn run(args: DoctorArgs) -> Result<()> {
    println!("🔍 Tasker Doctor - Toolchain and Configuration Check\n");

    let mut all_ok = true;

    // Check 1: Configuration
    let file_config = load_config_with_discovery(args.common.config.as_deref())?;
    let config = MergedTaskConfig::merge(&args.common, file_config);

    match &config.config_path {
        Some(path) => println!("✅ Config file: {}", path.display()),
        None => println!("⚠️  No tasker.toml found, using defaults"),
    }

    // Check 2: Toolchain on PATH
    match which::which(&config.toolchain) {
        Ok(path) => println!("✅ Toolchain '{}' found: {}", config.toolchain, path.display()),
        Err(e) => {
            println!("❌ Toolchain '{}' not found: {}", config.toolchain, e);
            println!("   Install it or set --toolchain / [toolchain] program");
            all_ok = false;
        }
    }

    // Check 3: Module file in the working directory
    let working_dir = match &config.working_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    if !working_dir.is_dir() {
        println!(
            "❌ Working directory does not exist: {}",
            working_dir.display()
        );
        all_ok = false;
    } else if working_dir.join("go.mod").exists() {
        println!("✅ Module file found: {}", working_dir.join("go.mod").display());
    } else {
        println!(
            "⚠️  No go.mod in {} (toolchain commands may fail)",
            working_dir.display()
        );
    }

    if config.verbose {
        println!("\n   Version: {}", env!("CARGO_PKG_VERSION"));
    }

    println!();
    if all_ok {
        println!("✅ All checks passed!");
        Ok(())
    } else {
        eprintln!("{} Some checks failed", tasker_prefix());
        anyhow::bail!("doctor found problems")
    }
}
