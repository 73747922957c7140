//! `tasker build` / `tasker check` command implementation

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::TaskArgs;
use crate::config_discovery::load_config_with_discovery;
use crate::merger::MergedTaskConfig;
use crate::runner::{DryRunRunner, ProcessRunner};
use crate::tasks::Task;

pub fn run(task: Task, args: &TaskArgs) -> Result<()> {
    let file_config = load_config_with_discovery(args.common.config.as_deref())?;
    let config = MergedTaskConfig::merge(&args.common, file_config);

    match &config.config_path {
        Some(path) => debug!("Using config: {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }

    info!(
        task = task.name(),
        toolchain = %config.toolchain,
        dry_run = args.dry_run,
        "starting task"
    );

    if args.dry_run {
        task.run(&DryRunRunner, &config.toolchain)?;
    } else {
        let runner = ProcessRunner::new(config.working_dir.clone(), config.verbose);
        task.run(&runner, &config.toolchain)?;
    }

    Ok(())
}
