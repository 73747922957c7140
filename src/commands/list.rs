//! `tasker list` command implementation

use anyhow::{anyhow, Result};

use crate::cli::ListArgs;
use crate::config_discovery::load_config_with_discovery;
use crate::merger::MergedTaskConfig;
use crate::tasks::Task;

pub fn run(args: &ListArgs) -> Result<()> {
    let tasks = match &args.task {
        Some(name) => vec![name.parse::<Task>().map_err(|e| anyhow!(e))?],
        None => Task::ALL.to_vec(),
    };

    let file_config = load_config_with_discovery(args.common.config.as_deref())?;
    let config = MergedTaskConfig::merge(&args.common, file_config);

    println!("Tasks:");
    for task in tasks {
        println!("  {:<8}{}", task.name(), task.description());
        if config.verbose {
            for step in task.steps(&config.toolchain) {
                println!("            {}", step);
            }
        }
    }

    Ok(())
}
