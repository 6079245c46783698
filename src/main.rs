use anyhow::{Context, anyhow};

use gradebook::core::cli::CliPaths;
use gradebook::core::context::AppContext;
use gradebook::logging::LogTarget;
use gradebook::prompter::flows::main_flow::MainFlow;
use gradebook::prompter::prompter::Prompter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let paths = CliPaths::from_env().map_err(|msg| anyhow!(msg))?;
    let mut ctx = AppContext::new_with_paths(&paths.config_path, &paths.logs_dir)
        .with_context(|| {
            format!(
                "failed to start with config '{}'",
                paths.config_path.display()
            )
        })?;

    let logger = ctx.logger.clone();
    let flow = MainFlow::new(&mut ctx);
    if let Err(err) = Prompter::new().run(flow) {
        logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
    Ok(())
}
