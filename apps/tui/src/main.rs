use clap::Parser;
use color_eyre::Result;
use pasture_tui::app::App;
use pasture_tui::cli::{CliArgs, Command};
use pasture_tui::config::{init_app_config, load_visibility_rules};
use pasture_tui::logging::{init_logging, LogTarget};
use pasture_tui::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    // Headless output goes to stdout, so only the dashboard logs to a file
    let interactive = args.command.is_none() && !args.headless && !args.json && is_terminal();
    let target = if interactive {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    init_logging(&config, target)?;
    tracing::debug!(?config, "configuration resolved");

    if let Some(Command::BuildOrigins {
        input,
        output,
        aliases,
    }) = args.command
    {
        return event::run_build_origins(&config, input, output, aliases).await;
    }

    let rules = load_visibility_rules(&config)?;

    if !interactive {
        // Run in headless mode
        return event::run_headless(&config, rules, args.json).await;
    }

    let mut app = App::new(config, rules);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
