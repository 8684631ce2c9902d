use super::args::{Cli, Commands, UsersCommand};
use super::handlers;
use crate::config::{self, Config};
use crate::types::LogLevel;
use anyhow::{Context, Result};
use rolodex_api::HttpDirectory;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, Some(Commands::Browse));
    init_logging(cli.log_level, interactive);

    let Some(command) = cli.command else {
        show_guidance()?;
        return Ok(());
    };

    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    let base_url = config::resolve_base_url(cli.base_url.as_deref(), &config)?;

    let source = HttpDirectory::with_timeout(base_url, Duration::from_secs(config.api.timeout_secs))
        .context("failed to build HTTP client")?;

    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Commands::Browse => handlers::browse::handle(Arc::new(source), &runtime),

        Commands::Users { command } => match command {
            UsersCommand::List {
                search,
                company,
                sort,
                order,
            } => runtime.block_on(handlers::list::handle(
                &source, search, company, sort, order, cli.format,
            )),
            UsersCommand::Show { id } => {
                runtime.block_on(handlers::show::handle(&source, id, cli.format))
            }
        },

        Commands::Companies => runtime.block_on(handlers::companies::handle(&source, cli.format)),
    }
}

fn init_logging(level: LogLevel, interactive: bool) {
    // The TUI owns the terminal; stray log lines would bleed into the
    // alternate screen, so browse runs silent unless ROLODEX_LOG asks for it.
    let default_directive = if interactive {
        "off".to_string()
    } else {
        level.to_string()
    };

    let filter = EnvFilter::try_from_env("ROLODEX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show_guidance() -> Result<()> {
    println!("rolodex - REST user directory browser\n");

    println!("Quick commands:");
    println!("  rolodex browse                    # Interactive full-screen browser");
    println!("  rolodex users list                # Print the directory");
    println!("  rolodex users list --search erv   # Substring match on names");
    println!("  rolodex users show <ID>           # One profile with its posts");
    println!("  rolodex companies                 # Every company, deduplicated\n");

    println!("For more commands:");
    println!("  rolodex --help");

    Ok(())
}
