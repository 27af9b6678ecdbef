mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use spendlog_core::AppConfig;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SPENDLOG_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "spendlog", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let file_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.effective_data_file());
    tracing::debug!("Using data file {}", file_path.display());

    let mut ctx = CliContext::load(&file_path, config);

    match cli.command {
        Commands::Add(args) => handlers::expense::handle_add(&mut ctx, args)?,
        Commands::Delete { id } => handlers::expense::handle_delete(&mut ctx, id)?,
        Commands::List(args) => handlers::expense::handle_list(&ctx, args)?,
        Commands::Summary(args) => handlers::summary::handle(&ctx, args)?,
        Commands::Categories { known } => handlers::expense::handle_categories(&ctx, known)?,
        Commands::Export(args) => handlers::export::handle_export(&ctx, args)?,
        Commands::Import(args) => handlers::export::handle_import(&mut ctx, args)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
