use clap::Parser;
use pagesmith::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagesmith=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Slug { names }) => {
            pagesmith::cli::slug::run(&names);
        }
        Some(Commands::Validate { file }) => {
            pagesmith::cli::validate::run(&cli.config, &file)?;
        }
        Some(Commands::Payload { file, update }) => {
            pagesmith::cli::payload::run(&cli.config, &file, update)?;
        }
        Some(Commands::Visible { file, edit }) => {
            pagesmith::cli::visible::run(&file, edit)?;
        }
        Some(Commands::Search { file, query }) => {
            pagesmith::cli::search::run(&file, &query)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
