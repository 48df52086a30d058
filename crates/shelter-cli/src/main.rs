//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use shelter_cli::handlers::add::AddArgs;
use shelter_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so `list` output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            port,
            host,
            allow_origin,
        } => {
            handlers::serve::execute(port, host, allow_origin).await?;
        }
        Commands::Paths => {
            handlers::paths::execute()?;
        }
        Commands::List => {
            let ctx = bootstrap(CliConfig::with_defaults()?).await?;
            handlers::list::execute(&ctx).await?;
        }
        Commands::Add {
            name,
            age,
            gender,
            breed,
            description,
        } => {
            let ctx = bootstrap(CliConfig::with_defaults()?).await?;
            let args = AddArgs {
                name,
                age,
                gender,
                breed,
                description,
            };
            handlers::add::execute(&ctx, args).await?;
        }
        Commands::Import { file } => {
            let ctx = bootstrap(CliConfig::with_defaults()?).await?;
            handlers::import::execute(&ctx, &file).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
        }
        return;
    };

    if let Err(err) = run(command).await {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<CliError>()
            .map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
