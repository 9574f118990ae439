use clap::{Parser, Subcommand};
use provenance_app_core::ArchiveContext;
use provenance_cli::{commands, ListArgs, OutputFormat};
use provenance_core::{Credentials, FilterKey, RecordId};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(
        long,
        global = true,
        env = provenance_config::BASE_URL_ENV,
        default_value = provenance_config::DEFAULT_BASE_URL
    )]
    base_url: String,
    #[arg(short, long, global = true, env = "ARCHIVE_USERNAME")]
    username: Option<String>,
    #[arg(long, global = true, env = "ARCHIVE_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the identity the archive reports for this session
    Whoami,
    /// List artworks, filtered by art type and medium
    Artworks {
        #[arg(long, default_value = "", help = "Starting query, e.g. 'art_type=3&medium=7'")]
        query: String,
        #[arg(long)]
        art_type: Option<RecordId>,
        #[arg(long)]
        medium: Option<RecordId>,
        #[arg(short, long, help = "Narrow the fetched list by name")]
        search: Option<String>,
    },
    /// List persons, filtered by event type
    Persons {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long)]
        event_type: Option<RecordId>,
        #[arg(short, long, help = "Narrow the fetched list by name")]
        search: Option<String>,
    },
    /// Show one artwork and its provenance chain
    Artwork { id: RecordId },
    /// Show one person and their events
    Person { id: RecordId },
    /// Show every filter option list
    Options,
}

fn selections(pairs: &[(FilterKey, Option<RecordId>)]) -> Vec<(FilterKey, RecordId)> {
    pairs
        .iter()
        .filter_map(|(key, id)| id.map(|id| (*key, id)))
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ctx = ArchiveContext::connect(&cli.base_url)?;
    let credentials = match (cli.username, cli.password) {
        (Some(username), Some(password)) => Some(Credentials { username, password }),
        (Some(_), None) | (None, Some(_)) => {
            anyhow::bail!("--username and --password must be given together")
        }
        (None, None) => None,
    };
    commands::open_session(&ctx, credentials).await?;

    let format = cli.format;
    match cli.command {
        Commands::Whoami => {
            commands::cmd_whoami(&ctx, format)?;
        }
        Commands::Artworks {
            query,
            art_type,
            medium,
            search,
        } => {
            let args = ListArgs {
                query,
                select: selections(&[(FilterKey::ArtType, art_type), (FilterKey::Medium, medium)]),
                search,
            };
            commands::cmd_artworks(&ctx, &args, format).await?;
        }
        Commands::Persons {
            query,
            event_type,
            search,
        } => {
            let args = ListArgs {
                query,
                select: selections(&[(FilterKey::EventType, event_type)]),
                search,
            };
            commands::cmd_persons(&ctx, &args, format).await?;
        }
        Commands::Artwork { id } => {
            commands::cmd_artwork(&ctx, id, format).await?;
        }
        Commands::Person { id } => {
            commands::cmd_person(&ctx, id, format).await?;
        }
        Commands::Options => {
            commands::cmd_options(&ctx, format).await?;
        }
    }

    Ok(())
}
