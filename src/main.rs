use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use consolify::{cli, config, relay::RelayClient, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

const EXAMPLES: &str = "Example:
  consolify play spotify:playlist:37i9dQZF1DXcBWIGoYBM5M";

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about="Consolify CLI - Control your Spotify Web Player",
  styles=styles(),
  arg_required_else_help = true,
  after_help = EXAMPLES,
)]
struct Cli {
    /// Relay server base URL [default: $CONSOLIFY_SERVER_URL or http://127.0.0.1:8888]
    #[clap(long, global = true)]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play a playlist/album
    Play {
        /// Spotify context URI, defaults to the built-in playlist
        uri: Option<String>,
    },

    /// Pause playback
    Pause,

    /// Resume playback
    Resume,

    /// Search the catalog through the web player
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    #[command(subcommand)]
    pub target: SearchTarget,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SearchTarget {
    /// Search albums by name
    Albums(SearchQuery),

    /// Search artists by name
    Artists(SearchQuery),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchQuery {
    /// Search terms
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Number of results, 1 to 20
    #[clap(long)]
    pub limit: Option<i64>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let client = RelayClient::new(cli.server.unwrap_or_else(config::server_url));

    match cli.command {
        Command::Play { uri } => cli::play(&client, uri).await,
        Command::Pause => cli::pause(&client).await,
        Command::Resume => cli::resume(&client).await,
        Command::Search(opt) => match opt.target {
            SearchTarget::Albums(q) => {
                cli::search_albums(&client, &q.query.join(" "), q.limit).await
            }
            SearchTarget::Artists(q) => {
                cli::search_artists(&client, &q.query.join(" "), q.limit).await
            }
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
