use clap::Parser;

use consolify::{config, error, server};

#[derive(Parser, Debug)]
#[clap(
    version = env!("CARGO_PKG_VERSION"),
    name = "consolify-server",
    about = "Local relay between the consolify command client and the Spotify Web Playback SDK"
)]
struct Args {
    /// Open the player page in the default browser after startup
    #[clap(long)]
    open: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let args = Args::parse();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    if let Err(e) = server::run(config, args.open).await {
        error!("Relay server stopped: {}", e);
    }
}
