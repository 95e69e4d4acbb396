use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pkgspy")]
#[command(version, about = "Web dashboard for npm package metadata")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = pkgspy::config::DEFAULT_PORT)]
    port: u16,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pkgspy=info")),
        )
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(pkgspy::web::run_server(cli.port))
}
