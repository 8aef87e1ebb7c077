use clap::Parser;
use std::path::PathBuf;

pub(crate) async fn init() -> crate::Result<()> {
  run(Cli::parse()).await
}

async fn run(cli: Cli) -> crate::Result<()> {
  let payload = crate::fetch::fetch_single_message(&cli.connect, cli.max_message_size).await?;
  match crate::frame::inspect(&payload) {
    Ok(header) => tracing::info!("received a frame of {} points", header.point_count),
    Err(err) => tracing::warn!("payload is not a capture frame: {err}"),
  }
  crate::persist::persist(&cli.output, &payload).await?;
  tracing::info!("wrote {} bytes to {}", payload.len(), cli.output.display());
  Ok(())
}

/// Grabs a single point cloud frame from a WebSocket endpoint and stores it
/// on disk
#[derive(Debug, clap::Parser)]
#[command(long_about = None, name = "pcgrab", version)]
struct Cli {
  /// Capture server URI
  #[arg(default_value = "ws://localhost:9002", short = 'c', value_name = "URI")]
  connect: String,
  /// Maximum accepted message size
  #[arg(default_value_t = 1_000_000_000, short = 'm', value_name = "Bytes")]
  max_message_size: usize,
  /// Destination file path
  #[arg(default_value = "test.txt", short = 'o', value_name = "Path")]
  output: PathBuf,
}
