mod clap;
mod error;
mod fetch;
mod frame;
mod misc;
mod persist;

pub(crate) use error::{Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
  misc::tracing_init(Some("info"))?;
  clap::init().await
}
