/// Installs a subscriber that filters events through the `RUST_LOG` variable,
/// falling back to `fallback_opt` when the variable is absent or invalid.
pub(crate) fn tracing_init(
  fallback_opt: Option<&str>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
  use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
  let fallback = fallback_opt.unwrap_or("");
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
  let fmt = tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr);
  tracing_subscriber::Registry::default().with(env_filter).with(fmt).try_init()
}
