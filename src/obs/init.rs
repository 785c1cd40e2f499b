use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, Registry};

use super::tracingx::filter_from_env;

/// Installs the global subscriber: `RUST_LOG` filter plus a plain fmt layer.
/// Embedding applications that own their subscriber should skip this.
pub fn init() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let subscriber = Registry::default().with(filter_from_env()).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "zap_core tracing ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let _ = init();
        assert!(init().is_err());
    }
}
