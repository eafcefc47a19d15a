//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins over `default_filter`. Returns false when a subscriber was
/// already installed, so calling this more than once is harmless.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init("off");
        assert!(!init("off"));
    }
}
