//! Another global subscriber is installed before ours, as a host embedding
//! the order screen might do.

use pizza_ui::config::LogConfig;
use pizza_ui::logging::{enable_file_logging, init_logging, set_log_level};
use tracing_subscriber::util::SubscriberInitExt;

#[test]
fn file_and_level_controls_refuse_when_subscriber_is_foreign() {
    tracing_subscriber::registry().try_init().unwrap();

    let path = std::env::temp_dir().join(format!("pizza-ui-foreign-{}.log", std::process::id()));
    let config = LogConfig {
        file: Some(path.clone()),
        ..LogConfig::default()
    };

    assert!(init_logging(&config).is_err());
    assert!(enable_file_logging(&path).is_err());
    assert!(set_log_level("debug").is_err());
    assert!(!path.exists());
}
