pub use ranger_test_macros::test;
pub use serial_test;
pub use tokio;

use std::sync::Once;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

fn init_tracing_with_env_like() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = fmt::layer().with_test_writer().with_target(false).compact();

    // try_init also bridges the log macros into tracing
    let _ = tracing_subscriber::registry().with(fmt).with(filter).try_init();
}

/// Test setup executed before each test.
pub fn setup_test() {
    INIT.call_once(|| {
        init_tracing_with_env_like();
        color_backtrace::install();
        log::debug!("test environment is ready");
    });
}
