pub mod config;
pub mod headless;
pub mod http_client;
pub mod notifier;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{load_dotenv_from_repo_root, PlayerConfig};
pub use headless::{HeadlessRenderer, LoggingBindings};
pub use http_client::HttpLineupApi;
pub use notifier::TracingNotifier;
pub use platform::{FileStorage, SystemClock};
