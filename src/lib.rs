pub mod app;

pub use app::models::{Outcome, RuntimeConfig};
pub use app::{report, run, run_with};
pub use app::watch::VolatileWatch;
