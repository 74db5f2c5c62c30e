// Declare modules
pub mod cli;
pub mod config;
pub mod logger;
pub mod models;
pub mod processor;
pub mod watch;

use anyhow::Result;
use std::ffi::OsString;
use std::io::Write;

use self::cli::parse_permissive;
use self::config::resolve_config;
use self::models::Outcome;
use self::processor::{NoopProcessor, Processor};
use self::watch::VolatileWatch;

/// Parses args, resolves configuration, and drives one `execute` run.
pub async fn run<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    run_with(args, NoopProcessor).await
}

/// Same as [`run`], with the unit of work supplied by the caller.
pub async fn run_with<I, T, P>(args: I, processor: P) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    P: Processor,
{
    // 1. Parse Args
    let parsed = parse_permissive(args)?;

    // 2. Resolve Configuration
    let config = resolve_config(parsed.cli);

    // 3. Build the app and run it
    let app = VolatileWatch::new(config).with_processor(processor);
    if !parsed.ignored.is_empty() {
        app.logger().debug(format_args!(
            "Ignoring unrecognized arguments: {}",
            parsed.ignored.join(" ")
        ));
    }

    app.execute().await
}

/// Maps a run result to the process exit status, writing failures to `err_out`.
pub fn report(result: &Result<Outcome>, err_out: &mut impl Write) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            // Nothing more to do if stderr itself is gone.
            let _ = writeln!(err_out, "Error: {e:#}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::logger::Logger;
    use crate::app::models::RuntimeConfig;

    struct Boom;

    impl Processor for Boom {
        async fn process(&self, _config: &RuntimeConfig, _logger: &Logger) -> Result<()> {
            anyhow::bail!("boom")
        }
    }

    #[tokio::test]
    async fn default_run_exits_zero() {
        let result = run(["volatilewatch"]).await;
        assert!(result.as_ref().unwrap().is_success());

        let mut stderr = Vec::new();
        assert_eq!(report(&result, &mut stderr), 0);
        assert!(stderr.is_empty());
    }

    #[tokio::test]
    async fn unknown_flags_still_exit_zero() {
        let result = run(["volatilewatch", "-v", "--nope", "stray"]).await;

        let mut stderr = Vec::new();
        assert_eq!(report(&result, &mut stderr), 0);
    }

    #[tokio::test]
    async fn processor_failure_exits_one_with_message() {
        let result = run_with(["volatilewatch"], Boom).await;
        assert_eq!(result.as_ref().unwrap_err().to_string(), "boom");

        let mut stderr = Vec::new();
        assert_eq!(report(&result, &mut stderr), 1);
        assert_eq!(String::from_utf8(stderr).unwrap(), "Error: boom\n");
    }
}
