use crate::app::logger::Logger;
use crate::app::models::RuntimeConfig;
use anyhow::Result;
use std::future::Future;

/// The unit of work run by `VolatileWatch::execute`.
///
/// Any error returned here is logged by the caller and propagated as-is.
pub trait Processor {
    fn process(
        &self,
        config: &RuntimeConfig,
        logger: &Logger,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Does nothing and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProcessor;

impl Processor for NoopProcessor {
    async fn process(&self, _config: &RuntimeConfig, _logger: &Logger) -> Result<()> {
        Ok(())
    }
}
