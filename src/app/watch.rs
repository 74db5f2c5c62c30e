use crate::app::logger::Logger;
use crate::app::models::{Outcome, RuntimeConfig};
use crate::app::processor::{NoopProcessor, Processor};
use anyhow::Result;

/// Holds the resolved configuration and the logger, and runs the processor once.
#[derive(Debug)]
pub struct VolatileWatch<P = NoopProcessor> {
    config: RuntimeConfig,
    logger: Logger,
    processor: P,
}

impl VolatileWatch<NoopProcessor> {
    /// Builds an instance logging to stdout, at debug level if `config.verbose`.
    pub fn new(config: RuntimeConfig) -> Self {
        let logger = Logger::new(config.verbose);
        Self::with_logger(config, logger)
    }

    /// Builds an instance around a caller-supplied logger.
    pub fn with_logger(config: RuntimeConfig, logger: Logger) -> Self {
        Self {
            config,
            logger,
            processor: NoopProcessor,
        }
    }
}

impl Default for VolatileWatch<NoopProcessor> {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

impl<P: Processor> VolatileWatch<P> {
    /// Swaps in a different unit of work, keeping config and logger.
    pub fn with_processor<Q: Processor>(self, processor: Q) -> VolatileWatch<Q> {
        VolatileWatch {
            config: self.config,
            logger: self.logger,
            processor,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Runs the processor. Consumes the instance, so it can only run once.
    pub async fn execute(self) -> Result<Outcome> {
        self.logger.info(format_args!("Starting VolatileWatch processing"));

        match self.processor.process(&self.config, &self.logger).await {
            Ok(()) => {
                self.logger.info(format_args!("Processing completed successfully"));
                Ok(Outcome::Completed)
            }
            Err(err) => {
                self.logger.error(format_args!("Processing failed: {err}"));
                Err(err)
            }
        }
    }
}
