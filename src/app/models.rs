/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub verbose: bool,
    pub input: Option<String>,
    pub output: Option<String>,
}

/// Result of a successful `execute` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}
