use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;

/// Builds the immutable configuration from parsed CLI args. `verbose` defaults to false.
pub fn resolve_config(cli: Cli) -> RuntimeConfig {
    RuntimeConfig {
        verbose: cli.verbose,
        input: cli.input,
        output: cli.output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cli::parse_permissive;

    fn config_for(args: &[&str]) -> RuntimeConfig {
        let argv = std::iter::once("volatilewatch").chain(args.iter().copied());
        resolve_config(parse_permissive(argv).unwrap().cli)
    }

    #[test]
    fn no_flags_gives_default() {
        assert_eq!(config_for(&[]), RuntimeConfig::default());
    }

    #[test]
    fn carries_every_flag() {
        assert_eq!(
            config_for(&["-v", "-i", "a.log", "--output", "b.log"]),
            RuntimeConfig {
                verbose: true,
                input: Some("a.log".into()),
                output: Some("b.log".into()),
            }
        );
    }

    #[test]
    fn unknown_flags_do_not_change_the_result() {
        assert_eq!(
            config_for(&["--color", "-x", "-v"]),
            config_for(&["-v"])
        );
    }

    #[test]
    fn same_argv_gives_equal_config() {
        let args = ["--verbose", "--weird=1", "-o", "out"];
        assert_eq!(config_for(&args), config_for(&args));
    }
}
