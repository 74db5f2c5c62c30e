use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    author,
    version,
    about = "VolatileWatch processing scaffold",
    args_override_self = true
)]
pub struct Cli {
    /// Enable debug log output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Source to read from
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Destination to write to
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Arguments accepted by clap, plus whatever the permissive filter dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub cli: Cli,
    pub ignored: Vec<String>,
}

/// Parses argv without failing on unknown flags or stray words.
///
/// `--help` and `--version` still print and exit through clap.
pub fn parse_permissive<I, T>(args: I) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let (known, ignored) = split_known(args);

    let cli = match Cli::try_parse_from(&known) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(err.into()),
    };

    Ok(ParsedArgs { cli, ignored })
}

/// Separates the tokens clap understands from the ones to drop.
///
/// Value options are normalized to `--name=value` so clap never mistakes a
/// value for a flag. Short clusters are unpacked letter by letter.
fn split_known<I, T>(args: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args
        .into_iter()
        .map(|a| a.into().to_string_lossy().into_owned())
        .peekable();

    let mut known = Vec::new();
    let mut ignored = Vec::new();

    if let Some(bin) = iter.next() {
        known.push(bin);
    }

    while let Some(arg) = iter.next() {
        if arg == "--" {
            ignored.extend(&mut iter);
            break;
        }

        if let Some(long) = arg.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (long, None),
            };
            match (name, inline) {
                ("verbose" | "help" | "version", None) => known.push(arg.clone()),
                // Any value but "false" turns it on; "false" clears earlier occurrences.
                ("verbose", Some(value)) => {
                    if value == "false" {
                        known.retain(|a| a != "--verbose");
                    } else {
                        known.push("--verbose".to_string());
                    }
                }
                ("input" | "output", Some(value)) => known.push(format!("--{name}={value}")),
                ("input" | "output", None) => match iter.next_if(|next| !looks_like_flag(next)) {
                    Some(value) => known.push(format!("--{name}={value}")),
                    None => ignored.push(arg.clone()),
                },
                _ => ignored.push(arg.clone()),
            }
            continue;
        }

        if !looks_like_flag(&arg) {
            ignored.push(arg);
            continue;
        }

        let cluster = &arg[1..];
        for (idx, letter) in cluster.char_indices() {
            match letter {
                'v' => known.push("--verbose".to_string()),
                'h' => known.push("--help".to_string()),
                'V' => known.push("--version".to_string()),
                'i' | 'o' => {
                    let name = if letter == 'i' { "input" } else { "output" };
                    let rest = &cluster[idx + 1..];
                    if !rest.is_empty() {
                        known.push(format!("--{name}={rest}"));
                    } else if let Some(value) = iter.next_if(|next| !looks_like_flag(next)) {
                        known.push(format!("--{name}={value}"));
                    } else {
                        ignored.push(format!("-{letter}"));
                    }
                    break;
                }
                other => ignored.push(format!("-{other}")),
            }
        }
    }

    (known, ignored)
}

fn looks_like_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}
