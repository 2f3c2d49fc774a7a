use std::{env, path::PathBuf};

use anyhow::{Context, Result, anyhow};

pub const DEFAULT_CONFIG_PATH: &str = "./cds-cards.jsonc";

const USAGE: &str = "usage: cds-cards [--config <path>] --response <path> \
[render | accept <card-uuid> <suggestion> | dismiss <card-uuid> [<override-code>] | launch <card-uuid> <link-index>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Render,
    Accept {
        card_uuid: String,
        /// Suggestion uuid, or its label when the suggestion has no uuid.
        suggestion: String,
    },
    Dismiss {
        card_uuid: String,
        override_code: Option<String>,
    },
    Launch {
        card_uuid: String,
        link_index: usize,
    },
}

impl Command {
    /// Whether the command can dispatch feedback and so needs a token signer.
    pub fn sends_feedback(&self) -> bool {
        matches!(self, Command::Accept { .. } | Command::Dismiss { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// `None` means the default path, which may be absent.
    pub config_path: Option<PathBuf>,
    pub response_path: PathBuf,
    pub command: Command,
}

pub fn cli_args_from_env() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut response_path = None;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--response" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --response"))?;
                response_path = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
            _ => positional.push(arg),
        }
    }

    let response_path = response_path.ok_or_else(|| anyhow!("missing --response. {USAGE}"))?;
    let command = parse_command(&positional)?;

    Ok(CliArgs {
        config_path,
        response_path,
        command,
    })
}

fn parse_command(positional: &[String]) -> Result<Command> {
    let words: Vec<&str> = positional.iter().map(String::as_str).collect();
    match words.as_slice() {
        [] | ["render"] => Ok(Command::Render),
        ["accept", card_uuid, suggestion] => Ok(Command::Accept {
            card_uuid: card_uuid.to_string(),
            suggestion: suggestion.to_string(),
        }),
        ["dismiss", card_uuid] => Ok(Command::Dismiss {
            card_uuid: card_uuid.to_string(),
            override_code: None,
        }),
        ["dismiss", card_uuid, override_code] => Ok(Command::Dismiss {
            card_uuid: card_uuid.to_string(),
            override_code: Some(override_code.to_string()),
        }),
        ["launch", card_uuid, link_index] => Ok(Command::Launch {
            card_uuid: card_uuid.to_string(),
            link_index: link_index
                .parse()
                .with_context(|| format!("invalid link index '{link_index}'"))?,
        }),
        _ => Err(anyhow!(
            "unrecognized command: {}. {USAGE}",
            positional.join(" ")
        )),
    }
}
