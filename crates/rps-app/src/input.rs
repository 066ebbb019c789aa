//! Text command surface standing in for the browser buttons.
//!
//! One command per line:
//!
//! - `speed [factor]`: speed every live piece up (default 1.2x)
//! - `restart`: reset speed and re-spawn
//! - `count <n>`: re-spawn with `n` pieces per kind (n >= 10)
//! - `quit`: stop the simulation

use rps_core::commands::PlayerCommand;
use rps_core::constants::SPEED_UP_FACTOR;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum HostInput {
    Command(PlayerCommand),
    Quit,
    /// Blank line.
    Empty,
}

/// Lines that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("unknown command `{0}` (expected speed, restart, count, or quit)")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("invalid {what}: `{value}`")]
    InvalidNumber { what: &'static str, value: String },
}

/// Parse one line of host input. Range checks (minimum population, positive
/// factor) are left to the engine so they surface the same way for every
/// host.
pub fn parse_line(line: &str) -> Result<HostInput, ParseCommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(HostInput::Empty);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(HostInput::Quit),
        "restart" => PlayerCommand::Restart,
        "speed" => {
            let factor = match words.next() {
                Some(raw) => raw.parse::<f64>().map_err(|_| ParseCommandError::InvalidNumber {
                    what: "speed factor",
                    value: raw.to_string(),
                })?,
                None => SPEED_UP_FACTOR,
            };
            PlayerCommand::IncreaseSpeed { factor }
        }
        "count" => {
            let raw = words.next().ok_or(ParseCommandError::MissingArgument {
                command: "count",
                what: "a population size",
            })?;
            let count = raw
                .parse::<u32>()
                .map_err(|_| ParseCommandError::InvalidNumber {
                    what: "population size",
                    value: raw.to_string(),
                })?;
            PlayerCommand::SetPopulationCount { count }
        }
        _ => return Err(ParseCommandError::Unknown(head.to_string())),
    };

    Ok(HostInput::Command(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line("speed"),
            Ok(HostInput::Command(PlayerCommand::IncreaseSpeed {
                factor: SPEED_UP_FACTOR
            }))
        );
        assert_eq!(
            parse_line("  SPEED 1.5 "),
            Ok(HostInput::Command(PlayerCommand::IncreaseSpeed {
                factor: 1.5
            }))
        );
        assert_eq!(
            parse_line("restart"),
            Ok(HostInput::Command(PlayerCommand::Restart))
        );
        assert_eq!(
            parse_line("count 25"),
            Ok(HostInput::Command(PlayerCommand::SetPopulationCount {
                count: 25
            }))
        );
        assert_eq!(parse_line("quit"), Ok(HostInput::Quit));
        assert_eq!(parse_line("   "), Ok(HostInput::Empty));
    }

    #[test]
    fn test_small_count_is_left_to_engine() {
        assert_eq!(
            parse_line("count 9"),
            Ok(HostInput::Command(PlayerCommand::SetPopulationCount {
                count: 9
            }))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("jump"),
            Err(ParseCommandError::Unknown("jump".into()))
        );
        assert!(matches!(
            parse_line("count"),
            Err(ParseCommandError::MissingArgument { command: "count", .. })
        ));
        assert!(matches!(
            parse_line("count -3"),
            Err(ParseCommandError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_line("speed fast"),
            Err(ParseCommandError::InvalidNumber { .. })
        ));
    }
}
