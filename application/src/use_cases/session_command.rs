//! Session commands
//!
//! Every action the facilitator can take, whether from a key binding or
//! from the `:` command line, is expressed as a [`SessionCommand`].
//! [`SessionCommand::parse`] turns command-line text into one.

use panel_domain::{Criterion, DomainError, ParticipantId, Phase};
use thiserror::Error;

/// A single facilitator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    // === Setup ===
    /// Select a case by id
    SelectCase(String),
    /// Step to the next case in the catalog
    CycleCase,
    /// Resize the roster (clamped to 3–12)
    Roster(usize),
    /// Rename a participant
    Rename { id: ParticipantId, name: String },
    /// Set a phase duration in minutes (clamped to 1–60)
    SetDuration { phase: Phase, minutes: i64 },
    /// Step a phase duration by whole minutes
    AdjustDuration { phase: Phase, delta: i64 },

    // === Lifecycle ===
    Start,
    /// Pause/resume
    ToggleTimer,
    /// Manual forward transition
    Advance,
    /// ±minutes on the running countdown
    AdjustTimer(i32),
    Reset,

    // === During the session ===
    NextSpeaker,
    PreviousSpeaker,
    AssignRoles,
    Rate {
        id: ParticipantId,
        criterion: Criterion,
        value: i64,
    },
    Notes(String),

    // === Other ===
    Export,
    Help,
    Quit,
}

/// Error parsing command-line text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a number: {0}")]
    Number(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

const USAGE_ROSTER: &str = "roster <3-12>";
const USAGE_NAME: &str = "name <id> <new name>";
const USAGE_DUR: &str = "dur <reading|self|discussion|summary> <minutes|+n|-n>";
const USAGE_RATE: &str = "rate <id> <criterion> <1-5>";
const USAGE_TIME: &str = "time <+n|-n>";

fn parse_int(value: &str) -> Result<i64, CommandParseError> {
    value
        .trim_start_matches('+')
        .parse::<i64>()
        .map_err(|_| CommandParseError::Number(value.to_string()))
}

fn parse_id(value: &str) -> Result<ParticipantId, CommandParseError> {
    value
        .trim_start_matches('#')
        .parse::<u32>()
        .map(ParticipantId::new)
        .map_err(|_| CommandParseError::Number(value.to_string()))
}

impl SessionCommand {
    /// Parse a command line such as `dur discussion 15` or `:rate 2 logic 4`.
    ///
    /// A leading `:` or `/` is ignored. Command names are case-insensitive;
    /// arguments (names, notes) keep their case.
    pub fn parse(input: &str) -> Result<Self, CommandParseError> {
        let line = input.trim().trim_start_matches([':', '/']).trim();
        if line.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match command.to_lowercase().as_str() {
            "start" => Ok(SessionCommand::Start),
            "pause" | "resume" | "toggle" => Ok(SessionCommand::ToggleTimer),
            "next" | "advance" => Ok(SessionCommand::Advance),
            "reset" => Ok(SessionCommand::Reset),
            "time" | "t" => match args.as_slice() {
                [delta] => {
                    let delta = parse_int(delta)?;
                    let delta = delta.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                    Ok(SessionCommand::AdjustTimer(delta))
                }
                _ => Err(CommandParseError::Usage(USAGE_TIME)),
            },
            "speaker" | "sp" => match args.as_slice() {
                ["next" | "n"] | [] => Ok(SessionCommand::NextSpeaker),
                ["prev" | "previous" | "p"] => Ok(SessionCommand::PreviousSpeaker),
                _ => Err(CommandParseError::Usage("speaker <next|prev>")),
            },
            "roles" => Ok(SessionCommand::AssignRoles),
            "case" => match args.as_slice() {
                [] => Ok(SessionCommand::CycleCase),
                [id] => Ok(SessionCommand::SelectCase(id.to_string())),
                _ => Err(CommandParseError::Usage("case [id]")),
            },
            "roster" | "size" => match args.as_slice() {
                [size] => {
                    let size = parse_int(size)?.max(0);
                    Ok(SessionCommand::Roster(
                        usize::try_from(size).unwrap_or(usize::MAX),
                    ))
                }
                _ => Err(CommandParseError::Usage(USAGE_ROSTER)),
            },
            "name" | "rename" => {
                let (id, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandParseError::Usage(USAGE_NAME))?;
                Ok(SessionCommand::Rename {
                    id: parse_id(id)?,
                    name: name.trim().to_string(),
                })
            }
            "dur" | "duration" => match args.as_slice() {
                [phase, minutes] => {
                    let phase: Phase = phase.parse()?;
                    let value = parse_int(minutes)?;
                    if minutes.starts_with(['+', '-']) {
                        Ok(SessionCommand::AdjustDuration {
                            phase,
                            delta: value,
                        })
                    } else {
                        Ok(SessionCommand::SetDuration {
                            phase,
                            minutes: value,
                        })
                    }
                }
                _ => Err(CommandParseError::Usage(USAGE_DUR)),
            },
            "rate" | "score" => match args.as_slice() {
                [id, criterion, value] => Ok(SessionCommand::Rate {
                    id: parse_id(id)?,
                    criterion: criterion.parse()?,
                    value: parse_int(value)?,
                }),
                _ => Err(CommandParseError::Usage(USAGE_RATE)),
            },
            "notes" | "note" => Ok(SessionCommand::Notes(rest.to_string())),
            "export" | "copy" => Ok(SessionCommand::Export),
            "help" | "h" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ => Err(CommandParseError::Unknown(command.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(SessionCommand::parse("start"), Ok(SessionCommand::Start));
        assert_eq!(SessionCommand::parse(":next"), Ok(SessionCommand::Advance));
        assert_eq!(
            SessionCommand::parse("/pause"),
            Ok(SessionCommand::ToggleTimer)
        );
        assert_eq!(SessionCommand::parse("Q"), Ok(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse("roles"), Ok(SessionCommand::AssignRoles));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(SessionCommand::parse("  "), Err(CommandParseError::Empty));
        assert_eq!(SessionCommand::parse(":"), Err(CommandParseError::Empty));
        assert_eq!(
            SessionCommand::parse("dance"),
            Err(CommandParseError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_roster() {
        assert_eq!(SessionCommand::parse("roster 8"), Ok(SessionCommand::Roster(8)));
        assert_eq!(SessionCommand::parse("roster -3"), Ok(SessionCommand::Roster(0)));
        assert_eq!(
            SessionCommand::parse("roster"),
            Err(CommandParseError::Usage(USAGE_ROSTER))
        );
        assert!(matches!(
            SessionCommand::parse("roster eight"),
            Err(CommandParseError::Number(_))
        ));
    }

    #[test]
    fn test_rename_keeps_spaces_and_case() {
        assert_eq!(
            SessionCommand::parse("name 3 Mary Ann"),
            Ok(SessionCommand::Rename {
                id: ParticipantId::new(3),
                name: "Mary Ann".to_string()
            })
        );
        assert_eq!(
            SessionCommand::parse("name 3"),
            Err(CommandParseError::Usage(USAGE_NAME))
        );
    }

    #[test]
    fn test_duration_absolute_and_relative() {
        assert_eq!(
            SessionCommand::parse("dur discussion 15"),
            Ok(SessionCommand::SetDuration {
                phase: Phase::Discussion,
                minutes: 15
            })
        );
        assert_eq!(
            SessionCommand::parse("dur self +2"),
            Ok(SessionCommand::AdjustDuration {
                phase: Phase::Statement,
                delta: 2
            })
        );
        assert_eq!(
            SessionCommand::parse("dur reading -1"),
            Ok(SessionCommand::AdjustDuration {
                phase: Phase::Reading,
                delta: -1
            })
        );
        assert!(matches!(
            SessionCommand::parse("dur lunch 5"),
            Err(CommandParseError::Domain(DomainError::UnknownPhase(_)))
        ));
    }

    #[test]
    fn test_rate() {
        assert_eq!(
            SessionCommand::parse("rate 2 logic 4"),
            Ok(SessionCommand::Rate {
                id: ParticipantId::new(2),
                criterion: Criterion::Logic,
                value: 4
            })
        );
        assert_eq!(
            SessionCommand::parse("rate #5 数据 9"),
            Ok(SessionCommand::Rate {
                id: ParticipantId::new(5),
                criterion: Criterion::Data,
                value: 9
            })
        );
        assert!(matches!(
            SessionCommand::parse("rate 2 charm 4"),
            Err(CommandParseError::Domain(DomainError::UnknownCriterion(_)))
        ));
    }

    #[test]
    fn test_case_and_time() {
        assert_eq!(SessionCommand::parse("case"), Ok(SessionCommand::CycleCase));
        assert_eq!(
            SessionCommand::parse("case selection_roi"),
            Ok(SessionCommand::SelectCase("selection_roi".to_string()))
        );
        assert_eq!(SessionCommand::parse("time +1"), Ok(SessionCommand::AdjustTimer(1)));
        assert_eq!(SessionCommand::parse("t -2"), Ok(SessionCommand::AdjustTimer(-2)));
    }

    #[test]
    fn test_notes_take_the_rest_of_the_line() {
        assert_eq!(
            SessionCommand::parse("notes 3号 数据很扎实"),
            Ok(SessionCommand::Notes("3号 数据很扎实".to_string()))
        );
    }
}
