//! Command evaluation and dispatch
//!
//! The interpreter turns one submitted line into a tagged result plus an
//! optional side-effect descriptor. Evaluation itself mutates nothing; the
//! owning session applies the descriptor exactly once at submission time,
//! so redrawing the transcript never re-runs a command.
//!
//! Dispatch is a flat table: exact match on the first whitespace token,
//! case-sensitive, no aliasing, no prefix matching. Failure diagnostics are
//! deliberately verbose shell-style text, reproduced verbatim as
//! displayable strings.

use crate::config::TerminalConfig;
use crate::models::CommandResult;
use crate::telemetry::{lock_window, SharedTelemetry};

/// Summary returned by bare `help`
pub const HELP_SUMMARY: &str = "Available commands: help [args...], clear, logout, remove [args...], send [args...], version, update, netstat";

const REMOVE_USAGE: &str = "cmdlet remove at command pipeline position 1 Supply values for the following parameters: InputObject[1]:";

const SEND_USAGE: &str =
    "cmdlet Write-Output at command pipeline position 1\nSupply values for the following parameters:\nargs[1]:";

/// Commands recognized by the dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    Version,
    Help,
    Clear,
    Remove,
    Logout,
    Send,
    Update,
    Netstat,
}

impl TerminalCommand {
    /// Resolve a command name. Exact match only, case-sensitive.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "version" => Some(Self::Version),
            "help" => Some(Self::Help),
            "clear" => Some(Self::Clear),
            "remove" => Some(Self::Remove),
            "logout" => Some(Self::Logout),
            "send" => Some(Self::Send),
            "update" => Some(Self::Update),
            "netstat" => Some(Self::Netstat),
            _ => None,
        }
    }

    /// Fixed help line for `help <topic>`. `help` itself has no topic entry.
    pub fn help_line(self) -> Option<&'static str> {
        match self {
            Self::Send => Some("send [args..] - display text"),
            Self::Clear => Some("clear - clear console"),
            Self::Logout => Some("logout - logout from account"),
            Self::Remove => Some("remove [args..] - user"),
            Self::Version => Some("version - display current version of terminal"),
            Self::Update => Some("update - system update"),
            Self::Netstat => Some("netstat - display internet consumption"),
            Self::Help => None,
        }
    }
}

/// Deferred mutation requested by a command, applied once by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Reset the history log to an empty sequence
    ClearHistory,
    /// Navigate to the login boundary
    Logout,
    /// Tear down persisted identity state and close the terminal
    RemoveUser,
    /// Persist the OS-version marker
    InstallUpdate,
}

/// Result of evaluating one line: the displayable outcome plus any side
/// effect the session must apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Displayable outcome, stored with the history entry
    pub result: CommandResult,
    /// Side effect to apply exactly once at submission time
    pub effect: Option<SideEffect>,
}

impl Evaluation {
    fn display(result: CommandResult) -> Self {
        Self {
            result,
            effect: None,
        }
    }

    fn with_effect(result: CommandResult, effect: SideEffect) -> Self {
        Self {
            result,
            effect: Some(effect),
        }
    }
}

/// Line-oriented command dispatcher
pub struct CommandInterpreter {
    version: String,
    os_version: String,
    telemetry: SharedTelemetry,
}

impl CommandInterpreter {
    /// Create an interpreter reading telemetry from the shared window
    pub fn new(config: &TerminalConfig, telemetry: SharedTelemetry) -> Self {
        Self {
            version: config.version.clone(),
            os_version: config.os_version.clone(),
            telemetry,
        }
    }

    /// Interpreter version string reported by `version`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// OS-version marker written by `update`
    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    /// Evaluate one command line.
    ///
    /// Always yields exactly one Success or Failure; unrecognized and
    /// misused commands produce a Failure carrying a diagnostic message,
    /// never an error.
    pub fn evaluate(&self, line: &str) -> Evaluation {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some(&name) = args.first() else {
            return Evaluation::display(Self::unrecognized(line));
        };

        match TerminalCommand::lookup(name) {
            Some(TerminalCommand::Version) => Evaluation::display(CommandResult::success(
                format!("Version of terminal - {}", self.version),
            )),
            Some(TerminalCommand::Help) => {
                Evaluation::display(Self::help(args.get(1).copied()))
            }
            Some(TerminalCommand::Clear) => Evaluation::with_effect(
                CommandResult::success("History cleared"),
                SideEffect::ClearHistory,
            ),
            Some(TerminalCommand::Remove) => Self::remove(args.get(1).copied()),
            Some(TerminalCommand::Logout) => Evaluation::with_effect(
                CommandResult::success("Logging out.."),
                SideEffect::Logout,
            ),
            Some(TerminalCommand::Send) => Evaluation::display(Self::send(&args[1..])),
            Some(TerminalCommand::Update) => Evaluation::with_effect(
                CommandResult::success(format!("Update {} installed. ", self.os_version)),
                SideEffect::InstallUpdate,
            ),
            Some(TerminalCommand::Netstat) => Evaluation::display(self.netstat()),
            None => Evaluation::display(Self::unrecognized(line)),
        }
    }

    fn help(topic: Option<&str>) -> CommandResult {
        match topic {
            None => CommandResult::success(HELP_SUMMARY),
            Some(topic) => {
                match TerminalCommand::lookup(topic).and_then(TerminalCommand::help_line) {
                    Some(line) => CommandResult::success(line),
                    None => {
                        CommandResult::failure(format!("Help not found for command: {}", topic))
                    }
                }
            }
        }
    }

    fn remove(target: Option<&str>) -> Evaluation {
        match target {
            Some("user") => Evaluation::with_effect(
                CommandResult::success("User data removed."),
                SideEffect::RemoveUser,
            ),
            _ => Evaluation::display(CommandResult::failure(REMOVE_USAGE)),
        }
    }

    fn send(args: &[&str]) -> CommandResult {
        if args.is_empty() {
            CommandResult::failure(SEND_USAGE)
        } else {
            CommandResult::success(args.join(" "))
        }
    }

    fn netstat(&self) -> CommandResult {
        // One lock for a consistent latest + window snapshot.
        let window = lock_window(&self.telemetry);
        let history = window
            .snapshot()
            .iter()
            .map(|sample| sample.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        CommandResult::success(format!(
            "Internet consumption: {} KB\nHistory: {}",
            window.latest(),
            history
        ))
    }

    fn unrecognized(line: &str) -> CommandResult {
        CommandResult::failure(format!(
            "The term \"{}\" is not recognized as the name of a cmdlet, function, or operable program. Check the spelling of the name, or if a path was included, verify that the path is correct and try again. At line:1 char:1",
            line
        ))
    }
}
