//! Unit tests for command dispatch
//!
//! These tests pin the dispatch table and the exact diagnostic strings the
//! interpreter emits, since the rendering layer shows them verbatim.

use deskterm::config::TerminalConfig;
use deskterm::interpreter::{CommandInterpreter, SideEffect, HELP_SUMMARY};
use deskterm::models::CommandResult;
use deskterm::telemetry::{lock_window, shared_window, SharedTelemetry};

fn interpreter_with(telemetry: SharedTelemetry) -> CommandInterpreter {
    CommandInterpreter::new(&TerminalConfig::default(), telemetry)
}

fn interpreter() -> CommandInterpreter {
    interpreter_with(shared_window(10))
}

#[test]
fn test_version_string_is_literal() {
    let eval = interpreter().evaluate("version");
    assert_eq!(
        eval.result,
        CommandResult::success("Version of terminal - 2.011.16-Stable")
    );
}

#[test]
fn test_help_summary_lists_all_commands() {
    let eval = interpreter().evaluate("help");
    assert_eq!(
        eval.result.text(),
        "Available commands: help [args...], clear, logout, remove [args...], send [args...], version, update, netstat"
    );
    assert_eq!(eval.result.text(), HELP_SUMMARY);
}

#[test]
fn test_help_topics_are_fixed() {
    let cases = [
        ("help send", "send [args..] - display text"),
        ("help clear", "clear - clear console"),
        ("help logout", "logout - logout from account"),
        ("help remove", "remove [args..] - user"),
        ("help version", "version - display current version of terminal"),
        ("help update", "update - system update"),
        ("help netstat", "netstat - display internet consumption"),
    ];
    for (line, expected) in cases {
        let eval = interpreter().evaluate(line);
        assert_eq!(eval.result, CommandResult::success(expected), "{}", line);
    }
}

#[test]
fn test_help_unknown_topic_echoes_topic() {
    let eval = interpreter().evaluate("help telnet");
    assert_eq!(
        eval.result,
        CommandResult::failure("Help not found for command: telnet")
    );
}

#[test]
fn test_send_failure_diagnostic_is_verbatim() {
    let eval = interpreter().evaluate("send");
    assert_eq!(
        eval.result,
        CommandResult::failure(
            "cmdlet Write-Output at command pipeline position 1\nSupply values for the following parameters:\nargs[1]:"
        )
    );
}

#[test]
fn test_remove_failure_diagnostic_is_verbatim() {
    let eval = interpreter().evaluate("remove something");
    assert_eq!(
        eval.result,
        CommandResult::failure(
            "cmdlet remove at command pipeline position 1 Supply values for the following parameters: InputObject[1]:"
        )
    );
    assert_eq!(eval.effect, None);
}

#[test]
fn test_unknown_command_diagnostic_is_verbatim() {
    let eval = interpreter().evaluate("dir");
    assert_eq!(
        eval.result,
        CommandResult::failure(
            "The term \"dir\" is not recognized as the name of a cmdlet, function, or operable program. Check the spelling of the name, or if a path was included, verify that the path is correct and try again. At line:1 char:1"
        )
    );
}

#[test]
fn test_update_message_embeds_marker() {
    let eval = interpreter().evaluate("update");
    assert_eq!(
        eval.result,
        CommandResult::success("Update 2.012.4-Stable installed. ")
    );
    assert_eq!(eval.effect, Some(SideEffect::InstallUpdate));
}

#[test]
fn test_netstat_joins_window_with_commas() {
    let telemetry = shared_window(10);
    {
        let mut window = lock_window(&telemetry);
        for sample in [1.0, 2.0, 3.5] {
            window.push(sample);
        }
    }
    let eval = interpreter_with(telemetry).evaluate("netstat");
    assert_eq!(
        eval.result,
        CommandResult::success("Internet consumption: 3.5 KB\nHistory: 1, 2, 3.5")
    );
}

#[test]
fn test_custom_version_strings_flow_through() {
    let config = TerminalConfig {
        version: "9.0.0-Test".to_string(),
        os_version: "9.0.1-Test".to_string(),
    };
    let interpreter = CommandInterpreter::new(&config, shared_window(10));

    assert_eq!(
        interpreter.evaluate("version").result,
        CommandResult::success("Version of terminal - 9.0.0-Test")
    );
    assert_eq!(
        interpreter.evaluate("update").result,
        CommandResult::success("Update 9.0.1-Test installed. ")
    );
}

#[test]
fn test_extra_arguments_to_simple_commands_are_ignored() {
    // The table dispatches on the first token only.
    let eval = interpreter().evaluate("version --verbose");
    assert!(eval.result.is_success());

    let eval = interpreter().evaluate("clear everything");
    assert_eq!(eval.effect, Some(SideEffect::ClearHistory));
}

#[test]
fn test_leading_whitespace_does_not_change_dispatch() {
    let eval = interpreter().evaluate("  version");
    assert_eq!(
        eval.result,
        CommandResult::success("Version of terminal - 2.011.16-Stable")
    );
}
