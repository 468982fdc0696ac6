//! Property-based tests for command dispatch

use deskterm::config::TerminalConfig;
use deskterm::interpreter::{CommandInterpreter, TerminalCommand, HELP_SUMMARY};
use deskterm::telemetry::shared_window;
use proptest::prelude::*;

fn interpreter() -> CommandInterpreter {
    CommandInterpreter::new(&TerminalConfig::default(), shared_window(10))
}

proptest! {
    #[test]
    fn test_evaluate_never_panics(line in "\\PC*") {
        let _ = interpreter().evaluate(&line);
        // Every input yields a result, never a panic
    }

    #[test]
    fn test_unknown_commands_echo_the_name(name in "[a-z]{3,12}") {
        prop_assume!(TerminalCommand::lookup(&name).is_none());
        let eval = interpreter().evaluate(&name);
        prop_assert!(eval.result.is_failure());
        let quoted_name = format!("\"{}\"", name);
        prop_assert!(eval.result.text().contains(&quoted_name));
        prop_assert!(eval.effect.is_none());
    }

    #[test]
    fn test_send_joins_arguments_with_single_spaces(
        args in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..6),
    ) {
        let line = format!("send {}", args.join(" "));
        let eval = interpreter().evaluate(&line);
        prop_assert!(eval.result.is_success());
        prop_assert_eq!(eval.result.text(), args.join(" "));
    }

    #[test]
    fn test_send_ignores_extra_whitespace(
        args in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..4),
        gap in "[ \\t]{1,4}",
    ) {
        let line = format!("send{}{}", gap, args.join(&gap));
        let eval = interpreter().evaluate(&line);
        prop_assert!(eval.result.is_success());
        prop_assert_eq!(eval.result.text(), args.join(" "));
    }

    #[test]
    fn test_help_summary_independent_of_prior_evaluations(
        lines in prop::collection::vec("[a-z ]{0,20}", 0..10),
    ) {
        let interpreter = interpreter();
        for line in &lines {
            let _ = interpreter.evaluate(line);
        }
        let eval = interpreter.evaluate("help");
        prop_assert!(eval.result.is_success());
        prop_assert_eq!(eval.result.text(), HELP_SUMMARY);
    }

    #[test]
    fn test_every_evaluation_is_success_or_failure(line in "[a-z0-9 ]{0,30}") {
        let eval = interpreter().evaluate(&line);
        // Tagged union: exactly one of the two kinds
        prop_assert!(eval.result.is_success() ^ eval.result.is_failure());
    }
}
