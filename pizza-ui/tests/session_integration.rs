//! Drives whole sessions through `run_session` with scripted input, the way
//! a user would type them.

use pizza_core::OrderConfigurator;
use pizza_ui::run_session;
use pretty_assertions::assert_eq;

fn run(script: &str) -> (OrderConfigurator, String) {
    let mut configurator = OrderConfigurator::default();
    let mut out = Vec::new();
    run_session(&mut configurator, script.as_bytes(), &mut out).expect("session should run");
    (configurator, String::from_utf8(out).expect("utf-8 output"))
}

/// The price line of the last screen drawn.
fn last_price(output: &str) -> &str {
    output
        .lines()
        .filter_map(|l| l.trim().strip_prefix("$ "))
        .last()
        .unwrap_or("")
}

#[test]
fn test_session_starts_with_zero_price() {
    let (_, output) = run("");

    assert_eq!(last_price(&output), "0.00");
    assert!(output.contains("Type 'help' for commands."));
}

#[test]
fn test_session_medium_pizza_with_avocado() {
    let (configurator, output) = run("pizza Pizza 1\nsize medium\ntopping Avocado\n");

    assert_eq!(last_price(&output), "10.50");
    assert_eq!(configurator.selection().size(), "Medium");
}

#[test]
fn test_session_default_size_two_toppings() {
    let (_, output) = run("pizza Pizza 2\ntopping Lobster\ntopping Bacon\n");

    assert_eq!(last_price(&output), "16.00");
}

#[test]
fn test_session_ignores_toppings_before_pizza() {
    let (configurator, output) = run("topping Ham\nsize Large\n");

    assert!(output.contains("Ignored: cannot toggle 'Ham' before a pizza is selected."));
    assert!(!output.contains("Toppings"));
    assert_eq!(last_price(&output), "0.00");
    assert_eq!(configurator.selection().size(), "Large");
}

#[test]
fn test_session_switching_pizza_resets_toppings() {
    let (configurator, output) = run("pizza Pizza 1\ntopping Avocado\npizza Pizza 3\ntopping Avocado\n");

    assert!(output.contains("Ignored: topping 'Avocado' is not available on 'Pizza 3'."));
    assert_eq!(configurator.selection().toppings().count(), 0);
    assert_eq!(last_price(&output), "13.00");
}

#[test]
fn test_session_unknown_command_keeps_going() {
    let (_, output) = run("bake it\npizza Pizza 3\n");

    assert!(output.contains("unknown command 'bake'"));
    assert_eq!(last_price(&output), "13.00");
}

#[test]
fn test_session_stops_at_quit() {
    let (configurator, _) = run("pizza Pizza 1\nquit\npizza Pizza 2\n");

    assert_eq!(configurator.selection().pizza(), Some("Pizza 1"));
}

#[test]
fn test_session_help_lists_commands() {
    let (_, output) = run("help\n");

    assert!(output.contains("topping <name>"));
}
