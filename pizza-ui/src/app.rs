//! Line-oriented session that binds typed commands to the configurator.
//!
//! Each input line is one command. Names may contain spaces, so everything
//! after the keyword is taken verbatim (trimmed) as the argument.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use pizza_core::{OrderConfigurator, ToppingToggle};
use thiserror::Error;
use tracing::{debug, info};

use crate::logging;
use crate::render::Screen;

pub const HELP: &str = "\
Commands:
  pizza <name>     choose a pizza
  size <name>      choose a size
  topping <name>   add or remove a topping
  show             redraw the order
  log <filter>     change the log filter (e.g. debug)
  help             show this list
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pizza(String),
    Size(String),
    Topping(String),
    Show,
    Log(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs a name")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = rest.trim();

        let needs_arg = |name: &'static str, build: fn(String) -> Command| {
            if arg.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(build(arg.to_string()))
            }
        };

        match keyword.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "pizza" => needs_arg("pizza", Command::Pizza),
            "size" => needs_arg("size", Command::Size),
            "topping" => needs_arg("topping", Command::Topping),
            "log" => needs_arg("log", Command::Log),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Redraw,
    Stay,
    Stop,
}

/// Apply one command, writing any notes to `out`.
fn apply<W: Write>(
    configurator: &mut OrderConfigurator,
    command: Command,
    out: &mut W,
) -> Result<Flow> {
    let outcome = match command {
        Command::Pizza(name) => configurator.select_pizza(&name).map(|()| Flow::Redraw),
        Command::Size(name) => configurator.select_size(&name).map(|()| Flow::Redraw),
        Command::Topping(name) => configurator.toggle_topping(&name).map(|toggle| {
            let verb = match toggle {
                ToppingToggle::Added => "added",
                ToppingToggle::Removed => "removed",
            };
            debug!(topping = %name, verb, "topping toggled");
            Flow::Redraw
        }),
        Command::Show => Ok(Flow::Redraw),
        Command::Log(filter) => {
            match logging::set_log_level(&filter) {
                Ok(()) => writeln!(out, "Log filter set to '{filter}'.")?,
                Err(e) => writeln!(out, "Cannot change log filter: {e}")?,
            }
            return Ok(Flow::Stay);
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(Flow::Stay);
        }
        Command::Quit => return Ok(Flow::Stop),
    };

    match outcome {
        Ok(flow) => Ok(flow),
        Err(e) => {
            writeln!(out, "Ignored: {e}.")?;
            Ok(Flow::Stay)
        }
    }
}

/// Runs the order screen until `quit` or end of input.
///
/// The screen is drawn once at start and again after every applied action,
/// so the output always shows the latest state before the next line is read.
pub fn run_session<R: BufRead, W: Write>(
    configurator: &mut OrderConfigurator,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", Screen(configurator.view()))?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match apply(configurator, command, out)? {
            Flow::Redraw => writeln!(out, "{}", Screen(configurator.view()))?,
            Flow::Stay => {}
            Flow::Stop => break,
        }
        out.flush()?;
    }

    info!(total = %configurator.view().total, "order session ended");
    Ok(())
}
