//! Text menu: read one selector per line and dispatch to a mode
//!
//! `1`, `2`, `3` run a mode, `0` quits, anything else re-prompts.
//! Generic over input, output and the `ModeRunner` so it can be driven
//! from memory in tests.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::simulation::scenario::Mode;

pub const PROMPT: &str = "Select a mode: ";
pub const INVALID_INPUT: &str = "Invalid input, please choose again.";
pub const FAREWELL: &str = "Exited.";

/// Something that can run a selected mode
pub trait ModeRunner {
    fn run(&mut self, mode: Mode) -> Result<()>;
}

/// How the menu loop terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Quit,       // user entered `0`
    EndOfInput, // input closed
}

/// One parsed menu line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run(Mode),
    Quit,
    Invalid,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "0" => Command::Quit,
        token => Mode::ALL
            .into_iter()
            .find(|m| m.selector() == token)
            .map_or(Command::Invalid, Command::Run),
    }
}

/// Write the banner listing the modes
pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    let rule = "=============================================";
    writeln!(out, "{rule}")?;
    writeln!(out, "         Black Hole Gravity Simulator")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Choose a simulation mode:")?;
    writeln!(out)?;
    for mode in Mode::ALL {
        writeln!(out, "  {}  {}", mode.selector(), mode.label())?;
    }
    writeln!(out, "  0  Quit")?;
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Run the menu loop until `0` or end of input
///
/// Errors from the runner end the loop and are returned to the caller.
pub fn run_menu<R, W, M>(mut input: R, mut out: W, runner: &mut M) -> Result<MenuExit>
where
    R: BufRead,
    W: Write,
    M: ModeRunner + ?Sized,
{
    write_banner(&mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(MenuExit::EndOfInput);
        }

        match parse_command(&line) {
            Command::Run(mode) => {
                debug!(mode = %mode, "menu selection");
                runner.run(mode)?;
            }
            Command::Quit => {
                writeln!(out, "{FAREWELL}")?;
                return Ok(MenuExit::Quit);
            }
            Command::Invalid => writeln!(out, "{INVALID_INPUT}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selectors() {
        assert_eq!(parse_command("1\n"), Command::Run(Mode::NewtonianStatic));
        assert_eq!(parse_command(" 2 "), Command::Run(Mode::NewtonianAnimated));
        assert_eq!(parse_command("3\r\n"), Command::Run(Mode::Relativistic));
        assert_eq!(parse_command("0"), Command::Quit);
    }

    #[test]
    fn names_are_not_menu_selectors() {
        // the menu only takes the numeric tokens
        assert_eq!(parse_command("static"), Command::Invalid);
        assert_eq!(parse_command(""), Command::Invalid);
        assert_eq!(parse_command("12"), Command::Invalid);
    }
}
