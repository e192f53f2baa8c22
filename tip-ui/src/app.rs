//! Line-driven form session.
//!
//! Each input line is one user action. Actions are handled to completion,
//! in order, against a single [`FormState`] owned by the session.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use anyhow::{Context, Result};
use thiserror::Error;
use tip_core::{FormField, FormState, ServiceRating};
use tracing::{debug, warn};

use crate::{config::AppConfig, views};

pub const HELP: &str = "\
Commands:
  bill <amount>        set the bill amount
  people <count>       set how many people share the bill
  tip <percent>        set the tip percentage
  rate <rating>        pick a tip by service rating (see `ratings`)
  calc                 calculate the split
  reset                clear the form
  show                 show the form
  ratings              list service ratings
  help                 show this help
  quit                 leave
";

/// Errors for lines that do not map to an action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type `help` for a list)")]
    Unknown(String),

    #[error("`{0}` needs a value")]
    MissingValue(&'static str),

    #[error("unknown service rating '{0}' (type `ratings` for a list)")]
    UnknownRating(String),
}

/// One user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Rate(ServiceRating),
    Calculate,
    Reset,
    Show,
    Ratings,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        if let Some(field) = FormField::parse(word) {
            // An empty value clears the field.
            return Ok(Self::Set(field, rest.to_string()));
        }

        match word.to_ascii_lowercase().as_str() {
            "rate" if rest.is_empty() => Err(CommandError::MissingValue("rate")),
            "rate" => ServiceRating::parse(rest)
                .map(Self::Rate)
                .ok_or_else(|| CommandError::UnknownRating(rest.to_string())),
            "calc" | "calculate" => Ok(Self::Calculate),
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "ratings" => Ok(Self::Ratings),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// What the session loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A tip form plus the settings it is displayed with.
#[derive(Debug, Clone)]
pub struct Session {
    form: FormState,
    currency_code: String,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            form: FormState::new(config.validator()),
            currency_code: config.currency_code.clone(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Applies one action and returns the text to show for it.
    pub fn execute(
        &mut self,
        command: Command,
    ) -> (Flow, String) {
        debug!(?command, "executing");
        let text = match command {
            Command::Set(field, value) => {
                self.form.on_field_change(field, value);
                String::new()
            }
            Command::Rate(rating) => {
                self.form.on_quick_pick(rating);
                format!("Tip set to {}% ({}).\n", rating.percent(), rating.label())
            }
            Command::Calculate => match self.form.on_calculate() {
                Ok(result) => views::render_result(&result, &self.currency_code),
                Err(error) => format!("{}\n", views::render_error(&error)),
            },
            Command::Reset => {
                self.form.on_reset();
                "Form cleared.\n".to_string()
            }
            Command::Show => views::render_form(&self.form, &self.currency_code),
            Command::Ratings => views::render_ratings(),
            Command::Help => HELP.to_string(),
            Command::Quit => return (Flow::Quit, String::new()),
        };
        (Flow::Continue, text)
    }

    /// Parses and applies one input line.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> (Flow, String) {
        if line.trim().is_empty() {
            return (Flow::Continue, String::new());
        }
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(error) => {
                warn!(%error, "rejected input line");
                (Flow::Continue, format!("{error}\n"))
            }
        }
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// A prompt is written before each line when `prompt` is set.
    pub fn run<R, W>(
        &mut self,
        input: R,
        mut output: W,
        prompt: Option<&str>,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        write!(output, "{}", views::render_form(&self.form, &self.currency_code))?;
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                write!(output, "{prompt}")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = match line {
                Ok(line) => line,
                Err(error) if error.kind() == io::ErrorKind::InvalidData => {
                    warn!(%error, "skipped unreadable input line");
                    writeln!(output, "input line is not valid UTF-8")?;
                    continue;
                }
                Err(error) => return Err(error).context("failed to read input"),
            };
            let (flow, text) = self.handle_line(&line);
            write!(output, "{text}")?;
            if flow == Flow::Quit {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn session() -> Session {
        Session::new(&AppConfig::default())
    }

    // =========================================================================
    // command parsing
    // =========================================================================

    #[test]
    fn parses_field_commands() {
        assert_eq!(
            "bill 1,200.50".parse::<Command>(),
            Ok(Command::Set(FormField::BillAmount, "1,200.50".to_string()))
        );
        assert_eq!(
            "  party   4 ".parse::<Command>(),
            Ok(Command::Set(FormField::PartySize, "4".to_string()))
        );
        assert_eq!(
            "tip".parse::<Command>(),
            Ok(Command::Set(FormField::TipPercent, String::new()))
        );
    }

    #[test]
    fn parses_rate_by_name_or_percent() {
        assert_eq!("rate good".parse::<Command>(), Ok(Command::Rate(ServiceRating::Good)));
        assert_eq!("RATE 5".parse::<Command>(), Ok(Command::Rate(ServiceRating::Terrible)));
        assert_eq!(
            "rate".parse::<Command>(),
            Err(CommandError::MissingValue("rate"))
        );
        assert_eq!(
            "rate superb".parse::<Command>(),
            Err(CommandError::UnknownRating("superb".to_string()))
        );
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!("calc".parse::<Command>(), Ok(Command::Calculate));
        assert_eq!("Reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(
            "split".parse::<Command>(),
            Err(CommandError::Unknown("split".to_string()))
        );
    }

    // =========================================================================
    // execution
    // =========================================================================

    #[test]
    fn calculate_renders_result() {
        let mut session = session();
        session.handle_line("bill 100");
        session.handle_line("people 4");
        session.handle_line("tip 20");

        let (flow, text) = session.handle_line("calc");

        assert_eq!(flow, Flow::Continue);
        assert!(text.contains("$5.00 each"));
        assert_eq!(
            session.form().result().map(|r| r.total_per_person),
            Some(dec!(30))
        );
    }

    #[test]
    fn calculate_reports_first_invalid_field() {
        let mut session = session();
        session.handle_line("bill 0");
        session.handle_line("people 2");
        session.handle_line("rate ok");

        let (_, text) = session.handle_line("calc");

        assert!(text.starts_with("! Bill amount: "));
        assert!(!session.form().has_result());
    }

    #[test]
    fn unknown_command_keeps_session_running() {
        let mut session = session();

        let (flow, text) = session.handle_line("launch");

        assert_eq!(flow, Flow::Continue);
        assert_eq!(text, "unknown command 'launch' (type `help` for a list)\n");
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = session();
        let mut out = Vec::new();

        session
            .run("bill 10\nquit\nbill 20\n".as_bytes(), &mut out, None)
            .unwrap();

        assert_eq!(session.form().input().bill_amount, "10");
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_skipped() {
        let mut session = session();
        let mut out = Vec::new();

        session
            .run(&b"bill 10\n\xff\xfe\npeople 2\n"[..], &mut out, None)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("input line is not valid UTF-8\n"));
        assert_eq!(session.form().input().bill_amount, "10");
        assert_eq!(session.form().input().party_size, "2");
    }

    #[test]
    fn run_writes_prompts() {
        let mut session = session();
        let mut out = Vec::new();

        session.run("help\n".as_bytes(), &mut out, Some("> ")).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("> Commands:"));
        assert!(text.ends_with("> "));
    }

    #[test]
    fn uses_configured_currency_and_tip_ceiling() {
        let config = AppConfig {
            currency_code: "EUR".to_string(),
            max_tip_percent: dec!(25),
        };
        let mut session = Session::new(&config);
        session.handle_line("bill 40");
        session.handle_line("people 2");

        session.handle_line("rate outstanding");
        let (_, rejected) = session.handle_line("calc");
        session.handle_line("rate good");
        let (_, accepted) = session.handle_line("calc");

        assert!(rejected.contains("at most 25"));
        assert!(accepted.contains("€4.00 each"));
    }
}
