//! Line commands typed at the terminal.

use std::time::Duration;

use domain::Field;
use signup_form::FormEvent;

/// Usage shown by `help`
pub const HELP: &str = "\
Commands:
  email <text>      set the email field
  password <text>   set the password field
  toggle            show or hide the password
  submit            submit the form
  wait <ms>         pause before reading the next command
  help              show this message
  quit              close the form";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(FormEvent),
    Wait(Duration),
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line; blank lines yield `None`.
///
/// Field text is taken verbatim after the first space, so interior and
/// trailing spaces reach the validators untouched.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let command = match verb {
        "email" => Command::Event(FormEvent::input(Field::Email, rest)),
        "password" => Command::Event(FormEvent::input(Field::Password, rest)),
        "toggle" | "show" | "hide" => Command::Event(FormEvent::TogglePasswordVisibility),
        "submit" => Command::Event(FormEvent::Submit),
        "wait" => match rest.trim().parse::<u64>() {
            Ok(ms) => Command::Wait(Duration::from_millis(ms)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}
