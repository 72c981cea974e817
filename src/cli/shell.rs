//! Interactive session: one line per intent, one log for the whole run.

use std::io::{BufRead, Write};

use clap::ValueEnum;

use crate::dispatch::Transport;
use crate::model::ActionKind;
use crate::session::Session;

use super::KindArg;
use super::fields::set_field;
use super::format::{format_entry, format_log};

pub(super) const SHELL_HELP: &str = "\
commands:
  email <address>               set the recipient
  set <kind> <field> <value>    edit one field (value is taken verbatim)
  fill <kind>                   overwrite a kind's fields with sample data
  show <kind>                   print a kind's current fields
  send <kind>                   send one notification
  status                        recipient readiness and per-kind state
  log                           print the whole log
  clear                         empty the log
  help                          this text
  quit                          leave
kinds: new-arrival (new-book), return-reminder (return), event-invitation (event)";

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Email(String),
    Set {
        kind: ActionKind,
        field: String,
        value: String,
    },
    Fill(ActionKind),
    Show(ActionKind),
    Send(ActionKind),
    Status,
    Log,
    Clear,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
pub(super) fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word {
        "email" => ShellCommand::Email(rest.to_string()),
        "set" => {
            let (kind, rest) = split_word(rest.trim_start());
            let (field, value) = split_word(rest.trim_start());
            if field.is_empty() {
                return Err("usage: set <kind> <field> <value>".to_string());
            }
            ShellCommand::Set {
                kind: parse_kind(kind)?,
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "fill" => ShellCommand::Fill(parse_kind(rest.trim())?),
        "show" => ShellCommand::Show(parse_kind(rest.trim())?),
        "send" => ShellCommand::Send(parse_kind(rest.trim())?),
        "status" => ShellCommand::Status,
        "log" => ShellCommand::Log,
        "clear" => ShellCommand::Clear,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

/// Splits off the first word; the remainder loses exactly one separating space.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (s.trim_end(), ""),
    }
}

fn parse_kind(s: &str) -> Result<ActionKind, String> {
    if s.is_empty() {
        return Err("missing <kind>".to_string());
    }
    KindArg::from_str(s, true)
        .map(KindArg::to_domain)
        .map_err(|_| format!("unknown kind '{s}'"))
}

/// Reads intents from `input` until EOF or `quit`, writing results to `out`.
pub(super) async fn run_shell<T: Transport>(
    session: &mut Session<T>,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<(), String> {
    let io_err = |e: std::io::Error| format!("I/O error: {e}");

    for line in input.lines() {
        let line = line.map_err(io_err)?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}").map_err(io_err)?;
                continue;
            }
        };

        match command {
            ShellCommand::Email(address) => {
                session.set_recipient(address);
                writeln!(out, "{}", readiness(session)).map_err(io_err)?;
            }
            ShellCommand::Set { kind, field, value } => {
                if let Err(e) = set_field(session.fields_mut(kind), &field, value) {
                    writeln!(out, "error: {e}").map_err(io_err)?;
                }
            }
            ShellCommand::Fill(kind) => {
                session.fill_sample(kind);
                write_fields(out, session, kind)?;
            }
            ShellCommand::Show(kind) => write_fields(out, session, kind)?,
            ShellCommand::Send(kind) => {
                let before = session.log().len();
                if let Err(e) = session.send(kind).await {
                    writeln!(out, "error: {e}").map_err(io_err)?;
                    continue;
                }
                let log = session.log();
                for entry in &log.read()[before..] {
                    let text = if json {
                        serde_json::to_string(entry).map_err(|e| e.to_string())?
                    } else {
                        format_entry(entry)
                    };
                    writeln!(out, "{text}").map_err(io_err)?;
                }
            }
            ShellCommand::Status => {
                writeln!(out, "{}", readiness(session)).map_err(io_err)?;
                for kind in ActionKind::ALL {
                    let phase = if session.is_sending(kind) { "sending" } else { "idle" };
                    writeln!(out, "  {:<9} {phase}", kind.path()).map_err(io_err)?;
                }
            }
            ShellCommand::Log => {
                writeln!(out, "{}", format_log(session.log().read())).map_err(io_err)?;
            }
            ShellCommand::Clear => {
                let message = if session.log().is_empty() {
                    "log already empty"
                } else {
                    session.clear_log();
                    "log cleared"
                };
                writeln!(out, "{message}").map_err(io_err)?;
            }
            ShellCommand::Help => writeln!(out, "{SHELL_HELP}").map_err(io_err)?,
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}

/// The recipient line: the address and whether a send would be accepted.
pub(super) fn readiness<T: Transport>(session: &Session<T>) -> String {
    let badge = if session.is_ready() {
        "Ready to send"
    } else {
        "Email required"
    };
    format!("recipient: {:?} ({badge})", session.recipient())
}

fn write_fields<T: Transport>(
    out: &mut impl Write,
    session: &Session<T>,
    kind: ActionKind,
) -> Result<(), String> {
    let json = serde_json::to_string_pretty(session.fields(kind))
        .map_err(|e| format!("failed to serialize fields: {e}"))?;
    writeln!(out, "{json}").map_err(|e| format!("I/O error: {e}"))
}
