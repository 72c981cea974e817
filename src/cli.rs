//! CLI interface for the notification playground.
//!
//! Every invocation is one session: a fresh log, one recipient, and empty
//! fields per action. One-shot commands send and print the log; `shell`
//! keeps the session open and reads intents line by line.

mod fields;
mod format;
mod shell;

use std::io::{self, Write};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::config::Config;
use crate::dispatch::{Dispatcher, DispatchError, HttpTransport, Transport};
use crate::model::{ActionFields, ActionKind};
use crate::session::Session;

use fields::FieldEdits;
use format::{format_endpoints, format_log};
use shell::{SHELL_HELP, readiness, run_shell};

/// Notification playground: trigger email templates and watch the traffic.
#[derive(Debug, Parser)]
#[command(name = "notify-playground", version, after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Recipient address. Falls back to `default-email` in the config.
    #[arg(long, global = true)]
    email: Option<String>,

    /// Base URL of the notification API. Overrides `base-url` in the config.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print log entries as JSON, one per line.
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Examples:
  notify-playground --email me@dev.io send new-arrival --book-name "Dune"
  notify-playground --email me@dev.io send return --sample --date 2026-12-01
  notify-playground --email me@dev.io send-all --sample
  notify-playground --email me@dev.io shell"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one notification, then print the log.
    Send {
        /// Which notification to send.
        #[arg(value_enum)]
        kind: KindArg,

        /// Fill the fields with sample data before applying any flags.
        #[arg(long)]
        sample: bool,

        #[command(flatten)]
        edits: FieldEdits,
    },

    /// Send all three notifications at once, then print the log.
    ///
    /// The calls overlap; each request still precedes its own response.
    SendAll {
        /// Fill every kind with sample data first.
        #[arg(long)]
        sample: bool,
    },

    /// Print a kind's sample field values as JSON. No network.
    Sample {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// List the endpoint each kind posts to.
    Endpoints,

    /// Keep a session open and read intents from stdin.
    Shell,
}

/// CLI-facing action kind, mapped to the domain `ActionKind`.
///
/// Accepts the wire path names as aliases.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// New book added to the catalogue.
    #[value(alias = "new-book")]
    NewArrival,
    /// Book due back soon.
    #[value(alias = "return")]
    ReturnReminder,
    /// Library event invitation.
    #[value(alias = "event")]
    EventInvitation,
}

impl KindArg {
    fn to_domain(self) -> ActionKind {
        match self {
            Self::NewArrival => ActionKind::NewArrival,
            Self::ReturnReminder => ActionKind::ReturnReminder,
            Self::EventInvitation => ActionKind::EventInvitation,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub async fn run(cli: Cli, config: &Config) -> Result<(), String> {
    let base_url = cli.base_url.unwrap_or_else(|| config.base_url.clone());
    let recipient = cli
        .email
        .or_else(|| config.default_email.clone())
        .unwrap_or_default();
    debug!(%base_url, "session started");

    let session = Session::new(recipient, Dispatcher::new(base_url, HttpTransport::new()));

    match cli.command {
        Command::Send {
            kind,
            sample,
            edits,
        } => cmd_send(session, kind.to_domain(), sample, edits, cli.json).await,
        Command::SendAll { sample } => cmd_send_all(session, sample, cli.json).await,
        Command::Sample { kind } => cmd_sample(kind.to_domain()),
        Command::Endpoints => {
            println!("{}", format_endpoints(session.dispatcher().base_url()));
            Ok(())
        }
        Command::Shell => cmd_shell(session, cli.json).await,
    }
}

async fn cmd_send<T: Transport>(
    mut session: Session<T>,
    kind: ActionKind,
    sample: bool,
    edits: FieldEdits,
    json: bool,
) -> Result<(), String> {
    if sample {
        session.fill_sample(kind);
    }
    edits.apply(session.fields_mut(kind))?;

    eprintln!("{}", readiness(&session));
    session.send(kind).await.map_err(|e| e.to_string())?;

    print_log(&session, json)
}

async fn cmd_send_all<T: Transport>(
    mut session: Session<T>,
    sample: bool,
    json: bool,
) -> Result<(), String> {
    if sample {
        for kind in ActionKind::ALL {
            session.fill_sample(kind);
        }
    }

    eprintln!("{}", readiness(&session));
    let (new_arrival, return_reminder, event_invitation) = tokio::join!(
        session.send(ActionKind::NewArrival),
        session.send(ActionKind::ReturnReminder),
        session.send(ActionKind::EventInvitation),
    );
    // A rejected recipient rejects all three identically.
    [new_arrival, return_reminder, event_invitation]
        .into_iter()
        .collect::<Result<(), DispatchError>>()
        .map_err(|e| e.to_string())?;

    print_log(&session, json)
}

fn cmd_sample(kind: ActionKind) -> Result<(), String> {
    let fields = ActionFields::sample(kind, jiff::Zoned::now().date());
    let json = serde_json::to_string_pretty(&fields)
        .map_err(|e| format!("failed to serialize sample: {e}"))?;
    println!("{json}");
    Ok(())
}

async fn cmd_shell(mut session: Session<HttpTransport>, json: bool) -> Result<(), String> {
    eprintln!("{SHELL_HELP}");
    eprintln!("{}", readiness(&session));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_shell(&mut session, stdin.lock(), &mut stdout, json).await?;
    stdout.flush().map_err(|e| format!("I/O error: {e}"))
}

fn print_log<T: Transport>(session: &Session<T>, json: bool) -> Result<(), String> {
    let log = session.log();
    if json {
        for entry in log.read() {
            let line = serde_json::to_string(entry)
                .map_err(|e| format!("failed to serialize log entry: {e}"))?;
            println!("{line}");
        }
    } else {
        println!("{}", format_log(log.read()));
    }
    Ok(())
}
