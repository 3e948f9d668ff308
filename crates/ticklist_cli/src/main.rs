//! Interactive command-line front end.
//!
//! # Responsibility
//! - Read commands from stdin, drive one core session per process run.
//! - Own all user-facing dialog: alerts, confirmation prompts, help.
//!
//! # Invariants
//! - Every mutation is followed by a reprint of the projected view.
//! - User errors never abort the loop; only startup failures exit non-zero.
//! - Row numbers refer to positions in the currently visible list.

use log::warn;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use ticklist_core::{
    default_log_level, init_logging, Filter, JsonFileStorage, SessionError, SnapshotStorage,
    TaskId, TaskListView, TaskSession, TaskValidationError,
};

const DEFAULT_SNAPSHOT_FILE: &str = "ticklist.json";
const EMPTY_TEXT_ALERT: &str = "Please enter a task!";
const USAGE: &str = "usage: ticklist [snapshot.json] [--log-dir <absolute dir>]";
const HELP_TEXT: &str = "\
commands:
  add <text>                   add a task
  toggle <row> | done <row>    flip completion of a visible row
  rm <row> | delete <row>      delete a visible row
  filter all|active|completed  switch the view
  clear                        remove completed tasks (asks first)
  list                         reprint the list
  quit                         exit";

struct CliOptions {
    snapshot_path: PathBuf,
    log_dir: Option<PathBuf>,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut snapshot_path: Option<PathBuf> = None;
        let mut log_dir: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            if arg == "--log-dir" {
                let value = args
                    .next()
                    .ok_or_else(|| "--log-dir requires a value".to_string())?;
                log_dir = Some(PathBuf::from(value));
            } else if arg.starts_with("--") {
                return Err(format!("unknown option `{arg}`"));
            } else if snapshot_path.is_some() {
                return Err("at most one snapshot path is accepted".to_string());
            } else {
                snapshot_path = Some(PathBuf::from(arg));
            }
        }

        Ok(Self {
            snapshot_path: snapshot_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE)),
            log_dir,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Filter(Filter),
    Clear,
    List,
    Help,
    Quit,
}

/// Parses one input line. `Ok(None)` means a blank line to ignore.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "add" => Ok(Some(Command::Add(rest.to_string()))),
        "toggle" | "done" => parse_row(rest, "usage: toggle <row>").map(|row| Some(Command::Toggle(row))),
        "rm" | "delete" => parse_row(rest, "usage: rm <row>").map(|row| Some(Command::Delete(row))),
        "filter" => Filter::parse(rest)
            .map(|filter| Some(Command::Filter(filter)))
            .ok_or_else(|| "usage: filter all|active|completed".to_string()),
        "clear" => Ok(Some(Command::Clear)),
        "list" => Ok(Some(Command::List)),
        "help" => Ok(Some(Command::Help)),
        "quit" | "exit" => Ok(Some(Command::Quit)),
        other => Err(format!("unknown command `{other}`; try `help`")),
    }
}

fn parse_row(value: &str, usage: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(usage.to_string()),
    }
}

/// Accepts `y`/`yes` (any case) as confirmation; anything else declines.
fn is_confirmation(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

/// Maps a 1-based visible row number to the underlying task id.
fn row_to_id(view: &TaskListView, row: usize) -> Option<TaskId> {
    view.rows.get(row.checked_sub(1)?).map(|task_row| task_row.id)
}

fn run<S, R, W>(mut session: TaskSession<S>, mut input: R, mut out: W) -> io::Result<()>
where
    S: SnapshotStorage,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "ticklist {} -- type `help` for commands",
        ticklist_core::core_version()
    )?;
    write!(out, "{}", session.view().render_text())?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::List => write!(out, "{}", session.view().render_text())?,
            Command::Filter(filter) => {
                session.set_filter(filter);
                write!(out, "{}", session.view().render_text())?;
            }
            Command::Add(text) => match session.add(&text) {
                Ok(_) => write!(out, "{}", session.view().render_text())?,
                Err(SessionError::Validation(TaskValidationError::EmptyText)) => {
                    writeln!(out, "{EMPTY_TEXT_ALERT}")?;
                }
                // The list already mutated even when the save failed, so the
                // view must be reprinted to keep row numbers honest.
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    write!(out, "{}", session.view().render_text())?;
                }
            },
            Command::Toggle(row) => {
                let id = row_to_id(&session.view(), row);
                match id {
                    Some(id) => match session.toggle(id) {
                        Ok(_) => write!(out, "{}", session.view().render_text())?,
                        Err(err) => {
                            writeln!(out, "error: {err}")?;
                            write!(out, "{}", session.view().render_text())?;
                        }
                    },
                    None => writeln!(out, "no task at row {row}")?,
                }
            }
            Command::Delete(row) => {
                let id = row_to_id(&session.view(), row);
                match id {
                    Some(id) => match session.delete(id) {
                        Ok(_) => write!(out, "{}", session.view().render_text())?,
                        Err(err) => {
                            writeln!(out, "error: {err}")?;
                            write!(out, "{}", session.view().render_text())?;
                        }
                    },
                    None => writeln!(out, "no task at row {row}")?,
                }
            }
            Command::Clear => {
                if session.store().completed_count() == 0 {
                    writeln!(out, "No completed tasks to clear.")?;
                    continue;
                }
                write!(out, "Delete all completed tasks? [y/N] ")?;
                out.flush()?;
                line.clear();
                if input.read_line(&mut line)? == 0 {
                    break;
                }
                if !is_confirmation(&line) {
                    writeln!(out, "Nothing cleared.")?;
                    continue;
                }
                match session.clear_completed() {
                    Ok(cleared) => {
                        let plural = if cleared == 1 { "" } else { "s" };
                        writeln!(out, "Cleared {cleared} task{plural}.")?;
                        write!(out, "{}", session.view().render_text())?;
                    }
                    Err(err) => {
                        writeln!(out, "error: {err}")?;
                        write!(out, "{}", session.view().render_text())?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    // Logging is best-effort; a session without logs still runs.
    let log_dir = options
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("ticklist-logs"));
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let storage = JsonFileStorage::new(&options.snapshot_path);
    let session = match TaskSession::open(storage) {
        Ok(session) => session,
        Err(err) => {
            eprintln!(
                "failed to load tasks from `{}`: {err}",
                options.snapshot_path.display()
            );
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(session, stdin.lock(), stdout.lock()) {
        warn!("event=cli_io module=cli status=error error={err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
