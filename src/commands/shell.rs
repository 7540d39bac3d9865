//! Interactive session that keeps in-memory state (tasks) between commands.

use std::io::{BufRead, ErrorKind, IsTerminal};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colgit_core::session::Session;
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::{ActionCommand, TaskCommand};
use crate::render::render_outcome;

/// Line that ends a multi-line note typed into a piped shell.
const NOTE_TERMINATOR: &str = ".";

#[derive(Parser)]
#[command(name = "colgit", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

impl ShellLine {
    /// Split with shell quoting rules so `branch "my feature"` is one name.
    fn from_line(line: &str) -> Result<Self> {
        let words = shell_words::split(line).context("Unbalanced quotes")?;
        Ok(Self::try_parse_from(words)?)
    }
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Action(ActionCommand),
    /// Manage this session's tasks
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
    /// Show a theme palette
    Theme { name: Option<String> },
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

enum Flow {
    Continue,
    Exit,
}

enum LineSource {
    Prompt,
    Piped(Box<dyn Iterator<Item = std::io::Result<String>>>),
}

impl LineSource {
    fn detect() -> Self {
        if std::io::stdin().is_terminal() {
            LineSource::Prompt
        } else {
            LineSource::Piped(Box::new(std::io::stdin().lock().lines()))
        }
    }

    /// Next input line, or None at end of input.
    fn next_line(&mut self) -> Result<Option<String>> {
        match self {
            LineSource::Prompt => prompt("colgit"),
            LineSource::Piped(lines) => Ok(lines.next().transpose()?),
        }
    }

    /// Note text for `note save` without inline text. Piped input reads
    /// following lines up to a lone "." (or end of input).
    fn read_note_body(&mut self) -> Result<String> {
        match self {
            LineSource::Prompt => Ok(prompt("  Note")?.unwrap_or_default()),
            LineSource::Piped(lines) => {
                let mut body = Vec::new();
                for line in lines {
                    let line = line?;
                    if line.trim_end() == NOTE_TERMINATOR {
                        break;
                    }
                    body.push(line);
                }
                Ok(body.join("\n"))
            }
        }
    }
}

/// Ask for one line on the terminal. A closed terminal or Ctrl-C yields None.
fn prompt(label: &str) -> Result<Option<String>> {
    let line = Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text();

    match line {
        Ok(line) => Ok(Some(line)),
        Err(e) if ends_input(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn ends_input(err: &dialoguer::Error) -> bool {
    let dialoguer::Error::IO(e) = err;
    matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted)
}

pub fn run(session: &mut Session) -> Result<()> {
    let source = LineSource::detect();
    if matches!(source, LineSource::Prompt) {
        println!(
            "{} {}",
            session.text("title").bold(),
            "(type `help` for commands, `exit` to leave)".dimmed()
        );
    }

    run_lines(session, source)
}

fn run_lines(session: &mut Session, mut source: LineSource) -> Result<()> {
    while let Some(line) = source.next_line()? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = match ShellLine::from_line(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Covers `help` too, which clap reports as an "error".
                if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                    clap_err.print().ok();
                } else {
                    println!("{}", e.to_string().red());
                }
                continue;
            }
        };

        match execute(session, parsed.command, &mut source) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => println!("{} {}", session.text("error").red().bold(), e.to_string().red()),
        }
    }

    Ok(())
}

fn execute(session: &mut Session, command: ShellCommand, source: &mut LineSource) -> Result<Flow> {
    let action = match command {
        ShellCommand::Exit => return Ok(Flow::Exit),
        ShellCommand::Theme { name } => {
            super::theme::run(session.config(), name.as_deref())?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Task { command } => command.into_action(),
        ShellCommand::Action(command) => command.into_action(|| source.read_note_body())?,
    };

    let outcome = session.dispatch(action)?;
    println!("{}", render_outcome(&outcome, session.config()));
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colgit_core::paths::Paths;
    use colgit_core::session::{Action, Outcome};
    use tempfile::TempDir;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::from_line(line).unwrap().command
    }

    fn piped(lines: &[&str]) -> LineSource {
        let lines: Vec<std::io::Result<String>> = lines.iter().map(|l| Ok(l.to_string())).collect();
        LineSource::Piped(Box::new(lines.into_iter()))
    }

    fn open(dir: &TempDir) -> Session {
        Session::open(Paths::from_home(dir.path())).unwrap()
    }

    #[test]
    fn parses_task_add_with_spaces() {
        let ShellCommand::Task { command } = parse("task add buy oat milk") else {
            panic!("expected task command");
        };
        assert_eq!(command.into_action(), Action::AddTask("buy oat milk".into()));
    }

    #[test]
    fn parses_flattened_actions() {
        assert!(matches!(parse("commit"), ShellCommand::Action(ActionCommand::Commit)));
        assert!(matches!(
            parse("branch feature"),
            ShellCommand::Action(ActionCommand::Branch { .. })
        ));
        assert!(matches!(parse("quit"), ShellCommand::Exit));
    }

    #[test]
    fn quoted_branch_name_is_one_argument() {
        let ShellCommand::Action(ActionCommand::Branch { name }) = parse(r#"branch "my feature""#)
        else {
            panic!("expected branch command");
        };
        assert_eq!(name, "my feature");
    }

    #[test]
    fn quoted_note_text_keeps_spacing() {
        let ShellCommand::Action(command) = parse(r#"note save -d 2025-03-20 "two  spaces""#) else {
            panic!("expected note command");
        };
        assert_eq!(
            command.into_action(|| anyhow::bail!("text was given")).unwrap(),
            Action::SaveNote {
                date: "2025-03-20".into(),
                content: "two  spaces".into()
            }
        );
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(ShellLine::from_line("frobnicate").is_err());
        assert!(ShellLine::from_line("task add").is_err());
        assert!(ShellLine::from_line(r#"branch "unterminated"#).is_err());
    }

    #[test]
    fn tasks_accumulate_across_lines() {
        let dir = TempDir::new().unwrap();
        let mut session = open(&dir);

        run_lines(&mut session, piped(&["task add write report", "task add call bank"])).unwrap();

        assert_eq!(
            session.dispatch(Action::ListTasks).unwrap(),
            Outcome::Tasks(vec!["write report".into(), "call bank".into()])
        );
    }

    #[test]
    fn note_without_text_reads_following_lines() {
        let dir = TempDir::new().unwrap();
        let mut session = open(&dir);

        run_lines(
            &mut session,
            piped(&["note save -d 2025-01-01", "first", "  second", ".", "task add x"]),
        )
        .unwrap();

        assert_eq!(
            session.dispatch(Action::LoadNote("2025-01-01".into())).unwrap(),
            Outcome::Note {
                date: "2025-01-01".into(),
                content: "first\n  second".into()
            }
        );
        assert_eq!(
            session.dispatch(Action::ListTasks).unwrap(),
            Outcome::Tasks(vec!["x".into()])
        );
    }

    #[test]
    fn note_body_ends_at_end_of_input() {
        let dir = TempDir::new().unwrap();
        let mut session = open(&dir);

        run_lines(&mut session, piped(&["note save -d 2025-01-02", "only line"])).unwrap();

        assert_eq!(
            session.dispatch(Action::LoadNote("2025-01-02".into())).unwrap(),
            Outcome::Note {
                date: "2025-01-02".into(),
                content: "only line".into()
            }
        );
    }

    #[test]
    fn only_eof_and_interrupt_end_the_prompt() {
        let io = |kind| dialoguer::Error::IO(std::io::Error::from(kind));
        assert!(ends_input(&io(ErrorKind::UnexpectedEof)));
        assert!(ends_input(&io(ErrorKind::Interrupted)));
        assert!(!ends_input(&io(ErrorKind::PermissionDenied)));
        assert!(!ends_input(&io(ErrorKind::BrokenPipe)));
    }

    #[test]
    fn exit_stops_the_loop() {
        let dir = TempDir::new().unwrap();
        let mut session = open(&dir);

        run_lines(&mut session, piped(&["exit", "task add never"])).unwrap();
        assert!(session.tasks().is_empty());
    }
}
