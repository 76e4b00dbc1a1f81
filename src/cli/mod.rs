//! Interactive assistant over a contact directory.
//!
//! Reads one command per line, applies it to the directory it owns and
//! writes the reply. Failures are reported as replies; only I/O errors end
//! the loop early.

pub mod commands;
pub mod parser;

pub use commands::{Command, Reply, HELP_TEXT};
pub use parser::{parse_input, ParsedInput};

use crate::config::Config;
use crate::directory::Directory;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The command loop and the directory it manages.
pub struct Assistant {
    directory: Directory,
    config: Config,
    clock: fn() -> NaiveDate,
}

impl Assistant {
    /// Create an assistant with an empty directory.
    pub fn new(config: Config) -> Self {
        Self::with_directory(config, Directory::new())
    }

    /// Create an assistant managing an existing directory.
    pub fn with_directory(config: Config, directory: Directory) -> Self {
        Self {
            directory,
            config,
            clock: local_today,
        }
    }

    /// Replace the source of "today" used by the `birthdays` command.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn into_directory(self) -> Directory {
        self.directory
    }

    /// Handle one input line and produce the reply for it.
    pub fn handle(&mut self, line: &str) -> Reply {
        let result = parse_input(line)
            .and_then(Command::try_from)
            .and_then(|command| {
                debug!(?command, "Executing command");
                command.execute(
                    &mut self.directory,
                    self.config.birthday_window_days,
                    (self.clock)(),
                )
            });

        match result {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Command failed: {}", e);
                Reply::Message(e.to_string())
            }
        }
    }

    /// Run the loop until `close`/`exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        info!("Assistant started");
        writeln!(output, "Welcome to the assistant bot!")?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };

            match self.handle(&line?) {
                Reply::Message(text) => writeln!(output, "{}", text)?,
                Reply::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
            }
        }

        info!(contacts = self.directory.len(), "Assistant stopped");
        Ok(())
    }
}
