//! Assistant commands and their effect on the directory.

use super::parser::ParsedInput;
use crate::directory::Directory;
use crate::error::{CommandError, CommandResult};
use crate::models::{BirthdayOutcome, ContactRecord};
use chrono::NaiveDate;

/// Text printed by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  hello                             greet the assistant
  add <name> <phone>                add a contact or another phone to it
  change <name> <old> <new>         replace a phone number
  phone <name>                      show a contact's phones
  remove-phone <name> <phone>       remove a phone number
  delete <name>                     delete a contact
  all                               list every contact
  add-birthday <name> <DD.MM.YYYY>  set a contact's birthday
  show-birthday <name>              show a contact's birthday
  birthdays [days]                  list birthdays coming up
  close | exit                      leave";

/// A recognized assistant command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays { days: Option<u32> },
    Help,
    Exit,
    Unknown(String),
}

/// What the assistant answers to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep going
    Message(String),
    /// Print the text and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }
}

impl TryFrom<ParsedInput> for Command {
    type Error = CommandError;

    fn try_from(input: ParsedInput) -> CommandResult<Self> {
        let mut args = input.args.into_iter();
        let args = &mut args;

        let command = match input.command.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let name = required(args, "name and phone")?;
                let phone = required(args, "name and phone")?;
                Command::Add { name, phone }
            }
            "change" => {
                let name = required(args, "name, old phone and new phone")?;
                let old = required(args, "name, old phone and new phone")?;
                let new = required(args, "name, old phone and new phone")?;
                Command::Change { name, old, new }
            }
            "phone" => Command::Phone { name: required(args, "name")? },
            "remove-phone" => {
                let name = required(args, "name and phone")?;
                let phone = required(args, "name and phone")?;
                Command::RemovePhone { name, phone }
            }
            "delete" => Command::Delete { name: required(args, "name")? },
            "all" => Command::All,
            "add-birthday" => {
                let name = required(args, "name and birthday")?;
                let date = required(args, "name and birthday")?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => Command::ShowBirthday { name: required(args, "name")? },
            "birthdays" => {
                let days = match args.next() {
                    Some(raw) => Some(
                        raw.parse::<u32>()
                            .map_err(|_| CommandError::InvalidWindow(raw))?,
                    ),
                    None => None,
                };
                Command::Birthdays { days }
            }
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };

        Ok(command)
    }
}

impl Command {
    /// Apply the command to `directory`.
    ///
    /// `default_window` is used by `birthdays` when no day count is given.
    pub fn execute(
        self,
        directory: &mut Directory,
        default_window: u32,
        today: NaiveDate,
    ) -> CommandResult<Reply> {
        let message = match self {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => match directory.find_mut(&name) {
                Some(record) => {
                    record.add_phone(&phone)?;
                    "Contact updated.".to_string()
                }
                None => {
                    let mut record = ContactRecord::new(name)?;
                    record.add_phone(&phone)?;
                    directory.add(record);
                    "Contact added.".to_string()
                }
            },
            Command::Change { name, old, new } => {
                existing(directory, &name)?.edit_phone(&old, &new)?;
                "Contact changed.".to_string()
            }
            Command::Phone { name } => {
                let record = directory
                    .find(&name)
                    .ok_or(CommandError::ContactNotFound(name))?;
                if record.phones().is_empty() {
                    format!("{} has no phones.", record.name())
                } else {
                    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
                    format!("{}: {}", record.name(), phones.join("; "))
                }
            }
            Command::RemovePhone { name, phone } => {
                existing(directory, &name)?.remove_phone(&phone)?;
                "Phone removed.".to_string()
            }
            Command::Delete { name } => {
                directory
                    .delete(&name)
                    .ok_or(CommandError::ContactNotFound(name))?;
                "Contact deleted.".to_string()
            }
            Command::All => {
                if directory.is_empty() {
                    "No contacts saved.".to_string()
                } else {
                    directory.to_string()
                }
            }
            Command::AddBirthday { name, date } => {
                match existing(directory, &name)?.add_birthday(&date)? {
                    BirthdayOutcome::Added => "Birthday added.".to_string(),
                    BirthdayOutcome::AlreadyDefined => "Birthday already defined.".to_string(),
                }
            }
            Command::ShowBirthday { name } => {
                let record = directory
                    .find(&name)
                    .ok_or(CommandError::ContactNotFound(name))?;
                match record.birthday() {
                    Some(birthday) => format!("{}: {}", record.name(), birthday),
                    None => format!("{} has no birthday set.", record.name()),
                }
            }
            Command::Birthdays { days } => {
                let window = days.unwrap_or(default_window);
                let upcoming = directory.upcoming_birthdays(window, today);
                if upcoming.is_empty() {
                    format!("No birthdays in the next {} days.", window)
                } else {
                    upcoming
                        .iter()
                        .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::Help => HELP_TEXT.to_string(),
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Unknown(_) => "Invalid command.".to_string(),
        };

        Ok(Reply::Message(message))
    }
}

fn required(args: &mut impl Iterator<Item = String>, usage: &'static str) -> CommandResult<String> {
    args.next().ok_or(CommandError::MissingArguments(usage))
}

fn existing<'a>(directory: &'a mut Directory, name: &str) -> CommandResult<&'a mut ContactRecord> {
    directory
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}
