//! Text commands understood by the interactive front-end.

use std::str::FromStr;

use crate::bits::{BitVector, BIT_WIDTH, MAX_INDEX};
use crate::session::{Action, SelectionSession};
use crate::DotmapError;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  word <text>       type a word (bits follow on an exact match)
  toggle <0-10>     flip one dotmap position
  bits <11 digits>  set every position at once
  index <0-2047>    jump to a wordlist index
  add               append the current word to the list
  remove <n>        remove row n of the list
  clear             reset bits and typed word
  list              show the word list
  show              show the dotmap
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A session transition.
    Act(Action),
    SetBits(BitVector),
    SetIndex(u16),
    List,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Whether running this command can change the session.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Act(_) | Command::SetBits(_) | Command::SetIndex(_)
        )
    }

    /// Run the command against `session`. Returns `false` once the user asked
    /// to quit.
    pub fn execute(self, session: &mut SelectionSession) -> bool {
        match self {
            Command::Act(action) => session.apply(action),
            Command::SetBits(bits) => session.set_bits(bits),
            Command::SetIndex(index) => session.set_index(index),
            Command::Quit => return false,
            Command::List | Command::Show | Command::Help => {}
        }
        true
    }
}

fn argument<'a>(name: &str, arg: Option<&'a str>) -> Result<&'a str, DotmapError> {
    arg.ok_or_else(|| DotmapError::Command(format!("`{name}` needs an argument")))
}

fn number(name: &str, arg: &str) -> Result<usize, DotmapError> {
    arg.parse()
        .map_err(|_| DotmapError::Command(format!("`{name}` expects a number, got {arg:?}")))
}

impl FromStr for Command {
    type Err = DotmapError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (line, None),
        };
        let rest = rest.filter(|r| !r.is_empty());

        let command = match name.to_ascii_lowercase().as_str() {
            "word" | "w" => Command::Act(Action::SetInputWord(rest.unwrap_or("").to_string())),
            "toggle" | "t" => {
                let bit = number(name, argument(name, rest)?)?;
                if bit >= BIT_WIDTH {
                    return Err(DotmapError::BitOutOfRange(bit));
                }
                Command::Act(Action::ToggleBit(bit))
            }
            "bits" | "b" => Command::SetBits(argument(name, rest)?.parse()?),
            "index" | "i" => {
                let index = number(name, argument(name, rest)?)?;
                if index > MAX_INDEX as usize {
                    return Err(DotmapError::IndexOutOfWordlist(index as i128));
                }
                Command::SetIndex(index as u16)
            }
            "add" | "+" => Command::Act(Action::Commit),
            "remove" | "rm" => {
                let row = number(name, argument(name, rest)?)?;
                if row == 0 {
                    return Err(DotmapError::Command("rows are numbered from 1".into()));
                }
                Command::Act(Action::RemoveAt(row - 1))
            }
            "clear" => Command::Act(Action::Clear),
            "list" | "ls" => Command::List,
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(DotmapError::Command(format!("unknown command {other:?}"))),
        };
        Ok(command)
    }
}
