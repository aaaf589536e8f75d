use std::str::FromStr;

use bingo::{Team, UnknownTeam};

/// One line of operator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Board,
    Open { index: usize },
    Reveal,
    Choose { choice: u8 },
    Credit { team: Team },
    Bonus { index: usize, team: Team },
    Dismiss,
    Chance,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  board            show the board
  open <n>         open the question of cell n (0-24)
  reveal           show the answer of the open question
  choose <k>       pick answer choice k of the open question
  credit <a|b>     give the open question's cell to team A or B
  bonus <n> <a|b>  give bonus cell n to team A or B
  dismiss          close the question without crediting anyone
  chance           draw a chance card
  help             show this help
  quit             end the game";

/// The error type for the [`FromStr`] instance of [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    MissingArgument { command: &'static str },
    TooManyArguments { command: &'static str },
    InvalidNumber(String),
    InvalidTeam(UnknownTeam),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidTeam(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command"),
            CommandError::UnknownCommand(cmd) => {
                write!(f, "Unknown command '{}', type 'help' for a list", cmd)
            }
            CommandError::MissingArgument { command } => {
                write!(f, "'{}' needs more arguments", command)
            }
            CommandError::TooManyArguments { command } => {
                write!(f, "Too many arguments for '{}'", command)
            }
            CommandError::InvalidNumber(s) => write!(f, "'{}' is not a valid number", s),
            CommandError::InvalidTeam(err) => write!(f, "{}", err),
        }
    }
}

impl From<UnknownTeam> for CommandError {
    fn from(err: UnknownTeam) -> Self {
        CommandError::InvalidTeam(err)
    }
}

fn number<T: FromStr>(s: &str) -> Result<T, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidNumber(String::from(s)))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = words.collect();

        let (command, arity): (&'static str, usize) = match name.as_str() {
            "board" | "b" => ("board", 0),
            "open" | "o" => ("open", 1),
            "reveal" | "r" => ("reveal", 0),
            "choose" | "c" => ("choose", 1),
            "credit" => ("credit", 1),
            "bonus" => ("bonus", 2),
            "dismiss" | "d" => ("dismiss", 0),
            "chance" => ("chance", 0),
            "help" | "?" => ("help", 0),
            "quit" | "q" | "exit" => ("quit", 0),
            _ => return Err(CommandError::UnknownCommand(name)),
        };
        if args.len() < arity {
            return Err(CommandError::MissingArgument { command });
        }
        if args.len() > arity {
            return Err(CommandError::TooManyArguments { command });
        }

        Ok(match command {
            "board" => Command::Board,
            "open" => Command::Open {
                index: number(args[0])?,
            },
            "reveal" => Command::Reveal,
            "choose" => Command::Choose {
                choice: number(args[0])?,
            },
            "credit" => Command::Credit {
                team: args[0].parse()?,
            },
            "bonus" => Command::Bonus {
                index: number(args[0])?,
                team: args[1].parse()?,
            },
            "dismiss" => Command::Dismiss,
            "chance" => Command::Chance,
            "help" => Command::Help,
            _ => Command::Quit,
        })
    }
}
