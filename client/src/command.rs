use std::fmt;

use common::games::tictactoe::GameMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(GameMode),
    Move { row: usize, col: usize },
    Again,
    Menu,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    BadCoordinate(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Type a command, or 'help'"),
            CommandError::Unknown(input) => write!(f, "Unknown command '{}', try 'help'", input),
            CommandError::BadCoordinate(input) => {
                write!(f, "Expected two cell numbers like '1 2', got '{}'", input)
            }
        }
    }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
Commands:
  pvp            start a game between two people
  bot            start a game against the computer
  <row> <col>    place your mark, rows and columns are numbered 0 to 2
  again          play again with the same players
  menu           back to the mode selection
  status         show the board and the clock
  quit           exit";

/// Coordinates are accepted as "1 2", "1,2" or "12".
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let input = line.trim();
    if input.is_empty() {
        return Err(CommandError::Empty);
    }

    let command = match input.to_ascii_lowercase().as_str() {
        "pvp" | "hvh" => Command::Start(GameMode::HumanVsHuman),
        "bot" | "hvb" => Command::Start(GameMode::HumanVsBot),
        "again" | "a" => Command::Again,
        "menu" | "m" => Command::Menu,
        "status" | "s" => Command::Status,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ if input.starts_with(|c: char| c.is_ascii_digit()) => parse_move(input)?,
        _ => return Err(CommandError::Unknown(input.to_string())),
    };
    Ok(command)
}

fn parse_move(input: &str) -> Result<Command, CommandError> {
    let digits: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let (row, col) = match digits.as_slice() {
        [row, col] => (row.parse(), col.parse()),
        [pair] if pair.len() == 2 => (pair[..1].parse(), pair[1..].parse()),
        _ => return Err(CommandError::BadCoordinate(input.to_string())),
    };

    match (row, col) {
        (Ok(row), Ok(col)) => Ok(Command::Move { row, col }),
        _ => Err(CommandError::BadCoordinate(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_formats() {
        let expected = Ok(Command::Move { row: 1, col: 2 });

        assert_eq!(parse_command("1 2"), expected);
        assert_eq!(parse_command("  1   2 "), expected);
        assert_eq!(parse_command("1,2"), expected);
        assert_eq!(parse_command("12"), expected);
    }

    #[test]
    fn test_out_of_range_coordinates_are_left_to_the_game() {
        assert_eq!(parse_command("3 0"), Ok(Command::Move { row: 3, col: 0 }));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("PvP"), Ok(Command::Start(GameMode::HumanVsHuman)));
        assert_eq!(parse_command("bot"), Ok(Command::Start(GameMode::HumanVsBot)));
        assert_eq!(parse_command("again"), Ok(Command::Again));
        assert_eq!(parse_command("m"), Ok(Command::Menu));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(parse_command("dance"), Err(CommandError::Unknown("dance".to_string())));
        assert_eq!(parse_command("1"), Err(CommandError::BadCoordinate("1".to_string())));
        assert_eq!(parse_command("1 2 3"), Err(CommandError::BadCoordinate("1 2 3".to_string())));
        assert_eq!(parse_command("1 x"), Err(CommandError::BadCoordinate("1 x".to_string())));
    }
}
