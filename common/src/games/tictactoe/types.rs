use std::fmt;

pub const BOARD_SIZE: usize = 3;

/// Cell contents. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The three-in-a-row that decided the game, given by its two end cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }

    /// Every cell on the line, start to end.
    pub fn cells(&self) -> [Position; BOARD_SIZE] {
        let step_row = (self.end.row as isize - self.start.row as isize) / 2;
        let step_col = (self.end.col as isize - self.start.col as isize) / 2;
        std::array::from_fn(|i| {
            Position::new(
                self.start.row.wrapping_add_signed(step_row * i as isize),
                self.start.col.wrapping_add_signed(step_col * i as isize),
            )
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Undecided,
    XWins,
    OWins,
    Tie,
}

impl Outcome {
    pub fn won_by(mark: Mark) -> Outcome {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
            Mark::Empty => Outcome::Undecided,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        *self != Outcome::Undecided
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    /// The bot always plays `O`.
    HumanVsBot,
}

impl GameMode {
    pub fn bot_mark(&self) -> Option<Mark> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsBot => Some(Mark::O),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
            Mark::Empty => "Player",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Setup,
    InProgress,
    /// Won, with the winning line still being shown.
    WinPending,
    Terminal,
}
