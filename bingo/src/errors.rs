use crate::{Team, Win, BOARD_CELLS};

/// The error type for actions on a [`GameSession`](crate::GameSession).
///
/// None of these change the session's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    CellOutOfBounds { index: usize, board_len: usize },
    CellAlreadyClaimed { index: usize, team: Team },
    QuestionAlreadyOpen { index: usize },
    NoQuestionOpen,
    WrongCellOpen { open: usize, requested: usize },
    NotABonusCell { index: usize },
    NotMultipleChoice { index: usize },
    InvalidChoice { choice: u8 },
    GameAlreadyWon { win: Win },
}

impl std::error::Error for IllegalAction {}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalAction::CellOutOfBounds { index, board_len } =>
                write!(f, "Cell {} does not exist, the board has {} cells", index, board_len),
            IllegalAction::CellAlreadyClaimed { index, team } =>
                write!(f, "Cell {} was already claimed by {}", index, team),
            IllegalAction::QuestionAlreadyOpen { index } =>
                write!(f, "The question for cell {} is still open", index),
            IllegalAction::NoQuestionOpen => write!(f, "No question is open"),
            IllegalAction::WrongCellOpen { open, requested } =>
                write!(f, "Tried to credit cell {}, but the open question is for cell {}", requested, open),
            IllegalAction::NotABonusCell { index } =>
                write!(f, "Cell {} is not a bonus cell", index),
            IllegalAction::NotMultipleChoice { index } =>
                write!(f, "The question for cell {} has no answer choices", index),
            IllegalAction::InvalidChoice { choice } =>
                write!(f, "There is no answer choice {}", choice),
            IllegalAction::GameAlreadyWon { win } =>
                write!(f, "The game is over, {} already won with {}", win.team, win.line),
        }
    }
}

/// The error type for building a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InsufficientQuestions { available: usize },
    TooManyQuestions { given: usize },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InsufficientQuestions { available } => write!(
                f,
                "The question bank has {} questions, but a board needs {}",
                available, BOARD_CELLS
            ),
            BoardError::TooManyQuestions { given } => write!(
                f,
                "Got {} questions, but a board has only {} cells",
                given, BOARD_CELLS
            ),
        }
    }
}
