use tracing::{debug, info};

use crate::{check_win, Assignment, Board, ChoiceOutcome, IllegalAction, Question, Team, Win};

/// Whether a question dialog is currently open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    QuestionOpen {
        index: usize,
        /// The answer has been shown to the players.
        revealed: bool,
        /// The answer choice picked by the players, if any.
        chosen: Option<u8>,
    },
}

/// Summarizes the outcome of crediting a cell to a team.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Claimed { index: usize, team: Team },
    /// The claim completed a line. The session is over.
    Won(Win),
}

/// The state of one game: the board, who claimed which cell, and the winner.
///
/// The board is fixed for the lifetime of the session. The assignment only
/// grows, and the win is set at most once. After a win, no more cells can be
/// opened or claimed.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    assignment: Assignment,
    phase: Phase,
    win: Option<Win>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            assignment: Assignment::new(),
            phase: Phase::Idle,
            win: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn win(&self) -> Option<Win> {
        self.win
    }

    pub fn is_won(&self) -> bool {
        self.win.is_some()
    }

    /// The cell whose question is open, if any.
    pub fn open_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::QuestionOpen { index, .. } => Some(index),
        }
    }

    /// Opens the question dialog for an unclaimed cell.
    pub fn open_question(&mut self, index: usize) -> Result<&Question, IllegalAction> {
        self.ensure_not_won()?;
        if let Phase::QuestionOpen { index: open, .. } = self.phase {
            return Err(IllegalAction::QuestionAlreadyOpen { index: open });
        }
        self.ensure_claimable(index)?;
        self.phase = Phase::QuestionOpen {
            index,
            revealed: false,
            chosen: None,
        };
        debug!(index, "Question opened");
        self.question_at(index)
    }

    /// Shows the answer of the open question.
    pub fn reveal_answer(&mut self) -> Result<&Question, IllegalAction> {
        let index = self.open_index().ok_or(IllegalAction::NoQuestionOpen)?;
        if let Phase::QuestionOpen { revealed, .. } = &mut self.phase {
            *revealed = true;
        }
        debug!(index, "Answer revealed");
        self.question_at(index)
    }

    /// Picks an answer choice for the open question and reveals the answer.
    ///
    /// Picking a choice does not credit anyone; the operator still decides
    /// which team gets the cell through [`Self::record_answer()`].
    pub fn select_choice(&mut self, choice: u8) -> Result<ChoiceOutcome, IllegalAction> {
        let index = self.open_index().ok_or(IllegalAction::NoQuestionOpen)?;
        let outcome = self.question_at(index)?.check_choice(index, choice)?;
        self.phase = Phase::QuestionOpen {
            index,
            revealed: true,
            chosen: Some(choice),
        };
        debug!(index, choice, ?outcome, "Choice selected");
        Ok(outcome)
    }

    /// Credits the open question's cell to `team` and closes the dialog.
    pub fn record_answer(&mut self, index: usize, team: Team) -> Result<TurnOutcome, IllegalAction> {
        self.ensure_not_won()?;
        match self.phase {
            Phase::Idle => return Err(IllegalAction::NoQuestionOpen),
            Phase::QuestionOpen { index: open, .. } if open != index => {
                return Err(IllegalAction::WrongCellOpen {
                    open,
                    requested: index,
                })
            }
            Phase::QuestionOpen { .. } => {}
        }
        self.ensure_claimable(index)?;
        self.phase = Phase::Idle;
        Ok(self.claim(index, team))
    }

    /// Credits a bonus cell to `team` without opening a question.
    pub fn claim_bonus(&mut self, index: usize, team: Team) -> Result<TurnOutcome, IllegalAction> {
        self.ensure_not_won()?;
        if let Phase::QuestionOpen { index: open, .. } = self.phase {
            return Err(IllegalAction::QuestionAlreadyOpen { index: open });
        }
        self.ensure_claimable(index)?;
        if !self.question_at(index)?.is_bonus() {
            return Err(IllegalAction::NotABonusCell { index });
        }
        Ok(self.claim(index, team))
    }

    /// Closes the question dialog without crediting anyone.
    ///
    /// Returns the cell whose question was open.
    pub fn dismiss(&mut self) -> Option<usize> {
        let closed = self.open_index();
        self.phase = Phase::Idle;
        if let Some(index) = closed {
            debug!(index, "Question dismissed");
        }
        closed
    }

    fn claim(&mut self, index: usize, team: Team) -> TurnOutcome {
        self.assignment.assign(index, team);
        debug!(index, %team, "Cell claimed");
        match check_win(&self.assignment) {
            Some(win) => {
                info!(team = %win.team, line = %win.line, "Bingo");
                self.win = Some(win);
                TurnOutcome::Won(win)
            }
            None => TurnOutcome::Claimed { index, team },
        }
    }

    fn question_at(&self, index: usize) -> Result<&Question, IllegalAction> {
        self.board.get(index).ok_or(IllegalAction::CellOutOfBounds {
            index,
            board_len: self.board.len(),
        })
    }

    fn ensure_not_won(&self) -> Result<(), IllegalAction> {
        match self.win {
            Some(win) => Err(IllegalAction::GameAlreadyWon { win }),
            None => Ok(()),
        }
    }

    fn ensure_claimable(&self, index: usize) -> Result<(), IllegalAction> {
        self.question_at(index)?;
        match self.assignment.get(index) {
            Some(team) => Err(IllegalAction::CellAlreadyClaimed { index, team }),
            None => Ok(()),
        }
    }
}
