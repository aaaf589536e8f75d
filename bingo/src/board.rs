use std::ops::Deref;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{BoardError, Question, BOARD_CELLS, BOARD_SIDE};

/// The questions of one session, at fixed positions.
///
/// Position `i` is row `i / 5`, column `i % 5`. A board normally has
/// [`BOARD_CELLS`] questions, but [`Board::sample()`] accepts smaller banks and
/// then produces a shorter board. The missing cells can never be claimed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    questions: Vec<Question>,
}

/// Index of the cell at `row`, `col` (both in `0..5`).
pub fn cell_index(row: usize, col: usize) -> usize {
    row * BOARD_SIDE + col
}

/// `(row, col)` of a cell index.
pub fn cell_position(index: usize) -> (usize, usize) {
    (index / BOARD_SIDE, index % BOARD_SIDE)
}

/// Picks up to `size` distinct questions from the bank, in random order.
///
/// The whole bank is shuffled and the first `size` entries are taken, so
/// each subset and order is equally likely. Banks smaller than `size` are
/// returned whole, shuffled.
pub fn sample_questions<R: Rng + ?Sized>(
    bank: &[Question],
    size: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut questions = bank.to_vec();
    questions.shuffle(rng);
    questions.truncate(size);
    questions
}

impl Board {
    /// Creates a board from questions in board order.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, BoardError> {
        if questions.len() > BOARD_CELLS {
            return Err(BoardError::TooManyQuestions {
                given: questions.len(),
            });
        }
        Ok(Self { questions })
    }

    /// Samples a board from the bank, with `min(25, bank.len())` cells.
    pub fn sample<R: Rng + ?Sized>(bank: &[Question], rng: &mut R) -> Self {
        Self {
            questions: sample_questions(bank, BOARD_CELLS, rng),
        }
    }

    /// Like [`Board::sample()`], but refuses banks that cannot fill the board.
    pub fn sample_full<R: Rng + ?Sized>(bank: &[Question], rng: &mut R) -> Result<Self, BoardError> {
        if bank.len() < BOARD_CELLS {
            return Err(BoardError::InsufficientQuestions {
                available: bank.len(),
            });
        }
        Ok(Self::sample(bank, rng))
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Whether every one of the 25 cells has a question.
    pub fn is_full(&self) -> bool {
        self.questions.len() == BOARD_CELLS
    }
}

impl Deref for Board {
    type Target = [Question];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::ArbitraryBank;

    /// A question bank with keywords `Q0`, `Q1`, ...
    pub(crate) fn numbered_bank(len: usize) -> Vec<Question> {
        (0..len)
            .map(|i| Question {
                id: Some(i as u32),
                keyword: format!("Q{}", i),
                book: String::from("Book"),
                month: String::from("May"),
                prompt: format!("Question number {}?", i),
                choices: None,
                correct: None,
                comment: String::new(),
                image_url: None,
                choices_are_images: false,
                correct_image_url: None,
                bonus: false,
            })
            .collect()
    }

    #[test]
    fn positions() {
        assert_eq!(cell_index(0, 0), 0);
        assert_eq!(cell_index(2, 3), 13);
        assert_eq!(cell_position(13), (2, 3));
        assert_eq!(cell_position(24), (4, 4));
    }

    #[test]
    fn exact_bank_is_permuted() {
        let bank = numbered_bank(25);
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::sample(&bank, &mut rng);
        assert_eq!(board.len(), 25);
        assert!(board.is_full());
        let keywords: BTreeSet<&str> = board.iter().map(|q| q.keyword.as_str()).collect();
        let expected: BTreeSet<&str> = bank.iter().map(|q| q.keyword.as_str()).collect();
        assert_eq!(keywords, expected);
    }

    #[test]
    fn small_bank() {
        let bank = numbered_bank(10);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Board::sample(&bank, &mut rng).len(), 10);
        assert_eq!(Board::sample(&[], &mut rng).len(), 0);
        assert_eq!(
            Board::sample_full(&bank, &mut rng),
            Err(BoardError::InsufficientQuestions { available: 10 })
        );
    }

    #[test]
    fn same_seed_same_board() {
        let bank = numbered_bank(60);
        let a = Board::sample(&bank, &mut StdRng::seed_from_u64(42));
        let b = Board::sample(&bank, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn from_questions_limit() {
        assert!(Board::from_questions(numbered_bank(25)).is_ok());
        assert_eq!(
            Board::from_questions(numbered_bank(26)),
            Err(BoardError::TooManyQuestions { given: 26 })
        );
    }

    quickcheck! {
        fn sample_size_and_uniqueness(input: ArbitraryBank, seed: u64) -> bool {
            let bank = input.0;
            let board = Board::sample(&bank, &mut StdRng::seed_from_u64(seed));
            let distinct: BTreeSet<&str> = board.iter().map(|q| q.keyword.as_str()).collect();
            board.len() == bank.len().min(BOARD_CELLS)
                && distinct.len() == board.len()
                && board.iter().all(|q| bank.contains(q))
        }
    }
}
