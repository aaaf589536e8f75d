use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::Rng;
use tracing::debug;

use crate::{Board, ChanceCard, Question};

/// Something that can supply the full question bank.
pub trait QuestionSource {
    fn fetch(&mut self) -> anyhow::Result<Vec<Question>>;
}

/// A question bank stored as a JSON array in a file.
#[derive(Clone, Debug)]
pub struct JsonFile {
    pub path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionSource for JsonFile {
    fn fetch(&mut self) -> anyhow::Result<Vec<Question>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Could not open question bank '{}'", self.path.display()))?;
        let questions = load_questions(BufReader::new(file))
            .with_context(|| format!("Could not read question bank '{}'", self.path.display()))?;
        debug!(path = %self.path.display(), num_questions = questions.len(), "Loaded question bank");
        Ok(questions)
    }
}

impl QuestionSource for Vec<Question> {
    fn fetch(&mut self) -> anyhow::Result<Vec<Question>> {
        Ok(self.clone())
    }
}

pub fn load_questions<R: Read>(reader: R) -> anyhow::Result<Vec<Question>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_chance_cards<R: Read>(reader: R) -> anyhow::Result<Vec<ChanceCard>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a JSON array of chance card texts from a file.
pub fn load_chance_cards_from(path: &Path) -> anyhow::Result<Vec<ChanceCard>> {
    let file = File::open(path)
        .with_context(|| format!("Could not open chance cards '{}'", path.display()))?;
    load_chance_cards(BufReader::new(file))
        .with_context(|| format!("Could not read chance cards '{}'", path.display()))
}

/// Fetches the bank and samples a board from it.
///
/// With `strict`, a bank with fewer than 25 questions is an error instead of
/// a short board.
pub fn next_board<S, R>(source: &mut S, rng: &mut R, strict: bool) -> anyhow::Result<Board>
where
    S: QuestionSource + ?Sized,
    R: Rng + ?Sized,
{
    let bank = source.fetch()?;
    if strict {
        Ok(Board::sample_full(&bank, rng)?)
    } else {
        Ok(Board::sample(&bank, rng))
    }
}

/// Keywords that occur more than once in the bank, in sorted order.
///
/// Keywords label the board cells, so duplicates make cells ambiguous.
pub fn duplicate_keywords(bank: &[Question]) -> Vec<&str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for question in bank {
        *counts.entry(question.keyword.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter_map(|(keyword, count)| (count > 1).then_some(keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::board::tests::numbered_bank;
    use crate::BoardError;

    const BANK: &str = r#"[
        {
            "id": 1,
            "keyword": "Whale",
            "book": "Moby-Dick",
            "month": "January",
            "question": "What is the name of the captain?",
            "answer": { "1": "Ahab", "2": "Nemo", "3": "Hook", "4": "Queequeg" },
            "correct": 1,
            "Comment": "",
            "imageUrl": ""
        },
        {
            "id": 2,
            "keyword": "FREE",
            "book": "",
            "month": "",
            "question": "",
            "answer": null,
            "correct": null,
            "Comment": "",
            "imageUrl": "",
            "bonus": true
        }
    ]"#;

    #[test]
    fn load_from_reader() {
        let bank = load_questions(BANK.as_bytes()).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(bank[1].is_bonus());
        assert!(load_questions("{}".as_bytes()).is_err());
    }

    #[test]
    fn missing_file() {
        let err = JsonFile::new("/nonexistent/bank.json").fetch().unwrap_err();
        assert!(err.to_string().contains("Could not open question bank"));
    }

    #[test]
    fn strict_and_lenient_boards() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut small = numbered_bank(3);
        assert_eq!(next_board(&mut small, &mut rng, false).unwrap().len(), 3);
        let err = next_board(&mut small, &mut rng, true).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BoardError>(),
            Some(&BoardError::InsufficientQuestions { available: 3 })
        );
        let mut big = numbered_bank(40);
        assert!(next_board(&mut big, &mut rng, true).unwrap().is_full());
    }

    #[test]
    fn duplicates() {
        let mut bank = numbered_bank(4);
        bank[3].keyword = String::from("Q1");
        assert_eq!(duplicate_keywords(&bank), vec!["Q1"]);
        assert!(duplicate_keywords(&numbered_bank(4)).is_empty());
    }
}
