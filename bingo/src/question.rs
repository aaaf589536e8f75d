use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::IllegalAction;

/// A single trivia question from the question bank.
///
/// The field names follow the JSON format of the bank, which is why a few
/// of them are renamed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Short label shown on the board cell.
    pub keyword: String,
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub month: String,
    /// The prompt text.
    #[serde(rename = "question", default)]
    pub prompt: String,
    /// Answer choices by id (1 to 4). `None` for free-response questions,
    /// where the operator judges the answer.
    #[serde(rename = "answer", default)]
    pub choices: Option<BTreeMap<u8, String>>,
    #[serde(default)]
    pub correct: Option<u8>,
    /// Explanation shown after the answer is revealed.
    #[serde(rename = "Comment", default)]
    pub comment: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// The choice texts are image references rather than plain text.
    #[serde(rename = "answer_imageUrl", default)]
    pub choices_are_images: bool,
    #[serde(rename = "correct_imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub correct_image_url: Option<String>,
    /// Bonus cells carry no question and credit a team immediately.
    #[serde(default)]
    pub bonus: bool,
}

/// Result of picking one of the answer choices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Correct,
    Incorrect,
}

impl Question {
    pub fn is_bonus(&self) -> bool {
        self.bonus
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.choices.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// The answer choices by ascending id. Empty for free-response questions.
    pub fn choices(&self) -> impl Iterator<Item = (u8, &str)> {
        self.choices
            .iter()
            .flatten()
            .map(|(&id, text)| (id, text.as_str()))
    }

    /// The text of the correct choice, if this is a multiple-choice question.
    pub fn correct_choice(&self) -> Option<(u8, &str)> {
        let id = self.correct?;
        let text = self.choices.as_ref()?.get(&id)?;
        Some((id, text.as_str()))
    }

    /// The prompt image. The bank uses an empty string for "no image".
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn correct_image_url(&self) -> Option<&str> {
        self.correct_image_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    /// Checks one of the answer choices.
    ///
    /// `index` is only used for the error message.
    pub fn check_choice(&self, index: usize, choice: u8) -> Result<ChoiceOutcome, IllegalAction> {
        let choices = self
            .choices
            .as_ref()
            .filter(|c| !c.is_empty())
            .ok_or(IllegalAction::NotMultipleChoice { index })?;
        if !choices.contains_key(&choice) {
            return Err(IllegalAction::InvalidChoice { choice });
        }
        if self.correct == Some(choice) {
            Ok(ChoiceOutcome::Correct)
        } else {
            Ok(ChoiceOutcome::Incorrect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MULTIPLE_CHOICE: &str = r#"{
        "id": 7,
        "keyword": "Whale",
        "book": "Moby-Dick",
        "month": "January",
        "question": "What is the name of the captain?",
        "answer": { "1": "Ahab", "2": "Nemo", "3": "Hook", "4": "Queequeg" },
        "correct": 1,
        "Comment": "Captain of the Pequod.",
        "imageUrl": "",
        "correct_imageUrl": "/images/ahab.png"
    }"#;

    const FREE_RESPONSE: &str = r#"{
        "keyword": "Lighthouse",
        "book": "To the Lighthouse",
        "month": "March",
        "question": "Name the family spending the summer on Skye.",
        "answer": null,
        "correct": null,
        "Comment": "The Ramsays.",
        "imageUrl": "/images/lighthouse.png"
    }"#;

    #[test]
    fn parse_multiple_choice() {
        let q: Question = serde_json::from_str(MULTIPLE_CHOICE).unwrap();
        assert_eq!(q.id, Some(7));
        assert_eq!(q.prompt, "What is the name of the captain?");
        assert!(q.is_multiple_choice());
        assert!(!q.is_bonus());
        assert_eq!(q.correct_choice(), Some((1, "Ahab")));
        assert_eq!(q.choices().map(|(id, _)| id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(q.image_url(), None);
        assert_eq!(q.correct_image_url(), Some("/images/ahab.png"));
        assert_eq!(q.comment, "Captain of the Pequod.");
    }

    #[test]
    fn parse_free_response() {
        let q: Question = serde_json::from_str(FREE_RESPONSE).unwrap();
        assert!(!q.is_multiple_choice());
        assert_eq!(q.choices().count(), 0);
        assert_eq!(q.correct_choice(), None);
        assert_eq!(q.image_url(), Some("/images/lighthouse.png"));
        assert_eq!(
            q.check_choice(3, 1),
            Err(IllegalAction::NotMultipleChoice { index: 3 })
        );
    }

    #[test]
    fn parse_bonus_cell() {
        let q: Question =
            serde_json::from_str(r#"{ "keyword": "FREE", "answer": null, "bonus": true }"#)
                .unwrap();
        assert!(q.is_bonus());
        assert_eq!(q.prompt, "");
    }

    #[test]
    fn check_choice() {
        let q: Question = serde_json::from_str(MULTIPLE_CHOICE).unwrap();
        assert_eq!(q.check_choice(0, 1), Ok(ChoiceOutcome::Correct));
        assert_eq!(q.check_choice(0, 4), Ok(ChoiceOutcome::Incorrect));
        assert_eq!(
            q.check_choice(0, 5),
            Err(IllegalAction::InvalidChoice { choice: 5 })
        );
    }
}
