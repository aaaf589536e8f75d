use crate::{Assignment, Question, Team, BOARD_CELLS};

impl quickcheck::Arbitrary for Team {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Team::A, Team::B]).unwrap()
    }
}

/// A random assignment, biased towards claiming many cells so that
/// complete lines actually show up.
#[derive(Clone, Debug)]
pub struct ArbitraryAssignment(pub Assignment);

impl quickcheck::Arbitrary for ArbitraryAssignment {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Mostly one team, so that lines get completed
        let majority = Team::arbitrary(g);
        let mut assignment = Assignment::new();
        for index in 0..BOARD_CELLS {
            match u8::arbitrary(g) % 8 {
                0 => {}
                1 => assignment.assign(index, majority.other()),
                _ => assignment.assign(index, majority),
            }
        }
        ArbitraryAssignment(assignment)
    }
}

/// A question bank with distinct keywords, between 0 and 60 entries.
#[derive(Clone, Debug)]
pub struct ArbitraryBank(pub Vec<Question>);

impl quickcheck::Arbitrary for ArbitraryBank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % 61;
        let bank = (0..len)
            .map(|i| Question {
                id: Some(i as u32),
                keyword: format!("K{}", i),
                book: String::arbitrary(g),
                month: String::new(),
                prompt: String::arbitrary(g),
                choices: None,
                correct: None,
                comment: String::new(),
                image_url: None,
                choices_are_images: false,
                correct_image_url: None,
                bonus: bool::arbitrary(g),
            })
            .collect();
        ArbitraryBank(bank)
    }
}
