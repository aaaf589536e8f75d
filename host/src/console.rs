use std::io::{BufRead, Write};

use bingo::{
    visualize_board, ChanceDeck, ChoiceOutcome, GameSession, IllegalAction, Phase, Question,
    Team, TurnOutcome, Win, TEAMS,
};
use tracing::{debug, info, warn};

use crate::command::{Command, HELP};

/// What happened during one console session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub win: Option<Win>,
    /// Number of cells claimed by team A and team B.
    pub cells: [usize; 2],
}

/// Drives a [`GameSession`] from operator commands.
///
/// The console is the presentation layer: it prints the board, question
/// dialogs and the win banner, and forwards the operator's decisions to the
/// session.
pub struct Console<R, W> {
    session: GameSession,
    chance_deck: Option<ChanceDeck>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: GameSession, chance_deck: Option<ChanceDeck>, input: R, output: W) -> Self {
        Self {
            session,
            chance_deck,
            input,
            output,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns an error only on I/O failure. Bad commands and illegal
    /// actions are reported to the operator and the loop continues.
    pub fn run(&mut self) -> anyhow::Result<Summary> {
        writeln!(self.output, "{}", visualize_board(&self.session))?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        let mut buf = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            buf.clear(); // because read_line() appends to the buffer
            if self.input.read_line(&mut buf)? == 0 {
                // EOF
                break;
            }
            let line = buf.trim();
            if line.is_empty() {
                continue;
            }
            debug!(line, "Operator input");
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            if let Err(err) = self.execute(command) {
                match err.downcast::<IllegalAction>() {
                    Ok(illegal) => {
                        warn!(%illegal, "Illegal action");
                        writeln!(self.output, "{}", illegal)?;
                    }
                    Err(io_err) => return Err(io_err),
                }
            }
        }

        let summary = Summary {
            win: self.session.win(),
            cells: TEAMS.map(|team| self.session.assignment().cells_of(team).len() as usize),
        };
        info!(?summary, "Session ended");
        Ok(summary)
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Board => {
                writeln!(self.output, "{}", visualize_board(&self.session))?;
            }
            Command::Open { index } => {
                let question = self.session.open_question(index)?;
                write_question(&mut self.output, index, question)?;
            }
            Command::Reveal => {
                let index = self.session.open_index();
                let question = self.session.reveal_answer()?;
                write_answer(&mut self.output, question)?;
                if let Some(index) = index {
                    writeln!(self.output, "Credit cell {} with 'credit a' or 'credit b'.", index)?;
                }
            }
            Command::Choose { choice } => {
                let outcome = self.session.select_choice(choice)?;
                match outcome {
                    ChoiceOutcome::Correct => writeln!(self.output, "Choice {} is correct!", choice)?,
                    ChoiceOutcome::Incorrect => writeln!(self.output, "Choice {} is wrong.", choice)?,
                }
                if let Phase::QuestionOpen { index, .. } = self.session.phase() {
                    if let Some(question) = self.session.board().get(index) {
                        write_answer(&mut self.output, question)?;
                    }
                }
            }
            Command::Credit { team } => {
                let index = self
                    .session
                    .open_index()
                    .ok_or(IllegalAction::NoQuestionOpen)?;
                let outcome = self.session.record_answer(index, team)?;
                self.write_outcome(outcome)?;
            }
            Command::Bonus { index, team } => {
                let outcome = self.session.claim_bonus(index, team)?;
                self.write_outcome(outcome)?;
            }
            Command::Dismiss => match self.session.dismiss() {
                Some(index) => writeln!(self.output, "Closed the question of cell {}.", index)?,
                None => writeln!(self.output, "No question is open.")?,
            },
            Command::Chance => match self.chance_deck.as_mut() {
                None => writeln!(self.output, "There are no chance cards in this game.")?,
                Some(deck) => match deck.draw() {
                    Some(card) => writeln!(self.output, "Chance card: {}", card.text)?,
                    None => writeln!(self.output, "The chance deck is empty.")?,
                },
            },
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn write_outcome(&mut self, outcome: TurnOutcome) -> anyhow::Result<()> {
        match outcome {
            TurnOutcome::Claimed { index, team } => {
                writeln!(self.output, "{} claims cell {}.", team, index)?;
                writeln!(self.output, "{}", visualize_board(&self.session))?;
            }
            TurnOutcome::Won(win) => {
                writeln!(self.output, "{}", visualize_board(&self.session))?;
                writeln!(self.output, "{}", banner(win.team))?;
            }
        }
        Ok(())
    }
}

fn banner(team: Team) -> String {
    let text = format!("{} BINGO!", team);
    let rule = "★".repeat(text.chars().count() + 4);
    format!("{}\n★ {} ★\n{}", rule, text, rule)
}

fn write_question<W: Write>(out: &mut W, index: usize, question: &Question) -> std::io::Result<()> {
    writeln!(out, "── Cell {}: {} ──", index, question.keyword)?;
    if question.is_bonus() {
        return writeln!(
            out,
            "Bonus cell! Close it with 'dismiss' and claim it with 'bonus {} <a|b>'.",
            index
        );
    }
    if !question.book.is_empty() {
        writeln!(out, "From \"{}\" ({})", question.book, question.month)?;
    }
    writeln!(out, "{}", question.prompt)?;
    if let Some(url) = question.image_url() {
        writeln!(out, "[image: {}]", url)?;
    }
    for (id, text) in question.choices() {
        if question.choices_are_images {
            writeln!(out, "  {}) [image: {}]", id, text)?;
        } else {
            writeln!(out, "  {}) {}", id, text)?;
        }
    }
    Ok(())
}

fn write_answer<W: Write>(out: &mut W, question: &Question) -> std::io::Result<()> {
    match question.correct_choice() {
        Some((id, text)) => writeln!(out, "Answer: {}) {}", id, text)?,
        None if question.is_multiple_choice() => writeln!(out, "No answer is marked as correct.")?,
        None => writeln!(out, "Free response, judge the answer yourself.")?,
    }
    if let Some(url) = question.correct_image_url() {
        writeln!(out, "[image: {}]", url)?;
    }
    if !question.comment.is_empty() {
        writeln!(out, "{}", question.comment)?;
    }
    Ok(())
}
