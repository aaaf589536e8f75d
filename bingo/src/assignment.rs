use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CellsSet;

/// One of the two teams competing for the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    A,
    B,
}

/// Both teams, in the order they are checked for a win.
pub const TEAMS: [Team; 2] = [Team::A, Team::B];

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// The single-letter label used on the board.
    pub fn letter(self) -> char {
        match self {
            Team::A => 'A',
            Team::B => 'B',
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.letter())
    }
}

/// The error type for the [`FromStr`] instance of [`Team`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTeam(pub String);

impl std::error::Error for UnknownTeam {}

impl std::fmt::Display for UnknownTeam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a team, expected 'a' or 'b'", self.0)
    }
}

impl FromStr for Team {
    type Err = UnknownTeam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" | "A" => Ok(Team::A),
            "b" | "B" => Ok(Team::B),
            other => Err(UnknownTeam(String::from(other))),
        }
    }
}

/// Which team has claimed which cell.
///
/// Stored as one [`CellsSet`] per team. A cell is never held by both teams:
/// [`Assignment::assign()`] takes it away from the other team first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    claimed: [CellsSet; 2],
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Team> {
        TEAMS
            .into_iter()
            .find(|&team| self.claimed[team as usize].contains(index))
    }

    pub fn assign(&mut self, index: usize, team: Team) {
        let other = team.other() as usize;
        self.claimed[other] = self.claimed[other].remove(index);
        self.claimed[team as usize] = self.claimed[team as usize].insert(index);
    }

    /// The cells claimed by `team`.
    pub fn cells_of(&self, team: Team) -> CellsSet {
        self.claimed[team as usize]
    }

    /// All claimed cells, regardless of team.
    pub fn claimed(&self) -> CellsSet {
        self.claimed[0] | self.claimed[1]
    }

    pub fn len(&self) -> usize {
        self.claimed().len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.claimed().is_empty()
    }

    /// Claimed cells with their team, by ascending index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Team)> + '_ {
        self.claimed()
            .into_iter()
            .filter_map(|index| self.get(index).map(|team| (index, team)))
    }
}

impl FromIterator<(usize, Team)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (usize, Team)>>(iter: T) -> Self {
        let mut assignment = Assignment::new();
        for (index, team) in iter {
            assignment.assign(index, team);
        }
        assignment
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn team_from_str() {
        assert_eq!("a".parse::<Team>(), Ok(Team::A));
        assert_eq!(" B ".parse::<Team>(), Ok(Team::B));
        assert_eq!("c".parse::<Team>(), Err(UnknownTeam(String::from("c"))));
        assert_eq!(Team::A.to_string(), "Team A");
    }

    #[test]
    fn later_assignment_overwrites() {
        let mut assignment = Assignment::new();
        assignment.assign(3, Team::A);
        assignment.assign(3, Team::B);
        assert_eq!(assignment.get(3), Some(Team::B));
        assert!(!assignment.cells_of(Team::A).contains(3));
        assert_eq!(assignment.len(), 1);
    }

    #[test]
    fn iter_is_ordered() {
        let assignment = Assignment::from_iter([(9, Team::B), (2, Team::A), (4, Team::B)]);
        assert_eq!(
            assignment.iter().collect::<Vec<_>>(),
            vec![(2, Team::A), (4, Team::B), (9, Team::B)]
        );
    }

    quickcheck! {
        fn assigning_twice_is_idempotent(index: u8, team: Team, rest: Vec<(u8, Team)>) -> bool {
            let index = index as usize % 25;
            let mut once = Assignment::from_iter(rest.iter().map(|&(i, t)| (i as usize % 25, t)));
            let mut twice = once;
            once.assign(index, team);
            twice.assign(index, team);
            twice.assign(index, team);
            once == twice
        }

        fn teams_never_share_cells(claims: Vec<(u8, Team)>) -> bool {
            let assignment = Assignment::from_iter(claims.into_iter().map(|(i, t)| (i as usize % 25, t)));
            (assignment.cells_of(Team::A) & assignment.cells_of(Team::B)).is_empty()
        }
    }
}
