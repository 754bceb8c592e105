//! Core domain types shared by every game variant.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Team {
    /// Team 1 (moves first in every default state).
    Team1,
    /// Team 2.
    Team2,
}

impl Team {
    /// Returns the opposing team.
    pub fn opponent(self) -> Self {
        match self {
            Team::Team1 => Team::Team2,
            Team::Team2 => Team::Team1,
        }
    }

    /// Character used for this team as the leading active-team marker.
    pub fn marker(self) -> char {
        match self {
            Team::Team1 => '1',
            Team::Team2 => '2',
        }
    }

    /// Parses an active-team marker.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '1' => Some(Team::Team1),
            '2' => Some(Team::Team2),
            _ => None,
        }
    }
}

/// A single cell on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing on the cell.
    Empty,
    /// A plain mark or piece.
    Mark(Team),
    /// A promoted piece. Only produced by checkers.
    King(Team),
}

impl Cell {
    /// Team owning the cell, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            Cell::Empty => None,
            Cell::Mark(team) | Cell::King(team) => Some(team),
        }
    }

    /// True for an unoccupied cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// True for a promoted piece.
    pub fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    /// True if the cell holds a piece of `team`, king or not.
    pub fn belongs_to(self, team: Team) -> bool {
        self.team() == Some(team)
    }

    /// The same piece after promotion. Empty cells and kings are unchanged.
    pub fn promoted(self) -> Self {
        match self {
            Cell::Mark(team) => Cell::King(team),
            other => other,
        }
    }
}

/// Board of `N` cells in row-major order plus the team to move.
///
/// The active team is never cleared, even when the game is over: termination
/// is reported through [`Outcome`], not through the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState<const N: usize> {
    active_team: Team,
    cells: [Cell; N],
}

impl<const N: usize> BoardState<N> {
    /// Creates a state from its parts.
    pub fn new(active_team: Team, cells: [Cell; N]) -> Self {
        Self { active_team, cells }
    }

    /// Creates an empty board with `active_team` to move.
    pub fn empty(active_team: Team) -> Self {
        Self::new(active_team, [Cell::Empty; N])
    }

    /// Team whose move is next.
    pub fn active_team(&self) -> Team {
        self.active_team
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; N] {
        &self.cells
    }

    /// Gets the cell at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Overwrites the cell at `index`. Callers check bounds first.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Hands the move to `team`.
    pub(crate) fn set_active_team(&mut self, team: Team) {
        self.active_team = team;
    }

    /// Returns a copy of this state with a different team to move.
    pub fn with_active_team(mut self, team: Team) -> Self {
        self.active_team = team;
        self
    }

    /// Indices of every cell owned by `team`.
    pub fn indices_of(&self, team: Team) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| cell.belongs_to(team))
            .map(|(index, _)| index)
    }

    /// Checks whether `team` has at least one piece left.
    pub fn has_pieces(&self, team: Team) -> bool {
        self.cells.iter().any(|cell| cell.belongs_to(team))
    }
}

/// Classification of a game after a move has been applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Game continues.
    Ongoing,
    /// No line can be completed any more.
    Draw,
    /// Team 1 won.
    Team1Won,
    /// Team 2 won.
    Team2Won,
}

impl Outcome {
    /// The winning outcome for `team`.
    pub fn win_for(team: Team) -> Self {
        match team {
            Team::Team1 => Outcome::Team1Won,
            Team::Team2 => Outcome::Team2Won,
        }
    }

    /// Winning team, if the game has one.
    pub fn winner(self) -> Option<Team> {
        match self {
            Outcome::Team1Won => Some(Team::Team1),
            Outcome::Team2Won => Some(Team::Team2),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// True once the game has finished.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Integer stored in the game's `result` column.
    ///
    /// `-1` ongoing, `0` draw, `1` team 1 won, `2` team 2 won.
    pub fn code(self) -> i8 {
        match self {
            Outcome::Ongoing => -1,
            Outcome::Draw => 0,
            Outcome::Team1Won => 1,
            Outcome::Team2Won => 2,
        }
    }

    /// Inverse of [`Outcome::code`].
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Outcome::Ongoing),
            0 => Some(Outcome::Draw),
            1 => Some(Outcome::Team1Won),
            2 => Some(Outcome::Team2Won),
            _ => None,
        }
    }
}
