//! Text form of a board state.
//!
//! A state is stored as the active-team marker (`1` or `2`) followed by one
//! character per cell. This string is the only format exchanged with the
//! persistence layer, which keeps it verbatim.

use super::types::{BoardState, Cell, Team};
use tracing::{debug, instrument};

/// Character used for an empty cell in every variant.
pub const EMPTY_SYMBOL: char = '-';

/// Per-variant mapping between cells and characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    team1: char,
    team2: char,
    team1_king: Option<char>,
    team2_king: Option<char>,
}

impl Alphabet {
    /// Alphabet without king symbols.
    pub const fn marks(team1: char, team2: char) -> Self {
        Self {
            team1,
            team2,
            team1_king: None,
            team2_king: None,
        }
    }

    /// Alphabet with a distinct king symbol for each team.
    pub const fn with_kings(team1: char, team2: char, team1_king: char, team2_king: char) -> Self {
        Self {
            team1,
            team2,
            team1_king: Some(team1_king),
            team2_king: Some(team2_king),
        }
    }

    /// Character for `cell`.
    ///
    /// Kings fall back to the plain mark when the alphabet has no king
    /// symbols; variants using such an alphabet never promote.
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Mark(Team::Team1) => self.team1,
            Cell::Mark(Team::Team2) => self.team2,
            Cell::King(Team::Team1) => self.team1_king.unwrap_or(self.team1),
            Cell::King(Team::Team2) => self.team2_king.unwrap_or(self.team2),
        }
    }

    /// Cell for `symbol`, or `None` if it is not part of the alphabet.
    pub fn cell(&self, symbol: char) -> Option<Cell> {
        if symbol == EMPTY_SYMBOL {
            Some(Cell::Empty)
        } else if symbol == self.team1 {
            Some(Cell::Mark(Team::Team1))
        } else if symbol == self.team2 {
            Some(Cell::Mark(Team::Team2))
        } else if Some(symbol) == self.team1_king {
            Some(Cell::King(Team::Team1))
        } else if Some(symbol) == self.team2_king {
            Some(Cell::King(Team::Team2))
        } else {
            None
        }
    }
}

/// Reasons an encoded state does not parse.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CodecError {
    /// Nothing to decode.
    #[display("State is empty")]
    Empty,

    /// First character is not `1` or `2`.
    #[display("Invalid active-team marker {:?}", _0)]
    InvalidTeamMarker(char),

    /// Wrong number of cell characters for the variant.
    #[display("Expected {} cells, found {}", expected, found)]
    WrongLength {
        /// Board size of the variant.
        expected: usize,
        /// Number of cell characters supplied.
        found: usize,
    },

    /// A cell character outside the variant's alphabet.
    #[display("Invalid cell symbol {:?} at index {}", symbol, index)]
    InvalidSymbol {
        /// Cell index of the offending character.
        index: usize,
        /// The offending character.
        symbol: char,
    },
}

impl std::error::Error for CodecError {}

/// Parses `text` into a board of `N` cells.
///
/// # Errors
///
/// Returns [`CodecError`] if the marker, length or any cell symbol is invalid.
#[instrument(skip(alphabet))]
pub fn decode<const N: usize>(text: &str, alphabet: &Alphabet) -> Result<BoardState<N>, CodecError> {
    let mut chars = text.chars();
    let marker = chars.next().ok_or(CodecError::Empty)?;
    let active_team = Team::from_marker(marker).ok_or(CodecError::InvalidTeamMarker(marker))?;

    let found = chars.clone().count();
    if found != N {
        return Err(CodecError::WrongLength { expected: N, found });
    }

    let mut cells = [Cell::Empty; N];
    for (index, symbol) in chars.enumerate() {
        cells[index] = alphabet
            .cell(symbol)
            .ok_or(CodecError::InvalidSymbol { index, symbol })?;
    }

    debug!(active_team = %active_team, "State decoded");
    Ok(BoardState::new(active_team, cells))
}

/// Renders `state` in its stored text form.
#[instrument(skip_all)]
pub fn encode<const N: usize>(state: &BoardState<N>, alphabet: &Alphabet) -> String {
    std::iter::once(state.active_team().marker())
        .chain(state.cells().iter().map(|cell| alphabet.symbol(*cell)))
        .collect()
}
