//! Checkers rule set.

use super::geometry::{JUMP_OFFSETS, STEP_OFFSETS, col, play_step, promotion_row, row};
use super::rules::{check_chain, check_step};
use super::{ALPHABET, CELLS, Chain, Step};
use crate::games::{GameRules, MalformedMove, Violation};
use crate::state::{Alphabet, BoardState, Cell, Outcome, Team};
use serde_json::Value;
use tracing::{debug, instrument};

/// Rows each side fills in the starting layout.
const HOME_ROWS: i64 = 2;

/// Checkers rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checkers;

impl Checkers {
    /// Every step geometrically reachable from a piece of the team to move.
    fn candidate_steps(state: &BoardState<CELLS>) -> impl Iterator<Item = Step> + '_ {
        state.indices_of(state.active_team()).flat_map(|index| {
            STEP_OFFSETS
                .into_iter()
                .chain(JUMP_OFFSETS)
                .map(move |offset| Step::new(index as i64, index as i64 + offset))
        })
    }

    /// Checks whether the team to move has any legal move.
    #[instrument(skip_all, fields(team = %state.active_team()))]
    pub fn has_legal_move(&self, state: &BoardState<CELLS>) -> bool {
        let team = state.active_team();
        Self::candidate_steps(state).any(|step| check_step(state, team, &step).is_ok())
    }
}

impl GameRules<CELLS> for Checkers {
    type Move = Chain;

    const ALPHABET: Alphabet = ALPHABET;

    /// Team 2 on the dark cells of the top two rows, team 1 on the dark
    /// cells of the bottom two rows, team 1 to move.
    fn default_state(&self) -> BoardState<CELLS> {
        let last_row = (CELLS / super::WIDTH) as i64 - 1;
        let mut state = BoardState::empty(Team::Team1);
        for index in 0..CELLS {
            let (r, c) = (row(index), col(index));
            if (r + c) % 2 == 0 {
                continue;
            }
            if r < HOME_ROWS {
                state.set(index, Cell::Mark(Team::Team2));
            } else if r > last_row - HOME_ROWS {
                state.set(index, Cell::Mark(Team::Team1));
            }
        }
        state
    }

    fn classify(&self, raw: &Value) -> Result<Chain, MalformedMove> {
        Chain::from_payload(raw)
    }

    fn check_legality(&self, state: &BoardState<CELLS>, mv: &Chain) -> Result<(), Violation> {
        check_chain(state, mv)
    }

    /// Plays every step, promotes the piece if it ends on the far row, and
    /// passes the turn unless something was captured.
    #[instrument(skip(self, state), fields(chain = %mv))]
    fn apply(&self, state: &BoardState<CELLS>, mv: &Chain) -> BoardState<CELLS> {
        let team = state.active_team();
        let mut next = state.clone();
        let mut captured = false;
        let mut landing = None;

        for step in mv.steps() {
            // check_legality resolved both indices onto the board
            let (from, to) = (step.origin() as usize, step.destination() as usize);
            captured |= play_step(&mut next, from, to);
            landing = Some(to);
        }

        if let Some(to) = landing
            && row(to) == promotion_row(team)
        {
            let piece = next.cells()[to];
            if !piece.is_king() {
                debug!(cell = to, "Piece promoted");
            }
            next.set(to, piece.promoted());
        }

        next.set_active_team(if captured { team } else { team.opponent() });
        next
    }

    /// A side with no pieces loses. Otherwise the team to move loses if it
    /// cannot move. There is no draw.
    #[instrument(skip(self, state))]
    fn evaluate(&self, state: &BoardState<CELLS>, _mover: Team) -> Outcome {
        let outcome = match (state.has_pieces(Team::Team1), state.has_pieces(Team::Team2)) {
            (true, false) => Outcome::Team1Won,
            (false, true) => Outcome::Team2Won,
            _ if self.has_legal_move(state) => Outcome::Ongoing,
            _ => Outcome::win_for(state.active_team().opponent()),
        };
        debug!(%outcome, "Board evaluated");
        outcome
    }

    #[instrument(skip(self, state))]
    fn legal_moves(&self, state: &BoardState<CELLS>) -> Vec<Chain> {
        let team = state.active_team();
        Self::candidate_steps(state)
            .filter(|step| check_step(state, team, step).is_ok())
            .map(Chain::single)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{decode, encode};
    use serde_json::json;

    const DEFAULT: &str = concat!(
        "1",
        "-w-w-w-w",
        "w-w-w-w-",
        "--------",
        "--------",
        "--------",
        "--------",
        "-b-b-b-b",
        "b-b-b-b-",
    );

    fn board(text: &str) -> BoardState<CELLS> {
        decode(text, &ALPHABET).unwrap()
    }

    fn chain(raw: Value) -> Chain {
        Chain::from_payload(&raw).unwrap()
    }

    #[test]
    fn test_default_state_layout() {
        assert_eq!(encode(&Checkers.default_state(), &ALPHABET), DEFAULT);
    }

    #[test]
    fn test_opening_moves() {
        let rules = Checkers;
        let state = board(DEFAULT);
        let mv = chain(json!([49, 42]));
        assert_eq!(rules.check_legality(&state, &mv), Ok(()));
        let next = rules.apply(&state, &mv);
        assert_eq!(next.get(49), Some(Cell::Empty));
        assert_eq!(next.get(42), Some(Cell::Mark(Team::Team1)));
        assert_eq!(next.active_team(), Team::Team2);

        let state = state.with_active_team(Team::Team2);
        let mv = chain(json!([8, 17]));
        assert_eq!(rules.check_legality(&state, &mv), Ok(()));
        let next = rules.apply(&state, &mv);
        assert_eq!(next.get(8), Some(Cell::Empty));
        assert_eq!(next.get(17), Some(Cell::Mark(Team::Team2)));
        assert_eq!(next.active_team(), Team::Team1);
    }

    #[test]
    fn test_opening_rejections() {
        let rules = Checkers;
        let state = board(DEFAULT);
        // Wrong team moving.
        assert_eq!(
            rules.check_legality(&state, &chain(json!([8, 17]))),
            Err(Violation::NotOwnPiece(8))
        );
        // Onto own piece.
        assert_eq!(
            rules.check_legality(&state, &chain(json!([49, 58]))),
            Err(Violation::Occupied(58))
        );
        // Jumping own piece.
        assert_eq!(
            rules.check_legality(&state, &chain(json!([56, 42]))),
            Err(Violation::NothingToCapture(49))
        );
    }

    #[test]
    fn test_capture_keeps_turn() {
        let rules = Checkers;
        let state = board(concat!(
            "1", "--------", "--w-----", "--------", "--------", "--------", "---w----", "--b-----",
            "--------"
        ));
        let next = rules.apply(&state, &chain(json!([50, 36])));
        assert_eq!(next.get(43), Some(Cell::Empty));
        assert_eq!(next.get(36), Some(Cell::Mark(Team::Team1)));
        assert_eq!(next.active_team(), Team::Team1);
    }

    #[test]
    fn test_promotion_on_far_row() {
        let rules = Checkers;
        let state = board(concat!(
            "1", "--------", "-b------", "--------", "--------", "--------", "--------", "--------",
            "---w----"
        ));
        let mv = chain(json!([9, 0]));
        assert_eq!(rules.check_legality(&state, &mv), Ok(()));
        let next = rules.apply(&state, &mv);
        assert_eq!(next.get(0), Some(Cell::King(Team::Team1)));

        let state = board(concat!(
            "2", "-b------", "--------", "--------", "--------", "--------", "--------", "--w-----",
            "--------"
        ));
        let mv = chain(json!([50, 57]));
        assert_eq!(rules.check_legality(&state, &mv), Ok(()));
        let next = rules.apply(&state, &mv);
        assert_eq!(next.get(57), Some(Cell::King(Team::Team2)));
    }

    #[test]
    fn test_promotion_happens_after_whole_chain() {
        let rules = Checkers;
        // w on 10 jumps b on 19, then b on 35, ending on row 5: no promotion.
        let state = board(concat!(
            "2", "--------", "--w-----", "---b----", "--------", "---b----", "--------", "--------",
            "--------"
        ));
        let mv = chain(json!([[10, 28], [28, 42]]));
        assert_eq!(rules.check_legality(&state, &mv), Ok(()));
        let next = rules.apply(&state, &mv);
        assert_eq!(next.get(42), Some(Cell::Mark(Team::Team2)));
        assert_eq!(next.get(19), Some(Cell::Empty));
        assert_eq!(next.get(35), Some(Cell::Empty));
        assert_eq!(next.active_team(), Team::Team2);
    }

    #[test]
    fn test_elimination_wins() {
        let rules = Checkers;
        let only_black = board(concat!(
            "2", "--------", "--------", "--------", "--------", "--------", "--b-----", "--------",
            "--------"
        ));
        assert_eq!(rules.evaluate(&only_black, Team::Team1), Outcome::Team1Won);
        assert_eq!(
            rules.evaluate(&only_black.with_active_team(Team::Team1), Team::Team2),
            Outcome::Team1Won
        );
    }

    #[test]
    fn test_blocked_side_loses() {
        let rules = Checkers;
        // w on 7 is hemmed in by b on 14 with 21 occupied behind it.
        let state = board(concat!(
            "2", "-------w", "------b-", "-----b--", "--------", "--------", "--------", "--------",
            "--------"
        ));
        assert!(!rules.has_legal_move(&state));
        assert_eq!(rules.evaluate(&state, Team::Team1), Outcome::Team1Won);

        // The same board with black to move is still open.
        let state = state.with_active_team(Team::Team1);
        assert_eq!(rules.evaluate(&state, Team::Team2), Outcome::Ongoing);
    }

    #[test]
    fn test_legal_moves_from_opening() {
        let rules = Checkers;
        let moves = rules.legal_moves(&board(DEFAULT));
        // Only the four front pieces on row 6 can move, seven steps in total.
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(&chain(json!([49, 42]))));
        assert!(moves.contains(&chain(json!([55, 46]))));
        assert!(moves.iter().all(|mv| rules.check_legality(&board(DEFAULT), mv).is_ok()));
    }
}
