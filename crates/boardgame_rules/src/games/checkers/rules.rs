//! Legality rules for checkers moves.

use super::geometry::{col, forward_row_change, on_board, play_step, row};
use super::{CELLS, Chain, Step};
use crate::games::Violation;
use crate::state::{BoardState, Team};
use tracing::{debug, instrument};

/// How a legal step moves its piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StepKind {
    /// One cell diagonally.
    Simple,
    /// Two cells diagonally over the enemy piece on `captured`.
    Jump {
        /// Cell of the captured piece.
        captured: usize,
    },
}

/// A step that passed every rule, with its indices resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct CheckedStep {
    pub from: usize,
    pub to: usize,
    pub kind: StepKind,
}

/// Checks a single step by `team` on `board`.
///
/// Rules, in order: both cells on the board; destination empty and origin
/// owned by `team`; a one-cell diagonal step or a two-cell diagonal jump
/// over an enemy piece; plain pieces only step forward, while jumps and
/// kings go either way.
#[instrument(skip(board))]
pub(super) fn check_step(
    board: &BoardState<CELLS>,
    team: Team,
    step: &Step,
) -> Result<CheckedStep, Violation> {
    let from = on_board(step.origin()).ok_or(Violation::OutOfBounds(step.origin()))?;
    let to = on_board(step.destination()).ok_or(Violation::OutOfBounds(step.destination()))?;

    if !board.is_empty(to) {
        return Err(Violation::Occupied(to));
    }

    let piece = board.cells()[from];
    if !piece.belongs_to(team) {
        return Err(Violation::NotOwnPiece(from));
    }

    let row_change = row(from) - row(to);
    let col_change = col(to) - col(from);

    let kind = match (row_change.abs(), col_change.abs()) {
        (1, 1) => StepKind::Simple,
        (2, 2) => {
            let captured = (from + to) / 2;
            if !board.cells()[captured].belongs_to(team.opponent()) {
                return Err(Violation::NothingToCapture(captured));
            }
            StepKind::Jump { captured }
        }
        _ => return Err(Violation::InvalidGeometry { from, to }),
    };

    if kind == StepKind::Simple && !piece.is_king() && row_change != forward_row_change(team) {
        return Err(Violation::WrongDirection { from, to });
    }

    Ok(CheckedStep { from, to, kind })
}

/// Checks a whole chain for the team to move.
///
/// Each step is checked against the board as left by the previous ones, so
/// a piece captured earlier in the chain cannot be captured again. Every
/// step after the first must start where the previous one ended and must
/// be a jump.
#[instrument(skip(board, chain), fields(chain = %chain))]
pub(super) fn check_chain(board: &BoardState<CELLS>, chain: &Chain) -> Result<(), Violation> {
    let team = board.active_team();
    let mut scratch = board.clone();
    let mut previous: Option<&Step> = None;

    for step in chain.steps() {
        if let Some(previous) = previous
            && step.origin() != previous.destination()
        {
            return Err(Violation::BrokenChain {
                expected: previous.destination(),
                found: step.origin(),
            });
        }

        let checked = check_step(&scratch, team, step)?;
        if previous.is_some() && checked.kind == StepKind::Simple {
            return Err(Violation::ChainStepNotJump {
                from: checked.from,
                to: checked.to,
            });
        }

        if let StepKind::Jump { captured } = checked.kind {
            debug!(captured, "Step captures");
        }
        play_step(&mut scratch, checked.from, checked.to);
        previous = Some(step);
    }

    debug!(steps = chain.len(), "Chain is legal");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::checkers::ALPHABET;
    use crate::state::decode;

    fn board(rows: [&str; 8], team: char) -> BoardState<CELLS> {
        decode(&format!("{}{}", team, rows.concat()), &ALPHABET).unwrap()
    }

    const EMPTY: &str = "--------";

    #[test]
    fn test_simple_forward_steps() {
        let b = board([EMPTY, EMPTY, EMPTY, "---w----", EMPTY, "--b-----", EMPTY, EMPTY], '1');
        // b on 42 moves up the board.
        assert!(check_step(&b, Team::Team1, &Step::new(42, 33)).is_ok());
        assert!(check_step(&b, Team::Team1, &Step::new(42, 35)).is_ok());
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(42, 49)),
            Err(Violation::WrongDirection { from: 42, to: 49 })
        );
        // w on 27 moves down the board.
        assert!(check_step(&b, Team::Team2, &Step::new(27, 34)).is_ok());
        assert_eq!(
            check_step(&b, Team::Team2, &Step::new(27, 18)),
            Err(Violation::WrongDirection { from: 27, to: 18 })
        );
    }

    #[test]
    fn test_kings_step_backwards() {
        let b = board([EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "--B-----", EMPTY, EMPTY], '1');
        assert!(check_step(&b, Team::Team1, &Step::new(42, 49)).is_ok());
        assert!(check_step(&b, Team::Team1, &Step::new(42, 51)).is_ok());
    }

    #[test]
    fn test_geometry() {
        let b = board([EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "--b-----", EMPTY, EMPTY], '1');
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(42, 34)),
            Err(Violation::InvalidGeometry { from: 42, to: 34 })
        );
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(42, 43)),
            Err(Violation::InvalidGeometry { from: 42, to: 43 })
        );
        // 47 -> 40 is a -7 offset that wraps around the row edge.
        let edge = board([EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "-------b", EMPTY, EMPTY], '1');
        assert_eq!(
            check_step(&edge, Team::Team1, &Step::new(47, 40)),
            Err(Violation::InvalidGeometry { from: 47, to: 40 })
        );
    }

    #[test]
    fn test_jump_needs_enemy_in_between() {
        let b = board([EMPTY, EMPTY, EMPTY, EMPTY, "-w------", "--b-----", "-b------", EMPTY], '1');
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(42, 24)),
            Ok(CheckedStep {
                from: 42,
                to: 24,
                kind: StepKind::Jump { captured: 33 }
            })
        );
        // Jumping over a friendly piece captures nothing.
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(49, 35)),
            Err(Violation::NothingToCapture(42))
        );
        // Over an empty cell neither.
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(42, 28)),
            Err(Violation::NothingToCapture(35))
        );
    }

    #[test]
    fn test_backward_jump_for_plain_piece() {
        let b = board([EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "--b-----", "---w----", EMPTY], '1');
        assert!(check_step(&b, Team::Team1, &Step::new(42, 60)).is_ok());
    }

    #[test]
    fn test_occupancy_and_ownership() {
        let b = board([EMPTY, EMPTY, EMPTY, EMPTY, "---w----", "--b-----", EMPTY, EMPTY], '1');
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(42, 35)),
            Err(Violation::Occupied(35))
        );
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(35, 28)),
            Err(Violation::NotOwnPiece(35))
        );
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(41, 32)),
            Err(Violation::NotOwnPiece(41))
        );
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(42, 64)),
            Err(Violation::OutOfBounds(64))
        );
        assert_eq!(
            check_step(&b, Team::Team1, &Step::new(-1, 8)),
            Err(Violation::OutOfBounds(-1))
        );
    }

    #[test]
    fn test_double_jump_chain() {
        // b on 56 jumps 49 then 35.
        let b = board([EMPTY, EMPTY, EMPTY, "--------", "---w----", EMPTY, "-w------", "b-------"], '1');
        let chain = Chain::single(Step::new(56, 42));
        assert!(check_chain(&b, &chain).is_ok());

        let chain: Chain = serde_json::from_value(serde_json::json!([[56, 42], [42, 28]])).unwrap();
        assert!(check_chain(&b, &chain).is_ok());
    }

    #[test]
    fn test_chain_must_be_contiguous() {
        let b = board([EMPTY, EMPTY, EMPTY, "--------", "---w----", EMPTY, "-w------", "b-------"], '1');
        let chain: Chain = serde_json::from_value(serde_json::json!([[56, 42], [43, 29]])).unwrap();
        assert_eq!(
            check_chain(&b, &chain),
            Err(Violation::BrokenChain {
                expected: 42,
                found: 43
            })
        );
    }

    #[test]
    fn test_chain_rejects_simple_steps() {
        let b = board([EMPTY, EMPTY, EMPTY, "--------", "---w----", EMPTY, "-w------", "b-------"], '1');
        let chain: Chain = serde_json::from_value(serde_json::json!([[56, 42], [42, 33]])).unwrap();
        assert_eq!(
            check_chain(&b, &chain),
            Err(Violation::ChainStepNotJump { from: 42, to: 33 })
        );
    }

    #[test]
    fn test_chain_may_open_with_a_step() {
        // b steps 56 -> 49, then jumps w on 42 to 35.
        let b = board([EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "--w-----", EMPTY, "b-------"], '1');
        let chain: Chain = serde_json::from_value(serde_json::json!([[56, 49], [49, 35]])).unwrap();
        assert!(check_chain(&b, &chain).is_ok());

        let chain: Chain = serde_json::from_value(serde_json::json!([[56, 49], [49, 40]])).unwrap();
        assert_eq!(
            check_chain(&b, &chain),
            Err(Violation::ChainStepNotJump { from: 49, to: 40 })
        );
    }

    #[test]
    fn test_chain_cannot_capture_same_piece_twice() {
        // b on 42 jumps w on 33 to 24, then tries to jump back over 33.
        let b = board([EMPTY, EMPTY, EMPTY, EMPTY, "-w------", "--b-----", EMPTY, EMPTY], '1');
        let chain: Chain = serde_json::from_value(serde_json::json!([[42, 24], [24, 42]])).unwrap();
        assert_eq!(check_chain(&b, &chain), Err(Violation::NothingToCapture(33)));
    }
}
