//! Board game rules engine.
//!
//! A pure function of (stored state, submitted move, game variant) to
//! (next state, outcome), or a rejection. The engine knows nothing about
//! users, sessions, HTTP or storage: hosts keep the encoded state string,
//! hand it back on the next move, and store whatever comes out.
//!
//! # Architecture
//!
//! - **State**: text codec and the board, team, cell and outcome types
//! - **Games**: one [`GameRules`] implementation per game (tic-tac-toe, checkers)
//! - **Engine**: the decode → classify → legality → apply → evaluate pipeline
//! - **Registry**: variant names, their rules and default states
//!
//! # Example
//!
//! ```
//! use boardgame_rules::{Engine, Outcome};
//! use serde_json::json;
//!
//! let engine = Engine::default();
//! let start = engine.default_state("tictactoe")?;
//! let applied = engine.submit_move(&start, &json!(4), "tictactoe")?;
//! assert_eq!(applied.state(), "2----X----");
//! assert_eq!(*applied.outcome(), Outcome::Ongoing);
//! # Ok::<(), boardgame_rules::Rejection>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod error;
mod games;
mod moves;
mod registry;
mod state;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, VariantConfig};

// Crate-level exports - Orchestrator
pub use engine::{Applied, Engine, default_state, legal_moves, submit_move};

// Crate-level exports - Errors
pub use error::{Rejection, RejectionKind, Stage};

// Crate-level exports - Rule sets
pub use games::{GameRules, MalformedMove, Violation, checkers, tictactoe};
pub use games::checkers::{Chain, Checkers, Step};
pub use games::tictactoe::{Placement, TicTacToe};

// Crate-level exports - Moves
pub use moves::Move;

// Crate-level exports - Registry
pub use registry::{RuleSet, Variant, VariantRegistry};

// Crate-level exports - State
pub use state::{Alphabet, BoardState, Cell, CodecError, EMPTY_SYMBOL, Outcome, Team, decode, encode};
