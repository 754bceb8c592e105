//! Variant registry: which rules and default state belong to a game name.

use crate::config::{ConfigError, EngineConfig};
use crate::engine::{self, Applied};
use crate::error::Rejection;
use crate::games::checkers::{self, Checkers};
use crate::games::tictactoe::{self, TicTacToe};
use crate::moves::Move;
use crate::state::{CodecError, decode};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// The closed set of rule implementations a variant can use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RuleSet {
    /// 3x3 line game.
    TicTacToe,
    /// 8x8 capture game.
    Checkers,
}

impl RuleSet {
    /// Number of cells on the board.
    pub fn board_size(self) -> usize {
        match self {
            RuleSet::TicTacToe => tictactoe::CELLS,
            RuleSet::Checkers => checkers::CELLS,
        }
    }

    /// Encoded default state of the rule set.
    pub fn default_state(self) -> String {
        match self {
            RuleSet::TicTacToe => engine::default_state::<_, { tictactoe::CELLS }>(&TicTacToe),
            RuleSet::Checkers => engine::default_state::<_, { checkers::CELLS }>(&Checkers),
        }
    }

    /// Checks that `encoded` is a valid state for this rule set.
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] describing the first problem found.
    pub fn validate_state(self, encoded: &str) -> Result<(), CodecError> {
        match self {
            RuleSet::TicTacToe => {
                decode::<{ tictactoe::CELLS }>(encoded, &tictactoe::ALPHABET).map(|_| ())
            }
            RuleSet::Checkers => {
                decode::<{ checkers::CELLS }>(encoded, &checkers::ALPHABET).map(|_| ())
            }
        }
    }

    /// Runs the move pipeline under this rule set.
    ///
    /// # Errors
    ///
    /// See [`engine::submit_move`].
    pub fn submit_move(self, encoded: &str, raw: &Value) -> Result<Applied, Rejection> {
        match self {
            RuleSet::TicTacToe => {
                engine::submit_move::<_, { tictactoe::CELLS }>(&TicTacToe, encoded, raw)
            }
            RuleSet::Checkers => {
                engine::submit_move::<_, { checkers::CELLS }>(&Checkers, encoded, raw)
            }
        }
    }

    /// Lists legal moves under this rule set.
    ///
    /// # Errors
    ///
    /// See [`engine::legal_moves`].
    pub fn legal_moves(self, encoded: &str) -> Result<Vec<Move>, Rejection> {
        match self {
            RuleSet::TicTacToe => {
                engine::legal_moves::<_, { tictactoe::CELLS }>(&TicTacToe, encoded)
            }
            RuleSet::Checkers => engine::legal_moves::<_, { checkers::CELLS }>(&Checkers, encoded),
        }
    }
}

/// A named game type.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Variant {
    /// Lowercase name used as the variant tag.
    name: String,
    /// Rules applied to moves.
    rules: RuleSet,
    /// Encoded state new games start from.
    default_state: String,
}

/// Name → variant map.
///
/// Names are case-insensitive and stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRegistry {
    variants: BTreeMap<String, Variant>,
}

impl VariantRegistry {
    /// Creates a registry with no variants.
    pub fn empty() -> Self {
        Self {
            variants: BTreeMap::new(),
        }
    }

    /// Creates a registry holding `tictactoe` and `checkers` with their
    /// default states.
    #[instrument]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for rules in <RuleSet as strum::IntoEnumIterator>::iter() {
            let name = rules.to_string();
            registry.variants.insert(
                name.clone(),
                Variant {
                    name,
                    rules,
                    default_state: rules.default_state(),
                },
            );
        }
        registry
    }

    /// Built-in variants plus every variant listed in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a configured variant is invalid.
    #[instrument(skip(config), fields(extra = config.variants().len()))]
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();
        for variant in config.variants() {
            registry.register(
                variant.name(),
                *variant.rules(),
                variant.default_state().clone(),
            )?;
        }
        info!(variants = registry.len(), "Registry built from config");
        Ok(registry)
    }

    /// Adds a variant using `rules`, starting from `default_state` or the
    /// rule set's own default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the name is empty or taken, or the default
    /// state does not decode under `rules`.
    #[instrument(skip(self))]
    pub fn register(
        &mut self,
        name: &str,
        rules: RuleSet,
        default_state: Option<String>,
    ) -> Result<(), ConfigError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(ConfigError::new("Variant name is empty".to_string()));
        }
        if self.variants.contains_key(&name) {
            return Err(ConfigError::new(format!("Variant '{}' already exists", name)));
        }

        let default_state = default_state.unwrap_or_else(|| rules.default_state());
        rules.validate_state(&default_state).map_err(|e| {
            ConfigError::new(format!("Invalid default state for '{}': {}", name, e))
        })?;

        debug!(%name, %rules, %default_state, "Variant registered");
        self.variants.insert(
            name.clone(),
            Variant {
                name,
                rules,
                default_state,
            },
        );
        Ok(())
    }

    /// Looks up a variant by name.
    ///
    /// # Errors
    ///
    /// Returns an unknown-variant [`Rejection`] if no variant has that name.
    #[track_caller]
    pub fn get(&self, name: &str) -> Result<&Variant, Rejection> {
        match self.variants.get(&name.trim().to_lowercase()) {
            Some(variant) => Ok(variant),
            None => Err(Rejection::unknown_variant(name)),
        }
    }

    /// Variants in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.values()
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
