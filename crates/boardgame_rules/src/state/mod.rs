mod codec;
mod types;

pub use codec::{Alphabet, CodecError, EMPTY_SYMBOL, decode, encode};
pub use types::{BoardState, Cell, Outcome, Team};
