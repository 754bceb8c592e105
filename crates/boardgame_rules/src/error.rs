//! Rejection types returned by the orchestrator.

use crate::games::{MalformedMove, Violation};
use crate::state::CodecError;
use derive_more::{Display, Error};
use tracing::instrument;

/// Stage of the move pipeline that refused a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Resolving the variant name.
    VariantLookup,
    /// Parsing the stored state.
    Decode,
    /// Checking the shape of the move payload.
    Classify,
    /// Checking the move against the game rules.
    Legality,
}

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RejectionKind {
    /// The variant tag is not registered.
    #[display("Unknown variant {:?}", _0)]
    UnknownVariant(String),

    /// The supplied state does not parse for the variant.
    #[display("Invalid encoding: {}", _0)]
    InvalidEncoding(CodecError),

    /// The move payload has the wrong shape for the variant.
    #[display("Malformed move: {}", _0)]
    MalformedMove(MalformedMove),

    /// The move is well-formed but breaks a rule.
    #[display("Illegal move: {}", _0)]
    IllegalMove(Violation),
}

impl RejectionKind {
    /// Stage that produced this rejection.
    pub fn stage(&self) -> Stage {
        match self {
            RejectionKind::UnknownVariant(_) => Stage::VariantLookup,
            RejectionKind::InvalidEncoding(_) => Stage::Decode,
            RejectionKind::MalformedMove(_) => Stage::Classify,
            RejectionKind::IllegalMove(_) => Stage::Legality,
        }
    }
}

impl std::error::Error for RejectionKind {}

/// A refused submission with location tracking.
///
/// The caller's stored state is never touched when this is returned.
#[derive(Debug, Clone, Display, Error)]
#[display("Move rejected: {} at {}:{}", kind, file, line)]
pub struct Rejection {
    /// What went wrong.
    kind: RejectionKind,
    /// Line number where the rejection was raised.
    line: u32,
    /// Source file where the rejection was raised.
    file: &'static str,
}

impl Rejection {
    /// Creates a new rejection with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: RejectionKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an unknown variant tag.
    #[track_caller]
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::new(RejectionKind::UnknownVariant(name.into()))
    }

    /// What went wrong.
    pub fn kind(&self) -> &RejectionKind {
        &self.kind
    }

    /// Stage that refused the submission.
    pub fn stage(&self) -> Stage {
        self.kind.stage()
    }
}

impl From<CodecError> for Rejection {
    #[track_caller]
    fn from(err: CodecError) -> Self {
        Self::new(RejectionKind::InvalidEncoding(err))
    }
}

impl From<MalformedMove> for Rejection {
    #[track_caller]
    fn from(err: MalformedMove) -> Self {
        Self::new(RejectionKind::MalformedMove(err))
    }
}

impl From<Violation> for Rejection {
    #[track_caller]
    fn from(err: Violation) -> Self {
        Self::new(RejectionKind::IllegalMove(err))
    }
}
