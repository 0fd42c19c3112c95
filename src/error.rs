//! Error type for malformed inputs.
//!
//! "No assembly exists" is not an error: the planner reports it as `Ok(None)`.
//! Everything here is a configuration problem the caller has to fix.

use thiserror::Error;

/// Rejected input to the alphabet parser, the unit constructors or the planner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// A byte outside `ACGT` (case-insensitive).
    #[error("invalid symbol {:?} at position {position}", char::from(*byte))]
    InvalidSymbol { byte: u8, position: usize },

    /// A basic unit with no symbols.
    #[error("basic unit has an empty sequence")]
    EmptyUnit,

    /// A planner was configured without any basic units.
    #[error("catalog contains no basic units")]
    EmptyCatalog,

    /// The target can be assembled, but every assembly costs more than `u64::MAX`.
    #[error("total cost overflows u64 at target position {position}")]
    CostOverflow { position: usize },
}

#[cfg(test)]
mod tests {
    use super::AssemblyError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = AssemblyError::InvalidSymbol {
            byte: b'N',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid symbol 'N' at position 3");

        let err = AssemblyError::CostOverflow { position: 7 };
        assert_eq!(err.to_string(), "total cost overflows u64 at target position 7");
    }
}
