//! Engine errors.
//!
//! Only round setup can fail. Every other operation is total: invalid timing
//! is reported as an ignored outcome, never as an error.

use thiserror::Error;

use crate::cards::CategoryError;

/// Errors returned by the engine.
///
/// On error the engine's state is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown category `{0}`")]
    InvalidCategory(String),

    #[error("category `{category}` has {available} items, cannot deal {requested} pairs")]
    InsufficientItems {
        category: String,
        requested: usize,
        available: usize,
    },

    #[error("a round needs at least one pair")]
    NoPairsRequested,

    #[error("the round has not ended")]
    RoundNotEnded,

    #[error("no round has been started yet")]
    NoPreviousRound,

    #[error(transparent)]
    Category(#[from] CategoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Category, CategoryRegistry};

    fn build() -> Result<CategoryRegistry, EngineError> {
        let registry = CategoryRegistry::from_categories([Category::new("")])?;
        Ok(registry)
    }

    #[test]
    fn test_category_errors_convert() {
        assert_eq!(
            build().unwrap_err(),
            EngineError::Category(CategoryError::EmptyName)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(EngineError::RoundNotEnded.to_string(), "the round has not ended");
        assert_eq!(
            EngineError::Category(CategoryError::DuplicateCategory("Animals".into())).to_string(),
            "category `Animals` is already registered"
        );
    }
}
