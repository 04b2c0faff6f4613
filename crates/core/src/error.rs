use thiserror::Error;

/// Errors reported by the sequence helpers themselves.
///
/// Errors raised by caller-supplied functions are never wrapped in this type;
/// they are returned to the caller as-is.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot pop from an empty stack")]
    EmptyStack,
}

/// A result type alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_message() {
        assert_eq!(
            Error::EmptyStack.to_string(),
            "cannot pop from an empty stack"
        );
    }

    #[test]
    fn result_alias_defaults_to_crate_error() {
        let result: Result<()> = Err(Error::EmptyStack);
        assert_eq!(result, Err(Error::EmptyStack));
    }
}
