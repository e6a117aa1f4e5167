use crate::Outcome;

/// Payload for a success that carries no value.
///
/// Zero-sized and always equal to itself, so every `Nothing` is the one
/// process-wide instance. Distinct from a failure: `Outcome<Nothing>` still
/// has both variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nothing;

impl Outcome<Nothing> {
    /// The empty success.
    pub fn nothing() -> Self {
        Self::Success(Nothing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_service::{self, EMPTY_INPUT};
    use crate::Error;

    #[test]
    fn empty_success_chains_into_a_valued_step() {
        let result = test_service::consume(String::from("abc"))
            .then(|_| test_service::upper(String::from("cba")));

        assert_eq!(result, Outcome::success(String::from("CBA")));
    }

    #[test]
    fn empty_success_still_propagates_an_upstream_failure() {
        let result = test_service::consume(String::from("    "))
            .then(|_| test_service::upper(String::from("cba")));

        assert_eq!(result, Error::new(EMPTY_INPUT));
    }

    #[test]
    fn every_nothing_is_the_same_nothing() {
        assert_eq!(Nothing, Nothing::default());
        assert_eq!(Outcome::nothing(), Outcome::success(Nothing));
    }
}
