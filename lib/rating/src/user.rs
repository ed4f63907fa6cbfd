use serde::{Deserialize, Serialize};
use shoprank_core::{Error, Result};
use std::fmt;

/// A user id inside the rating model's trained range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Validate raw user input against a model trained on ids `0..user_count`
    ///
    /// Rejects empty and non-numeric input, ids outside the trained range,
    /// and input made only of `0` digits.
    pub fn parse(raw: &str, user_count: u32) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidUser("user id is empty".to_string()));
        }
        if raw.chars().all(|c| c == '0') {
            return Err(Error::InvalidUser(format!("{raw:?} cannot be all zeros")));
        }
        let id: u32 = raw
            .parse()
            .map_err(|_| Error::InvalidUser(format!("{raw:?} is not a valid numeric id")))?;
        Self::checked(id, user_count)
    }

    /// Range-check an already numeric id
    pub fn checked(id: u32, user_count: u32) -> Result<Self> {
        if id >= user_count {
            return Err(Error::InvalidUser(format!(
                "{id} is outside the trained range 0..{user_count}"
            )));
        }
        Ok(Self(id))
    }

    #[inline]
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert_eq!(UserId::parse("42", 100).unwrap().get(), 42);
        assert_eq!(UserId::parse(" 007 ", 100).unwrap().get(), 7);
    }

    #[test]
    fn test_degenerate_ids() {
        for raw in ["", "   ", "0", "000", "abc", "-5", "4.2", "12a"] {
            assert!(
                matches!(UserId::parse(raw, 100), Err(Error::InvalidUser(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(UserId::parse("100", 100).is_err());
        assert!(UserId::parse("99999999999", 100).is_err());
        assert!(UserId::checked(99, 100).is_ok());
    }
}
