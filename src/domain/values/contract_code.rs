use crate::domain::error::DomainError;
use std::str::FromStr;

/// Length of the due-date suffix (month letter + two-digit year).
const DUE_DATE_LEN: usize = 3;

/// A user-supplied lookup key such as `DOLN20`: acronym followed by a
/// three-character due-date code. Always stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCode {
    code: String,
    split: usize,
}

impl ContractCode {
    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn acronym(&self) -> &str {
        &self.code[..self.split]
    }

    pub fn due_date(&self) -> &str {
        &self.code[self.split..]
    }
}

impl FromStr for ContractCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        if code.chars().count() <= DUE_DATE_LEN {
            return Err(DomainError::InvalidCode(format!(
                "{code:?} must be an acronym followed by a {DUE_DATE_LEN}-character due date"
            )));
        }
        // byte offset of the third-to-last character
        let split = code
            .char_indices()
            .rev()
            .nth(DUE_DATE_LEN - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        Ok(Self { code, split })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_uppercase() {
        let code: ContractCode = "doln20".parse().unwrap();
        assert_eq!(code.as_str(), "DOLN20");
        assert_eq!(code.acronym(), "DOL");
        assert_eq!(code.due_date(), "N20");
    }

    #[test]
    fn test_minimum_length() {
        let code: ContractCode = "OZ1D".parse().unwrap();
        assert_eq!(code.acronym(), "O");
        assert_eq!(code.due_date(), "Z1D");
    }

    #[test]
    fn test_too_short_is_invalid() {
        for raw in ["", "N20", "  ab ", "x"] {
            let err = raw.parse::<ContractCode>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidCode(_)), "{raw:?}");
        }
    }

    #[test]
    fn test_split_counts_characters_not_bytes() {
        let code: ContractCode = "açúf25".parse().unwrap();
        assert_eq!(code.acronym(), "AÇÚ");
        assert_eq!(code.due_date(), "F25");
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let code: ContractCode = "  win g25 ".parse().unwrap();
        assert_eq!(code.acronym(), "WIN ");
        assert_eq!(code.due_date(), "G25");
    }
}
