use serde::Serialize;

/// Separator between the acronym and the description in a published name,
/// e.g. `DOL - Dólar comercial`.
const ACRONYM_SEPARATOR: char = '-';

/// One settlement row as published by the exchange. Prices, variation and
/// amounts keep their exact textual form (comma decimal separator included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commodity {
    pub name: String,
    pub due_date: String,
    pub previous_adjustment_price: String,
    pub current_adjustment_price: String,
    pub variation: String,
    pub contract_adjustment_amount: String,
}

impl Commodity {
    pub fn new(
        name: String,
        due_date: String,
        previous_adjustment_price: String,
        current_adjustment_price: String,
        variation: String,
        contract_adjustment_amount: String,
    ) -> Self {
        Self {
            name,
            due_date,
            previous_adjustment_price,
            current_adjustment_price,
            variation,
            contract_adjustment_amount,
        }
    }

    /// Trimmed prefix of the name before the first `-`, or the whole name.
    pub fn acronym(&self) -> &str {
        match self.name.split_once(ACRONYM_SEPARATOR) {
            Some((prefix, _)) => prefix.trim(),
            None => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Commodity {
        Commodity::new(
            name.into(),
            "N20".into(),
            "5.000,00".into(),
            "5.010,00".into(),
            "0,20".into(),
            "500,00".into(),
        )
    }

    #[test]
    fn test_acronym_before_separator() {
        assert_eq!(named("DOL - Dólar comercial").acronym(), "DOL");
        assert_eq!(named("  IND  -Ibovespa").acronym(), "IND");
    }

    #[test]
    fn test_acronym_uses_first_separator() {
        assert_eq!(named("DI1 - DI de 1 dia - taxa").acronym(), "DI1");
    }

    #[test]
    fn test_acronym_without_separator_is_name() {
        assert_eq!(named("OZ1").acronym(), "OZ1");
    }

    #[test]
    fn test_acronym_is_idempotent() {
        let c = named("WIN - Mini Ibovespa");
        assert_eq!(c.acronym(), c.acronym());
    }
}
