use crate::domain::entities::commodity::Commodity;
use crate::domain::error::ParseError;

/// Turns raw settlement markup into records, preserving row order.
pub trait TableParser: Send + Sync {
    fn parse(&self, raw: &[u8]) -> Result<Vec<Commodity>, ParseError>;
}
