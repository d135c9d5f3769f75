use crate::application::snapshot_cache::SnapshotCache;
use crate::domain::entities::commodity::Commodity;
use crate::domain::error::{DomainError, NotFound};
use crate::domain::values::contract_code::ContractCode;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Default spot ("disponível") gold codes. They are quoted on the spot
/// market and never appear in the futures settlement table.
pub const DEFAULT_SPOT_MARKET_CODES: [&str; 3] = ["OZ1D", "OZ2D", "OZ3D"];

pub struct LookupUseCase {
    cache: Arc<SnapshotCache>,
    spot_market_codes: Vec<String>,
}

impl LookupUseCase {
    pub fn new(cache: Arc<SnapshotCache>, spot_market_codes: Vec<String>) -> Self {
        Self {
            cache,
            spot_market_codes: spot_market_codes
                .into_iter()
                .map(|c| c.trim().to_uppercase())
                .collect(),
        }
    }

    /// Distinct commodity names of the current snapshot, ascending.
    pub async fn list_names(&self) -> Result<Vec<String>, DomainError> {
        let snapshot = self.cache.get_snapshot().await?;
        Ok(distinct_names(&snapshot.commodities))
    }

    /// Every record whose acronym and due date match `code`.
    ///
    /// The code is validated before the cache is touched, so a malformed
    /// code never triggers a fetch.
    pub async fn lookup(&self, code: &str) -> Result<Vec<Commodity>, DomainError> {
        let code: ContractCode = code.parse()?;
        let snapshot = self.cache.get_snapshot().await?;

        let matches = find_matches(&snapshot.commodities, &code);
        if matches.is_empty() {
            return Err(self.not_found(&code).into());
        }
        Ok(matches)
    }

    fn not_found(&self, code: &ContractCode) -> NotFound {
        if self.spot_market_codes.iter().any(|c| c == code.as_str()) {
            NotFound::SpotMarket {
                code: code.as_str().to_string(),
            }
        } else {
            NotFound::Contract {
                acronym: code.acronym().to_string(),
                due_date: code.due_date().to_string(),
            }
        }
    }
}

pub fn distinct_names(commodities: &[Commodity]) -> Vec<String> {
    commodities
        .iter()
        .map(|c| c.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn find_matches(commodities: &[Commodity], code: &ContractCode) -> Vec<Commodity> {
    commodities
        .iter()
        .filter(|c| c.acronym() == code.acronym() && c.due_date == code.due_date())
        .cloned()
        .collect()
}
