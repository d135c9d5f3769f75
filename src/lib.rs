pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::dispatch::DispatchUseCase;
use crate::application::lookup::LookupUseCase;
use crate::application::snapshot_cache::SnapshotCache;
use crate::config::Settings;
use crate::domain::entities::commodity::Commodity;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::table_parser::TableParser;
use crate::domain::ports::table_source::TableSource;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::feeds::b3::B3SettlementFeed;
use crate::infrastructure::parsers::settlement_table::HtmlTableParser;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub struct Ajustes {
    cache: Arc<SnapshotCache>,
    lookup_uc: Arc<LookupUseCase>,
    dispatch_uc: DispatchUseCase,
}

impl Ajustes {
    /// Wire the live B3 feed, HTML parser and system clock.
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        let source: Arc<dyn TableSource> = Arc::new(B3SettlementFeed::new(
            settings.endpoint_url.clone(),
            settings.request_timeout,
        )?);
        let parser: Arc<dyn TableParser> = Arc::new(HtmlTableParser::new(settings.table_id.clone()));

        Ok(Self::with_providers(source, parser, Arc::new(SystemClock), settings))
    }

    pub fn with_providers(
        source: Arc<dyn TableSource>,
        parser: Arc<dyn TableParser>,
        clock: Arc<dyn Clock>,
        settings: &Settings,
    ) -> Self {
        let cache = Arc::new(SnapshotCache::new(source, parser, clock, settings.cache_ttl));
        let lookup_uc = Arc::new(LookupUseCase::new(
            cache.clone(),
            settings.spot_market_codes.clone(),
        ));

        Self {
            dispatch_uc: DispatchUseCase::new(lookup_uc.clone()),
            lookup_uc,
            cache,
        }
    }

    // Delegating methods
    pub async fn list_names(&self) -> Result<Vec<String>, DomainError> {
        self.lookup_uc.list_names().await
    }

    pub async fn lookup(&self, code: &str) -> Result<Vec<Commodity>, DomainError> {
        self.lookup_uc.lookup(code).await
    }

    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, DomainError> {
        self.cache.get_snapshot().await
    }

    pub async fn refresh(&self) {
        self.cache.invalidate().await
    }

    /// Replies for one chat message such as `/ajuste DOLN20`.
    pub async fn handle(&self, text: &str) -> Vec<String> {
        self.dispatch_uc.handle(text).await
    }

    /// Answer chat commands read line by line from `input`, writing each
    /// reply followed by a blank line. Returns the number of lines handled;
    /// a read error (e.g. invalid UTF-8) ends the session with that error.
    pub async fn chat<R, W>(&self, input: R, mut output: W) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut handled = 0;
        while let Some(line) = lines.next_line().await? {
            for reply in self.handle(&line).await {
                output.write_all(format!("{reply}\n\n").as_bytes()).await?;
            }
            output.flush().await?;
            handled += 1;
        }
        Ok(handled)
    }
}
