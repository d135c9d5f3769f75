//! Shared test helpers.
#![allow(dead_code)]

use ajustes::config::Settings;
use ajustes::domain::error::FetchError;
use ajustes::domain::ports::clock::Clock;
use ajustes::domain::ports::table_source::TableSource;
use ajustes::infrastructure::parsers::settlement_table::HtmlTableParser;
use ajustes::Ajustes;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2020, 6, 15, 18, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Source that replays scripted responses and counts calls. Once the
/// script runs out, the last response is repeated.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Vec<u8>, FetchError>>>,
    last: Mutex<Option<Result<Vec<u8>, FetchError>>>,
    calls: AtomicUsize,
    delay: std::time::Duration,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<Vec<u8>, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            delay: std::time::Duration::ZERO,
        }
    }

    pub fn serving(html: &str) -> Self {
        Self::new(vec![Ok(html.as_bytes().to_vec())])
    }

    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_raw_table(&self) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.responses.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(next) = next {
            *last = Some(next);
        }
        last.clone()
            .unwrap_or_else(|| Err(FetchError::Network("no scripted response".into())))
    }
}

/// Settlement page with the given body rows (6 cells each).
pub fn settlement_html(rows: &[[&str; 6]]) -> String {
    let body: String = rows
        .iter()
        .map(|cells| {
            let tds: String = cells.iter().map(|c| format!("<td>{c}</td>\n")).collect();
            format!("<tr>\n{tds}</tr>\n")
        })
        .collect();

    format!(
        "<html><body>\n\
         <table id=\"tblDadosAjustes\">\n\
         <thead><tr><th>Mercadoria</th><th>Vct</th><th>Preço de ajuste anterior</th>\
         <th>Preço de ajuste Atual</th><th>Variação</th><th>Valor do ajuste por contrato (R$)</th></tr></thead>\n\
         <tbody>\n{body}</tbody>\n\
         </table>\n\
         </body></html>"
    )
}

pub fn sample_html() -> String {
    settlement_html(&[
        ["DOL - Dólar comercial", "N20", "5.328,5280", "5.303,9010", "-24,6270", "-1.231,35"],
        ["", "Q20", "5.346,1210", "5.320,5490", "-25,5720", "-1.278,60"],
        ["IND - Ibovespa", "Q20", "96.876", "97.761", "885", "885,00"],
        ["OZ1 - Ouro físico", "N20", "294,500", "296,000", "1,500", "375,00"],
    ])
}

pub fn setup_with(source: Arc<ScriptedSource>, clock: Arc<ManualClock>) -> Ajustes {
    Ajustes::with_providers(
        source,
        Arc::new(HtmlTableParser::default()),
        clock,
        &Settings::default(),
    )
}

pub fn setup() -> (Ajustes, Arc<ScriptedSource>) {
    let source = Arc::new(ScriptedSource::serving(&sample_html()));
    (setup_with(source.clone(), Arc::new(ManualClock::new())), source)
}
