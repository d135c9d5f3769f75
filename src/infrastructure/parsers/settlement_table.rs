//! HTML parser for the "ajustes do pregão" table.
//!
//! The exchange prints a commodity name only on the first of its rows; the
//! following rows (one per due date) leave the name cell empty. `fold_rows`
//! threads the active name through the row sequence to undo that grouping.

use crate::domain::entities::commodity::Commodity;
use crate::domain::error::ParseError;
use crate::domain::ports::table_parser::TableParser;
use encoding_rs::{UTF_8, WINDOWS_1252};
use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;

pub const DEFAULT_TABLE_ID: &str = "tblDadosAjustes";

/// Cells per row: name, due date, previous price, current price, variation, amount.
const CELLS_PER_ROW: usize = 6;

pub struct HtmlTableParser {
    table_id: String,
}

impl Default for HtmlTableParser {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_ID)
    }
}

impl HtmlTableParser {
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
        }
    }

    /// Cell texts of every body row, in document order. Rows without any
    /// element cell come back as empty vectors.
    fn extract_rows(&self, markup: &str) -> Result<Vec<Vec<String>>, ParseError> {
        let document = Html::parse_document(markup);
        let selector = Selector::parse("table").map_err(|e| ParseError::Selector(e.to_string()))?;

        // compare the attribute directly: ids such as "1tbl" are not valid CSS
        let table = document
            .select(&selector)
            .find(|el| el.value().id() == Some(self.table_id.as_str()))
            .ok_or_else(|| ParseError::TableNotFound(self.table_id.clone()))?;

        let body = child_elements(table, "tbody")
            .next()
            .ok_or_else(|| ParseError::MissingBody(self.table_id.clone()))?;

        Ok(child_elements(body, "tr")
            .map(|tr| {
                tr.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|cell| matches!(cell.value().name(), "td" | "th"))
                    .map(|cell| cell.text().collect::<String>())
                    .collect()
            })
            .collect())
    }
}

impl TableParser for HtmlTableParser {
    fn parse(&self, raw: &[u8]) -> Result<Vec<Commodity>, ParseError> {
        let markup = decode(raw);
        let rows = self.extract_rows(&markup)?;
        fold_rows(rows)
    }
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

/// The exchange serves Latin-1 pages; accept UTF-8 when it is valid.
fn decode(raw: &[u8]) -> Cow<'_, str> {
    match UTF_8.decode_without_bom_handling_and_without_replacement(raw) {
        Some(text) => text,
        None => WINDOWS_1252.decode(raw).0,
    }
}

/// Convert body rows into records, carrying the last non-empty name forward.
///
/// `rows[i]` is the text of each cell in row `i`; rows with no cells are
/// skipped. Row indexes in errors refer to positions in `rows`.
pub fn fold_rows<I>(rows: I) -> Result<Vec<Commodity>, ParseError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    rows.into_iter()
        .enumerate()
        .filter(|(_, cells)| !cells.is_empty())
        .try_fold(
            (None::<String>, Vec::new()),
            |(active, mut records), (row, cells)| {
                let commodity = row_to_commodity(row, active.as_deref(), &cells)?;
                let active = Some(commodity.name.clone());
                records.push(commodity);
                Ok::<_, ParseError>((active, records))
            },
        )
        .map(|(_, records)| records)
}

fn row_to_commodity(
    row: usize,
    active_name: Option<&str>,
    cells: &[String],
) -> Result<Commodity, ParseError> {
    if cells.len() < CELLS_PER_ROW {
        return Err(ParseError::ShortRow {
            row,
            found: cells.len(),
        });
    }

    let name = match cells[0].trim() {
        "" => active_name.ok_or(ParseError::MissingName { row })?,
        own => own,
    };

    let due_date = cells[1].trim();
    if due_date.is_empty() {
        return Err(ParseError::EmptyDueDate { row });
    }

    Ok(Commodity::new(
        name.to_string(),
        due_date.to_string(),
        cells[2].trim().to_string(),
        cells[3].trim().to_string(),
        cells[4].trim().to_string(),
        cells[5].trim().to_string(),
    ))
}
