//! Output formatting for CLI results.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{CombindexArgs, OutputFormat};
use crate::error::Result;
use crate::index::{CombinationIndex, EntryId, IndexStats};
use crate::query::Query;

/// Label printed before every matching entry in human output.
pub const ENTRY_FOUND_LABEL: &str = "Entry found: ";

/// A matching entry.
#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub id: EntryId,
    pub text: &'a str,
}

/// Result structure for a query run.
#[derive(Debug, Serialize)]
pub struct SearchResults<'a> {
    pub query: &'a Query,
    pub total_hits: usize,
    pub hits: Vec<SearchHit<'a>>,
    pub stats: IndexStats,
}

impl<'a> SearchResults<'a> {
    /// Resolve hit ids back to their entry text.
    pub fn collect(index: &'a CombinationIndex, query: &'a Query, ids: &[EntryId]) -> Result<Self> {
        let hits = ids
            .iter()
            .map(|&id| -> Result<SearchHit<'a>> {
                Ok(SearchHit {
                    id,
                    text: index.entry(id)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchResults {
            query,
            total_hits: hits.len(),
            hits,
            stats: index.stats(),
        })
    }
}

/// Write results in the format selected by `args`.
pub fn output_results<W: Write>(
    writer: &mut W,
    results: &SearchResults<'_>,
    args: &CombindexArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(writer, results),
        OutputFormat::Json => output_json(writer, results, args.pretty),
    }
}

fn output_human<W: Write>(writer: &mut W, results: &SearchResults<'_>) -> Result<()> {
    for hit in &results.hits {
        writeln!(writer, "{ENTRY_FOUND_LABEL}{}", hit.text)?;
    }
    Ok(())
}

fn output_json<W: Write>(writer: &mut W, results: &SearchResults<'_>, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, results)?;
    } else {
        serde_json::to_writer(&mut *writer, results)?;
    }
    writeln!(writer)?;
    Ok(())
}
