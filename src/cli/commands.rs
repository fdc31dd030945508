//! Command implementation for the combindex CLI.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::CombindexArgs;
use crate::cli::output::{SearchResults, output_results};
use crate::error::Result;
use crate::index::{CombinationIndex, IndexConfig};
use crate::query::Query;

/// Execute the CLI: index the input entries, then run the query.
pub fn execute_command(args: CombindexArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.input {
        Some(path) => {
            info!("Reading entries from: {}", path.display());
            let file = File::open(path)?;
            run(BufReader::new(file), &mut out, &args)
        }
        None => run(io::stdin().lock(), &mut out, &args),
    }
}

/// Index the entries of `reader` and write the query results to `writer`.
///
/// The query words are validated before any input is read.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W, args: &CombindexArgs) -> Result<()> {
    let query = Query::parse(&args.words)?;

    let index = build_index(reader, args.index_config())?;

    let start_time = Instant::now();
    let ids = index.search(&query);
    info!("Found {} entries in {:?}", ids.len(), start_time.elapsed());

    let results = SearchResults::collect(&index, &query, &ids)?;
    output_results(writer, &results, args)?;
    writer.flush()?;

    Ok(())
}

/// Build an index with one entry per line of `reader`.
///
/// Line terminators (`\n` or `\r\n`) are removed; everything else on the
/// line is kept verbatim. Bytes that are not valid UTF-8 are replaced with
/// `U+FFFD` so one bad line never stops the run.
pub fn build_index<R: BufRead>(mut reader: R, config: IndexConfig) -> Result<CombinationIndex> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(line) => line.to_string(),
            Cow::Owned(line) => {
                warn!("line {} is not valid UTF-8, invalid bytes replaced", lines.len() + 1);
                line
            }
        };
        lines.push(line);
    }

    let mut index = CombinationIndex::with_config(config);
    index.add_batch(lines);

    let stats = index.stats();
    info!(
        "Index built: {} entries, {} word-set keys, {} postings",
        stats.entries, stats.keys, stats.postings
    );

    Ok(index)
}
