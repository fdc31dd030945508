//! Integration tests for the CLI driver reading entries from files

use std::fs::File;
use std::io::{BufReader, Write};

use clap::Parser;
use combindex::cli::args::CombindexArgs;
use combindex::cli::commands::{build_index, run};
use combindex::prelude::*;
use tempfile::TempDir;

#[test]
fn test_index_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tweets.txt");

    let mut file = File::create(&path)?;
    writeln!(file, "Learning python on linux.")?;
    writeln!(file, "linux, windows, mac")?;
    writeln!(file, "python: the good parts")?;
    drop(file);

    let index = build_index(BufReader::new(File::open(&path)?), IndexConfig::default())?;
    assert_eq!(index.len(), 3);

    let query = Query::parse(["linux", "-windows"])?;
    assert_eq!(index.search(&query), vec![0]);

    let query = Query::parse(["python"])?;
    assert_eq!(index.search(&query), vec![0, 2]);

    Ok(())
}

#[test]
fn test_run_from_file_json() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("entries.txt");
    std::fs::write(&path, "python linux server\nwindows server only\n")?;

    let args = CombindexArgs::try_parse_from([
        "combindex",
        "--format",
        "json",
        "--input",
        path.to_str().unwrap(),
        "server",
        "-linux",
    ])
    .unwrap();

    let mut out = Vec::new();
    run(BufReader::new(File::open(&path)?), &mut out, &args)?;

    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(value["total_hits"], 1);
    assert_eq!(value["hits"][0]["text"], "windows server only");
    assert_eq!(value["query"]["negative"][0], "linux");

    Ok(())
}
