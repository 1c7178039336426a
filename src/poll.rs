use log::{debug, info, warn};

use instant_runoff::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;

pub mod io_csv;
pub mod io_json;

#[derive(Debug, Snafu)]
pub enum PollError {
    #[snafu(display("Error opening file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display(""))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error reading CSV line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Unknown input type {input_type}"))]
    UnknownInputType { input_type: String },
    #[snafu(display(""))]
    Tabulation { source: TabulationErrors },
    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},
    #[snafu(display("Error writing summary to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
}

pub type PollResult<T> = Result<T, PollError>;

/// A poll, as parsed by the readers: a display name and the full ballot set.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedPoll {
    pub name: String,
    pub ballots: Vec<Ballot>,
}

pub fn run_tabulation(args: &Args) -> PollResult<()> {
    let input_type = args
        .input_type
        .clone()
        .unwrap_or_else(|| guess_input_type(args.input.as_str()));
    let poll = match input_type.as_str() {
        "json" => io_json::read_poll(args.input.clone())?,
        "csv" => io_csv::read_poll(args.input.clone())?,
        x => {
            return UnknownInputTypeSnafu {
                input_type: x.to_string(),
            }
            .fail()
        }
    };
    info!(
        "Tabulating poll {:?}: {:?} ballots",
        poll.name,
        poll.ballots.len()
    );

    let result = calculate_winner(&poll.ballots).context(TabulationSnafu {})?;
    debug!("run_tabulation: result {:?}", result);

    let summary = build_summary_js(poll.name.as_str(), &result);
    let pretty_js_stats = serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?;
    write_summary(&args.out, pretty_js_stats.as_str())?;

    // The reference summary, if provided for comparison
    if let Some(summary_p) = args.reference.clone() {
        let summary_ref = io_json::read_summary(summary_p)?;
        check_against_reference(&summary_ref, &summary)?;
    }

    Ok(())
}

fn build_summary_js(poll_name: &str, result: &TallyResult) -> JSValue {
    let mut rounds: Vec<JSValue> = Vec::new();
    for round_stat in result.round_stats.iter() {
        let mut tally: JSMap<String, JSValue> = JSMap::new();
        for (name, count) in round_stat.tally.iter() {
            tally.insert(name.clone(), json!(count));
        }
        let eliminated: Vec<JSValue> = round_stat
            .eliminated
            .iter()
            .map(|name| json!(name))
            .collect();
        rounds.push(json!({
            "round": round_stat.round,
            "tally": tally,
            "eliminated": eliminated
        }));
    }
    json!({
        "pollName": poll_name,
        "winner": result.winner,
        "threshold": result.threshold,
        "totalRounds": result.total_rounds,
        "results": rounds
    })
}

fn write_summary(out: &Option<String>, pretty_js_stats: &str) -> PollResult<()> {
    match out {
        Some(path) if path != "stdout" => {
            fs::write(path, pretty_js_stats).context(WritingOutputSnafu { path: path.clone() })?;
            info!("Summary written to {:?}", path);
        }
        _ => {
            println!("{}", pretty_js_stats);
        }
    }
    Ok(())
}

// Both documents are normalized through serde_json before the comparison, so
// key order and whitespace differences between the two tabulators do not
// register as mismatches.
fn check_against_reference(reference: &JSValue, computed: &JSValue) -> PollResult<()> {
    let pretty_ref = serde_json::to_string_pretty(reference).context(ParsingJsonSnafu {})?;
    let pretty_stats = serde_json::to_string_pretty(computed).context(ParsingJsonSnafu {})?;
    if pretty_ref != pretty_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_ref.as_str(), pretty_stats.as_str(), "\n");
        return ReferenceMismatchSnafu {}.fail();
    }
    info!("Tabulated summary matches the reference summary");
    Ok(())
}

fn guess_input_type(path: &str) -> String {
    if path.ends_with(".csv") {
        "csv".to_string()
    } else {
        "json".to_string()
    }
}

fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string()
}
