// Reading polls and reference summaries from JSON files.

use serde::{Deserialize, Serialize};

use crate::poll::*;

/// The on-disk description of a poll.
///
/// `candidates` holds the roster declared when the poll was created. It is
/// only reported in the logs: a declared candidate that never appears on a
/// ballot is not part of the tabulation.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PollFile {
    #[serde(rename = "pollName")]
    pub poll_name: Option<String>,
    pub candidates: Option<Vec<String>>,
    pub ballots: Vec<Vec<String>>,
}

pub fn read_poll(path: String) -> PollResult<ParsedPoll> {
    let contents = fs::read_to_string(path.clone()).context(OpeningFileSnafu {
        path: path.clone(),
    })?;
    parse_poll(contents.as_str(), simplify_file_name(path.as_str()))
}

pub fn parse_poll(contents: &str, default_name: String) -> PollResult<ParsedPoll> {
    let pf: PollFile = serde_json::from_str(contents).context(ParsingJsonSnafu {})?;
    if let Some(candidates) = &pf.candidates {
        for name in candidates.iter() {
            info!("Declared candidate: {}", name);
        }
    }
    let ballots: Vec<Ballot> = pf
        .ballots
        .iter()
        .map(|choices| Ballot {
            // A blank entry is a skipped rank, not a candidate.
            choices: choices.iter().filter(|c| !c.is_empty()).cloned().collect(),
        })
        .collect();
    debug!("parse_poll: {:?} ballots", ballots.len());
    Ok(ParsedPoll {
        name: pf.poll_name.unwrap_or(default_name),
        ballots,
    })
}

pub fn read_summary(path: String) -> PollResult<JSValue> {
    let contents = fs::read_to_string(path.clone()).context(OpeningFileSnafu {
        path,
    })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
