// Primitives for reading CSV ballot files.

use std::fs::File;
use std::io;

use crate::poll::*;

/// Reads a CSV file in which every row is one ballot, ranked left to right.
///
/// There is no header row. Rows may have different lengths (incomplete
/// ballots) and blank cells are skipped.
pub fn read_poll(path: String) -> PollResult<ParsedPoll> {
    let f = File::open(path.clone()).context(OpeningFileSnafu {
        path: path.clone(),
    })?;
    let ballots = read_ballots(f)?;
    Ok(ParsedPoll {
        name: simplify_file_name(path.as_str()),
        ballots,
    })
}

pub fn read_ballots<R: io::Read>(rdr: R) -> PollResult<Vec<Ballot>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut res: Vec<Ballot> = Vec::new();
    for (idx, line_r) in reader.into_records().enumerate() {
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("read_ballots: lineno: {:?} row: {:?}", lineno, line);
        let choices: Vec<String> = line
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        res.push(Ballot { choices });
    }
    Ok(res)
}
