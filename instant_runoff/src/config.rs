// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// Hard ceiling on the number of counting rounds.
///
/// Every non-terminal round removes at least one candidate, so a tabulation
/// that runs past this many rounds indicates a defect in the elimination
/// logic rather than a legitimately large poll.
pub const MAX_ROUNDS: u32 = 50;

/// One voter's ranked preferences, most preferred first.
///
/// A ballot may omit candidates or contain no entry at all. Entries are
/// opaque identifiers: the tabulator does not check them against a declared
/// candidate roster, and a candidate listed twice is only counted at its
/// highest still-active position.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Ballot {
    pub choices: Vec<String>,
}

impl Ballot {
    /// Convenience constructor for literal preference lists.
    pub fn ranked(choices: &[&str]) -> Ballot {
        Ballot {
            choices: choices.iter().map(|c| c.to_string()).collect(),
        }
    }
}

// ******** Output data structures *********

/// Statistics for one counting round.
///
/// `tally` holds every candidate that received at least one vote this round,
/// in the order in which they received their first vote of the round.
/// `eliminated` lists the candidates removed at the end of the round; it is
/// empty for the terminal round.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RoundStats {
    pub round: u32,
    pub tally: Vec<(String, u64)>,
    pub eliminated: Vec<String>,
}

/// The outcome of a tabulation.
///
/// `winner` is `None` when the poll had no ballots or when every ballot ran
/// out of active preferences before a winner emerged. Invariant:
/// `total_rounds == round_stats.len() as u32`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TallyResult {
    pub winner: Option<String>,
    pub threshold: u64,
    pub total_rounds: u32,
    pub round_stats: Vec<RoundStats>,
}

/// Errors that prevent the tabulation from completing successfully.
///
/// Degenerate inputs (no ballots, empty or partial ballots, ties) are valid
/// and produce a defined result, never an error.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum TabulationErrors {
    /// The counting ran past [`MAX_ROUNDS`] rounds.
    NoConvergence,
}

impl Error for TabulationErrors {}

impl Display for TabulationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabulationErrors::NoConvergence => {
                write!(f, "tabulation did not converge within {} rounds", MAX_ROUNDS)
            }
        }
    }
}
