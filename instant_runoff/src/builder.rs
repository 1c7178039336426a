pub use crate::config::*;
use crate::calculate_winner;

/// A builder for collecting ballots before a tabulation.
///
/// Callers that stream ballots out of storage can feed them one at a time
/// instead of materializing the whole set up front.
///
/// ```
/// use instant_runoff::builder::Builder;
/// # use instant_runoff::TabulationErrors;
///
/// let mut builder = Builder::new();
/// builder.add_ballot_simple(&["Anna".to_string(), "Bob".to_string()])?;
/// builder.add_ballot_simple(&["Anna".to_string()])?;
///
/// let result = builder.tally()?;
/// assert_eq!(result.winner, Some("Anna".to_string()));
///
/// # Ok::<(), TabulationErrors>(())
/// ```
#[derive(Default)]
pub struct Builder {
    pub(crate) _ballots: Vec<Ballot>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _ballots: Vec::new(),
        }
    }

    /// Adds one ballot from raw choice strings.
    ///
    /// Blank entries are dropped: a voter that skipped a rank simply has a
    /// shorter ballot. Choices do not need to be distinct or non-empty.
    pub fn add_ballot_simple(&mut self, choices: &[String]) -> Result<(), TabulationErrors> {
        let filtered: Vec<String> = choices
            .iter()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect();
        self.add_ballot(&Ballot { choices: filtered })
    }

    /// Adds one ballot as-is, without any filtering.
    pub fn add_ballot(&mut self, ballot: &Ballot) -> Result<(), TabulationErrors> {
        self._ballots.push(ballot.clone());
        Ok(())
    }

    /// Runs the tabulation over the ballots collected so far.
    pub fn tally(&self) -> Result<TallyResult, TabulationErrors> {
        calculate_winner(&self._ballots)
    }
}
