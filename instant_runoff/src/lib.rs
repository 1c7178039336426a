mod config;
pub mod builder;
pub mod manual;

use log::{debug, info};

use std::{
    collections::{HashMap, HashSet},
    ops::AddAssign,
};

pub use crate::config::*;

// **** Private structures ****

type RoundId = u32;

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
struct CandidateId(u32);

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct VoteCount(u64);

impl VoteCount {
    const EMPTY: VoteCount = VoteCount(0);
    const UNIT: VoteCount = VoteCount(1);
}

impl std::iter::Sum for VoteCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        VoteCount(iter.map(|vc| vc.0).sum())
    }
}

impl AddAssign for VoteCount {
    fn add_assign(&mut self, rhs: VoteCount) {
        self.0 += rhs.0;
    }
}

// A ballot with its preferences interned to dense candidate identifiers.
// Preferences keep the submission order, duplicates included.
#[derive(Eq, PartialEq, Debug, Clone)]
struct RankedBallot {
    prefs: Vec<CandidateId>,
}

/// Runs the instant-runoff tabulation over the full ballot set of one poll.
///
/// Each round awards every ballot to its highest-ranked candidate that has
/// not been eliminated yet; ballots with no active candidate left are
/// exhausted and award nothing. A candidate wins by reaching the majority
/// threshold (half the original ballot count plus one, fixed at the start)
/// or by being the only candidate still holding votes. Otherwise every
/// candidate tied at the round's minimum is eliminated at once and the next
/// round starts.
///
/// The outcome is deterministic in the ballot order: the counts of a round
/// are kept in the order candidates first received a vote that round, and
/// that order resolves the (arbitrary, documented) winner tie-break.
///
/// An empty ballot set returns immediately with no winner and no rounds.
/// The only failure is [`TabulationErrors::NoConvergence`] when the counting
/// runs past [`MAX_ROUNDS`] rounds.
pub fn calculate_winner(ballots: &[Ballot]) -> Result<TallyResult, TabulationErrors> {
    info!("calculate_winner: processing {:?} ballots", ballots.len());
    if ballots.is_empty() {
        return Ok(TallyResult {
            winner: None,
            threshold: 0,
            total_rounds: 0,
            round_stats: Vec::new(),
        });
    }

    let (names, ranked) = intern_ballots(ballots);
    for (idx, name) in names.iter().enumerate() {
        info!("Candidate: {}: {}", idx + 1, name);
    }

    // Captured once from the original ballot count, never recomputed:
    // exhausted ballots keep counting towards the bar a winner must clear.
    let threshold = majority_threshold(VoteCount(ballots.len() as u64));
    debug!("calculate_winner: majority threshold: {:?}", threshold);

    let mut eliminated: HashSet<CandidateId> = HashSet::new();
    let mut round_stats: Vec<RoundStats> = Vec::new();

    for round_id in 1..=MAX_ROUNDS {
        let tally = compute_tally(&ranked, &eliminated);
        let active_votes: VoteCount = tally.iter().map(|&(_, vc)| vc).sum();
        debug!(
            "round {:?} tally: {:?} ({:?} active votes)",
            round_id, tally, active_votes.0
        );

        if tally.is_empty() {
            // Every ballot has run out of active preferences.
            info!("Round {:?}: all ballots exhausted, no winner", round_id);
            round_stats.push(public_round(round_id, &tally, &[], &names));
            return Ok(TallyResult {
                winner: None,
                threshold: threshold.0,
                total_rounds: round_id,
                round_stats,
            });
        }

        let max_votes: VoteCount = tally.iter().map(|&(_, vc)| vc).max().unwrap();
        if max_votes >= threshold || tally.len() == 1 {
            // First candidate at the maximum, in count order.
            let winner = tally
                .iter()
                .find(|&&(_, vc)| vc == max_votes)
                .map(|&(cid, _)| names[cid.0 as usize].clone());
            info!(
                "Round {:?}: winner {:?} with {:?} votes (threshold {:?})",
                round_id, winner, max_votes.0, threshold.0
            );
            round_stats.push(public_round(round_id, &tally, &[], &names));
            return Ok(TallyResult {
                winner,
                threshold: threshold.0,
                total_rounds: round_id,
                round_stats,
            });
        }

        let min_votes: VoteCount = tally.iter().map(|&(_, vc)| vc).min().unwrap();
        let lowest: Vec<CandidateId> = tally
            .iter()
            .filter(|&&(_, vc)| vc == min_votes)
            .map(|&(cid, _)| cid)
            .collect();
        info!(
            "Round {:?}: eliminating {:?} candidate(s) at {:?} votes",
            round_id,
            lowest.len(),
            min_votes.0
        );
        eliminated.extend(lowest.iter().cloned());
        round_stats.push(public_round(round_id, &tally, &lowest, &names));
    }
    Err(TabulationErrors::NoConvergence)
}

fn majority_threshold(total_ballots: VoteCount) -> VoteCount {
    VoteCount((total_ballots.0 / 2) + 1)
}

// Candidates are numbered in order of first appearance across the ballots.
fn intern_ballots(ballots: &[Ballot]) -> (Vec<String>, Vec<RankedBallot>) {
    let mut names: Vec<String> = Vec::new();
    let mut ids: HashMap<String, CandidateId> = HashMap::new();
    let mut res: Vec<RankedBallot> = Vec::new();
    for ballot in ballots.iter() {
        let mut prefs: Vec<CandidateId> = Vec::new();
        for choice in ballot.choices.iter() {
            let next_id = CandidateId(names.len() as u32);
            let cid = *ids.entry(choice.clone()).or_insert_with(|| {
                names.push(choice.clone());
                next_id
            });
            prefs.push(cid);
        }
        res.push(RankedBallot { prefs });
    }
    (names, res)
}

// Counts one round. The result only contains candidates with at least one
// vote, in the order they received their first vote of the round.
fn compute_tally(
    ballots: &[RankedBallot],
    eliminated: &HashSet<CandidateId>,
) -> Vec<(CandidateId, VoteCount)> {
    let mut order: Vec<CandidateId> = Vec::new();
    let mut counts: HashMap<CandidateId, VoteCount> = HashMap::new();
    for ballot in ballots.iter() {
        // The highest still-active preference takes the ballot's vote.
        // An exhausted ballot awards nothing this round.
        if let Some(&cid) = ballot.prefs.iter().find(|cid| !eliminated.contains(*cid)) {
            let entry = counts.entry(cid).or_insert_with(|| {
                order.push(cid);
                VoteCount::EMPTY
            });
            *entry += VoteCount::UNIT;
        }
    }
    order.iter().map(|cid| (*cid, counts[cid])).collect()
}

fn public_round(
    round: RoundId,
    tally: &[(CandidateId, VoteCount)],
    eliminated: &[CandidateId],
    names: &[String],
) -> RoundStats {
    RoundStats {
        round,
        tally: tally
            .iter()
            .map(|&(cid, vc)| (names[cid.0 as usize].clone(), vc.0))
            .collect(),
        eliminated: eliminated
            .iter()
            .map(|&cid| names[cid.0 as usize].clone())
            .collect(),
    }
}
