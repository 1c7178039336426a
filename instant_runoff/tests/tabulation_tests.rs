use instant_runoff::*;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ballots(specs: &[&[&str]]) -> Vec<Ballot> {
    specs.iter().map(|choices| Ballot::ranked(choices)).collect()
}

// A poll with k candidates c01..ck where candidate i holds i single-entry
// ballots. No candidate ever nears the majority threshold, so exactly one
// candidate is eliminated per round and the election takes k rounds.
fn staircase(k: u32) -> Vec<Ballot> {
    let mut res: Vec<Ballot> = Vec::new();
    for i in 1..=k {
        let name = format!("c{:02}", i);
        for _ in 0..i {
            res.push(Ballot::ranked(&[name.as_str()]));
        }
    }
    res
}

#[test]
fn empty_poll_has_no_winner_and_no_rounds() {
    init_logs();
    let res = calculate_winner(&[]).unwrap();
    assert_eq!(
        res,
        TallyResult {
            winner: None,
            threshold: 0,
            total_rounds: 0,
            round_stats: vec![],
        }
    );
}

#[test]
fn single_ballot_elects_its_first_choice() {
    init_logs();
    let res = calculate_winner(&ballots(&[&["Bob", "Alice", "Charlie"]])).unwrap();
    assert_eq!(
        res,
        TallyResult {
            winner: Some("Bob".to_string()),
            threshold: 1,
            total_rounds: 1,
            round_stats: vec![RoundStats {
                round: 1,
                tally: vec![("Bob".to_string(), 1)],
                eliminated: vec![],
            }],
        }
    );
}

#[test]
fn first_round_majority_wins_immediately() {
    init_logs();
    let res = calculate_winner(&ballots(&[
        &["Alice", "Bob", "Charlie"],
        &["Alice", "Charlie", "Bob"],
        &["Alice", "Bob", "Charlie"],
        &["Bob", "Alice", "Charlie"],
        &["Charlie", "Bob", "Alice"],
    ]))
    .unwrap();
    assert_eq!(res.winner, Some("Alice".to_string()));
    assert_eq!(res.threshold, 3);
    assert_eq!(res.total_rounds, 1);
    assert_eq!(
        res.round_stats,
        vec![RoundStats {
            round: 1,
            tally: vec![
                ("Alice".to_string(), 3),
                ("Bob".to_string(), 1),
                ("Charlie".to_string(), 1),
            ],
            eliminated: vec![],
        }]
    );
}

#[test]
fn transfers_produce_a_majority_after_one_elimination() {
    init_logs();
    let res = calculate_winner(&ballots(&[
        &["Alice", "Bob", "Charlie"],
        &["Alice", "Charlie", "Bob"],
        &["Bob", "Alice", "Charlie"],
        &["Charlie", "Alice", "Bob"],
        &["Charlie", "Bob", "Alice"],
    ]))
    .unwrap();
    assert_eq!(
        res,
        TallyResult {
            winner: Some("Alice".to_string()),
            threshold: 3,
            total_rounds: 2,
            round_stats: vec![
                RoundStats {
                    round: 1,
                    tally: vec![
                        ("Alice".to_string(), 2),
                        ("Bob".to_string(), 1),
                        ("Charlie".to_string(), 2),
                    ],
                    eliminated: vec!["Bob".to_string()],
                },
                RoundStats {
                    round: 2,
                    tally: vec![
                        ("Alice".to_string(), 3),
                        ("Charlie".to_string(), 2),
                    ],
                    eliminated: vec![],
                },
            ],
        }
    );
}

#[test]
fn all_candidates_tied_at_minimum_leave_together() {
    init_logs();
    let res = calculate_winner(&ballots(&[
        &["Alice"],
        &["Alice"],
        &["Bob"],
        &["Bob"],
        &["Charlie", "Alice"],
        &["Dave", "Alice"],
    ]))
    .unwrap();
    // Charlie and Dave both sit at one vote: one round removes both.
    assert_eq!(
        res.round_stats[0],
        RoundStats {
            round: 1,
            tally: vec![
                ("Alice".to_string(), 2),
                ("Bob".to_string(), 2),
                ("Charlie".to_string(), 1),
                ("Dave".to_string(), 1),
            ],
            eliminated: vec!["Charlie".to_string(), "Dave".to_string()],
        }
    );
    assert_eq!(res.winner, Some("Alice".to_string()));
    assert_eq!(res.threshold, 4);
    assert_eq!(res.total_rounds, 2);
    assert_eq!(
        res.round_stats[1].tally,
        vec![("Alice".to_string(), 4), ("Bob".to_string(), 2)]
    );
}

#[test]
fn candidate_without_first_preferences_can_still_win() {
    init_logs();
    let res = calculate_winner(&ballots(&[
        &["Alice", "Charlie"],
        &["Alice", "Charlie"],
        &["Bob", "Charlie"],
        &["Bob", "Charlie"],
    ]))
    .unwrap();
    // Charlie holds no votes in round 1 and is absent from its tally.
    assert_eq!(
        res.round_stats[0],
        RoundStats {
            round: 1,
            tally: vec![("Alice".to_string(), 2), ("Bob".to_string(), 2)],
            eliminated: vec!["Alice".to_string(), "Bob".to_string()],
        }
    );
    assert_eq!(res.winner, Some("Charlie".to_string()));
    assert_eq!(res.total_rounds, 2);
    assert_eq!(res.round_stats[1].tally, vec![("Charlie".to_string(), 4)]);
}

#[test]
fn exhausted_poll_ends_with_no_winner() {
    init_logs();
    let res = calculate_winner(&ballots(&[&["Alice"], &["Bob"]])).unwrap();
    assert_eq!(
        res,
        TallyResult {
            winner: None,
            threshold: 2,
            total_rounds: 2,
            round_stats: vec![
                RoundStats {
                    round: 1,
                    tally: vec![
                        ("Alice".to_string(), 1),
                        ("Bob".to_string(), 1),
                    ],
                    eliminated: vec!["Alice".to_string(), "Bob".to_string()],
                },
                RoundStats {
                    round: 2,
                    tally: vec![],
                    eliminated: vec![],
                },
            ],
        }
    );
}

#[test]
fn blank_ballots_exhaust_in_the_first_round() {
    init_logs();
    let res = calculate_winner(&ballots(&[&[], &[]])).unwrap();
    assert_eq!(res.winner, None);
    assert_eq!(res.total_rounds, 1);
    assert_eq!(
        res.round_stats,
        vec![RoundStats {
            round: 1,
            tally: vec![],
            eliminated: vec![],
        }]
    );
}

#[test]
fn incomplete_ballots_transfer_then_exhaust() {
    init_logs();
    let res = calculate_winner(&ballots(&[
        &["Alice", "Bob", "Charlie"],
        &["Bob"],
        &["Bob"],
        &["Charlie"],
        &["Charlie"],
    ]))
    .unwrap();
    assert_eq!(res.threshold, 3);
    assert_eq!(
        res.round_stats[0].eliminated,
        vec!["Alice".to_string()]
    );
    // Alice's ballot falls through to Bob, the single-entry ballots stay put.
    assert_eq!(
        res.round_stats[1].tally,
        vec![("Bob".to_string(), 3), ("Charlie".to_string(), 2)]
    );
    assert_eq!(res.winner, Some("Bob".to_string()));
}

#[test]
fn duplicate_entries_on_a_ballot_count_once() {
    init_logs();
    let res = calculate_winner(&ballots(&[
        &["Alice", "Alice", "Bob"],
        &["Bob", "Alice"],
        &["Bob"],
    ]))
    .unwrap();
    assert_eq!(
        res.round_stats[0].tally,
        vec![("Alice".to_string(), 1), ("Bob".to_string(), 2)]
    );
    assert_eq!(res.winner, Some("Bob".to_string()));
    assert_eq!(res.total_rounds, 1);
}

#[test]
fn repeated_runs_return_identical_results() {
    init_logs();
    let coll = ballots(&[
        &["Alice", "Bob", "Charlie"],
        &["Alice", "Charlie", "Bob"],
        &["Bob", "Alice", "Charlie"],
        &["Charlie", "Alice", "Bob"],
        &["Charlie", "Bob", "Alice"],
    ]);
    let first = calculate_winner(&coll).unwrap();
    for _ in 0..5 {
        assert_eq!(calculate_winner(&coll).unwrap(), first);
    }
}

#[test]
fn rounds_are_sequential_and_eliminations_accumulate() {
    init_logs();
    let coll = staircase(10);
    let total_ballots: u64 = coll.len() as u64;
    let res = calculate_winner(&coll).unwrap();
    assert_eq!(res.winner, Some("c10".to_string()));
    assert_eq!(res.total_rounds, 10);
    assert_eq!(res.total_rounds as usize, res.round_stats.len());

    let mut gone: Vec<String> = Vec::new();
    let mut prev_sum = total_ballots;
    for (idx, round) in res.round_stats.iter().enumerate() {
        assert_eq!(round.round, idx as u32 + 1);
        // Eliminated candidates never resurface in a later tally.
        for (name, _) in round.tally.iter() {
            assert!(!gone.contains(name));
        }
        let sum: u64 = round.tally.iter().map(|&(_, c)| c).sum();
        assert!(sum <= prev_sum);
        prev_sum = sum;
        gone.extend(round.eliminated.iter().cloned());
        assert_eq!(gone.len(), (idx + 1).min(9));
    }
}

#[test]
fn election_resolving_at_the_round_ceiling_succeeds() {
    init_logs();
    let res = calculate_winner(&staircase(50)).unwrap();
    assert_eq!(res.winner, Some("c50".to_string()));
    assert_eq!(res.total_rounds, MAX_ROUNDS);
}

#[test]
fn election_past_the_round_ceiling_aborts() {
    init_logs();
    let res = calculate_winner(&staircase(51));
    assert_eq!(res, Err(TabulationErrors::NoConvergence));
}
