/*!

This is the long-form manual for `instant_runoff` and `polltally`.

## Counting rules

The engine runs an instant-runoff tabulation over the full ballot set of one
poll:

1. Every ballot awards one vote to its highest-ranked candidate that has not
   been eliminated. A ballot whose listed candidates are all eliminated (or
   that lists none) is exhausted and awards nothing for that round.
2. The majority threshold is half the original ballot count plus one. It is
   captured once at the start: exhausted ballots keep counting towards the
   bar a winner must clear.
3. A candidate wins by reaching the threshold, or by being the only candidate
   still holding votes. If every ballot is exhausted before that happens, the
   poll ends with no winner.
4. Otherwise, **every** candidate tied at the round's minimum is eliminated
   at once and the next round starts. This batch rule deviates from
   single-elimination variants of instant-runoff: it shortens elections with
   many trailing candidates, and it means a round can eliminate the entire
   remaining field when all of them tie.

Two notable consequences of these rules:

* A candidate that received no first-preference votes does not appear in the
  early round tallies, but can still collect transfers later and win.
* The outcome only depends on the ballots and their order of submission. Two
  independent implementations fed the same ballot list must produce the same
  winner, the same number of rounds and the same per-round tallies and
  eliminations; `polltally --reference` checks exactly that.

The counting is capped at 50 rounds. Reaching the cap aborts the tabulation
with an error instead of looping.

## Input formats

The following formats are supported:
* `json` a poll description with its ballots
* `csv` one ballot per row

### `json`

```text
{
  "pollName": "Lunch place",
  "candidates": ["Alice", "Bob", "Charlie"],
  "ballots": [
    ["Alice", "Bob", "Charlie"],
    ["Bob"],
    ["Charlie", "Alice"]
  ]
}
```

`pollName` and `candidates` are optional. The declared candidates are only
reported in the logs: a declared candidate that never appears on a ballot is
not part of the tabulation. Blank entries inside a ballot are dropped.

### `csv`

Each row is one ballot and each column (in order) is a choice. There is no
header row. Rows may have different lengths; blank cells are skipped.

```text
Alice,Bob,Charlie
Bob
Charlie,,Alice
```

## Checking against another tabulator

The summary written by `--out` contains the winner, the winning threshold,
the number of rounds and the per-round tallies and eliminations. When
`--reference` points at a summary produced by an independent implementation,
`polltally` normalizes both documents and fails with a printed diff on any
mismatch. This is the recommended way to validate a second tabulator, for
example one implemented inside the ballot store.

 */
