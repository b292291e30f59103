use promptcraft_boundary::{VoteCounts, VoteDirection};

/// The user's persisted vote on a single prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoteState {
    #[default]
    None,
    Voted(VoteDirection),
}

impl VoteState {
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Voted(VoteDirection::Up))
    }

    #[must_use]
    pub const fn is_down(self) -> bool {
        matches!(self, Self::Voted(VoteDirection::Down))
    }
}

/// The minimal vote-record mutation that persists a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOp {
    Upsert(VoteDirection),
    Delete,
}

/// Outcome of a vote action: the new aggregate counters, the new personal
/// vote state and the record mutation to issue.
///
/// The caller applies the personal state optimistically, issues the record
/// mutation followed by a counter update, and reverts to the previous state
/// if either remote call fails. No shared state is touched in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub counts: VoteCounts,
    pub vote: VoteState,
    pub record: RecordOp,
}

/// Computes the transition for a requested vote.
///
/// Every call changes something: repeating the current vote retracts it
/// (toggle-off), voting without a previous vote adds one, and voting the
/// opposite direction flips the record and redistributes one count.
/// Decrements saturate at zero; with consistent input counters the
/// saturation never engages.
#[must_use]
pub fn reconcile(
    counts: VoteCounts,
    previous: VoteState,
    requested: VoteDirection,
) -> Reconciliation {
    let VoteCounts { mut up, mut down } = counts;
    match previous {
        VoteState::Voted(current) if current == requested => {
            match requested {
                VoteDirection::Up => up = up.saturating_sub(1),
                VoteDirection::Down => down = down.saturating_sub(1),
            }
            Reconciliation {
                counts: VoteCounts { up, down },
                vote: VoteState::None,
                record: RecordOp::Delete,
            }
        }
        VoteState::Voted(current) => {
            match current {
                VoteDirection::Up => up = up.saturating_sub(1),
                VoteDirection::Down => down = down.saturating_sub(1),
            }
            match requested {
                VoteDirection::Up => up += 1,
                VoteDirection::Down => down += 1,
            }
            Reconciliation {
                counts: VoteCounts { up, down },
                vote: VoteState::Voted(requested),
                record: RecordOp::Upsert(requested),
            }
        }
        VoteState::None => {
            match requested {
                VoteDirection::Up => up += 1,
                VoteDirection::Down => down += 1,
            }
            Reconciliation {
                counts: VoteCounts { up, down },
                vote: VoteState::Voted(requested),
                record: RecordOp::Upsert(requested),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn counts(up: u64, down: u64) -> VoteCounts {
        VoteCounts { up, down }
    }

    #[test]
    fn new_upvote() {
        let res = reconcile(counts(3, 1), VoteState::None, VoteDirection::Up);
        assert_eq!(res.counts, counts(4, 1));
        assert_eq!(res.vote, VoteState::Voted(VoteDirection::Up));
        assert_eq!(res.record, RecordOp::Upsert(VoteDirection::Up));
    }

    #[test]
    fn new_downvote() {
        let res = reconcile(counts(3, 1), VoteState::None, VoteDirection::Down);
        assert_eq!(res.counts, counts(3, 2));
        assert_eq!(res.vote, VoteState::Voted(VoteDirection::Down));
        assert_eq!(res.record, RecordOp::Upsert(VoteDirection::Down));
    }

    #[test]
    fn toggle_off_upvote() {
        let res = reconcile(
            counts(4, 1),
            VoteState::Voted(VoteDirection::Up),
            VoteDirection::Up,
        );
        assert_eq!(res.counts, counts(3, 1));
        assert_eq!(res.vote, VoteState::None);
        assert_eq!(res.record, RecordOp::Delete);
    }

    #[test]
    fn toggle_off_downvote() {
        let res = reconcile(
            counts(0, 7),
            VoteState::Voted(VoteDirection::Down),
            VoteDirection::Down,
        );
        assert_eq!(res.counts, counts(0, 6));
        assert_eq!(res.vote, VoteState::None);
        assert_eq!(res.record, RecordOp::Delete);
    }

    #[test]
    fn flip_up_to_down() {
        let res = reconcile(
            counts(3, 1),
            VoteState::Voted(VoteDirection::Up),
            VoteDirection::Down,
        );
        assert_eq!(res.counts, counts(2, 2));
        assert_eq!(res.vote, VoteState::Voted(VoteDirection::Down));
        assert_eq!(res.record, RecordOp::Upsert(VoteDirection::Down));
    }

    #[test]
    fn flip_down_to_up() {
        let res = reconcile(
            counts(2, 2),
            VoteState::Voted(VoteDirection::Down),
            VoteDirection::Up,
        );
        assert_eq!(res.counts, counts(3, 1));
        assert_eq!(res.vote, VoteState::Voted(VoteDirection::Up));
        assert_eq!(res.record, RecordOp::Upsert(VoteDirection::Up));
    }

    #[test]
    fn no_transition_is_a_noop() {
        // every (previous, requested) pair changes either the counters or
        // the personal state
        for previous in [
            VoteState::None,
            VoteState::Voted(VoteDirection::Up),
            VoteState::Voted(VoteDirection::Down),
        ] {
            for requested in [VoteDirection::Up, VoteDirection::Down] {
                let res = reconcile(counts(5, 5), previous, requested);
                assert!(res.counts != counts(5, 5) || res.vote != previous);
            }
        }
    }

    #[test]
    fn total_changes_by_at_most_one() {
        for previous in [
            VoteState::None,
            VoteState::Voted(VoteDirection::Up),
            VoteState::Voted(VoteDirection::Down),
        ] {
            for requested in [VoteDirection::Up, VoteDirection::Down] {
                let before = counts(5, 5);
                let res = reconcile(before, previous, requested);
                let diff = i64::try_from(res.counts.up + res.counts.down).unwrap()
                    - i64::try_from(before.up + before.down).unwrap();
                let expected = match (previous, requested) {
                    (VoteState::None, _) => 1,
                    (VoteState::Voted(p), r) if p == r => -1,
                    _ => 0,
                };
                assert_eq!(diff, expected);
            }
        }
    }

    #[test]
    fn toggle_twice_equals_one_new_vote() {
        let initial = counts(3, 1);
        let first = reconcile(initial, VoteState::None, VoteDirection::Up);
        let second = reconcile(first.counts, first.vote, VoteDirection::Up);
        assert_eq!(second.counts, initial);
        assert_eq!(second.vote, VoteState::None);
        let third = reconcile(second.counts, second.vote, VoteDirection::Up);
        assert_eq!(third.counts, first.counts);
        assert_eq!(third.vote, first.vote);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        // drifted input: a recorded vote but zeroed counters
        let res = reconcile(
            counts(0, 0),
            VoteState::Voted(VoteDirection::Up),
            VoteDirection::Up,
        );
        assert_eq!(res.counts, counts(0, 0));
        assert_eq!(res.vote, VoteState::None);

        let res = reconcile(
            counts(0, 0),
            VoteState::Voted(VoteDirection::Up),
            VoteDirection::Down,
        );
        assert_eq!(res.counts, counts(0, 1));
        assert_eq!(res.vote, VoteState::Voted(VoteDirection::Down));
    }
}
