//! Majority arithmetic over the current voter count.
//!
//! A majority is strictly more than half of the voters, with integer
//! truncation: 1 of 1, 2 of 2, 2 of 3, 3 of 4, 3 of 5.

/// Minimum number of votes that constitutes a majority of `voters`.
///
/// `threshold(0) == 1`: nothing is a majority of an empty set.
pub fn threshold(voters: u32) -> u32 {
    voters / 2 + 1
}

/// Whether `votes` is a majority of `voters`.
pub fn is_majority(votes: u32, voters: u32) -> bool {
    votes >= threshold(voters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_voter_counts() {
        assert_eq!(threshold(0), 1);
        assert_eq!(threshold(1), 1);
        assert_eq!(threshold(2), 2);
        assert_eq!(threshold(3), 2);
        assert_eq!(threshold(4), 3);
        assert_eq!(threshold(5), 3);
    }

    #[test]
    fn zero_votes_never_a_majority() {
        assert!(!is_majority(0, 0));
        assert!(!is_majority(0, 1));
    }

    #[test]
    fn single_voter_is_its_own_majority() {
        assert!(is_majority(1, 1));
    }

    #[test]
    fn half_is_not_a_majority() {
        assert!(!is_majority(1, 2));
        assert!(!is_majority(2, 4));
        assert!(is_majority(3, 4));
    }

    #[test]
    fn no_overflow_at_u32_max() {
        assert_eq!(threshold(u32::MAX), u32::MAX / 2 + 1);
        assert!(is_majority(u32::MAX, u32::MAX));
    }
}
