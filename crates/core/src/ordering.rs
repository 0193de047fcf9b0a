//! Rank assignment for ordered collections.
//!
//! Categories are ranked globally, links are ranked within their parent
//! category. A caller may pick an explicit rank; anything `<= 0` means
//! "append", which places the new entry one past the current maximum of its
//! collection.

use crate::types::Rank;

/// Rank given to the first entry of an empty collection.
pub const FIRST_RANK: Rank = 1;

/// Resolve the rank to persist for a new entry.
///
/// `current_max` is the highest rank already present in the target
/// collection, or `None` when the collection is empty.
pub fn resolve_order(requested: Rank, current_max: Option<Rank>) -> Rank {
    if requested > 0 {
        return requested;
    }
    match current_max {
        Some(max) => max.saturating_add(1).max(FIRST_RANK),
        None => FIRST_RANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_rank_is_kept() {
        assert_eq!(resolve_order(7, Some(3)), 7);
        assert_eq!(resolve_order(1, None), 1);
    }

    #[test]
    fn empty_collection_starts_at_one() {
        assert_eq!(resolve_order(0, None), 1);
        assert_eq!(resolve_order(-5, None), 1);
    }

    #[test]
    fn append_goes_one_past_max() {
        assert_eq!(resolve_order(0, Some(1)), 2);
        assert_eq!(resolve_order(-1, Some(41)), 42);
    }

    #[test]
    fn append_after_non_positive_max_still_positive() {
        // Ranks written through update may be zero or negative.
        assert_eq!(resolve_order(0, Some(-10)), 1);
        assert_eq!(resolve_order(0, Some(0)), 1);
    }

    #[test]
    fn append_saturates_at_max_rank() {
        assert_eq!(resolve_order(0, Some(Rank::MAX)), Rank::MAX);
    }
}
