//! Direct-addressed transposition table with depth-preferred replacement.

use crate::moves::types::Move;

/// How the stored score relates to the true score of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// PV node: score is exact.
    Exact,
    /// Fail-high: true score is at least the stored score.
    AtLeast,
    /// Fail-low: true score is at most the stored score.
    AtMost,
}

#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    pub hash: u64,
    pub depth: i32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Move,
}

const EMPTY_ENTRY: TtEntry = TtEntry {
    hash: 0,
    depth: 0,
    score: 0,
    bound: Bound::Exact,
    best_move: Move::NONE,
};

/// Fixed-size flat table indexed by `hash % size`. The full hash is kept in
/// each entry and checked on probe, so index collisions only cost a miss.
pub struct TranspositionTable {
    entries: Vec<TtEntry>,
}

impl TranspositionTable {
    /// Sizes the table from a megabyte budget.
    pub fn new(megabytes: usize) -> TranspositionTable {
        let entries = (megabytes.max(1) * (1 << 20)) / std::mem::size_of::<TtEntry>();
        TranspositionTable {
            entries: vec![EMPTY_ENTRY; entries],
        }
    }

    #[inline(always)]
    fn index(&self, hash: u64) -> usize {
        (hash % self.entries.len() as u64) as usize
    }

    /// Entry for `hash`, or `None` when the slot holds another position.
    #[inline(always)]
    pub fn probe(&self, hash: u64) -> Option<&TtEntry> {
        let entry = &self.entries[self.index(hash)];
        if entry.hash == hash { Some(entry) } else { None }
    }

    /// Replaces when the slot is empty, holds the same position, or holds a
    /// shallower search.
    pub fn store(&mut self, hash: u64, depth: i32, score: i32, bound: Bound, best_move: Move) {
        let idx = self.index(hash);
        let entry = &mut self.entries[idx];
        if entry.hash == 0 || entry.hash == hash || depth >= entry.depth {
            *entry = TtEntry {
                hash,
                depth,
                score,
                bound,
                best_move,
            };
        }
    }

    pub fn clear(&mut self) {
        self.entries.fill(EMPTY_ENTRY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_move() -> Move {
        use crate::board::Piece;
        use crate::moves::types::MoveFlag;
        use crate::square::Square;
        Move::new(
            Square::from_index(12),
            Square::from_index(28),
            Piece::WhitePawn,
            Piece::None,
            MoveFlag::DoublePush,
        )
    }

    #[test]
    fn store_then_probe_round_trips() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0xDEAD_BEEF, 5, 42, Bound::Exact, some_move());

        let entry = tt.probe(0xDEAD_BEEF).expect("stored entry");
        assert_eq!(entry.depth, 5);
        assert_eq!(entry.score, 42);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(entry.best_move, some_move());
    }

    #[test]
    fn probe_rejects_tag_mismatch() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0xDEAD_BEEF, 5, 42, Bound::Exact, some_move());
        assert!(tt.probe(0xBEEF_DEAD).is_none());
    }

    #[test]
    fn replacement_is_depth_preferred() {
        let mut tt = TranspositionTable::new(1);
        let a = 0xDEAD_BEEF_u64;
        // some other key landing on the same slot
        let entries = (1 << 20) / std::mem::size_of::<TtEntry>() as u64;
        let b = a + entries;

        tt.store(a, 8, 10, Bound::Exact, some_move());
        tt.store(b, 3, 20, Bound::AtLeast, Move::NONE);
        // shallow entry for a different key does not evict the deep one
        assert!(tt.probe(a).is_some());
        assert!(tt.probe(b).is_none());

        tt.store(b, 9, 20, Bound::AtLeast, Move::NONE);
        assert!(tt.probe(b).is_some());
        assert!(tt.probe(a).is_none());
    }

    #[test]
    fn same_key_always_refreshes() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 9, 1, Bound::Exact, some_move());
        tt.store(7, 2, -5, Bound::AtMost, Move::NONE);
        let entry = tt.probe(7).expect("refreshed entry");
        assert_eq!(entry.depth, 2);
        assert_eq!(entry.score, -5);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut tt = TranspositionTable::new(1);
        tt.store(7, 9, 1, Bound::Exact, some_move());
        tt.clear();
        assert!(tt.probe(7).is_none());
    }
}
