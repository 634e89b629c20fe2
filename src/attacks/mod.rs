//! Precomputed attack tables: O(1) pseudo-legal attack lookups for every
//! (piece, square[, occupancy]) triple. Process-wide, built exactly once.

mod leapers;
pub mod magic;

use once_cell::sync::OnceCell;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bitboard::Bitboard;
use crate::board::Color;
use crate::square::Square;
use magic::MagicEntry;

// Fixed seed so the magic search, and therefore startup cost, is repeatable.
const MAGIC_SEED: u64 = 0x45;

#[cfg(feature = "load_magic")]
const MAGIC_CACHE: &str = "magic.bin";

pub struct AttackTables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
    bishop: Vec<MagicEntry>,
    rook: Vec<MagicEntry>,
}

impl AttackTables {
    fn with_sliders(bishop: Vec<MagicEntry>, rook: Vec<MagicEntry>) -> Self {
        debug_assert!(bishop.len() == 64 && rook.len() == 64);
        AttackTables {
            knight: leapers::build_knight_table(),
            king: leapers::build_king_table(),
            pawn: leapers::build_pawn_tables(),
            bishop,
            rook,
        }
    }

    fn build() -> Result<Self, String> {
        let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
        let bishop = (0..64u8)
            .map(|sq| magic::build_magic_entry(sq, magic::bishop_mask(sq), magic::raycast_bishop, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        let rook = (0..64u8)
            .map(|sq| magic::build_magic_entry(sq, magic::rook_mask(sq), magic::raycast_rook, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_sliders(bishop, rook))
    }

    #[inline(always)]
    pub fn knight(&self, square: Square) -> Bitboard {
        self.knight[square.index() as usize]
    }

    #[inline(always)]
    pub fn king(&self, square: Square) -> Bitboard {
        self.king[square.index() as usize]
    }

    /// Capture squares of a pawn of `color` standing on `square`.
    #[inline(always)]
    pub fn pawn(&self, color: Color, square: Square) -> Bitboard {
        self.pawn[color as usize][square.index() as usize]
    }

    #[inline(always)]
    pub fn bishop(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop[square.index() as usize].attacks(occupancy)
    }

    #[inline(always)]
    pub fn rook(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.rook[square.index() as usize].attacks(occupancy)
    }

    #[inline(always)]
    pub fn queen(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop(square, occupancy) | self.rook(square, occupancy)
    }
}

/// Global tables, built on first use.
pub fn tables() -> &'static AttackTables {
    static TABLES: OnceCell<AttackTables> = OnceCell::new();
    TABLES.get_or_init(load_or_build)
}

#[cfg(not(feature = "load_magic"))]
fn load_or_build() -> AttackTables {
    AttackTables::build().expect("slider attack table construction failed")
}

/// With `load_magic` the slider entries are cached on disk; the leaper
/// tables are cheap enough to rebuild every start.
#[cfg(feature = "load_magic")]
fn load_or_build() -> AttackTables {
    if let Ok(bytes) = std::fs::read(MAGIC_CACHE)
        && let Ok((bishop, rook)) = bincode::deserialize::<(Vec<MagicEntry>, Vec<MagicEntry>)>(&bytes)
        && bishop.len() == 64
        && rook.len() == 64
    {
        return AttackTables::with_sliders(bishop, rook);
    }

    let built = AttackTables::build().expect("slider attack table construction failed");
    if let Ok(bytes) = bincode::serialize(&(&built.bishop, &built.rook)) {
        let _ = std::fs::write(MAGIC_CACHE, bytes);
    }
    built
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn slider_lookups_match_raycast_on_random_occupancies() {
        let t = tables();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2_000 {
            let occupancy = rng.next_u64() & rng.next_u64();
            let square = (rng.next_u64() % 64) as u8;
            let sq = Square::from_index(square);
            assert_eq!(t.bishop(sq, occupancy), magic::raycast_bishop(square, occupancy));
            assert_eq!(t.rook(sq, occupancy), magic::raycast_rook(square, occupancy));
        }
    }

    #[test]
    fn queen_is_rook_union_bishop() {
        let t = tables();
        let occupancy = (1u64 << 35) | (1u64 << 21) | (1u64 << 41);
        let sq = Square::from_index(27);
        assert_eq!(t.queen(sq, occupancy), t.rook(sq, occupancy) | t.bishop(sq, occupancy));
    }

    #[test]
    fn pawn_lookup_sides_differ() {
        let t = tables();
        let e4 = Square::from_index(28);
        assert_eq!(t.pawn(Color::White, e4), (1u64 << 35) | (1u64 << 37));
        assert_eq!(t.pawn(Color::Black, e4), (1u64 << 19) | (1u64 << 21));
    }
}
