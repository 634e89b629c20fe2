use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random 64-bit keys for Zobrist hashing. A position's signature is the XOR
/// of the piece key for every occupied (piece, square), the castling key for
/// the current rights mask, the en-passant key for the current ep square (if
/// any), and `white_to_move` when White has the move.
pub struct ZobristKeys {
    /// [piece 0..12][square], white pieces 0..6, black 6..12
    pub pieces: [[u64; 64]; 12],
    /// Indexed by the full 4-bit castling-rights mask.
    pub castling: [u64; 16],
    /// Indexed by the en-passant target square.
    pub en_passant: [u64; 64],
    pub white_to_move: u64,
}

// Fixed seed: hashes stay stable across runs, so transposition tables and
// logged signatures are comparable between sessions.
const ZOBRIST_SEED: u64 = 6767;

/// Global keys, generated on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| generate_keys(StdRng::seed_from_u64(ZOBRIST_SEED)))
}

fn generate_keys(mut rng: StdRng) -> ZobristKeys {
    // avoid zero keys so no toggle can be a no-op
    let mut non_zero = move || loop {
        let v = rng.next_u64();
        if v != 0 {
            return v;
        }
    };

    let mut keys = ZobristKeys {
        pieces: [[0; 64]; 12],
        castling: [0; 16],
        en_passant: [0; 64],
        white_to_move: 0,
    };

    for piece in 0..12 {
        for square in 0..64 {
            keys.pieces[piece][square] = non_zero();
        }
    }
    for mask in 0..16 {
        keys.castling[mask] = non_zero();
    }
    for square in 0..64 {
        keys.en_passant[square] = non_zero();
    }
    keys.white_to_move = non_zero();

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_stable_and_nonzero() {
        let a = zobrist_keys();
        let b = zobrist_keys();
        assert!(std::ptr::eq(a, b));
        assert_ne!(a.white_to_move, 0);
        assert!(a.pieces.iter().flatten().all(|&k| k != 0));
        assert!(a.castling.iter().all(|&k| k != 0));
        assert!(a.en_passant.iter().all(|&k| k != 0));
    }

    #[test]
    fn no_trivial_collisions_between_piece_keys() {
        let keys = zobrist_keys();
        let mut seen = std::collections::HashSet::new();
        for piece in 0..12 {
            for square in 0..64 {
                assert!(seen.insert(keys.pieces[piece][square]));
            }
        }
    }
}
