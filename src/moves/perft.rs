//! Perft: counts leaf nodes of the pseudo-legal move tree filtered by
//! "king not left in check". Cross-checks the generator and make/undo.

use tracing::{debug, instrument};

use crate::board::Position;
use crate::moves::movegen::generate_moves;

#[instrument(skip(pos), fields(depth))]
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    perft_inner(pos, depth)
}

fn perft_inner(pos: &mut Position, depth: u32) -> u64 {
    let moves = generate_moves(pos);
    let us = pos.game_info.side_to_move;
    let mut nodes = 0;

    for &mv in moves.iter() {
        pos.make_move(mv);
        if !pos.is_in_check(us) {
            nodes += if depth == 1 {
                1
            } else {
                perft_inner(pos, depth - 1)
            };
        }
        pos.undo_move();
    }

    nodes
}

/// Perft split by root move, printed one line per move. Returns the total.
#[instrument(skip(pos), fields(depth))]
pub fn perft_divide(pos: &mut Position, depth: u32) -> u64 {
    let moves = generate_moves(pos);
    let us = pos.game_info.side_to_move;
    let mut total = 0;

    for &mv in moves.iter() {
        pos.make_move(mv);
        if !pos.is_in_check(us) {
            let nodes = if depth <= 1 {
                1
            } else {
                perft_inner(pos, depth - 1)
            };
            debug!(%mv, nodes, "divide: root child");
            println!("{mv}: {nodes}");
            total += nodes;
        }
        pos.undo_move();
    }

    println!("Total: {total}");
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_zero_is_one() {
        let mut pos = Position::startpos();
        assert_eq!(perft(&mut pos, 0), 1);
    }

    #[test]
    fn perft_leaves_the_position_unchanged() {
        let mut pos = Position::startpos();
        let before = pos.clone();
        perft(&mut pos, 3);
        assert_eq!(pos, before);
    }
}
