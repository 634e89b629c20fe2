//! Pseudo-legal move enumeration. Generated moves obey piece movement rules
//! but may leave the mover's king in check; search filters those by making
//! the move and testing the king.

use crate::attacks;
use crate::bitboard::{BitboardExt, FILE_A, FILE_H, RANK_1, RANK_2, RANK_7, RANK_8};
use crate::board::{Color, Piece, Position};
use crate::moves::types::{Move, MoveFlag, MoveList};
use crate::square::Square;

const PROMOTION_FLAGS: [MoveFlag; 4] = [
    MoveFlag::PromoKnight,
    MoveFlag::PromoBishop,
    MoveFlag::PromoRook,
    MoveFlag::PromoQueen,
];

/// All pseudo-legal moves for the side to move.
pub fn generate_moves(pos: &Position) -> MoveList {
    let mut list = MoveList::new();
    generate_pawn_moves(pos, &mut list);
    generate_knight_moves(pos, &mut list);
    generate_bishop_moves(pos, &mut list);
    generate_rook_moves(pos, &mut list);
    generate_queen_moves(pos, &mut list);
    generate_king_moves(pos, &mut list);
    list
}

/// Emits one move per set bit in `targets`, reading captures off the mailbox.
#[inline(always)]
fn push_targets(pos: &Position, from: Square, mut targets: u64, moved: Piece, list: &mut MoveList) {
    while targets != 0 {
        let to = Square::from_index(targets.pop_lsb());
        list.push(Move::new(from, to, moved, pos.piece_at(to), MoveFlag::Normal));
    }
}

pub fn generate_pawn_moves(pos: &Position, list: &mut MoveList) {
    let us = pos.game_info.side_to_move;
    let pawn = Piece::pawn(us);
    let pawns = pos.get_bitboard(pawn);
    let empty = !pos.occupied();
    let enemy = pos.color_occupancy(us.opposite());

    // forward shifts; captures split into the two diagonals so the file
    // masks keep a/h-file pawns on the board
    let (singles, doubles, caps_west, caps_east, promo_rank) = match us {
        Color::White => (
            pawns << 8 & empty,
            ((pawns & RANK_2) << 8 & empty) << 8 & empty,
            (pawns & !FILE_A) << 7 & enemy,
            (pawns & !FILE_H) << 9 & enemy,
            RANK_8,
        ),
        Color::Black => (
            pawns >> 8 & empty,
            ((pawns & RANK_7) >> 8 & empty) >> 8 & empty,
            (pawns & !FILE_H) >> 7 & enemy,
            (pawns & !FILE_A) >> 9 & enemy,
            RANK_1,
        ),
    };
    // source offset for each target set above, from the mover's view
    let (single_back, double_back, west_back, east_back): (i8, i8, i8, i8) = match us {
        Color::White => (-8, -16, -7, -9),
        Color::Black => (8, 16, 7, 9),
    };

    let from_of = |to: Square, back: i8| Square::from_index((to.index() as i8 + back) as u8);

    let mut quiets = singles & !promo_rank;
    while quiets != 0 {
        let to = Square::from_index(quiets.pop_lsb());
        list.push(Move::new(from_of(to, single_back), to, pawn, Piece::None, MoveFlag::Normal));
    }

    let mut promo_pushes = singles & promo_rank;
    while promo_pushes != 0 {
        let to = Square::from_index(promo_pushes.pop_lsb());
        let from = from_of(to, single_back);
        for flag in PROMOTION_FLAGS {
            list.push(Move::new(from, to, pawn, Piece::None, flag));
        }
    }

    let mut dbl = doubles;
    while dbl != 0 {
        let to = Square::from_index(dbl.pop_lsb());
        list.push(Move::new(from_of(to, double_back), to, pawn, Piece::None, MoveFlag::DoublePush));
    }

    for (mut caps, back) in [(caps_west, west_back), (caps_east, east_back)] {
        while caps != 0 {
            let to = Square::from_index(caps.pop_lsb());
            let from = from_of(to, back);
            let captured = pos.piece_at(to);
            if to.bb() & promo_rank != 0 {
                for flag in PROMOTION_FLAGS {
                    list.push(Move::new(from, to, pawn, captured, flag));
                }
            } else {
                list.push(Move::new(from, to, pawn, captured, MoveFlag::Normal));
            }
        }
    }

    if let Some(ep) = pos.game_info.ep_square {
        // our pawns able to capture onto the ep square sit exactly on the
        // squares a pawn of the other color would attack from there
        let mut attackers = attacks::tables().pawn(us.opposite(), ep) & pawns;
        while attackers != 0 {
            let from = Square::from_index(attackers.pop_lsb());
            list.push(Move::new(from, ep, pawn, Piece::pawn(us.opposite()), MoveFlag::EnPassant));
        }
    }
}

pub fn generate_knight_moves(pos: &Position, list: &mut MoveList) {
    let us = pos.game_info.side_to_move;
    let knight = Piece::knight(us);
    let own = pos.color_occupancy(us);
    let t = attacks::tables();

    let mut knights = pos.get_bitboard(knight);
    while knights != 0 {
        let from = Square::from_index(knights.pop_lsb());
        push_targets(pos, from, t.knight(from) & !own, knight, list);
    }
}

pub fn generate_bishop_moves(pos: &Position, list: &mut MoveList) {
    let us = pos.game_info.side_to_move;
    let bishop = Piece::bishop(us);
    let own = pos.color_occupancy(us);
    let t = attacks::tables();

    let mut bishops = pos.get_bitboard(bishop);
    while bishops != 0 {
        let from = Square::from_index(bishops.pop_lsb());
        push_targets(pos, from, t.bishop(from, pos.occupied()) & !own, bishop, list);
    }
}

pub fn generate_rook_moves(pos: &Position, list: &mut MoveList) {
    let us = pos.game_info.side_to_move;
    let rook = Piece::rook(us);
    let own = pos.color_occupancy(us);
    let t = attacks::tables();

    let mut rooks = pos.get_bitboard(rook);
    while rooks != 0 {
        let from = Square::from_index(rooks.pop_lsb());
        push_targets(pos, from, t.rook(from, pos.occupied()) & !own, rook, list);
    }
}

pub fn generate_queen_moves(pos: &Position, list: &mut MoveList) {
    let us = pos.game_info.side_to_move;
    let queen = Piece::queen(us);
    let own = pos.color_occupancy(us);
    let t = attacks::tables();

    let mut queens = pos.get_bitboard(queen);
    while queens != 0 {
        let from = Square::from_index(queens.pop_lsb());
        push_targets(pos, from, t.queen(from, pos.occupied()) & !own, queen, list);
    }
}

pub fn generate_king_moves(pos: &Position, list: &mut MoveList) {
    let us = pos.game_info.side_to_move;
    let king = Piece::king(us);
    let own = pos.color_occupancy(us);
    let from = pos.king_square(us);

    push_targets(pos, from, attacks::tables().king(from) & !own, king, list);

    if pos.can_castle_ks(us) {
        let to = Square::from_index(from.index() + 2);
        list.push(Move::new(from, to, king, Piece::None, MoveFlag::Castling));
    }
    if pos.can_castle_qs(us) {
        let to = Square::from_index(from.index() - 2);
        list.push(Move::new(from, to, king, Piece::None, MoveFlag::Castling));
    }
}
