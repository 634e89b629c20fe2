//! Forsyth-Edwards notation parsing and emission.

use super::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, GameInfo, Piece, Position};
use crate::square::Square;

impl Position {
    /// Builds a position from the six standard FEN fields. Trailing fields
    /// may be omitted and default to `w`, `-`, `-`, `0`, `1`. Errors leave
    /// no half-built state behind; the caller's position is untouched.
    pub fn from_fen(fen: &str) -> Result<Position, String> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or("empty FEN")?;

        let mut pos = Position::empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!("expected 8 ranks, got {}", ranks.len()));
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let piece = Piece::from_char(c)
                        .ok_or_else(|| format!("bad piece char {c:?} in rank {}", rank + 1))?;
                    if file > 7 {
                        return Err(format!("rank {} overflows the board", rank + 1));
                    }
                    pos.set_square(Square::from_coords(rank, file), piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(format!("rank {} covers {file} files", rank + 1));
            }
        }

        let side_to_move = match fields.next().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("bad side to move {other:?}")),
        };

        let mut castling = 0u8;
        let castling_str = fields.next().unwrap_or("-");
        if castling_str != "-" {
            for c in castling_str.chars() {
                castling |= match c {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    _ => return Err(format!("bad castling field {castling_str:?}")),
                };
            }
        }

        let ep_square = match fields.next().unwrap_or("-") {
            "-" => None,
            sq => Some(sq.parse::<Square>()?),
        };

        let rule_50_clock = match fields.next() {
            None => 0,
            Some(s) => s
                .parse::<u8>()
                .map_err(|_| format!("bad half-move clock {s:?}"))?,
        };

        // full-move number is accepted but not tracked
        if let Some(s) = fields.next() {
            s.parse::<u32>()
                .map_err(|_| format!("bad full-move number {s:?}"))?;
        }

        pos.game_info = GameInfo {
            side_to_move,
            castling,
            ep_square,
            rule_50_clock,
        };
        pos.hash = pos.compute_hash_full();
        Ok(pos)
    }

    /// Replaces this position wholesale; on error the position is unchanged.
    pub fn parse_fen(&mut self, fen: &str) -> Result<(), String> {
        *self = Position::from_fen(fen)?;
        Ok(())
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let piece = self.piece_at(Square::from_coords(rank, file));
                if piece == Piece::None {
                    empty_run += 1;
                } else {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece.to_char());
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.game_info.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.game_info.castling == 0 {
            out.push('-');
        } else {
            for (bit, c) in [
                (CASTLE_WK, 'K'),
                (CASTLE_WQ, 'Q'),
                (CASTLE_BK, 'k'),
                (CASTLE_BQ, 'q'),
            ] {
                if self.game_info.castling & bit != 0 {
                    out.push(c);
                }
            }
        }

        match self.game_info.ep_square {
            Some(sq) => out.push_str(&format!(" {sq}")),
            None => out.push_str(" -"),
        }

        out.push_str(&format!(
            " {} {}",
            self.game_info.rule_50_clock,
            1 + self.ply_count() / 2
        ));
        out
    }
}
