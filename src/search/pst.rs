//! Handcrafted piece-square tables, indexed with a1 = 0 from White's side;
//! Black reads them mirrored as `63 - square`. Pawn and king tables come in
//! middlegame/endgame pairs and are blended by the game phase.

#[rustfmt::skip]
pub const PAWN_MG: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-30,-30, 10, 10,  5,
     5,  0,-10,  0,  0,-10,  0,  5,
     0,  0, 10, 30, 30, 10,  0,  0,
     5,  5, 10, 30, 30, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 55, 55, 55, 55, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
pub const PAWN_EG: [i32; 64] = [
     0,  0,  0,   0,   0,  0,  0,  0,
     0,  0,  0,   0,   0,  0,  0,  0,
    10, 15, 20,  25,  25, 20, 15, 10,
    20, 30, 35,  40,  40, 35, 30, 20,
    30, 45, 55,  60,  60, 55, 45, 30,
    50, 60, 75,  90,  90, 75, 60, 50,
    75, 80, 90, 120, 120, 90, 80, 75,
     0,  0,  0,   0,   0,  0,  0,  0,
];

#[rustfmt::skip]
pub const KNIGHT: [i32; 64] = [
    -30,-30,-10,  0,  0,-10,-30,-30,
    -20,-10,  0,  5,  5,  0,-10,-20,
    -10,  0, 15, 10, 10, 20,  0,-10,
    -10,  5, 10, 25, 25, 10,  5,-10,
    -10,  5, 10, 25, 25, 10,  5,-10,
    -10,  0, 15, 10, 10, 15,  0,-10,
    -20,-10,  0,  5,  5,  0,-10,-20,
    -30,-20,-10,  0,  0,-10,-20,-30,
];

#[rustfmt::skip]
pub const BISHOP: [i32; 64] = [
    -30,-20,-10,  0,  0,-10,-20,-30,
    -20,-10,  0,  5,  5,  0,-10,-20,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5, 10, 25, 25, 10,  5,-10,
    -10,  5, 10, 25, 25, 10,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -20,-10,  0,  5,  5,  0,-10,-20,
    -30,-20,-10,  0,  0,-10,-20,-30,
];

#[rustfmt::skip]
pub const ROOK: [i32; 64] = [
    0,  0,  5, 10, 10,  5,  0,  0,
    0,  0,  5, 10, 10,  5,  0,  0,
    0,  0,  5, 10, 10,  5,  0,  0,
    0,  0,  5, 10, 10,  5,  0,  0,
    0,  0,  5, 10, 10,  5,  0,  0,
    0,  0,  5, 10, 10,  5,  0,  0,
    5,  5, 10, 15, 15, 10,  5,  5,
    0,  0,  5, 10, 10,  5,  0,  0,
];

#[rustfmt::skip]
pub const QUEEN: [i32; 64] = [
    -20,-10,-10,  0,  0,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,-10,  5,  5,-10,  0,-10,
     -5,  0,  5, 10, 10,  5,  0, -5,
      0,  0,  5, 10, 10,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10,  0, -5,-10,-10,-20,
];

#[rustfmt::skip]
pub const KING_MG: [i32; 64] = [
    -20,   10,    0,  -20,  -20,    0,  10, -20,
    -30,  -40,  -40,  -60,  -60,  -40, -40, -30,
    -50,  -60,  -75,  -90,  -90,  -75, -60, -50,
    -50,  -60,  -90,  -90,  -90,  -90, -60, -50,
    -60,  -75,  -90, -120, -120,  -90, -75, -60,
    -70,  -75, -100, -150, -150, -100, -75, -70,
    -70,  -75, -100, -150, -150, -100, -75, -70,
    -80, -100, -120, -150, -150, -120, -100, -80,
];

#[rustfmt::skip]
pub const KING_EG: [i32; 64] = [
    -50, -30, -20, -10, -10, -20, -30, -50,
    -30, -10,   0,  10,  10,   0, -10, -30,
    -20,   0,  20,  30,  30,  20,   0, -20,
    -10,   0,  20,  50,  50,  20,   0, -10,
    -10,   0,  20,  50,  50,  20,   0, -10,
      0,  10,  20,  20,  20,  20,  10,   0,
      0,   0,  10,  10,  10,  10,   0,   0,
    -10,  -5,   0,   0,   0,   0,  -5, -10,
];
