use sable::board::Position;
use sable::logger::init_logging;
use sable::moves::perft::perft;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POS3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn run(fen: &str, depth: u32, expected: u64) {
    init_logging("logs/perft.log", "info");
    let mut pos = Position::from_fen(fen).expect("valid FEN");
    let nodes = perft(&mut pos, depth);
    assert_eq!(nodes, expected, "perft({depth}) of {fen}: got {nodes}, expected {expected}");
}

#[test]
fn startpos_d1() {
    run(sable::board::START_FEN, 1, 20);
}

#[test]
fn startpos_d2() {
    run(sable::board::START_FEN, 2, 400);
}

#[test]
fn startpos_d3() {
    run(sable::board::START_FEN, 3, 8_902);
}

#[test]
fn startpos_d4() {
    run(sable::board::START_FEN, 4, 197_281);
}

// deep nodes are opt-in on CI
#[test]
#[ignore]
fn startpos_d5() {
    run(sable::board::START_FEN, 5, 4_865_609);
}

#[test]
fn kiwipete_d1() {
    run(KIWIPETE, 1, 48);
}

#[test]
fn kiwipete_d2() {
    run(KIWIPETE, 2, 2_039);
}

#[test]
fn kiwipete_d3() {
    run(KIWIPETE, 3, 97_862);
}

#[test]
#[ignore]
fn kiwipete_d4() {
    run(KIWIPETE, 4, 4_085_603);
}

#[test]
fn pos3_d1() {
    run(POS3, 1, 14);
}

#[test]
fn pos3_d2() {
    run(POS3, 2, 191);
}

#[test]
fn pos3_d3() {
    run(POS3, 3, 2_812);
}

#[test]
fn pos3_d4() {
    run(POS3, 4, 43_238);
}

#[test]
#[ignore]
fn pos3_d5() {
    run(POS3, 5, 674_624);
}

// promotion corner that has caught generators before: the push must split
// into four moves and the checking promotions must restrict the replies
#[test]
fn promotion_position_d1() {
    run("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", 1, 9);
}

#[test]
fn promotion_position_d2() {
    run("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", 2, 41);
}
