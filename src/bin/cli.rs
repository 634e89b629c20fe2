//! UCI shell: a line-oriented loop around the engine. Searches run on their
//! own thread so `stop` keeps working; the only cross-thread state shared
//! with the search is the atomic stop flag.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use sable::board::Position;
use sable::moves::movegen::generate_moves;
use sable::moves::perft::perft_divide;
use sable::moves::types::Move;
use sable::search::search::{MAX_DEPTH, SearchLimits, Searcher};

const TT_MEGABYTES: usize = 64;

fn main() {
    // attack and hash tables are built once, before the first search needs them
    sable::attacks::tables();
    sable::hash::zobrist::zobrist_keys();

    println!("Sable {}", env!("CARGO_PKG_VERSION"));
    let _ = io::stdout().flush();

    let searcher = Arc::new(Mutex::new(Searcher::new(TT_MEGABYTES)));
    let stop = searcher.lock().expect("searcher lock").stop_flag();
    let mut position = Position::startpos();
    let mut search_thread: Option<JoinHandle<()>> = None;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            continue;
        };

        match command {
            "uci" => {
                println!("id name Sable {}", env!("CARGO_PKG_VERSION"));
                println!("id author the Sable developers");
                println!("uciok");
            }
            "isready" => println!("readyok"),
            "ucinewgame" => {
                join_search(&stop, &mut search_thread);
                searcher.lock().expect("searcher lock").new_game();
            }
            "position" => {
                join_search(&stop, &mut search_thread);
                if let Err(err) = handle_position(&mut position, &tokens) {
                    println!("info string {err}");
                }
            }
            "go" => {
                join_search(&stop, &mut search_thread);
                let limits = parse_go(&tokens);
                let searcher = Arc::clone(&searcher);
                let mut pos = position.clone();
                search_thread = Some(std::thread::spawn(move || {
                    let best = searcher.lock().expect("searcher lock").go(&mut pos, limits);
                    println!("bestmove {best}");
                }));
            }
            "stop" => stop.store(true, Ordering::Relaxed),
            "quit" => break,
            "d" | "display" => println!("{position}"),
            "perft" => {
                join_search(&stop, &mut search_thread);
                let depth = tokens.get(1).and_then(|t| t.parse().ok()).unwrap_or(4);
                perft_divide(&mut position, depth);
            }
            // unknown commands and stray tokens are silently ignored
            _ => {}
        }
    }

    join_search(&stop, &mut search_thread);
}

fn join_search(stop: &Arc<AtomicBool>, thread: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = thread.take() {
        stop.store(true, Ordering::Relaxed);
        let _ = handle.join();
    }
}

/// `position startpos|fen <FEN> [moves m1 m2 ...]`. A bad move stops the
/// replay; everything played before it stays on the board.
fn handle_position(position: &mut Position, tokens: &[&str]) -> Result<(), String> {
    let mut rest = &tokens[1..];

    let mut pos = match rest.first() {
        Some(&"startpos") => {
            rest = &rest[1..];
            Position::startpos()
        }
        Some(&"fen") => {
            rest = &rest[1..];
            let end = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
            let parsed = Position::from_fen(&rest[..end].join(" "))?;
            rest = &rest[end..];
            parsed
        }
        _ => return Err("position needs startpos or fen".to_string()),
    };

    if rest.first() == Some(&"moves") {
        for &token in &rest[1..] {
            match parse_move(&pos, token) {
                Some(mv) => pos.make_move(mv),
                None => {
                    *position = pos;
                    return Err(format!("invalid move: {token}"));
                }
            }
        }
    }

    *position = pos;
    Ok(())
}

/// Resolves a long-algebraic token against the generated moves, so the flag
/// and captured fields come out right for free.
fn parse_move(pos: &Position, token: &str) -> Option<Move> {
    generate_moves(pos).iter().copied().find(|m| m.to_uci() == token)
}

fn parse_go(tokens: &[&str]) -> SearchLimits {
    let mut limits = SearchLimits::default();
    let mut iter = tokens.iter().skip(1);
    while let Some(&token) = iter.next() {
        match token {
            "depth" => {
                if let Some(depth) = iter.next().and_then(|t| t.parse().ok()) {
                    limits.depth = depth;
                }
            }
            "movetime" => {
                if let Some(ms) = iter.next().and_then(|t| t.parse().ok()) {
                    limits.move_time_ms = ms;
                }
            }
            "infinite" => {
                limits.depth = MAX_DEPTH as i32;
                limits.move_time_ms = 0;
            }
            _ => {}
        }
    }
    limits
}
