pub mod eval;
pub mod pst;
pub mod search;
pub mod tt;
