//! Static rule tables shared by the segmentation engine
//!
//! Each table is an immutable lookup structure built once and shared
//! read-only; none of them retain per-call state.

pub mod abbreviation;
pub mod clause;
pub mod enclosure;
pub mod terminator;

pub use abbreviation::AbbrevTable;
pub use clause::ClauseTable;
pub use enclosure::CloserTable;
pub use terminator::TermTable;
