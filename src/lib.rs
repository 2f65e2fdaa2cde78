// Rush-hour style sliding-vehicle puzzle engine.
// A 6x6 grid holds cars (length 2) and trucks (length 3) that slide along
// their own axis. The search module answers how many single-cell slides it
// takes to drive the target vehicle off its exit edge.

pub mod console_interface;
pub mod core;
pub mod models;
pub mod search;
mod test;
