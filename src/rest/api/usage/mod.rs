//! Account usage: records and the triggers that watch them.

pub mod record;
pub mod trigger;
