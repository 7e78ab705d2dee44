//! Programmable chat.

pub mod role;
pub mod user;
