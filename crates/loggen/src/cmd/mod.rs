//! Command implementations for the loggen CLI

pub mod list;
pub mod pri;
pub mod send;
