//! CLI commands for waypath

pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod neighbors;
pub mod search;
pub mod shortest;
