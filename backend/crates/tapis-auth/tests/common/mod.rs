#![allow(dead_code)]

mod test_bridge;
mod test_db;

pub use test_bridge::*;
pub use test_db::*;
