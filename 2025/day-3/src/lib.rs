pub mod aggregate;
pub mod bank;
pub mod error;
pub mod numeric;
pub mod part1;
pub mod part2;
pub mod selector;
