pub mod calculator;
pub mod import;
pub mod log;
pub mod logic;
