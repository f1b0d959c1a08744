pub mod cli;
pub mod core;
pub mod demos;
pub mod pool;
pub mod process;
pub mod reporting;
pub mod tasks;
