pub mod config;
pub mod fib;
pub mod report;
pub mod runner;
pub mod timer;

pub use fib::{fib, fib_checked, FibError};
pub use runner::Summary;
