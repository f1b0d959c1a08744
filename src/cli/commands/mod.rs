pub mod dual;
pub mod pool;
pub mod worker;

pub use dual::*;
pub use pool::*;
pub use worker::*;
