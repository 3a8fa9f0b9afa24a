pub mod temple;
pub mod time;

pub use temple::*;
pub use time::*;
