pub mod error;
pub mod filter;
pub mod load;
pub mod pipeline;
pub mod reshape;
pub mod table;

pub use error::{CleanError, Result};
pub use pipeline::{run, Config, Report};
