pub mod ecc;
pub mod error;
pub mod verilog;

pub use ecc::{secded, SecDedCode};
pub use error::{Error, Result};
