pub mod error;
pub mod input;
pub mod radix;
pub mod rational;
pub mod reconstruct;
pub mod share;

pub use error::Error;
