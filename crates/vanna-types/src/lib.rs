pub mod contract;
pub mod errors;
pub mod market;

pub use contract::*;
pub use errors::*;
pub use market::*;
