mod error;
mod params;
mod query;

pub use error::*;
pub use params::*;
pub use query::*;
