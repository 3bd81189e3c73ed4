//! Safe SQL builder: identifiers from static definitions only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
