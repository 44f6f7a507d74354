//! Safe SQL builder: identifiers are constants, values are positional parameters.

mod builder;
pub use builder::*;
