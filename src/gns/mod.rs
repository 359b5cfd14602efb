//! GNS country-file input.

mod reader;

pub use reader::{decode_input, open_input, GnsReader};
