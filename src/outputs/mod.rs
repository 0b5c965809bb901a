//! Output writers for scraped topics.
//!
//! - [`json`]: writes the result set to a timestamp-named JSON file

pub mod json;
