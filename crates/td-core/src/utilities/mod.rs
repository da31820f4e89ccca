//! Miscellaneous utilities.

pub mod data_parsers;
