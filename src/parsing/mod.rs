//! Parsing of loosely typed listing input.

pub mod district;
pub mod fields;

pub use district::{extract_district, DISTRICT_SUFFIX};
pub use fields::{
    is_present, parse_flag, parse_integer, parse_number, parse_present, parse_timestamp,
};
