//! Cohort partition keys derived from a listing's structure and placement.

pub mod grade;
pub mod type_group;

pub use grade::is_below_grade;
pub use type_group::{same_group, type_group};
