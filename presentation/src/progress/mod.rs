//! Progress reporting for analysis runs

pub mod reporter;
