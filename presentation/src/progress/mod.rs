//! Live debate reporting

pub mod reporter;
