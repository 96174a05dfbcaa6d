//! Output module
//! Report assembly and rendering in multiple formats

pub mod formatter;
pub mod report;
