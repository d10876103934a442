//! Turn a notebook and a snapshot of its variables into a LaTeX-flavored
//! Markdown report.
//!
//! The flow is: [`snapshot::parse`] and [`notebook::parse`] load the inputs,
//! [`pipeline::run`] enriches each [`snapshot::VariableRecord`], and
//! [`report::assemble`] renders the document. [`report::generate`] does all
//! of it in one call.

pub mod config;
pub mod latex;
pub mod lists;
pub mod notebook;
pub mod pipeline;
pub mod report;
pub mod snapshot;
pub mod source;

pub use report::{Report, generate};
