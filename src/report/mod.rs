//! Coach report generation
//!
//! Builds a persona system message and a data/template user message, then
//! makes one blocking chat-completion call.

mod generator;
mod prompt;

pub(crate) use generator::{ReportGenerator, ReportRequest};
