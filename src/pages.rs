//! Full-page builders composing components into writable HTML documents.

pub mod report;
