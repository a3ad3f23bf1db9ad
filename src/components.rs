//! Reusable HTML components for report generation
//!
//! This module provides Maud component functions shared by the report
//! page: prose blocks with inline citation markers, the interactive drug
//! table with its filter toolbar, the deduplicated reference list, and
//! the page chrome. Components take parsed data and return markup; they
//! never touch the filesystem.

pub mod layout;
pub mod prose;
pub mod references;
pub mod table;
