//! Domain modules for the Looma client
//!
//! This module organizes the editing application into focused, testable
//! domains: the multi-language draft editor and the publication lifecycle.

pub mod editor;
pub mod publication;
