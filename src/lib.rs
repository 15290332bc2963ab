//! svnview - Text-mode viewer for Subversion working copies
//!
//! This library provides:
//! - [`svn`]: svn command lines, process execution and output parsing
//! - [`session`]: background command dispatch and repository state
//! - [`model`]: Domain models
//! - [`config`]: Runtime settings
//! - [`app`], [`ui`], [`keys`]: The terminal front-end

pub mod app;
pub mod config;
pub mod keys;
pub mod model;
pub mod session;
pub mod svn;
pub mod ui;
