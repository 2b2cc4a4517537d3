//! mcqtest-core: Session state machine, CSV codec, and grading.
//!
//! This crate defines the record model and all of the test-taking logic that
//! the terminal shell and the CLI build on. Nothing here touches the terminal.

pub mod codec;
pub mod config;
pub mod error;
pub mod files;
pub mod grading;
pub mod model;
pub mod session;
pub mod timer;
pub mod validator;
