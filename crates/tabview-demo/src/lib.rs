#![forbid(unsafe_code)]

//! Interactive viewer for delimited text, built on `tabview`.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod session;
