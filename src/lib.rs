// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Welcome Message Provider
//!
//! This crate supplies the greeting printed by the `hello-world` command.
//!
//! # Quick Start
//!
//! ```
//! use hello_world::get_welcome_message;
//!
//! assert_eq!(get_welcome_message(), "Hello world!");
//! ```
//!
//! Writing the greeting as a line:
//!
//! ```
//! use hello_world::io;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut out = Vec::new();
//!     io::write_welcome_message(&mut out)?;
//!     assert_eq!(out, b"Hello world!\n");
//!     Ok(())
//! }
//! ```

pub mod io;

/// The greeting returned by [get_welcome_message].
pub const WELCOME_MESSAGE: &str = "Hello world!";

/// Returns the welcome message.
pub fn get_welcome_message() -> &'static str {
    WELCOME_MESSAGE
}
