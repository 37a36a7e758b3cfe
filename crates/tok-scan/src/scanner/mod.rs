//! Scanner module.
//!
//! This module organizes the scanning engine into smaller, focused components:
//! - `core` - Main Scanner struct and dispatch loop
//! - `string` - String literal scanning
//! - `comment` - Line and block comment scanning
//! - `operator` - Operator scanning
//! - `identifier` - Identifier scanning (the catch-all class)

mod comment;
mod core;
mod identifier;
mod operator;
mod string;

pub use self::core::Scanner;
