//! Shared utilities for nxstage.
//!
//! This crate holds the cross-cutting error type used by the protocol crate
//! and the binary, together with the mapping from errors to exit codes.

pub mod errors;
