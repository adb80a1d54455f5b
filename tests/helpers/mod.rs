//! Shared fixtures for resolution integration tests.
#![allow(dead_code)]

pub mod fixtures;
pub mod line_parser;
