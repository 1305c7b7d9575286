//! Extractor family members
//!
//! This module provides:
//! - `modules`: classification of free-form module source references
//! - `gradle_wrapper`: line scanning of wrapper properties files
//! - `python_setup`: the memoized interpreter version probe used by the
//!   build-script extractor

pub mod gradle_wrapper;
pub mod modules;
pub mod python_setup;

pub use python_setup::InterpreterProbe;
