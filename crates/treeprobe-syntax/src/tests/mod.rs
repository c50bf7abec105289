//! Crate-internal test suites for treeprobe-syntax.

mod unit;
