//! Shared infrastructure for the `eqstat` binary.

pub mod logging;
