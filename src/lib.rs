#![doc(test(attr(deny(warnings))))]

//! Expense Core turns a snapshot of expense records into summary statistics,
//! category rankings and a handful of derived spending insights.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
