//! Econome core crate.
//!
//! Game rules for the Econome learning site, compiled to WASM. The finance word
//! search is the main game; the smaller drills (connections, budget balance,
//! credit decisions, the Gold & Cash adventure, flashcards, study notes and the
//! mascot chat) share the same error and logging plumbing. Rendering stays in
//! the host page.

use wasm_bindgen::prelude::*;

pub mod adventure;
pub mod budget;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod connections;
pub mod credit;
pub mod error;
pub mod flashcards;
pub mod logging;
pub mod study_notes;
pub mod web;
pub mod word_search;

pub use config::WordSearchConfig;
pub use error::{ConfigError, GameError, PuzzleError};
pub use word_search::{SelectionOutcome, WordSearchSession};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(None);
}

// -----------------------------------------------------------------------------
// Shared datasets
// -----------------------------------------------------------------------------

/// Terms hidden in the default word search grid.
pub const WORD_SEARCH_WORDS: &[&str] = &[
    "BUDGET", "SAVINGS", "CREDIT", "DEBIT", "INVEST", "LOAN", "INCOME", "EXPENSE",
    "INTEREST", "BANK", "ASSET", "DEBT", "EQUITY", "STOCK", "BOND", "TAX",
];
