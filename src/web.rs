//! Browser bindings. Everything here is a thin shell over the plain-Rust games.
use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::adventure;
use crate::budget;
use crate::catalog;
use crate::chat;
use crate::config::WordSearchConfig;
use crate::connections::{self, GuessOutcome};
use crate::credit;
use crate::flashcards::{self, Difficulty};
use crate::study_notes::{self, NoteFilter};
use crate::word_search::{Position, SelectionOutcome, WordSearchSession};

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// JS numbers are f64; `as` saturates and maps NaN to 0.
fn dollars(value: f64) -> i64 {
    value.round() as i64
}

/// `setInterval` handle; cleared when dropped.
struct IntervalTimer {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    fn every(millis: i32, mut tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::wrap(Box::new(move || tick()) as Box<dyn FnMut()>);
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

// --- Word search -------------------------------------------------------------

#[wasm_bindgen]
pub struct WordSearchGame {
    session: Rc<RefCell<WordSearchSession>>,
    rng: StdRng,
    on_complete: Option<js_sys::Function>,
    timer: Option<IntervalTimer>,
    // Set by start_timer, cleared by stop_timer. Completion drops the
    // interval but keeps this, so restart brings the clock back.
    timer_wanted: bool,
}

#[wasm_bindgen]
impl WordSearchGame {
    /// New 15x15 game with the standard word list. Pass a seed for a
    /// reproducible grid; otherwise the browser's entropy is used.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<WordSearchGame, JsValue> {
        let mut rng = seeded(seed);
        let session = WordSearchSession::new(WordSearchConfig::default(), &mut rng).map_err(js_err)?;
        Ok(WordSearchGame {
            session: Rc::new(RefCell::new(session)),
            rng,
            on_complete: None,
            timer: None,
            timer_wanted: false,
        })
    }

    /// Fresh grid and clock; the completion callback stays registered.
    /// A clock started with `start_timer` keeps running, or starts again if
    /// the previous game ended.
    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.session.borrow_mut().restart(&mut self.rng).map_err(js_err)?;
        if self.timer_wanted {
            self.arm_timer()?;
        }
        Ok(())
    }

    pub fn pointer_down(&self, row: usize, col: usize) {
        self.session.borrow_mut().begin_selection(Position::new(row, col));
    }

    pub fn pointer_enter(&self, row: usize, col: usize) {
        self.session.borrow_mut().extend_selection(Position::new(row, col));
    }

    /// Finish the drag. Returns whether a new word was found.
    pub fn pointer_up(&mut self) -> Result<bool, JsValue> {
        let (outcome, score) = {
            let mut session = self.session.borrow_mut();
            let outcome = session.end_selection();
            (outcome, session.score())
        };
        let found = matches!(outcome, SelectionOutcome::Found(_));
        debug!(?outcome, "pointer up");
        if let (true, Some(score)) = (found, score) {
            self.timer = None;
            if let Some(callback) = self.on_complete.as_ref() {
                // The session borrow is released, so the callback may query the game.
                callback.call1(&JsValue::NULL, &JsValue::from(score))?;
            }
        }
        Ok(found)
    }

    pub fn pointer_leave(&self) {
        self.session.borrow_mut().cancel_selection();
    }

    /// Letter at (row, col) as a one-character string, `None` off the grid.
    pub fn letter(&self, row: usize, col: usize) -> Option<String> {
        self.session
            .borrow()
            .grid()
            .letter(Position::new(row, col))
            .map(String::from)
    }

    /// One string per grid row.
    pub fn letters(&self) -> Vec<String> {
        self.session.borrow().grid().row_strings()
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.session.borrow().is_selected(Position::new(row, col))
    }

    pub fn is_found(&self, row: usize, col: usize) -> bool {
        self.session.borrow().is_found_cell(Position::new(row, col))
    }

    pub fn elapsed(&self) -> u32 {
        self.session.borrow().elapsed_secs()
    }

    pub fn found_count(&self) -> usize {
        self.session.borrow().found_count()
    }

    pub fn total_words(&self) -> usize {
        self.session.borrow().total_words()
    }

    pub fn words(&self) -> Vec<String> {
        self.session.borrow().words().to_vec()
    }

    pub fn is_word_found(&self, word: &str) -> bool {
        self.session.borrow().is_word_found(word)
    }

    pub fn score(&self) -> Option<u32> {
        self.session.borrow().score()
    }

    pub fn grid_size(&self) -> usize {
        self.session.borrow().grid().size()
    }

    /// `callback(score)` runs once when the last word is found.
    pub fn set_on_complete(&mut self, callback: js_sys::Function) {
        self.on_complete = Some(callback);
    }

    /// Start the one-second clock. Calling it again while running does nothing.
    pub fn start_timer(&mut self) -> Result<(), JsValue> {
        self.timer_wanted = true;
        self.arm_timer()
    }

    pub fn stop_timer(&mut self) {
        self.timer_wanted = false;
        self.timer = None;
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl WordSearchGame {
    fn arm_timer(&mut self) -> Result<(), JsValue> {
        if self.timer.is_some() {
            return Ok(());
        }
        let session = Rc::clone(&self.session);
        let timer = IntervalTimer::every(1000, move || match session.try_borrow_mut() {
            Ok(mut s) => s.tick(),
            Err(_) => warn!("timer tick skipped: session busy"),
        })?;
        self.timer = Some(timer);
        Ok(())
    }
}

// --- Chat --------------------------------------------------------------------

#[wasm_bindgen]
pub fn chat_reply(message: &str) -> String {
    chat::respond(message, &mut rand::thread_rng()).to_string()
}

#[wasm_bindgen]
pub fn chat_greeting() -> String {
    chat::GREETING.to_string()
}

// --- Adventure ---------------------------------------------------------------

#[wasm_bindgen(js_name = AdventureGame)]
pub struct WebAdventure {
    game: adventure::AdventureGame,
}

impl Default for WebAdventure {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_class = AdventureGame)]
impl WebAdventure {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebAdventure {
        WebAdventure {
            game: adventure::AdventureGame::new(),
        }
    }

    /// Handle a `KeyboardEvent.key` value; returns the status line to show.
    pub fn key(&mut self, key: &str) -> String {
        match self.game.press(key) {
            Some(Ok(event)) => event.message().to_string(),
            Some(Err(err)) => err.to_string(),
            None => String::new(),
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn level(&self) -> usize {
        self.game.level_index() + 1
    }

    pub fn level_name(&self) -> String {
        self.game.level().name.to_string()
    }

    pub fn moves(&self) -> u32 {
        self.game.moves()
    }

    pub fn score(&self) -> Option<u32> {
        self.game.score()
    }
}

// --- Connections -------------------------------------------------------------

#[wasm_bindgen(js_name = ConnectionsGame)]
pub struct WebConnections {
    game: connections::ConnectionsGame,
    rng: StdRng,
}

#[wasm_bindgen(js_class = ConnectionsGame)]
impl WebConnections {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> WebConnections {
        let mut rng = seeded(seed);
        WebConnections {
            game: connections::ConnectionsGame::new(&mut rng),
            rng,
        }
    }

    /// Unsolved terms in display order.
    pub fn board(&self) -> Vec<String> {
        self.game.board().map(String::from).collect()
    }

    pub fn toggle(&mut self, term: &str) -> bool {
        self.game.toggle(term)
    }

    pub fn is_selected(&self, term: &str) -> bool {
        self.game.selected().iter().any(|s| *s == term)
    }

    pub fn deselect_all(&mut self) {
        self.game.deselect_all();
    }

    /// Check the selected four. `Ok(true)` for a solved group; errors when
    /// fewer than four are selected or the game is over.
    pub fn submit(&mut self) -> Result<bool, JsValue> {
        let outcome = self.game.submit().map_err(js_err)?;
        Ok(matches!(outcome, GuessOutcome::Correct { .. }))
    }

    pub fn shuffle(&mut self) {
        self.game.shuffle(&mut self.rng);
    }

    /// Solved category names, oldest first.
    pub fn solved(&self) -> Vec<String> {
        self.game.solved().iter().map(|c| c.to_string()).collect()
    }

    pub fn mistakes(&self) -> u32 {
        self.game.mistakes()
    }

    pub fn one_away(&self) -> bool {
        self.game.one_away()
    }

    pub fn hint(&self) -> Option<String> {
        self.game.hint().map(|c| format!("{}: {}", c.name, c.description))
    }

    pub fn score(&self) -> Option<u32> {
        self.game.score()
    }
}

// --- Budget ------------------------------------------------------------------

#[wasm_bindgen(js_name = BudgetGame)]
pub struct WebBudget {
    game: budget::BudgetGame,
}

#[wasm_bindgen(js_class = BudgetGame)]
impl WebBudget {
    /// Monthly income in whole dollars; the default $2000 when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(income: Option<f64>) -> WebBudget {
        let income = income.map(dollars).unwrap_or(budget::DEFAULT_INCOME);
        WebBudget {
            game: budget::BudgetGame::new(income),
        }
    }

    pub fn category_count(&self) -> usize {
        budget::CATEGORIES.len()
    }

    pub fn category_name(&self, index: usize) -> Option<String> {
        budget::CATEGORIES.get(index).map(|c| c.name.to_string())
    }

    pub fn recommended(&self, index: usize) -> Option<f64> {
        budget::CATEGORIES.get(index).map(|c| c.recommended as f64)
    }

    pub fn set_budgeted(&mut self, index: usize, value: f64) -> Result<(), JsValue> {
        self.game.set_budgeted(index, dollars(value)).map_err(js_err)
    }

    pub fn budgeted(&self, index: usize) -> Option<f64> {
        self.game.budgeted(index).map(|b| b as f64)
    }

    pub fn total_budgeted(&self) -> f64 {
        self.game.total_budgeted() as f64
    }

    pub fn remaining(&self) -> f64 {
        self.game.remaining() as f64
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn submit(&mut self) -> u32 {
        self.game.submit()
    }

    /// Verdict line after `submit`, `None` before.
    pub fn feedback(&self) -> Option<String> {
        self.game
            .submitted_score()
            .map(|score| budget::feedback(score).message().to_string())
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}

// --- Credit ------------------------------------------------------------------

#[wasm_bindgen(js_name = CreditGame)]
pub struct WebCredit {
    game: credit::CreditGame,
}

impl Default for WebCredit {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_class = CreditGame)]
impl WebCredit {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebCredit {
        WebCredit {
            game: credit::CreditGame::new(),
        }
    }

    pub fn scenario(&self) -> Option<String> {
        self.game.scenario().map(|s| s.description.to_string())
    }

    /// Choice labels for the current scenario; empty once finished.
    pub fn choices(&self) -> Vec<String> {
        self.game
            .scenario()
            .map(|s| s.choices.iter().map(|c| c.text.to_string()).collect())
            .unwrap_or_default()
    }

    /// Apply choice `index`; returns its explanation.
    pub fn choose(&mut self, index: usize) -> Result<String, JsValue> {
        let choice = self.game.choose(index).map_err(js_err)?;
        Ok(choice.explanation.to_string())
    }

    pub fn decisions(&self) -> usize {
        self.game.history().len()
    }

    pub fn score(&self) -> i32 {
        self.game.score()
    }

    pub fn rating(&self) -> String {
        self.game.rating().to_string()
    }

    pub fn improvement(&self) -> i32 {
        self.game.improvement()
    }

    pub fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}

// --- Flashcards and notes ----------------------------------------------------

#[wasm_bindgen(js_name = StudyDeck)]
pub struct WebStudyDeck {
    deck: flashcards::StudyDeck,
}

impl Default for WebStudyDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_class = StudyDeck)]
impl WebStudyDeck {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebStudyDeck {
        WebStudyDeck {
            deck: flashcards::StudyDeck::default(),
        }
    }

    pub fn search(&mut self, term: &str) {
        self.deck.search(term);
    }

    pub fn card_id(&self) -> Option<u32> {
        self.deck.current().map(|c| c.id)
    }

    pub fn term(&self) -> Option<String> {
        self.deck.current().map(|c| c.term.to_string())
    }

    pub fn definition(&self) -> Option<String> {
        self.deck.current().map(|c| c.definition.to_string())
    }

    pub fn is_learned(&self) -> bool {
        self.deck.current().is_some_and(|c| c.learned)
    }

    pub fn next(&mut self) {
        self.deck.next();
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut rand::thread_rng());
    }

    pub fn flip(&mut self) -> bool {
        self.deck.flip()
    }

    pub fn toggle_learned(&mut self, id: u32) -> Option<bool> {
        self.deck.toggle_learned(id)
    }

    /// 1-based position in the filtered deck, 0 when nothing matches.
    pub fn position(&self) -> usize {
        self.deck.progress().0
    }

    pub fn total(&self) -> usize {
        self.deck.progress().1
    }

    pub fn learned_count(&self) -> usize {
        self.deck.learned_count()
    }
}

fn all_or(label: &str) -> Option<&str> {
    match label.trim() {
        "" | "All" => None,
        other => Some(other),
    }
}

/// Ids of the study notes matching the search box and the two filters.
/// `"All"` (or an empty string) disables a filter.
#[wasm_bindgen]
pub fn study_note_ids(query: &str, category: &str, difficulty: &str) -> Vec<u32> {
    let difficulty = match all_or(difficulty) {
        None => None,
        Some(label) => match Difficulty::from_label(label) {
            Some(d) => Some(d),
            None => return Vec::new(),
        },
    };
    let filter = NoteFilter {
        query: query.to_string(),
        category: all_or(category).map(String::from),
        difficulty,
    };
    filter.apply(study_notes::STUDY_NOTES).map(|n| n.id).collect()
}

/// `"All"` followed by each note category.
#[wasm_bindgen]
pub fn study_note_categories() -> Vec<String> {
    std::iter::once("All")
        .chain(study_notes::categories())
        .map(String::from)
        .collect()
}

#[wasm_bindgen]
pub fn study_note_title(id: u32) -> Option<String> {
    note(id).map(|n| n.title.to_string())
}

#[wasm_bindgen]
pub fn study_note_content(id: u32) -> Vec<String> {
    note(id)
        .map(|n| n.content.iter().map(|l| l.to_string()).collect())
        .unwrap_or_default()
}

fn note(id: u32) -> Option<&'static study_notes::StudyNote> {
    study_notes::STUDY_NOTES.iter().find(|n| n.id == id)
}

// --- Catalog -----------------------------------------------------------------

#[wasm_bindgen]
pub fn unlocked_game_ids() -> Vec<u32> {
    catalog::unlocked_games().map(|g| g.id).collect()
}

#[wasm_bindgen]
pub fn game_title(id: u32) -> Option<String> {
    catalog::game_by_id(id).map(|g| g.title.to_string())
}

#[wasm_bindgen]
pub fn game_xp(id: u32) -> Option<u32> {
    catalog::game_by_id(id).map(|g| g.xp_reward)
}
