//! One play session: selection handling, found words, timer and scoring.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use super::grid::{self, Grid, Position, Puzzle, WordPlacement};
use super::selection::{self, Selection};
use crate::config::WordSearchConfig;
use crate::error::PuzzleError;

/// Score floor once every word is found.
pub const MIN_SCORE: u32 = 100;
pub const MAX_SCORE: u32 = 1000;
/// Points lost per elapsed second.
pub const SECOND_PENALTY: u32 = 5;

/// `max(1000 - elapsed * 5, 100)`.
pub fn time_score(elapsed_secs: u32) -> u32 {
    MAX_SCORE
        .saturating_sub(elapsed_secs.saturating_mul(SECOND_PENALTY))
        .max(MIN_SCORE)
}

/// What happened when the pointer was released.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A new word matched (forward or reversed).
    Found(String),
    /// The letters spell a word that was found earlier.
    AlreadyFound(String),
    /// A straight run that spells nothing on the list.
    NoMatch,
    /// Fewer than two cells, or not one straight contiguous run.
    NotALine,
    /// No drag was in progress.
    Inactive,
}

type CompletionCallback = Box<dyn FnMut(u32)>;

pub struct WordSearchSession {
    config: WordSearchConfig,
    puzzle: Puzzle,
    selection: Selection,
    found: HashSet<String>,
    elapsed_secs: u32,
    score: Option<u32>,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for WordSearchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordSearchSession")
            .field("grid_size", &self.config.grid_size)
            .field("found", &self.found.len())
            .field("total", &self.config.words.len())
            .field("elapsed_secs", &self.elapsed_secs)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl WordSearchSession {
    /// Generate a fresh puzzle and start the clock at zero.
    pub fn new<R: Rng + ?Sized>(config: WordSearchConfig, rng: &mut R) -> Result<Self, PuzzleError> {
        let puzzle = grid::generate(&config, rng)?;
        Ok(Self::from_puzzle(config, puzzle))
    }

    /// Wrap an already generated puzzle.
    pub fn from_puzzle(config: WordSearchConfig, puzzle: Puzzle) -> Self {
        Self {
            config,
            puzzle,
            selection: Selection::new(),
            found: HashSet::new(),
            elapsed_secs: 0,
            score: None,
            on_complete: None,
        }
    }

    /// Register the hook run once with the final score.
    pub fn set_on_complete(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// New grid, empty found set, clock back to zero. The callback is kept.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PuzzleError> {
        self.puzzle = grid::generate(&self.config, rng)?;
        self.selection.clear();
        self.found.clear();
        self.elapsed_secs = 0;
        self.score = None;
        info!("word search restarted");
        Ok(())
    }

    pub fn begin_selection(&mut self, pos: Position) {
        if !self.puzzle.grid.contains(pos) || self.is_complete() {
            return;
        }
        self.puzzle.grid.clear_selected();
        self.selection.begin(pos);
        self.mark_selected(pos);
    }

    pub fn extend_selection(&mut self, pos: Position) {
        if !self.puzzle.grid.contains(pos) {
            return;
        }
        if self.selection.extend(pos) {
            self.mark_selected(pos);
        }
    }

    /// Drop the in-progress drag without guessing (pointer left the board).
    pub fn cancel_selection(&mut self) {
        self.selection.clear();
        self.puzzle.grid.clear_selected();
    }

    /// Release: validate the run, match it against the word list, clear the drag.
    pub fn end_selection(&mut self) -> SelectionOutcome {
        if !self.selection.is_active() {
            return SelectionOutcome::Inactive;
        }
        let positions = self.selection.take();
        self.puzzle.grid.clear_selected();

        if selection::line_direction(&positions).is_none() {
            return SelectionOutcome::NotALine;
        }
        let candidate: String = positions
            .iter()
            .filter_map(|&p| self.puzzle.grid.letter(p))
            .collect();
        let reversed: String = candidate.chars().rev().collect();

        let matched = [candidate, reversed]
            .into_iter()
            .find(|s| self.config.words.iter().any(|w| w == s) && !self.found.contains(s));
        let Some(word) = matched else {
            let already = self.found.iter().find(|w| {
                positions.len() == w.len() && self.spells(&positions, w)
            });
            debug!(cells = positions.len(), "selection matched nothing new");
            return match already {
                Some(w) => SelectionOutcome::AlreadyFound(w.clone()),
                None => SelectionOutcome::NoMatch,
            };
        };

        for &pos in &positions {
            if let Some(cell) = self.puzzle.grid.cell_mut(pos) {
                cell.found = true;
            }
        }
        self.found.insert(word.clone());
        info!(word = %word, found = self.found.len(), total = self.total_words(), "word found");

        if self.found.len() == self.total_words() {
            self.complete();
        }
        SelectionOutcome::Found(word)
    }

    /// One-second timer tick; ignored once the session is complete.
    pub fn tick(&mut self) {
        if !self.is_complete() {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
    }

    fn complete(&mut self) {
        let score = time_score(self.elapsed_secs);
        self.score = Some(score);
        info!(score, elapsed_secs = self.elapsed_secs, "word search complete");
        if let Some(callback) = self.on_complete.as_mut() {
            callback(score);
        }
    }

    fn mark_selected(&mut self, pos: Position) {
        if let Some(cell) = self.puzzle.grid.cell_mut(pos) {
            cell.selected = true;
        }
    }

    fn spells(&self, positions: &[Position], word: &str) -> bool {
        let letters: String = positions
            .iter()
            .filter_map(|&p| self.puzzle.grid.letter(p))
            .collect();
        letters == word || letters.chars().rev().eq(word.chars())
    }

    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    pub fn placements(&self) -> &[WordPlacement] {
        &self.puzzle.placements
    }

    pub fn words(&self) -> &[String] {
        &self.config.words
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        self.puzzle.grid.cell(pos).is_some_and(|c| c.selected)
    }

    pub fn is_found_cell(&self, pos: Position) -> bool {
        self.puzzle.grid.cell(pos).is_some_and(|c| c.found)
    }

    pub fn is_word_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn total_words(&self) -> usize {
        self.config.words.len()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn is_complete(&self) -> bool {
        self.score.is_some()
    }

    /// Final score, available once every word is found.
    pub fn score(&self) -> Option<u32> {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(seed: u64) -> WordSearchSession {
        let mut rng = StdRng::seed_from_u64(seed);
        WordSearchSession::new(WordSearchConfig::default(), &mut rng).expect("default puzzle")
    }

    fn drag(s: &mut WordSearchSession, cells: &[Position]) -> SelectionOutcome {
        let (first, rest) = cells.split_first().expect("non-empty drag");
        s.begin_selection(*first);
        for &p in rest {
            s.extend_selection(p);
        }
        s.end_selection()
    }

    fn find_all(s: &mut WordSearchSession) {
        let placements: Vec<_> = s.placements().to_vec();
        for placement in placements {
            drag(s, &placement.positions);
        }
    }

    #[test]
    fn time_score_examples() {
        assert_eq!(time_score(0), 1000);
        assert_eq!(time_score(40), 800);
        assert_eq!(time_score(180), 100);
        assert_eq!(time_score(200), 100);
        assert_eq!(time_score(u32::MAX), 100);
    }

    #[test]
    fn selecting_a_placement_finds_it_once() {
        let mut s = session(5);
        let placement = s.placements()[0].clone();
        assert_eq!(
            drag(&mut s, &placement.positions),
            SelectionOutcome::Found(placement.word.clone())
        );
        assert_eq!(s.found_count(), 1);
        assert_eq!(
            drag(&mut s, &placement.positions),
            SelectionOutcome::AlreadyFound(placement.word.clone())
        );
        assert_eq!(s.found_count(), 1);
        assert!(placement.positions.iter().all(|&p| s.is_found_cell(p)));
    }

    #[test]
    fn reversed_drag_matches() {
        let mut s = session(9);
        let placement = s.placements()[3].clone();
        let mut backwards = placement.positions.clone();
        backwards.reverse();
        assert_eq!(
            drag(&mut s, &backwards),
            SelectionOutcome::Found(placement.word.clone())
        );
        assert!(s.is_word_found(&placement.word));
    }

    #[test]
    fn non_line_and_single_cell_do_nothing() {
        let mut s = session(1);
        assert_eq!(drag(&mut s, &[Position::new(0, 0)]), SelectionOutcome::NotALine);
        assert_eq!(
            drag(
                &mut s,
                &[Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
            ),
            SelectionOutcome::NotALine
        );
        assert_eq!(s.found_count(), 0);
        assert!(s.selection().is_empty());
        assert!(s.grid().cells().iter().all(|c| !c.selected));
    }

    #[test]
    fn release_without_drag_is_inactive() {
        let mut s = session(1);
        assert_eq!(s.end_selection(), SelectionOutcome::Inactive);
    }

    #[test]
    fn selection_highlight_tracks_drag() {
        let mut s = session(2);
        s.begin_selection(Position::new(4, 4));
        s.extend_selection(Position::new(4, 5));
        assert!(s.is_selected(Position::new(4, 4)));
        assert!(s.is_selected(Position::new(4, 5)));
        s.cancel_selection();
        assert!(!s.is_selected(Position::new(4, 4)));
        assert_eq!(s.end_selection(), SelectionOutcome::Inactive);
    }

    #[test]
    fn completion_scores_and_stops_clock() {
        let mut s = session(13);
        let scores = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&scores);
        s.set_on_complete(move |score| sink.borrow_mut().push(score));
        for _ in 0..40 {
            s.tick();
        }
        find_all(&mut s);
        assert!(s.is_complete());
        assert_eq!(s.score(), Some(800));
        assert_eq!(*scores.borrow(), vec![800]);
        s.tick();
        assert_eq!(s.elapsed_secs(), 40);
    }

    #[test]
    fn restart_resets_progress() {
        let mut s = session(21);
        s.tick();
        let placement = s.placements()[0].clone();
        drag(&mut s, &placement.positions);
        let mut rng = StdRng::seed_from_u64(99);
        s.restart(&mut rng).expect("regenerates");
        assert_eq!(s.found_count(), 0);
        assert_eq!(s.elapsed_secs(), 0);
        assert_eq!(s.score(), None);
        assert!(s.grid().cells().iter().all(|c| !c.found));
    }
}
