//! Financial Connections: sort sixteen terms into four hidden groups of four.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::error::GameError;

pub const GROUP_SIZE: usize = 4;
/// Fourth wrong guess ends the game.
pub const MAX_MISTAKES: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// 1 (easiest) ..= 4 (hardest).
    pub difficulty: u8,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    pub text: &'static str,
    pub category: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: "Banking Services", difficulty: 1, description: "Basic bank account features" },
    Category { name: "Investment Types", difficulty: 2, description: "Different ways to invest money" },
    Category { name: "Credit Terms", difficulty: 3, description: "Credit and loan terminology" },
    Category { name: "Financial Ratios", difficulty: 4, description: "Key financial metrics" },
];

pub const TERMS: &[Term] = &[
    Term { text: "CHECKING", category: "Banking Services" },
    Term { text: "SAVINGS", category: "Banking Services" },
    Term { text: "DEPOSIT", category: "Banking Services" },
    Term { text: "WITHDRAWAL", category: "Banking Services" },
    Term { text: "STOCKS", category: "Investment Types" },
    Term { text: "BONDS", category: "Investment Types" },
    Term { text: "MUTUAL FUNDS", category: "Investment Types" },
    Term { text: "ETF", category: "Investment Types" },
    Term { text: "APR", category: "Credit Terms" },
    Term { text: "PRINCIPAL", category: "Credit Terms" },
    Term { text: "COLLATERAL", category: "Credit Terms" },
    Term { text: "GRACE PERIOD", category: "Credit Terms" },
    Term { text: "DEBT-TO-INCOME", category: "Financial Ratios" },
    Term { text: "PRICE-EARNINGS", category: "Financial Ratios" },
    Term { text: "CURRENT RATIO", category: "Financial Ratios" },
    Term { text: "ROI", category: "Financial Ratios" },
];

fn term(text: &str) -> Option<&'static Term> {
    TERMS.iter().find(|t| t.text == text)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// All four share `category`; it is now solved.
    Correct { category: &'static str },
    /// Mixed groups. `one_away` when three of the four belong together.
    Incorrect { one_away: bool, mistakes: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won { score: u32 },
    Lost,
}

#[derive(Clone, Debug)]
pub struct ConnectionsGame {
    board: Vec<&'static Term>,
    selected: Vec<&'static str>,
    solved: Vec<&'static str>,
    mistakes: u32,
    one_away: bool,
    last_guess: Vec<&'static str>,
    status: Status,
}

impl ConnectionsGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board: Vec<&'static Term> = TERMS.iter().collect();
        board.shuffle(rng);
        Self {
            board,
            selected: Vec::new(),
            solved: Vec::new(),
            mistakes: 0,
            one_away: false,
            last_guess: Vec::new(),
            status: Status::Playing,
        }
    }

    /// Reorder the unsolved terms still on the board.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.shuffle(rng);
    }

    /// Select or deselect a term. Returns whether it is now selected.
    pub fn toggle(&mut self, text: &str) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        if let Some(i) = self.selected.iter().position(|s| *s == text) {
            self.selected.remove(i);
            return false;
        }
        let on_board = self.board.iter().find(|t| t.text == text);
        match on_board {
            Some(t) if self.selected.len() < GROUP_SIZE => {
                self.selected.push(t.text);
                true
            }
            _ => false,
        }
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Check the four selected terms. The selection is cleared either way.
    pub fn submit(&mut self) -> Result<GuessOutcome, GameError> {
        if self.status != Status::Playing {
            return Err(GameError::GameOver);
        }
        if self.selected.len() != GROUP_SIZE {
            return Err(GameError::IncompleteGuess {
                required: GROUP_SIZE,
                selected: self.selected.len(),
            });
        }
        let guess = std::mem::take(&mut self.selected);
        let categories: HashSet<&'static str> =
            guess.iter().filter_map(|t| term(t)).map(|t| t.category).collect();

        if categories.len() == 1 {
            let category = term(guess[0]).map(|t| t.category).unwrap_or_default();
            self.solved.push(category);
            self.board.retain(|t| t.category != category);
            self.one_away = false;
            info!(category, solved = self.solved.len(), "connections group solved");
            if self.solved.len() == CATEGORIES.len() {
                let score = 1000u32.saturating_sub(self.mistakes * 100).max(100);
                self.status = Status::Won { score };
                info!(score, mistakes = self.mistakes, "connections won");
            }
            return Ok(GuessOutcome::Correct { category });
        }

        self.mistakes += 1;
        self.one_away = CATEGORIES.iter().any(|c| {
            guess
                .iter()
                .filter(|t| term(t).is_some_and(|t| t.category == c.name))
                .count()
                == GROUP_SIZE - 1
        });
        self.last_guess = guess;
        if self.mistakes >= MAX_MISTAKES {
            self.status = Status::Lost;
            info!("connections lost");
        }
        Ok(GuessOutcome::Incorrect {
            one_away: self.one_away,
            mistakes: self.mistakes,
        })
    }

    /// Easiest category not solved yet.
    pub fn hint(&self) -> Option<&'static Category> {
        CATEGORIES
            .iter()
            .filter(|c| !self.solved.contains(&c.name))
            .min_by_key(|c| c.difficulty)
    }

    /// Score reported to the host: win score, 0 on a loss, `None` while playing.
    pub fn score(&self) -> Option<u32> {
        match self.status {
            Status::Playing => None,
            Status::Won { score } => Some(score),
            Status::Lost => Some(0),
        }
    }

    pub fn board(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.board.iter().map(|t| t.text)
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn solved(&self) -> &[&'static str] {
        &self.solved
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn one_away(&self) -> bool {
        self.one_away
    }

    pub fn last_guess(&self) -> &[&'static str] {
        &self.last_guess
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> ConnectionsGame {
        ConnectionsGame::new(&mut StdRng::seed_from_u64(4))
    }

    fn pick(g: &mut ConnectionsGame, terms: &[&str]) {
        for t in terms {
            assert!(g.toggle(t), "{t} should be selectable");
        }
    }

    #[test]
    fn selection_capped_at_four() {
        let mut g = game();
        pick(&mut g, &["APR", "ROI", "ETF", "BONDS"]);
        assert!(!g.toggle("SAVINGS"));
        assert!(!g.toggle("APR"), "second toggle deselects");
        assert_eq!(g.selected().len(), 3);
        assert!(!g.toggle("NOT A TERM"));
    }

    #[test]
    fn correct_group_is_removed() {
        let mut g = game();
        pick(&mut g, &["CHECKING", "SAVINGS", "DEPOSIT", "WITHDRAWAL"]);
        assert_eq!(
            g.submit(),
            Ok(GuessOutcome::Correct {
                category: "Banking Services"
            })
        );
        assert_eq!(g.board().count(), 12);
        assert_eq!(g.hint().map(|c| c.name), Some("Investment Types"));
        assert!(!g.toggle("SAVINGS"), "solved terms leave the board");
    }

    #[test]
    fn one_away_detected() {
        let mut g = game();
        pick(&mut g, &["STOCKS", "BONDS", "ETF", "APR"]);
        assert_eq!(
            g.submit(),
            Ok(GuessOutcome::Incorrect {
                one_away: true,
                mistakes: 1
            })
        );
        assert_eq!(g.last_guess().len(), 4);
        assert!(g.selected().is_empty());
    }

    #[test]
    fn short_guess_rejected() {
        let mut g = game();
        pick(&mut g, &["ROI"]);
        assert_eq!(
            g.submit(),
            Err(GameError::IncompleteGuess {
                required: 4,
                selected: 1
            })
        );
    }

    #[test]
    fn fourth_mistake_loses() {
        let mut g = game();
        for _ in 0..4 {
            pick(&mut g, &["STOCKS", "APR", "ROI", "SAVINGS"]);
            g.submit().expect("game still running");
        }
        assert_eq!(g.status(), Status::Lost);
        assert_eq!(g.score(), Some(0));
        assert_eq!(g.submit(), Err(GameError::GameOver));
    }

    #[test]
    fn win_score_counts_mistakes() {
        let mut g = game();
        pick(&mut g, &["STOCKS", "APR", "ROI", "SAVINGS"]);
        g.submit().expect("wrong guess");
        for c in CATEGORIES {
            let group: Vec<&str> = TERMS.iter().filter(|t| t.category == c.name).map(|t| t.text).collect();
            pick(&mut g, &group);
            g.submit().expect("correct group");
        }
        assert_eq!(g.status(), Status::Won { score: 900 });
        assert_eq!(g.hint(), None);
    }
}
