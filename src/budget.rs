//! Budget Balance: split a monthly income across needs, wants and savings.

use tracing::info;

use crate::error::GameError;

pub const DEFAULT_INCOME: i64 = 2000;
pub const MAX_POINTS: u32 = 1000;
/// Leftover (or overspend) within this many dollars counts as balanced.
pub const BALANCE_SLACK: i64 = 50;
/// A single category can hold at most this many months of income.
pub const MAX_CATEGORY_MULTIPLE: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Need,
    Want,
    Savings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BudgetCategory {
    pub name: &'static str,
    pub recommended: i64,
    pub kind: Kind,
}

/// Recommended split for a $2000 month, roughly 50/30/20.
pub const CATEGORIES: &[BudgetCategory] = &[
    BudgetCategory { name: "Rent", recommended: 800, kind: Kind::Need },
    BudgetCategory { name: "Food", recommended: 300, kind: Kind::Need },
    BudgetCategory { name: "Transportation", recommended: 200, kind: Kind::Need },
    BudgetCategory { name: "Entertainment", recommended: 200, kind: Kind::Want },
    BudgetCategory { name: "Clothes", recommended: 100, kind: Kind::Want },
    BudgetCategory { name: "Dining Out", recommended: 100, kind: Kind::Want },
    BudgetCategory { name: "Emergency Fund", recommended: 200, kind: Kind::Savings },
    BudgetCategory { name: "Retirement", recommended: 100, kind: Kind::Savings },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// 800+: close to the 50/30/20 rule.
    Excellent,
    /// 600..800.
    Good,
    KeepPracticing,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Excellent => "Excellent budgeting! You're a natural!",
            Feedback::Good => "Good job! With practice, you'll master budgeting!",
            Feedback::KeepPracticing => "Keep practicing! Budgeting gets easier with time.",
        }
    }
}

pub fn feedback(score: u32) -> Feedback {
    match score {
        800.. => Feedback::Excellent,
        600..=799 => Feedback::Good,
        _ => Feedback::KeepPracticing,
    }
}

#[derive(Clone, Debug)]
pub struct BudgetGame {
    income: i64,
    budgeted: Vec<i64>,
    submitted: Option<u32>,
}

impl Default for BudgetGame {
    fn default() -> Self {
        Self::new(DEFAULT_INCOME)
    }
}

impl BudgetGame {
    pub fn new(income: i64) -> Self {
        Self {
            income,
            budgeted: vec![0; CATEGORIES.len()],
            submitted: None,
        }
    }

    /// Set the amount for category `index`, clamped to
    /// `0..=income * MAX_CATEGORY_MULTIPLE`.
    pub fn set_budgeted(&mut self, index: usize, value: i64) -> Result<(), GameError> {
        if self.submitted.is_some() {
            return Err(GameError::GameOver);
        }
        let len = self.budgeted.len();
        let slot = self.budgeted.get_mut(index).ok_or(GameError::OutOfRange {
            what: "budget category",
            index,
            len,
        })?;
        let cap = self.income.saturating_mul(MAX_CATEGORY_MULTIPLE).max(0);
        *slot = value.clamp(0, cap);
        Ok(())
    }

    pub fn budgeted(&self, index: usize) -> Option<i64> {
        self.budgeted.get(index).copied()
    }

    pub fn income(&self) -> i64 {
        self.income
    }

    pub fn total_budgeted(&self) -> i64 {
        self.budgeted.iter().fold(0i64, |acc, b| acc.saturating_add(*b))
    }

    pub fn remaining(&self) -> i64 {
        self.income.saturating_sub(self.total_budgeted())
    }

    /// 100 per category within 10% of the recommendation, 50 within 20%,
    /// plus 200 for a balanced total, capped at 1000.
    pub fn score(&self) -> u32 {
        let per_category: u32 = CATEGORIES
            .iter()
            .zip(&self.budgeted)
            .map(|(spec, &amount)| {
                let diff = amount.abs_diff(spec.recommended) as f64;
                let pct = diff / spec.recommended as f64;
                if pct <= 0.1 {
                    100
                } else if pct <= 0.2 {
                    50
                } else {
                    0
                }
            })
            .sum();
        let bonus = if self.remaining().unsigned_abs() <= BALANCE_SLACK.unsigned_abs() {
            200
        } else {
            0
        };
        (per_category + bonus).min(MAX_POINTS)
    }

    /// Lock in the budget and return its score.
    pub fn submit(&mut self) -> u32 {
        let score = self.score();
        self.submitted = Some(score);
        info!(score, remaining = self.remaining(), "budget submitted");
        score
    }

    pub fn submitted_score(&self) -> Option<u32> {
        self.submitted
    }

    /// Clear every allocation; income is kept.
    pub fn reset(&mut self) {
        self.budgeted.iter_mut().for_each(|b| *b = 0);
        self.submitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_recommended(g: &mut BudgetGame) {
        for (i, spec) in CATEGORIES.iter().enumerate() {
            g.set_budgeted(i, spec.recommended).expect("valid index");
        }
    }

    #[test]
    fn recommended_split_maxes_out() {
        let mut g = BudgetGame::default();
        fill_recommended(&mut g);
        assert_eq!(g.remaining(), 0);
        // 8 * 100 + 200 bonus
        assert_eq!(g.score(), 1000);
        assert_eq!(feedback(g.submit()), Feedback::Excellent);
    }

    #[test]
    fn partial_credit_bands() {
        let mut g = BudgetGame::default();
        fill_recommended(&mut g);
        g.set_budgeted(0, 950).expect("rent"); // 18.75% over
        g.set_budgeted(1, 400).expect("food"); // 33% over
        assert_eq!(g.remaining(), -250);
        assert_eq!(g.score(), 6 * 100 + 50);
        assert_eq!(feedback(650), Feedback::Good);
    }

    #[test]
    fn negative_input_clamps_and_bad_index_errors() {
        let mut g = BudgetGame::default();
        g.set_budgeted(2, -40).expect("valid index");
        assert_eq!(g.budgeted(2), Some(0));
        assert_eq!(
            g.set_budgeted(99, 10),
            Err(GameError::OutOfRange {
                what: "budget category",
                index: 99,
                len: 8
            })
        );
    }

    #[test]
    fn huge_amounts_are_capped() {
        let mut g = BudgetGame::default();
        for i in 0..CATEGORIES.len() {
            g.set_budgeted(i, i64::MAX).expect("valid index");
        }
        assert_eq!(g.budgeted(0), Some(20_000));
        assert_eq!(g.total_budgeted(), 8 * 20_000);
        assert_eq!(g.remaining(), 2000 - 160_000);
        assert_eq!(g.score(), 0);

        let mut rich = BudgetGame::new(i64::MAX);
        rich.set_budgeted(0, i64::MAX).expect("valid index");
        rich.set_budgeted(1, i64::MAX).expect("valid index");
        assert_eq!(rich.total_budgeted(), i64::MAX);
        assert_eq!(rich.remaining(), 0);

        let broke = BudgetGame::new(i64::MIN);
        assert_eq!(broke.remaining(), i64::MIN);
        assert_eq!(broke.score(), 0);
    }

    #[test]
    fn reset_clears_allocations() {
        let mut g = BudgetGame::default();
        fill_recommended(&mut g);
        g.submit();
        assert_eq!(g.set_budgeted(0, 1), Err(GameError::GameOver));
        g.reset();
        assert_eq!(g.total_budgeted(), 0);
        assert_eq!(g.submitted_score(), None);
        assert_eq!(g.score(), 0);
        assert_eq!(feedback(g.score()), Feedback::KeepPracticing);
    }
}
