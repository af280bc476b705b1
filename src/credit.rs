//! Credit Score Challenge: five money decisions nudge a 650 score up or down.

use derive_more::Display;
use tracing::info;

use crate::error::GameError;

pub const STARTING_SCORE: i32 = 650;
pub const MIN_SCORE: i32 = 300;
pub const MAX_SCORE: i32 = 850;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub text: &'static str,
    pub impact: i32,
    pub explanation: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub description: &'static str,
    pub choices: [Choice; 3],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        description: "Your first credit card bill arrives with a $500 balance. The minimum payment is $25. What do you do?",
        choices: [
            Choice { text: "Pay only the minimum ($25)", impact: -5, explanation: "Paying minimums keeps you current but high balances hurt your utilization ratio." },
            Choice { text: "Pay the full balance ($500)", impact: 25, explanation: "Excellent! Paying in full avoids interest and shows responsible credit use." },
            Choice { text: "Pay $250 (half the balance)", impact: 10, explanation: "Good effort! Paying more than minimum helps, but full payment is ideal." },
        ],
    },
    Scenario {
        description: "You want to buy a new laptop and need $1,200. Your credit limit is $2,000. What's your plan?",
        choices: [
            Choice { text: "Put it all on credit card", impact: -15, explanation: "This would use 60% of your credit limit - high utilization hurts your score." },
            Choice { text: "Save up and pay cash", impact: 5, explanation: "Smart! Paying cash avoids debt and keeps your credit utilization low." },
            Choice { text: "Put $400 on card, save for the rest", impact: 15, explanation: "Great compromise! Low credit utilization while building your credit history." },
        ],
    },
    Scenario {
        description: "You're offered a store credit card with 10% off today's purchase. You already have 2 credit cards.",
        choices: [
            Choice { text: "Sign up for the discount", impact: -10, explanation: "Too many credit inquiries and accounts can lower your score temporarily." },
            Choice { text: "Politely decline", impact: 10, explanation: "Smart! Avoiding unnecessary credit accounts helps maintain a healthy credit profile." },
            Choice { text: "Ask about the terms first", impact: 5, explanation: "Good to research, but you probably don't need another card right now." },
        ],
    },
    Scenario {
        description: "Your friend asks you to cosign for their car loan because they have bad credit.",
        choices: [
            Choice { text: "Agree to help your friend", impact: -20, explanation: "Risky! Cosigning makes you responsible for their debt if they can't pay." },
            Choice { text: "Decline and explain the risks", impact: 10, explanation: "Wise choice! Protecting your credit is important for your financial future." },
            Choice { text: "Suggest they improve their credit first", impact: 15, explanation: "Excellent advice! This helps your friend while protecting your credit." },
        ],
    },
    Scenario {
        description: "You notice an error on your credit report - a late payment that you actually made on time.",
        choices: [
            Choice { text: "Ignore it, it's just one mistake", impact: -5, explanation: "Errors can significantly impact your score. Always dispute inaccuracies!" },
            Choice { text: "Dispute the error with credit bureaus", impact: 20, explanation: "Perfect! Disputing errors is crucial for maintaining an accurate credit report." },
            Choice { text: "Call the company that reported it", impact: 10, explanation: "Good start, but you should also dispute with credit bureaus directly." },
        ],
    },
];

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Poor,
    Fair,
    Good,
    #[display("Very Good")]
    VeryGood,
    Excellent,
}

pub fn rating(score: i32) -> Rating {
    match score {
        800.. => Rating::Excellent,
        740..=799 => Rating::VeryGood,
        670..=739 => Rating::Good,
        580..=669 => Rating::Fair,
        _ => Rating::Poor,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub scenario: &'static Scenario,
    pub choice: &'static Choice,
}

#[derive(Clone, Debug)]
pub struct CreditGame {
    score: i32,
    current: usize,
    history: Vec<Decision>,
}

impl Default for CreditGame {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditGame {
    pub fn new() -> Self {
        Self {
            score: STARTING_SCORE,
            current: 0,
            history: Vec::with_capacity(SCENARIOS.len()),
        }
    }

    pub fn scenario(&self) -> Option<&'static Scenario> {
        SCENARIOS.get(self.current)
    }

    /// Apply choice `index` of the current scenario and move on.
    pub fn choose(&mut self, index: usize) -> Result<&'static Choice, GameError> {
        let scenario = self.scenario().ok_or(GameError::GameOver)?;
        let choice = scenario.choices.get(index).ok_or(GameError::OutOfRange {
            what: "choice",
            index,
            len: scenario.choices.len(),
        })?;
        self.score = (self.score + choice.impact).clamp(MIN_SCORE, MAX_SCORE);
        self.history.push(Decision { scenario, choice });
        self.current += 1;
        if self.is_complete() {
            info!(score = self.score, improvement = self.improvement(), "credit challenge complete");
        }
        Ok(choice)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn rating(&self) -> Rating {
        rating(self.score)
    }

    pub fn improvement(&self) -> i32 {
        self.score - STARTING_SCORE
    }

    pub fn history(&self) -> &[Decision] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.current >= SCENARIOS.len()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
