//! The games hub: every mini-game card with its XP reward and lock state.

use derive_more::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord)]
pub enum GameDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameInfo {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub difficulty: GameDifficulty,
    pub xp_reward: u32,
    pub minutes: u32,
    pub unlocked: bool,
    /// Name of the page component the host mounts for this game.
    pub component: &'static str,
}

const fn game(
    id: u32,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    difficulty: GameDifficulty,
    xp_reward: u32,
    minutes: u32,
    unlocked: bool,
    component: &'static str,
) -> GameInfo {
    GameInfo { id, title, description, category, difficulty, xp_reward, minutes, unlocked, component }
}

use GameDifficulty::{Easy, Hard, Medium};

pub const GAMES: &[GameInfo] = &[
    game(1, "Budget Balance Challenge", "Create a monthly budget for different income scenarios", "Budgeting", Easy, 50, 10, true, "BudgetBalanceGame"),
    game(2, "Credit Score Simulator", "Make decisions and see how they affect your credit score", "Credit", Medium, 75, 15, true, "CreditScoreGame"),
    game(3, "Investment Adventure", "Build a diversified portfolio and watch it grow", "Investing", Hard, 100, 20, false, "InvestmentGame"),
    game(4, "Shopping Smart Quiz", "Test your consumer skills with real shopping scenarios", "Consumer Skills", Easy, 40, 8, true, "ShoppingQuizGame"),
    game(5, "Emergency Fund Race", "Build your emergency fund while facing unexpected expenses", "Savings", Medium, 60, 12, true, "EmergencyFundGame"),
    game(6, "Loan Calculator Master", "Learn how interest rates and terms affect loan payments", "Loans", Medium, 70, 15, true, "LoanCalculatorGame"),
    game(7, "Tax Filing Challenge", "Complete a simple tax return and maximize your refund", "Taxes", Hard, 90, 18, false, "TaxFilingGame"),
    game(8, "Banking Basics Quest", "Navigate different banking scenarios and make smart choices", "Banking", Easy, 45, 10, true, "BankingQuestGame"),
    game(9, "Gold Guy & Cash Girl Adventure", "Cooperative puzzle game balancing wealth types to solve levels", "Teamwork", Medium, 150, 25, true, "GoldCashAdventureGame"),
];

impl GameInfo {
    /// "10 min" style label for the card.
    pub fn estimated_time(&self) -> String {
        format!("{} min", self.minutes)
    }
}

pub fn unlocked_games() -> impl Iterator<Item = &'static GameInfo> {
    GAMES.iter().filter(|g| g.unlocked)
}

pub fn game_by_id(id: u32) -> Option<&'static GameInfo> {
    GAMES.iter().find(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_games_are_hidden() {
        let ids: Vec<u32> = unlocked_games().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6, 8, 9]);
    }

    #[test]
    fn lookup_by_id() {
        let adventure = game_by_id(9).expect("adventure listed");
        assert_eq!(adventure.xp_reward, 150);
        assert_eq!(adventure.estimated_time(), "25 min");
        assert_eq!(adventure.difficulty.to_string(), "Medium");
        assert_eq!(game_by_id(0), None);
        assert_eq!(game_by_id(10), None);
    }
}
