//! Study notes: short topic sheets with a search box and two drop-down filters.

use crate::flashcards::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudyNote {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    /// Bullet lines, markdown bold kept as written.
    pub content: &'static [&'static str],
}

pub const STUDY_NOTES: &[StudyNote] = &[
    StudyNote {
        id: 2,
        title: "Credit Card Fundamentals",
        category: "Credit",
        difficulty: Difficulty::Intermediate,
        content: &[
            "💳 **Credit Score Range:** 300-850 (higher is better!)",
            "⚡ **Payment History:** Most important factor (35% of score)",
            "📊 **Credit Utilization:** Keep below 30% of available credit",
            "⏰ **Pay On Time:** Late payments hurt your score badly",
            "🚫 **Avoid:** Cash advances and maxing out cards",
        ],
    },
    StudyNote {
        id: 3,
        title: "Investing for Teens",
        category: "Investing",
        difficulty: Difficulty::Advanced,
        content: &[
            "📈 **Compound Interest:** Your money grows faster over time",
            "🎲 **Risk vs Reward:** Higher potential returns = higher risk",
            "🏪 **Stock Market:** Buy pieces of companies you believe in",
            "🔄 **Diversification:** Don't put all eggs in one basket",
            "⏳ **Time Horizon:** Start early, even with small amounts!",
        ],
    },
    StudyNote {
        id: 4,
        title: "Emergency Fund Essentials",
        category: "Savings",
        difficulty: Difficulty::Beginner,
        content: &[
            "🆘 **What It Is:** Money saved for unexpected expenses",
            "🎯 **Goal Amount:** 3-6 months of expenses (start with $500)",
            "🏦 **Where to Keep:** High-yield savings account",
            "🚫 **When to Use:** True emergencies only (not wants!)",
            "💪 **Build Gradually:** Even $25/month makes a difference",
        ],
    },
    StudyNote {
        id: 5,
        title: "Tax Basics for Teens",
        category: "Taxes",
        difficulty: Difficulty::Intermediate,
        content: &[
            "📋 **W-2 Form:** Shows how much you earned and taxes paid",
            "💵 **Standard Deduction:** Amount you don't pay taxes on",
            "📅 **Tax Day:** April 15th (don't be late!)",
            "💰 **Refund:** Getting back money you overpaid",
            "🎓 **Teen Tip:** You might not owe taxes if you earn under $12,950",
        ],
    },
    StudyNote {
        id: 6,
        title: "Banking 101",
        category: "Banking",
        difficulty: Difficulty::Beginner,
        content: &[
            "🏦 **Checking Account:** For daily spending and bill paying",
            "💰 **Savings Account:** For money you want to keep and grow",
            "💳 **Debit Card:** Spends money directly from your account",
            "🔒 **Online Banking:** Manage money 24/7 from your phone",
            "⚠️ **Fees:** Watch out for ATM and overdraft fees!",
        ],
    },
];

/// Current state of the search box and filters. `None` means "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub query: String,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl NoteFilter {
    /// Query hits the title or any bullet, ignoring case.
    pub fn matches(&self, note: &StudyNote) -> bool {
        let query = self.query.to_lowercase();
        let hit = note.title.to_lowercase().contains(&query)
            || note.content.iter().any(|line| line.to_lowercase().contains(&query));
        hit && self.category.as_deref().is_none_or(|c| c == note.category)
            && self.difficulty.is_none_or(|d| d == note.difficulty)
    }

    pub fn apply<'a>(&'a self, notes: &'a [StudyNote]) -> impl Iterator<Item = &'a StudyNote> + 'a {
        notes.iter().filter(move |n| self.matches(n))
    }
}

/// Distinct categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for note in STUDY_NOTES {
        if !out.contains(&note.category) {
            out.push(note.category);
        }
    }
    out
}

/// Distinct difficulties in first-seen order.
pub fn difficulties() -> Vec<Difficulty> {
    let mut out = Vec::new();
    for note in STUDY_NOTES {
        if !out.contains(&note.difficulty) {
            out.push(note.difficulty);
        }
    }
    out
}
