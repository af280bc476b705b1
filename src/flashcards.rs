//! Flashcard decks and the study-page browser.
//!
//! `FLASHCARD_SETS` are the read-only reference decks. `StudyDeck` is the small
//! interactive deck on the study page: search, flip, shuffle, mark as learned.
use std::collections::BTreeMap;

use derive_more::Display;
use rand::Rng;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

    /// Inverse of `Display`, case-insensitive.
    pub fn from_label(label: &str) -> Option<Difficulty> {
        Self::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub term: &'static str,
    pub definition: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashcardSet {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub cards: &'static [Card],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordOfTheDay {
    pub term: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
}

pub const WORD_OF_THE_DAY: WordOfTheDay = WordOfTheDay {
    term: "Compound Interest",
    definition: "Interest calculated on the initial amount plus all previously earned interest",
    example: "If you save $100 with 5% annual compound interest, after one year you'll have $105, and the next year you'll earn interest on $105, not just $100!",
};

pub const FLASHCARD_SETS: &[FlashcardSet] = &[
    FlashcardSet {
        id: 1,
        title: "Basic Banking Terms",
        category: "Banking",
        difficulty: Difficulty::Beginner,
        cards: BANKING_CARDS,
    },
    FlashcardSet {
        id: 2,
        title: "Budgeting Fundamentals",
        category: "Budgeting",
        difficulty: Difficulty::Beginner,
        cards: BUDGETING_CARDS,
    },
    FlashcardSet {
        id: 3,
        title: "Credit and Debt Basics",
        category: "Credit",
        difficulty: Difficulty::Intermediate,
        cards: CREDIT_CARDS,
    },
];

pub fn flashcard_set(id: u32) -> Option<&'static FlashcardSet> {
    FLASHCARD_SETS.iter().find(|s| s.id == id)
}

const BANKING_CARDS: &[Card] = &[
    Card { id: 1, term: "Account", definition: "A record of financial transactions maintained by a bank for a customer" },
    Card { id: 2, term: "ATM", definition: "Automated Teller Machine - a machine that allows banking transactions without a teller" },
    Card { id: 3, term: "Balance", definition: "The amount of money in an account" },
    Card { id: 4, term: "Deposit", definition: "Money put into an account" },
    Card { id: 5, term: "Withdrawal", definition: "Money taken out of an account" },
    Card { id: 6, term: "Check", definition: "A written order directing a bank to pay money from an account" },
    Card { id: 7, term: "Checking Account", definition: "An account for daily transactions and bill paying" },
    Card { id: 8, term: "Savings Account", definition: "An account that earns interest on deposited money" },
    Card { id: 9, term: "Interest", definition: "Money earned on savings or charged on loans" },
    Card { id: 10, term: "PIN", definition: "Personal Identification Number used for account access" },
    Card { id: 11, term: "Overdraft", definition: "When an account has insufficient funds for a transaction" },
    Card { id: 12, term: "Overdraft Fee", definition: "Charge for spending more money than available in account" },
    Card { id: 13, term: "Direct Deposit", definition: "Electronic transfer of funds directly into an account" },
    Card { id: 14, term: "Debit Card", definition: "Card that deducts money directly from checking account" },
    Card { id: 15, term: "Credit Card", definition: "Card that allows borrowing money up to a certain limit" },
    Card { id: 16, term: "Statement", definition: "Monthly record of all account activity" },
    Card { id: 17, term: "Routing Number", definition: "Nine-digit code identifying a specific bank" },
    Card { id: 18, term: "Account Number", definition: "Unique identifier for a specific bank account" },
    Card { id: 19, term: "Online Banking", definition: "Managing bank accounts through internet" },
    Card { id: 20, term: "Mobile Banking", definition: "Banking through smartphone apps" },
    Card { id: 21, term: "Wire Transfer", definition: "Electronic transfer of funds between banks" },
    Card { id: 22, term: "Money Order", definition: "Prepaid financial instrument used for payments" },
    Card { id: 23, term: "Cashier's Check", definition: "Check guaranteed by the bank's funds" },
    Card { id: 24, term: "Minimum Balance", definition: "Smallest amount required to keep account open" },
    Card { id: 25, term: "Monthly Fee", definition: "Regular charge for maintaining an account" },
    Card { id: 26, term: "Transaction", definition: "Any banking activity that affects account balance" },
    Card { id: 27, term: "Pending Transaction", definition: "Transaction that hasn't been fully processed yet" },
    Card { id: 28, term: "Available Balance", definition: "Money available for immediate use" },
    Card { id: 29, term: "Hold", definition: "Temporary restriction on funds" },
    Card { id: 30, term: "Beneficiary", definition: "Person designated to receive account benefits" },
    Card { id: 31, term: "Joint Account", definition: "Account shared by two or more people" },
    Card { id: 32, term: "Power of Attorney", definition: "Legal authority to act on someone's behalf" },
    Card { id: 33, term: "Signature Card", definition: "Document with account holder's signature on file" },
    Card { id: 34, term: "Safe Deposit Box", definition: "Secure storage container at a bank" },
    Card { id: 35, term: "Notary", definition: "Official who verifies document signatures" },
    Card { id: 36, term: "FDIC", definition: "Federal Deposit Insurance Corporation - insures deposits" },
    Card { id: 37, term: "APY", definition: "Annual Percentage Yield - yearly interest rate earned" },
    Card { id: 38, term: "Compound Interest", definition: "Interest calculated on principal plus previous interest" },
    Card { id: 39, term: "Simple Interest", definition: "Interest calculated only on principal amount" },
    Card { id: 40, term: "Principal", definition: "Original amount of money deposited or borrowed" },
    Card { id: 41, term: "Maturity Date", definition: "Date when investment or loan comes due" },
    Card { id: 42, term: "Certificate of Deposit", definition: "Time deposit with fixed interest rate" },
    Card { id: 43, term: "Money Market", definition: "Account combining features of checking and savings" },
    Card { id: 44, term: "IRA", definition: "Individual Retirement Account for retirement savings" },
    Card { id: 45, term: "529 Plan", definition: "Education savings plan with tax advantages" },
    Card { id: 46, term: "Automatic Transfer", definition: "Scheduled movement of money between accounts" },
    Card { id: 47, term: "Stop Payment", definition: "Request to cancel a check before it's cashed" },
    Card { id: 48, term: "Reconciliation", definition: "Comparing bank statement with personal records" },
    Card { id: 49, term: "Fraud Alert", definition: "Warning of suspicious account activity" },
    Card { id: 50, term: "Identity Theft", definition: "Unauthorized use of personal information" },
];

const BUDGETING_CARDS: &[Card] = &[
    Card { id: 51, term: "Budget", definition: "A plan for spending and saving money over a period" },
    Card { id: 52, term: "Income", definition: "Money received from work, investments, or other sources" },
    Card { id: 53, term: "Expenses", definition: "Money spent on goods and services" },
    Card { id: 54, term: "Fixed Expenses", definition: "Costs that stay the same each month" },
    Card { id: 55, term: "Variable Expenses", definition: "Costs that change from month to month" },
    Card { id: 56, term: "Discretionary Spending", definition: "Money spent on wants rather than needs" },
    Card { id: 57, term: "Needs", definition: "Essential items required for basic living" },
    Card { id: 58, term: "Wants", definition: "Items desired but not essential for living" },
    Card { id: 59, term: "50/30/20 Rule", definition: "Budget guideline: 50% needs, 30% wants, 20% savings" },
    Card { id: 60, term: "Zero-Based Budget", definition: "Every dollar is assigned a specific purpose" },
    Card { id: 61, term: "Emergency Fund", definition: "Money saved for unexpected expenses" },
    Card { id: 62, term: "Sinking Fund", definition: "Money saved for specific future expenses" },
    Card { id: 63, term: "Cash Flow", definition: "Money coming in versus money going out" },
    Card { id: 64, term: "Net Income", definition: "Income after taxes and deductions" },
    Card { id: 65, term: "Gross Income", definition: "Total income before taxes and deductions" },
    Card { id: 66, term: "Deficit", definition: "When expenses exceed income" },
    Card { id: 67, term: "Surplus", definition: "When income exceeds expenses" },
    Card { id: 68, term: "Budget Categories", definition: "Different areas where money is allocated" },
    Card { id: 69, term: "Tracking", definition: "Recording and monitoring spending habits" },
    Card { id: 70, term: "Budget Variance", definition: "Difference between planned and actual spending" },
    Card { id: 71, term: "Envelope Method", definition: "Cash budgeting system using physical envelopes" },
    Card { id: 72, term: "Pay Yourself First", definition: "Saving money before spending on other things" },
    Card { id: 73, term: "Automatic Savings", definition: "Scheduled transfers to savings accounts" },
    Card { id: 74, term: "Debt-to-Income Ratio", definition: "Percentage of income used for debt payments" },
    Card { id: 75, term: "Monthly Budget", definition: "Financial plan covering one month period" },
    Card { id: 76, term: "Annual Budget", definition: "Financial plan covering one year period" },
    Card { id: 77, term: "Budget Review", definition: "Regular evaluation of budget performance" },
    Card { id: 78, term: "Spending Trigger", definition: "Situation that leads to impulsive spending" },
    Card { id: 79, term: "Financial Goal", definition: "Specific monetary objective to achieve" },
    Card { id: 80, term: "Short-term Goal", definition: "Financial target achievable within a year" },
    Card { id: 81, term: "Long-term Goal", definition: "Financial target taking more than a year" },
    Card { id: 82, term: "SMART Goals", definition: "Specific, Measurable, Achievable, Relevant, Time-bound" },
    Card { id: 83, term: "Priority", definition: "Ranking of importance for financial goals" },
    Card { id: 84, term: "Trade-off", definition: "Giving up one thing to get another" },
    Card { id: 85, term: "Opportunity Cost", definition: "Value of the best alternative given up" },
    Card { id: 86, term: "Impulse Purchase", definition: "Unplanned buying decision" },
    Card { id: 87, term: "Comparison Shopping", definition: "Evaluating prices from different sources" },
    Card { id: 88, term: "Unit Price", definition: "Cost per individual item or measurement unit" },
    Card { id: 89, term: "Bulk Buying", definition: "Purchasing large quantities for better prices" },
    Card { id: 90, term: "Generic Brand", definition: "Store-brand product typically cheaper than name brands" },
    Card { id: 91, term: "Coupon", definition: "Voucher offering discount on purchases" },
    Card { id: 92, term: "Rebate", definition: "Partial refund of purchase price" },
    Card { id: 93, term: "Sale", definition: "Temporary price reduction on items" },
    Card { id: 94, term: "Clearance", definition: "Final markdown to sell remaining inventory" },
    Card { id: 95, term: "Price Match", definition: "Store policy to match competitor's lower price" },
    Card { id: 96, term: "Budget App", definition: "Software to help track and manage money" },
    Card { id: 97, term: "Spreadsheet", definition: "Digital tool for organizing financial data" },
    Card { id: 98, term: "Receipt", definition: "Proof of purchase document" },
    Card { id: 99, term: "Expense Report", definition: "Summary of money spent over a period" },
    Card { id: 100, term: "Financial Review", definition: "Regular assessment of financial situation" },
];

const CREDIT_CARDS: &[Card] = &[
    Card { id: 101, term: "Credit", definition: "Ability to borrow money with promise to repay later" },
    Card { id: 102, term: "Credit Score", definition: "Number (300-850) representing creditworthiness" },
    Card { id: 103, term: "Credit Report", definition: "Detailed record of credit history and accounts" },
    Card { id: 104, term: "Credit Bureau", definition: "Company that collects and reports credit information" },
    Card { id: 105, term: "FICO Score", definition: "Most common type of credit score" },
    Card { id: 106, term: "VantageScore", definition: "Alternative credit scoring model" },
    Card { id: 107, term: "Credit History", definition: "Record of borrowing and repayment behavior" },
    Card { id: 108, term: "Credit Limit", definition: "Maximum amount allowed to borrow on credit" },
    Card { id: 109, term: "Available Credit", definition: "Unused portion of credit limit" },
    Card { id: 110, term: "Credit Utilization", definition: "Percentage of credit limit being used" },
    Card { id: 111, term: "Payment History", definition: "Record of on-time and late payments" },
    Card { id: 112, term: "Minimum Payment", definition: "Smallest amount required to keep account current" },
    Card { id: 113, term: "APR", definition: "Annual Percentage Rate - yearly cost of borrowing" },
    Card { id: 114, term: "Interest Rate", definition: "Percentage charged for borrowing money" },
    Card { id: 115, term: "Grace Period", definition: "Time to pay balance without interest charges" },
    Card { id: 116, term: "Balance Transfer", definition: "Moving debt from one card to another" },
    Card { id: 117, term: "Cash Advance", definition: "Borrowing cash against credit card limit" },
    Card { id: 118, term: "Credit Card", definition: "Plastic card allowing purchases on credit" },
    Card { id: 119, term: "Debit Card", definition: "Card that deducts money from bank account" },
    Card { id: 120, term: "Secured Credit Card", definition: "Credit card requiring cash deposit as collateral" },
    Card { id: 121, term: "Unsecured Credit Card", definition: "Credit card not requiring collateral" },
    Card { id: 122, term: "Annual Fee", definition: "Yearly charge for having a credit card" },
    Card { id: 123, term: "Late Fee", definition: "Penalty for missing payment deadline" },
    Card { id: 124, term: "Over-limit Fee", definition: "Charge for exceeding credit limit" },
    Card { id: 125, term: "Foreign Transaction Fee", definition: "Charge for purchases in other countries" },
    Card { id: 126, term: "Balance", definition: "Amount owed on credit account" },
    Card { id: 127, term: "Statement Balance", definition: "Amount owed at end of billing cycle" },
    Card { id: 128, term: "Current Balance", definition: "Real-time amount owed including recent transactions" },
    Card { id: 129, term: "Billing Cycle", definition: "Period between credit card statements" },
    Card { id: 130, term: "Due Date", definition: "Deadline for minimum payment" },
    Card { id: 131, term: "Credit Application", definition: "Request to obtain new credit account" },
    Card { id: 132, term: "Hard Inquiry", definition: "Credit check that may lower credit score" },
    Card { id: 133, term: "Soft Inquiry", definition: "Credit check that doesn't affect credit score" },
    Card { id: 134, term: "Authorized User", definition: "Person allowed to use someone else's credit card" },
    Card { id: 135, term: "Joint Account", definition: "Credit account shared by two people" },
    Card { id: 136, term: "Cosigner", definition: "Person who agrees to pay debt if borrower defaults" },
    Card { id: 137, term: "Default", definition: "Failure to repay debt as agreed" },
    Card { id: 138, term: "Delinquent", definition: "Past due on payment obligations" },
    Card { id: 139, term: "Charge-off", definition: "Debt written off as unlikely to be collected" },
    Card { id: 140, term: "Collection", definition: "Attempt to recover unpaid debt" },
    Card { id: 141, term: "Debt Consolidation", definition: "Combining multiple debts into one payment" },
    Card { id: 142, term: "Debt Settlement", definition: "Paying less than full amount owed" },
    Card { id: 143, term: "Bankruptcy", definition: "Legal process for handling overwhelming debt" },
    Card { id: 144, term: "Credit Counseling", definition: "Professional help with debt management" },
    Card { id: 145, term: "Debt Management Plan", definition: "Structured repayment program" },
    Card { id: 146, term: "Credit Repair", definition: "Process of improving credit score" },
    Card { id: 147, term: "Identity Theft", definition: "Unauthorized use of personal information" },
    Card { id: 148, term: "Fraud Alert", definition: "Warning placed on credit report" },
    Card { id: 149, term: "Credit Freeze", definition: "Restriction preventing new credit accounts" },
    Card { id: 150, term: "Credit Monitoring", definition: "Service tracking changes to credit report" },
];
// --- Study deck --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyCard {
    pub id: u32,
    pub term: &'static str,
    pub definition: &'static str,
    pub category: &'static str,
    pub learned: bool,
}

const fn study(
    id: u32,
    term: &'static str,
    definition: &'static str,
    category: &'static str,
    learned: bool,
) -> StudyCard {
    StudyCard { id, term, definition, category, learned }
}

pub const STUDY_CARDS: &[StudyCard] = &[
    study(1, "Budget", "A plan for how to spend and save money over a specific period of time", "Basics", false),
    study(2, "Credit Score", "A number (300-850) that represents how likely you are to pay back borrowed money", "Credit", true),
    study(3, "Interest", "Money charged by lenders or paid by banks for borrowing or saving money", "Basics", false),
    study(4, "Investment", "Using money to buy something that you expect will earn more money over time", "Investing", false),
    study(5, "Emergency Fund", "Money saved specifically for unexpected expenses or financial emergencies", "Savings", true),
];

#[derive(Clone, Debug)]
pub struct StudyDeck {
    cards: Vec<StudyCard>,
    query: String,
    current: usize,
    show_answer: bool,
}

impl Default for StudyDeck {
    fn default() -> Self {
        Self::new(STUDY_CARDS.to_vec())
    }
}

impl StudyDeck {
    pub fn new(cards: Vec<StudyCard>) -> Self {
        Self {
            cards,
            query: String::new(),
            current: 0,
            show_answer: false,
        }
    }

    fn visible(&self) -> impl Iterator<Item = &StudyCard> {
        let q = self.query.to_lowercase();
        self.cards.iter().filter(move |c| c.term.to_lowercase().contains(&q))
    }

    /// Filter by term (case-insensitive substring); jumps back to the first match.
    pub fn search(&mut self, term: &str) {
        self.query = term.to_string();
        self.show(0);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current(&self) -> Option<&StudyCard> {
        self.visible().nth(self.current)
    }

    pub fn next(&mut self) {
        let len = self.visible().count();
        if len > 0 {
            self.show((self.current + 1) % len);
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.visible().count();
        if len > 0 {
            self.show(rng.gen_range(0..len));
        }
    }

    fn show(&mut self, index: usize) {
        self.current = index;
        self.show_answer = false;
    }

    /// Flip the current card; returns whether the definition is now showing.
    pub fn flip(&mut self) -> bool {
        self.show_answer = !self.show_answer;
        self.show_answer
    }

    pub fn answer_shown(&self) -> bool {
        self.show_answer
    }

    /// New learned state of card `id`, or `None` if no such card.
    pub fn toggle_learned(&mut self, id: u32) -> Option<bool> {
        let card = self.cards.iter_mut().find(|c| c.id == id)?;
        card.learned = !card.learned;
        Some(card.learned)
    }

    /// 1-based position and size of the filtered deck; `(0, 0)` when empty.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.visible().count();
        if total == 0 {
            (0, 0)
        } else {
            (self.current + 1, total)
        }
    }

    pub fn learned_count(&self) -> usize {
        self.cards.iter().filter(|c| c.learned).count()
    }

    pub fn category_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for c in &self.cards {
            *counts.entry(c.category).or_insert(0) += 1;
        }
        counts
    }
}
