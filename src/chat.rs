//! "Chat with Cash": keyword-matched canned replies from the mascot.
//!
//! There is no language model here. A message is lowercased, checked against a
//! short list of topic keywords in priority order, and answered with a random
//! line from that topic's table.

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Budget,
    Credit,
    Investing,
    Saving,
    Emergency,
    Job,
    College,
    Car,
    Taxes,
    General,
}

/// Checked top to bottom; first topic with a keyword hit wins.
const KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Budget, &["budget"]),
    (Topic::Credit, &["credit", "score"]),
    (Topic::Investing, &["invest", "stock", "compound"]),
    (Topic::Saving, &["save", "saving"]),
    (Topic::Emergency, &["emergency", "fund"]),
    (Topic::Job, &["job", "work"]),
    (Topic::College, &["college", "student", "loan"]),
    (Topic::Car, &["car", "auto"]),
    (Topic::Taxes, &["tax", "w-2"]),
];

pub const GREETING: &str = "Hi there! I'm Cash, your friendly financial guide! Ask me anything about money, budgets, saving, investing, or credit. I'm here to help make finance fun and easy to understand! 🦩💰";

impl Topic {
    pub fn responses(self) -> &'static [&'static str] {
        match self {
            Topic::Budget => &[
                "Great question! A budget is like a game plan for your money. It helps you decide how much to spend, save, and invest each month! 💰",
                "Think of budgeting like this: if your money was pizza slices, budgeting helps you decide how many slices go to fun stuff, savings, and needs! 🍕",
            ],
            Topic::Credit => &[
                "Credit is like borrowing money with a promise to pay it back later. Your credit score (300-850) shows how good you are at keeping those promises! 📊",
                "Building good credit is like leveling up in a video game - the higher your score, the better deals you unlock! 🎮",
            ],
            Topic::Investing => &[
                "Investing is putting your money to work so it can grow over time! It's like planting money seeds that grow into money trees! 🌱💰",
                "Think of investing like collecting trading cards - you buy them hoping they'll be worth more later! But remember, sometimes values can go down too. 📈",
            ],
            Topic::Saving => &[
                "Saving money is like storing up power-ups for your future self! Start small - even $5 a week adds up to over $250 in a year! ⚡",
                "Here's a cool trick: try the 52-week challenge! Save $1 the first week, $2 the second week, and so on. You'll have $1,378 by the end! 🎯",
            ],
            Topic::Emergency => &[
                "An emergency fund is your financial superhero cape! It protects you when unexpected expenses try to mess up your budget! 🦸‍♂️",
                "Aim to save $500-$1000 for emergencies. It's like having a financial safety net when life throws curveballs! ⚾",
            ],
            Topic::Job => &[
                "Getting your first job is so exciting! 🎉 Here are some money tips: Set up direct deposit (it's safer than cash), understand your pay stub (gross vs net pay), and start saving immediately - even $25 from each paycheck adds up! Don't forget to fill out your W-4 form correctly for taxes.",
                "First job = first step to financial independence! 💼 Open a checking and savings account if you haven't already. Pay yourself first by saving a percentage before spending on anything else. And remember - learning about money now will pay off for your entire life!",
            ],
            Topic::College => &[
                "College planning is smart thinking! 🎓 Look into 529 education savings plans - they grow tax-free for education expenses. Fill out the FAFSA for financial aid, and research scholarships early. Community college for the first two years can save thousands! Remember: student loans are real money you'll have to pay back.",
                "College is an investment in yourself! 📚 Consider the return on investment - will your chosen career pay enough to justify the cost? Look for work-study programs, apply for grants and scholarships, and live frugally. Your future self will appreciate not having massive student loan debt!",
            ],
            Topic::Car => &[
                "Buying a car is a big financial decision! 🚗 Remember the total cost includes insurance, gas, maintenance, and repairs - not just the purchase price. Consider used cars (they can be great deals!), get pre-approved for financing to know your budget, and always negotiate the total price, not just monthly payments.",
                "Cars are depreciating assets - they lose value over time! 📉 Buy reliable, not flashy. Research reliability ratings, get a pre-purchase inspection, and remember that a $500 car payment for 5 years = $30,000! Sometimes a good used car is way smarter than a new one.",
            ],
            Topic::Taxes => &[
                "Taxes aren't as scary as they seem! 📋 If you're working, you might need to file a tax return. The good news? If you earn under $12,950, you probably won't owe federal taxes! Keep your W-2 forms, and consider using free filing software. Getting a refund means you overpaid - it's your money coming back!",
                "Tax time can actually be exciting if you get a refund! 💰 But here's a pro tip: instead of getting a big refund, adjust your withholding so you get more money in each paycheck and invest the difference. Why give the government a free loan? You could be earning interest on that money!",
            ],
            Topic::General => &[
                "That's a great question! I'm always here to help you learn about money. Try asking me about budgeting, saving, credit, or investing! 🤔",
                "I love helping teens master money skills! Feel free to ask me anything about personal finance - I'll break it down in a fun way! 💡",
                "Money questions are my favorite! Whether it's about earning, spending, saving, or investing - I'm here to help! 🦩💰",
            ],
        }
    }
}

/// Topic for a user message (case-insensitive substring match).
pub fn classify(message: &str) -> Topic {
    let lower = message.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::General)
}

pub fn respond<R: Rng + ?Sized>(message: &str, rng: &mut R) -> &'static str {
    let responses = classify(message).responses();
    responses.choose(rng).copied().unwrap_or(GREETING)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Cash,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub from: Speaker,
}

/// Chat transcript, opened by the mascot's greeting.
#[derive(Clone, Debug)]
pub struct ChatLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                id: 1,
                text: GREETING.to_string(),
                from: Speaker::Cash,
            }],
            next_id: 2,
        }
    }

    /// Post a user message and Cash's reply. Blank input is ignored.
    pub fn send<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        let reply = respond(text, rng);
        self.push(text.to_string(), Speaker::User);
        self.push(reply.to_string(), Speaker::Cash);
        self.messages.last()
    }

    fn push(&mut self, text: String, from: Speaker) {
        self.messages.push(Message {
            id: self.next_id,
            text,
            from,
        });
        self.next_id += 1;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
