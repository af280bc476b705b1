// Whole-game runs of the smaller drills through their public APIs.

use econome::GameError;
use econome::adventure::{AdventureGame, Character, MoveEvent, Step};
use econome::budget::{self, BudgetGame};
use econome::chat::{ChatLog, Speaker};
use econome::connections::{CATEGORIES, ConnectionsGame, GuessOutcome, Status, TERMS};
use econome::credit::{CreditGame, Rating};
use econome::flashcards::StudyDeck;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn connections_hardest_first_after_shuffle() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut game = ConnectionsGame::new(&mut rng);
    let mut order: Vec<_> = CATEGORIES.iter().collect();
    order.sort_by_key(|c| std::cmp::Reverse(c.difficulty));
    for c in order {
        game.shuffle(&mut rng);
        for t in TERMS.iter().filter(|t| t.category == c.name) {
            assert!(game.toggle(t.text));
        }
        assert_eq!(game.submit(), Ok(GuessOutcome::Correct { category: c.name }));
    }
    assert_eq!(game.status(), Status::Won { score: 1000 });
    assert_eq!(game.board().count(), 0);
}

#[test]
fn budget_then_reset() {
    let mut game = BudgetGame::default();
    for (i, c) in budget::CATEGORIES.iter().enumerate() {
        game.set_budgeted(i, c.recommended * 2).expect("valid index");
    }
    assert_eq!(game.remaining(), -2000);
    assert_eq!(game.submit(), 0);
    game.reset();
    assert_eq!(game.remaining(), game.income());
}

#[test]
fn credit_worst_path_stays_fair() {
    let mut game = CreditGame::new();
    while let Some(s) = game.scenario() {
        let worst = s
            .choices
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| c.impact)
            .map(|(i, _)| i)
            .expect("three choices");
        game.choose(worst).expect("in range");
    }
    // 650 - 5 - 15 - 10 - 20 - 5
    assert_eq!(game.score(), 595);
    assert_eq!(game.rating(), Rating::Fair);
    assert_eq!(game.improvement(), -55);
}

#[test]
fn adventure_blocked_by_hazards() {
    let mut game = AdventureGame::new();
    game.select_level(1).expect("level 2 exists");
    // Cash from (7,1) steps into the water channel at (5,2).
    for step in [Step::Left, Step::Down, Step::Left] {
        game.move_character(Character::Cash, step).expect("running");
    }
    assert_eq!(game.position(Character::Cash).x, 5, "Cash floats on water");
    // Gold from (1,1) walks to (4,2), next to the same channel.
    for step in [Step::Right, Step::Right, Step::Down, Step::Right] {
        game.move_character(Character::Gold, step).expect("running");
    }
    assert_eq!(
        game.move_character(Character::Gold, Step::Right),
        Ok(MoveEvent::Blocked(Character::Gold))
    );
    assert_eq!(game.moves(), 7);
    game.reset();
    assert_eq!(game.level_index(), 0);
    assert_eq!(game.select_level(9), Err(GameError::OutOfRange { what: "level", index: 9, len: 2 }));
}

#[test]
fn chat_and_study_deck() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut log = ChatLog::new();
    log.send("How do I build an emergency fund?", &mut rng).expect("reply");
    assert_eq!(log.messages().len(), 3);
    assert_eq!(log.messages()[2].from, Speaker::Cash);

    let mut deck = StudyDeck::default();
    deck.search("credit");
    assert_eq!(deck.current().map(|c| c.category), Some("Credit"));
    assert_eq!(deck.progress(), (1, 1));
}
