// Additional integration tests for dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use econome::adventure::{TileKind, levels};
use econome::chat::Topic;
use econome::{budget, catalog, connections, credit, flashcards, study_notes};

#[test]
fn word_list_is_unique_uppercase_and_fits() {
    let mut seen = HashSet::new();
    for w in econome::WORD_SEARCH_WORDS {
        assert!(seen.insert(*w), "duplicate word '{}' in WORD_SEARCH_WORDS", w);
        assert!(!w.is_empty(), "empty word in WORD_SEARCH_WORDS");
        assert!(w.chars().all(|c| c.is_ascii_uppercase()), "word '{}' is not A-Z", w);
        assert!(w.len() <= 15, "word '{}' does not fit the default grid", w);
    }
    assert_eq!(seen.len(), 16);
}

#[test]
fn connections_terms_cover_each_category_four_times() {
    let names: HashSet<&str> = connections::CATEGORIES.iter().map(|c| c.name).collect();
    for c in connections::CATEGORIES {
        let n = connections::TERMS.iter().filter(|t| t.category == c.name).count();
        assert_eq!(n, connections::GROUP_SIZE, "category '{}' has {} terms", c.name, n);
    }
    for t in connections::TERMS {
        assert!(names.contains(t.category), "term '{}' has unknown category", t.text);
    }
    let difficulties: HashSet<u8> = connections::CATEGORIES.iter().map(|c| c.difficulty).collect();
    assert_eq!(difficulties, HashSet::from([1, 2, 3, 4]));
}

#[test]
fn budget_recommendations_add_up_to_income() {
    let total: i64 = budget::CATEGORIES.iter().map(|c| c.recommended).sum();
    assert_eq!(total, budget::DEFAULT_INCOME);
    assert!(budget::CATEGORIES.iter().all(|c| c.recommended > 0));
}

#[test]
fn every_credit_scenario_has_a_best_choice() {
    for s in credit::SCENARIOS {
        assert!(
            s.choices.iter().any(|c| c.impact > 0),
            "scenario '{}' has no positive choice",
            s.description
        );
    }
}

#[test]
fn chat_topics_have_replies() {
    for topic in [
        Topic::Budget,
        Topic::Credit,
        Topic::Investing,
        Topic::Saving,
        Topic::Emergency,
        Topic::Job,
        Topic::College,
        Topic::Car,
        Topic::Taxes,
        Topic::General,
    ] {
        assert!(!topic.responses().is_empty(), "{:?} has no replies", topic);
    }
}

#[test]
fn flashcard_ids_are_unique() {
    let mut set_ids = HashSet::new();
    let mut card_ids = HashSet::new();
    for set in flashcards::FLASHCARD_SETS {
        assert!(set_ids.insert(set.id), "duplicate set id {}", set.id);
        assert!(!set.cards.is_empty(), "set '{}' is empty", set.title);
        for card in set.cards {
            assert!(card_ids.insert(card.id), "duplicate card id {} in '{}'", card.id, set.title);
            assert!(!card.definition.is_empty(), "card '{}' has no definition", card.term);
        }
    }
    let study: HashSet<u32> = flashcards::STUDY_CARDS.iter().map(|c| c.id).collect();
    assert_eq!(study.len(), flashcards::STUDY_CARDS.len());
}

#[test]
fn adventure_levels_are_well_formed() {
    for level in levels() {
        assert_eq!(
            level.tiles.len(),
            level.width as usize * level.height as usize,
            "level '{}' has ragged rows",
            level.name
        );
        for kind in [TileKind::GoldStart, TileKind::CashStart, TileKind::GoldExit, TileKind::CashExit] {
            let n = level.tiles.iter().filter(|t| **t == kind).count();
            assert_eq!(n, 1, "level '{}' needs exactly one {:?}", level.name, kind);
        }
        // Closed room: the whole border is wall.
        for x in 0..level.width {
            assert_eq!(level.tile(x, 0), TileKind::Wall);
            assert_eq!(level.tile(x, level.height - 1), TileKind::Wall);
        }
        for y in 0..level.height {
            assert_eq!(level.tile(0, y), TileKind::Wall);
            assert_eq!(level.tile(level.width - 1, y), TileKind::Wall);
        }
    }
}

#[test]
fn study_notes_are_complete() {
    let mut ids = HashSet::new();
    for note in study_notes::STUDY_NOTES {
        assert!(ids.insert(note.id), "duplicate note id {}", note.id);
        assert_eq!(note.content.len(), 5, "note '{}' should have five bullets", note.title);
        assert!(note.content.iter().all(|l| l.contains("**")), "note '{}' has an unlabeled bullet", note.title);
    }
}

#[test]
fn catalog_entries_are_unique_and_rewarding() {
    let mut ids = HashSet::new();
    let mut components = HashSet::new();
    for game in catalog::GAMES {
        assert!(ids.insert(game.id), "duplicate game id {}", game.id);
        assert!(components.insert(game.component), "'{}' mounted twice", game.component);
        assert!(game.xp_reward > 0 && game.minutes > 0, "'{}' has no reward or time", game.title);
    }
    assert_eq!(ids.len(), 9);
}
