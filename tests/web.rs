// Browser-side checks of the wasm exports. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use econome::WordSearchConfig;
use econome::web::{
    WebAdventure, WebBudget, WebConnections, WebCredit, WebStudyDeck, WordSearchGame, chat_reply,
    game_title, game_xp, study_note_categories, study_note_content, study_note_ids, unlocked_game_ids,
};
use econome::word_search::generate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn seeded_game_exposes_grid() {
    let game = WordSearchGame::new(Some(7)).expect("generates");
    assert_eq!(game.grid_size(), 15);
    assert_eq!(game.total_words(), 16);
    let rows = game.letters();
    assert_eq!(rows.len(), 15);
    assert!(rows.iter().all(|r| r.len() == 15));
    assert_eq!(game.letter(0, 0).map(|s| s.len()), Some(1));
    assert_eq!(game.letter(15, 0), None);
}

#[wasm_bindgen_test]
fn drag_outside_line_finds_nothing() {
    let mut game = WordSearchGame::new(Some(7)).expect("generates");
    game.pointer_down(0, 0);
    game.pointer_enter(1, 2);
    assert!(game.is_selected(0, 0));
    assert_eq!(game.pointer_up(), Ok(false));
    assert!(!game.is_selected(0, 0));
    game.pointer_down(3, 3);
    game.pointer_leave();
    assert!(!game.is_selected(3, 3));
    assert_eq!(game.found_count(), 0);
}

#[wasm_bindgen_test]
fn timer_can_start_and_stop() {
    let mut game = WordSearchGame::new(Some(1)).expect("generates");
    game.start_timer().expect("window available");
    game.start_timer().expect("second start is a no-op");
    game.stop_timer();
    assert_eq!(game.elapsed(), 0);
}

#[wasm_bindgen_test]
fn completion_calls_back_and_restart_rearms_timer() {
    // The game seeds its generator the same way, so the layout is known.
    let puzzle = generate(&WordSearchConfig::default(), &mut StdRng::seed_from_u64(7))
        .expect("default config always generates");
    let mut game = WordSearchGame::new(Some(7)).expect("generates");

    let calls = Rc::new(Cell::new(0u32));
    let last_score = Rc::new(Cell::new(0u32));
    let callback = {
        let calls = Rc::clone(&calls);
        let last_score = Rc::clone(&last_score);
        Closure::wrap(Box::new(move |score: u32| {
            calls.set(calls.get() + 1);
            last_score.set(score);
        }) as Box<dyn FnMut(u32)>)
    };
    game.set_on_complete(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());
    game.start_timer().expect("window available");
    assert!(game.timer_running());

    for placement in &puzzle.placements {
        let (first, rest) = placement.positions.split_first().expect("non-empty word");
        game.pointer_down(first.row, first.col);
        for pos in rest {
            game.pointer_enter(pos.row, pos.col);
        }
        assert_eq!(game.pointer_up(), Ok(true), "{} not found", placement.word);
    }

    assert_eq!(game.found_count(), 16);
    assert_eq!(calls.get(), 1);
    assert_eq!(last_score.get(), 1000);
    assert_eq!(game.score(), Some(1000));
    assert!(!game.timer_running(), "completion stops the clock");

    game.restart().expect("regenerates");
    assert!(game.timer_running(), "restart brings the clock back");
    assert_eq!(game.elapsed(), 0);
    assert_eq!(game.found_count(), 0);

    game.stop_timer();
    game.restart().expect("regenerates");
    assert!(!game.timer_running(), "a stopped clock stays stopped");
}

#[wasm_bindgen_test]
fn chat_and_adventure_bindings() {
    assert!(!chat_reply("what about my credit score?").is_empty());
    let mut adv = WebAdventure::new();
    assert_eq!(adv.key("w"), "Gold Guy is too heavy for that path!");
    assert_eq!(adv.key("q"), "");
    assert_eq!(adv.moves(), 0);
    assert_eq!(adv.level(), 1);
}

#[wasm_bindgen_test]
fn connections_binding_solves_a_group() {
    let mut game = WebConnections::new(Some(3));
    assert_eq!(game.board().len(), 16);
    assert!(game.submit().is_err(), "nothing selected");

    for term in ["CHECKING", "SAVINGS", "DEPOSIT", "WITHDRAWAL"] {
        assert!(game.toggle(term));
    }
    assert!(game.is_selected("DEPOSIT"));
    assert_eq!(game.submit(), Ok(true));
    assert_eq!(game.solved(), vec!["Banking Services".to_string()]);
    assert_eq!(game.board().len(), 12);
    assert!(!game.is_selected("DEPOSIT"));
    assert_eq!(game.hint().as_deref(), Some("Investment Types: Different ways to invest money"));

    for term in ["STOCKS", "BONDS", "ETF", "APR"] {
        game.toggle(term);
    }
    assert_eq!(game.submit(), Ok(false));
    assert_eq!(game.mistakes(), 1);
    assert!(game.one_away());
    assert_eq!(game.score(), None);
}

#[wasm_bindgen_test]
fn budget_binding_rounds_and_caps_dollars() {
    let mut game = WebBudget::new(None);
    assert_eq!(game.category_count(), 8);
    for i in 0..game.category_count() {
        let target = game.recommended(i).expect("category exists");
        game.set_budgeted(i, target + 0.4).expect("valid index");
    }
    assert_eq!(game.remaining(), 0.0);
    assert_eq!(game.feedback(), None);
    assert_eq!(game.submit(), 1000);
    assert_eq!(game.feedback().as_deref(), Some("Excellent budgeting! You're a natural!"));
    assert!(game.set_budgeted(0, 10.0).is_err(), "locked after submit");

    game.reset();
    game.set_budgeted(0, 1e300).expect("valid index");
    assert_eq!(game.budgeted(0), Some(20_000.0));
    game.set_budgeted(0, f64::NAN).expect("valid index");
    assert_eq!(game.budgeted(0), Some(0.0));
    assert!(game.set_budgeted(99, 1.0).is_err());
}

#[wasm_bindgen_test]
fn credit_binding_runs_to_the_end() {
    let mut game = WebCredit::new();
    assert_eq!(game.score(), 650);
    assert_eq!(game.choices().len(), 3);
    let explanation = game.choose(1).expect("first scenario");
    assert!(explanation.starts_with("Excellent!"));
    assert_eq!(game.score(), 675);
    while !game.is_complete() {
        game.choose(0).expect("scenario left");
    }
    assert_eq!(game.decisions(), 5);
    assert_eq!(game.scenario(), None);
    assert!(game.choices().is_empty());
    assert!(game.choose(0).is_err());
    assert!(!game.rating().is_empty());
    game.reset();
    assert_eq!(game.decisions(), 0);
}

#[wasm_bindgen_test]
fn study_bindings_filter_cards_and_notes() {
    let mut deck = WebStudyDeck::new();
    assert_eq!(deck.total(), 5);
    deck.search("emergency");
    assert_eq!(deck.term().as_deref(), Some("Emergency Fund"));
    assert!(deck.is_learned());
    assert_eq!(deck.position(), 1);
    assert!(deck.flip());
    deck.shuffle();
    assert_eq!(deck.card_id(), Some(5));

    assert_eq!(study_note_ids("", "All", "All"), vec![2, 3, 4, 5, 6]);
    assert_eq!(study_note_ids("", "Savings", "Beginner"), vec![4]);
    assert_eq!(study_note_ids("APRIL", "", ""), vec![5]);
    assert!(study_note_ids("", "All", "Expert").is_empty());
    assert_eq!(study_note_categories().first().map(String::as_str), Some("All"));
    assert_eq!(study_note_content(6).len(), 5);
    assert!(study_note_content(1).is_empty());

    assert_eq!(unlocked_game_ids().len(), 7);
    assert_eq!(game_xp(9), Some(150));
    assert_eq!(game_title(3).as_deref(), Some("Investment Adventure"));
}
