//! Browser smoke tests (run with `wasm-pack test --headless --firefox`).

use crate::SudokuApp;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_new_app_deals_a_puzzle() {
    let app = SudokuApp::new("easy").expect("app should construct");
    assert_eq!(app.difficulty(), "easy");
    assert!(app.is_active());
    assert_eq!(app.elapsed_secs(), 0);
    assert!(app.board_state().is_ok());
}

#[wasm_bindgen_test]
fn test_unknown_difficulty_falls_back_to_easy() {
    let app = SudokuApp::new("impossible").expect("app should construct");
    assert_eq!(app.difficulty(), "easy");
}

#[wasm_bindgen_test]
fn test_out_of_range_input_is_discarded() {
    let mut app = SudokuApp::new("easy").expect("app should construct");
    assert!(!app.set_digit(9, 0, 5));
    assert!(!app.set_digit(0, 0, 0));
    assert!(!app.clear_cell(0, 9));
}

#[wasm_bindgen_test]
fn test_check_incomplete_on_fresh_board() {
    let mut app = SudokuApp::new("medium").expect("app should construct");
    let report = app.check().expect("check should serialize");
    let status = js_sys::Reflect::get(&report, &"status".into()).unwrap();
    assert_eq!(status.as_string().as_deref(), Some("incomplete"));
}

#[wasm_bindgen_test]
fn test_preferences_round_trip() {
    let app = SudokuApp::new("easy").expect("app should construct");
    app.set_theme("dark");
    assert_eq!(app.theme().as_deref(), Some("dark"));
    app.set_font("Poppins");
    assert_eq!(app.font().as_deref(), Some("Poppins"));
}
