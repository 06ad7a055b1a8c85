//! Rendering tests for the three screens using ratatui's TestBackend.

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use trivia_tui::adapters::MockHttpClient;
use trivia_tui::api::{QuestionFetch, ResponseCode, TriviaClient};
use trivia_tui::app::{App, SetupFocus};
use trivia_tui::config::ApiConfig;
use trivia_tui::models::{Category, ProfileField, Question, SessionToken};
use trivia_tui::session::Screen;
use trivia_tui::ui;

fn test_app() -> App {
    let client = TriviaClient::new(Arc::new(MockHttpClient::new()), ApiConfig::default());
    let mut app = App::new(client);
    app.session.apply_token(Ok(SessionToken::new("tok")));
    app
}

fn fill_profile(app: &mut App) {
    app.session.update_profile(ProfileField::FirstName, "Ada");
    app.session.update_profile(ProfileField::Category, "9");
    app.session.update_profile(ProfileField::Difficulty, "easy");
}

fn question() -> Question {
    Question::new(
        "Which planet is known as the &quot;Red Planet&quot;?",
        "Mars",
        vec!["Venus".to_string(), "Jupiter".to_string(), "Saturn".to_string()],
    )
}

/// Put the app on the question screen without touching the network.
fn app_on_question() -> App {
    let mut app = test_app();
    fill_profile(&mut app);
    app.session.begin_question_fetch().unwrap();
    app.session
        .apply_question_fetch(Ok(QuestionFetch::Batch(vec![question()])));
    app
}

fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

#[test]
fn test_header_and_score_panel_always_render() {
    let mut app = test_app();
    app.session.score.apply(true);

    let content = render_to_string(&app, 80, 30);
    assert!(content.contains("Trivia Quiz"));
    assert!(content.contains("How Much Do You Know?"));
    assert!(content.contains("Score: 1"));
    assert!(content.contains("High Score: 1"));
}

#[test]
fn test_setup_screen_shows_placeholders() {
    let app = test_app();
    let content = render_to_string(&app, 80, 30);

    assert!(content.contains("First Name:"));
    assert!(content.contains("-- Select Category --"));
    assert!(content.contains("-- Select Difficulty --"));
    assert!(content.contains("Take Quiz"));
    assert!(!content.contains("Loading questions..."));
}

#[test]
fn test_setup_screen_shows_selected_values() {
    let mut app = test_app();
    fill_profile(&mut app);
    app.setup_focus = SetupFocus::Category;

    let content = render_to_string(&app, 80, 30);
    assert!(content.contains("Ada"));
    assert!(content.contains("General Knowledge"));
    assert!(content.contains("Easy"));
}

#[test]
fn test_loading_indicator_while_fetch_in_flight() {
    let mut app = test_app();
    fill_profile(&mut app);
    app.session.begin_question_fetch().unwrap();

    let content = render_to_string(&app, 80, 30);
    assert!(content.contains("Loading questions..."));
}

#[test]
fn test_validation_error_renders_on_setup() {
    let mut app = test_app();
    let _ = app.session.begin_question_fetch();

    let content = render_to_string(&app, 80, 30);
    assert!(content.contains("All fields must be filled out."));
}

#[test]
fn test_no_results_notice_names_category_and_difficulty() {
    let mut app = test_app();
    fill_profile(&mut app);
    app.session.begin_question_fetch().unwrap();
    app.session
        .apply_question_fetch(Ok(QuestionFetch::Empty(ResponseCode::NoResults)));

    assert_eq!(app.screen(), Screen::Setup);
    let content = render_to_string(&app, 120, 30);
    assert!(content.contains("There are no questions for General Knowledge with a difficulty of Easy"));
    assert!(content.contains("Back Home"));
}

#[test]
fn test_no_results_notice_keeps_fetched_query_after_form_edits() {
    let mut app = test_app();
    fill_profile(&mut app);
    app.session.begin_question_fetch().unwrap();
    app.session
        .apply_question_fetch(Ok(QuestionFetch::Empty(ResponseCode::NoResults)));

    app.session.update_profile(ProfileField::Category, "10");
    app.session.update_profile(ProfileField::Difficulty, "hard");

    let content = render_to_string(&app, 120, 30);
    assert!(content.contains("There are no questions for General Knowledge with a difficulty of Easy"));
    assert!(!content.contains("There are no questions for Entertainment: Books"));
    assert!(!content.contains("with a difficulty of Hard"));
}

#[test]
fn test_question_screen_waits_for_categories() {
    let app = app_on_question();
    assert_eq!(app.screen(), Screen::Question);

    let content = render_to_string(&app, 80, 30);
    assert!(content.contains("Loading category information..."));
    assert!(!content.contains("Red Planet"));
    assert!(!content.contains("( )"));
    assert!(!content.contains("Submit Answer"));
}

#[test]
fn test_question_screen_decodes_text_and_lists_choices_in_order() {
    let mut app = app_on_question();
    app.session.apply_categories(Ok(vec![Category {
        id: "9".to_string(),
        name: "General Knowledge".to_string(),
    }]));

    let content = render_to_string(&app, 100, 30);
    assert!(content.contains("Category: General Knowledge"));
    assert!(content.contains("Which planet is known as the \"Red Planet\"?"));
    assert!(!content.contains("&quot;"));

    let venus = content.find("Venus").unwrap();
    let jupiter = content.find("Jupiter").unwrap();
    let saturn = content.find("Saturn").unwrap();
    let mars = content.find("Mars").unwrap();
    assert!(venus < jupiter && jupiter < saturn && saturn < mars);
    assert!(content.contains("( )"));
    assert!(!content.contains("(\u{2022})"));
}

#[test]
fn test_selected_choice_shows_filled_radio() {
    let mut app = app_on_question();
    app.session.apply_categories(Ok(vec![Category {
        id: "9".to_string(),
        name: "General Knowledge".to_string(),
    }]));
    app.answer_selection.select(3, 4);

    let content = render_to_string(&app, 100, 30);
    assert!(content.contains("(\u{2022}) 4. Mars"));
}

#[test]
fn test_unknown_category_id_renders_not_found() {
    let mut app = app_on_question();
    app.session.apply_categories(Ok(vec![Category {
        id: "10".to_string(),
        name: "Entertainment: Books".to_string(),
    }]));

    let content = render_to_string(&app, 80, 30);
    assert!(content.contains("Category not found"));
}

#[test]
fn test_result_screen_for_correct_answer() {
    let mut app = app_on_question();
    app.session.submit_answer(Some("Mars")).unwrap();
    app.sync_screen();

    let content = render_to_string(&app, 100, 30);
    assert!(content.contains("Here's how you did, Ada."));
    assert!(content.contains("Congrats, you answered correctly!"));
    assert!(!content.contains("The correct answer was"));
    assert!(content.contains("Your current score: 1"));
    assert!(content.contains("Your high score: 1"));
    assert!(content.contains("Play Again"));
}

#[test]
fn test_result_screen_for_wrong_answer() {
    let mut app = app_on_question();
    app.session.submit_answer(Some("Venus")).unwrap();
    app.sync_screen();

    let content = render_to_string(&app, 100, 30);
    assert!(content.contains("Wrong Answer!"));
    assert!(content.contains("You'll get it on the next one!"));
    assert!(content.contains("The correct answer was: Mars"));
    assert!(content.contains("Your current score: 0"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = app_on_question();
    let _ = render_to_string(&app, 20, 8);
}
