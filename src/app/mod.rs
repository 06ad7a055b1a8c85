//! Application controller for the TUI.
//!
//! [`App`] owns the [`SessionState`], the trivia client and the channel that
//! spawned network tasks report back on. Screens read it immutably; every
//! change goes through the methods in this module and its submodules.

mod actions;
mod handlers;
mod keys;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{AnswerSelection, SetupFocus};

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::TriviaClient;
use crate::session::{Screen, SessionState};

/// Main application state
pub struct App {
    /// Profile, questions, score and error for this run
    pub session: SessionState,
    /// Focused field on the setup screen
    pub setup_focus: SetupFocus,
    /// Radio-group state on the question screen
    pub answer_selection: AnswerSelection,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Trivia API client (shared with spawned tasks)
    pub client: Arc<TriviaClient>,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Screen seen by the last `sync_screen`, used to detect mounts
    mounted_screen: Screen,
}

impl App {
    pub fn new(client: TriviaClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: SessionState::new(),
            setup_focus: SetupFocus::default(),
            answer_selection: AnswerSelection::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            client: Arc::new(client),
            message_rx: Some(message_rx),
            message_tx,
            mounted_screen: Screen::Setup,
        }
    }

    /// Screen derived from the current session state.
    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// Run mount effects when the derived screen changed.
    ///
    /// Entering Question resets the radio group and loads the category
    /// directory if it is not cached. Showing Result applies the score, which
    /// the session guards so repeated calls count once.
    pub fn sync_screen(&mut self) {
        let screen = self.session.screen();
        if screen != self.mounted_screen {
            debug!("Screen {:?} -> {:?}", self.mounted_screen, screen);
            self.mounted_screen = screen;
            match screen {
                Screen::Setup => self.setup_focus = SetupFocus::default(),
                Screen::Question => {
                    self.answer_selection = AnswerSelection::default();
                    self.load_categories();
                }
                Screen::Result => {}
            }
            self.mark_dirty();
        }

        if screen == Screen::Result && self.session.score_answer().is_some() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.session.loading_questions || self.session.loading_categories {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
