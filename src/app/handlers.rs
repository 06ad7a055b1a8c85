//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::TokenLoaded { result } => {
                debug!("Token request finished (ok={})", result.is_ok());
                self.session.apply_token(result);
            }
            AppMessage::QuestionsLoaded { result } => {
                debug!("Question fetch finished (ok={})", result.is_ok());
                self.session.apply_question_fetch(result);
            }
            AppMessage::CategoriesLoaded { result } => {
                debug!("Category fetch finished (ok={})", result.is_ok());
                self.session.apply_categories(result);
            }
        }
        self.sync_screen();
    }
}
