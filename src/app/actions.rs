//! Network actions. Each spawns a task that reports back via [`AppMessage`].

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::ProfileField;
use crate::session::SubmitRejected;

use super::{App, AppMessage};

impl App {
    /// Request the session token. Called once at startup; never retried.
    pub fn request_token(&self) {
        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client.request_token().await;
            let _ = message_tx.send(AppMessage::TokenLoaded { result });
        });
    }

    /// Validate the setup form and start the question fetch.
    ///
    /// Returns `true` if a fetch was dispatched.
    pub fn submit_setup(&mut self) -> bool {
        let request = match self.session.begin_question_fetch() {
            Ok(request) => request,
            Err(SubmitRejected::Invalid(err)) => {
                debug!("Setup rejected: {}", err);
                self.mark_dirty();
                return false;
            }
            Err(reason) => {
                debug!("Setup submit ignored: {:?}", reason);
                return false;
            }
        };

        info!(
            "Fetching questions for category={} difficulty={}",
            request.category_id, request.difficulty
        );
        self.mark_dirty();

        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client
                .fetch_questions(&request.token, &request.category_id, request.difficulty)
                .await;
            let _ = message_tx.send(AppMessage::QuestionsLoaded { result });
        });
        true
    }

    /// Load the category directory unless it is cached or already loading.
    pub fn load_categories(&mut self) {
        if !self.session.needs_categories() {
            return;
        }
        self.session.begin_category_fetch();

        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.list_categories().await;
            let _ = message_tx.send(AppMessage::CategoriesLoaded { result });
        });
    }

    /// Keyed profile update from the setup form.
    pub fn update_profile(&mut self, field: ProfileField, value: &str) {
        self.session.update_profile(field, value);
        self.mark_dirty();
    }

    /// Resolve the question with the selected radio option.
    pub fn submit_answer(&mut self) {
        let choice = self.session.questions.first().and_then(|question| {
            self.answer_selection
                .selected
                .and_then(|index| question.choices().get(index).map(|c| c.to_string()))
        });
        if self.session.submit_answer(choice.as_deref()).is_ok() {
            self.sync_screen();
        }
        self.mark_dirty();
    }

    /// Start another round. Score and high score carry over.
    pub fn restart(&mut self) {
        info!(
            "Restarting quiz (score={}, high_score={})",
            self.session.score.score, self.session.score.high_score
        );
        self.session.restart();
        self.sync_screen();
        self.mark_dirty();
    }

    /// "Back Home": only acts while an error is showing.
    pub fn return_home(&mut self) -> bool {
        let applied = self.session.return_home();
        if applied {
            self.sync_screen();
            self.mark_dirty();
        }
        applied
    }
}
