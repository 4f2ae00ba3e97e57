//! Mutation Dispatcher
//!
//! Sends signups and removals, reports the outcome on the status banner and
//! refreshes the directory when the server answered.

use std::rc::Rc;

use crate::api::{ActivityApi, ApiError, MutationResponse};
use crate::loader::DirectoryLoader;
use crate::models::StatusKind;
use crate::status::StatusNotifier;
use crate::surface::{Confirmer, SignupForm};
use crate::text;

pub struct MutationDispatcher {
    api: Rc<dyn ActivityApi>,
    loader: Rc<DirectoryLoader>,
    notifier: Rc<StatusNotifier>,
    form: Rc<dyn SignupForm>,
    confirmer: Rc<dyn Confirmer>,
}

impl MutationDispatcher {
    pub fn new(
        api: Rc<dyn ActivityApi>,
        loader: Rc<DirectoryLoader>,
        notifier: Rc<StatusNotifier>,
        form: Rc<dyn SignupForm>,
        confirmer: Rc<dyn Confirmer>,
    ) -> Self {
        Self { api, loader, notifier, form, confirmer }
    }

    /// Sign up with whatever the form currently holds
    pub async fn submit_signup(&self) {
        let activity = self.form.activity();
        let email = self.form.email();
        self.signup(&activity, &email).await;
    }

    pub async fn signup(&self, activity: &str, email: &str) {
        if is_blank(activity) || is_blank(email) {
            log::debug!("[SIGNUP] Skipped, activity or email missing");
            return;
        }
        match self.api.signup(activity, email).await {
            Ok(MutationResponse::Accepted { message }) => {
                log::info!("[SIGNUP] {} joined {}", email, activity);
                self.notifier.show_status(message, StatusKind::Success);
                self.form.reset();
                self.loader.load().await;
            }
            Ok(MutationResponse::Rejected { status, detail }) => {
                log::warn!("[SIGNUP] Rejected with status {}", status);
                let notice = detail.unwrap_or_else(|| text::SIGNUP_REJECTED.to_string());
                self.notifier.show_status(notice, StatusKind::Error);
            }
            Err(err) => self.report_failure("SIGNUP", err, text::SIGNUP_FAILED),
        }
    }

    /// Remove `email` from `activity` once the operator confirms
    pub async fn remove_participant(&self, activity: &str, email: &str) {
        if is_blank(activity) || is_blank(email) {
            return;
        }
        if !self.confirmer.confirm(&text::confirm_removal(email, activity)) {
            log::debug!("[REMOVE] Declined for {} in {}", email, activity);
            return;
        }
        match self.api.remove_participant(activity, email).await {
            Ok(MutationResponse::Accepted { message }) => {
                log::info!("[REMOVE] {} left {}", email, activity);
                self.notifier.show_status(message, StatusKind::Success);
                self.loader.load().await;
            }
            Ok(MutationResponse::Rejected { status, detail }) => {
                log::warn!("[REMOVE] Rejected with status {}", status);
                let notice = detail.unwrap_or_else(|| text::REMOVE_REJECTED.to_string());
                self.notifier.show_status(notice, StatusKind::Error);
            }
            Err(err) => self.report_failure("REMOVE", err, text::REMOVE_FAILED),
        }
    }

    // Server state is unknown here, so there is no refresh.
    fn report_failure(&self, tag: &str, err: ApiError, notice: &str) {
        log::error!("[{}] {}", tag, err);
        self.notifier.show_status(notice, StatusKind::Error);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
