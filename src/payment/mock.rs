//! Mock payment gateway for the unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{CheckoutRequest, CheckoutSession, PaymentGateway, USER_ID_METADATA};
use crate::utils::AppError;

#[derive(Default)]
pub struct MockGateway {
    sessions: Mutex<HashMap<String, CheckoutSession>>,
    created: Mutex<Vec<CheckoutRequest>>,
    fail_with: Mutex<Option<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a completed session tagged with `user_id`.
    pub fn add_session(&self, session_id: &str, user_id: Option<&str>) {
        let mut metadata = HashMap::new();
        if let Some(user_id) = user_id {
            metadata.insert(USER_ID_METADATA.to_string(), user_id.to_string());
        }
        self.sessions.lock().unwrap().insert(
            session_id.to_string(),
            CheckoutSession {
                id: session_id.to_string(),
                payment_status: Some("paid".to_string()),
                metadata,
                ..Default::default()
            },
        );
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn created(&self) -> Vec<CheckoutRequest> {
        self.created.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Result<(), AppError> {
        match self.fail_with.lock().unwrap().take() {
            Some(message) => Err(AppError::PaymentError(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        self.take_failure()?;
        let mut created = self.created.lock().unwrap();
        created.push(request.clone());
        let id = format!("cs_test_{}", created.len());
        Ok(CheckoutSession {
            url: Some(format!("https://checkout.stripe.com/c/pay/{}", id)),
            id,
            ..Default::default()
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, AppError> {
        self.take_failure()?;
        self.sessions
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .ok_or_else(|| AppError::PaymentError(format!("No such checkout.session: '{}'", session_id)))
    }
}
