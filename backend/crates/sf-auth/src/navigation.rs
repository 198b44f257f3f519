use crate::Route;

use serde::Serialize;

/// A navigation request: where to go, plus what to show and pre-fill there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub destination: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Redirect {
    pub fn to(destination: Route) -> Self {
        Self {
            destination,
            message: None,
            email: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

pub trait Navigator {
    fn navigate(&mut self, redirect: Redirect);
}

/// Collects redirects instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub redirects: Vec<Redirect>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Redirect> {
        self.redirects.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, redirect: Redirect) {
        self.redirects.push(redirect);
    }
}
