//! Toast/notification surface.
//!
//! External collaborator with a minimal contract: every create, update,
//! status change, and login outcome reports `(title, description,
//! severity)` once. No queuing, no retry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Receives user-visible outcome messages.
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str, severity: Severity);
}

/// Default sink: routes toasts to the tracing subscriber.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, title: &str, description: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::warn!(title, description, "toast"),
            Severity::Success | Severity::Info => {
                tracing::info!(title, description, "toast")
            }
        }
    }
}

/// One captured toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Captures toasts for assertions. Used by tests and embedding hosts
/// that render their own toast widget.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.messages.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, description: &str, severity: Severity) {
        self.messages.push(Notification {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_captures_in_order() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify("Patient ajouté", "ok", Severity::Success);
        notifier.notify("Erreur", "champ manquant", Severity::Error);

        assert_eq!(notifier.messages.len(), 2);
        assert_eq!(notifier.last().unwrap().title, "Erreur");
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn severity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Severity::Success).unwrap(),
            "\"success\""
        );
    }
}
