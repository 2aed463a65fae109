//! Side effects of the response stage, expressed as events.
//!
//! The client does not navigate or show toasts itself. It emits
//! `ClientEvent`s into an `EventSink`; the host translates them into its own
//! navigation and notification calls.

use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    SessionExpired,
    Forbidden,
    ServerError,
}

impl NotificationKind {
    /// User-facing text, in French.
    pub fn message(self) -> &'static str {
        match self {
            NotificationKind::SessionExpired => "Session expirée. Veuillez vous reconnecter.",
            NotificationKind::Forbidden => "Accès non autorisé",
            NotificationKind::ServerError => "Erreur serveur. Veuillez réessayer.",
        }
    }
}

/// A transient error notification for the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Notify(Notification),
    Navigate { route: String },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: ClientEvent) {}
}

/// Keeps every event in emission order. Hosts can poll it with `drain`.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ClientEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn drain(&self) -> Vec<ClientEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ClientEvent::Notify(n) => Some(n),
                ClientEvent::Navigate { .. } => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: ClientEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
