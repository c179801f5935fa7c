//! Viewer session state: who is looking, and what has already been shown.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::UserId;
use crate::errors::{EngineError, Result};

/// One-shot flag scoped to a viewer session.
///
/// Gates notifications that must fire at most once per session (the overdue
/// notice). The checks guarded by it stay pure and re-runnable; only the
/// notification itself is single-shot.
#[derive(Debug, Default)]
pub struct NoticeGate {
    notified: AtomicBool,
}

impl NoticeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate. Returns `true` only on the first call.
    pub fn claim(&self) -> bool {
        !self.notified.swap(true, Ordering::Relaxed)
    }

    pub fn is_claimed(&self) -> bool {
        self.notified.load(Ordering::Relaxed)
    }
}

/// Context the engine operates under: the authenticated user, if any, plus
/// session-scoped one-shot state.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<UserId>,
    overdue_notice: NoticeGate,
}

impl Session {
    pub fn authenticated(user: UserId) -> Self {
        Self {
            user: Some(user),
            overdue_notice: NoticeGate::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the active user, or `NotAuthenticated` when there is none.
    pub fn user(&self) -> Result<UserId> {
        self.user.ok_or(EngineError::NotAuthenticated)
    }

    pub fn overdue_notice(&self) -> &NoticeGate {
        &self.overdue_notice
    }
}
