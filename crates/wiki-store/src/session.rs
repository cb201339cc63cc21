use std::ops::Deref;

use crate::traits::PageSession;

/// Scoped ownership of one backend session.
///
/// The session is disconnected when the guard is dropped, whichever way the
/// owning scope exits. A failed disconnect is logged and otherwise ignored:
/// the operation that used the session has already produced its result.
pub struct SessionGuard {
    session: Box<dyn PageSession>,
}

impl SessionGuard {
    pub fn new(session: Box<dyn PageSession>) -> Self {
        tracing::trace!("backend session acquired");
        Self { session }
    }
}

impl Deref for SessionGuard {
    type Target = dyn PageSession;

    fn deref(&self) -> &Self::Target {
        self.session.as_ref()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        match self.session.disconnect() {
            Ok(()) => tracing::trace!("backend session released"),
            Err(e) => tracing::warn!(error = %e, "failed to disconnect backend session"),
        }
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard").finish_non_exhaustive()
    }
}
