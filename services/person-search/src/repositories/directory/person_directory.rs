use super::{DirectoryError, PersonCriteria, PersonRecord};
use std::{
    fmt,
    future::Future,
    sync::atomic::{AtomicU32, Ordering},
};

/// Access token of the person directory, shared by the requests of a single search.
pub struct DirectorySession {
    token: String,
    get_count: AtomicU32,
}

impl DirectorySession {
    pub fn new(token: String) -> Self {
        Self {
            token,
            get_count: AtomicU32::new(0),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn record_get(&self) {
        self.get_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of GET requests issued with this session.
    pub fn get_count(&self) -> u32 {
        self.get_count.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for DirectorySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectorySession")
            .field("token", &"<redacted>")
            .field("get_count", &self.get_count())
            .finish()
    }
}

/// Read access to the `persons` resource of the person directory.
pub trait PersonDirectory: Send + Sync {
    /// Acquire an access token for the subsequent requests.
    fn open_session(&self) -> impl Future<Output = Result<DirectorySession, DirectoryError>> + Send;

    fn get_person(
        &self,
        session: &DirectorySession,
        id: &str,
    ) -> impl Future<Output = Result<PersonRecord, DirectoryError>> + Send;

    fn find_persons(
        &self,
        session: &DirectorySession,
        criteria: &PersonCriteria,
    ) -> impl Future<Output = Result<Vec<PersonRecord>, DirectoryError>> + Send;
}
