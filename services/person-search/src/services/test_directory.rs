use crate::{
    repositories::directory::{DirectoryError, DirectorySession, PersonCriteria, PersonDirectory, PersonRecord},
    services::CriteriaResult,
};
use reqwest::StatusCode;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

enum FilterResponse {
    Persons { persons: Vec<PersonRecord>, delay: Duration },
    Failure,
}

/// In-memory person directory recording the requests.
#[derive(Default)]
pub struct TestDirectory {
    persons: HashMap<String, PersonRecord>,
    filters: Vec<(PersonCriteria, FilterResponse)>,
    fail_session: bool,
    sessions: AtomicUsize,
    calls: Mutex<Vec<CriteriaResult>>,
}

impl TestDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, person: PersonRecord) -> Self {
        self.persons.insert(person.id.clone(), person);
        self
    }

    pub fn with_filter(self, criteria: PersonCriteria, persons: Vec<PersonRecord>) -> Self {
        self.with_delayed_filter(criteria, persons, Duration::ZERO)
    }

    pub fn with_delayed_filter(mut self, criteria: PersonCriteria, persons: Vec<PersonRecord>, delay: Duration) -> Self {
        self.filters
            .push((criteria, FilterResponse::Persons { persons, delay }));
        self
    }

    pub fn with_failing_filter(mut self, criteria: PersonCriteria) -> Self {
        self.filters.push((criteria, FilterResponse::Failure));
        self
    }

    pub fn with_failing_session(mut self) -> Self {
        self.fail_session = true;
        self
    }

    pub fn session_count(&self) -> usize {
        self.sessions.load(Ordering::Relaxed)
    }

    pub fn calls(&self) -> Vec<CriteriaResult> {
        self.calls.lock().unwrap().clone()
    }
}

impl PersonDirectory for TestDirectory {
    async fn open_session(&self) -> Result<DirectorySession, DirectoryError> {
        self.sessions.fetch_add(1, Ordering::Relaxed);
        if self.fail_session {
            Err(DirectoryError::Status {
                status: StatusCode::UNAUTHORIZED,
                body: "invalid api key".into(),
            })
        } else {
            Ok(DirectorySession::new("test-token".into()))
        }
    }

    async fn get_person(&self, session: &DirectorySession, id: &str) -> Result<PersonRecord, DirectoryError> {
        session.record_get();
        self.calls
            .lock()
            .unwrap()
            .push(CriteriaResult::Lookup { id: id.to_string() });

        self.persons.get(id).cloned().ok_or_else(|| DirectoryError::Status {
            status: StatusCode::NOT_FOUND,
            body: format!("person {id} not found"),
        })
    }

    async fn find_persons(
        &self,
        session: &DirectorySession,
        criteria: &PersonCriteria,
    ) -> Result<Vec<PersonRecord>, DirectoryError> {
        session.record_get();
        self.calls.lock().unwrap().push(CriteriaResult::Filter {
            criteria: criteria.clone(),
        });

        match self.filters.iter().find(|(filter, _)| filter == criteria) {
            Some((_, FilterResponse::Persons { persons, delay })) => {
                tokio::time::sleep(*delay).await;
                Ok(persons.clone())
            }
            Some((_, FilterResponse::Failure)) => Err(DirectoryError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "upstream failure".into(),
            }),
            None => Ok(Vec::new()),
        }
    }
}
