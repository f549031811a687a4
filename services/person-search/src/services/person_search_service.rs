use crate::{
    repositories::directory::{DirectoryError, DirectorySession, PersonDirectory, PersonRecord},
    services::{CriteriaBuilder, CriteriaResult, SearchFailure, SearchRequest, TransformedPerson},
};
use futures::future::join_all;
use std::{collections::HashMap, time::Instant};

/// Persons keyed by id in the order of the first occurrence, a later record replaces the earlier one.
#[derive(Default)]
struct MergedPersons {
    index: HashMap<String, usize>,
    persons: Vec<PersonRecord>,
}

impl MergedPersons {
    fn insert(&mut self, person: PersonRecord) {
        match self.index.get(&person.id) {
            Some(&position) => self.persons[position] = person,
            None => {
                self.index.insert(person.id.clone(), self.persons.len());
                self.persons.push(person);
            }
        }
    }

    fn into_persons(self) -> Vec<PersonRecord> {
        self.persons
    }
}

/// Search persons by the configured identifiers and names.
pub struct PersonSearchService<D>
where
    D: PersonDirectory,
{
    directory: D,
}

impl<D> PersonSearchService<D>
where
    D: PersonDirectory,
{
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    async fn execute(
        &self,
        session: &DirectorySession,
        query: &CriteriaResult,
    ) -> Result<Vec<PersonRecord>, DirectoryError> {
        match query {
            CriteriaResult::Lookup { id } => Ok(vec![self.directory.get_person(session, id).await?]),
            CriteriaResult::Filter { criteria } => self.directory.find_persons(session, criteria).await,
        }
    }

    /// Run one directory request for each search-by type and merge the results by person id.
    /// The requests are processed in the order of the search-by types, thus for a person found by multiple requests
    /// the record of the last request is kept. Failing requests are logged and ignored.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<TransformedPerson>, SearchFailure> {
        if request.search_string.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let session = self.directory.open_session().await.map_err(|err| {
            log::error!("Unable to open person directory session: {err}");
            SearchFailure::new(err)
        })?;

        let queries: Vec<CriteriaResult> = request
            .search_by
            .iter()
            .filter_map(|search_by| {
                let query =
                    CriteriaBuilder::build(search_by, &request.search_string, request.search_role.as_deref());
                if query.is_none() {
                    log::debug!("No criteria for {search_by}, skipped");
                }
                query
            })
            .collect();

        let results = join_all(queries.iter().map(|query| self.execute(&session, query))).await;

        let mut merged = MergedPersons::default();
        for (query, result) in queries.iter().zip(results) {
            match result {
                Ok(persons) => persons.into_iter().for_each(|person| merged.insert(person)),
                Err(err) => log::warn!("Person search failed for {query:?}: {err}"),
            }
        }

        let mut persons: Vec<TransformedPerson> = merged
            .into_persons()
            .iter()
            .map(|person| {
                TransformedPerson::new(
                    person,
                    &request.search_results_attributes,
                    request.erp_identifier.as_ref(),
                )
            })
            .collect();
        persons.sort_by(TransformedPerson::cmp_by_name);

        log::debug!(
            "Person search completed in {:?}, directory GET count: {}",
            start.elapsed(),
            session.get_count()
        );
        Ok(persons)
    }
}
