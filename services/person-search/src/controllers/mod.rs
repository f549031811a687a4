pub mod person_search;
