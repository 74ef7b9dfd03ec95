use serde::{Deserialize, Serialize};

/// One entry of the `works` array returned by `/subjects/{subject}.json`.
///
/// Only the fields the harvest projects are modelled; everything else in the
/// upstream object is ignored during decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Work {
    pub title: Option<String>,
    pub authors: Option<Vec<WorkAuthor>>,
    pub first_publish_year: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkAuthor {
    pub name: Option<String>,
}

/// Response body of a subject query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectPage {
    pub works: Option<Vec<Work>>,
}

impl SubjectPage {
    pub fn into_works(self) -> Vec<Work> {
        self.works.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
    pub first_publish_year: Option<i64>,
    pub subject: String,
}

impl Book {
    /// Flattens a work into a book tagged with the subject it was fetched under.
    /// Only the first listed author is kept.
    pub fn from_work(work: Work, subject: &str) -> Self {
        let author = work
            .authors
            .and_then(|authors| authors.into_iter().next())
            .and_then(|first| first.name);

        Self {
            title: work.title,
            author,
            first_publish_year: work.first_publish_year,
            subject: subject.to_string(),
        }
    }
}

/// The works fetched for one subject, in response order.
#[derive(Debug, Clone, Default)]
pub struct SubjectWorks {
    pub subject: String,
    pub works: Vec<Work>,
}

/// Output document: `{ "books": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookCatalog {
    pub books: Vec<Book>,
}

impl BookCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_by_genre(&self, genre: &str) -> Vec<&Book> {
        let genre = genre.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.subject.to_lowercase() == genre)
            .collect()
    }
}
