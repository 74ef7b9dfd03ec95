use crate::config::subjects::SubjectList;
use crate::domain::model::{Book, BookCatalog};
use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

impl BookCatalog {
    /// Reads a harvested book file back. A missing file and one that is not a
    /// book document are both reported as `NotFoundError`.
    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let data = storage.read_file(path).await.map_err(|e| EtlError::NotFoundError {
            message: format!("could not read '{}': {}", path, e),
        })?;
        let catalog: BookCatalog =
            serde_json::from_slice(&data).map_err(|e| EtlError::NotFoundError {
                message: format!("'{}' is not a valid book file: {}", path, e),
            })?;
        tracing::debug!("Loaded {} books from {}", catalog.len(), path);
        Ok(catalog)
    }
}

pub fn pick_random<'a, R: Rng + ?Sized>(books: &[&'a Book], rng: &mut R) -> Option<&'a Book> {
    books.choose(rng).copied()
}

pub fn recommendation_line(book: &Book) -> String {
    let title = book.title.as_deref().unwrap_or("Untitled");
    let author = book.author.as_deref().unwrap_or("Unknown Author");
    let year = book
        .first_publish_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "unknown year".to_string());

    format!(
        "Based on my current collection, I recommend {} by {} ({}).",
        title, author, year
    )
}

/// Full answer for a genre request, including the fallbacks for an empty
/// catalog and an unknown genre. `genres` is the configured subject list, so
/// subjects that harvested no books are still named.
pub fn recommend<R: Rng + ?Sized>(
    catalog: &BookCatalog,
    genres: &SubjectList,
    genre: &str,
    rng: &mut R,
) -> String {
    if catalog.is_empty() {
        return "Sorry, the book database is empty or unavailable.".to_string();
    }

    let matches = catalog.find_by_genre(genre);
    match pick_random(&matches, rng) {
        Some(book) => recommendation_line(book),
        None => format!(
            "Sorry, I couldn't find any {} books. I currently have recommendations for the following genres: {}.",
            genre,
            genres.iter().collect::<Vec<_>>().join(", ")
        ),
    }
}
