use crate::config::subjects::SubjectList;
use crate::domain::model::{Book, SubjectWorks};
use crate::domain::ports::BookSource;
use crate::utils::error::Result;

/// Fetches every subject in list order, one request at a time.
/// The first failing subject aborts the whole run.
pub async fn fetch_all<B>(source: &B, subjects: &SubjectList) -> Result<Vec<SubjectWorks>>
where
    B: BookSource + ?Sized,
{
    let mut batches = Vec::with_capacity(subjects.len());

    for subject in subjects.iter() {
        println!("Fetching books from subject: {}", subject);
        let works = source.fetch_works(subject).await.inspect_err(|e| {
            tracing::error!("❌ Fetching subject '{}' failed: {}", subject, e);
        })?;
        tracing::info!("📚 {}: {} works", subject, works.len());

        batches.push(SubjectWorks {
            subject: subject.to_string(),
            works,
        });
    }

    Ok(batches)
}

/// Concatenates per-subject results, subject-major, keeping response order.
/// No sorting and no deduplication.
pub fn aggregate(batches: Vec<SubjectWorks>) -> Vec<Book> {
    let mut books = Vec::new();
    for batch in batches {
        let subject = batch.subject;
        books.extend(
            batch
                .works
                .into_iter()
                .map(|work| Book::from_work(work, &subject)),
        );
    }
    books
}

pub async fn collect_books<B>(source: &B, subjects: &SubjectList) -> Result<Vec<Book>>
where
    B: BookSource + ?Sized,
{
    Ok(aggregate(fetch_all(source, subjects).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Work, WorkAuthor};
    use crate::utils::error::EtlError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct RecordingSource {
        responses: HashMap<String, Vec<Work>>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingSource {
        fn new(responses: Vec<(&str, Vec<Work>)>) -> Self {
            Self {
                responses: responses
                    .into_iter()
                    .map(|(subject, works)| (subject.to_string(), works))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BookSource for RecordingSource {
        async fn fetch_works(&self, subject: &str) -> Result<Vec<Work>> {
            self.calls.lock().unwrap().push(subject.to_string());
            self.responses
                .get(subject)
                .cloned()
                .ok_or_else(|| EtlError::HttpStatusError {
                    subject: subject.to_string(),
                    status: 404,
                })
        }
    }

    fn titled(title: &str, author: Option<&str>) -> Work {
        Work {
            title: Some(title.to_string()),
            authors: author.map(|name| {
                vec![WorkAuthor {
                    name: Some(name.to_string()),
                }]
            }),
            first_publish_year: None,
        }
    }

    fn subjects(names: &[&str]) -> SubjectList {
        SubjectList::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test]
    async fn test_one_call_per_subject_in_order() {
        let source = RecordingSource::new(vec![
            ("fantasy", vec![titled("Dune", Some("Frank Herbert"))]),
            ("poetry", vec![]),
            ("history", vec![titled("SPQR", Some("Mary Beard"))]),
        ]);

        collect_books(&source, &subjects(&["history", "fantasy", "poetry"]))
            .await
            .unwrap();

        assert_eq!(source.calls(), vec!["history", "fantasy", "poetry"]);
    }

    #[tokio::test]
    async fn test_order_is_subject_major_and_duplicates_are_kept() {
        let source = RecordingSource::new(vec![
            (
                "fantasy",
                vec![
                    titled("Good Omens", Some("Terry Pratchett")),
                    titled("The Hobbit", Some("J.R.R. Tolkien")),
                ],
            ),
            ("humor", vec![titled("Good Omens", Some("Terry Pratchett"))]),
        ]);

        let books = collect_books(&source, &subjects(&["fantasy", "humor"]))
            .await
            .unwrap();

        let tagged: Vec<(&str, &str)> = books
            .iter()
            .map(|b| (b.title.as_deref().unwrap(), b.subject.as_str()))
            .collect();
        assert_eq!(
            tagged,
            vec![
                ("Good Omens", "fantasy"),
                ("The Hobbit", "fantasy"),
                ("Good Omens", "humor"),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_remaining_subjects() {
        let source = RecordingSource::new(vec![("fantasy", vec![titled("Dune", None)])]);

        let result = collect_books(&source, &subjects(&["fantasy", "unknown", "poetry"])).await;

        assert!(result.is_err());
        assert_eq!(source.calls(), vec!["fantasy", "unknown"]);
    }

    #[test]
    fn test_aggregate_length_is_sum_of_batches() {
        let batches = vec![
            SubjectWorks {
                subject: "a".to_string(),
                works: vec![Work::default(), Work::default()],
            },
            SubjectWorks {
                subject: "b".to_string(),
                works: vec![],
            },
            SubjectWorks {
                subject: "c".to_string(),
                works: vec![Work::default()],
            },
        ];

        let books = aggregate(batches);
        assert_eq!(books.len(), 3);
        assert_eq!(books[2].subject, "c");
    }
}
