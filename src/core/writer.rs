use crate::domain::model::BookCatalog;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Pretty JSON with two-space indentation; non-ASCII text is written as-is.
pub fn render_catalog(catalog: &BookCatalog) -> Result<String> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');
    Ok(json)
}

/// Replaces whatever is at `path` with the rendered catalog.
pub async fn write_catalog<S: Storage>(
    storage: &S,
    path: &str,
    catalog: &BookCatalog,
) -> Result<()> {
    let json = render_catalog(catalog)?;
    tracing::debug!("Writing {} bytes to {}", json.len(), path);
    storage.write_file(path, json.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Book;

    #[test]
    fn test_render_uses_two_space_indent_and_key_order() {
        let catalog = BookCatalog::new(vec![Book {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            first_publish_year: Some(1965),
            subject: "fantasy".to_string(),
        }]);

        let expected = r#"{
  "books": [
    {
      "title": "Dune",
      "author": "Frank Herbert",
      "first_publish_year": 1965,
      "subject": "fantasy"
    }
  ]
}
"#;
        assert_eq!(render_catalog(&catalog).unwrap(), expected);
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let catalog = BookCatalog::new(vec![Book {
            title: Some("Cien años de soledad".to_string()),
            author: Some("Gabriel García Márquez".to_string()),
            first_publish_year: Some(1967),
            subject: "magic_realism".to_string(),
        }]);

        let json = render_catalog(&catalog).unwrap();
        assert!(json.contains("Cien años de soledad"));
        assert!(json.contains("García Márquez"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let json = render_catalog(&BookCatalog::default()).unwrap();
        assert_eq!(json, "{\n  \"books\": []\n}\n");
    }
}
