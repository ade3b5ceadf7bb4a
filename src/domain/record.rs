//! Comment record domain model.
//!
//! A [`Record`] is one comment-like item of the remote feed. Records arrive in
//! bulk from the source layer, or are synthesized locally when the user adds
//! one through the form.

use serde::{Deserialize, Serialize};

/// One comment in the displayed list.
///
/// Field names follow the remote wire format on (de)serialization, so
/// `post_id` travels as `postId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Record {
    /// Returns `true` if `needle` occurs in the name, email or body.
    ///
    /// The comparison is case-insensitive. `needle` is expected to be
    /// lowercased already (see [`crate::domain::query::filter_records`]), which
    /// keeps the per-record cost to three lowercase conversions. An empty
    /// needle matches every record.
    ///
    /// # Examples
    ///
    /// ```
    /// use commentary::Record;
    ///
    /// let record = Record {
    ///     id: 1,
    ///     post_id: 1,
    ///     name: "id labore ex".to_string(),
    ///     email: "Eliseo@gardner.biz".to_string(),
    ///     body: "laudantium enim".to_string(),
    /// };
    /// assert!(record.matches("eliseo"));
    /// assert!(record.matches("labore"));
    /// assert!(!record.matches("nowhere"));
    /// ```
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        [&self.name, &self.email, &self.body]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: 7,
            post_id: 2,
            name: "Quo Vero".to_string(),
            email: "Hayden@Althea.biz".to_string(),
            body: "Harum non quasi et RATIONE".to_string(),
        }
    }

    #[test]
    fn matches_each_of_the_three_fields() {
        let record = sample();
        assert!(record.matches("vero"));
        assert!(record.matches("althea"));
        assert!(record.matches("ratione"));
    }

    #[test]
    fn ignores_identifiers() {
        assert!(!sample().matches("7"));
    }

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{"postId":3,"id":11,"name":"n","email":"e@x.io","body":"b"}"#;
        let record: Record = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.post_id, 3);
        assert_eq!(record.id, 11);
    }
}
