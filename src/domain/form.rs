//! Add/edit form draft.
//!
//! The form holds its fields as raw text while the user types; only
//! [`FormDraft::validate`] turns them into something a [`Record`] can be built
//! from. Validation is limited to required-field presence plus parsing the
//! optional post id.

use super::error::{CommentaryError, Result};
use super::record::Record;

/// Post id given to locally added records when the field is left blank.
pub const DEFAULT_POST_ID: i64 = 1;

/// Focusable form field, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Body,
    PostId,
}

impl FormField {
    /// Tab order, first to last.
    pub const ORDER: [Self; 4] = [Self::Name, Self::Email, Self::Body, Self::PostId];

    /// Field after this one, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// Field before this one, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Label shown in front of the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Body => "Body",
            Self::PostId => "Post id",
        }
    }

    /// Whether submission requires a non-blank value.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::PostId)
    }
}

/// Text typed into the form so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: String,
}

/// Draft that passed [`FormDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    name: String,
    email: String,
    body: String,
    post_id: i64,
}

impl FormDraft {
    /// Prefills a draft with an existing record, for editing.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            body: record.body.clone(),
            post_id: record.post_id.to_string(),
        }
    }

    /// Current text of `field`.
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Body => &self.body,
            FormField::PostId => &self.post_id,
        }
    }

    /// Mutable text of `field`, for typing and backspace.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Body => &mut self.body,
            FormField::PostId => &mut self.post_id,
        }
    }

    /// Checks required fields and parses the post id.
    ///
    /// # Errors
    ///
    /// Returns [`CommentaryError::Validation`] naming the first required field
    /// that is blank, or when the post id is present but not an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use commentary::domain::form::FormDraft;
    ///
    /// let mut draft = FormDraft::default();
    /// draft.name = "hello".to_string();
    /// let err = draft.validate().unwrap_err();
    /// assert_eq!(err.to_string(), "Email is required");
    /// ```
    pub fn validate(&self) -> Result<ValidDraft> {
        if let Some(missing) = FormField::ORDER
            .into_iter()
            .filter(|f| f.is_required())
            .find(|f| self.field(*f).trim().is_empty())
        {
            return Err(CommentaryError::Validation(format!(
                "{} is required",
                missing.label()
            )));
        }

        let post_id = match self.post_id.trim() {
            "" => DEFAULT_POST_ID,
            raw => raw.parse::<i64>().map_err(|_| {
                CommentaryError::Validation(format!("Post id must be a number, got '{raw}'"))
            })?,
        };

        Ok(ValidDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            body: self.body.trim().to_string(),
            post_id,
        })
    }
}

impl ValidDraft {
    /// Builds the record carrying `id`.
    #[must_use]
    pub fn into_record(self, id: i64) -> Record {
        Record {
            id,
            post_id: self.post_id,
            name: self.name,
            email: self.email,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormDraft {
        FormDraft {
            name: " title ".to_string(),
            email: "me@example.com".to_string(),
            body: "text".to_string(),
            post_id: String::new(),
        }
    }

    #[test]
    fn blank_post_id_falls_back_to_default() {
        let record = filled().validate().expect("valid draft").into_record(42);
        assert_eq!(record.post_id, DEFAULT_POST_ID);
        assert_eq!(record.id, 42);
        assert_eq!(record.name, "title");
    }

    #[test]
    fn whitespace_only_required_field_is_rejected() {
        let mut draft = filled();
        draft.body = "   ".to_string();
        let err = draft.validate().expect_err("body missing");
        assert_eq!(err.to_string(), "Body is required");
    }

    #[test]
    fn non_numeric_post_id_is_rejected() {
        let mut draft = filled();
        draft.post_id = "abc".to_string();
        assert!(matches!(draft.validate(), Err(CommentaryError::Validation(_))));
    }

    #[test]
    fn edit_prefill_round_trips_through_validation() {
        let original = Record {
            id: 5,
            post_id: 9,
            name: "n".to_string(),
            email: "e".to_string(),
            body: "b".to_string(),
        };
        let rebuilt = FormDraft::from_record(&original)
            .validate()
            .expect("prefilled draft is valid")
            .into_record(original.id);
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        assert_eq!(FormField::PostId.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::PostId);
        assert_eq!(FormField::Email.next(), FormField::Body);
    }
}
