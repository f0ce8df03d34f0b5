//! Grievance records and their caller-visible sequential identifier.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Validation errors raised while constructing grievance primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrievanceValidationError {
    /// Identifier was zero or negative.
    NonPositiveId { value: i64 },
    /// Identifier text did not parse as an integer.
    UnparseableId,
    /// Stored status is not one this service knows about.
    UnknownStatus { value: String },
}

impl fmt::Display for GrievanceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { value } => {
                write!(f, "grievance id must be a positive integer, got {value}")
            }
            Self::UnparseableId => write!(f, "grievance id must be a positive integer"),
            Self::UnknownStatus { value } => write!(f, "unknown grievance status '{value}'"),
        }
    }
}

impl std::error::Error for GrievanceValidationError {}

/// Human-facing grievance identifier.
///
/// ## Invariants
/// - Always a positive integer.
///
/// # Examples
/// ```
/// use backend::domain::GrievanceId;
///
/// assert_eq!(GrievanceId::parse("42").unwrap().value(), 42);
/// assert!(GrievanceId::parse("0").is_err());
/// assert!(GrievanceId::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct GrievanceId(i64);

impl GrievanceId {
    /// The identifier assigned when no grievances exist yet.
    pub const FIRST: GrievanceId = GrievanceId(1);

    pub fn new(value: i64) -> Result<Self, GrievanceValidationError> {
        if value <= 0 {
            return Err(GrievanceValidationError::NonPositiveId { value });
        }
        Ok(Self(value))
    }

    /// Parse a caller-supplied path segment.
    pub fn parse(raw: &str) -> Result<Self, GrievanceValidationError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| GrievanceValidationError::UnparseableId)?;
        Self::new(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for GrievanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle status. Only `open` exists; grievances are never transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GrievanceStatus {
    #[default]
    Open,
}

impl GrievanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
        }
    }

    /// Parse a status column value.
    pub fn parse(raw: &str) -> Result<Self, GrievanceValidationError> {
        match raw {
            "open" => Ok(Self::Open),
            other => Err(GrievanceValidationError::UnknownStatus {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for GrievanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue text exactly as submitted. Blank text is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueText(String);

impl IssueText {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for IssueText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Submission request as received from the portal form.
///
/// Submitter name and email are informational; they are logged with the
/// request but not stored on the grievance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrievanceSubmission {
    pub submitter_name: Option<String>,
    pub submitter_email: Option<String>,
    pub issue: IssueText,
}

/// Stored grievance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grievance {
    pub id: GrievanceId,
    pub title: String,
    pub description: String,
    pub status: GrievanceStatus,
    pub created_at: DateTime<Utc>,
}

impl Grievance {
    /// Build a newly opened grievance. Title and description both carry the
    /// issue text.
    pub fn open(id: GrievanceId, issue: IssueText, created_at: DateTime<Utc>) -> Self {
        let description = issue.into_inner();
        Self {
            id,
            title: description.clone(),
            description,
            status: GrievanceStatus::Open,
            created_at,
        }
    }
}

/// Lookup request for the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrievanceLookup {
    /// Raw identifier from the request path.
    pub grievance_id: String,
    /// Viewer identifier echoed back for display, never checked.
    pub viewer_id: String,
}

/// Result of a lookup: the record plus the echoed viewer id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrievanceView {
    pub grievance: Grievance,
    pub viewer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case(" 17 ", 17)]
    #[case("9000000000", 9_000_000_000)]
    fn parses_positive_ids(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(GrievanceId::parse(raw).expect("valid id").value(), expected);
    }

    #[rstest]
    #[case("0", GrievanceValidationError::NonPositiveId { value: 0 })]
    #[case("-3", GrievanceValidationError::NonPositiveId { value: -3 })]
    #[case("abc", GrievanceValidationError::UnparseableId)]
    #[case("", GrievanceValidationError::UnparseableId)]
    #[case("1.5", GrievanceValidationError::UnparseableId)]
    fn rejects_ids_that_cannot_have_been_assigned(
        #[case] raw: &str,
        #[case] expected: GrievanceValidationError,
    ) {
        assert_eq!(GrievanceId::parse(raw).expect_err("invalid id"), expected);
    }

    #[rstest]
    #[case("")]
    #[case(" \n\t")]
    fn blank_issue_is_kept_verbatim(#[case] raw: &str) {
        assert_eq!(IssueText::new(raw).as_ref(), raw);
    }

    #[rstest]
    fn open_copies_issue_into_title_and_description() {
        let created_at = DateTime::<Utc>::UNIX_EPOCH;
        let issue = IssueText::new("  Street light broken ");
        let grievance = Grievance::open(GrievanceId::FIRST, issue, created_at);
        assert_eq!(grievance.title, "  Street light broken ");
        assert_eq!(grievance.description, grievance.title);
        assert_eq!(grievance.status, GrievanceStatus::Open);
    }

    #[rstest]
    fn status_round_trips_through_column_text() {
        let status = GrievanceStatus::parse("open").expect("known status");
        assert_eq!(status.as_str(), "open");
        assert!(GrievanceStatus::parse("closed").is_err());
    }
}
