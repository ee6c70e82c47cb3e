use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Company an administrator may post on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: String,
}

/// Mechanism through which a candidate applies to a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationMethod {
    Internal,
    ExternalUrl,
    Email,
}

impl ApplicationMethod {
    pub const ALL: [ApplicationMethod; 3] = [
        ApplicationMethod::Internal,
        ApplicationMethod::ExternalUrl,
        ApplicationMethod::Email,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ApplicationMethod::Internal => "internal",
            ApplicationMethod::ExternalUrl => "external_url",
            ApplicationMethod::Email => "email",
        }
    }

    /// Display label carried in submission payloads.
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationMethod::Internal => "Apply on TechHub",
            ApplicationMethod::ExternalUrl => "Apply on Company Website",
            ApplicationMethod::Email => "Apply via Email",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "internal" => Some(ApplicationMethod::Internal),
            "external_url" => Some(ApplicationMethod::ExternalUrl),
            "email" => Some(ApplicationMethod::Email),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum number of skills accepted on a posting.
pub const MAX_SKILLS: usize = 15;

/// Inclusive character bounds for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterLimits {
    pub min: usize,
    pub max: usize,
}

/// Form fields recognized by the posting rule set, in rule-table order.
///
/// `Ord` follows declaration order, which fixes the iteration order of
/// [`ValidationErrors`] and therefore which field `first_error_field`
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobField {
    Title,
    Description,
    Responsibilities,
    Requirements,
    Benefits,
    Category,
    Location,
    MinSalary,
    MaxSalary,
    ApplicationDeadline,
    Skills,
    CompanyId,
    ApplicationMethods,
    ApplicationUrl,
    ApplicationEmail,
}

impl JobField {
    pub const ALL: [JobField; 15] = [
        JobField::Title,
        JobField::Description,
        JobField::Responsibilities,
        JobField::Requirements,
        JobField::Benefits,
        JobField::Category,
        JobField::Location,
        JobField::MinSalary,
        JobField::MaxSalary,
        JobField::ApplicationDeadline,
        JobField::Skills,
        JobField::CompanyId,
        JobField::ApplicationMethods,
        JobField::ApplicationUrl,
        JobField::ApplicationEmail,
    ];

    /// Standard job fields validated on every posting flow.
    pub const STANDARD: [JobField; 10] = [
        JobField::Title,
        JobField::Description,
        JobField::Responsibilities,
        JobField::Requirements,
        JobField::Benefits,
        JobField::Category,
        JobField::Location,
        JobField::MinSalary,
        JobField::MaxSalary,
        JobField::ApplicationDeadline,
    ];

    /// Fields that only exist on the admin posting form.
    pub const ADMIN: [JobField; 4] = [
        JobField::CompanyId,
        JobField::ApplicationMethods,
        JobField::ApplicationUrl,
        JobField::ApplicationEmail,
    ];

    /// Wire name as the REST payload spells it: snake_case for the legacy
    /// job fields, camelCase for the admin-only ones.
    pub const fn as_str(self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Description => "description",
            JobField::Responsibilities => "responsibilities",
            JobField::Requirements => "requirements",
            JobField::Benefits => "benefits",
            JobField::Category => "category",
            JobField::Location => "location",
            JobField::MinSalary => "min_salary",
            JobField::MaxSalary => "max_salary",
            JobField::ApplicationDeadline => "application_deadline",
            JobField::Skills => "skills",
            JobField::CompanyId => "companyId",
            JobField::ApplicationMethods => "applicationMethods",
            JobField::ApplicationUrl => "applicationUrl",
            JobField::ApplicationEmail => "applicationEmail",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        JobField::ALL.into_iter().find(|field| field.as_str() == value)
    }

    /// Character limits from the rule table, where the field has any.
    pub const fn limits(self) -> Option<CharacterLimits> {
        match self {
            JobField::Title => Some(CharacterLimits { min: 3, max: 100 }),
            JobField::Description => Some(CharacterLimits { min: 50, max: 5000 }),
            JobField::Responsibilities => Some(CharacterLimits { min: 20, max: 3000 }),
            JobField::Requirements => Some(CharacterLimits { min: 20, max: 3000 }),
            JobField::Benefits => Some(CharacterLimits { min: 10, max: 2000 }),
            JobField::Location => Some(CharacterLimits { min: 2, max: 100 }),
            _ => None,
        }
    }

    pub const fn is_admin(self) -> bool {
        matches!(
            self,
            JobField::CompanyId
                | JobField::ApplicationMethods
                | JobField::ApplicationUrl
                | JobField::ApplicationEmail
        )
    }
}

/// Raised when a wire string names no known form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized job field '{0}'")]
pub struct UnknownFieldError(pub String);

impl FromStr for JobField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        JobField::parse(value).ok_or_else(|| UnknownFieldError(value.to_string()))
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JobField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JobField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Client-side snapshot of a job posting form.
///
/// `skills` stays raw JSON so shape violations surface as field errors
/// rather than deserialization failures. Salary fields accept either JSON
/// strings or numbers, matching what the form widgets actually send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPostingForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub min_salary: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub max_salary: Option<String>,
    pub application_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Value>,
    #[serde(rename = "companyId")]
    pub company_id: Option<String>,
    #[serde(rename = "applicationMethods")]
    pub application_methods: Option<Vec<String>>,
    #[serde(rename = "applicationUrl")]
    pub application_url: Option<String>,
    #[serde(rename = "applicationEmail")]
    pub application_email: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

/// Capability snapshot for admin validation, supplied by the caller.
///
/// The validator never looks access up on its own; both checks are optional
/// and applied independently when present.
#[derive(Clone, Default)]
pub struct AdminContext {
    access_check: Option<Arc<dyn Fn(&str) -> bool + Send + Sync>>,
    accessible_companies: Option<Vec<CompanyRef>>,
}

impl AdminContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_check(
        mut self,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.access_check = Some(Arc::new(check));
        self
    }

    pub fn with_accessible_companies(mut self, companies: Vec<CompanyRef>) -> Self {
        self.accessible_companies = Some(companies);
        self
    }

    pub fn accessible_companies(&self) -> Option<&[CompanyRef]> {
        self.accessible_companies.as_deref()
    }

    /// True when an access predicate is configured and rejects the company.
    pub(crate) fn access_check_denies(&self, company_id: &str) -> bool {
        self.access_check
            .as_ref()
            .map(|check| !check(company_id))
            .unwrap_or(false)
    }

    /// True when an accessible-company list is configured and the id is
    /// not on it.
    pub(crate) fn list_excludes(&self, company_id: &str) -> bool {
        self.accessible_companies
            .as_ref()
            .map(|companies| !companies.iter().any(|company| company.id == company_id))
            .unwrap_or(false)
    }
}

impl fmt::Debug for AdminContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminContext")
            .field("access_check", &self.access_check.as_ref().map(|_| "<fn>"))
            .field("accessible_companies", &self.accessible_companies)
            .finish()
    }
}

/// Field-keyed validation messages, ordered by the rule table.
///
/// Mirrors the truthy-message convention of the web client: an entry whose
/// message is empty counts as "no error".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    entries: BTreeMap<JobField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: JobField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn remove(&mut self, field: JobField) -> Option<String> {
        self.entries.remove(&field)
    }

    /// Raw entry for the field, empty-string markers included.
    pub fn get(&self, field: JobField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Later entries win, matching the sequential overwrite semantics of
    /// the original rule evaluation.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when any field carries a non-empty message.
    pub fn has_errors(&self) -> bool {
        self.entries.values().any(|message| !message.is_empty())
    }

    /// First field (in rule-table order) with a non-empty message.
    pub fn first_error_field(&self) -> Option<JobField> {
        self.entries
            .iter()
            .find(|(_, message)| !message.is_empty())
            .map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobField, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}
