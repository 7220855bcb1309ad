//! Customer request validation pipeline.
//!
//! A [`RequestValidator`] holds an ordered list of [`Check`]s. Each check
//! pairs a predicate over [`CustomerInput`] with the [`ValidationError`] it
//! raises. Validation walks the list and stops at the first failing predicate;
//! when every predicate passes the input is handed back untouched.
//!
//! The standard pipeline built by [`RequestValidator::new`] runs, in order:
//!
//! 1. name present
//! 2. name matches the configured [`NamePolicy`]
//! 3. email present
//! 4. email well formed
//! 5. email domain not on the block-list
//!
//! The validator is pure and holds only immutable configuration, so a single
//! instance can be shared across request handlers behind an `Arc`.

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;
use tracing::debug;

use super::customer::CustomerInput;

/// Consumer mail providers rejected unless configured otherwise.
pub const DEFAULT_BLOCKED_EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "yahoo.in",
    "outlook.com",
    "hotmail.com",
];

/// Punctuation accepted by [`NamePolicy::LettersWithPunctuation`] by default.
pub const DEFAULT_NAME_PUNCTUATION: &str = " '-.";

/// First validation failure found for a [`CustomerInput`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name absent or blank.
    #[error("name is required")]
    MissingName,
    /// Name contains characters outside the allowed set.
    #[error("name contains characters that are not allowed")]
    InvalidNameFormat,
    /// Email absent or blank.
    #[error("email is required")]
    MissingEmail,
    /// Email is not of the form `local@domain.tld`.
    #[error("invalid email format")]
    InvalidEmailFormat,
    /// Email domain is on the block-list.
    #[error("email domain {0} is not allowed")]
    RestrictedEmailDomain(String),
}

impl ValidationError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::InvalidNameFormat => "invalid_name_format",
            Self::MissingEmail => "missing_email",
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::RestrictedEmailDomain(_) => "restricted_email_domain",
        }
    }

    /// Payload field the failure refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingName | Self::InvalidNameFormat => "name",
            Self::MissingEmail | Self::InvalidEmailFormat | Self::RestrictedEmailDomain(_) => {
                "email"
            }
        }
    }
}

/// Which characters a customer name may contain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// ASCII letters only: `^[a-zA-Z]+$`.
    #[default]
    AsciiLetters,
    /// Any Unicode letter plus the listed punctuation characters.
    LettersWithPunctuation(String),
}

impl NamePolicy {
    /// Letters plus [`DEFAULT_NAME_PUNCTUATION`].
    #[must_use]
    pub fn letters_with_default_punctuation() -> Self {
        Self::LettersWithPunctuation(DEFAULT_NAME_PUNCTUATION.to_owned())
    }

    fn pattern(&self) -> String {
        match self {
            Self::AsciiLetters => "^[a-zA-Z]+$".to_owned(),
            Self::LettersWithPunctuation(punctuation) => {
                let escaped: String = punctuation
                    .chars()
                    .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                    .collect();
                format!("^[\\p{{L}}{escaped}]+$")
            }
        }
    }
}

/// Static configuration for the standard pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    name_policy: NamePolicy,
    blocked_domains: BTreeSet<String>,
}

impl ValidationConfig {
    /// Build a configuration; domains are trimmed and lower-cased.
    pub fn new<I, S>(name_policy: NamePolicy, blocked_domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocked_domains = blocked_domains
            .into_iter()
            .map(|domain| domain.as_ref().trim().to_lowercase())
            .filter(|domain| !domain.is_empty())
            .collect();
        Self {
            name_policy,
            blocked_domains,
        }
    }

    /// Configured name policy.
    #[must_use]
    pub const fn name_policy(&self) -> &NamePolicy {
        &self.name_policy
    }

    /// Normalised block-list.
    #[must_use]
    pub const fn blocked_domains(&self) -> &BTreeSet<String> {
        &self.blocked_domains
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new(NamePolicy::default(), DEFAULT_BLOCKED_EMAIL_DOMAINS)
    }
}

/// Failure to assemble a validator from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorConfigError {
    /// The name policy did not produce a usable pattern.
    #[error("name policy pattern failed to compile: {0}")]
    NamePattern(#[from] regex::Error),
}

type Predicate = Box<dyn Fn(&CustomerInput) -> bool + Send + Sync>;
type Rejection = fn(&CustomerInput) -> ValidationError;

/// One pipeline stage: a predicate and the error raised when it fails.
pub struct Check {
    label: &'static str,
    predicate: Predicate,
    reject: Rejection,
}

impl Check {
    /// Pair a predicate with the error constructor used when it fails.
    pub fn new<P>(label: &'static str, predicate: P, reject: Rejection) -> Self
    where
        P: Fn(&CustomerInput) -> bool + Send + Sync + 'static,
    {
        Self {
            label,
            predicate: Box::new(predicate),
            reject,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    fn run(&self, input: &CustomerInput) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            Err((self.reject)(input))
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("label", &self.label).finish_non_exhaustive()
    }
}

/// Name is present and not blank.
#[must_use]
pub fn has_name() -> Check {
    Check::new(
        "has_name",
        |input| present(input.name.as_deref()).is_some(),
        |_| ValidationError::MissingName,
    )
}

/// Trimmed name matches `pattern`.
#[must_use]
pub fn name_matches(pattern: Regex) -> Check {
    Check::new(
        "name_matches_policy",
        move |input| present(input.name.as_deref()).is_some_and(|name| pattern.is_match(name)),
        |_| ValidationError::InvalidNameFormat,
    )
}

/// Email is present and not blank.
#[must_use]
pub fn has_email() -> Check {
    Check::new(
        "has_email",
        |input| present(input.email.as_deref()).is_some(),
        |_| ValidationError::MissingEmail,
    )
}

/// Email splits into a non-empty local part and a dotted domain.
#[must_use]
pub fn email_well_formed() -> Check {
    Check::new(
        "email_well_formed",
        |input| email_domain(input).is_some(),
        |_| ValidationError::InvalidEmailFormat,
    )
}

/// Email domain is not in `blocked`.
#[must_use]
pub fn email_domain_allowed(blocked: BTreeSet<String>) -> Check {
    Check::new(
        "email_domain_allowed",
        move |input| email_domain(input).is_some_and(|domain| !blocked.contains(&domain)),
        |input| ValidationError::RestrictedEmailDomain(email_domain(input).unwrap_or_default()),
    )
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Lower-cased domain of the input's email, when the address is well formed.
///
/// Well formed means exactly one `@`, a non-empty local part, and a domain
/// containing a `.` that is neither its first nor its last character.
#[must_use]
pub fn email_domain(input: &CustomerInput) -> Option<String> {
    let email = present(input.email.as_deref())?.to_lowercase();
    let (local, domain) = email.split_once('@')?;
    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    well_formed.then(|| domain.to_owned())
}

/// Ordered, short-circuiting customer validator.
///
/// # Examples
/// ```
/// use customer_service::domain::{CustomerInput, RequestValidator, ValidationError};
///
/// let validator = RequestValidator::with_defaults().expect("default pattern compiles");
///
/// let ok = CustomerInput::new("abc", "abc@company.com");
/// assert_eq!(validator.validate(ok.clone()), Ok(ok));
///
/// let blocked = CustomerInput::new("abc", "abc@gmail.com");
/// assert_eq!(
///     validator.validate(blocked),
///     Err(ValidationError::RestrictedEmailDomain("gmail.com".into()))
/// );
/// ```
#[derive(Debug)]
pub struct RequestValidator {
    checks: Vec<Check>,
}

impl RequestValidator {
    /// Build the standard five-stage pipeline.
    ///
    /// # Errors
    /// Returns [`ValidatorConfigError::NamePattern`] if the name policy
    /// pattern cannot be compiled.
    pub fn new(config: &ValidationConfig) -> Result<Self, ValidatorConfigError> {
        let name_pattern = Regex::new(&config.name_policy().pattern())?;
        Ok(Self::from_checks(vec![
            has_name(),
            name_matches(name_pattern),
            has_email(),
            email_well_formed(),
            email_domain_allowed(config.blocked_domains().clone()),
        ]))
    }

    /// Standard pipeline over [`ValidationConfig::default`].
    ///
    /// # Errors
    /// See [`RequestValidator::new`].
    pub fn with_defaults() -> Result<Self, ValidatorConfigError> {
        Self::new(&ValidationConfig::default())
    }

    /// Assemble a custom pipeline; checks run in the given order.
    #[must_use]
    pub const fn from_checks(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    /// Labels of the configured checks, in evaluation order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(Check::label)
    }

    /// Run the checks in order and return the first failure.
    ///
    /// # Errors
    /// Returns the [`ValidationError`] of the first failing check.
    pub fn validate(&self, input: CustomerInput) -> Result<CustomerInput, ValidationError> {
        for check in &self.checks {
            if let Err(error) = check.run(&input) {
                debug!(check = check.label(), code = error.code(), "customer input rejected");
                return Err(error);
            }
        }
        Ok(input)
    }
}
