//! Signup form state and native-control validation.
//!
//! The form holds an email field and an activity select. Before a submission
//! fires, the same checks a browser applies to `<input type="email" required>`
//! and `<select required>` run here; nothing else is validated locally.

use crate::domain::ActivityCatalog;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Current contents of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Email field, whitespace-trimmed like a browser email input.
    pub email: String,

    /// Selected activity name; empty while the placeholder is selected.
    pub activity: String,

    /// Hint left by the last submission attempt that failed validation.
    pub hint: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub activity: String,
    pub email: String,
}

impl SignupForm {
    /// Clears both fields, returning the select to its placeholder.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
        self.hint = None;
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.trim().to_string();
        self.hint = None;
    }

    /// Checks the fields in document order (email first, then activity).
    ///
    /// # Errors
    ///
    /// Returns the hint for the first invalid field.
    pub fn validate(&self) -> Result<Submission, String> {
        if self.email.is_empty() {
            return Err("Please fill in the email field.".to_string());
        }
        if !is_valid_email(&self.email) {
            return Err(format!("\"{}\" is not a valid email address.", self.email));
        }
        if self.activity.is_empty() {
            return Err("Please select an activity.".to_string());
        }

        Ok(Submission {
            activity: self.activity.clone(),
            email: self.email.clone(),
        })
    }
}

/// The `type=email` rule of HTML forms: `local@domain`, where the local part
/// uses the permitted punctuation and the domain is dot-separated labels of
/// letters, digits and inner hyphens.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    const LOCAL_PUNCTUATION: &str = ".!#$%&'*+/=?^_`{|}~-";

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    local_ok && domain_ok
}

/// Resolves a typed query to one of the select's options.
///
/// An exact, case-insensitive name match wins; otherwise the best fuzzy match
/// is taken, earlier activities winning ties. Returns `None` when nothing
/// matches, which leaves the selection unchanged.
#[must_use]
pub fn resolve_activity(catalog: &ActivityCatalog, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(name) = catalog.names().find(|n| n.eq_ignore_ascii_case(query)) {
        return Some(name.to_string());
    }

    let matcher = SkimMatcherV2::default();
    let mut best: Option<(i64, &str)> = None;
    for name in catalog.names() {
        if let Some(score) = matcher.fuzzy_match(name, query) {
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, name));
            }
        }
    }

    tracing::debug!(query = %query, resolved = ?best.map(|(_, n)| n), "resolved activity query");
    best.map(|(_, name)| name.to_string())
}
