//! Shipping contact and its validation rules.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Where the order ships and who to reach about it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShippingContact {
    pub name: String,
    pub email: String,
    /// 10-digit Indian mobile number.
    pub phone: String,
    pub address: String,
    pub city: String,
    /// 6-digit Indian postal code.
    pub pincode: String,
}

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationIssue {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl ShippingContact {
    /// Collect every failing field, in form order. Empty means valid.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.name.chars().count() < 2 {
            issues.push(ValidationIssue::new(
                "name",
                "Name must be at least 2 characters",
            ));
        } else if self.name.chars().count() > 100 {
            issues.push(ValidationIssue::new(
                "name",
                "Name must be less than 100 characters",
            ));
        }

        if !plausible_email(&self.email) {
            issues.push(ValidationIssue::new("email", "Invalid email address"));
        } else if self.email.chars().count() > 255 {
            issues.push(ValidationIssue::new(
                "email",
                "Email must be less than 255 characters",
            ));
        }

        if !valid_indian_mobile(&self.phone) {
            issues.push(ValidationIssue::new(
                "phone",
                "Phone must be a valid 10-digit Indian number",
            ));
        }

        if self.address.chars().count() < 10 {
            issues.push(ValidationIssue::new(
                "address",
                "Address must be at least 10 characters",
            ));
        } else if self.address.chars().count() > 500 {
            issues.push(ValidationIssue::new(
                "address",
                "Address must be less than 500 characters",
            ));
        }

        if self.city.chars().count() < 2 {
            issues.push(ValidationIssue::new(
                "city",
                "City must be at least 2 characters",
            ));
        } else if self.city.chars().count() > 100 {
            issues.push(ValidationIssue::new(
                "city",
                "City must be less than 100 characters",
            ));
        }

        if !valid_pincode(&self.pincode) {
            issues.push(ValidationIssue::new(
                "pincode",
                "Pincode must be a valid 6-digit Indian pincode",
            ));
        }

        issues
    }

    /// Validate, folding all issues into one error message.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        let joined = issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(CommerceError::Validation(joined))
    }
}

fn plausible_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.chars().any(char::is_whitespace)
}

/// 10 digits, starting 6-9.
fn valid_indian_mobile(s: &str) -> bool {
    s.len() == 10
        && s.chars().all(|c| c.is_ascii_digit())
        && s.starts_with(['6', '7', '8', '9'])
}

/// 6 digits, not starting with 0.
fn valid_pincode(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_digit()) && !s.starts_with('0')
}
