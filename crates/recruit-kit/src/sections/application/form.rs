use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use super::email::{EmailValidation, EmailValidator};
use super::phone::{PhoneValidation, PhoneValidator};
use crate::sections::positions::PositionBoard;

/// Fields submitted by the application form.
///
/// Text fields tolerate non-string JSON (treated as empty) so a malformed
/// payload still yields a field-level review rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub position_id: String,
    pub privacy_consent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    PositionId,
    PrivacyConsent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FormField,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReview {
    pub is_valid: bool,
    pub phone: PhoneValidation,
    pub email: EmailValidation,
    pub issues: Vec<FieldIssue>,
}

/// Runs the contact validators and the remaining form rules in field order.
#[derive(Debug, Clone, Default)]
pub struct ApplicationReviewer {
    phone: PhoneValidator,
    email: EmailValidator,
}

impl ApplicationReviewer {
    pub fn new(phone: PhoneValidator, email: EmailValidator) -> Self {
        Self { phone, email }
    }

    pub fn validate_phone(&self, raw: &str) -> PhoneValidation {
        self.phone.validate(raw)
    }

    pub fn validate_email(&self, raw: &str) -> EmailValidation {
        self.email.validate(raw)
    }

    /// `board` enables the position check; without it any id is accepted.
    pub fn review(&self, form: &ApplicationForm, board: Option<&PositionBoard>) -> ApplicationReview {
        let mut issues = Vec::new();

        if form.first_name.trim().is_empty() {
            issues.push(issue(FormField::FirstName, "Bitte geben Sie Ihren Vornamen ein."));
        }
        if form.last_name.trim().is_empty() {
            issues.push(issue(FormField::LastName, "Bitte geben Sie Ihren Nachnamen ein."));
        }

        let email = self.email.validate(&form.email);
        if let Some(message) = &email.error {
            issues.push(issue(FormField::Email, message));
        }

        let phone = self.phone.validate(&form.phone);
        if let Some(message) = &phone.error {
            issues.push(issue(FormField::Phone, message));
        }

        if let Some(board) = board {
            let position_id = form.position_id.trim();
            if position_id.is_empty() {
                issues.push(issue(
                    FormField::PositionId,
                    "Bitte wählen Sie eine Stelle aus.",
                ));
            } else if !board.contains(position_id) {
                issues.push(issue(
                    FormField::PositionId,
                    "Diese Stelle ist nicht mehr ausgeschrieben.",
                ));
            }
        }

        if !form.privacy_consent {
            issues.push(issue(
                FormField::PrivacyConsent,
                "Bitte stimmen Sie der Datenschutzerklärung zu.",
            ));
        }

        let is_valid = issues.is_empty();
        info!(
            is_valid,
            issues = issues.len(),
            position_id = %form.position_id,
            "application form reviewed"
        );

        ApplicationReview {
            is_valid,
            phone,
            email,
            issues,
        }
    }
}

fn issue(field: FormField, message: &str) -> FieldIssue {
    FieldIssue {
        field,
        message: message.to_string(),
    }
}

/// Strings pass through; numbers keep their text; everything else is empty.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}
