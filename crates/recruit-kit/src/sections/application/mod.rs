//! Application form checks: German mobile numbers, email addresses and the
//! combined form review.

pub mod email;
pub mod form;
pub mod phone;
pub mod router;

#[cfg(test)]
mod tests;

pub use email::{validate_email, EmailRejection, EmailValidation, EmailValidator};
pub use form::{ApplicationForm, ApplicationReview, ApplicationReviewer, FieldIssue, FormField};
pub use phone::{
    clean_phone_number, format_mobile_number, validate_phone, PhoneKind, PhoneRejection,
    PhoneRules, PhoneValidation, PhoneValidator,
};
pub use router::{application_router, ApplicationState};
