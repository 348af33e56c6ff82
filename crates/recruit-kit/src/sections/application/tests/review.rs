use super::common::*;
use crate::sections::application::{ApplicationForm, ApplicationReviewer, FormField};

fn fields(review: &crate::sections::application::ApplicationReview) -> Vec<FormField> {
    review.issues.iter().map(|issue| issue.field).collect()
}

#[test]
fn complete_form_passes_review() {
    let reviewer = ApplicationReviewer::default();
    let board = board();

    let review = reviewer.review(&form(), Some(&board));

    assert!(review.is_valid, "unexpected issues: {:?}", review.issues);
    assert_eq!(review.phone.formatted.as_deref(), Some("+49 151 2345 6789"));
    assert_eq!(review.email.formatted.as_deref(), Some("jana.becker@example.de"));
}

#[test]
fn review_collects_issues_in_field_order() {
    let reviewer = ApplicationReviewer::default();
    let form = ApplicationForm {
        first_name: " ".to_string(),
        phone: "030 1234567".to_string(),
        email: "jana..becker@example.de".to_string(),
        privacy_consent: false,
        ..form()
    };

    let review = reviewer.review(&form, None);

    assert!(!review.is_valid);
    assert_eq!(
        fields(&review),
        vec![
            FormField::FirstName,
            FormField::Email,
            FormField::Phone,
            FormField::PrivacyConsent
        ]
    );
    let phone_issue = &review.issues[2];
    assert_eq!(Some(phone_issue.message.clone()), review.phone.error);
}

#[test]
fn disabled_or_unknown_positions_are_flagged_when_board_is_known() {
    let reviewer = ApplicationReviewer::default();
    let board = board();

    let disabled = ApplicationForm {
        position_id: "archiv-bonn".to_string(),
        ..form()
    };
    let review = reviewer.review(&disabled, Some(&board));
    assert_eq!(fields(&review), vec![FormField::PositionId]);

    let missing = ApplicationForm {
        position_id: String::new(),
        ..form()
    };
    let review = reviewer.review(&missing, Some(&board));
    assert_eq!(fields(&review), vec![FormField::PositionId]);

    let review = reviewer.review(&missing, None);
    assert!(review.is_valid);
}

#[test]
fn warnings_do_not_block_submission() {
    let reviewer = ApplicationReviewer::default();
    let form = ApplicationForm {
        email: "jana@mailinator.com".to_string(),
        ..form()
    };

    let review = reviewer.review(&form, None);

    assert!(review.is_valid);
    assert!(!review.email.warnings.is_empty());
}

#[test]
fn non_string_fields_deserialize_as_empty() {
    let form: ApplicationForm = serde_json::from_value(serde_json::json!({
        "firstName": "Jana",
        "lastName": ["Becker"],
        "email": null,
        "phone": 15123456789u64,
        "privacyConsent": true
    }))
    .expect("lenient form deserializes");

    assert_eq!(form.last_name, "");
    assert_eq!(form.email, "");
    assert_eq!(form.phone, "15123456789");

    let review = ApplicationReviewer::default().review(&form, None);
    assert_eq!(fields(&review), vec![FormField::LastName, FormField::Email]);
    assert!(review.phone.is_valid);
}
