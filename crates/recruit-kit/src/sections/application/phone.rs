//! German phone-number normalization and mobile classification.
//!
//! Only mobile numbers are accepted by the application form. Landline and
//! service numbers are recognized so that the applicant gets a specific hint
//! instead of a generic "invalid number" message.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

const COUNTRY_PREFIX: &str = "+49";
const MIN_NATIONAL_LEN: usize = 6;
const MAX_NATIONAL_LEN: usize = 12;
const MOBILE_LEN: RangeInclusive<usize> = 10..=11;
const LANDLINE_LEN: RangeInclusive<usize> = 6..=11;
const SUBSCRIBER_LEN: RangeInclusive<usize> = 3..=8;
const SERVICE_SUFFIX_LEN: RangeInclusive<usize> = 3..=7;

/// Area codes (without the trunk `0`) of the larger German cities.
pub const DEFAULT_AREA_CODES: &[&str] = &[
    "30",  // Berlin
    "40",  // Hamburg
    "69",  // Frankfurt am Main
    "89",  // München
    "201", // Essen
    "202", // Wuppertal
    "203", // Duisburg
    "211", // Düsseldorf
    "221", // Köln
    "228", // Bonn
    "231", // Dortmund
    "234", // Bochum
    "241", // Aachen
    "251", // Münster
    "341", // Leipzig
    "351", // Dresden
    "421", // Bremen
    "511", // Hannover
    "521", // Bielefeld
    "611", // Wiesbaden
    "621", // Mannheim
    "711", // Stuttgart
    "721", // Karlsruhe
    "911", // Nürnberg
];

/// Freephone, premium-rate, shared-cost, televoting and directory services.
pub const DEFAULT_SERVICE_PREFIXES: &[&str] = &["800", "900", "180", "137", "118"];

/// Reserved mobile ranges 0150 through 0179.
pub const DEFAULT_MOBILE_PREFIXES: RangeInclusive<u16> = 150..=179;

static DEFAULT_VALIDATOR: Lazy<PhoneValidator> = Lazy::new(PhoneValidator::default);

/// Number classes accepted by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    Mobile,
    None,
}

/// Why a number was rejected. `Display` is the message shown to applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum PhoneRejection {
    #[error("Bitte geben Sie Ihre Mobilfunknummer ein.")]
    Empty,
    #[error("Bitte geben Sie eine deutsche Telefonnummer (+49) ein.")]
    NotGerman,
    #[error("Die Telefonnummer ist zu kurz.")]
    TooShort,
    #[error("Die Telefonnummer ist zu lang.")]
    TooLong,
    #[error("Festnetznummern werden nicht akzeptiert. Bitte geben Sie Ihre Mobilfunknummer ein.")]
    Landline,
    #[error("Service- und Sondernummern (z. B. 0800, 0900, 0180) werden nicht akzeptiert.")]
    Service,
    #[error("Die Mobilfunknummer ist zu kurz. Deutsche Mobilfunknummern haben 10 oder 11 Ziffern nach der +49.")]
    MobileTooShort,
    #[error("Die Mobilfunknummer ist zu lang. Deutsche Mobilfunknummern haben 10 oder 11 Ziffern nach der +49.")]
    MobileTooLong,
    #[error("Bitte geben Sie eine gültige deutsche Mobilfunknummer ein (z. B. 0151 23456789).")]
    InvalidMobile,
}

/// Outcome of [`validate_phone`]. Exactly one of `formatted` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneValidation {
    pub is_valid: bool,
    #[serde(rename = "type")]
    pub kind: PhoneKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<PhoneRejection>,
}

impl PhoneValidation {
    fn accepted(formatted: String) -> Self {
        Self {
            is_valid: true,
            kind: PhoneKind::Mobile,
            formatted: Some(formatted),
            error: None,
            reason: None,
        }
    }

    fn rejected(reason: PhoneRejection) -> Self {
        Self {
            is_valid: false,
            kind: PhoneKind::None,
            formatted: None,
            error: Some(reason.to_string()),
            reason: Some(reason),
        }
    }
}

/// Numbering-plan data used by the classifier.
///
/// The lists are a heuristic rather than the full Bundesnetzagentur plan, so
/// deployments can extend them without touching the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRules {
    pub area_codes: Vec<String>,
    pub service_prefixes: Vec<String>,
    pub mobile_prefixes: RangeInclusive<u16>,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            area_codes: DEFAULT_AREA_CODES.iter().map(|code| code.to_string()).collect(),
            service_prefixes: DEFAULT_SERVICE_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            mobile_prefixes: DEFAULT_MOBILE_PREFIXES,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhoneValidator {
    rules: PhoneRules,
}

impl PhoneValidator {
    pub fn new(rules: PhoneRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PhoneRules {
        &self.rules
    }

    pub fn validate(&self, raw: &str) -> PhoneValidation {
        match self.classify(raw) {
            Ok(national) => PhoneValidation::accepted(format_mobile_number(&national)),
            Err(reason) => {
                debug!(?reason, "phone number rejected");
                PhoneValidation::rejected(reason)
            }
        }
    }

    /// Run the rule pipeline, returning the national number on success.
    /// The first failing rule decides the rejection.
    pub fn classify(&self, raw: &str) -> Result<String, PhoneRejection> {
        if raw.trim().is_empty() {
            return Err(PhoneRejection::Empty);
        }

        let cleaned = clean_phone_number(raw);
        let national = cleaned
            .strip_prefix(COUNTRY_PREFIX)
            .ok_or(PhoneRejection::NotGerman)?;

        if national.len() < MIN_NATIONAL_LEN {
            return Err(PhoneRejection::TooShort);
        }
        if national.len() > MAX_NATIONAL_LEN {
            return Err(PhoneRejection::TooLong);
        }

        if self.is_landline_number(national) {
            return Err(PhoneRejection::Landline);
        }
        if self.is_service_number(national) {
            return Err(PhoneRejection::Service);
        }

        if national.len() < *MOBILE_LEN.start() {
            return Err(PhoneRejection::MobileTooShort);
        }
        if national.len() > *MOBILE_LEN.end() {
            return Err(PhoneRejection::MobileTooLong);
        }

        if self.has_mobile_prefix(national) {
            Ok(national.to_string())
        } else {
            Err(PhoneRejection::InvalidMobile)
        }
    }

    /// A listed area code with a 3-8 digit subscriber part is a landline;
    /// anything else still counts when it has the generic "2-9 followed by
    /// 6-11 digits" shape, which covers unlisted codes.
    pub fn is_landline_number(&self, national: &str) -> bool {
        if !is_all_digits(national) {
            return false;
        }

        let listed = self.rules.area_codes.iter().any(|code| {
            national.starts_with(code.as_str())
                && SUBSCRIBER_LEN.contains(&(national.len() - code.len()))
        });

        listed
            || (matches!(national.bytes().next(), Some(b'2'..=b'9'))
                && LANDLINE_LEN.contains(&national.len()))
    }

    pub fn is_service_number(&self, national: &str) -> bool {
        is_all_digits(national)
            && self.rules.service_prefixes.iter().any(|prefix| {
                national.starts_with(prefix.as_str())
                    && SERVICE_SUFFIX_LEN.contains(&(national.len() - prefix.len()))
            })
    }

    fn has_mobile_prefix(&self, national: &str) -> bool {
        national
            .get(..3)
            .and_then(|prefix| prefix.parse::<u16>().ok())
            .is_some_and(|prefix| self.rules.mobile_prefixes.contains(&prefix))
    }
}

/// Validate with the built-in numbering-plan data.
pub fn validate_phone(raw: &str) -> PhoneValidation {
    DEFAULT_VALIDATOR.validate(raw)
}

/// Reduce user input to digits (plus a leading `+`) and rewrite the common
/// German prefix spellings to `+49`.
pub fn clean_phone_number(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_ascii_digit() || (ch == '+' && cleaned.is_empty()) {
            cleaned.push(ch);
        }
    }

    if let Some(rest) = cleaned.strip_prefix("0049") {
        format!("{COUNTRY_PREFIX}{rest}")
    } else if let Some(rest) = cleaned.strip_prefix("049") {
        format!("{COUNTRY_PREFIX}{rest}")
    } else if cleaned.starts_with("49") {
        format!("+{cleaned}")
    } else if cleaned.starts_with('0') && !cleaned.starts_with("00") {
        format!("{COUNTRY_PREFIX}{}", &cleaned[1..])
    } else if cleaned.starts_with('+') {
        cleaned
    } else {
        format!("{COUNTRY_PREFIX}{cleaned}")
    }
}

/// Group a national mobile number for display: 3+3+4 or 3+4+4 digits.
pub fn format_mobile_number(national: &str) -> String {
    match national.len() {
        10 if national.is_ascii() => format!(
            "{COUNTRY_PREFIX} {} {} {}",
            &national[..3],
            &national[3..6],
            &national[6..]
        ),
        11 if national.is_ascii() => format!(
            "{COUNTRY_PREFIX} {} {} {}",
            &national[..3],
            &national[3..7],
            &national[7..]
        ),
        len if len > 3 && national.is_ascii() => {
            format!("{COUNTRY_PREFIX} {} {}", &national[..3], &national[3..])
        }
        _ => format!("{COUNTRY_PREFIX} {national}"),
    }
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
