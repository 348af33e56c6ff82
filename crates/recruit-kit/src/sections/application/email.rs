//! Syntactic and light semantic email checks for the application form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MIN_DOMAIN_LEN: usize = 4;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

static TOP_LEVEL_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[A-Za-z]{2,}$").expect("tld pattern compiles"));

static DEFAULT_VALIDATOR: Lazy<EmailValidator> = Lazy::new(EmailValidator::default);

/// Throwaway-inbox providers. A match only produces a warning.
pub const DEFAULT_DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "einrot.com",
    "guerrillamail.com",
    "mailinator.com",
    "sharklasers.com",
    "spamgourmet.com",
    "temp-mail.org",
    "throwawaymail.com",
    "trash-mail.com",
    "trashmail.com",
    "wegwerfmail.de",
    "yopmail.com",
];

/// Misspellings of the freemail domains most common in Germany.
const DOMAIN_TYPOS: &[(&str, &str)] = &[
    ("gmial.com", "gmail.com"),
    ("gmai.com", "gmail.com"),
    ("gmx.dee", "gmx.de"),
    ("gmx.de.de", "gmx.de"),
    ("web.dee", "web.de"),
    ("wbe.de", "web.de"),
    ("t-onlin.de", "t-online.de"),
    ("tonline.de", "t-online.de"),
    ("hotmial.com", "hotmail.com"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum EmailRejection {
    #[error("Bitte geben Sie Ihre E-Mail-Adresse ein.")]
    Empty,
    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein (z. B. name@beispiel.de).")]
    InvalidFormat,
    #[error("Die E-Mail-Adresse darf keine aufeinanderfolgenden Punkte enthalten.")]
    ConsecutiveDots,
    #[error("Die E-Mail-Adresse darf vor dem @ nicht mit einem Punkt beginnen oder enden.")]
    LocalPartDot,
    #[error("Die Domain der E-Mail-Adresse ist zu kurz.")]
    DomainTooShort,
    #[error("Die E-Mail-Adresse benötigt eine gültige Endung (z. B. .de oder .com).")]
    MissingTopLevelDomain,
    #[error("Die E-Mail-Adresse ist zu lang.")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<EmailRejection>,
}

impl EmailValidation {
    fn rejected(reason: EmailRejection) -> Self {
        Self {
            is_valid: false,
            formatted: None,
            warnings: Vec::new(),
            error: Some(reason.to_string()),
            reason: Some(reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailValidator {
    disposable_domains: Vec<String>,
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::with_extra_disposable_domains(std::iter::empty::<String>())
    }
}

impl EmailValidator {
    /// Built-in disposable list plus deployment-specific additions.
    pub fn with_extra_disposable_domains<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut disposable_domains: Vec<String> = DEFAULT_DISPOSABLE_DOMAINS
            .iter()
            .map(|domain| domain.to_string())
            .collect();
        for domain in extra {
            let domain = domain.into().trim().to_ascii_lowercase();
            if !domain.is_empty() && !disposable_domains.contains(&domain) {
                disposable_domains.push(domain);
            }
        }

        Self { disposable_domains }
    }

    pub fn is_disposable(&self, domain: &str) -> bool {
        let domain = domain.to_ascii_lowercase();
        self.disposable_domains.iter().any(|listed| *listed == domain)
    }

    pub fn validate(&self, raw: &str) -> EmailValidation {
        let email = raw.trim();
        match check_syntax(email) {
            Ok((_, domain)) => {
                let mut warnings = Vec::new();
                if self.is_disposable(domain) {
                    warnings.push(
                        "Diese E-Mail-Adresse scheint eine Wegwerf-Adresse zu sein. Bitte nutzen Sie eine dauerhafte Adresse, damit wir Sie erreichen können."
                            .to_string(),
                    );
                }
                if let Some(suggestion) = suggest_domain(domain) {
                    warnings.push(format!("Meinten Sie @{suggestion}?"));
                }

                EmailValidation {
                    is_valid: true,
                    formatted: Some(email.to_lowercase()),
                    warnings,
                    error: None,
                    reason: None,
                }
            }
            Err(reason) => {
                debug!(?reason, "email address rejected");
                EmailValidation::rejected(reason)
            }
        }
    }
}

pub fn validate_email(raw: &str) -> EmailValidation {
    DEFAULT_VALIDATOR.validate(raw)
}

/// Returns the `(local, domain)` split of a well-formed address.
fn check_syntax(email: &str) -> Result<(&str, &str), EmailRejection> {
    if email.is_empty() {
        return Err(EmailRejection::Empty);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(EmailRejection::InvalidFormat);
    }
    if email.contains("..") {
        return Err(EmailRejection::ConsecutiveDots);
    }

    let (local, domain) = email
        .rsplit_once('@')
        .ok_or(EmailRejection::InvalidFormat)?;

    if local.starts_with('.') || local.ends_with('.') {
        return Err(EmailRejection::LocalPartDot);
    }
    if domain.len() < MIN_DOMAIN_LEN {
        return Err(EmailRejection::DomainTooShort);
    }
    if !TOP_LEVEL_DOMAIN.is_match(domain) {
        return Err(EmailRejection::MissingTopLevelDomain);
    }
    if email.len() > MAX_EMAIL_LEN || local.len() > MAX_LOCAL_LEN {
        return Err(EmailRejection::TooLong);
    }

    Ok((local, domain))
}

fn suggest_domain(domain: &str) -> Option<&'static str> {
    let domain = domain.to_ascii_lowercase();
    DOMAIN_TYPOS
        .iter()
        .find(|(typo, _)| *typo == domain)
        .map(|(_, fixed)| *fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_checks_run_in_order() {
        assert_eq!(check_syntax(""), Err(EmailRejection::Empty));
        assert_eq!(check_syntax("no-at-sign"), Err(EmailRejection::InvalidFormat));
        assert_eq!(check_syntax("a..b@test.de"), Err(EmailRejection::ConsecutiveDots));
        assert_eq!(check_syntax(".anna@test.de"), Err(EmailRejection::LocalPartDot));
        assert_eq!(check_syntax("anna.@test.de"), Err(EmailRejection::LocalPartDot));
        assert_eq!(check_syntax("anna@a.b"), Err(EmailRejection::DomainTooShort));
        assert_eq!(
            check_syntax("anna@localhost"),
            Err(EmailRejection::MissingTopLevelDomain)
        );
        assert_eq!(check_syntax("anna@mail.d3"), Err(EmailRejection::MissingTopLevelDomain));
    }

    #[test]
    fn enforces_length_limits() {
        let long_local = format!("{}@beispiel.de", "a".repeat(65));
        assert_eq!(check_syntax(&long_local), Err(EmailRejection::TooLong));

        let long_domain = format!("anna@{}.de", ["abcdefghij"; 25].join("."));
        assert!(long_domain.len() > MAX_EMAIL_LEN);
        assert_eq!(check_syntax(&long_domain), Err(EmailRejection::TooLong));
    }

    #[test]
    fn suggests_common_freemail_corrections() {
        assert_eq!(suggest_domain("GMIAL.com"), Some("gmail.com"));
        assert_eq!(suggest_domain("gmx.de"), None);
    }

    #[test]
    fn extra_disposable_domains_are_normalized() {
        let validator = EmailValidator::with_extra_disposable_domains([" Wegwerf.Example "]);
        assert!(validator.is_disposable("wegwerf.example"));
        assert!(validator.is_disposable("MAILINATOR.COM"));
        assert!(!EmailValidator::default().is_disposable("wegwerf.example"));
    }
}
