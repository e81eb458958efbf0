//! Field-level validation of the reservation contact form.
//!
//! Every rule is checked independently so multiple errors can surface in one
//! pass; for a single field the required check takes precedence over the
//! format check.

use once_cell::sync::Lazy;
use regex::Regex;
use salonbook_domain::{FieldErrors, ReservationDraft};

// Letters and spaces only; the À-ÿ range covers the Latin-1 diacritics.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÿ\s]+$").expect("NAME_RE should compile - this is a bug"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_RE should compile - this is a bug")
});
static NATIONAL_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{8}[A-Za-z]$").expect("NATIONAL_ID_RE should compile - this is a bug")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("PHONE_RE should compile - this is a bug"));

/// Validate a draft. An empty error map means the draft is submittable.
pub fn validate(draft: &ReservationDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_field(&mut errors, "holder_name", &draft.holder_name, &NAME_RE, FieldMessages {
        required: "Name is required",
        format: "Name may only contain letters and spaces",
    });
    check_field(&mut errors, "email", &draft.email, &EMAIL_RE, FieldMessages {
        required: "Email is required",
        format: "Email format is invalid",
    });
    check_field(&mut errors, "national_id", &draft.national_id, &NATIONAL_ID_RE, FieldMessages {
        required: "National ID is required",
        format: "National ID must be 8 digits followed by a letter",
    });
    check_field(&mut errors, "phone", &draft.phone, &PHONE_RE, FieldMessages {
        required: "Phone is required",
        format: "Phone must be exactly 9 digits",
    });

    if !draft.accepts_terms {
        errors.add("accepts_terms", "You must accept the venue rules and privacy policy");
    }

    errors
}

struct FieldMessages {
    required: &'static str,
    format: &'static str,
}

fn check_field(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    format: &Regex,
    messages: FieldMessages,
) {
    if value.trim().is_empty() {
        errors.add(field, messages.required);
    } else if !format.is_match(value.trim()) {
        errors.add(field, messages.format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReservationDraft {
        ReservationDraft {
            holder_name: "Ana Pérez García".into(),
            email: "ana@example.com".into(),
            national_id: "12345678Z".into(),
            phone: "600111222".into(),
            accepts_terms: true,
            popcorn_machine: false,
            cotton_candy: true,
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_required_field_at_once() {
        let errors = validate(&ReservationDraft::default());
        assert_eq!(errors.len(), 5);
        for field in ["holder_name", "email", "national_id", "phone", "accepts_terms"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn name_allows_diacritics_but_not_digits() {
        let mut draft = valid_draft();
        draft.holder_name = "José Núñez".into();
        assert!(validate(&draft).is_empty());

        draft.holder_name = "Ana2".into();
        assert_eq!(
            validate(&draft).get("holder_name"),
            Some("Name may only contain letters and spaces")
        );
    }

    #[test]
    fn email_must_have_local_domain_and_tld() {
        let mut draft = valid_draft();
        for bad in ["ana", "ana@example", "ana example@x.com", "@example.com"] {
            draft.email = bad.into();
            assert!(!validate(&draft).is_empty(), "accepted email {bad:?}");
        }
    }

    #[test]
    fn national_id_is_eight_digits_plus_letter() {
        let mut draft = valid_draft();
        draft.national_id = "1234567A".into(); // 7 digits
        assert!(validate(&draft).get("national_id").is_some());

        draft.national_id = "1234567".into();
        assert!(validate(&draft).get("national_id").is_some());

        draft.national_id = "12345678Z".into();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn phone_is_exactly_nine_digits() {
        let mut draft = valid_draft();
        for bad in ["60011122", "6001112223", "60011122a"] {
            draft.phone = bad.into();
            assert!(validate(&draft).get("phone").is_some(), "accepted phone {bad:?}");
        }
    }

    #[test]
    fn consent_must_be_true() {
        let mut draft = valid_draft();
        draft.accepts_terms = false;
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("accepts_terms").is_some());
    }

    #[test]
    fn add_on_flags_are_unconstrained() {
        let mut draft = valid_draft();
        for (popcorn, cotton) in [(false, false), (true, false), (false, true), (true, true)] {
            draft.popcorn_machine = popcorn;
            draft.cotton_candy = cotton;
            assert!(validate(&draft).is_empty());
        }
    }
}
