//! Checking a candidate password against the criteria it was generated for.

use crate::{Criteria, Secret};

/// The result of every check made against a candidate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validation {
    /// The candidate's length in characters.
    pub length: usize,
    pub length_ok: bool,
    /// One entry per included class: its name, and whether the candidate contains any of it.
    pub classes: Vec<(String, bool)>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.length_ok && self.classes.iter().all(|(_, found)| *found)
    }
}

/// Run every check against `password`. Excluded classes are not checked.
pub fn validate(password: &Secret, criteria: &Criteria) -> Validation {
    let _span = tracing::debug_span!("validate").entered();

    let length = password.char_len();
    let length_ok = length == criteria.length;
    if length_ok {
        tracing::debug!("PASS: Password is {} characters long.", length);
    } else {
        tracing::debug!("FAIL: Password is {} characters long.", length);
    }

    let classes = criteria
        .included_classes()
        .map(|class| {
            let found = class.matches_any(password.as_str());
            if found {
                tracing::debug!("PASS: {} found.", class.name());
            } else {
                tracing::debug!("FAIL: {} not found.", class.name());
            }
            (class.name().to_owned(), found)
        })
        .collect();

    let validation = Validation {
        length,
        length_ok,
        classes,
    };
    if validation.is_valid() {
        tracing::debug!("All checks passed.");
    } else {
        tracing::debug!("Failures found; will retry.");
    }
    validation
}

pub fn is_valid(password: &Secret, criteria: &Criteria) -> bool {
    validate(password, criteria).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(length: usize, included: [bool; 4]) -> Criteria {
        let mut criteria = Criteria::new(length);
        for (class, include) in criteria.classes_mut().iter_mut().zip(included) {
            class.set_included(include);
        }
        criteria
    }

    fn secret(s: &str) -> Secret {
        Secret::from(s.to_owned())
    }

    #[test]
    fn wrong_length_is_invalid_regardless_of_content() {
        let criteria = criteria(10, [true, true, true, true]);
        assert!(!is_valid(&secret("aB3!aB3!a"), &criteria));
        assert!(!is_valid(&secret("aB3!aB3!aB3"), &criteria));
        assert!(is_valid(&secret("aB3!aB3!aB"), &criteria));
    }

    #[test]
    fn missing_included_class_is_invalid() {
        let criteria = criteria(8, [true, false, true, false]);
        let validation = validate(&secret("abcdefgh"), &criteria);
        assert!(!validation.is_valid());
        assert!(validation.length_ok);
        assert_eq!(
            validation.classes,
            vec![
                ("Lowercase letters".to_owned(), true),
                ("Numbers".to_owned(), false),
            ]
        );
    }

    #[test]
    fn excluded_classes_are_never_checked() {
        let criteria = criteria(8, [true, false, false, false]);
        assert!(is_valid(&secret("abcdefgh"), &criteria));
        assert_eq!(validate(&secret("abcdefgh"), &criteria).classes.len(), 1);
    }

    #[test]
    fn space_counts_as_a_special_character() {
        let criteria = criteria(8, [true, false, false, true]);
        assert!(is_valid(&secret("abc defg"), &criteria));
        assert!(!is_valid(&secret("abcxdefg"), &criteria));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let criteria = criteria(3, [true, false, false, false]);
        let validation = validate(&secret("aé"), &criteria);
        assert_eq!(validation.length, 2);
        assert!(!validation.length_ok);
    }
}
