use std::ops::RangeInclusive;

use crate::ErrorRepr;

static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static NUMBERS: &str = "0123456789";
static SPECIAL: &str = " `~!@#$%^&*()_+-=[]\\{}|;':\",./<>?";

/// A named pool of characters that can be included in, or excluded from, a password.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharacterClass {
    name: String,
    characters: Vec<char>,
    included: bool,
}

impl CharacterClass {
    /// Create a new, excluded, character class. The pool must not be empty.
    pub fn new(name: impl Into<String>, characters: &str) -> Result<CharacterClass, crate::Error> {
        let name = name.into();
        if characters.is_empty() {
            return Err(ErrorRepr::EmptyCharacterClass(name).into());
        }
        Ok(CharacterClass {
            name,
            characters: characters.chars().collect(),
            included: false,
        })
    }

    /// Derive a class by upper-casing every character of `lower`.
    fn uppercase_of(name: &str, lower: &CharacterClass) -> CharacterClass {
        CharacterClass {
            name: name.to_owned(),
            characters: lower
                .characters
                .iter()
                .flat_map(|ch| ch.to_uppercase())
                .collect(),
            included: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn included(&self) -> bool {
        self.included
    }

    pub fn set_included(&mut self, included: bool) {
        self.included = included;
    }

    /// True if any character of `text` is in this class's pool.
    pub fn matches_any(&self, text: &str) -> bool {
        text.chars().any(|ch| self.characters.contains(&ch))
    }
}

/// The full set of choices governing one generation attempt.
#[derive(Clone, Debug)]
pub struct Criteria {
    pub length: usize,
    classes: Vec<CharacterClass>,
}

impl Criteria {
    /// Criteria with the four standard classes, all excluded.
    pub fn new(length: usize) -> Criteria {
        Criteria::with_classes(length, default_classes())
    }

    pub fn with_classes(length: usize, classes: Vec<CharacterClass>) -> Criteria {
        Criteria { length, classes }
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut [CharacterClass] {
        &mut self.classes
    }

    pub fn included_classes(&self) -> impl Iterator<Item = &CharacterClass> {
        self.classes.iter().filter(|c| c.included)
    }

    pub fn has_any_included(&self) -> bool {
        self.classes.iter().any(|c| c.included)
    }

    /// Whether a valid password can exist: some class is included, and the password is long
    /// enough to hold one character of each included class.
    pub fn is_satisfiable(&self) -> bool {
        let included = self.included_classes().count();
        included > 0 && self.length >= included
    }

    /// Every included class's characters, concatenated in declaration order. Characters shared
    /// by several classes appear once per class.
    pub fn pool(&self) -> Vec<char> {
        self.included_classes()
            .flat_map(|c| c.characters.iter().copied())
            .collect()
    }
}

/// The lowercase, uppercase, number and special character classes, in that order.
pub fn default_classes() -> Vec<CharacterClass> {
    let lowercase = CharacterClass {
        name: "Lowercase letters".to_owned(),
        characters: LOWERCASE.chars().collect(),
        included: false,
    };
    let uppercase = CharacterClass::uppercase_of("Uppercase letters", &lowercase);
    let numbers = CharacterClass {
        name: "Numbers".to_owned(),
        characters: NUMBERS.chars().collect(),
        included: false,
    };
    let special = CharacterClass {
        name: "Special characters".to_owned(),
        characters: SPECIAL.chars().collect(),
        included: false,
    };
    vec![lowercase, uppercase, numbers, special]
}

/// The inclusive range a requested password length must fall in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<LengthRange, crate::Error> {
        if min == 0 || min > max {
            return Err(ErrorRepr::InvalidLengthRange { min, max }.into());
        }
        Ok(LengthRange { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        self.as_range().contains(&length)
    }

    fn as_range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

impl Default for LengthRange {
    fn default() -> LengthRange {
        LengthRange { min: 8, max: 128 }
    }
}
