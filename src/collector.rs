//! Collecting password criteria by asking the user a sequence of questions.

use std::collections::VecDeque;
use std::io;

use crate::criteria::{CharacterClass, Criteria, LengthRange};
use crate::ErrorRepr;

/// Something that can ask the user questions.
///
/// Every method blocks until the user answers. An `Err` means no answer can ever come (for
/// example, stdin is not a terminal), and aborts collection.
pub trait CriteriaInput {
    /// Ask a free-form question.
    fn prompt(&mut self, question: &str) -> io::Result<String>;
    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
    /// Tell the user something went wrong. Informational; it has no answer.
    fn alert(&mut self, message: &str);
}

impl<T: CriteriaInput + ?Sized> CriteriaInput for &mut T {
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        (**self).prompt(question)
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        (**self).confirm(question)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}

pub(crate) static INVALID_LENGTH_ALERT: &str =
    "Please provide a valid number for your password's length!";

/// Ask for a password length until the answer is an integer within `range`.
pub fn collect_length<I>(input: &mut I, range: LengthRange) -> Result<usize, crate::Error>
where
    I: CriteriaInput + ?Sized,
{
    let question = format!(
        "How many characters do you want the password to be? Choose between {} and {} characters.",
        range.min(),
        range.max()
    );
    loop {
        let answer = input.prompt(&question).map_err(ErrorRepr::Prompt)?;
        match parse_leading_integer(&answer) {
            Some(length) if range.contains(length) => {
                tracing::info!("Password length will be {} characters.", length);
                return Ok(length);
            }
            _ => {
                tracing::debug!(answer = %answer, "rejected password length");
                input.alert(INVALID_LENGTH_ALERT);
            }
        }
    }
}

/// Read the integer at the start of `answer`, ignoring leading whitespace and anything after the
/// digits, so `"12.5"` and `"12 chars"` both read as 12. Negative numbers read as `None`, as do
/// answers without leading digits. Numbers too large for `usize` saturate.
fn parse_leading_integer(answer: &str) -> Option<usize> {
    let answer = answer.trim_start();
    let (negative, rest) = match answer.as_bytes().first() {
        Some(b'-') => (true, &answer[1..]),
        Some(b'+') => (false, &answer[1..]),
        _ => (false, answer),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].bytes().fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    });
    if negative && value != 0 {
        None
    } else {
        Some(value)
    }
}

/// Ask, for each class, whether it should be used, and record the answer on the class.
pub fn collect_inclusions<I>(
    input: &mut I,
    classes: &mut [CharacterClass],
) -> Result<(), crate::Error>
where
    I: CriteriaInput + ?Sized,
{
    for class in classes {
        let question = format!("Would you like to include {}?", class.name().to_lowercase());
        let include = input.confirm(&question).map_err(ErrorRepr::Prompt)?;
        if include {
            tracing::info!("{} will be included.", class.name());
        } else {
            tracing::info!("{} will not be included.", class.name());
        }
        class.set_included(include);
    }
    Ok(())
}

/// Collect a full set of criteria: first the length, then the standard character classes.
pub fn collect_criteria<I>(input: &mut I, range: LengthRange) -> Result<Criteria, crate::Error>
where
    I: CriteriaInput + ?Sized,
{
    let _span = tracing::info_span!("collect_criteria").entered();
    let length = collect_length(input, range)?;
    let mut criteria = Criteria::new(length);
    collect_inclusions(input, criteria.classes_mut())?;
    Ok(criteria)
}

/// Answers questions from a fixed script, and records any alerts.
///
/// Running out of answers is reported as an [`io::ErrorKind::UnexpectedEof`] error.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    confirmations: VecDeque<bool>,
    alerts: Vec<String>,
}

impl ScriptedInput {
    pub fn new() -> ScriptedInput {
        ScriptedInput::default()
    }

    /// Queue an answer to the next free-form question.
    pub fn answer(mut self, answer: impl Into<String>) -> ScriptedInput {
        self.answers.push_back(answer.into());
        self
    }

    /// Queue answers to the next yes/no questions, in order.
    pub fn confirmations(mut self, answers: impl IntoIterator<Item = bool>) -> ScriptedInput {
        self.confirmations.extend(answers);
        self
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty() && self.confirmations.is_empty()
    }
}

impl CriteriaInput for ScriptedInput {
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| out_of_answers(question))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.confirmations
            .pop_front()
            .ok_or_else(|| out_of_answers(question))
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}

fn out_of_answers(question: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("no scripted answer for {question:?}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lengths_are_rejected_until_valid() {
        let mut input = ScriptedInput::new().answer("abc").answer("4").answer("8");
        let length = collect_length(&mut input, LengthRange::default()).unwrap();
        assert_eq!(length, 8);
        assert_eq!(input.alerts().len(), 2);
        assert!(input.alerts().iter().all(|a| a == INVALID_LENGTH_ALERT));
        assert!(input.is_exhausted());
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let range = LengthRange::default();
        let mut input = ScriptedInput::new().answer("129").answer("128");
        assert_eq!(collect_length(&mut input, range).unwrap(), 128);
        assert_eq!(input.alerts().len(), 1);

        let mut input = ScriptedInput::new().answer("7").answer(" 8\n");
        assert_eq!(collect_length(&mut input, range).unwrap(), 8);
    }

    #[test]
    fn length_reads_the_leading_integer() {
        for answer in ["12abc", "12.5", "12 chars", "  +12", "012"] {
            let mut input = ScriptedInput::new().answer(answer);
            assert_eq!(
                collect_length(&mut input, LengthRange::default()).unwrap(),
                12,
                "{answer:?}"
            );
            assert!(input.alerts().is_empty(), "{answer:?}");
        }
    }

    #[test]
    fn length_without_leading_digits_is_rejected() {
        let mut input = ScriptedInput::new()
            .answer("abc")
            .answer("")
            .answer("-12")
            .answer("x12")
            .answer("- 12")
            .answer("99999999999999999999999")
            .answer("12");
        assert_eq!(
            collect_length(&mut input, LengthRange::default()).unwrap(),
            12
        );
        assert_eq!(input.alerts().len(), 6);
    }

    #[test]
    fn parse_leading_integer_cases() {
        assert_eq!(parse_leading_integer("8"), Some(8));
        assert_eq!(parse_leading_integer(" 8\n"), Some(8));
        assert_eq!(parse_leading_integer("-0"), Some(0));
        assert_eq!(parse_leading_integer("-3"), None);
        assert_eq!(parse_leading_integer("+"), None);
        assert_eq!(parse_leading_integer(".5"), None);
        assert_eq!(parse_leading_integer("99999999999999999999999"), Some(usize::MAX));
    }

    #[test]
    fn running_out_of_answers_is_a_prompt_failure() {
        let mut input = ScriptedInput::new().answer("nope");
        let err = collect_length(&mut input, LengthRange::default()).unwrap_err();
        assert!(err.is_prompt_failure());
    }

    #[test]
    fn inclusions_follow_answers_in_order() {
        let mut criteria = Criteria::new(10);
        let mut input = ScriptedInput::new().confirmations([true, false, false, true]);
        collect_inclusions(&mut input, criteria.classes_mut()).unwrap();
        let included: Vec<_> = criteria.classes().iter().map(|c| c.included()).collect();
        assert_eq!(included, vec![true, false, false, true]);
    }

    #[test]
    fn collect_criteria_asks_length_then_classes() {
        let mut input = ScriptedInput::new()
            .answer("16")
            .confirmations([false, true, true, false]);
        let criteria = collect_criteria(&mut input, LengthRange::default()).unwrap();
        assert_eq!(criteria.length, 16);
        let names: Vec<_> = criteria.included_classes().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Uppercase letters", "Numbers"]);
        assert!(input.is_exhausted());
    }

    struct Recording(Vec<String>);

    impl CriteriaInput for Recording {
        fn prompt(&mut self, question: &str) -> io::Result<String> {
            self.0.push(question.to_owned());
            Ok("20".to_owned())
        }

        fn confirm(&mut self, question: &str) -> io::Result<bool> {
            self.0.push(question.to_owned());
            Ok(true)
        }

        fn alert(&mut self, _message: &str) {}
    }

    #[test]
    fn questions_name_each_class() {
        let mut input = Recording(Vec::new());
        collect_criteria(&mut input, LengthRange::new(10, 30).unwrap()).unwrap();
        assert_eq!(
            input.0,
            vec![
                "How many characters do you want the password to be? Choose between 10 and 30 characters.",
                "Would you like to include lowercase letters?",
                "Would you like to include uppercase letters?",
                "Would you like to include numbers?",
                "Would you like to include special characters?",
            ]
        );
    }
}
