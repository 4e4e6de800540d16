//! One run of the generator: collect criteria, then generate until a candidate is valid.

use rand::{CryptoRng, Rng};

use crate::collector::{self, CriteriaInput};
use crate::{password_generation, validation, Criteria, LengthRange, Secret};

pub(crate) static NO_CLASSES_ALERT: &str =
    "You must include at least one type of character to generate a password!";

/// How a run ended.
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome {
    Generated {
        password: Secret,
        /// How many candidates were generated, including the accepted one.
        attempts: u64,
    },
    /// No password could be generated: no class was included, or the length was too short.
    Aborted,
}

impl Outcome {
    pub fn password(&self) -> Option<&Secret> {
        match self {
            Outcome::Generated { password, .. } => Some(password),
            Outcome::Aborted => None,
        }
    }

    /// The text for the output sink: the password, or an empty string if the run aborted.
    pub fn into_output(self) -> String {
        match self {
            Outcome::Generated { password, .. } => password.0,
            Outcome::Aborted => String::new(),
        }
    }
}

/// Collect criteria from `input` and generate a password satisfying them.
pub fn run<I, R>(input: &mut I, rng: &mut R, range: LengthRange) -> Result<Outcome, crate::Error>
where
    I: CriteriaInput + ?Sized,
    R: Rng + CryptoRng + ?Sized,
{
    let criteria = collector::collect_criteria(input, range)?;
    if !criteria.has_any_included() {
        input.alert(NO_CLASSES_ALERT);
        tracing::info!("Aborted!");
        return Ok(Outcome::Aborted);
    }
    if !criteria.is_satisfiable() {
        input.alert(&format!(
            "A password of {} characters cannot include all {} types of character you chose!",
            criteria.length,
            criteria.included_classes().count()
        ));
        tracing::info!("Aborted!");
        return Ok(Outcome::Aborted);
    }
    Ok(generate_valid(rng, &criteria))
}

/// Generate candidates until one passes validation.
///
/// There is no retry limit. Every class holds at least one character, so for satisfiable criteria
/// this terminates with probability 1. Unsatisfiable criteria return [`Outcome::Aborted`].
pub fn generate_valid<R>(rng: &mut R, criteria: &Criteria) -> Outcome
where
    R: Rng + CryptoRng + ?Sized,
{
    if !criteria.is_satisfiable() {
        return Outcome::Aborted;
    }
    let mut attempts = 0;
    loop {
        attempts += 1;
        tracing::debug!(attempt = attempts, "Generating password.");
        let password = password_generation::generate(rng, criteria);
        if validation::is_valid(&password, criteria) {
            tracing::info!(attempts, "Done!");
            return Outcome::Generated { password, attempts };
        }
    }
}
