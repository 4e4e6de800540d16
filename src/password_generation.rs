//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::Criteria;

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
///
/// An empty alphabet produces an empty password.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> crate::Secret
where
    R: Rng + CryptoRng + ?Sized,
{
    let secret = (0..len)
        .filter_map(|_| alphabet.choose(rng))
        .collect::<String>();
    crate::Secret(secret)
}

/// Generate a candidate password for `criteria`.
///
/// Each character is drawn independently from the pooled characters of every included class, so
/// nothing guarantees the candidate contains a character of each class; check it with
/// [`crate::validation::is_valid`].
pub fn generate<R>(rng: &mut R, criteria: &Criteria) -> crate::Secret
where
    R: Rng + CryptoRng + ?Sized,
{
    generate_random_password(rng, &criteria.pool(), criteria.length)
}
