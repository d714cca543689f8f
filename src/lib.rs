//! Random strings from configurable character sets.
//!
//! This library draws fixed-length strings one UTF-16 code unit at a time
//! from a code-unit range, a letter/digit class filter or a caller supplied
//! pool. Draws that land on a bare surrogate half are repaired in place so
//! output is always well-formed. The generation primitive
//! [`RandomString::generate`] accepts any [`rand::Rng`]; the module-level
//! helpers share a lazily seeded process-wide source.
//!
//! The shared source is not cryptographically secure. Callers that need
//! unpredictable output must pass their own secure generator to
//! [`RandomString::generate`].

#![deny(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub use config::Charset;
pub use generator::RandomString;

pub mod config;
pub mod generator;
mod source;

/// Errors related to string generation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Character pool is empty while at least one character was requested
    #[error("character pool is empty")]
    EmptyPool,
    /// Character range holds no code units
    #[error("character range {start}..{end} is empty")]
    EmptyRange {
        /// Inclusive lower bound of the range
        start: u32,
        /// Exclusive upper bound of the range
        end: u32,
    },
    /// Character range indexes past the end of the pool
    #[error("character range ends at {end} but the pool holds {len} code units")]
    PoolOutOfBounds {
        /// Exclusive upper bound of the range
        end: u32,
        /// Number of code units in the pool
        len: usize,
    },
    /// Character range extends past the end of the code-unit space
    #[error("character range ends at {end}, past the end of the code-unit space")]
    RangeOutOfBounds {
        /// Exclusive upper bound of the range
        end: u32,
    },
}

/// Create a random string of `count` code units drawn from the whole
/// code-unit space, using the process-wide source.
#[must_use]
pub fn random(count: usize) -> String {
    source::with_default(|rng| RandomString::any().generate(count, rng))
        .expect("full-range draw is valid by construction")
}

/// Create a random string of `count` code units, keeping letters and/or
/// digits as requested. With both flags false every drawn unit is kept.
#[must_use]
pub fn random_filtered(count: usize, letters: bool, numbers: bool) -> String {
    source::with_default(|rng| RandomString::new(0, 0, letters, numbers).generate(count, rng))
        .expect("default ranges are valid by construction")
}

/// Create a random string of `count` alphabetic characters.
#[must_use]
pub fn random_alphabetic(count: usize) -> String {
    source::with_default(|rng| RandomString::alphabetic().generate(count, rng))
        .expect("default alphabetic range is valid by construction")
}

/// Create a random string of `count` alphanumeric characters.
#[must_use]
pub fn random_alphanumeric(count: usize) -> String {
    source::with_default(|rng| RandomString::alphanumeric().generate(count, rng))
        .expect("default alphanumeric range is valid by construction")
}

/// Create a random string of `count` decimal digits.
#[must_use]
pub fn random_numeric(count: usize) -> String {
    source::with_default(|rng| RandomString::numeric().generate(count, rng))
        .expect("default numeric range is valid by construction")
}

/// Create a random string of `count` printable ASCII characters, code
/// points 32 through 126 inclusive.
#[must_use]
pub fn random_ascii(count: usize) -> String {
    source::with_default(|rng| RandomString::ascii().generate(count, rng))
        .expect("printable ASCII range is valid by construction")
}

/// Create a random string of `count` characters chosen from `chars`.
///
/// # Errors
///
/// Returns [`Error::EmptyPool`] if `chars` is empty while `count` is
/// non-zero.
pub fn random_from(count: usize, chars: &str) -> Result<String, Error> {
    source::with_default(|rng| RandomString::from_chars(chars).generate(count, rng))
}

/// Create a random string of `count` code units drawn from the explicit
/// range `[start, end)`, filtered by the letter/digit flags.
///
/// # Errors
///
/// Returns an error if the range is empty or extends past the code-unit
/// space.
pub fn random_range(
    count: usize,
    start: u32,
    end: u32,
    letters: bool,
    numbers: bool,
) -> Result<String, Error> {
    source::with_default(|rng| RandomString::new(start, end, letters, numbers).generate(count, rng))
}

#[cfg(test)]
mod test {
    #[test]
    fn empty_request_yields_empty_string() {
        assert_eq!(crate::random(0), "");
    }

    #[test]
    fn requested_length_is_honored() {
        let s = crate::random(5);
        assert_eq!(s.encode_utf16().count(), 5);
    }

    #[test]
    fn numeric_strings_are_digits() {
        let s = crate::random_numeric(10);
        assert_eq!(s.len(), 10);
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn ascii_strings_are_printable() {
        let s = crate::random_ascii(1);
        let c = s.chars().next().expect("one character requested");
        assert!(('\u{20}'..='\u{7e}').contains(&c));
    }

    #[test]
    fn filtered_draws_combine_classes() {
        let s = crate::random_filtered(64, true, true);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn explicit_range_draws() {
        let s = crate::random_range(12, u32::from(b'a'), u32::from(b'f') + 1, false, false)
            .expect("range is valid");
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| ('a'..='f').contains(&c)));
    }

    #[test]
    fn pool_draws() {
        let s = crate::random_from(9, "0123456789abcdef").expect("pool is not empty");
        assert_eq!(s.len(), 9);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(crate::random_from(9, "").is_err());
    }
}
