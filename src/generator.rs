//! Character selection and surrogate repair.

use rand::Rng;

use crate::Error;

/// One past the largest UTF-16 code unit.
const CODE_UNIT_SPACE: u32 = 0x1_0000;

// Low surrogate halves. A bare low half is repaired by synthesizing a high
// half into the preceding slot.
const LOW_FIRST: u16 = 0xDC00;
const LOW_LAST: u16 = 0xDFFF;

// High surrogate halves repaired by synthesizing a low half after them.
const HIGH_FIRST: u16 = 0xD800;
const HIGH_REPAIR_LAST: u16 = 0xDABF;

// High surrogate band with no defined pairing. Draws landing here are
// discarded.
const HIGH_DISCARD_FIRST: u16 = 0xDAC0;
const HIGH_DISCARD_LAST: u16 = 0xDBFF;

/// Span a synthesized companion half is drawn from.
const COMPANION_SPAN: u16 = 128;

/// Specification of a character set to draw random strings from.
///
/// `start` and `end` bound the code units considered, `[start, end)`. When
/// both are zero the range defaults to the printable band space through `z`
/// if a letter or digit filter is requested, or to the whole code-unit
/// space otherwise. With a pool attached the range indexes the pool rather
/// than the code-unit space.
///
/// Filters must be satisfiable over the range: a specification whose range
/// contains no acceptable unit draws forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomString {
    start: u32,
    end: u32,
    letters: bool,
    numbers: bool,
    pool: Option<Vec<u16>>,
}

impl RandomString {
    /// Draw from the explicit code-unit range `[start, end)`, keeping
    /// letters and/or digits as requested.
    #[must_use]
    pub fn new(start: u32, end: u32, letters: bool, numbers: bool) -> Self {
        Self {
            start,
            end,
            letters,
            numbers,
            pool: None,
        }
    }

    /// Draw from the whole code-unit space, unfiltered.
    #[must_use]
    pub fn any() -> Self {
        Self::new(0, 0, false, false)
    }

    /// Draw alphabetic characters.
    #[must_use]
    pub fn alphabetic() -> Self {
        Self::new(0, 0, true, false)
    }

    /// Draw alphabetic and numeric characters.
    #[must_use]
    pub fn alphanumeric() -> Self {
        Self::new(0, 0, true, true)
    }

    /// Draw numeric characters.
    #[must_use]
    pub fn numeric() -> Self {
        Self::new(0, 0, false, true)
    }

    /// Draw printable ASCII, code points 32 through 126 inclusive.
    #[must_use]
    pub fn ascii() -> Self {
        Self::new(32, 127, false, false)
    }

    /// Draw uniformly from the characters of `chars`.
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        Self::from_units(chars.encode_utf16().collect())
    }

    /// Draw uniformly from an explicit sequence of code units.
    #[must_use]
    pub fn from_units(pool: Vec<u16>) -> Self {
        let end = u32::try_from(pool.len()).expect("pool length must fit in u32");
        Self {
            start: 0,
            end,
            letters: false,
            numbers: false,
            pool: Some(pool),
        }
    }

    /// Attach a pool to this specification. The range then selects indices
    /// into the pool instead of code units.
    #[must_use]
    pub fn pool(mut self, pool: Vec<u16>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Generate a string of exactly `count` code units from `rng`.
    ///
    /// The output either holds exactly `count` UTF-16 code units or the
    /// call fails before producing anything; no truncated or padded string
    /// is ever returned. Surrogate halves drawn from the range or the pool
    /// are paired up in place, so the result is always well-formed.
    ///
    /// # Errors
    ///
    /// Function will error if the pool is empty, if the range is empty
    /// after defaulting, or if the range extends past the pool or the
    /// code-unit space.
    pub fn generate<R>(&self, count: usize, rng: &mut R) -> Result<String, Error>
    where
        R: Rng + ?Sized,
    {
        if count == 0 {
            return Ok(String::new());
        }
        if let Some(pool) = &self.pool {
            if pool.is_empty() {
                return Err(Error::EmptyPool);
            }
        }

        let (start, end) = self.effective_range();
        if end <= start {
            return Err(Error::EmptyRange { start, end });
        }
        match &self.pool {
            Some(pool) => {
                if end as usize > pool.len() {
                    return Err(Error::PoolOutOfBounds {
                        end,
                        len: pool.len(),
                    });
                }
            }
            None => {
                if end > CODE_UNIT_SPACE {
                    return Err(Error::RangeOutOfBounds { end });
                }
            }
        }
        let gap = end - start;

        // Slots fill back to front. `remaining` counts unfilled slots, the
        // current slot is `remaining - 1`. Rejected draws leave `remaining`
        // untouched, repairs consume two slots at once.
        let mut buffer = vec![0_u16; count];
        let mut remaining = count;
        while remaining != 0 {
            let idx = remaining - 1;
            let offset = rng.random_range(0..gap);
            let unit = match &self.pool {
                Some(pool) => pool[(offset + start) as usize],
                // offset + start < end <= CODE_UNIT_SPACE, fits in u16
                None => (offset + start) as u16,
            };
            if !self.accepts(unit) {
                continue;
            }
            match unit {
                LOW_FIRST..=LOW_LAST => {
                    // A low half needs a high half before it; at the front
                    // of the buffer there is no room, so draw again.
                    if idx == 0 {
                        continue;
                    }
                    buffer[idx] = unit;
                    buffer[idx - 1] = HIGH_FIRST + rng.random_range(0..COMPANION_SPAN);
                    remaining -= 2;
                }
                HIGH_FIRST..=HIGH_REPAIR_LAST => {
                    if idx == 0 {
                        continue;
                    }
                    buffer[idx] = LOW_FIRST + rng.random_range(0..COMPANION_SPAN);
                    buffer[idx - 1] = unit;
                    remaining -= 2;
                }
                HIGH_DISCARD_FIRST..=HIGH_DISCARD_LAST => continue,
                _ => {
                    buffer[idx] = unit;
                    remaining -= 1;
                }
            }
        }

        Ok(String::from_utf16(&buffer).expect("surrogates are paired by construction"))
    }

    /// Generate a string of exactly `count` code units from the
    /// process-wide source.
    ///
    /// # Errors
    ///
    /// See [`RandomString::generate`].
    pub fn generate_default(&self, count: usize) -> Result<String, Error> {
        crate::source::with_default(|rng| self.generate(count, rng))
    }

    fn effective_range(&self) -> (u32, u32) {
        if self.start != 0 || self.end != 0 {
            return (self.start, self.end);
        }
        if self.letters || self.numbers {
            (u32::from(b' '), u32::from(b'z') + 1)
        } else {
            (0, CODE_UNIT_SPACE)
        }
    }

    fn accepts(&self, unit: u16) -> bool {
        if !self.letters && !self.numbers {
            return true;
        }
        // Bare surrogate halves are neither letters nor digits.
        match char::from_u32(u32::from(unit)) {
            Some(ch) => {
                (self.letters && ch.is_alphabetic()) || (self.numbers && ch.is_numeric())
            }
            None => false,
        }
    }
}
