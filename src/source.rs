//! Process-wide source of randomness.
//!
//! Module-level helpers draw from a single generator shared across the
//! process. Callers needing deterministic or cryptographically secure
//! output pass their own generator to
//! [`RandomString::generate`](crate::RandomString::generate) instead.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use rand::{SeedableRng, rngs::SmallRng};
use tracing::debug;

// Seeded from OS entropy on first use, never torn down. Draws hold the
// lock, so concurrent callers serialize rather than corrupt the generator
// state.
static DEFAULT_SOURCE: Lazy<Mutex<SmallRng>> = Lazy::new(|| {
    debug!("seeding process-wide random source");
    Mutex::new(SmallRng::from_os_rng())
});

pub(crate) fn with_default<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
    let mut rng = DEFAULT_SOURCE
        .lock()
        .expect("process-wide random source lock poisoned");
    f(&mut rng)
}

#[cfg(test)]
mod test {
    use std::thread;

    // Draws through the shared source serialize on the lock.
    #[test]
    fn concurrent_draws() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| crate::random_alphanumeric(32)))
            .collect();
        for handle in handles {
            let s = handle.join().expect("draw thread panicked");
            assert_eq!(s.len(), 32);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
