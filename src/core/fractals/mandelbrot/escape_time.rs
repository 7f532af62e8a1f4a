use crate::core::data::complex::Complex;

/// Squared magnitude past which an orbit counts as escaped. 20, not the usual 4.
pub const DIVERGENCE_THRESHOLD: f64 = 20.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classification {
    Stable,
    Divergent,
}

/// Iterates z ← z² + c from zero and returns the 1-based iteration at which
/// |z|² first exceeds [`DIVERGENCE_THRESHOLD`], or `None` if the orbit stays
/// bounded for all `max_iterations` steps.
#[inline]
#[must_use]
pub fn escape_iteration(c: Complex, max_iterations: u32) -> Option<u32> {
    let mut z = Complex::ZERO;

    for iteration in 1..=max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() > DIVERGENCE_THRESHOLD {
            return Some(iteration);
        }
    }

    None
}

#[inline]
#[must_use]
pub fn classify(c: Complex, max_iterations: u32) -> Classification {
    match escape_iteration(c, max_iterations) {
        Some(_) => Classification::Divergent,
        None => Classification::Stable,
    }
}
