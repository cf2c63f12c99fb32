/// Integer type used for every term of a generated sequence.
pub type Term = u128;

/// Largest count for which every term fits in [`Term`] without saturating.
///
/// A sequence of this length ends with F(186), the largest Fibonacci
/// number representable as a `u128`.
pub const MAX_EXACT_TERMS: usize = 187;

/// Generates the first `n` terms of the Fibonacci sequence.
///
/// Sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, ...
///
/// Non-positive counts produce an empty sequence. The returned vector always
/// has exactly `max(n, 0)` elements. Terms past [`MAX_EXACT_TERMS`] saturate
/// at `u128::MAX`; use [`generate_checked`] to reject those counts instead.
///
/// # Arguments
///
/// * `n` - How many terms to produce
///
/// # Panics
///
/// Allocating `n` terms is the caller's memory concern: counts too large to
/// allocate (such as `i64::MAX`) panic with a capacity overflow or abort on
/// allocation failure.
///
/// # Examples
///
/// ```
/// use fibseq_core::generate;
///
/// assert_eq!(generate(0), Vec::<u128>::new());
/// assert_eq!(generate(1), vec![0]);
/// assert_eq!(generate(5), vec![0, 1, 1, 2, 3]);
/// assert!(generate(-4).is_empty());
/// ```
pub fn generate(n: i64) -> Vec<Term> {
    // saturating addition never fails, so the sequence is always complete
    fill(term_count(n), |a, b| Some(a.saturating_add(b))).unwrap_or_default()
}

/// Generates the first `n` terms, or `None` if any term would overflow.
///
/// Returns `Some` exactly when `n <= MAX_EXACT_TERMS`.
///
/// # Examples
///
/// ```
/// use fibseq_core::{generate_checked, MAX_EXACT_TERMS};
///
/// assert_eq!(generate_checked(3), Some(vec![0, 1, 1]));
/// assert_eq!(generate_checked(MAX_EXACT_TERMS as i64 + 1), None);
/// ```
pub fn generate_checked(n: i64) -> Option<Vec<Term>> {
    let len = term_count(n);
    if len > MAX_EXACT_TERMS {
        return None;
    }
    fill(len, Term::checked_add)
}

/// Builds `len` terms, combining the two previous terms with `add`.
fn fill<F>(len: usize, add: F) -> Option<Vec<Term>>
where
    F: Fn(Term, Term) -> Option<Term>,
{
    let mut sequence: Vec<Term> = Vec::with_capacity(len);
    for i in 0..len {
        let next = match i {
            0 => 0,
            1 => 1,
            _ => add(sequence[i - 1], sequence[i - 2])?,
        };
        sequence.push(next);
    }
    Some(sequence)
}

fn term_count(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}
