/// Capacity at which appends stop doubling and switch to growing by a
/// quarter. Internal tuning, not part of the observable contract.
const DOUBLING_LIMIT: usize = 1024;

/// Computes the capacity for a reallocating append.
///
/// `cap` is the current physical capacity, `required` the minimum the append
/// needs (current length plus elements being added). The result is always at
/// least `required`.
///
/// From zero the policy allocates exactly `required`. Otherwise it doubles
/// while buffers are small and grows by ×1.25 (rounded up) once they are
/// large, keeping appends amortized O(1) without over-allocating big
/// buffers. The exact break-even point may change between releases; only
/// `result >= required` is guaranteed.
pub fn grow_amortized(cap: usize, required: usize) -> usize {
    if cap == 0 {
        return required;
    }
    let doubled = cap.saturating_mul(2);
    let grown = if doubled < DOUBLING_LIMIT {
        doubled
    } else {
        cap.saturating_add(cap.div_ceil(4))
    };
    grown.max(required)
}
