use lfl_math::TruthError;

/// Common length of operands combined by cyclic recycling.
///
/// Every operand must be non-empty; with no operands at all the result is 0.
pub(crate) fn recycled_len(lens: &[usize]) -> Result<usize, TruthError> {
    if lens.iter().any(|&n| n == 0) {
        tracing::debug!(?lens, "zero-length operand");
        return Err(TruthError::EmptyOperand);
    }
    let n = lens.iter().copied().max().unwrap_or(0);
    tracing::trace!(?lens, n, "recycling operands");
    Ok(n)
}

/// Element `i` of `seq` with the index wrapped to its length
#[inline]
pub(crate) fn recycled<T: Copy>(seq: &[T], i: usize) -> T {
    seq[i % seq.len()]
}
