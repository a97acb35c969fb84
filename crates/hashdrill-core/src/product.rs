#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("product overflows i64 while processing index {index}")]
    Overflow { index: usize },
}

/// For each position, the product of every other element.
///
/// Uses a prefix pass followed by a suffix pass, no division, so zeros are
/// handled like any other value.
///
/// # Errors
/// [`ProductError::Overflow`] when an intermediate product leaves the `i64`
/// range.
pub fn product_except_self(values: &[i64]) -> Result<Vec<i64>, ProductError> {
    log::debug!("product-except-self over {} values", values.len());
    let n = values.len();
    let mut products = vec![1i64; n];

    // products[i] = values[0] * .. * values[i - 1]
    for i in 1..n {
        products[i] = products[i - 1]
            .checked_mul(values[i - 1])
            .ok_or(ProductError::Overflow { index: i })?;
    }

    // fold in values[i + 1] * .. * values[n - 1]
    let mut suffix = 1i64;
    for i in (0..n).rev() {
        products[i] = products[i]
            .checked_mul(suffix)
            .ok_or(ProductError::Overflow { index: i })?;
        if i > 0 {
            suffix = suffix
                .checked_mul(values[i])
                .ok_or(ProductError::Overflow { index: i })?;
        }
    }

    Ok(products)
}
