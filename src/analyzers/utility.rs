/// Computes the arithmetic mean of a sequence of grades. Returns 0.0 for empty input.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), v| (sum + u64::from(v), count + 1));

    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}
