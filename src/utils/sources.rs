/// Copy of `sources` with the element at `position` removed.
///
/// Positions past the end leave the copy unchanged.
pub fn without_position(sources: &[u64], position: usize) -> Vec<u64> {
    sources
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != position)
        .map(|(_, &value)| value)
        .collect()
}
