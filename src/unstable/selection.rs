//! Selection sort: repeated selection of the minimum from the unsorted
//! suffix.

sort_impl!("selection_unstable");

/// Sorts `v` ascending in place. Each pass scans the suffix past the
/// pass index for the smallest element and swaps it into place, so only
/// `O(n)` swaps happen against `O(n^2)` comparisons. The long-range
/// swaps can reorder equal elements, hence unstable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();
    for pass in 0..len {
        let mut smallest = pass;
        for i in pass + 1..len {
            if v[i] < v[smallest] {
                smallest = i;
            }
        }
        v.swap(pass, smallest);
    }
}
