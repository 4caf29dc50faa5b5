use crate::shared::region::Region;

/// Returns the region active at `time`.
///
/// The slice is read as a partition of the timeline into half-open
/// intervals `[start, next_start)`, one per region in slice order; the last
/// region's interval is open-ended. A following region without a start also
/// ends the interval at infinity.
///
/// **Precondition:** `regions` is sorted ascending by
/// [`effective_start`](Region::effective_start) (see [`sort_by_start`]).
/// Unsorted input still terminates but the result is unspecified.
///
/// When the search finds no containing interval, the last region is
/// returned. This includes times before the first region's start: starts
/// `[10, 20, 30]` at `time = 5` yield the region starting at 30.
pub fn locate(regions: &[Region], time: f64) -> Option<&Region> {
    locate_index(regions, time).map(|i| &regions[i])
}

/// Index form of [`locate`].
pub fn locate_index(regions: &[Region], time: f64) -> Option<usize> {
    if regions.is_empty() {
        return None;
    }

    let mut left: isize = 0;
    let mut right: isize = regions.len() as isize - 1;

    while left <= right {
        let mid = ((left + right) / 2) as usize;
        let mid_start = regions[mid].effective_start();
        let next_start = regions
            .get(mid + 1)
            .and_then(|next| next.start)
            .unwrap_or(f64::INFINITY);

        if time >= mid_start && time < next_start {
            return Some(mid);
        } else if time < mid_start {
            right = mid as isize - 1;
        } else {
            left = mid as isize + 1;
        }
    }

    Some(regions.len() - 1)
}

/// Stable ascending sort by effective start, the ordering [`locate`] expects.
pub fn sort_by_start(regions: &mut [Region]) {
    regions.sort_by(|a, b| a.effective_start().total_cmp(&b.effective_start()));
}
