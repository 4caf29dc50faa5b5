use thiserror::Error;

use crate::regions::domain::crop_rect::CropRect;
use crate::shared::region::Region;

#[derive(Error, Debug, PartialEq)]
pub enum SegmentPlanError {
    #[error("no regions with a start time")]
    NoTimedRegions,
    #[error("region {region_id} refers to page {page_index}, but only {page_count} pages exist")]
    PageOutOfRange {
        region_id: String,
        page_index: u32,
        page_count: usize,
    },
}

/// One stretch of the timeline during which a single region is shown.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackSegment {
    pub region_id: String,
    pub page_index: u32,
    pub start: f64,
    pub end: f64,
    pub crop: CropRect,
}

impl PlaybackSegment {
    /// Never negative, even when the track ends before `start`.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// Splits a `duration`-second timeline into consecutive segments, one per
/// region that has a start time.
///
/// Regions without a start are dropped, the rest are stable-sorted by start.
/// Each segment ends where the next begins; the last one ends at `duration`.
pub fn plan_segments(
    regions: &[Region],
    page_count: usize,
    duration: f64,
) -> Result<Vec<PlaybackSegment>, SegmentPlanError> {
    let mut timed: Vec<(f64, &Region)> = regions
        .iter()
        .filter_map(|r| r.start.map(|s| (s, r)))
        .collect();
    timed.sort_by(|a, b| a.0.total_cmp(&b.0));

    if timed.is_empty() {
        return Err(SegmentPlanError::NoTimedRegions);
    }

    if let Some((_, bad)) = timed
        .iter()
        .find(|(_, r)| r.page_index as usize >= page_count)
    {
        return Err(SegmentPlanError::PageOutOfRange {
            region_id: bad.id.clone(),
            page_index: bad.page_index,
            page_count,
        });
    }

    let segments = timed
        .iter()
        .enumerate()
        .map(|(i, (start, region))| {
            let end = timed.get(i + 1).map_or(duration, |(next, _)| *next);
            PlaybackSegment {
                region_id: region.id.clone(),
                page_index: region.page_index,
                start: *start,
                end,
                crop: CropRect::from_region(region),
            }
        })
        .collect();

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn region(id: &str, page_index: u32, start: Option<f64>) -> Region {
        Region {
            id: id.into(),
            x: 0.0,
            y: 0.25,
            width: 1.0,
            height: 0.2,
            label: String::new(),
            color: String::new(),
            page_index,
            start,
        }
    }

    #[test]
    fn test_segments_cover_timeline_in_start_order() {
        let regions = vec![
            region("b", 1, Some(4.0)),
            region("a", 0, Some(0.0)),
            region("c", 0, Some(9.5)),
        ];
        let segments = plan_segments(&regions, 2, 15.0).unwrap();

        let ids: Vec<_> = segments.iter().map(|s| s.region_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_relative_eq!(segments[0].end, 4.0);
        assert_relative_eq!(segments[1].duration(), 5.5);
        assert_relative_eq!(segments[2].end, 15.0);
        assert_relative_eq!(segments[2].duration(), 5.5);
    }

    #[test]
    fn test_untimed_regions_are_skipped() {
        let regions = vec![region("a", 0, None), region("b", 0, Some(2.0))];
        let segments = plan_segments(&regions, 1, 10.0).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].region_id, "b");
        assert_relative_eq!(segments[0].start, 2.0);
    }

    #[test]
    fn test_no_timed_regions_is_error() {
        let regions = vec![region("a", 0, None)];
        assert_eq!(
            plan_segments(&regions, 1, 10.0),
            Err(SegmentPlanError::NoTimedRegions)
        );
        assert_eq!(
            plan_segments(&[], 1, 10.0),
            Err(SegmentPlanError::NoTimedRegions)
        );
    }

    #[test]
    fn test_page_out_of_range_is_error() {
        let regions = vec![region("a", 0, Some(0.0)), region("z", 3, Some(1.0))];
        let err = plan_segments(&regions, 3, 10.0).unwrap_err();
        assert_eq!(
            err,
            SegmentPlanError::PageOutOfRange {
                region_id: "z".into(),
                page_index: 3,
                page_count: 3,
            }
        );
        assert!(err.to_string().contains("region z"));
    }

    #[test]
    fn test_short_track_yields_zero_duration() {
        let regions = vec![region("a", 0, Some(20.0))];
        let segments = plan_segments(&regions, 1, 10.0).unwrap();
        assert_relative_eq!(segments[0].duration(), 0.0);
    }

    #[test]
    fn test_segment_carries_crop() {
        let mut r = region("a", 0, Some(0.0));
        r.x = 0.9;
        r.width = 0.5;
        let segments = plan_segments(&[r], 1, 1.0).unwrap();
        assert_relative_eq!(segments[0].crop.x, 0.5);
        assert_relative_eq!(segments[0].crop.width, 0.5);
    }
}
