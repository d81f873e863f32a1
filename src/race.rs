use crate::error::Error;
use serde::Serialize;

/// Progress of one mode at one minute checkpoint. The renderer consumes
/// all frames sharing a `time_minute` as a single animation frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationFrame {
    #[serde(rename = "Mode")]
    pub mode: String,
    #[serde(rename = "Progress (%)")]
    pub progress_percent: f64,
    #[serde(rename = "Time (min)")]
    pub time_minute: u32,
}

/// Restartable iterator over the race timeline: for every minute from 0 to
/// the slowest mode's (rounded-up) total time, one frame per mode in the
/// caller-given order.
#[derive(Debug, Clone)]
pub struct RaceTimeline {
    modes: Vec<(String, f64)>,
    max_time: u32,
    minute: u32,
    mode_idx: usize,
}

impl RaceTimeline {
    /// Minutes covered by the timeline, including minute zero.
    pub fn num_checkpoints(&self) -> u32 {
        self.max_time + 1
    }
}

impl Iterator for RaceTimeline {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<AnimationFrame> {
        if self.modes.is_empty() || self.minute > self.max_time {
            return None;
        }
        let (mode, total_time) = &self.modes[self.mode_idx];

        // Linear progress, held at 100 once the destination is reached.
        let progress = (self.minute as f64 / total_time * 100.0).min(100.0);
        let frame = AnimationFrame {
            mode: mode.clone(),
            progress_percent: progress,
            time_minute: self.minute,
        };

        self.mode_idx += 1;
        if self.mode_idx == self.modes.len() {
            self.mode_idx = 0;
            self.minute += 1;
        }
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_minutes = (self.max_time + 1 - self.minute) as usize;
        let remaining = remaining_minutes * self.modes.len() - self.mode_idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RaceTimeline {}

/// Builds the race timeline for one route. `modes` pairs a display name
/// with a total travel time in minutes; frame order within each minute
/// follows the slice order.
///
/// A non-positive (or non-finite) total time fails the whole request
/// rather than being clamped, so bad source data stays visible.
pub fn race_frames(modes: &[(String, f64)]) -> Result<RaceTimeline, Error> {
    let mut max_minutes = 0.0f64;
    for (mode, total_time) in modes {
        if *total_time <= 0.0 || !total_time.is_finite() {
            return Err(Error::NonPositiveTime {
                mode: mode.clone(),
                minutes: *total_time,
            });
        }
        max_minutes = max_minutes.max(*total_time);
    }

    Ok(RaceTimeline {
        modes: modes.to_vec(),
        max_time: max_minutes.ceil() as u32,
        minute: 0,
        mode_idx: 0,
    })
}
