//! Buffer-level scans built on the lane primitives.
//!
//! Each scan walks whole lanes with the branchless ops and finishes the
//! 0..=7 trailing bytes with plain scalar code.

use crate::cmp::{equal, greater, in_range};
use crate::lanes::{Lanes, broadcast, bytes_to_lane, lane_to_bytes, unpack_into};
use crate::lookup::matching_lanes;
use crate::math::{abs_diff, average, sub_wrap};
use crate::parse::ByteRange;
use crate::select::select_by_high_bit;

/// Count occurrences of `needle` in `data`.
///
/// ```
/// assert_eq!(swar_lanes::scan::count_byte(b"Hello, World!", b' '), 1);
/// ```
pub fn count_byte(data: &[u8], needle: u8) -> usize {
    let pattern = broadcast(needle);
    let mut lanes = Lanes::new(data);
    let mut count = 0usize;
    for lane in lanes.by_ref() {
        count += equal(lane, pattern).count_ones() as usize;
    }
    count + lanes.remainder().iter().filter(|&&b| b == needle).count()
}

/// Offsets of every byte in `data` that falls inside `range`, ascending.
pub fn positions_in_range(data: &[u8], range: ByteRange) -> Vec<usize> {
    let (lo, hi) = (broadcast(range.lo), broadcast(range.hi));
    let mut lanes = Lanes::new(data);
    let mut positions = Vec::new();
    for (idx, lane) in lanes.by_ref().enumerate() {
        positions.extend(matching_lanes(in_range(lane, lo, hi)).map(|i| idx * 8 + i));
    }
    let consumed = lanes.consumed();
    positions.extend(
        lanes
            .remainder()
            .iter()
            .enumerate()
            .filter(|&(_, &b)| range.contains(b))
            .map(|(i, _)| consumed + i),
    );
    positions
}

/// ASCII-uppercase `data`; non-ASCII-letter bytes pass through.
pub fn to_ascii_uppercase(data: &[u8]) -> Vec<u8> {
    let lower_lo = broadcast(b'a');
    let lower_hi = broadcast(b'z');
    let case_bit = broadcast(b'a' - b'A');

    let mut out = vec![0u8; data.len()];
    let lanes = Lanes::new(data);
    let consumed = lanes.consumed();
    let tail = lanes.remainder();
    let upper: Vec<u64> = lanes
        .map(|lane| {
            let lowercase = in_range(lane, lower_lo, lower_hi);
            select_by_high_bit(sub_wrap(lane, case_bit), lane, lowercase)
        })
        .collect();
    unpack_into(&upper, &mut out);

    for (dst, &b) in out[consumed..].iter_mut().zip(tail) {
        *dst = b.to_ascii_uppercase();
    }
    out
}

/// One detected jump in an [`AnomalyDetector`] channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anomaly {
    pub channel: usize,
    pub value: u8,
    pub average: u8,
}

/// Tracks a running average over eight byte channels packed in one lane
/// and flags channels whose new reading jumps more than `threshold` away.
///
/// When any channel trips, the whole average snaps to the current readings.
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    average: u64,
    threshold: u64,
}

impl AnomalyDetector {
    /// A detector whose running average starts at zero in every channel.
    pub fn new(threshold: u8) -> Self {
        AnomalyDetector {
            average: 0,
            threshold: broadcast(threshold),
        }
    }

    /// Start from a known baseline instead of all zeros.
    pub fn with_baseline(threshold: u8, baseline: [u8; 8]) -> Self {
        AnomalyDetector {
            average: bytes_to_lane(baseline),
            threshold: broadcast(threshold),
        }
    }

    /// Current running average, channel 0 first.
    pub fn average(&self) -> [u8; 8] {
        lane_to_bytes(self.average)
    }

    /// Feed one reading per channel; returns the channels that jumped.
    pub fn observe(&mut self, readings: [u8; 8]) -> Vec<Anomaly> {
        let current = bytes_to_lane(readings);
        let previous = self.average;
        let smoothed = average(current, previous);
        let jumped = greater(abs_diff(current, smoothed), self.threshold);

        if jumped == 0 {
            self.average = smoothed;
            return Vec::new();
        }

        let before = lane_to_bytes(smoothed);
        self.average = current;
        matching_lanes(jumped)
            .map(|channel| Anomaly {
                channel,
                value: readings[channel],
                average: before[channel],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"Allo Zorld! I am NOT yelling, but I am using SWAR!";

    #[test]
    fn test_count_byte() {
        assert_eq!(count_byte(SAMPLE, b' '), 10);
        assert_eq!(count_byte(b"Hello, World!", b' '), 1);
        assert_eq!(count_byte(b"", b' '), 0);
        assert_eq!(count_byte(b"       ", b' '), 7);
        assert_eq!(count_byte(&[0u8; 64], 0), 64);
    }

    #[test]
    fn test_positions_in_range() {
        let caps = ByteRange::new(b'A', b'Z').unwrap();
        assert_eq!(positions_in_range(b"Allo Zorld!", caps), vec![0, 5]);

        let positions = positions_in_range(SAMPLE, caps);
        assert_eq!(positions.iter().sum::<usize>(), 291);
        let scalar: Vec<usize> = SAMPLE
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_ascii_uppercase())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions, scalar);
    }

    #[test]
    fn test_to_ascii_uppercase() {
        assert_eq!(
            to_ascii_uppercase(SAMPLE),
            b"ALLO ZORLD! I AM NOT YELLING, BUT I AM USING SWAR!".to_vec()
        );
        let all: Vec<u8> = (0..=255u8).collect();
        assert_eq!(to_ascii_uppercase(&all), all.to_ascii_uppercase());
        assert!(to_ascii_uppercase(b"").is_empty());
    }

    #[test]
    fn test_anomaly_detector_steady_growth() {
        let mut detector = AnomalyDetector::with_baseline(2, [10; 8]);
        for value in 11..=255u8 {
            let found = detector.observe([value; 8]);
            assert!(found.is_empty(), "false trip at {value}: {found:?}");
        }
    }

    #[test]
    fn test_anomaly_detector_drop() {
        let mut detector = AnomalyDetector::with_baseline(2, [50; 8]);
        let mut readings = [50u8; 8];
        readings[3] = 0;
        let found = detector.observe(readings);
        assert_eq!(
            found,
            vec![Anomaly {
                channel: 3,
                value: 0,
                average: 25
            }]
        );
        assert_eq!(detector.average(), readings);
    }

    /// Byte-at-a-time model of the detector: smooth each channel, trip when
    /// the reading is more than `threshold` from the smoothed value, and snap
    /// every channel to the readings on any trip.
    struct ScalarDetector {
        average: [u8; 8],
        threshold: u8,
    }

    impl ScalarDetector {
        fn observe(&mut self, readings: [u8; 8]) -> Vec<Anomaly> {
            let smoothed: [u8; 8] = std::array::from_fn(|j| {
                ((u16::from(self.average[j]) + u16::from(readings[j])) / 2) as u8
            });
            let found: Vec<Anomaly> = (0..8)
                .filter(|&j| readings[j].abs_diff(smoothed[j]) > self.threshold)
                .map(|j| Anomaly {
                    channel: j,
                    value: readings[j],
                    average: smoothed[j],
                })
                .collect();
            self.average = if found.is_empty() { smoothed } else { readings };
            found
        }
    }

    fn count_resets(steps: usize) -> usize {
        // Channels climb in turn; whichever is hit on every 81st step drops to 0.
        let mut detector = AnomalyDetector::new(2);
        let mut reference = ScalarDetector {
            average: [0; 8],
            threshold: 2,
        };
        let mut current = [0u8; 8];
        let mut trips = 0;
        for i in 0..steps {
            current[i % 8] = current[i % 8].wrapping_add(1);
            if i % 81 == 0 {
                current[i % 8] = 0;
            }
            let found = detector.observe(current);
            assert_eq!(found, reference.observe(current), "step {i}");
            assert_eq!(detector.average(), reference.average, "step {i}");
            if !found.is_empty() {
                trips += 1;
            }
        }
        trips
    }

    #[test]
    fn test_anomaly_detector_counts_resets() {
        // The reset at step 0 lands on an all-zero average and is not a jump.
        assert_eq!(count_resets(810), 9);
        assert_eq!(count_resets(8100), 99);
    }
}
