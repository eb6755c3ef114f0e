//! Rolling temperature history.
//!
//! Fixed-capacity ring buffer over the most recent temperature samples.
//! The status resolver works from the mean of this window rather than the
//! instantaneous reading, so compressor cycling and brief door-open
//! warm-ups do not flicker the reported status.

/// Samples the window holds. At one sample every 2 s this covers roughly
/// the last minute of cabinet temperature.
pub const HISTORY_CAPACITY: usize = 32;

/// Circular buffer of recent temperature samples (°C).
#[derive(Debug, Clone)]
pub struct TempHistory {
    ring: [f32; HISTORY_CAPACITY],
    head: usize,
    count: usize,
}

impl Default for TempHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TempHistory {
    pub fn new() -> Self {
        Self {
            ring: [0.0; HISTORY_CAPACITY],
            head: 0,
            count: 0,
        }
    }

    /// Append a sample, evicting the oldest once the window is full.
    pub fn push(&mut self, celsius: f32) {
        self.ring[self.head] = celsius;
        self.head = (self.head + 1) % HISTORY_CAPACITY;
        if self.count < HISTORY_CAPACITY {
            self.count += 1;
        }
    }

    /// Arithmetic mean of the samples currently held, or `0.0` when empty.
    /// During warm-up only the samples actually taken contribute — a
    /// part-full window is never padded with zeros.
    pub fn average(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let sum: f32 = self.ring[..self.count].iter().sum();
        sum / self.count as f32
    }

    /// Samples currently held (`0..=HISTORY_CAPACITY`).
    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_averages_zero() {
        let h = TempHistory::new();
        assert_eq!(h.count(), 0);
        assert!((h.average() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn single_sample_is_its_own_average() {
        let mut h = TempHistory::new();
        h.push(4.5);
        assert_eq!(h.count(), 1);
        // One entry, sum of one term: bit-exact.
        assert_eq!(h.average(), 4.5);
    }

    #[test]
    fn partial_window_averages_only_held_samples() {
        let mut h = TempHistory::new();
        h.push(1.0);
        h.push(2.0);
        h.push(3.0);
        assert_eq!(h.count(), 3);
        assert!((h.average() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn full_window_evicts_oldest() {
        let mut h = TempHistory::new();
        for _ in 0..HISTORY_CAPACITY {
            h.push(0.0);
        }
        // One hot sample displaces one zero: mean = 64 / 32.
        h.push(64.0);
        assert_eq!(h.count(), HISTORY_CAPACITY);
        assert!((h.average() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn count_saturates_at_capacity() {
        let mut h = TempHistory::new();
        for i in 0..(HISTORY_CAPACITY * 2) {
            h.push(i as f32);
        }
        assert_eq!(h.count(), HISTORY_CAPACITY);
    }

    #[test]
    fn wrap_around_keeps_trailing_mean() {
        let mut h = TempHistory::new();
        // Push 40 ascending values; the window keeps 8..=39.
        for i in 0..40 {
            h.push(i as f32);
        }
        let expected: f32 = (8..40).map(|i| i as f32).sum::<f32>() / 32.0;
        assert!((h.average() - expected).abs() < 1e-3);
    }
}
