use syzygy_core::Timing;

/// Fixed-step simulated clock. Tracks the index of the next sample so
/// times never accumulate rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    timing: Timing,
    next_index: u64,
    exhausted: bool,
}

impl SimClock {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            next_index: 0,
            exhausted: false,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Simulated time of the next sample.
    pub fn time(&self) -> f64 {
        self.timing.time_at(self.next_index)
    }

    /// Normalised position of the next sample in [0, 1].
    pub fn progress(&self) -> f64 {
        (self.time() / self.timing.duration).clamp(0.0, 1.0)
    }

    /// Move past the sample just taken. Once the end-of-event sample has
    /// been taken the clock is exhausted and stays put.
    pub fn advance(&mut self) {
        if self.time() >= self.timing.duration {
            self.exhausted = true;
        } else {
            self.next_index += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn rewind(&mut self) {
        self.next_index = 0;
        self.exhausted = false;
    }
}
