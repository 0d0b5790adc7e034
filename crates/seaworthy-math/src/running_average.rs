//! Fixed-window running average.

/// Running average over the last `N` pushed values.
///
/// Starts filled with the initial value, so the first few averages are
/// biased toward it rather than jumping to the first sample.
#[derive(Debug, Clone)]
pub struct RunningAverage<const N: usize> {
    samples: [f32; N],
    next: usize,
    sum: f32,
}

impl<const N: usize> RunningAverage<N> {
    /// Creates an average whose window is filled with `initial`.
    pub fn new(initial: f32) -> Self {
        assert!(N > 0, "RunningAverage window must be non-empty");
        Self {
            samples: [initial; N],
            next: 0,
            sum: initial * N as f32,
        }
    }

    /// Pushes a new value, evicting the oldest, and returns the new average.
    pub fn update(&mut self, value: f32) -> f32 {
        self.sum -= self.samples[self.next];
        self.sum += value;
        self.samples[self.next] = value;
        self.next = (self.next + 1) % N;
        self.average()
    }

    /// Current average.
    pub fn average(&self) -> f32 {
        self.sum / N as f32
    }

    /// Refills the whole window with `value`.
    pub fn reset(&mut self, value: f32) {
        self.samples = [value; N];
        self.next = 0;
        self.sum = value * N as f32;
    }
}
