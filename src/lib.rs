#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use thiserror::Error;

/// Window size used by [`MedianFilter::default`]
pub const DEFAULT_WINDOW_SIZE: usize = 13;

/// Errors that can occur while configuring a [`MedianFilter`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// The window must hold at least one sample
    #[error("median filter window size must be at least 1")]
    ZeroWindow,
}

/// Running median over the most recent `W` samples of a stream
///
/// The [`Self::new`] constructor creates an empty filter for a fixed window size.
/// Each call to [`Self::ingest`] replaces the oldest sample with a new one and returns the median of the window.
///
/// Internally the samples live in a circular buffer, and a second array holds the buffer slots
/// sorted by the value stored in them.
/// Each new sample only disturbs one position of that order, so it is repaired with a single
/// left-to-right pass instead of a full sort: each update is O(W) and does not allocate.
///
/// For an even number of samples the **upper** median is returned (rank `len / 2` in ascending order),
/// so the result is always one of the ingested samples.
///
/// Samples must be totally ordered in practice: NaN and other unordered values are not supported.
#[derive(Debug, Clone)]
pub struct MedianFilter<T> {
    /// Number of samples the window holds once warmed up
    window_size: usize,

    /// Circular sample buffer
    ///
    /// Capacity is reserved for the whole window at construction.
    /// It grows by one slot per sample during warm-up, then slots are overwritten in place.
    samples: Vec<T>,

    /// Buffer slots, ordered by the value stored in each slot
    ///
    /// Only the first [`Self::len`] entries are meaningful.
    sorted: Box<[usize]>,

    /// Slot the next sample is written to
    cursor: usize,

    /// Number of valid samples, capped at [`Self::window_size`]
    len: usize,
}

impl<T: Copy + PartialOrd> Default for MedianFilter<T> {
    /// Initializes a filter with a window of [`DEFAULT_WINDOW_SIZE`] samples
    fn default() -> Self {
        Self::with_window(DEFAULT_WINDOW_SIZE)
    }
}

impl<T: Copy + PartialOrd> MedianFilter<T> {
    /// Constructs a new [`Self`] with an empty window of `window_size` samples
    ///
    /// Returns [`FilterError::ZeroWindow`] if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, FilterError> {
        if window_size == 0 {
            return Err(FilterError::ZeroWindow);
        }

        Ok(Self::with_window(window_size))
    }

    /// `window_size` must be non-zero
    fn with_window(window_size: usize) -> Self {
        debug_assert!(window_size > 0);

        #[cfg(feature = "log")]
        log::debug!("Creating median filter with a window of {} samples", window_size);

        Self {
            window_size,
            samples: Vec::with_capacity(window_size),
            sorted: vec![0; window_size].into_boxed_slice(),
            cursor: 0,
            len: 0,
        }
    }

    /// Number of samples the window holds once it is full
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of samples currently in the window
    ///
    /// This grows by one per ingested sample until it reaches [`Self::window_size`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no sample has been ingested yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the warm-up is over, i.e. the window holds [`Self::window_size`] samples
    pub fn is_full(&self) -> bool {
        self.len == self.window_size
    }

    /// Median of the current window, without ingesting anything
    ///
    /// Returns [`None`] if no sample has been ingested yet.
    pub fn median(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.samples[self.sorted[self.len / 2]])
        }
    }

    /// Samples currently in the window, in ascending order
    pub fn sorted(&self) -> impl Iterator<Item = T> + '_ {
        self.sorted[..self.len]
            .iter()
            .map(move |&slot| self.samples[slot])
    }

    /// Pushes a new sample into the window, evicting the oldest one if the window is full,
    /// and returns the median of the updated window
    pub fn ingest(&mut self, sample: T) -> T {
        debug_assert!(
            sample.partial_cmp(&sample).is_some(),
            "unordered sample fed to median filter"
        );

        let slot = self.cursor;
        if self.samples.len() < self.window_size {
            self.samples.push(sample);
        } else {
            self.samples[slot] = sample;
        }

        if self.len < self.window_size {
            // Fresh slot: give it an entry of its own, the pass below moves it into place
            self.sorted[self.len] = slot;
            self.len += 1;
        }

        // Every entry other than `slot` is still in order, so carry one slot rightwards
        // through the array, dropping the stale entry for `slot` on the way.
        // Whenever the carried value is smaller than the one read, it settles there
        // and the larger one is carried on instead.
        // `write` never overtakes `read`, so the array is rewritten in place.
        let mut carried = slot;
        let mut write = 0;
        for read in 0..self.len {
            let current = self.sorted[read];
            if current == slot {
                continue;
            }

            if self.samples[carried] < self.samples[current] {
                self.sorted[write] = carried;
                carried = current;
            } else {
                self.sorted[write] = current;
            }
            write += 1;
        }
        self.sorted[write] = carried;

        #[cfg(feature = "log")]
        log::trace!(
            "Sample written to slot {} ({}/{} valid), sorted slots: {:?}",
            slot,
            self.len,
            self.window_size,
            &self.sorted[..self.len]
        );

        self.cursor += 1;
        if self.cursor == self.window_size {
            self.cursor = 0;
        }

        self.samples[self.sorted[self.len / 2]]
    }
}
