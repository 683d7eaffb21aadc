//! Collection of measurements useful for debugging and "primitive benchmarking"
use std::fmt::Debug;
use std::ops::AddAssign;
use std::time::{Duration, Instant};

use crate::clip::{ClipResult, Clipper};
use crate::error::ClipError;
use crate::geometry::{Segment, Window};

/// Wraps a [`Clipper`] and measures every invocation
pub struct MeasuredClipper<C: Clipper> {
    /// [Clipper] to be measured
    pub clipper: C,

    /// Time spent per invocation
    pub durations: Measurement<Duration>,

    /// Loop iterations per invocation
    pub iterations: Measurement<u32>,
}

impl<C: Clipper> MeasuredClipper<C> {
    /// Wrap a clipper
    pub fn new(clipper: C) -> Self {
        Self {
            clipper,
            durations: Default::default(),
            iterations: Default::default(),
        }
    }

    /// Clip a segment, recording how long it took
    ///
    /// Failed invocations are not recorded.
    pub fn clip(&mut self, segment: Segment, window: &Window) -> Result<ClipResult, ClipError> {
        let now = Instant::now();
        let trace = self.clipper.clip_traced(segment, window)?;
        self.durations.add(now.elapsed());
        self.iterations.add(trace.iterations);
        Ok(trace.result)
    }

    /// Print the measured results
    pub fn print(&self) {
        let Self {
            durations,
            iterations,
            ..
        } = self;
        if durations.number == 0 {
            eprintln!("Nothing has been clipped");
            return;
        }
        eprintln!(
            "{} clips took {:?} at {:?} each",
            durations.number,
            durations.acc,
            durations.avg()
        );
        eprintln!(
            "Clips needed between {} and {} iterations, averaging at {}",
            iterations.min,
            iterations.max,
            iterations.avg()
        );
    }

    /// Unwrap the measured clipper, dropping the measurements
    pub fn into_clipper(self) -> C {
        self.clipper
    }
}

#[derive(Default, Copy, Clone)]
pub struct Measurement<T: Measureable> {
    /// How many values have been:
    /// - accumulated into `acc`
    /// - compared with `max`
    pub number: u32,

    /// Sum of all seen values
    pub acc: T,

    /// The lowest of all seen values
    pub min: T,

    /// The highest of all seen values
    pub max: T,
}
impl<T: Measureable> Measurement<T> {
    /// Add a data point to the measurement
    pub fn add(&mut self, value: T) {
        self.number += 1;
        self.acc += value;

        if self.number == 1 {
            // Measurement<T> is generic, so min and max can't start at some MAX and MIN constants.
            self.min = value;
            self.max = value;
        } else {
            if self.max < value {
                self.max = value;
            }
            if self.min > value {
                self.min = value;
            }
        }
    }

    /// Get the average value
    pub fn avg(&self) -> T::Avg {
        self.acc.avg(self.number)
    }
}
// Custom Debug impl
// - also outputs `avg`
impl<T: Measureable> Debug for Measurement<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Measurement")
            .field("number", &self.number)
            .field("acc", &self.acc)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("avg", &self.avg())
            .finish()
    }
}

/// Empty trait combining all traits required of measured values into a single shorthand.
pub trait Measureable: Default + Copy + PartialOrd + AddAssign<Self> + Debug {
    type Avg: Debug;

    /// Average over `count` values, which is zero for an empty measurement
    fn avg(self, count: u32) -> Self::Avg;
}
impl Measureable for Duration {
    type Avg = Self;
    fn avg(self, count: u32) -> Self::Avg {
        self.checked_div(count).unwrap_or_default()
    }
}
macro_rules! impl_numeric {
    ($($T:ty),*) => {
        $(
            impl Measureable for $T {
                type Avg = f64;
                fn avg(self, count: u32) -> Self::Avg {
                    if count == 0 {
                        0.0
                    } else {
                        self as f64 / count as f64
                    }
                }
            }
        )*
    };
}
impl_numeric!(u32);
