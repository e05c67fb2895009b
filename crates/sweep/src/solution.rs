use aerosim_core::Snapshot;

/// Indicates how the sweep terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every sample was evaluated.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a sweep.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize, I, O> {
    /// How the sweep terminated.
    pub status: Status,

    /// Sample coordinates, aligned with `history`.
    pub points: Vec<[f64; N]>,

    /// Snapshot of every evaluated sample, in sweep order.
    pub history: Vec<Snapshot<I, O>>,
}

impl<const N: usize, I, O> Solution<N, I, O> {
    /// Returns the number of evaluated samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if no samples were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Iterates over `(point, output)` pairs in sweep order.
    pub fn outputs(&self) -> impl Iterator<Item = (&[f64; N], &O)> {
        self.points
            .iter()
            .zip(self.history.iter().map(|snapshot| &snapshot.output))
    }
}
