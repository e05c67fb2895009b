use aerosim_core::Snapshot;

/// Event emitted by the sweep solver after each evaluated sample.
#[derive(Debug, Clone)]
pub struct Event<const N: usize, I, O> {
    /// Zero-based position of the sample in the sweep.
    pub index: usize,

    /// The sample coordinates as given to the problem.
    pub point: [f64; N],

    /// Snapshot of the model input and output at this sample.
    pub snapshot: Snapshot<I, O>,
}
