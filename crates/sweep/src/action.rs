/// Control actions supported by the sweep solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep early and return the samples evaluated so far.
    StopEarly,
}
