/// A named series of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// Collects trace data during a sweep.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names, then call
/// [`record`][PlotObserver::record] from the sweep's observer closure.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["CL (Lift Coefficient)", "CD (Drag Coefficient)"]);
///
/// sweep::solve(&airfoil, &AngleSweep, angles, |event: &sweep::Event<1, _, AeroCoefficients>| {
///     let c = event.snapshot.output;
///     obs.record(event.point[0], [Some(c.cl), Some(c.cd)]);
///     None
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the points recorded for one trace.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    #[must_use]
    pub fn points(&self, trace: usize) -> &[[f64; 2]] {
        &self.data[trace]
    }

    /// Consumes the observer and returns its named traces.
    #[must_use]
    pub fn into_traces(self) -> Vec<Trace> {
        self.names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| Trace { name, points })
            .collect()
    }
}
