use std::error::Error as StdError;

/// Errors that can occur during a sweep.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error at sample {index}: {source}")]
    Model {
        index: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("problem error at sample {index}: {source}")]
    Problem {
        index: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(index: usize, err: E) -> Self {
        Self::Model {
            index,
            source: Box::new(err),
        }
    }

    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(index: usize, err: E) -> Self {
        Self::Problem {
            index,
            source: Box::new(err),
        }
    }
}
