use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Numerical error: {0}")]
    Numerical(String),
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Model is not fitted")]
    NotFitted,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No prediction available: {0}")]
    NoPrediction(String),
}

/// Fit/predict contract shared by the estimators of the workspace.
///
/// `Data` is what the model is trained from, `Sample` a single query and
/// `Output` the prediction for it.
pub trait Estimator {
    type Data: ?Sized;
    type Sample: ?Sized;
    type Output;

    fn fit(&mut self, data: &Self::Data) -> Result<(), FitError> {
        self._fit_impl(data)
    }

    fn _fit_impl(&mut self, _data: &Self::Data) -> Result<(), FitError> {
        // Default implementation can be overridden by specific estimators
        Err(FitError::InvalidInput(
            "Default fit implementation not provided".to_string(),
        ))
    }

    fn predict(&self, sample: &Self::Sample) -> Result<Self::Output, PredictError> {
        self._predict_impl(sample)
    }

    fn _predict_impl(&self, _sample: &Self::Sample) -> Result<Self::Output, PredictError> {
        Err(PredictError::NotFitted)
    }

    fn predict_batch(&self, samples: &[&Self::Sample]) -> Result<Vec<Self::Output>, PredictError> {
        samples.iter().map(|s| self.predict(s)).collect()
    }
}
