use crate::conf::InductionOptions;
use crate::error::InductionError;
use crate::rules::Rule;
use crate::tree::RbdTree;
use estimators::api::{Estimator, FitError, PredictError};

/// Classifier backed by a tree induced from rules.
///
/// Fitting consumes a ruleset; prediction takes one value per attribute
/// and walks the tree.
pub struct RbdtClassifier {
    pub n_attributes: usize,
    pub options: InductionOptions,
    pub tree: Option<RbdTree>,
}

impl RbdtClassifier {
    pub fn new(n_attributes: usize, options: InductionOptions) -> Self {
        RbdtClassifier {
            n_attributes,
            options,
            tree: None,
        }
    }

    pub fn with_defaults(n_attributes: usize) -> Self {
        Self::new(n_attributes, InductionOptions::default())
    }

    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    pub fn tree_info(&self) -> Option<String> {
        self.tree.as_ref().map(RbdTree::tree_info)
    }
}

fn fit_error(err: InductionError) -> FitError {
    match err {
        InductionError::MeasureRange { .. } => FitError::Numerical(err.to_string()),
        InductionError::Precondition(_) => FitError::InvalidInput(err.to_string()),
    }
}

impl Estimator for RbdtClassifier {
    type Data = [Rule];
    type Sample = [String];
    type Output = String;

    fn _fit_impl(&mut self, rules: &[Rule]) -> Result<(), FitError> {
        let mut tree = RbdTree::new(self.options.clone());
        tree.fit(rules, self.n_attributes).map_err(fit_error)?;
        self.tree = Some(tree);
        Ok(())
    }

    fn _predict_impl(&self, instance: &[String]) -> Result<String, PredictError> {
        let tree = self.tree.as_ref().ok_or(PredictError::NotFitted)?;
        if instance.len() != self.n_attributes {
            return Err(PredictError::InvalidInput(format!(
                "expected {} attribute values, got {}",
                self.n_attributes,
                instance.len()
            )));
        }
        tree.predict(instance)
            .map(str::to_string)
            .ok_or_else(|| {
                PredictError::NoPrediction(format!(
                    "no branch of the tree matches {:?}",
                    instance
                ))
            })
    }
}
