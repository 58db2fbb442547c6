use std::path::{Path, PathBuf};

use tract_onnx::prelude::*;

use crate::{Classifier, Features, LoadError, PredictError, FEATURE_COUNT};

type IrisPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX classifier taking a `f32[1, 4]` input and returning the label first.
pub struct IrisModel {
    model: IrisPlan,
    path: PathBuf,
}

impl IrisModel {
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self, LoadError> {
        let path = model_path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(LoadError::NotFound(path));
        }

        let model = Self::build_plan(&path).map_err(|source| LoadError::Invalid {
            path: path.clone(),
            source,
        })?;

        log::debug!("Plan tract prêt pour {}", path.display());
        Ok(Self { model, path })
    }

    fn build_plan(path: &Path) -> TractResult<IrisPlan> {
        tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
            )?
            .into_optimized()?
            .into_runnable()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, features: &Features) -> TractResult<Option<i64>> {
        let input_tensor = Tensor::from_shape(&[1, FEATURE_COUNT], features.as_slice())?;
        let outputs = self.model.run(tvec!(input_tensor.into()))?;

        // sklearn exports put the label tensor first, int64 or float depending on the converter
        let label = outputs
            .first()
            .ok_or_else(|| anyhow::anyhow!("Aucune sortie du modèle"))?
            .cast_to::<i64>()?;
        let class = label.as_slice::<i64>()?.first().copied();
        Ok(class)
    }
}

impl Classifier for IrisModel {
    fn predict(&self, features: &Features) -> Result<i64, PredictError> {
        features.ensure_finite()?;

        self.run(features)?
            .ok_or_else(|| PredictError::Internal(anyhow::anyhow!("Sortie du modèle vide")))
    }
}
