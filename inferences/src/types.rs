
use crate::PredictError;

/// Number of measurements describing one Iris sample.
pub const FEATURE_COUNT: usize = 4;

/// Sepal length, sepal width, petal length, petal width (cm), in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features(pub [f32; FEATURE_COUNT]);

impl Features {
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Rejects NaN and infinities, which no classifier can score.
    pub fn ensure_finite(&self) -> Result<(), PredictError> {
        match self.0.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(PredictError::InvalidInput(format!(
                "la valeur à la position {} n'est pas finie ({})",
                i, self.0[i]
            ))),
            None => Ok(()),
        }
    }
}

impl From<[f32; FEATURE_COUNT]> for Features {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
