use crate::dataset::Observation;

/// Linear predictor of price from covered surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearModel {
    pub fn predict(&self, surface: f64) -> f64 {
        self.intercept + self.slope * surface
    }

    pub fn mse(&self, data: &[Observation]) -> f64 {
        let sum: f64 = data
            .iter()
            .map(|obs| (self.predict(obs.surface) - obs.price).powi(2))
            .sum();

        sum / data.len() as f64
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceEntry {
    pub intercept: f64,
    pub slope: f64,
    pub loss: f64,
}

#[derive(Clone, Debug)]
pub struct FitResult {
    pub model: LinearModel,
    pub trace: Vec<TraceEntry>,
}
