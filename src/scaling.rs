use std::error::Error;

use crate::dataset::Observation;
use crate::model::{LinearModel, TraceEntry};

/// Affine rescaling of one column to zero mean and unit variance.
#[derive(Clone, Copy, Debug)]
pub struct Scaler {
    pub mean: f64,
    pub sd: f64,
}

impl Scaler {
    pub fn fit(values: impl Iterator<Item = f64> + Clone) -> Result<Self, Box<dyn Error>> {
        let n = values.clone().count();

        if n == 0 {
            return Err("cannot standardize an empty column".into());
        }

        let mean = values.clone().sum::<f64>() / n as f64;
        let variance = values.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        let sd = variance.sqrt();

        if !sd.is_finite() || sd == 0. {
            return Err("column has zero variance, cannot standardize".into());
        }

        Ok(Scaler { mean, sd })
    }

    pub fn transform(&self, value: f64) -> f64 {
        (value - self.mean) / self.sd
    }

    pub fn inverse(&self, value: f64) -> f64 {
        value * self.sd + self.mean
    }
}

/// Standardization statistics for both columns of the observation set.
#[derive(Clone, Copy, Debug)]
pub struct DatasetScaling {
    pub surface: Scaler,
    pub price: Scaler,
}

impl DatasetScaling {
    pub fn fit(data: &[Observation]) -> Result<Self, Box<dyn Error>> {
        let surface = Scaler::fit(data.iter().map(|obs| obs.surface))?;
        let price = Scaler::fit(data.iter().map(|obs| obs.price))?;

        Ok(DatasetScaling { surface, price })
    }

    pub fn standardize(&self, data: &[Observation]) -> Vec<Observation> {
        data.iter()
            .map(|obs| Observation {
                surface: self.surface.transform(obs.surface),
                price: self.price.transform(obs.price),
            })
            .collect()
    }

    /// Maps parameters fitted on standardized columns back to original units.
    pub fn model_to_original_units(&self, model: LinearModel) -> LinearModel {
        let slope = model.slope * self.price.sd / self.surface.sd;
        let intercept =
            model.intercept * self.price.sd + self.price.mean - slope * self.surface.mean;

        LinearModel { intercept, slope }
    }

    // residuals scale by sd_price under the price transform, so the MSE scales by its square
    pub fn loss_to_original_units(&self, loss: f64) -> f64 {
        loss * self.price.sd.powi(2)
    }

    pub fn trace_to_original_units(&self, trace: &[TraceEntry]) -> Vec<TraceEntry> {
        trace
            .iter()
            .map(|entry| {
                let model = self.model_to_original_units(LinearModel {
                    intercept: entry.intercept,
                    slope: entry.slope,
                });

                TraceEntry {
                    intercept: model.intercept,
                    slope: model.slope,
                    loss: self.loss_to_original_units(entry.loss),
                }
            })
            .collect()
    }
}
