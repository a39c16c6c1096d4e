use std::error::Error;

use nalgebra::{DMatrix, DVector};

use crate::dataset::Observation;
use crate::model::LinearModel;

/// Closed-form least squares: solve (XᵀX)β = Xᵀy for the [1, surface] design.
pub fn normal_equations(data: &[Observation]) -> Result<LinearModel, Box<dyn Error>> {
    let design = DMatrix::from_fn(data.len(), 2, |row, col| {
        if col == 0 {
            1.
        } else {
            data[row].surface
        }
    });
    let prices = DVector::from_iterator(data.len(), data.iter().map(|obs| obs.price));

    let gram = design.transpose() * &design;
    let moment = design.transpose() * prices;

    let solution = gram
        .lu()
        .solve(&moment)
        .ok_or("normal equations are singular")?;

    Ok(LinearModel {
        intercept: solution[0],
        slope: solution[1],
    })
}
