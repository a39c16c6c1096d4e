use crate::dataset::Observation;
use crate::model::{FitResult, LinearModel, TraceEntry};

#[derive(Clone, Copy, Debug)]
pub struct GradientDescentConfig {
    pub learning_rate: f64,
    pub iterations: usize,
}

impl Default for GradientDescentConfig {
    fn default() -> Self {
        GradientDescentConfig {
            learning_rate: 0.01,
            iterations: 1000,
        }
    }
}

/// Batch gradient descent on the MSE surface, starting from (0, 0). Each trace
/// entry holds that iteration's parameters and the loss measured after the step.
pub fn fit(data: &[Observation], config: &GradientDescentConfig) -> FitResult {
    let n = data.len() as f64;

    let mut model = LinearModel::default();
    let mut trace = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let mut gradient_intercept = 0.;
        let mut gradient_slope = 0.;

        for obs in data {
            let residual = model.predict(obs.surface) - obs.price;
            gradient_intercept += residual;
            gradient_slope += residual * obs.surface;
        }

        gradient_intercept *= 2. / n;
        gradient_slope *= 2. / n;

        model.intercept -= config.learning_rate * gradient_intercept;
        model.slope -= config.learning_rate * gradient_slope;

        trace.push(TraceEntry {
            intercept: model.intercept,
            slope: model.slope,
            loss: model.mse(data),
        });
    }

    FitResult { model, trace }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ols;

    fn standardized_like_data() -> Vec<Observation> {
        (0..68)
            .map(|i| {
                let surface = i as f64 / 67. * 4. - 2.;
                Observation {
                    surface,
                    price: 0.8 * surface + 0.1 * (i as f64 * 2.7).sin(),
                }
            })
            .collect()
    }

    #[test]
    fn trace_has_one_entry_per_iteration() {
        let data = standardized_like_data();

        let result = fit(
            &data,
            &GradientDescentConfig {
                learning_rate: 0.01,
                iterations: 37,
            },
        );

        assert_eq!(result.trace.len(), 37);
    }

    #[test]
    fn recorded_loss_is_measured_after_the_step() {
        let data = standardized_like_data();

        let result = fit(
            &data,
            &GradientDescentConfig {
                learning_rate: 0.01,
                iterations: 1,
            },
        );

        assert_eq!(result.trace[0].loss, result.model.mse(&data));
        assert_ne!(result.model, LinearModel::default());
    }

    #[test]
    fn converges_to_the_least_squares_solution() {
        let data = standardized_like_data();

        let result = fit(
            &data,
            &GradientDescentConfig {
                learning_rate: 0.01,
                iterations: 1000,
            },
        );
        let reference = ols::normal_equations(&data).unwrap();

        assert!((result.model.slope - reference.slope).abs() < 0.01 * reference.slope.abs());
        assert!((result.model.intercept - reference.intercept).abs() < 1e-3);

        let reference_mse = reference.mse(&data);
        assert!(result.model.mse(&data) <= reference_mse * 1.01);
    }

    #[test]
    fn loss_trends_downward_for_a_stable_learning_rate() {
        let data = standardized_like_data();

        let result = fit(
            &data,
            &GradientDescentConfig {
                learning_rate: 0.01,
                iterations: 200,
            },
        );

        let first = result.trace.first().unwrap().loss;
        let last = result.trace.last().unwrap().loss;

        assert!(last < first);
    }
}
