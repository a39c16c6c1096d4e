use std::path::PathBuf;

use clap::Parser;
use itertools::izip;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use housing_regression::dataset::{self, ListingFilter};
use housing_regression::gradient_descent::{self, GradientDescentConfig};
use housing_regression::luus_jaakola::{self, LuusJaakolaConfig};
use housing_regression::ols;
use housing_regression::plots;
use housing_regression::scaling::DatasetScaling;

#[derive(Parser, Debug)]
#[command(about = "Fits price vs covered surface by random search, gradient descent and OLS")]
struct Args {
    #[arg(long, default_value = "data/listings.csv")]
    data: PathBuf,

    #[arg(long, default_value = "venta")]
    operation: String,

    #[arg(long, default_value = "departamento")]
    property_type: String,

    #[arg(long, default_value = "Palermo")]
    place_name: String,

    #[arg(long, default_value_t = 200)]
    lj_iterations: usize,

    #[arg(long, default_value_t = 1000)]
    gd_iterations: usize,

    #[arg(long, default_value_t = 0.01)]
    learning_rate: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = "plots")]
    plots_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let listings = dataset::load_listings(&args.data)?;

    let filter = ListingFilter {
        operation: args.operation.clone(),
        property_type: args.property_type.clone(),
        place_name: args.place_name.clone(),
    };
    let observations = dataset::select_observations(&listings, &filter);

    println!(
        "{} listings loaded, {} kept for {} / {} / {}",
        listings.len(),
        observations.len(),
        args.place_name,
        args.property_type,
        args.operation,
    );

    if observations.is_empty() {
        return Err("no observations left after filtering".into());
    }

    let scaling = DatasetScaling::fit(&observations)?;
    let standardized = scaling.standardize(&observations);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let lj = luus_jaakola::fit(
        &standardized,
        &LuusJaakolaConfig {
            iterations: args.lj_iterations,
            ..Default::default()
        },
        &mut rng,
    );

    let gd = gradient_descent::fit(
        &standardized,
        &GradientDescentConfig {
            learning_rate: args.learning_rate,
            iterations: args.gd_iterations,
        },
    );

    let ols_model = scaling.model_to_original_units(ols::normal_equations(&standardized)?);
    let lj_model = scaling.model_to_original_units(lj.model);
    let gd_model = scaling.model_to_original_units(gd.model);

    let lj_trace = scaling.trace_to_original_units(&lj.trace);
    let gd_trace = scaling.trace_to_original_units(&gd.trace);

    std::fs::create_dir_all(&args.plots_dir)?;

    let loss_path = args.plots_dir.join("loss_curves.svg");
    let drawing_area = SVGBackend::new(&loss_path, (1200, 600)).into_drawing_area();
    let (left, right) = drawing_area.split_horizontally(600);
    plots::plot_loss_curve(&lj_trace, "Luus-Jaakola MSE", &left)?;
    plots::plot_loss_curve(&gd_trace, "Gradient descent MSE", &right)?;
    drawing_area.present()?;

    let fit_path = args.plots_dir.join("fitted_lines.svg");
    let drawing_area = SVGBackend::new(&fit_path, (800, 600)).into_drawing_area();
    plots::plot_fitted_lines(
        &observations,
        &[
            ("Luus-Jaakola", lj_model, RED),
            ("Gradient descent", gd_model, GREEN),
            ("OLS", ols_model, BLUE),
        ],
        &format!(
            "{} / {} / {}",
            args.place_name, args.property_type, args.operation
        ),
        &drawing_area,
    )?;
    drawing_area.present()?;

    println!(
        "{:<18} {:>14} {:>12} {:>18}",
        "method", "intercept", "slope", "mse"
    );
    for (name, model) in izip!(
        ["luus-jaakola", "gradient descent", "ols"],
        [lj_model, gd_model, ols_model]
    ) {
        println!(
            "{:<18} {:>14.2} {:>12.2} {:>18.2}",
            name,
            model.intercept,
            model.slope,
            model.mse(&observations),
        );
    }

    println!(
        "plots written to {} and {}",
        loss_path.display(),
        fit_path.display()
    );

    Ok(())
}
