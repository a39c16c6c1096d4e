pub mod dataset;
pub mod gradient_descent;
pub mod luus_jaakola;
pub mod model;
pub mod ols;
pub mod plots;
pub mod scaling;
