use plotters::coord::Shift;
use plotters::prelude::*;

use ndarray::Array;

use crate::dataset::Observation;
use crate::model::{LinearModel, TraceEntry};

pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

pub fn find_max_min<T: std::cmp::PartialOrd + Copy>(
    mut data: impl Iterator<Item = T>,
) -> Option<MinMax<T>> {
    let init = data.next()?;
    let mut min_max = MinMax {
        min: init,
        max: init,
    };

    for x in data {
        min_max = MinMax {
            min: if x < min_max.min { x } else { min_max.min },
            max: if x > min_max.max { x } else { min_max.max },
        };
    }

    Some(min_max)
}

pub fn plot_loss_curve<DB>(
    trace: &[TraceEntry],
    label: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    drawing_area.fill(&WHITE)?;

    let mut drawing_area = ChartBuilder::on(drawing_area);

    // the axis lower bound must stay positive for the log scale to make sense
    let min_loss = trace
        .iter()
        .map(|entry| entry.loss)
        .filter(|&loss| loss > 0.)
        .reduce(f64::min)
        .unwrap_or(1e-12);

    let max_loss = trace
        .iter()
        .map(|entry| entry.loss)
        .reduce(f64::max)
        .unwrap_or(1.)
        .max(min_loss * 10.);

    let mut chart_context = drawing_area
        .caption(label, ("Arial", 20))
        .set_all_label_area_size(70)
        .margin(50)
        .build_cartesian_2d(0..trace.len(), (min_loss..max_loss).log_scale())?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc("Iteration")
        .y_labels(10)
        .y_desc(label)
        .y_label_formatter(&|y| format!("{:.1e}", y))
        .draw()?;

    let losses = LineSeries::new(
        trace.iter().enumerate().map(|(i, entry)| (i, entry.loss)),
        BLUE.filled(),
    );

    chart_context.draw_series(losses)?;

    Ok(())
}

pub fn plot_fitted_lines<DB>(
    data: &[Observation],
    fits: &[(&str, LinearModel, RGBColor)],
    caption: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    <DB as DrawingBackend>::ErrorType: 'static,
{
    drawing_area.fill(&WHITE)?;

    let mut drawing_area = ChartBuilder::on(drawing_area);

    let surface_range = find_max_min(data.iter().map(|obs| obs.surface))
        .ok_or("cannot plot an empty observation set")?;
    let price_range = find_max_min(data.iter().map(|obs| obs.price))
        .ok_or("cannot plot an empty observation set")?;

    let mut chart_context = drawing_area
        .caption(caption, ("Arial", 20))
        .set_all_label_area_size(70)
        .margin(50)
        .build_cartesian_2d(
            surface_range.min..surface_range.max,
            price_range.min..price_range.max,
        )?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc("Covered surface [m²]")
        .y_labels(10)
        .y_desc("Price")
        .y_label_formatter(&|y| format!("{:.1e}", y))
        .draw()?;

    chart_context.draw_series(
        data.iter()
            .map(|obs| Circle::new((obs.surface, obs.price), 3, BLACK.filled())),
    )?;

    let line_xs = Array::linspace(surface_range.min, surface_range.max, 100);

    for &(name, model, color) in fits {
        chart_context
            .draw_series(LineSeries::new(
                line_xs.iter().map(|&x| (x, model.predict(x))),
                color.stroke_width(2),
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart_context
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE)
        .draw()?;

    Ok(())
}
