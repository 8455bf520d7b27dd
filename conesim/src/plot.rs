//! PNG charts for each pipeline stage.

use crate::{
    consts::{PLOT_HEIGHT, PLOT_WIDTH},
    error::{SimError, SimResult},
    sim::Simulation,
    types::{CCoord, KinematicSeries, Path},
};
use plotters::prelude::*;
use std::{
    error::Error,
    fs,
    ops::Range,
    path::{Path as FsPath, PathBuf},
};
use tracing::info;

pub const PATH_PLOT: &str = "path.png";
pub const IMU_PLOT: &str = "imu.png";
pub const CONES_PLOT: &str = "cones.png";

const ACC_Y_COLOR: RGBColor = RGBColor(255, 127, 14);

type DrawResult = Result<(), Box<dyn Error>>;

/// Write the three charts into `dir`, creating it if needed.
pub fn render_all(sim: &Simulation, dir: &FsPath) -> SimResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let path_file = dir.join(PATH_PLOT);
    render(&path_file, |f| draw_path(f, &sim.path))?;

    let imu_file = dir.join(IMU_PLOT);
    render(&imu_file, |f| draw_imu(f, &sim.imu))?;

    let cones_file = dir.join(CONES_PLOT);
    render(&cones_file, |f| draw_cones(f, &sim.path, &sim.cones))?;

    Ok(vec![path_file, imu_file, cones_file])
}

fn render(file: &FsPath, draw: impl FnOnce(&FsPath) -> DrawResult) -> SimResult<()> {
    draw(file).map_err(|e| SimError::Plot {
        path: file.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(file = %file.display(), "wrote plot");
    Ok(())
}

/// Axis range covering `values` with a small margin. Degenerate or empty
/// input still yields a drawable range.
pub fn axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((hi - lo) * 0.05).max(0.1);
    (lo - pad)..(hi + pad)
}

fn draw_path(file: &FsPath, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Simulated Vehicle Path", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            axis_range(path.x.iter().copied()),
            axis_range(path.y.iter().copied()),
        )?;
    chart.configure_mesh().x_desc("x").y_desc("Y").draw()?;

    chart
        .draw_series(LineSeries::new(path.points().map(|p| (p.x, p.y)), &BLUE))?
        .label("Vehicle Path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

fn draw_imu(file: &FsPath, imu: &KinematicSeries) -> DrawResult {
    let root = BitMapBackend::new(file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let steps = imu.len().max(1) as f64;
    let mut chart = ChartBuilder::on(&root)
        .caption("Simulated IMU Data", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0.0..steps,
            axis_range(imu.acc_x.iter().chain(&imu.acc_y).copied()),
        )?;
    chart
        .configure_mesh()
        .x_desc("Time step")
        .y_desc("Acceleration")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            imu.acc_x.iter().enumerate().map(|(i, &a)| (i as f64, a)),
            &BLUE,
        ))?
        .label("Acc X")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(
            imu.acc_y.iter().enumerate().map(|(i, &a)| (i as f64, a)),
            &ACC_Y_COLOR,
        ))?
        .label("Acc Y")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ACC_Y_COLOR));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

fn draw_cones(file: &FsPath, path: &Path, cones: &[CCoord]) -> DrawResult {
    let root = BitMapBackend::new(file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let xs = path.x.iter().copied().chain(cones.iter().map(|c| c.x));
    let ys = path.y.iter().copied().chain(cones.iter().map(|c| c.y));
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Simulated Cone Positions and Vehicle Path",
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(axis_range(xs), axis_range(ys))?;
    chart.configure_mesh().x_desc("X").y_desc("Y").draw()?;

    chart
        .draw_series(
            cones
                .iter()
                .map(|c| Circle::new((c.x, c.y), 5, RED.filled())),
        )?
        .label("Cones")
        .legend(|(x, y)| Circle::new((x, y), 5, RED.filled()));
    chart
        .draw_series(LineSeries::new(path.points().map(|p| (p.x, p.y)), &BLUE))?
        .label("Vehicle Path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
