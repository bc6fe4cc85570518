use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tomopad::{CenterPlan, PadSpec, ReconGeometry, ReconParams};

use super::args::CliArgs;
use super::errors::AppError;

#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub geometry: ReconGeometry,
    pub center: Option<CenterPlan>,
    pub num_iter: usize,
    pub threshold: f32,
}

/// Loads `--config` if given, then applies flag overrides.
pub fn resolve_params(args: &CliArgs) -> Result<ReconParams, AppError> {
    let mut params = match &args.config {
        Some(path) => ReconParams::from_path(path)?,
        None => ReconParams::default(),
    };

    if args.pad_x.is_some() || args.pad_y.is_some() {
        let pad = PadSpec::try_new(
            args.pad_x.unwrap_or(params.pad.x as i64),
            args.pad_y.unwrap_or(params.pad.y as i64),
        )?;
        params = params.with_pad(pad);
    }
    if let Some(center) = args.center {
        params = params.with_center(Some(center));
    }
    if let Some(num_iter) = args.num_iter {
        params = params.with_num_iter(num_iter);
    }

    params.validate()?;
    Ok(params)
}

pub fn build_report(shape: [usize; 3], params: &ReconParams) -> PlanReport {
    let geometry = ReconGeometry::new(shape, params.pad);
    PlanReport {
        geometry,
        center: params.center.map(|c| geometry.center_plan(c)),
        num_iter: params.num_iter,
        threshold: params.threshold,
    }
}

fn print_text(report: &PlanReport) {
    let g = &report.geometry;
    println!("pad:                   {}", g.pad);
    println!("projections:           {:?}", g.projection_dim);
    println!("padded projections:    {:?}", g.padded_projection_dim);
    println!("reconstructed volume:  {:?}", g.volume_dim);
    println!("unpadded volume:       {:?}", g.unpadded_volume_dim);
    match &report.center {
        Some(c) => {
            println!("center:                {}", c.center);
            println!("padded center:         {}", c.padded_center);
            println!("center shift:          {}", c.center_shift);
        }
        None => println!("center:                (engine default)"),
    }
    println!("iterations:            {}", report.num_iter);
    println!("trim threshold:        {:e}", report.threshold);
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = resolve_params(&args)?;
    info!("Resolved parameters: {:?}", params);

    let report = build_report(args.shape, &params);
    if args.json {
        let text = serde_json::to_string_pretty(&report).map_err(AppError::from)?;
        println!("{}", text);
    } else {
        print_text(&report);
    }
    Ok(())
}
