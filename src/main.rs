//! `scatterview [DATA.json] [--svg OUT.svg] [--png OUT.png]`
//!
//! Without export flags the plot opens in a window. With `--svg` and/or
//! `--png` the plot is rendered headlessly to the given files instead.

use std::path::PathBuf;
use std::process::ExitCode;

use scatterview::data::loader::load_datasets_from_path;
use scatterview::{export, run_scatter, sample_datasets, PlotRenderer, ScatterConfig};

#[derive(Default)]
struct Args {
    data: Option<PathBuf>,
    svg: Option<PathBuf>,
    png: Option<PathBuf>,
}

const USAGE: &str = "usage: scatterview [DATA.json] [--svg OUT.svg] [--png OUT.png]";

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--svg" => args.svg = Some(it.next().ok_or("--svg needs a path")?.into()),
            "--png" => args.png = Some(it.next().ok_or("--png needs a path")?.into()),
            "-h" | "--help" => return Err(USAGE.to_string()),
            other if other.starts_with('-') => return Err(format!("unknown option {other}\n{USAGE}")),
            other => {
                if args.data.is_some() {
                    return Err(format!("unexpected argument {other}\n{USAGE}"));
                }
                args.data = Some(other.into());
            }
        }
    }
    Ok(args)
}

fn run(args: Args) -> scatterview::Result<()> {
    let datasets = match &args.data {
        Some(path) => load_datasets_from_path(path)?,
        None => sample_datasets(),
    };
    let cfg = ScatterConfig::default();

    if args.svg.is_none() && args.png.is_none() {
        return run_scatter(datasets, cfg);
    }

    let renderer = PlotRenderer::initialize(&datasets, &cfg)?;
    let scene = renderer.scene(0.0);
    if let Some(path) = &args.svg {
        export::save_svg(&scene, path)?;
    }
    if let Some(path) = &args.png {
        export::save_png(&scene, path, 1.0)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
