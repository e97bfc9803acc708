use halftone_vector::config::vectorize;
use halftone_vector::converter::Converter;
use halftone_vector::diagnostics::ConversionReport;
use halftone_vector::document::svg::SvgFileSink;
use halftone_vector::image::io::{load_grayscale_image, write_json_file};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = vectorize::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input).map_err(|e| e.to_string())?;
    let seed = config.seed.unwrap_or_else(rand::random);
    if config.params.shape.is_stochastic() {
        info!("vectorize seed={seed}");
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let converter = Converter::new(config.params.clone()).map_err(|e| e.to_string())?;
    let sink = SvgFileSink::new(&config.output.svg, config.style.clone());
    let (svg_path, conversion) = converter
        .run(&gray.as_view(), &mut rng, sink)
        .map_err(|e| e.to_string())?;

    println!(
        "Saved {} primitives ({} of {} blocks) to {}",
        conversion.primitives,
        conversion.blocks_drawn,
        conversion.blocks_total,
        svg_path.display()
    );

    if let Some(report_path) = &config.output.report_json {
        let report = VectorizeReport {
            input: config.input.display().to_string(),
            seed,
            conversion,
        };
        write_json_file(report_path, &report)?;
        println!("Saved report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: vectorize <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VectorizeReport {
    input: String,
    seed: u64,
    conversion: ConversionReport,
}
