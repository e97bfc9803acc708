mod common;

use common::synthetic_image::checkerboard_u8;
use halftone_vector::document::svg::{SvgFileSink, SvgStyle};
use halftone_vector::image::ImageU8;
use halftone_vector::{ConvertParams, Converter, ShapeKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

#[test]
fn file_sink_writes_svg_to_requested_path() {
    common::init_logging();
    let buffer = checkerboard_u8(32, 16, 8);
    let image = ImageU8::packed(32, 16, &buffer);
    let out = std::env::temp_dir()
        .join("halftone_vector_tests")
        .join(format!("zigzag_{}.svg", std::process::id()));

    let converter = Converter::new(ConvertParams::new(ShapeKind::Zigzag, 8)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let sink = SvgFileSink::new(&out, SvgStyle::default());
    let (path, report) = converter.run(&image, &mut rng, sink).unwrap();

    assert_eq!(path, out);
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("viewBox=\"0 0 32 16\""));
    // Dark cells (value 32) are drawn, light ones (220) fall under 0.4.
    assert_eq!(report.blocks_drawn, 4);
    assert_eq!(svg.matches("<path").count(), 4);
    let _ = fs::remove_file(&path);
}
