/// Uniform image filled with `value`.
pub fn solid_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Horizontal ramp from black on the left to white on the right.
pub fn horizontal_ramp_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 1, "ramp needs at least two columns");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = ((x * 255) / (width - 1)) as u8;
        }
    }
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = x / cell;
            let cy = y / cell;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}
