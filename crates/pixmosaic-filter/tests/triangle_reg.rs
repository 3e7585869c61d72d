//! Triangle mosaic regression test
//!
//! Verifies the four-triangle split per cell, the non-strict membership
//! gates (diagonal pixels counted into two sums), and the fill precedence
//! top > left > right > bottom on the diagonals.

use pixmosaic_core::Error;
use pixmosaic_filter::{FilterError, triangle_mosaic};
use pixmosaic_test::{RegParams, raster_from_fn, uniform_raster};

#[test]
fn triangle_reg() {
    let mut rp = RegParams::new("triangle");

    // --- Test 1: Output size equals input size ---
    let pixs = raster_from_fn(9, 6, |x, y| ((x * 20) as u8, (y * 40) as u8, 99)).expect("build 9x6");
    for &divisions in &[1, 2, 3] {
        let out = triangle_mosaic(&pixs, divisions)
            .unwrap_or_else(|e| panic!("triangle_mosaic div={}: {}", divisions, e));
        rp.compare_values(9.0, out.width() as f64, 0.0);
        rp.compare_values(6.0, out.height() as f64, 0.0);
        eprintln!("  triangle_mosaic({}): {}x{}", divisions, out.width(), out.height());
    }

    // --- Test 2: 2x2 single cell, one solid color per quadrant pixel ---
    // Every pixel of this cell lies on a scaled diagonal, so each is
    // double-counted into two triangle sums and the fill precedence decides
    // its final color: (0,0) and (1,0) go to the top triangle, (0,1) to the
    // left (not bottom), (1,1) to the right (not bottom).
    let quad = raster_from_fn(2, 2, |x, y| match (x, y) {
        (0, 0) => (255, 0, 0),
        (1, 0) => (0, 255, 0),
        (0, 1) => (0, 0, 255),
        _ => (255, 255, 255),
    })
    .expect("build 2x2");
    let out = triangle_mosaic(&quad, 1).expect("triangle_mosaic 2x2");
    rp.compare_rgb((127, 127, 0), out.get_rgb_unchecked(0, 0)); // top = {red, green}
    rp.compare_rgb((127, 127, 0), out.get_rgb_unchecked(1, 0)); // top again
    rp.compare_rgb((127, 0, 127), out.get_rgb_unchecked(0, 1)); // left = {red, blue}
    rp.compare_rgb((127, 255, 127), out.get_rgb_unchecked(1, 1)); // right = {green, white}

    // --- Test 3: Exact fills on a 4x4 gradient, single cell ---
    let pixs = raster_from_fn(4, 4, |x, y| {
        let v = 10 * (y * 4 + x);
        (v as u8, (2 * v % 256) as u8, (3 * v % 256) as u8)
    })
    .expect("build 4x4");
    let out = triangle_mosaic(&pixs, 1).expect("triangle_mosaic 4x4");
    let expected: [[(u8, u8, u8); 4]; 4] = [
        [(28, 56, 85), (28, 56, 85), (28, 56, 85), (28, 56, 85)],
        [(63, 126, 104), (28, 56, 85), (28, 56, 85), (86, 130, 132)],
        [(63, 126, 104), (63, 126, 104), (86, 130, 132), (86, 130, 132)],
        [(63, 126, 104), (121, 115, 109), (121, 115, 109), (86, 130, 132)],
    ];
    let mut mismatches = 0;
    for y in 0..4u32 {
        for x in 0..4u32 {
            if out.get_rgb_unchecked(x, y) != expected[y as usize][x as usize] {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 4: Uniform input stays uniform ---
    let teal = uniform_raster(6, 6, (0, 128, 128)).expect("build uniform");
    let out = triangle_mosaic(&teal, 2).expect("triangle_mosaic uniform");
    rp.compare_rasters(&teal, &out);

    // --- Test 5: Parameter validation ---
    rp.check(
        matches!(
            triangle_mosaic(&teal, 0),
            Err(FilterError::Core(Error::InvalidDivisions(0)))
        ),
        "zero divisions rejected",
    );

    assert!(rp.cleanup(), "triangle regression test failed");
}
