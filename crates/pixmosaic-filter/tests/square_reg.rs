//! Block mosaic regression test
//!
//! Size preservation, the uniform fixed point, idempotence, exact cell
//! averages on gradient images, and parameter validation.

use pixmosaic_core::Error;
use pixmosaic_filter::{FilterError, square_mosaic};
use pixmosaic_test::{RegParams, raster_from_fn, uniform_raster};

/// (v, 2v, 3v) mod 256 with v = 10 * (y * 4 + x)
fn gradient_4x4(x: u32, y: u32) -> (u8, u8, u8) {
    let v = 10 * (y * 4 + x);
    (v as u8, (2 * v % 256) as u8, (3 * v % 256) as u8)
}

fn gradient_7x5(x: u32, y: u32) -> (u8, u8, u8) {
    ((x * 30 % 256) as u8, (y * 50 % 256) as u8, (x * y * 7 % 256) as u8)
}

#[test]
fn square_reg() {
    let mut rp = RegParams::new("square");

    // --- Test 1: Output size equals input size ---
    let pixs = raster_from_fn(7, 5, gradient_7x5).expect("build 7x5");
    for &divisions in &[1, 2, 3, 5] {
        let out = square_mosaic(&pixs, divisions)
            .unwrap_or_else(|e| panic!("square_mosaic div={}: {}", divisions, e));
        rp.compare_values(7.0, out.width() as f64, 0.0);
        rp.compare_values(5.0, out.height() as f64, 0.0);
        eprintln!("  square_mosaic({}): {}x{}", divisions, out.width(), out.height());
    }

    // --- Test 2: Uniform input is a fixed point at any division count ---
    let red = uniform_raster(4, 4, (255, 0, 0)).expect("build uniform red");
    let out = square_mosaic(&red, 2).expect("square_mosaic uniform");
    rp.compare_rasters(&red, &out);

    // --- Test 3: Exact averages on a 4x4 gradient, 2x2 cells ---
    let pixs = raster_from_fn(4, 4, gradient_4x4).expect("build 4x4");
    let out = square_mosaic(&pixs, 2).expect("square_mosaic 4x4");
    let expected = [
        [(25, 50, 75), (45, 90, 135)],
        [(105, 146, 123), (125, 122, 119)],
    ];
    for y in 0..4 {
        for x in 0..4 {
            let cell = expected[(y / 2) as usize][(x / 2) as usize];
            rp.compare_rgb(cell, out.get_rgb_unchecked(x, y));
        }
    }

    // --- Test 4: Each cell average lies within the cell's channel range ---
    for (qy, row) in expected.iter().enumerate() {
        for (qx, &(ar, ag, ab)) in row.iter().enumerate() {
            let (mut lo, mut hi) = ([255u8; 3], [0u8; 3]);
            for y in 0..2 {
                for x in 0..2 {
                    let (r, g, b) = gradient_4x4(2 * qx as u32 + x, 2 * qy as u32 + y);
                    for (i, c) in [r, g, b].into_iter().enumerate() {
                        lo[i] = lo[i].min(c);
                        hi[i] = hi[i].max(c);
                    }
                }
            }
            rp.check(
                (lo[0]..=hi[0]).contains(&ar)
                    && (lo[1]..=hi[1]).contains(&ag)
                    && (lo[2]..=hi[2]).contains(&ab),
                "cell average within channel bounds",
            );
        }
    }

    // --- Test 5: Remainder cells cover the true edges (7x5, 3x2 cells) ---
    let pixs = raster_from_fn(7, 5, gradient_7x5).expect("build 7x5");
    let out = square_mosaic(&pixs, 2).expect("square_mosaic 7x5");
    let expected: [[(u8, u8, u8); 7]; 5] = [
        [(30, 25, 3), (30, 25, 3), (30, 25, 3), (120, 25, 14), (120, 25, 14), (120, 25, 14), (180, 25, 21)],
        [(30, 25, 3), (30, 25, 3), (30, 25, 3), (120, 25, 14), (120, 25, 14), (120, 25, 14), (180, 25, 21)],
        [(30, 125, 17), (30, 125, 17), (30, 125, 17), (120, 125, 70), (120, 125, 70), (120, 125, 70), (180, 125, 105)],
        [(30, 125, 17), (30, 125, 17), (30, 125, 17), (120, 125, 70), (120, 125, 70), (120, 125, 70), (180, 125, 105)],
        [(30, 200, 28), (30, 200, 28), (30, 200, 28), (120, 200, 112), (120, 200, 112), (120, 200, 112), (180, 200, 168)],
    ];
    let mut mismatches = 0;
    for y in 0..5u32 {
        for x in 0..7u32 {
            if out.get_rgb_unchecked(x, y) != expected[y as usize][x as usize] {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 6: Idempotence for a fixed division count ---
    let twice = square_mosaic(&out, 2).expect("square_mosaic twice");
    rp.compare_rasters(&out, &twice);

    // --- Test 7: Parameter validation ---
    rp.check(
        matches!(
            square_mosaic(&pixs, 0),
            Err(FilterError::Core(Error::InvalidDivisions(0)))
        ),
        "zero divisions rejected",
    );
    rp.check(
        matches!(
            square_mosaic(&pixs, 8),
            Err(FilterError::Core(Error::DivisionsExceedImage { .. }))
        ),
        "oversized divisions rejected",
    );

    assert!(rp.cleanup(), "square regression test failed");
}
