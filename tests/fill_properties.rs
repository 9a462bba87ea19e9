use std::collections::VecDeque;

use bucketfill::fill::{
    argb, flood_fill, flood_fill_detailed, matches, vector_flood_fill, FillOptions, PixelBuffer,
    Rgb, Tolerance,
};
use bucketfill::FillError;
use rayon::prelude::*;

const WHITE: u32 = 0xFFFFFFFF;
const BLACK: u32 = 0xFF000000;
const RED: u32 = 0xFFFF0000;
const FILL: u32 = 0xFF3366CC;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic noise image built from a small palette of near colors.
fn noise_image(width: usize, height: usize, seed: u32) -> PixelBuffer {
    let palette = [
        argb(255, 200, 200, 200),
        argb(255, 203, 198, 200),
        argb(255, 210, 200, 200),
        argb(255, 40, 40, 40),
    ];
    let mut state = seed;
    let pixels = (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            palette[(state >> 16) as usize % palette.len()]
        })
        .collect();
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// Reference 4-connected closure computed pixel by pixel.
fn reference_region(buffer: &PixelBuffer, x: usize, y: usize, tolerance: u8) -> Vec<bool> {
    let (w, h) = (buffer.width(), buffer.height());
    let reference = Rgb::from_argb(buffer.get(x, y).unwrap());
    let tol = Tolerance::uniform(tolerance);
    let mut region = vec![false; w * h];
    let mut queue = VecDeque::from([(x, y)]);
    region[y * w + x] = true;

    while let Some((x, y)) = queue.pop_front() {
        let mut neighbours = Vec::new();
        if x > 0 {
            neighbours.push((x - 1, y));
        }
        if x + 1 < w {
            neighbours.push((x + 1, y));
        }
        if y > 0 {
            neighbours.push((x, y - 1));
        }
        if y + 1 < h {
            neighbours.push((x, y + 1));
        }
        for (nx, ny) in neighbours {
            let idx = ny * w + nx;
            if !region[idx] && matches(buffer.pixels()[idx], reference, tol) {
                region[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    region
}

#[test]
fn test_four_by_four_with_black_pixel() {
    init_logging();
    let mut buffer = PixelBuffer::new(4, 4, WHITE).unwrap();
    buffer.set(2, 2, BLACK);

    let filled = flood_fill(&buffer, 0, 0, RED, 0).unwrap();

    let red = filled.pixels().iter().filter(|&&p| p == RED).count();
    assert_eq!(red, 15);
    assert_eq!(filled.get(2, 2), Some(BLACK));
}

#[test]
fn test_raster_region_is_exact_closure() {
    init_logging();
    for (seed, tolerance) in [(1u32, 0u8), (7, 3), (42, 10), (99, 12)] {
        let buffer = noise_image(37, 23, seed);
        let (x, y) = (5, 7);
        let expected = reference_region(&buffer, x, y, tolerance);

        let filled = flood_fill(&buffer, x, y, FILL, tolerance).unwrap();

        for (i, (&before, &after)) in buffer.pixels().iter().zip(filled.pixels()).enumerate() {
            if expected[i] {
                assert_eq!(after, FILL, "pixel {i} inside the region was not filled");
            } else {
                assert_eq!(after, before, "pixel {i} outside the region was modified");
            }
        }
    }
}

#[test]
fn test_second_fill_is_no_op() {
    init_logging();
    let buffer = noise_image(20, 20, 5);
    let once = flood_fill(&buffer, 10, 10, FILL, 5).unwrap();

    for (i, _) in once.pixels().iter().enumerate().filter(|&(_, &p)| p == FILL) {
        let (x, y) = once.coords_of(i);
        let twice = flood_fill_detailed(&once, x, y, &FillOptions::new(FILL).with_tolerance(5)).unwrap();
        assert_eq!(twice.image, once);
        assert_eq!(twice.pixel_count, 0);
    }
}

#[test]
fn test_seed_with_fill_color_is_unchanged() {
    let buffer = noise_image(9, 9, 3);
    let color = buffer.get(4, 4).unwrap();

    assert_eq!(flood_fill(&buffer, 4, 4, color, 20).unwrap(), buffer);
    assert!(vector_flood_fill(&buffer, 4, 4, color, 20).unwrap().is_empty());
}

#[test]
fn test_raster_and_vector_cover_same_pixels() {
    init_logging();
    for (seed, tolerance) in [(11u32, 0u8), (12, 4), (13, 10)] {
        let buffer = noise_image(31, 17, seed);
        for (x, y) in [(0, 0), (30, 16), (15, 8)] {
            let filled = flood_fill(&buffer, x, y, FILL, tolerance).unwrap();
            let path = vector_flood_fill(&buffer, x, y, FILL, tolerance).unwrap();

            let raster_mask: Vec<u8> = filled
                .pixels()
                .iter()
                .map(|&p| if p == FILL { 255 } else { 0 })
                .collect();
            assert_eq!(path.scanline_mask(31, 17), raster_mask, "seed ({x}, {y})");
        }
    }
}

#[test]
fn test_one_by_one_buffer() {
    let buffer = PixelBuffer::new(1, 1, WHITE).unwrap();

    assert_eq!(flood_fill(&buffer, 0, 0, RED, 0).unwrap().pixels(), &[RED]);

    let path = vector_flood_fill(&buffer, 0, 0, RED, 0).unwrap();
    assert!(path.ops().iter().all(|op| op.end_point() == (0.0, 0.0)));
    assert_eq!(path.scanline_mask(1, 1), vec![255]);
}

#[test]
fn test_out_of_bounds_seed() {
    let buffer = PixelBuffer::new(3, 2, WHITE).unwrap();
    for (x, y) in [(3, 0), (0, 2), (100, 100)] {
        assert_eq!(
            flood_fill(&buffer, x, y, RED, 0),
            Err(FillError::SeedOutOfBounds { x, y, width: 3, height: 2 })
        );
        assert_eq!(
            vector_flood_fill(&buffer, x, y, RED, 0),
            Err(FillError::SeedOutOfBounds { x, y, width: 3, height: 2 })
        );
    }
}

#[test]
fn test_large_uniform_region_from_corner() {
    init_logging();
    let buffer = PixelBuffer::new(1000, 1000, WHITE).unwrap();

    let result = flood_fill_detailed(&buffer, 999, 999, &FillOptions::new(RED)).unwrap();
    assert_eq!(result.pixel_count, 1_000_000);
    assert_eq!(result.bounds, Some((0, 0, 1000, 1000)));
    assert!(result.image.pixels().iter().all(|&p| p == RED));

    let path = vector_flood_fill(&buffer, 0, 0, RED, 0).unwrap();
    assert!(path.scanline_mask(1000, 1000).iter().all(|&m| m == 255));
}

#[test]
fn test_serpentine_maze() {
    // Walls force the region to snake through every row.
    let (w, h) = (16, 15);
    let mut buffer = PixelBuffer::new(w, h, WHITE).unwrap();
    for y in (1..h).step_by(2) {
        let gap = if (y / 2) % 2 == 0 { w - 1 } else { 0 };
        for x in 0..w {
            if x != gap {
                buffer.set(x, y, BLACK);
            }
        }
    }

    let result = flood_fill_detailed(&buffer, 0, 0, &FillOptions::new(RED)).unwrap();
    let expected = buffer.pixels().iter().filter(|&&p| p == WHITE).count();
    assert_eq!(result.pixel_count, expected);
}

#[test]
fn test_independent_fills_in_parallel() {
    let buffers: Vec<PixelBuffer> = (0..8).map(|i| noise_image(40, 40, i)).collect();

    let parallel: Vec<PixelBuffer> = buffers
        .par_iter()
        .map(|b| flood_fill(b, 20, 20, FILL, 6).unwrap())
        .collect();

    for (buffer, filled) in buffers.iter().zip(&parallel) {
        assert_eq!(&flood_fill(buffer, 20, 20, FILL, 6).unwrap(), filled);
    }
}

#[test]
fn test_explicit_reference_color() {
    // Seed sits on a black pixel but the fill targets the white area next to it.
    let mut buffer = PixelBuffer::new(4, 1, WHITE).unwrap();
    buffer.set(0, 0, BLACK);

    let options = FillOptions::new(RED).with_reference(Rgb::from_argb(WHITE));
    let result = flood_fill_detailed(&buffer, 0, 0, &options).unwrap();
    assert_eq!(result.image.pixels(), &[RED, RED, RED, RED]);
}
