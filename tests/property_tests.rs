//! Property tests for buffer geometry across arbitrary inputs.

use proptest::prelude::*;

use qrfb::color::Rgb565;
use qrfb::framebuffer::PixelBuffer;
use qrfb::matrix::ModuleMatrix;
use qrfb::render::{self, Canvas, RenderOptions, composite, rasterize, scale};

fn arb_matrix() -> impl Strategy<Value = ModuleMatrix> {
    (0usize..12).prop_flat_map(|n| {
        prop::collection::vec(any::<bool>(), n * n)
            .prop_map(move |cells| ModuleMatrix::new(n, cells).unwrap())
    })
}

fn arb_buffer() -> impl Strategy<Value = PixelBuffer> {
    (0usize..16, 0usize..16).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), w * h * 2)
            .prop_map(move |bytes| PixelBuffer::from_bytes(w, h, bytes).unwrap())
    })
}

proptest! {
    #[test]
    fn rasterize_is_deterministic(m in arb_matrix(), dark in any::<u16>(), light in any::<u16>()) {
        let a = rasterize(&m, Rgb565(dark), Rgb565(light)).unwrap();
        let b = rasterize(&m, Rgb565(dark), Rgb565(light)).unwrap();
        prop_assert_eq!(a.len(), m.size() * m.size() * 2);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn rasterize_maps_each_module(m in arb_matrix()) {
        let buf = rasterize(&m, Rgb565::BLACK, Rgb565::WHITE).unwrap();
        for row in 0..m.size() {
            for col in 0..m.size() {
                let expected = if m.is_dark(row, col).unwrap() { Rgb565::BLACK } else { Rgb565::WHITE };
                prop_assert_eq!(buf.pixel(col, row), Some(expected));
            }
        }
    }

    #[test]
    fn scale_by_one_is_identity(buf in arb_buffer()) {
        prop_assert_eq!(scale(&buf, 1.0).unwrap(), buf);
    }

    #[test]
    fn scaled_length_matches_floor(buf in arb_buffer(), s in 0.01f64..6.0) {
        let out = scale(&buf, s).unwrap();
        let w = (buf.width() as f64 * s).floor() as usize;
        let h = (buf.height() as f64 * s).floor() as usize;
        prop_assert_eq!((out.width(), out.height()), (w, h));
        prop_assert_eq!(out.len(), w * h * 2);
    }

    #[test]
    fn scaled_pixels_come_from_source(buf in arb_buffer(), s in 0.01f64..6.0) {
        let out = scale(&buf, s).unwrap();
        for y in 0..out.height() {
            for x in 0..out.width() {
                let sx = ((x as f64 / s).floor() as usize).min(buf.width() - 1);
                let sy = ((y as f64 / s).floor() as usize).min(buf.height() - 1);
                prop_assert_eq!(out.pixel_bytes(x, y), buf.pixel_bytes(sx, sy));
            }
        }
    }

    #[test]
    fn integer_upscale_replicates_blocks(buf in arb_buffer(), k in 1usize..5) {
        let out = scale(&buf, k as f64).unwrap();
        for y in 0..out.height() {
            for x in 0..out.width() {
                prop_assert_eq!(out.pixel_bytes(x, y), buf.pixel_bytes(x / k, y / k));
            }
        }
    }

    #[test]
    fn composite_centers_and_clips(
        fg in arb_buffer(),
        cw in 0usize..24,
        ch in 0usize..24,
    ) {
        let canvas = Canvas::new(cw, ch, Rgb565::BLUE);
        let out = composite(&fg, &canvas).unwrap();
        prop_assert_eq!((out.width(), out.height()), (cw, ch));
        prop_assert_eq!(out.len(), cw * ch * 2);

        let x_off = (cw as i64 - fg.width() as i64).div_euclid(2);
        let y_off = (ch as i64 - fg.height() as i64).div_euclid(2);
        for y in 0..ch {
            for x in 0..cw {
                let fx = x as i64 - x_off;
                let fy = y as i64 - y_off;
                let inside = fx >= 0 && fy >= 0
                    && (fx as usize) < fg.width() && (fy as usize) < fg.height();
                let expected = if inside {
                    fg.pixel_bytes(fx as usize, fy as usize)
                } else {
                    Some(Rgb565::BLUE.to_le_bytes())
                };
                prop_assert_eq!(out.pixel_bytes(x, y), expected);
            }
        }
    }

    #[test]
    fn render_always_fills_canvas(m in arb_matrix(), s in 0.1f64..30.0) {
        let opts = RenderOptions {
            canvas_width: 64,
            canvas_height: 48,
            ..RenderOptions::default()
        }
        .with_scale(s);
        let frame = render::render(&m, &opts).unwrap();
        prop_assert_eq!(frame.len(), 64 * 48 * 2);
    }

    #[test]
    fn non_positive_scale_is_rejected(buf in arb_buffer(), s in -10.0f64..=0.0) {
        prop_assert!(scale(&buf, s).is_err());
    }
}
