//! Logo scaling: fit the uploaded image into its bounding box.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::debug;


/// Compute the dimensions of a logo scaled to fit a square bounding box
/// of side `max_dimension`, preserving aspect ratio.
///
/// The scale factor is capped at 1.0: a logo already smaller than the box
/// on both axes keeps its original size. Results are rounded to the nearest
/// pixel, with a minimum of 1px per axis.
pub(crate) fn fit_within((width, height): (u32, u32), max_dimension: f32) -> (u32, u32) {
    let scale = (max_dimension / width as f32)
        .min(max_dimension / height as f32)
        .min(1.0);
    let fitted_width = ((width as f32 * scale).round() as u32).max(1);
    let fitted_height = ((height as f32 * scale).round() as u32).max(1);
    (fitted_width, fitted_height)
}

/// Scale the logo to fit the bounding box, using a high-quality filter.
///
/// When the target size equals the original size (the no-upscale case),
/// the logo is returned untouched so its pixels stay bit-exact.
pub(super) fn fit(logo: RgbaImage, max_dimension: f32) -> RgbaImage {
    let (orig_width, orig_height) = logo.dimensions();
    let (width, height) = fit_within((orig_width, orig_height), max_dimension);
    if (width, height) == (orig_width, orig_height) {
        debug!("Using original logo size of {}x{}", orig_width, orig_height);
        return logo;
    }
    debug!("Scaling logo from {}x{} to {}x{}",
        orig_width, orig_height, width, height);
    imageops::resize(&logo, width, height, FilterType::Lanczos3)
}


#[cfg(test)]
mod tests {
    use super::fit_within;

    #[test]
    fn shrinks_to_the_bounding_box() {
        assert_eq!((300, 300), fit_within((400, 400), 300.0));
        assert_eq!((300, 150), fit_within((400, 200), 300.0));
        assert_eq!((150, 300), fit_within((200, 400), 300.0));
    }

    #[test]
    fn never_upscales() {
        assert_eq!((100, 100), fit_within((100, 100), 300.0));
        assert_eq!((250, 80), fit_within((250, 80), 300.0));
        // Smaller on one axis only still means shrinking.
        assert_eq!((300, 60), fit_within((500, 100), 300.0));
    }

    #[test]
    fn exact_fit_is_identity() {
        assert_eq!((300, 300), fit_within((300, 300), 300.0));
    }

    #[test]
    fn preserves_aspect_ratio_within_a_pixel() {
        for &(w, h) in &[(400u32, 300u32), (1024, 768), (333, 77), (1920, 1080)] {
            for &max in &[50.0f32, 120.0, 299.0, 300.0] {
                let (fw, fh) = fit_within((w, h), max);
                let original = w as f32 / h as f32;
                let fitted = fw as f32 / fh as f32;
                // Both axes are rounded independently, so allow 1px of slack
                // on the reconstructed ratio.
                let tolerance = original * (1.0 / fw.min(fh) as f32 + 0.5 / fw.max(fh) as f32);
                assert!((original - fitted).abs() <= tolerance,
                    "{}x{} within {} -> {}x{} (ratio {} vs {})",
                    w, h, max, fw, fh, original, fitted);
            }
        }
    }

    #[test]
    fn degenerate_bounding_box_yields_a_single_pixel() {
        assert_eq!((1, 1), fit_within((400, 400), 0.0));
        assert_eq!((1, 1), fit_within((400, 400), -10.0));
    }

    #[test]
    fn rounds_to_nearest_pixel() {
        // 350/400 = 0.875; 175 * 0.875 = 153.125 -> 153
        assert_eq!((350, 153), fit_within((400, 175), 350.0));
        // 300/401 scale on the long axis: 200 * (300/401) = 149.6 -> 150
        assert_eq!((150, 300), fit_within((200, 401), 300.0));
    }
}
