//! End-to-end tests of the composition pipeline,
//! run against the assets shipped in `assets/`.

use std::path::PathBuf;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use jobpost::{AssetPaths, BuildError, Engine, JobPost};


fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn engine() -> Engine {
    Engine::with_paths(&AssetPaths::under(assets_root())).unwrap()
}

/// The raw template raster, for comparing untouched pixels.
fn template_raster() -> RgbaImage {
    image::open(assets_root().join("template").join("job_post.png"))
        .unwrap()
        .to_rgba8()
}

/// Encode a solid-color PNG of given size, standing in for an upload.
fn logo_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        .unwrap();
    bytes
}

const RED: [u8; 4] = [255, 0, 0, 255];

fn builder() -> jobpost::Builder {
    JobPost::builder()
        .role("Python Developer")
        .skills("Python, Django, APIs")
        .contact("+91 9016768065")
        .email("jobs@example.com")
        .location("Surat")
}

fn is_reddish(px: &Rgba<u8>) -> bool {
    px.0[0] > 200 && px.0[1] < 60 && px.0[2] < 60
}


#[test]
fn reference_scenario_produces_a_complete_posting() {
    let engine = engine();
    let post = builder()
        .logo(logo_png(400, 400, RED))
        .logo_position(600, 400)
        .logo_max_dimension(300.0)
        .build().unwrap();

    let output = engine.compose(post).unwrap();
    assert!(output.warning().is_none());

    let composed = image::load_from_memory(output.bytes()).unwrap().to_rgba8();
    assert_eq!(engine.template_dimensions(), composed.dimensions());

    // Logo scaled to 300x300 and pasted at (600, 400).
    assert!(is_reddish(composed.get_pixel(750, 550)), "logo center missing");
    assert!(is_reddish(composed.get_pixel(605, 405)), "logo corner missing");
    // Just past the scaled logo the template shows through untouched.
    let template = template_raster();
    assert_eq!(template.get_pixel(950, 550), composed.get_pixel(950, 550));
    assert_eq!(template.get_pixel(750, 750), composed.get_pixel(750, 750));
}

#[test]
fn undecodable_logo_yields_exactly_one_warning_and_a_text_only_image() {
    let engine = engine();
    let post = builder()
        .logo(b"these bytes are no image".to_vec())
        .build().unwrap();

    let output = engine.compose(post).unwrap();
    let warning = output.warning().expect("expected a logo warning");
    assert_eq!("couldn't load the uploaded logo", warning.message());
    assert!(!warning.detail().is_empty());

    // The rest of the output is fully produced: correct dimensions
    // and text drawn over the template.
    let composed = image::load_from_memory(output.bytes()).unwrap().to_rgba8();
    assert_eq!(engine.template_dimensions(), composed.dimensions());

    let template = template_raster();
    let role_band_changed = (1050..1150)
        .flat_map(|y| (210..800).map(move |x| (x, y)))
        .any(|(x, y)| template.get_pixel(x, y) != composed.get_pixel(x, y));
    assert!(role_band_changed, "role text was not drawn");
}

#[test]
fn small_logo_is_never_upscaled() {
    let engine = engine();
    let post = builder()
        .logo(logo_png(100, 100, RED))
        .logo_position(600, 400)
        .logo_max_dimension(300.0)
        .build().unwrap();

    let output = engine.compose(post).unwrap();
    assert!(output.warning().is_none());

    let composed = image::load_from_memory(output.bytes()).unwrap().to_rgba8();
    // Opaque and unscaled: pixels inside the 100x100 region are bit-exact.
    assert_eq!(&Rgba(RED), composed.get_pixel(650, 450));
    assert_eq!(&Rgba(RED), composed.get_pixel(699, 499));
    // One pixel past the original size the template shows through.
    let template = template_raster();
    assert_eq!(template.get_pixel(710, 450), composed.get_pixel(710, 450));
}

#[test]
fn scaling_preserves_aspect_ratio() {
    let engine = engine();
    // 400x200 into a 300px box comes out 300x150.
    let post = builder()
        .logo(logo_png(400, 200, RED))
        .logo_position(600, 400)
        .logo_max_dimension(300.0)
        .build().unwrap();

    let composed = image::load_from_memory(engine.compose(post).unwrap().bytes())
        .unwrap().to_rgba8();
    let template = template_raster();
    assert!(is_reddish(composed.get_pixel(895, 470)));
    // Below the 150px-high scaled logo: untouched template.
    assert_eq!(template.get_pixel(895, 570), composed.get_pixel(895, 570));
    // Right of the 300px-wide scaled logo: untouched template.
    assert_eq!(template.get_pixel(920, 470), composed.get_pixel(920, 470));
}

#[test]
fn out_of_bounds_paste_clips_silently() {
    let engine = engine();
    let (width, height) = engine.template_dimensions();

    // Hanging off the bottom-right corner.
    let post = builder()
        .logo(logo_png(400, 400, RED))
        .logo_position(width as i64 - 40, height as i64 - 20)
        .logo_max_dimension(400.0)
        .build().unwrap();
    let output = engine.compose(post).unwrap();
    assert!(output.warning().is_none());
    let composed = image::load_from_memory(output.bytes()).unwrap().to_rgba8();
    assert_eq!((width, height), composed.dimensions());
    assert_eq!(&Rgba(RED), composed.get_pixel(width - 1, height - 1));

    // Hanging off the top-left corner.
    let post = builder()
        .logo(logo_png(100, 100, RED))
        .logo_position(-50, -50)
        .logo_max_dimension(300.0)
        .build().unwrap();
    let composed = image::load_from_memory(engine.compose(post).unwrap().bytes())
        .unwrap().to_rgba8();
    assert_eq!(&Rgba(RED), composed.get_pixel(0, 0));
    assert_eq!(&Rgba(RED), composed.get_pixel(49, 49));
}

#[test]
fn missing_field_gates_before_composition() {
    let err = builder()
        .location("")
        .logo(logo_png(400, 400, RED))
        .build().unwrap_err();
    assert_eq!(BuildError::MissingFields(vec!["location"]), err);

    // No logo gates too, regardless of the text being complete.
    let err = builder().build().unwrap_err();
    assert_eq!(BuildError::MissingFields(vec!["logo"]), err);
}

#[test]
fn composing_twice_is_bit_for_bit_identical() {
    let engine = engine();
    let make = || builder()
        .logo(logo_png(400, 400, RED))
        .logo_max_dimension(300.0)
        .build().unwrap();

    let first = engine.compose(make()).unwrap();
    let second = engine.compose(make()).unwrap();
    assert_eq!(first.bytes(), second.bytes());
}

#[test]
fn degenerate_bounding_box_still_composes() {
    let engine = engine();
    let post = builder()
        .logo(logo_png(400, 400, RED))
        .logo_max_dimension(0.0)
        .build().unwrap();

    // A zero-sized box degenerates to a 1x1 paste instead of failing.
    let output = engine.compose(post).unwrap();
    assert!(output.warning().is_none());
}

#[test]
fn output_carries_download_metadata() {
    let engine = engine();
    let output = engine.compose(
        builder().logo(logo_png(16, 16, RED)).build().unwrap()).unwrap();

    assert_eq!("job_post.png", output.file_name());
    assert_eq!(mime::IMAGE_PNG, output.mime_type());
    // PNG signature on the actual bytes.
    assert_eq!(&[0x89, b'P', b'N', b'G'], &output.bytes()[..4]);
}
