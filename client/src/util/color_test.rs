use super::*;

fn solid(width: u32, height: u32, rgb: Rgb) -> Vec<u8> {
    (0..width * height).flat_map(|_| [rgb.r, rgb.g, rgb.b, 255]).collect()
}

#[test]
fn rgb_to_hsl_black_and_white_are_achromatic() {
    assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 0)), Hsl { h: 0, s: 0, l: 0 });
    assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)), Hsl { h: 0, s: 0, l: 100 });
}

#[test]
fn rgb_to_hsl_primaries() {
    assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl { h: 0, s: 100, l: 50 });
    assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl { h: 120, s: 100, l: 50 });
    assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl { h: 240, s: 100, l: 50 });
}

#[test]
fn rgb_to_hsl_wraps_hue_when_blue_exceeds_green() {
    // Magenta: red is max, g < b adds a full turn before dividing.
    assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 255)), Hsl { h: 300, s: 100, l: 50 });
}

#[test]
fn rgb_to_hsl_light_and_dark_saturation_branches() {
    // l > 0.5 uses d / (2 - max - min).
    assert_eq!(rgb_to_hsl(Rgb::new(255, 128, 128)), Hsl { h: 0, s: 100, l: 75 });
    // l <= 0.5 uses d / (max + min).
    assert_eq!(rgb_to_hsl(Rgb::new(128, 0, 0)), Hsl { h: 0, s: 100, l: 25 });
}

#[test]
fn rgb_to_hsl_mid_gray() {
    assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl { h: 0, s: 0, l: 50 });
}

#[test]
fn css_value_uses_space_separated_triplet() {
    assert_eq!(Hsl { h: 210, s: 40, l: 50 }.css_value(), "210 40% 50%");
    assert_eq!(FALLBACK_BACKGROUND.css_value(), "36 33% 97%");
}

#[test]
fn average_rgb_rounds_per_channel() {
    let avg = average_rgb(&[Rgb::new(0, 10, 255), Rgb::new(1, 20, 0)]);
    assert_eq!(avg, Some(Rgb::new(1, 15, 128)));
    assert_eq!(average_rgb(&[]), None);
}

#[test]
fn pixel_buffer_rejects_wrong_length() {
    let data = vec![0u8; 7];
    assert_eq!(
        PixelBuffer::new(1, 2, &data).unwrap_err(),
        SampleError::BufferSize { expected: 8, actual: 7 }
    );
}

#[test]
fn pixel_buffer_reads_row_major_and_ignores_alpha() {
    let data = [1, 2, 3, 0, 4, 5, 6, 10, 7, 8, 9, 20, 10, 11, 12, 30];
    let buffer = PixelBuffer::new(2, 2, &data).unwrap();
    assert_eq!(buffer.pixel(1, 0).unwrap(), Rgb::new(4, 5, 6));
    assert_eq!(buffer.pixel(0, 1).unwrap(), Rgb::new(7, 8, 9));
    assert!(matches!(buffer.pixel(2, 0), Err(SampleError::OutOfBounds { x: 2, y: 0, .. })));
}

#[test]
fn sample_theme_black_image_has_zero_lightness() {
    let plan = SamplePlan::Points;
    let size = plan.canvas_size();
    let data = solid(size, size, Rgb::new(0, 0, 0));
    let buffer = PixelBuffer::new(size, size, &data).unwrap();
    let hsl = sample_theme(&buffer, &plan.points()).unwrap();
    assert_eq!((hsl.s, hsl.l), (0, 0));
}

#[test]
fn sample_theme_white_image_has_full_lightness() {
    let plan = SamplePlan::Downscale;
    let data = solid(1, 1, Rgb::new(255, 255, 255));
    let buffer = PixelBuffer::new(1, 1, &data).unwrap();
    let hsl = sample_theme(&buffer, &plan.points()).unwrap();
    assert_eq!((hsl.s, hsl.l), (0, 100));
}

#[test]
fn sample_theme_averages_multiple_points() {
    let mut data = solid(2, 1, Rgb::new(0, 0, 0));
    data[4..7].copy_from_slice(&[255, 255, 255]);
    let buffer = PixelBuffer::new(2, 1, &data).unwrap();
    let hsl = sample_theme(&buffer, &[(0, 0), (1, 0)]).unwrap();
    assert_eq!(hsl, Hsl { h: 0, s: 0, l: 50 });
}

#[test]
fn sample_theme_errors_on_empty_and_out_of_bounds() {
    let data = solid(1, 1, Rgb::new(9, 9, 9));
    let buffer = PixelBuffer::new(1, 1, &data).unwrap();
    assert_eq!(sample_theme(&buffer, &[]), Err(SampleError::EmptySample));
    assert!(matches!(sample_theme(&buffer, &[(0, 3)]), Err(SampleError::OutOfBounds { .. })));
}

#[test]
fn sample_plan_points_fit_their_canvas() {
    for plan in [SamplePlan::Downscale, SamplePlan::Points] {
        let size = plan.canvas_size();
        assert!(plan.points().iter().all(|&(x, y)| x < size && y < size));
    }
    assert_eq!(SamplePlan::Points.points().len(), 5);
}

#[test]
fn theme_or_fallback_replaces_errors() {
    assert_eq!(theme_or_fallback(Err(SampleError::ImageLoad("404".into()))), FALLBACK_BACKGROUND);
    assert_eq!(theme_or_fallback(Err(SampleError::Browser("SecurityError".into()))), FALLBACK_BACKGROUND);
    let ok = Hsl { h: 1, s: 2, l: 3 };
    assert_eq!(theme_or_fallback(Ok(ok)), ok);
}
