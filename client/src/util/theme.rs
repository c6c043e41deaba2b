//! Browser glue for the logo-derived background color.
//!
//! Loads the logo into an offscreen image, draws it onto a canvas sized by
//! the [`SamplePlan`](super::color::SamplePlan), and writes the sampled color to `--background` on the
//! page wrapper. Any failure (load error, tainted canvas, missing 2d context)
//! writes [`FALLBACK_BACKGROUND`] instead and is only logged at debug level.
//!
//! TRADE-OFFS
//! ==========
//! Purely cosmetic. The server renders the fallback up front, so the page is
//! correct without WASM and sampling only refines it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use super::color::{PixelBuffer, SampleError, SamplePlan, sample_theme, theme_or_fallback};
use super::color::{FALLBACK_BACKGROUND, Hsl};

/// CSS custom property consumed by the stylesheet's page background.
pub const BACKGROUND_PROPERTY: &str = "--background";

/// Inline style declaring the background property, for server rendering.
#[must_use]
pub fn background_style(hsl: Hsl) -> String {
    format!("{BACKGROUND_PROPERTY}: {}", hsl.css_value())
}

/// Inline style used before sampling completes.
#[must_use]
pub fn initial_background_style() -> String {
    background_style(FALLBACK_BACKGROUND)
}

/// Write `hsl` into the background property of `target`.
#[cfg(feature = "hydrate")]
pub fn apply_background(target: &web_sys::HtmlElement, hsl: Hsl) {
    if let Err(e) = target.style().set_property(BACKGROUND_PROPERTY, &hsl.css_value()) {
        log::debug!("failed to set {BACKGROUND_PROPERTY}: {e:?}");
    }
}

/// Load `src`, sample it per `plan`, and apply the result to `target`.
#[cfg(feature = "hydrate")]
pub fn sample_logo_into(target: &web_sys::HtmlElement, src: &str, plan: SamplePlan) {
    let image = match web_sys::HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            log::debug!("image element unavailable: {e:?}");
            apply_background(target, FALLBACK_BACKGROUND);
            return;
        }
    };

    let loaded = image.clone();
    let load_target = target.clone();
    let on_load = Closure::once_into_js(move || {
        let sampled = read_theme(&loaded, plan).inspect_err(|e| log::debug!("logo sampling failed: {e}"));
        apply_background(&load_target, theme_or_fallback(sampled));
    });

    let error_target = target.clone();
    let failed_src = src.to_owned();
    let on_error = Closure::once_into_js(move || {
        log::debug!("{}", SampleError::ImageLoad(failed_src));
        apply_background(&error_target, FALLBACK_BACKGROUND);
    });

    image.set_onload(Some(on_load.unchecked_ref()));
    image.set_onerror(Some(on_error.unchecked_ref()));
    image.set_src(src);
}

#[cfg(feature = "hydrate")]
fn read_theme(image: &web_sys::HtmlImageElement, plan: SamplePlan) -> Result<Hsl, SampleError> {
    let browser = |e: JsValue| SampleError::Browser(format!("{e:?}"));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SampleError::Browser("no document".to_owned()))?;
    let canvas = document
        .create_element("canvas")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| SampleError::Browser("canvas element has unexpected type".to_owned()))?;

    let size = plan.canvas_size();
    canvas.set_width(size);
    canvas.set_height(size);

    let ctx = canvas
        .get_context("2d")
        .map_err(browser)?
        .ok_or_else(|| SampleError::Browser("2d context unavailable".to_owned()))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| SampleError::Browser("2d context has unexpected type".to_owned()))?;

    let edge = f64::from(size);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, edge, edge)
        .map_err(browser)?;
    // Throws a SecurityError for cross-origin logos without CORS headers.
    let pixels = ctx.get_image_data(0.0, 0.0, edge, edge).map_err(browser)?.data();

    let buffer = PixelBuffer::new(size, size, &pixels.0)?;
    sample_theme(&buffer, &plan.points())
}
