use web_sys::{Element, Window};
use yew::NodeRef;

use crate::error::MeasureError;
use crate::scroll::selector::{ElementBox, ScrollSample, Viewport};

fn dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, name: &'static str) -> Result<f64, MeasureError> {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or(MeasureError::Viewport(name))
}

pub fn viewport(window: &Window) -> Result<Viewport, MeasureError> {
    Ok(Viewport {
        scroll_y: window.scroll_y().map_err(|_| MeasureError::Viewport("scroll offset"))?,
        width: dimension(window.inner_width(), "width")?,
        height: dimension(window.inner_height(), "height")?,
    })
}

fn element_box(element: &Element) -> ElementBox {
    let rect = element.get_bounding_client_rect();
    ElementBox {
        top: rect.top(),
        height: rect.height(),
    }
}

/// Reads the current geometry of the tracked section and its image container.
///
/// The section must be mounted. A missing container is not an error here; the
/// selector decides whether it needs one for the active layout.
pub fn sample(section: &NodeRef, container: &NodeRef) -> Result<ScrollSample, MeasureError> {
    let window = web_sys::window().ok_or(MeasureError::NoWindow)?;
    let section = section
        .cast::<Element>()
        .ok_or(MeasureError::Unmounted("features section"))?;

    Ok(ScrollSample {
        viewport: viewport(&window)?,
        section: element_box(&section),
        container: container.cast::<Element>().map(|el| element_box(&el)),
    })
}
