use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::ScrollTuning;
use crate::scroll::measure;
use crate::scroll::selector::{select_image, ImageSlot};

const WINDOW_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Tracks which showcase image to show while the page scrolls.
///
/// The selection is recomputed once on mount and then on every window scroll
/// and resize. Listeners are removed when the calling component unmounts.
#[hook]
pub fn use_scroll_image(section: NodeRef, container: NodeRef, tuning: ScrollTuning) -> ImageSlot {
    let slot = use_state_eq(ImageSlot::default);

    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |tuning: &ScrollTuning| {
                let tuning = *tuning;
                let last = Rc::new(Cell::new(ImageSlot::default()));
                let recompute: Rc<dyn Fn()> = Rc::new(move || {
                    match measure::sample(&section, &container) {
                        Ok(sample) => {
                            // Narrow layout without a mounted container keeps the current image.
                            if let Some(next) = select_image(&sample, &tuning) {
                                if last.replace(next) != next {
                                    log::debug!(
                                        "Showcase image -> {:?} (scroll_y={}, width={})",
                                        next,
                                        sample.viewport.scroll_y,
                                        sample.viewport.width
                                    );
                                }
                                slot.set(next);
                            }
                        }
                        Err(e) => log::debug!("Skipping image selection: {}", e),
                    }
                });

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let recompute = recompute.clone();
                        move || recompute()
                    });
                    for event in WINDOW_EVENTS {
                        if let Err(e) = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        {
                            log::error!("Failed to listen for {} events: {:?}", event, e);
                        }
                    }
                    log::info!("Scroll image tracking started");
                    // Initial pass
                    recompute();
                    Box::new(move || {
                        for event in WINDOW_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                        log::info!("Scroll image tracking stopped");
                    })
                } else {
                    log::warn!("No window available, scroll image tracking disabled");
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            tuning,
        );
    }

    *slot
}
