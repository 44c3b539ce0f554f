use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

/// Fraction of the viewport height an element must climb above before it
/// is revealed.
const REVEAL_THRESHOLD: f64 = 0.9;

fn reveal_visible(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Ok(pending) = document.query_selector_all(".reveal:not(.visible)") else {
        return;
    };

    for i in 0..pending.length() {
        let Some(element) = pending.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if element.get_bounding_client_rect().top() < viewport * REVEAL_THRESHOLD {
            // once visible, always visible
            let _ = element.class_list().add_1("visible");
        }
    }
}

/// Adds `visible` to every `.reveal` element as it scrolls into view. The CSS
/// owns the actual transition.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    reveal_visible(&window_clone);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                // Initial check for content already on screen
                reveal_visible(window);
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}
