//! Browser-facing hooks shared by the animating sections.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList,
};
use yew::prelude::*;

use crate::animations::phase::Phase;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Portion of the element that must be on screen before it counts as seen.
const IN_VIEW_THRESHOLD: f64 = 0.3;
/// Pulls the trigger line 50px inside the viewport edges.
const IN_VIEW_MARGIN: &str = "-50px";

fn reduced_motion_list() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok()?
}

fn query_reduced_motion() -> bool {
    reduced_motion_list().map(|list| list.matches()).unwrap_or(false)
}

/// OS-level reduced-motion preference. Queried fresh on every mount and kept
/// in sync with live preference changes; defaults to full motion when the
/// media query is unavailable.
#[hook]
pub fn use_reduced_motion() -> bool {
    let prefers = use_state_eq(query_reduced_motion);

    {
        let prefers = prefers.clone();
        use_effect_with_deps(
            move |_| {
                let list = reduced_motion_list();
                let on_change = Closure::wrap(Box::new(move || {
                    prefers.set(query_reduced_motion());
                }) as Box<dyn FnMut()>);

                if let Some(list) = &list {
                    let _ = list.add_event_listener_with_callback(
                        "change",
                        on_change.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(list) = list {
                        let _ = list.remove_event_listener_with_callback(
                            "change",
                            on_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *prefers
}

/// Flips to true the first time `node` is at least 30% inside the viewport
/// (with a 50px inward margin), then stays true; later intersection events
/// are ignored. The observer is disconnected on unmount whether or not it
/// ever fired.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut gate = Phase::default();
                let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                    let seen = entries.iter().any(|entry| {
                        entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting()
                    });
                    if seen && gate.start() {
                        gate.finish();
                        visible.set(true);
                    }
                }) as Box<dyn FnMut(js_sys::Array)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(IN_VIEW_THRESHOLD));
                options.set_root_margin(IN_VIEW_MARGIN);

                let observer = IntersectionObserver::new_with_options(
                    on_intersect.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                if let (Some(observer), Some(element)) = (&observer, node.cast::<Element>()) {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            node,
        );
    }

    *visible
}
