//! "Scroll to top" panel, shown once the page is scrolled down.

use leptos::*;
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollToOptions};

use crate::config::SCROLL_PANEL_THRESHOLD_PX;

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let offset = gloo_utils::window().page_y_offset().unwrap_or(0.0);
        set_visible.set(offset > SCROLL_PANEL_THRESHOLD_PX);
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <div
            class=move || if visible.get() { "scroll-to-top-panel visible" } else { "scroll-to-top-panel" }
            role="button"
            tabindex="0"
            title="Scroll to top"
            on:click=move |_| scroll_to_top()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    scroll_to_top();
                }
            }
        >
            <span class="scroll-to-top-text">"Top"</span>
            <span class="scroll-to-top-arrow">"↑"</span>
        </div>
    }
}
