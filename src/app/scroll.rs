use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::anchor::{AnchorRetry, RetryStep, HEADER_OFFSET_PX, MAX_ATTEMPTS, RETRY_INTERVAL_MS};

/// Brings the section named by the URL fragment into view, below the fixed
/// header.
///
/// The target element can appear late (layout still settling on load), so
/// each fragment change starts a bounded polling schedule; a fragment that
/// never resolves exhausts its retries silently. A new fragment supersedes
/// any schedule still running, and unmount cancels the interval outright.
#[component]
pub fn AnchorNavigator() -> impl IntoView {
    let hash = use_location().hash;
    let retry = StoredValue::new(AnchorRetry::default());
    let polling = RwSignal::new(false);

    let check_target = move || {
        let fragment = hash.get_untracked();
        let fragment = fragment.trim_start_matches('#');
        if fragment.is_empty() {
            polling.set(false);
            return;
        }
        let target = document().get_element_by_id(fragment);
        let step = retry
            .try_update_value(|r| r.step(target.is_some()))
            .unwrap_or(RetryStep::GiveUp);
        match step {
            RetryStep::Scroll => {
                if let Some(el) = target {
                    scroll_below_header(&el);
                }
                polling.set(false);
            }
            RetryStep::Wait => {}
            RetryStep::GiveUp => {
                log::debug!("anchor target #{fragment} never appeared");
                polling.set(false);
            }
        }
    };

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        check_target,
        RETRY_INTERVAL_MS,
        UseIntervalFnOptions::default().immediate(false),
    );

    // Every fragment change (including one present on first load) starts a
    // fresh schedule, superseding whatever was still polling.
    Effect::watch(
        move || hash.get(),
        move |_, _, _| {
            retry.set_value(AnchorRetry::new(MAX_ATTEMPTS));
            polling.set(true);
            check_target();
        },
        true,
    );

    {
        let pause = pause.clone();
        let resume = resume.clone();
        Effect::new(move |_| {
            if polling.get() {
                resume();
            } else {
                pause();
            }
        });
    }
    on_cleanup(move || pause());
}

fn scroll_below_header(el: &web_sys::Element) {
    let rect = el.get_bounding_client_rect();
    let scrolled = window().scroll_y().unwrap_or(0.0);
    let top = (rect.top() + scrolled - HEADER_OFFSET_PX).max(0.0);
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}
