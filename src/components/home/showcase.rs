//! Video showcase that plays only while on screen.
//!
//! An intersection observer starts the (muted) video once half of it is
//! visible and pauses it again when it scrolls away. The overlay button
//! lets the user override either way; the override only lasts until the
//! next visibility change, matching how most video sections behave.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::components::icons as ic;
use crate::config::{SHOWCASE_VIDEO_URL, SHOWCASE_VISIBILITY_THRESHOLD};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn Showcase() -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let playing = RwSignal::new(false);

    let apply = move |should_play: bool| {
        if let Some(video) = video_ref.get_untracked() {
            if should_play {
                let _ = video.play();
            } else {
                let _ = video.pause();
            }
            playing.set(should_play);
        }
    };

    // Autoplay needs these set before the first play(); the loop keeps the
    // clip running while it stays visible.
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            video.set_muted(true);
            video.set_loop(true);
        }
    });

    use_intersection_observer_with_options(
        video_ref,
        move |entries, _| {
            let visible = entries.first().is_some_and(|e| e.is_intersecting());
            apply(visible);
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![SHOWCASE_VISIBILITY_THRESHOLD]),
    );

    view! {
        <section class=css::showcase>
            <h2 class=css::sectionTitle>"See it in action"</h2>
            <div class=css::showcaseFrame>
                <video
                    node_ref=video_ref
                    class=css::showcaseVideo
                    src=SHOWCASE_VIDEO_URL
                    playsinline=true
                    preload="metadata"
                ></video>
                <button
                    class=css::showcaseToggle
                    aria-label=move || if playing.get() { "Pause video" } else { "Play video" }
                    on:click=move |_| apply(!playing.get_untracked())
                >
                    {move || if playing.get() {
                        view! { <Icon icon=ic::PAUSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::PLAY /> }.into_any()
                    }}
                </button>
            </div>
        </section>
    }
}
