//! Testimonial carousel.
//!
//! Auto-advances every [`TESTIMONIAL_INTERVAL_MS`] while play is on. The
//! interval is an owned handle: toggling play cancels or recreates it, and
//! teardown cancels it, so a stale tick can never advance an unmounted
//! carousel. Arrow keys and the dots jump directly; both wrap around.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_document, use_event_listener};

use crate::components::icons as ic;
use crate::config::{TESTIMONIALS, TESTIMONIAL_INTERVAL_MS};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn Testimonials() -> impl IntoView {
    let current = RwSignal::new(0usize);
    let playing = RwSignal::new(true);
    let handle: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    let prev = move || current.update(|i| *i = (*i + TESTIMONIALS.len() - 1) % TESTIMONIALS.len());
    let next = move || current.update(|i| *i = (*i + 1) % TESTIMONIALS.len());

    // Recreate or drop the interval whenever play is toggled.
    Effect::new(move |_| {
        let fresh = playing.get().then(|| {
            Interval::new(TESTIMONIAL_INTERVAL_MS, move || {
                let _ = current.try_update(|i| *i = (*i + 1) % TESTIMONIALS.len());
            })
        });
        if let Some(old) = handle.try_update_value(|h| std::mem::replace(h, fresh)).flatten() {
            old.cancel();
        }
    });

    on_cleanup(move || {
        if let Some(old) = handle.try_update_value(|h| h.take()).flatten() {
            old.cancel();
        }
    });

    let _ = use_event_listener(
        use_document(),
        leptos::ev::keydown,
        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
            "ArrowLeft" => prev(),
            "ArrowRight" => next(),
            _ => {}
        },
    );

    let entry = move || TESTIMONIALS[current.get()];

    view! {
        <section class=css::testimonials>
            <h2 class=css::sectionTitle>"What developers say"</h2>
            <div class=css::testimonialCard>
                <div class=css::testimonialStars>
                    {move || (0..entry().rating)
                        .map(|_| view! { <Icon icon=ic::STAR /> })
                        .collect_view()}
                </div>
                <blockquote class=css::testimonialQuote>
                    {move || entry().quote}
                </blockquote>
                <p class=css::testimonialBody>{move || entry().description}</p>
                <div class=css::testimonialAuthor>
                    <span class=css::testimonialName>{move || entry().author}</span>
                    <span class=css::testimonialRole>{move || entry().role}</span>
                </div>
            </div>
            <div class=css::testimonialControls>
                <button class=css::carouselButton aria-label="Previous" on:click=move |_| prev()>
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <div class=css::dots>
                    {(0..TESTIMONIALS.len())
                        .map(|i| {
                            let class = move || {
                                if current.get() == i {
                                    format!("{} {}", css::dot, css::dotActive)
                                } else {
                                    css::dot.to_string()
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    aria-label=format!("Testimonial {}", i + 1)
                                    on:click=move |_| current.set(i)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
                <button class=css::carouselButton aria-label="Next" on:click=move |_| next()>
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
                <button
                    class=css::carouselButton
                    aria-label=move || if playing.get() { "Pause carousel" } else { "Play carousel" }
                    on:click=move |_| playing.update(|p| *p = !*p)
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
