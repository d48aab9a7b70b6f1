//! Statistics strip.

use leptos::prelude::*;

use crate::config::STATS;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class=css::stats>
            {STATS
                .iter()
                .map(|stat| view! {
                    <div class=css::stat>
                        <span class=css::statValue>
                            {stat.value} {stat.suffix}
                        </span>
                        <span class=css::statLabel>{stat.label}</span>
                    </div>
                })
                .collect_view()}
        </section>
    }
}
