//! Hero for the template page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/stack/stack.module.css");

struct HeroStat {
    icon: icondata::Icon,
    value: &'static str,
    label: &'static str,
}

const HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        icon: ic::LAYERS,
        value: "200+",
        label: "Templates",
    },
    HeroStat {
        icon: ic::ROCKET,
        value: "Fast",
        label: "Responsive",
    },
    HeroStat {
        icon: ic::PALETTE,
        value: "Custom",
        label: "Designs",
    },
];

#[component]
pub fn TemplateHero() -> impl IntoView {
    view! {
        <section class=css::hero>
            <span class=css::heroBadge>
                <span class=css::heroPulse></span>
                <span class=css::heroBadgeTag>"New"</span>
                "Fresh templates every week"
            </span>
            <h1 class=css::heroTitle>
                "Let's start looking for your favorite template"
            </h1>
            <p class=css::heroSubtitle>
                "Discover a vast library of ready-to-use navbar templates to \
                 accelerate your development and unlock your creative potential."
            </p>
            <div class=css::heroActions>
                <button class=css::heroPrimary on:click=move |_| Route::Playground.push()>
                    <Icon icon=ic::SPARKLES />
                    "Try for free"
                </button>
            </div>
            <div class=css::heroStats>
                {HERO_STATS
                    .iter()
                    .map(|stat| view! {
                        <div class=css::heroStat>
                            <Icon icon=stat.icon />
                            <span class=css::heroStatValue>{stat.value}</span>
                            <span class=css::heroStatLabel>{stat.label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <p class=css::heroTrust>
                "Trusted by " <strong>"10,000+"</strong> " developers worldwide"
            </p>
        </section>
    }
}
