//! The coming-soon landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/`. The server renders the full page including head metadata
//! and a fallback background; after hydration the page re-applies the
//! metadata against the real URL and samples the logo for its accent color.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::html;
use leptos::prelude::*;

use crate::components::signup_form::SignupForm;
use crate::content;
use crate::util::color::SamplePlan;
use crate::util::seo::{PageMetadata, apply_to_document};
use crate::util::theme::initial_background_style;

/// Footer copyright line.
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", content::BRAND_NAME)
}

/// Year shown when neither the server clock nor the browser clock is compiled in.
#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
const FALLBACK_YEAR: i32 = 2026;

// UTC on both sides so the hydrated footer agrees with the server render.
fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or_default()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        time::OffsetDateTime::now_utc().year()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        FALLBACK_YEAR
    }
}

/// `sample_plan` picks how the logo is reduced to the page background color.
#[component]
pub fn LandingPage(#[prop(optional)] sample_plan: SamplePlan) -> impl IntoView {
    let wrapper = NodeRef::<html::Div>::new();

    Effect::new(move |_| apply_to_document(&PageMetadata::vorrenti()));

    #[cfg(not(feature = "hydrate"))]
    let _ = sample_plan;

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(el) = wrapper.get() {
            crate::util::theme::sample_logo_into(&el, content::LOGO_SRC, sample_plan);
        }
    });

    view! {
        <div node_ref=wrapper class="landing" style=initial_background_style()>
            <header class="landing__header">
                <nav aria-label="Main navigation" class="landing__nav">
                    <img src=content::LOGO_SRC alt=content::LOGO_ALT loading="lazy" class="landing__logo"/>
                </nav>
            </header>

            <main class="landing__main">
                <h1 class="sr-only">{content::HEADING}</h1>
                <section>
                    <aside class="landing__hero">
                        <img src=content::HERO_SRC alt=content::HERO_ALT loading="lazy" class="landing__hero-image"/>
                    </aside>
                </section>
                <section class="landing__signup">
                    <SignupForm/>
                </section>
            </main>

            <footer class="landing__footer">
                <p>{copyright_line(current_year())}</p>
            </footer>
        </div>
    }
}
