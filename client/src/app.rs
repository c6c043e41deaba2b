//! Root application component, routing, and the SSR document shell.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::landing::LandingPage;
use crate::state::toast::ToastState;
use crate::util::seo::{HeadElement, HeadModel, MetaAttr};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `head` carries the page metadata so crawlers get it without running WASM.
pub fn shell(options: LeptosOptions, head: HeadModel) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {head.into_elements().into_iter().map(head_element).collect_view()}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn head_element(element: HeadElement) -> AnyView {
    match element {
        HeadElement::Title(text) => view! { <title>{text}</title> }.into_any(),
        HeadElement::Meta { attr: MetaAttr::Name, key, content } => {
            view! { <meta name=key content=content/> }.into_any()
        }
        HeadElement::Meta { attr: MetaAttr::Property, key, content } => {
            leptos::html::meta()
                .attr("property", key)
                .attr("content", content)
                .into_any()
        }
        HeadElement::Link { rel, href } => view! { <link rel=rel href=href/> }.into_any(),
        HeadElement::Script { id, kind, text } => {
            view! { <script id=id type=kind inner_html=text></script> }.into_any()
        }
    }
}

/// Root application component.
///
/// Provides the toast queue and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/vorrenti.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <LandingPage/> }/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
