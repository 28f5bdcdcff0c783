mod contact;
mod education;
mod footer;
mod header;
mod hero;
mod icons;
mod projects;
mod scroll;
mod skills;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#0a0a0a] text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Yordin Borge - {title}") />

        <Router>
            <PointerGlow />
            <header::Header />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </main>
            <footer::Footer />
        </Router>
    }
}

/// The whole site is one page of stacked sections; navigation happens
/// through URL fragments handled by [`scroll::AnchorNavigator`].
#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Data Analyst" />
        <scroll::AnchorNavigator />
        <hero::Hero />
        <projects::Projects />
        <skills::Skills />
        <education::Education />
        <contact::Contact />
    }
}

/// Decorative radial gradient that follows the pointer across the whole
/// page. Non-interactive; every pointer move updates the stored
/// coordinates and the gradient re-renders from them.
#[component]
fn PointerGlow() -> impl IntoView {
    let (position, set_position) = signal((0.0f64, 0.0f64));

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        set_position((ev.client_x() as f64, ev.client_y() as f64));
    });

    view! {
        <div
            class="pointer-events-none fixed inset-0 z-50 transition-opacity duration-300"
            style:background=move || {
                let (x, y) = position.get();
                format!(
                    "radial-gradient(600px circle at {x}px {y}px, rgba(0, 157, 255, 0.1), transparent 40%)"
                )
            }
        ></div>
    }
}
