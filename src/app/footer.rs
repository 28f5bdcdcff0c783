use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::icons;

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.with_timezone(&Utc).year())
        .unwrap_or(2026)
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-white/10 py-10 mt-12">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-white/50">
                    {format!("\u{a9} {} Yordin Borge. Built with Rust and Leptos.", build_year())}
                </p>
                <div class="flex items-center gap-4">
                    <a
                        href="https://github.com/YordinZ"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                        class="w-5 h-5 text-white/50 hover:text-cyan-400 transition-colors"
                    >
                        {icons::github()}
                    </a>
                    <a
                        href="https://linkedin.com/in/yordinborge"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn"
                        class="w-5 h-5 text-white/50 hover:text-cyan-400 transition-colors"
                    >
                        {icons::linkedin()}
                    </a>
                    <a
                        href="mailto:yordin.borge@gmail.com"
                        aria-label="Email"
                        class="w-5 h-5 text-white/50 hover:text-cyan-400 transition-colors"
                    >
                        {icons::mail()}
                    </a>
                </div>
            </div>
        </footer>
    }
}
