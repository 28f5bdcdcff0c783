use leptos::prelude::*;

use super::icons;

/// Section anchors in page order. The fragment ids must match the `id`
/// attributes on the section elements.
const NAV_LINKS: [(&str, &str); 4] = [
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Education", "#education"),
    ("Contact", "#contact"),
];

/// Fixed translucent navigation bar.
///
/// On small screens the links collapse behind a disclosure button; the
/// open/closed state is a single boolean and selecting any link closes it.
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-black/50 backdrop-blur-xl border-b border-white/10">
            <div class="mx-auto max-w-7xl px-6 py-4 flex items-center justify-between">
                <a href="#home" class="text-2xl font-black tracking-tight">
                    <span class="bg-gradient-to-r from-cyan-400 to-fuchsia-500 bg-clip-text text-transparent">
                        "YB"
                    </span>
                </a>
                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    class="text-sm font-medium text-white/60 hover:text-white transition-colors"
                                >
                                    {label}
                                </a>
                            }
                        })}
                </nav>
                <button
                    type="button"
                    class="md:hidden w-8 h-8 text-white/80 hover:text-white"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icons::close() } else { icons::menu() }}
                </button>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <nav class="md:hidden px-6 pb-4 flex flex-col gap-3 bg-black/70 backdrop-blur-xl">
                                {NAV_LINKS
                                    .map(|(label, href)| {
                                        view! {
                                            <a
                                                href=href
                                                class="text-sm font-medium text-white/70 hover:text-white transition-colors"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {label}
                                            </a>
                                        }
                                    })}
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
