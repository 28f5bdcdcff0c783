use leptos::prelude::*;

use super::icons;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
            style="background: linear-gradient(135deg, #0a0a0a 0%, #101028 50%, #0a0a0a 100%)"
        >
            <div class="absolute inset-0 opacity-30 pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-cyan-500/20 rounded-full blur-[120px] animate-pulse" />
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-fuchsia-500/20 rounded-full blur-[120px] animate-pulse delay-1000" />
            </div>

            <div class="relative z-10 container mx-auto px-6 text-center space-y-8">
                <p class="text-sm font-semibold tracking-[0.3em] uppercase text-cyan-400">
                    "Data Analyst"
                </p>
                <h1 class="text-6xl md:text-8xl font-black tracking-tight text-white">
                    "Yordin "
                    <span class="bg-gradient-to-r from-cyan-400 to-fuchsia-500 bg-clip-text text-transparent">
                        "Borge"
                    </span>
                </h1>
                <p class="max-w-2xl mx-auto text-lg text-white/60 leading-relaxed">
                    "I turn raw data into insight: exploratory analysis, machine learning
                    fundamentals, and interactive dashboards, wrapped in clean engineering."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 pt-4">
                    <a
                        href="#projects"
                        class="px-8 py-4 rounded-2xl bg-gradient-to-r from-cyan-500 to-fuchsia-600 text-white font-bold hover:shadow-lg hover:shadow-cyan-500/50 hover:scale-[1.02] transition-all"
                    >
                        "View Projects"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 rounded-2xl bg-white/5 border border-white/10 text-white font-bold hover:bg-white/10 hover:scale-[1.02] transition-all"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <div class="flex items-center justify-center gap-4 pt-4">
                    <a
                        href="https://github.com/YordinZ"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                        class="w-8 h-8 text-white/50 hover:text-white transition-colors"
                    >
                        {icons::github()}
                    </a>
                    <a
                        href="https://linkedin.com/in/yordinborge"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                        class="w-8 h-8 text-white/50 hover:text-white transition-colors"
                    >
                        {icons::linkedin()}
                    </a>
                </div>
            </div>
        </section>
    }
}
