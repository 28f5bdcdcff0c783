use leptos::prelude::*;

struct Entry {
    title: &'static str,
    institution: &'static str,
    period: &'static str,
    details: &'static str,
}

const ENTRIES: [Entry; 3] = [
    Entry {
        title: "B.Sc. Business Intelligence & Data Analytics",
        institution: "Universidad CENFOTEC",
        period: "2022 - Present",
        details: "Coursework in statistics, data modeling, machine learning and decision support systems.",
    },
    Entry {
        title: "Data Analyst Professional Certificate",
        institution: "Google / Coursera",
        period: "2023",
        details: "Hands-on program covering SQL, spreadsheets, R and dashboard design on real datasets.",
    },
    Entry {
        title: "Machine Learning Specialization",
        institution: "DeepLearning.AI / Coursera",
        period: "2024",
        details: "Supervised and unsupervised learning, model evaluation and practical scikit-learn pipelines.",
    },
];

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="relative py-24 pt-40">
            <div class="container mx-auto px-4 max-w-4xl">
                <div class="text-center mb-12 space-y-3">
                    <h2 class="text-5xl md:text-6xl font-black tracking-tight text-white">
                        "Education & "
                        <span class="bg-gradient-to-r from-cyan-400 to-fuchsia-500 bg-clip-text text-transparent">
                            "Training"
                        </span>
                    </h2>
                    <div class="w-32 h-1 mx-auto bg-gradient-to-r from-cyan-400 to-fuchsia-500 rounded-full" />
                </div>

                <div class="space-y-6">
                    {ENTRIES
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="group rounded-2xl p-6 bg-black/40 backdrop-blur-xl border border-white/10 hover:border-cyan-400/40 transition-colors">
                                    <div class="flex flex-col md:flex-row md:items-baseline md:justify-between gap-1">
                                        <h3 class="text-xl font-bold text-white group-hover:text-cyan-400 transition-colors">
                                            {entry.title}
                                        </h3>
                                        <span class="text-sm font-mono text-fuchsia-400/80 shrink-0">
                                            {entry.period}
                                        </span>
                                    </div>
                                    <p class="mt-1 text-sm font-medium text-white/60">{entry.institution}</p>
                                    <p class="mt-3 text-sm text-white/50">{entry.details}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
