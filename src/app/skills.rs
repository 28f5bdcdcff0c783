use leptos::{html, prelude::*};
use leptos_use::{
    use_element_size, use_intersection_observer_with_options, UseElementSizeReturn,
    UseIntersectionObserverOptions,
};

use crate::orbit::{self, RING_COUNT};
use crate::presence::{Phase, PresenceSet};

use super::icons::{self, IconFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Data,
    Dev,
    Ml,
    Tools,
    Viz,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Data,
        Category::Dev,
        Category::Ml,
        Category::Tools,
        Category::Viz,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Data => "DATA",
            Category::Dev => "DEV",
            Category::Ml => "ML",
            Category::Tools => "TOOLS",
            Category::Viz => "VIZ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: IconFn,
    pub category: Category,
    pub description: &'static str,
    /// Ring index, inner ring first. Fixed per skill; filtering never
    /// moves a node to a different ring.
    pub ring: usize,
}

const SKILLS: [Skill; 25] = [
    Skill { name: "Python", icon: icons::python, category: Category::Dev, description: "Primary language for data analysis and ML", ring: 0 },
    Skill { name: "SQL", icon: icons::sql, category: Category::Data, description: "Querying and managing relational databases", ring: 0 },
    Skill { name: "Pandas", icon: icons::pandas, category: Category::Data, description: "Wrangling and analyzing structured data", ring: 0 },
    Skill { name: "NumPy", icon: icons::numpy, category: Category::Data, description: "Numerical computing and multidimensional arrays", ring: 0 },

    Skill { name: "JavaScript", icon: icons::javascript, category: Category::Dev, description: "Interactive web development", ring: 1 },
    Skill { name: "HTML", icon: icons::html, category: Category::Dev, description: "Web structure and semantics", ring: 1 },
    Skill { name: "React", icon: icons::react, category: Category::Dev, description: "Modern UI from reusable components", ring: 1 },
    Skill { name: "Tailwind", icon: icons::tailwind, category: Category::Dev, description: "Utility-first CSS for fast, consistent design", ring: 1 },
    Skill { name: "Git", icon: icons::git, category: Category::Tools, description: "Version control", ring: 1 },
    Skill { name: "GitHub", icon: icons::github, category: Category::Tools, description: "Collaboration and repositories", ring: 1 },
    Skill { name: "Docker", icon: icons::docker, category: Category::Tools, description: "Containers and deployment", ring: 1 },
    Skill { name: "Power BI", icon: icons::power_bi, category: Category::Viz, description: "Interactive dashboards and reporting", ring: 1 },
    Skill { name: "Streamlit", icon: icons::streamlit, category: Category::Viz, description: "Interactive data applications", ring: 1 },

    Skill { name: "EDA", icon: icons::eda, category: Category::Data, description: "Exploratory data analysis", ring: 2 },
    Skill { name: "Feature Eng.", icon: icons::feature_eng, category: Category::Ml, description: "Creating and transforming features", ring: 2 },
    Skill { name: "ML Basics", icon: icons::ml, category: Category::Ml, description: "Machine learning fundamentals", ring: 2 },
    Skill { name: "Statistics", icon: icons::statistics, category: Category::Data, description: "Statistical analysis and probability", ring: 2 },
    Skill { name: "Validation", icon: icons::validation, category: Category::Ml, description: "Model evaluation and validation", ring: 2 },
    Skill { name: "API", icon: icons::api, category: Category::Dev, description: "Integrating external services", ring: 2 },
    Skill { name: "ETL", icon: icons::etl, category: Category::Data, description: "Extract, transform, load", ring: 2 },
    Skill { name: "Docs", icon: icons::docs, category: Category::Tools, description: "Clear technical documentation", ring: 2 },
    Skill { name: "QA/QC", icon: icons::qa, category: Category::Tools, description: "Quality assurance", ring: 2 },
    Skill { name: "Data Val.", icon: icons::data_validation, category: Category::Data, description: "Data validation and integrity", ring: 2 },
    Skill { name: "Scikit-learn", icon: icons::ml, category: Category::Ml, description: "Classical ML models and pipelines", ring: 2 },
    Skill { name: "Jupyter", icon: icons::docs, category: Category::Tools, description: "Notebook-driven analysis", ring: 2 },
];

fn skill_by_name(name: &str) -> Option<Skill> {
    SKILLS.iter().find(|s| s.name == name).copied()
}

/// How long an entering node stays hidden before its grow-in transition
/// starts. Must be long enough for the browser to paint the initial frame.
const ENTER_HOLD_MS: u32 = 40;
/// Matches the CSS transition length on the node, so an exiting node is
/// removed right after it finishes shrinking.
const EXIT_ANIM_MS: u32 = 300;

/// Section visibility ratio above which the skills section counts as "in
/// view" for the scrollbar highlight.
const SECTION_ACTIVE_RATIO: f64 = 0.55;
const SCROLLBAR_MARKER_CLASS: &str = "skills-scrollbar";

const NODE_SIZE_PX: f64 = 48.0;
const PARTICLE_COUNT: u32 = 25;

/// Sole writer of the document-level marker class driving the scrollbar
/// highlight while the skills section is in view.
fn set_section_active(active: bool) {
    #[cfg(feature = "hydrate")]
    if let Some(root) = document().document_element() {
        let _ = root
            .class_list()
            .toggle_with_force(SCROLLBAR_MARKER_CLASS, active);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = active;
}

#[cfg(feature = "hydrate")]
fn settle_after(nodes: RwSignal<PresenceSet<&'static str>>, name: &'static str, delay_ms: u32) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        nodes.try_update(|set| set.settle(&name));
    });
}

#[cfg(not(feature = "hydrate"))]
fn settle_after(nodes: RwSignal<PresenceSet<&'static str>>, name: &'static str, _delay_ms: u32) {
    nodes.try_update(|set| set.settle(&name));
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let stage_ref = NodeRef::<html::Div>::new();

    let (filter, set_filter) = signal(CategoryFilter::All);
    // One optional value guarantees at most one focused node.
    let (focused, set_focused) = signal(None::<Skill>);
    // Seeded fully visible so the server-rendered page shows the whole
    // catalog; enter/exit phases only matter once filters change.
    let nodes = RwSignal::new(PresenceSet::from_visible(SKILLS.map(|s| s.name)));

    // Ring radii are fractions of the measured stage, recomputed on every
    // observed resize.
    let UseElementSizeReturn { width, height } = use_element_size(stage_ref);
    let radii = Signal::derive(move || orbit::ring_radii(width.get(), height.get()));

    use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            let active = entries
                .first()
                .map(|entry| {
                    entry.is_intersecting() && entry.intersection_ratio() >= SECTION_ACTIVE_RATIO
                })
                .unwrap_or(false);
            set_section_active(active);
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.0, SECTION_ACTIVE_RATIO, 0.9]),
    );
    on_cleanup(|| set_section_active(false));

    // Reconcile node membership with the filter; membership changes
    // animate in/out through the presence machine instead of jumping.
    Effect::new(move |_| {
        let filter = filter.get();
        let desired = SKILLS
            .iter()
            .filter(|s| filter.matches(s.category))
            .map(|s| s.name)
            .collect::<Vec<_>>();
        let started = nodes
            .try_update(|set| set.sync(&desired))
            .unwrap_or_default();
        for (name, phase) in started {
            let delay = match phase {
                Phase::Entering => ENTER_HOLD_MS,
                Phase::Visible | Phase::Exiting => EXIT_ANIM_MS,
            };
            settle_after(nodes, name, delay);
        }
    });

    view! {
        <section
            node_ref=section_ref
            id="skills"
            class="relative min-h-screen py-12 pt-40 overflow-hidden"
            style="background: linear-gradient(180deg, rgba(0, 157, 255, 0.08) 0%, rgba(10, 10, 10, 1) 25%, rgba(10, 10, 10, 1) 75%, rgba(255, 0, 255, 0.08) 100%)"
        >
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute w-full h-px bg-gradient-to-r from-transparent via-cyan-500/40 to-transparent top-1/4 animate-pulse" />
                <div
                    class="absolute w-full h-px bg-gradient-to-r from-transparent via-fuchsia-500/40 to-transparent bottom-1/4 animate-pulse"
                    style="animation-delay: 1s"
                />
            </div>

            <Particles />

            <div class="relative z-10 container mx-auto px-4">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-12 gap-6">
                    <div class="space-y-3">
                        <h2 class="text-5xl md:text-6xl font-black tracking-tight text-white">
                            "Technical "
                            <span class="bg-gradient-to-r from-cyan-400 to-fuchsia-500 bg-clip-text text-transparent">
                                "Stack"
                            </span>
                        </h2>
                        <div class="w-32 h-1 bg-gradient-to-r from-cyan-400 to-fuchsia-500 rounded-full" />
                    </div>
                    <FilterBar filter set_filter />
                </div>
            </div>

            <div class="relative z-10 container mx-auto px-4">
                <div
                    node_ref=stage_ref
                    class="relative flex items-center justify-center"
                    style="height: 650px"
                >
                    <OrbitRings radii />
                    <div class="absolute left-1/2 top-1/2 w-24 h-24 -ml-12 -mt-12 z-20 rounded-full flex items-center justify-center bg-gradient-to-br from-cyan-400 to-fuchsia-500 shadow-[0_0_40px_rgba(34,211,238,0.4)]">
                        <span class="text-3xl font-black text-white drop-shadow-lg">"YB"</span>
                    </div>

                    {move || {
                        let set = nodes.read();
                        let radii = radii.get();
                        (0..RING_COUNT)
                            .flat_map(|ring| {
                                let members = SKILLS
                                    .iter()
                                    .filter(|s| s.ring == ring)
                                    .filter_map(|s| set.phase_of(&s.name).map(|p| (*s, p)))
                                    .collect::<Vec<_>>();
                                let count = members.len();
                                members
                                    .into_iter()
                                    .enumerate()
                                    .map(move |(slot, (skill, phase))| {
                                        let (x, y) = orbit::node_position(
                                            slot,
                                            count,
                                            radii[ring],
                                            orbit::RING_OFFSETS[ring],
                                        );
                                        view! {
                                            <SkillNode skill phase x y set_focused />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <FocusCard focused />
        </section>
    }
}

#[component]
fn FilterBar(
    filter: ReadSignal<CategoryFilter>,
    set_filter: WriteSignal<CategoryFilter>,
) -> impl IntoView {
    let options = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect::<Vec<_>>();
    view! {
        <div class="flex flex-wrap gap-2">
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            on:click=move |_| set_filter(option)
                            class=move || {
                                if filter.get() == option {
                                    "px-4 py-2 rounded-xl text-sm font-semibold transition-all duration-300 backdrop-blur-sm border bg-gradient-to-r from-cyan-500/20 to-fuchsia-500/20 border-cyan-500/50 text-white shadow-lg shadow-cyan-500/20"
                                } else {
                                    "px-4 py-2 rounded-xl text-sm font-semibold transition-all duration-300 backdrop-blur-sm border bg-black/30 border-white/10 text-white/60 hover:border-white/30 hover:text-white/80"
                                }
                            }
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn OrbitRings(radii: Signal<[f64; RING_COUNT]>) -> impl IntoView {
    const RING_STROKES: [&str; RING_COUNT] = [
        "rgba(34,211,238,0.25)",
        "rgba(139,92,246,0.25)",
        "rgba(232,121,249,0.25)",
    ];
    view! {
        <svg
            class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 overflow-visible pointer-events-none"
            width="2"
            height="2"
            viewBox="-1 -1 2 2"
        >
            {(0..RING_COUNT)
                .map(|ring| {
                    view! {
                        <circle
                            cx="0"
                            cy="0"
                            r=move || format!("{:.1}", radii.get()[ring])
                            fill="none"
                            stroke=RING_STROKES[ring]
                            stroke-width="1.5"
                        />
                    }
                })
                .collect_view()}
        </svg>
    }
}

fn ring_icon_class(ring: usize) -> &'static str {
    match ring {
        0 => "w-6 h-6 flex items-center justify-center text-cyan-400",
        1 => "w-6 h-6 flex items-center justify-center text-violet-400",
        _ => "w-6 h-6 flex items-center justify-center text-fuchsia-400",
    }
}

#[component]
fn SkillNode(
    skill: Skill,
    phase: Phase,
    x: f64,
    y: f64,
    set_focused: WriteSignal<Option<Skill>>,
) -> impl IntoView {
    let presence_class = match phase {
        Phase::Visible => "scale-100 opacity-100",
        Phase::Entering | Phase::Exiting => "scale-0 opacity-0",
    };
    view! {
        <div
            class="absolute left-1/2 top-1/2 transition-transform duration-500"
            style:width=format!("{NODE_SIZE_PX}px")
            style:height=format!("{NODE_SIZE_PX}px")
            style:margin-left=format!("-{}px", NODE_SIZE_PX / 2.0)
            style:margin-top=format!("-{}px", NODE_SIZE_PX / 2.0)
            style:transform=format!("translate({x:.1}px, {y:.1}px)")
        >
            <div
                class=format!(
                    "group relative cursor-pointer w-full h-full rounded-2xl bg-black/50 backdrop-blur-xl border border-white/10 flex items-center justify-center transition-all duration-300 hover:scale-110 hover:z-50 hover:border-cyan-400/60 hover:shadow-[0_0_30px_rgba(34,211,238,0.5)] {presence_class}"
                )
                on:pointerenter=move |_| set_focused(Some(skill))
                on:pointerleave=move |_| set_focused(None)
                on:click=move |_| set_focused(Some(skill))
            >
                <div class=ring_icon_class(skill.ring)>{(skill.icon)()}</div>
                <div class="absolute -bottom-9 left-1/2 -translate-x-1/2 whitespace-nowrap px-3 py-1.5 rounded-lg bg-black/80 backdrop-blur-sm text-xs font-semibold text-white border border-white/20 shadow-lg opacity-0 group-hover:opacity-100 transition-opacity">
                    {skill.name}
                </div>
            </div>
        </div>
    }
}

/// Detail callout for the focused node. Fixed overlay; only one node can
/// be focused so only one card ever shows.
#[component]
fn FocusCard(focused: ReadSignal<Option<Skill>>) -> impl IntoView {
    view! {
        {move || {
            focused
                .get()
                .map(|skill| {
                    view! {
                        <div class="fixed bottom-8 left-1/2 -translate-x-1/2 z-50 rounded-2xl p-5 max-w-sm w-full mx-4 bg-black/60 backdrop-blur-xl border border-white/10 shadow-[0_0_40px_rgba(34,211,238,0.2)]">
                            <div class="flex items-center gap-4">
                                <div class="p-3 rounded-xl bg-gradient-to-br from-cyan-500/20 to-fuchsia-500/20 border border-cyan-500/30">
                                    <div class="w-8 h-8 text-cyan-400">{(skill.icon)()}</div>
                                </div>
                                <div>
                                    <h3 class="text-lg font-bold text-white">{skill.name}</h3>
                                    <p class="text-xs text-cyan-400/80 uppercase tracking-wider">
                                        {skill.category.label()}
                                    </p>
                                </div>
                            </div>
                            <p class="mt-3 text-sm text-white/70">{skill.description}</p>
                        </div>
                    }
                })
        }}
    }
}

/// Deterministic stand-in for `Math.random` so the decorative particle
/// field renders identically on the server and the client.
fn pseudo_unit(seed: u32) -> f64 {
    let mut value = seed.wrapping_mul(0x9E37_79B9).wrapping_add(0x85EB_CA6B);
    value ^= value >> 13;
    value = value.wrapping_mul(0xC2B2_AE35);
    value ^= value >> 16;
    value as f64 / u32::MAX as f64
}

#[component]
fn Particles() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none">
            {(0..PARTICLE_COUNT)
                .map(|i| {
                    let color = if i % 2 == 0 {
                        "rgb(34, 211, 238)"
                    } else {
                        "rgb(232, 121, 249)"
                    };
                    view! {
                        <div
                            class="absolute w-1 h-1 rounded-full animate-float-particle"
                            style:left=format!("{:.1}%", pseudo_unit(i) * 100.0)
                            style:top=format!("{:.1}%", pseudo_unit(i + 101) * 100.0)
                            style:animation-delay=format!("{:.2}s", pseudo_unit(i + 211) * 5.0)
                            style:animation-duration=format!("{:.2}s", 8.0 + pseudo_unit(i + 307) * 12.0)
                            style:background=color
                            style:box-shadow=format!("0 0 6px {color}, 0 0 12px {color}")
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_preserves_ring_assignment() {
        for category in Category::ALL {
            let filter = CategoryFilter::Only(category);
            for skill in SKILLS.iter().filter(|s| filter.matches(s.category)) {
                let original = skill_by_name(skill.name).map(|s| s.ring);
                assert_eq!(original, Some(skill.ring), "{} moved rings", skill.name);
            }
        }
    }

    #[test]
    fn test_all_filter_matches_whole_catalog() {
        assert!(SKILLS.iter().all(|s| CategoryFilter::All.matches(s.category)));
    }

    #[test]
    fn test_catalog_names_unique() {
        for (i, a) in SKILLS.iter().enumerate() {
            for b in &SKILLS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_catalog_rings_in_range() {
        assert!(SKILLS.iter().all(|s| s.ring < RING_COUNT));
        // every ring has at least one member under the unfiltered view
        for ring in 0..RING_COUNT {
            assert!(SKILLS.iter().any(|s| s.ring == ring), "ring {ring} empty");
        }
    }

    #[test]
    fn test_viz_filter_empties_inner_ring_without_panic() {
        // no Viz skill lives on the inner ring; layout must simply render
        // zero nodes there
        let filter = CategoryFilter::Only(Category::Viz);
        let inner = SKILLS
            .iter()
            .filter(|s| s.ring == 0 && filter.matches(s.category))
            .count();
        assert_eq!(inner, 0);
    }

    #[test]
    fn test_pseudo_unit_in_range_and_deterministic() {
        for i in 0..500 {
            let v = pseudo_unit(i);
            assert!((0.0..=1.0).contains(&v));
            assert_eq!(v, pseudo_unit(i));
        }
    }
}
