use leptos::{ev, prelude::*};
use leptos_use::{
    on_click_outside, use_document, use_event_listener, use_event_listener_with_options,
    use_window, UseEventListenerOptions,
};

use crate::overlay::{anchored_position, AnchorRect, PopoverPos};

use super::icons::{self, IconFn};

/// Where a project's source lives: one repository, or a frontend/backend
/// pair revealed through a disclosure popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLink {
    Single(&'static str),
    Split {
        frontend: &'static str,
        backend: &'static str,
    },
}

#[derive(Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub icon: IconFn,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    /// Image path relative to the configured asset base.
    pub image: &'static str,
    pub code: CodeLink,
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "Insightful Billing Dashboard",
        icon: icons::bar_chart,
        description: "Interactive data analytics dashboard for intelligent billing systems. Features CSV upload, KPI tracking, trend analysis, and business insights visualization.",
        tags: &["Data Analytics", "TailwindCSS", "Neon", "Railway", "React", "TypeScript", "Recharts"],
        demo_url: "https://yordinz.github.io/Dashboard/",
        image: "assets/project-billing.jpg",
        code: CodeLink::Single("https://github.com/YordinZ/Dashboard"),
    },
    Project {
        title: "Background Remover",
        icon: icons::file_code,
        description: "AI-powered background removal tool using advanced computer vision techniques.",
        tags: &["Python", "Streamlit", "rembg", "ONNX Runtime", "PIL", "API (Backend)"],
        demo_url: "https://yordinz.github.io/Background-Remover/",
        image: "assets/project-bgremover.jpg",
        code: CodeLink::Split {
            frontend: "https://github.com/YordinZ/Background-Remover",
            backend: "https://github.com/YordinZ/background-remover-backend",
        },
    },
    Project {
        title: "Hand-Gesture Detection",
        icon: icons::code,
        description: "Innovative AI experiment exploring prosthetic technology applications.",
        tags: &["Python", "OpenCV", "MediaPipe", "NumPy"],
        demo_url: "https://yordinz.github.io/Hand-Gesture-Detection/",
        image: "assets/project-gesture.jpg",
        code: CodeLink::Single("https://github.com/YordinZ/Hand-Gesture-Detection"),
    },
    Project {
        title: "Python GUI Calculator",
        icon: icons::laptop,
        description: "Desktop calculator application built with Python and Tkinter, featuring a clean GUI and basic arithmetic operations.",
        tags: &["Python", "Tkinter", "Desktop GUI"],
        demo_url: "https://yordinz.github.io/Python-React-GUI-Calculator/",
        image: "assets/project-calculator.jpg",
        code: CodeLink::Single("https://github.com/YordinZ/Python-React-GUI-Calculator"),
    },
    Project {
        title: "CRC to USD Converter",
        icon: icons::dollar,
        description: "Real-time currency converter that fetches USD to CRC rates from a Flask API deployed on Render and serves a responsive UI via GitHub Pages.",
        tags: &["HTML", "CSS", "JavaScript", "Flask", "REST API", "Render"],
        demo_url: "https://yordinz.github.io/CRC-to-USD-Converter/",
        image: "assets/project-currency.jpg",
        code: CodeLink::Single("https://github.com/YordinZ/CRC-to-USD-Converter"),
    },
    Project {
        title: "Data-Career",
        icon: icons::dice,
        description: "Turn-based console board game in Python featuring configurable rules via a text file, input validation, and detailed play logging.",
        tags: &["Python", "Game Logic", "Input Validation", "File Parsing"],
        demo_url: "https://yordinz.github.io/Data-Career/",
        image: "assets/project-datacareer.jpg",
        code: CodeLink::Single("https://github.com/YordinZ/Data-Career"),
    },
];

/// Resolve a relative asset path against the deploy base, so the same
/// build works at the domain root or under a sub-path.
fn asset_url(relative: &str) -> String {
    format!("{}{relative}", option_env!("SITE_ASSET_BASE").unwrap_or("/"))
}

fn trigger_id(index: usize) -> String {
    format!("code-menu-btn-{index}")
}

fn window_size() -> (f64, f64) {
    let w = window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

fn position_from_trigger(index: usize) -> Option<PopoverPos> {
    let el = document().get_element_by_id(&trigger_id(index))?;
    let rect = el.get_bounding_client_rect();
    let (vw, vh) = window_size();
    Some(anchored_position(
        AnchorRect {
            top: rect.top(),
            bottom: rect.bottom(),
            left: rect.left(),
            width: rect.width(),
        },
        vw,
        vh,
    ))
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    // Single owner of the "which popover is open" state; holding one
    // optional index makes at-most-one-open structural.
    let (open_menu, set_open_menu) = signal(None::<usize>);
    let (menu_pos, set_menu_pos) = signal(PopoverPos {
        top: 0.0,
        left: 0.0,
        width: 0.0,
    });

    // Pointer-tracked background gradient, local to this section.
    let (cursor, set_cursor) = signal((0.0f64, 0.0f64));
    let _ = use_event_listener(section_ref, ev::mousemove, move |ev| {
        if let Some(section) = section_ref.get_untracked() {
            let rect = section.get_bounding_client_rect();
            set_cursor((ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top()));
        }
    });

    let toggle_menu = move |index: usize| {
        set_open_menu.update(|open| {
            *open = if *open == Some(index) {
                None
            } else {
                Some(index)
            }
        });
        if let Some(pos) = position_from_trigger(index) {
            set_menu_pos(pos);
        }
    };

    // Escape closes; clicks outside the popover close; resize and scroll
    // reposition the open popover so it keeps tracking its trigger.
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_open_menu(None);
        }
    });
    let _ = on_click_outside(menu_ref, move |_| set_open_menu(None));
    let reposition = move |_: ev::Event| {
        if let Some(pos) = open_menu.get_untracked().and_then(position_from_trigger) {
            set_menu_pos(pos);
        }
    };
    let _ = use_event_listener(use_window(), ev::resize, move |e: ev::UiEvent| {
        reposition(e.into())
    });
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        reposition,
        UseEventListenerOptions::default().capture(true),
    );

    view! {
        <section
            node_ref=section_ref
            id="projects"
            class="relative min-h-screen py-32 overflow-hidden"
            style:background=move || {
                let (x, y) = cursor.get();
                format!(
                    "radial-gradient(circle at {x}px {y}px, rgba(0, 157, 255, 0.15), transparent 50%), linear-gradient(135deg, #0a0a0a 0%, #1a1a2e 50%, #0a0a0a 100%)"
                )
            }
        >
            <div class="absolute inset-0 opacity-30 pointer-events-none">
                <div class="absolute top-0 left-1/4 w-96 h-96 bg-cyan-500/20 rounded-full blur-[100px] animate-pulse" />
                <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-fuchsia-500/20 rounded-full blur-[100px] animate-pulse delay-1000" />
            </div>

            <div class="relative z-10 container mx-auto px-6">
                <div class="text-center mb-16 space-y-4">
                    <h2 class="text-5xl md:text-6xl font-bold text-white">
                        "Recent "
                        <span class="bg-gradient-to-r from-cyan-400 to-fuchsia-500 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h2>
                    <div class="w-32 h-1 bg-gradient-to-r from-cyan-400 to-fuchsia-500 mx-auto rounded-full" />
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard index project=*project toggle_menu open_menu /> }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                let index = open_menu.get()?;
                let CodeLink::Split { frontend, backend } = PROJECTS.get(index)?.code else {
                    return None;
                };
                let pos = menu_pos.get();
                Some(
                    view! {
                        <div
                            node_ref=menu_ref
                            class="fixed z-50"
                            style:top=format!("{}px", pos.top)
                            style:left=format!("{}px", pos.left)
                            style:width=format!("{}px", pos.width)
                        >
                            <div class="relative rounded-2xl border border-white/10 bg-[#0b0b12]/90 backdrop-blur-xl shadow-2xl shadow-cyan-500/10 overflow-hidden">
                                <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/10 to-fuchsia-500/10 opacity-60" />
                                <div class="relative p-2">
                                    <PopoverLink label="Frontend" url=frontend set_open_menu />
                                    <PopoverLink label="Backend" url=backend set_open_menu />
                                </div>
                            </div>
                        </div>
                    },
                )
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    index: usize,
    project: Project,
    toggle_menu: impl Fn(usize) + Copy + 'static,
    open_menu: ReadSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="group relative bg-gradient-to-br from-white/5 to-white/[0.02] backdrop-blur-xl rounded-3xl overflow-hidden border border-white/10 hover:border-cyan-500/50 transition-all duration-500 hover:scale-105 hover:shadow-2xl hover:shadow-cyan-500/20">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=asset_url(project.image)
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-[#0b0b12] via-transparent to-transparent opacity-80" />
            </div>

            <div class="p-8 space-y-6">
                <div class="space-y-3">
                    <div class="flex items-center gap-3">
                        <div class="w-6 h-6 text-cyan-400">{(project.icon)()}</div>
                        <h3 class="text-2xl font-bold text-white">{project.title}</h3>
                    </div>
                    <p class="text-white/60 leading-relaxed line-clamp-2">{project.description}</p>
                </div>

                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 text-xs font-medium bg-white/5 border border-white/10 rounded-full text-cyan-400">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-4 pt-2">
                    <a
                        href=project.demo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 flex items-center justify-center gap-2 px-5 py-3 rounded-2xl bg-gradient-to-r from-cyan-500 to-fuchsia-600 text-white font-semibold hover:shadow-lg hover:shadow-cyan-500/50 hover:scale-[1.02] transition-all"
                    >
                        <span class="w-4 h-4">{icons::external_link()}</span>
                        <span>"Demo"</span>
                    </a>
                    {match project.code {
                        CodeLink::Single(url) => {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 flex items-center justify-center gap-2 px-5 py-3 rounded-2xl bg-white/5 border border-white/10 text-white font-semibold hover:bg-white/10 hover:scale-[1.02] transition-all"
                                >
                                    <span class="w-4 h-4">{icons::github()}</span>
                                    <span>"Code"</span>
                                </a>
                            }
                                .into_any()
                        }
                        CodeLink::Split { .. } => {
                            view! {
                                <button
                                    type="button"
                                    id=trigger_id(index)
                                    on:click=move |_| toggle_menu(index)
                                    class="flex-1 flex items-center justify-center gap-2 px-5 py-3 rounded-2xl bg-white/5 border border-white/10 text-white font-semibold hover:bg-white/10 hover:scale-[1.02] transition-all"
                                    aria-haspopup="menu"
                                    aria-expanded=move || (open_menu.get() == Some(index)).to_string()
                                >
                                    <span class="w-4 h-4">{icons::github()}</span>
                                    <span>"Code"</span>
                                    <span class=move || {
                                        if open_menu.get() == Some(index) {
                                            "w-4 h-4 transition-transform duration-300 rotate-180"
                                        } else {
                                            "w-4 h-4 transition-transform duration-300"
                                        }
                                    }>{icons::chevron_down()}</span>
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <div class="pointer-events-none absolute inset-0 bg-gradient-to-br from-cyan-500/10 to-fuchsia-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-500" />
        </div>
    }
}

#[component]
fn PopoverLink(
    label: &'static str,
    url: &'static str,
    set_open_menu: WriteSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <a
            href=url
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center justify-between gap-3 w-full px-3 py-2.5 rounded-xl text-white/90 hover:text-white hover:bg-white/5 transition-colors"
            on:click=move |_| set_open_menu(None)
        >
            <span class="text-sm font-semibold">{label}</span>
            <span class="w-4 h-4 text-white/70">{icons::external_link()}</span>
        </a>
    }
}
