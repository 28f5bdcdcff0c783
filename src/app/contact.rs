use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use serde::Serialize;

use super::icons;

const FORM_ENDPOINT: &str = "https://formspree.io/f/mkobvngq";
const SUBJECT: &str = "New portfolio contact";
/// How long a success or error banner stays up before the form returns
/// to idle.
const STATUS_REVERT_MS: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmitStatus {
    /// Terminal statuses revert to idle after the banner delay; a send
    /// still in flight keeps its status.
    pub fn after_send(ok: bool) -> SubmitStatus {
        if ok {
            SubmitStatus::Success
        } else {
            SubmitStatus::Error
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }
}

#[derive(Debug, Clone, Serialize)]
struct MessagePayload {
    name: String,
    email: String,
    message: String,
    #[serde(rename = "_subject")]
    subject: &'static str,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, thiserror::Error)]
enum SubmitError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("form endpoint returned status {0}")]
    Status(u16),
}

#[cfg(feature = "hydrate")]
async fn send_message(payload: &MessagePayload) -> Result<(), SubmitError> {
    let response = gloo_net::http::Request::post(FORM_ENDPOINT)
        .header("Accept", "application/json")
        .json(payload)?
        .send()
        .await?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let (status, set_status) = signal(SubmitStatus::default());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    // Hidden field; bots fill it, people never see it.
    let (honeypot, set_honeypot) = signal(String::new());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            if status.get_untracked().is_terminal() {
                set_status(SubmitStatus::Idle);
            }
        },
        STATUS_REVERT_MS,
    );
    on_cleanup({
        let stop = stop.clone();
        move || stop()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Loading {
            return;
        }
        if !honeypot.get_untracked().is_empty() {
            return;
        }
        let payload = MessagePayload {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
            subject: SUBJECT,
        };
        set_status(SubmitStatus::Loading);
        stop();
        #[cfg(feature = "hydrate")]
        {
            let start = start.clone();
            leptos::task::spawn_local(async move {
                let ok = match send_message(&payload).await {
                    Ok(()) => true,
                    Err(err) => {
                        log::error!("contact form submission failed: {err}");
                        false
                    }
                };
                set_status(SubmitStatus::after_send(ok));
                if ok {
                    // a failed send keeps the draft so nothing is lost
                    set_name(String::new());
                    set_email(String::new());
                    set_message(String::new());
                }
                start(());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &payload;
            let _ = &start;
            set_status(SubmitStatus::after_send(false));
        }
    };

    view! {
        <section id="contact" class="relative py-24 pt-40">
            <div class="container mx-auto px-4 max-w-2xl">
                <div class="text-center mb-12 space-y-3">
                    <h2 class="text-5xl md:text-6xl font-black tracking-tight text-white">
                        "Get in "
                        <span class="bg-gradient-to-r from-cyan-400 to-fuchsia-500 bg-clip-text text-transparent">
                            "Touch"
                        </span>
                    </h2>
                    <p class="text-white/60">
                        "Have a project in mind or just want to talk data? Drop me a line."
                    </p>
                </div>

                <form
                    on:submit=submit
                    class="space-y-5 rounded-2xl p-8 bg-black/40 backdrop-blur-xl border border-white/10"
                >
                    <input
                        type="text"
                        name="_gotcha"
                        tabindex="-1"
                        autocomplete="off"
                        class="hidden"
                        aria-hidden="true"
                        prop:value=honeypot
                        on:input:target=move |ev| set_honeypot(ev.target().value())
                    />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                        <label class="block space-y-2">
                            <span class="text-sm font-medium text-white/70">"Name"</span>
                            <input
                                type="text"
                                name="name"
                                required
                                placeholder="Your name"
                                class="w-full rounded-xl bg-black/40 border border-white/10 px-4 py-3 text-white placeholder-white/30 focus:border-cyan-400/60 focus:outline-none transition-colors"
                                prop:value=name
                                on:input:target=move |ev| set_name(ev.target().value())
                            />
                        </label>
                        <label class="block space-y-2">
                            <span class="text-sm font-medium text-white/70">"Email"</span>
                            <input
                                type="email"
                                name="email"
                                required
                                placeholder="you@example.com"
                                class="w-full rounded-xl bg-black/40 border border-white/10 px-4 py-3 text-white placeholder-white/30 focus:border-cyan-400/60 focus:outline-none transition-colors"
                                prop:value=email
                                on:input:target=move |ev| set_email(ev.target().value())
                            />
                        </label>
                    </div>
                    <label class="block space-y-2">
                        <span class="text-sm font-medium text-white/70">"Message"</span>
                        <textarea
                            name="message"
                            required
                            rows="5"
                            placeholder="Tell me about your project..."
                            class="w-full rounded-xl bg-black/40 border border-white/10 px-4 py-3 text-white placeholder-white/30 focus:border-cyan-400/60 focus:outline-none transition-colors resize-none"
                            prop:value=message
                            on:input:target=move |ev| set_message(ev.target().value())
                        ></textarea>
                    </label>

                    <button
                        type="submit"
                        disabled=move || status.get() == SubmitStatus::Loading
                        class="w-full flex items-center justify-center gap-2 rounded-xl px-6 py-3.5 font-semibold text-white bg-gradient-to-r from-cyan-500 to-fuchsia-500 hover:opacity-90 disabled:opacity-60 disabled:cursor-not-allowed transition-opacity"
                    >
                        {move || match status.get() {
                            SubmitStatus::Loading => view! {
                                <span class="w-5 h-5 animate-spin">{icons::spinner()}</span>
                                <span>"Sending..."</span>
                            }
                            .into_any(),
                            _ => view! {
                                <span class="w-5 h-5">{icons::send()}</span>
                                <span>"Send Message"</span>
                            }
                            .into_any(),
                        }}
                    </button>

                    {move || match status.get() {
                        SubmitStatus::Success => Some(
                            view! {
                                <div class="flex items-center gap-2 rounded-xl px-4 py-3 bg-emerald-500/10 border border-emerald-500/30 text-emerald-400 text-sm">
                                    <span class="w-5 h-5">{icons::check_circle()}</span>
                                    "Message sent. Thanks for reaching out!"
                                </div>
                            }
                            .into_any(),
                        ),
                        SubmitStatus::Error => Some(
                            view! {
                                <div class="flex items-center gap-2 rounded-xl px-4 py-3 bg-red-500/10 border border-red-500/30 text-red-400 text-sm">
                                    <span class="w-5 h-5">{icons::x_circle()}</span>
                                    "Something went wrong. Your message is still here, try again."
                                </div>
                            }
                            .into_any(),
                        ),
                        _ => None,
                    }}
                </form>

                <div class="mt-8 flex items-center justify-center gap-2 text-white/50 text-sm">
                    <span class="w-4 h-4">{icons::mail()}</span>
                    <a href="mailto:yordin.borge@gmail.com" class="hover:text-cyan-400 transition-colors">
                        "yordin.borge@gmail.com"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_send_maps_outcome() {
        assert_eq!(SubmitStatus::after_send(true), SubmitStatus::Success);
        assert_eq!(SubmitStatus::after_send(false), SubmitStatus::Error);
    }

    #[test]
    fn test_only_terminal_statuses_revert() {
        assert!(SubmitStatus::Success.is_terminal());
        assert!(SubmitStatus::Error.is_terminal());
        assert!(!SubmitStatus::Idle.is_terminal());
        assert!(!SubmitStatus::Loading.is_terminal());
    }

    #[test]
    fn test_payload_serializes_with_subject_key() {
        let payload = MessagePayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "hello".into(),
            subject: SUBJECT,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["_subject"], SUBJECT);
        assert_eq!(json["name"], "Ada");
        assert!(json.get("subject").is_none());
    }
}
