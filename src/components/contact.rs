use crate::components::browser::inquiry_sent;
use crate::config;
use dioxus::prelude::*;

const MESSAGE_PLACEHOLDER: &str = "Genre, word count, deadline, POV, accents, any notes.\nExample: 85k romantasy, dual POV, delivery by June 15, 2 character accents.";

/// Contact section: a plain HTML form posted to the form-handling service.
/// Submission, validation and delivery are the service's problem; the only
/// state here is the success banner after the redirect back.
#[component]
pub fn ContactSection() -> Element {
    let sent = use_signal(inquiry_sent);

    rsx! {
        section { id: "contact", class: "mt-20",
            h2 { class: "text-3xl font-bold", "Contact" }
            p { class: "mt-2 text-white/70",
                "Send word count, deadline, genre, and any character notes. I will reply with availability and a quote."
            }

            div { class: "mt-6 grid grid-cols-1 md:grid-cols-2 gap-6",
                form {
                    action: config::FORM_ENDPOINT,
                    method: "POST",
                    class: "rounded-2xl border border-[#1A2550] bg-[#0B1224] p-6 shadow-lg",

                    // Honeypot; real visitors never see or fill this.
                    input {
                        r#type: "text",
                        name: "_gotcha",
                        tabindex: "-1",
                        autocomplete: "off",
                        style: "display: none",
                    }
                    input {
                        r#type: "hidden",
                        name: "_subject",
                        value: "New Narration Inquiry from Website",
                    }
                    input {
                        r#type: "hidden",
                        name: "_redirect",
                        value: config::FORM_REDIRECT,
                    }
                    input { r#type: "hidden", name: "source", value: "narration-site" }

                    if sent() {
                        div { class: "mb-4 rounded-md border border-emerald-500/30 bg-emerald-500/10 px-4 py-3 text-sm text-emerald-100",
                            "Thanks, your inquiry was sent. I will reply soon."
                        }
                    }

                    label { class: "block",
                        span { class: "text-sm text-white/80", "Name" }
                        input {
                            name: "name",
                            required: true,
                            placeholder: "Your name",
                            class: "mt-2 w-full rounded-md bg-[#050814] border border-[#1A2550] px-4 py-3 text-white placeholder:text-white/40 focus:outline-none focus:border-[#D4AF37]/70",
                        }
                    }

                    label { class: "block mt-4",
                        span { class: "text-sm text-white/80", "Email" }
                        input {
                            name: "email",
                            r#type: "email",
                            required: true,
                            placeholder: "you@example.com",
                            class: "mt-2 w-full rounded-md bg-[#050814] border border-[#1A2550] px-4 py-3 text-white placeholder:text-white/40 focus:outline-none focus:border-[#D4AF37]/70",
                        }
                    }

                    label { class: "block mt-4",
                        span { class: "text-sm text-white/80", "Project details" }
                        textarea {
                            name: "message",
                            required: true,
                            rows: "6",
                            placeholder: MESSAGE_PLACEHOLDER,
                            class: "mt-2 w-full rounded-md bg-[#050814] border border-[#1A2550] px-4 py-3 text-white placeholder:text-white/40 focus:outline-none focus:border-[#D4AF37]/70",
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "mt-5 inline-flex items-center justify-center rounded-md bg-[#D4AF37] text-black px-6 py-3 font-semibold hover:bg-[#E0C15A] transition w-full",
                        "Send inquiry"
                    }

                    div { class: "mt-4 text-xs text-white/60",
                        "Prefer email:"
                        div {
                            a {
                                class: "text-[#D4AF37] hover:underline",
                                href: "mailto:{config::CONTACT_EMAIL}",
                                "{config::CONTACT_EMAIL}"
                            }
                        }
                    }
                }

                div { class: "rounded-2xl border border-[#1A2550] bg-[#0B1224] p-6 shadow-lg",
                    p { class: "text-sm text-white/70", "Best results if you include:" }

                    ul { class: "mt-4 space-y-2 text-white/80 text-sm",
                        li { "• Genre and tone (dark romance, thriller, etc.)" }
                        li { "• Word count (or estimated finished hours)" }
                        li { "• Deadline and preferred schedule" }
                        li { "• POV and character count" }
                        li { "• Accent notes and pronunciation guide" }
                    }

                    div { class: "mt-6 border-t border-[#1A2550] pt-5",
                        p { class: "text-sm text-white/70", "Direct email" }
                        a {
                            class: "mt-1 inline-block text-lg font-semibold text-[#D4AF37] hover:underline",
                            href: "mailto:{config::CONTACT_EMAIL}",
                            "{config::CONTACT_EMAIL}"
                        }
                    }
                }
            }
        }
    }
}
