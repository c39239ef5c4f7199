//! Contact Page
//!
//! Contact information plus the fire-once form submission: one request,
//! success or error flag, no retry.

use leptos::prelude::*;

use crate::api::{self, ContactSubmission};

const SERVICES: &[&str] = &[
    "Web Design & Development",
    "E-commerce Solutions",
    "SEO Optimization",
    "Digital Marketing",
    "Brand Identity Design",
    "Content Marketing",
    "Custom Solution",
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (service, set_service) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (submit_status, set_submit_status) = signal(Option::<bool>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        set_submitting.set(true);
        set_submit_status.set(None);

        let form = ContactSubmission {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            service: service.get(),
            message: message.get(),
        };

        leptos::task::spawn_local(async move {
            match api::submit_contact(&form).await {
                Ok(()) => {
                    set_submit_status.set(Some(true));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_phone.set(String::new());
                    set_service.set(String::new());
                    set_message.set(String::new());
                }
                Err(_) => set_submit_status.set(Some(false)),
            }
            set_submitting.set(false);
        });
    };

    let contact_info = [
        ("Visit Our Office", "Patna, Bihar, India", "Come visit us for a face-to-face consultation"),
        ("Call Us", "+91 98765 43210", "Mon-Fri 9AM-6PM, Sat 9AM-3PM"),
        ("Email Us", "info@webxmedia.com", "We'll respond within 24 hours"),
        ("Business Hours", "Mon-Fri: 9AM-6PM", "Saturday: 9AM-3PM, Sunday: Closed"),
    ];

    view! {
        <div class="contact">
            <header class="hero">
                <h1>"Contact Us"</h1>
                <p>
                    "Ready to transform your digital presence? Let's discuss your "
                    "project and create something amazing together."
                </p>
            </header>

            <div class="contact-grid">
                <section class="contact-info">
                    <h2>"Get In Touch"</h2>
                    <p>
                        "We'd love to hear about your project. Send us a message "
                        "and we'll respond as soon as possible."
                    </p>

                    {contact_info
                        .into_iter()
                        .map(|(title, content, description)| {
                            view! {
                                <div class="info-card">
                                    <h3>{title}</h3>
                                    <p class="content">{content}</p>
                                    <p class="description">{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="contact-form">
                    <h2>"Send Us a Message"</h2>

                    <Show when=move || submit_status.get() == Some(true)>
                        <div class="banner banner-success">
                            "Thank you! Your message has been sent. We'll get back to you soon."
                        </div>
                    </Show>

                    <Show when=move || submit_status.get() == Some(false)>
                        <div class="banner banner-error">
                            "Something went wrong sending your message. Please try again."
                        </div>
                    </Show>

                    <form on:submit=submit>
                        <div class="field">
                            <label for="name">"Name *"</label>
                            <input
                                id="name"
                                type="text"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="field">
                            <label for="email">"Email *"</label>
                            <input
                                id="email"
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="field">
                            <label for="phone">"Phone"</label>
                            <input
                                id="phone"
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="field">
                            <label for="service">"Service Interested In *"</label>
                            <select
                                id="service"
                                required
                                prop:value=move || service.get()
                                on:change=move |ev| set_service.set(event_target_value(&ev))
                            >
                                <option value="">"Select a service"</option>
                                {SERVICES
                                    .iter()
                                    .map(|s| view! { <option value=*s>{*s}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="field">
                            <label for="message">"Message *"</label>
                            <textarea
                                id="message"
                                rows="5"
                                required
                                placeholder="Tell us about your project..."
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </section>
            </div>
        </div>
    }
}
