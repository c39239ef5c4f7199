//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let steps = [
        (
            "01",
            "Consult",
            "We understand your business goals and target audience to create the perfect strategy.",
        ),
        (
            "02",
            "Create",
            "Our expert team designs and develops stunning websites that convert visitors into customers.",
        ),
        (
            "03",
            "Launch",
            "We launch your project and provide ongoing support to ensure your continued success.",
        ),
    ];

    let stats = [
        ("500+", "Happy Clients"),
        ("1200+", "Projects Completed"),
        ("98%", "Client Satisfaction"),
        ("24/7", "Support Available"),
    ];

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Transform Your Digital Presence"</h1>
                <p class="tagline">
                    "Professional web design and digital marketing that helps "
                    "your business grow online."
                </p>
                <div class="cta">
                    <a href="/services" class="btn btn-primary">"View Our Services"</a>
                    <a href="/contact" class="btn">"Free Consultation"</a>
                </div>
            </header>

            <section class="how-we-work">
                <h2>"How We Work"</h2>
                <div class="steps">
                    {steps
                        .into_iter()
                        .map(|(number, title, description)| {
                            view! {
                                <div class="step">
                                    <span class="number">{number}</span>
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="stats">
                {stats
                    .into_iter()
                    .map(|(number, label)| {
                        view! {
                            <div class="stat">
                                <div class="stat-number">{number}</div>
                                <div class="stat-label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="home-cta">
                <h2>"Ready to Grow Your Business?"</h2>
                <p>"Choose a plan that fits your needs and let's build something amazing together."</p>
                <a href="/services" class="btn btn-primary">"See Plans & Pricing"</a>
            </section>
        </div>
    }
}
