//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let stats = [
        ("500+", "Happy Clients"),
        ("1200+", "Projects Completed"),
        ("98%", "Client Satisfaction"),
        ("50+", "Cities Served"),
    ];

    let values = [
        (
            "Excellence",
            "We strive for perfection in every project, delivering solutions that exceed expectations and drive real business results.",
        ),
        (
            "Client-Centric",
            "Your success is our success. We listen, understand, and tailor our solutions to meet your unique business needs.",
        ),
        (
            "Innovation",
            "We stay ahead of the curve, using cutting-edge technologies and creative approaches to solve complex challenges.",
        ),
        (
            "Integrity",
            "Transparency, honesty, and ethical practices are at the core of everything we do. We build trust through our actions.",
        ),
    ];

    let milestones = [
        ("2019", "Company Founded", "Started as a small web design studio in Patna"),
        ("2020", "First 100 Clients", "Reached our first major milestone with 100 happy clients"),
        ("2022", "Team Expansion", "Grew our team to 15+ professionals"),
        ("2023", "Digital Marketing", "Launched comprehensive digital marketing services"),
        ("2024", "500+ Projects", "Completed over 500 successful projects"),
        ("2025", "Future Goals", "Expanding services and reaching 1000+ clients"),
    ];

    view! {
        <div class="about">
            <header class="hero">
                <h1>"About Us"</h1>
                <p>
                    "A passionate team of designers, developers and marketers "
                    "helping businesses succeed online since 2019."
                </p>
            </header>

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

            <section class="values">
                <h2>"Our Values"</h2>
                <div class="grid">
                    {values
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="value-card">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="milestones">
                <h2>"Our Journey"</h2>
                <div class="timeline">
                    {milestones
                        .into_iter()
                        .map(|(year, title, description)| {
                            view! {
                                <div class="milestone">
                                    <span class="year">{year}</span>
                                    <div>
                                        <h3>{title}</h3>
                                        <p>{description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about-cta">
                <h2>"Want to Work With Us?"</h2>
                <a href="/contact" class="btn btn-primary">"Get In Touch"</a>
            </section>
        </div>
    }
}
