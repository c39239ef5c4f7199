//! Services Page
//!
//! Service catalog, process overview, and the pricing cards that enter the
//! checkout flow with `plan` and `price` query parameters.

use leptos::prelude::*;

use site_core::Plan;

struct Service {
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SERVICES: &[Service] = &[
    Service {
        title: "Web Design & Development",
        description: "Custom, responsive websites that convert visitors into customers. We create stunning designs that work perfectly on all devices.",
        features: &[
            "Responsive Design",
            "Custom Development",
            "SEO Optimized",
            "Fast Loading",
            "Content Management",
            "Security Features",
        ],
    },
    Service {
        title: "E-commerce Solutions",
        description: "Complete e-commerce platforms that drive sales. From product catalogs to payment processing, we handle everything.",
        features: &[
            "Online Store Setup",
            "Payment Gateway Integration",
            "Inventory Management",
            "Shopping Cart",
            "Order Management",
            "Multi-vendor Support",
        ],
    },
    Service {
        title: "SEO Optimization",
        description: "Improve your search engine rankings and drive organic traffic with our comprehensive SEO strategies.",
        features: &[
            "Keyword Research",
            "On-page SEO",
            "Technical SEO",
            "Content Optimization",
            "Link Building",
            "Analytics & Reporting",
        ],
    },
    Service {
        title: "Digital Marketing",
        description: "Comprehensive digital marketing campaigns that increase brand awareness and generate quality leads.",
        features: &[
            "Social Media Marketing",
            "PPC Advertising",
            "Content Marketing",
            "Email Marketing",
            "Conversion Optimization",
            "Performance Tracking",
        ],
    },
    Service {
        title: "Brand Identity Design",
        description: "Create a memorable brand identity that sets you apart from the competition with our creative design services.",
        features: &[
            "Logo Design",
            "Brand Guidelines",
            "Business Card Design",
            "Marketing Materials",
            "Social Media Graphics",
            "Brand Strategy",
        ],
    },
    Service {
        title: "Content Marketing",
        description: "Engage your audience with high-quality content that builds trust and drives conversions across all channels.",
        features: &[
            "Content Strategy",
            "Blog Writing",
            "Social Media Content",
            "Video Content",
            "Copywriting",
            "Content Distribution",
        ],
    },
];

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    (
        "01",
        "Discovery & Planning",
        "We understand your business goals, target audience, and project requirements.",
    ),
    (
        "02",
        "Design & Development",
        "Our team creates beautiful designs and develops robust, scalable solutions.",
    ),
    (
        "03",
        "Testing & Launch",
        "Thorough testing ensures everything works perfectly before we launch your project.",
    ),
    (
        "04",
        "Support & Growth",
        "Ongoing support and optimization to help your business grow and succeed online.",
    ),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services">
            <header class="hero">
                <h1>"Our Services"</h1>
                <p>"Comprehensive digital solutions to help your business thrive in the online world"</p>
            </header>

            <section class="services-grid">
                <h2>"What We Offer"</h2>
                <div class="grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul>
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>"✓ " {*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="process">
                <h2>"Our Process"</h2>
                <div class="steps">
                    {PROCESS_STEPS
                        .iter()
                        .map(|(number, title, description)| {
                            view! {
                                <div class="step">
                                    <span class="number">{*number}</span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="pricing">
                <h2>"Choose Your Plan"</h2>
                <p>
                    "Transparent pricing with no hidden fees. Choose the plan "
                    "that fits your business needs."
                </p>

                <div class="plans">
                    {Plan::FIXED
                        .into_iter()
                        .map(|plan| {
                            let details = plan.details();
                            let checkout_href = format!(
                                "/checkout?plan={}&price={}",
                                plan.code(),
                                details.base_price,
                            );
                            view! {
                                <div class="plan" class:featured=details.popular>
                                    <Show when=move || details.popular>
                                        <span class="badge">"Most Popular"</span>
                                    </Show>
                                    <h3>{details.name}</h3>
                                    <div class="price">
                                        "$" {details.base_price.to_string()}
                                        <span>"per project"</span>
                                    </div>
                                    <p>{details.summary}</p>
                                    <ul>
                                        {details
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>"✓ " {*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                    <p class="delivery">"Delivery: " {details.delivery}</p>
                                    <a href=checkout_href class="btn btn-primary">"Get Started"</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="custom-plan-cta">
                    <h3>"Need Something Different?"</h3>
                    <p>"Get a custom solution tailored to your exact requirements and budget."</p>
                    <a href="/checkout?plan=custom" class="btn">"Request Custom Quote"</a>
                </div>
            </section>
        </div>
    }
}
