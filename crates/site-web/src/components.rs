//! Shared UI Components

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Top navigation bar. Menu toggle state is local to the component.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    let nav_items = [
        ("Home", "/"),
        ("Services", "/services"),
        ("About Us", "/about"),
        ("Contact", "/contact"),
    ];

    view! {
        <nav class="navbar">
            <div class="nav-inner">
                <a href="/" class="logo">"Web X Media"</a>

                <div class="nav-links" class:open=move || menu_open.get()>
                    {nav_items
                        .into_iter()
                        .map(|(name, path)| {
                            view! {
                                <a
                                    href=path
                                    class:active=move || pathname.get() == path
                                >
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="/checkout?plan=custom" class="btn btn-primary">"Get Quote"</a>
                </div>

                <button
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
        </nav>
    }
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h3>"Web X Media"</h3>
                    <p>
                        "Transforming businesses with exceptional web design "
                        "and digital marketing solutions."
                    </p>
                </div>

                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    <a href="/services">"Services"</a>
                    <a href="/about">"About Us"</a>
                    <a href="/contact">"Contact"</a>
                    <a href="/checkout?plan=custom">"Get a Quote"</a>
                </div>

                <div class="footer-contact">
                    <h4>"Get In Touch"</h4>
                    <a href="mailto:info@webxmedia.com">"info@webxmedia.com"</a>
                    <a href="tel:+919876543210">"+91 98765 43210"</a>
                    <p>"Patna, Bihar, India"</p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>"© 2025 Web X Media. All rights reserved."</p>
            </div>
        </footer>
    }
}
