//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, Navbar};
use crate::pages::{
    AboutPage, CheckoutCancelPage, CheckoutPage, CheckoutSuccessPage, ContactPage, HomePage,
    ServicesPage,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                    <Route path=path!("/checkout/success") view=CheckoutSuccessPage />
                    <Route path=path!("/checkout/cancel") view=CheckoutCancelPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
