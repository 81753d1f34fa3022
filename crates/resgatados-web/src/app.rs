//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, Navbar};
use crate::pages::{AboutPage, ContactPage, DonationPage, HomePage, PartnersPage, ProjectsPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Página não encontrada"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/sobre") view=AboutPage />
                    <Route path=path!("/trabalhos") view=ProjectsPage />
                    <Route path=path!("/parceiros") view=PartnersPage />
                    <Route path=path!("/contato") view=ContactPage />
                    <Route path=path!("/contribuir") view=DonationPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
