//! Main Leptos application component and routing.

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::settings::{Theme, provide_settings};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let settings = provide_settings();

    view! {
        <Title text="Yassine Berrada | DevOps & Automation Engineer"/>
        <Router>
            <div
                class="site"
                class:light=move || settings.theme.get() == Theme::Light
                dir=move || settings.language.get().dir()
            >
                <Navbar/>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
