//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 Yassine Berrada"</p>
            <nav class="footer-links">
                <a href="https://github.com/yberrada" rel="external">"GitHub"</a>
                <a href="https://www.linkedin.com/in/yberrada" rel="external">"LinkedIn"</a>
            </nav>
        </footer>
    }
}
