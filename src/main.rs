// Auric Studio landing — Leptos 0.8 Edition
// (c)2026 Auric Studio

use auric_landing::sections::Services;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <main>
            <Services />
        </main>
    }
}
