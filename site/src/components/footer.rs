use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(into)] name: String, year: i32) -> impl IntoView {
    view! {
        <footer class="footer">
            "© " {year} " " {name} ". Built with Rust & Leptos."
        </footer>
    }
}
