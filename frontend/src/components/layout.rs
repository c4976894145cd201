use crate::{components::icons::SunIcon, config};
use leptos::*;

#[component]
pub fn Header(#[prop(into)] identity: String, on_logout: Callback<()>) -> impl IntoView {
    let app_name = config::current().app_name;
    view! {
        <header class="bg-white shadow-sm p-4">
            <div class="flex justify-between items-center max-w-4xl mx-auto">
                <div class="flex items-center gap-2">
                    <SunIcon size=24 />
                    <h1 class="text-xl font-bold text-gray-800">{app_name}</h1>
                </div>
                <div class="flex items-center gap-4">
                    <span class="text-gray-600">{welcome_message(&identity)}</span>
                    <button
                        type="button"
                        class="px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600 transition-colors"
                        on:click=move |_| on_logout.call(())
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(
    #[prop(into)] identity: String,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-teal-50">
            <Header identity=identity on_logout=on_logout />
            <main class="max-w-4xl mx-auto p-4 mt-6">
                {children()}
            </main>
        </div>
    }
}

pub fn welcome_message(identity: &str) -> String {
    format!("Welcome, {identity}")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_greets_identity() {
        let html = render_to_string(move || {
            view! { <Header identity="a@b.com" on_logout=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Welcome, a@b.com"));
        assert!(html.contains("Logout"));
        assert!(html.contains("WeatherScheduler"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            view! {
                <Layout identity="a@b.com" on_logout=Callback::new(|_| {})>
                    <div>"child"</div>
                </Layout>
            }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn welcome_message_embeds_identity_verbatim() {
        assert_eq!(welcome_message(" spaced "), "Welcome,  spaced ");
    }
}
