use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(
    #[prop(into)] identity: String,
    on_logout: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout identity=identity on_logout=on_logout>
            {children()}
        </Layout>
    }
}
