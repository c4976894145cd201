use leptos::*;

#[component]
pub fn SunIcon(#[prop(default = 24)] size: u32, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class={format!("text-orange-400 {class}")}
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
        </svg>
    }
}

#[component]
pub fn CloudIcon(#[prop(default = 24)] size: u32, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class={format!("text-blue-400 {class}")}
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" />
        </svg>
    }
}

#[component]
pub fn CalendarIcon(#[prop(default = 24)] size: u32, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class={format!("text-gray-600 {class}")}
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <rect width="18" height="18" x="3" y="4" rx="2" ry="2" />
            <path d="M16 2v4M8 2v4M3 10h18" />
        </svg>
    }
}
