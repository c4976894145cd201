use crate::pages::login::utils::AuthMode;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-full bg-gray-100 border-none outline-none focus:bg-gray-200 text-gray-800";
const BUTTON_CLASS: &str = "w-full py-3 rounded-full bg-gray-200 text-gray-800 font-medium hover:bg-gray-300 transition-colors";

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] confirm_password: Signal<String>,
    #[prop(into)] mode: Signal<AuthMode>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_confirm_password_input: Callback<String>,
    on_mode_change: Callback<AuthMode>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let is_sign_up = move || mode.get() == AuthMode::SignUp;

    // No browser-side validation: a malformed email must still submit.
    view! {
        <form class="space-y-4" novalidate on:submit=move |ev| on_submit.call(ev)>
            <TextField kind="email" name="email" placeholder="Email" value=email on_input=on_email_input />
            <TextField kind="password" name="password" placeholder="Password" value=password on_input=on_password_input />
            <Show when=is_sign_up>
                <TextField
                    kind="password"
                    name="confirmPassword"
                    placeholder="Confirm Password"
                    value=confirm_password
                    on_input=on_confirm_password_input
                />
            </Show>
            <div class="space-y-3 mt-6">
                {move || {
                    let current = mode.get();
                    let submit = view! {
                        <button type="submit" class=BUTTON_CLASS>{current.submit_label()}</button>
                    };
                    let switch = view! {
                        <button
                            type="button"
                            class=BUTTON_CLASS
                            on:click=move |_| on_mode_change.call(current.toggled())
                        >
                            {current.switch_label()}
                        </button>
                    };
                    // Login shows the sign-up switch first; sign-up leads with its submit.
                    match current {
                        AuthMode::Login => view! { <>{switch}{submit}</> }.into_view(),
                        AuthMode::SignUp => view! { <>{submit}{switch}</> }.into_view(),
                    }
                }}
            </div>
        </form>
    }
}

#[component]
fn TextField(
    kind: &'static str,
    name: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <input
                type=kind
                name=name
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}
