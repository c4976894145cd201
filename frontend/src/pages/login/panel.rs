use crate::pages::login::{
    components::{brand::Brand, form::LoginForm},
    utils::AuthMode,
    view_model::use_login_view_model,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel(on_login: Callback<String>) -> impl IntoView {
    let vm = use_login_view_model(on_login);
    let form = vm.form;

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };
    let mode_change = Callback::new(move |mode: AuthMode| vm.set_mode(mode));

    let email_input = Callback::new(move |value: String| form.email.set(value));
    let password_input = Callback::new(move |value: String| form.password.set(value));
    let confirm_input = Callback::new(move |value: String| form.confirm_password.set(value));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-teal-200 via-green-200 to-blue-200 flex items-center justify-center p-4">
            <div class="bg-white rounded-3xl shadow-2xl p-8 w-full max-w-sm mx-auto border-8 border-black">
                <Brand />
                <LoginForm
                    email=form.email
                    password=form.password
                    confirm_password=form.confirm_password
                    mode=form.mode
                    on_email_input=email_input
                    on_password_input=password_input
                    on_confirm_password_input=confirm_input
                    on_mode_change=mode_change
                    on_submit=handle_submit
                />
            </div>
        </div>
    }
}
