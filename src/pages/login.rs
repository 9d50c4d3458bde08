use leptos::prelude::*;

use crate::components::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-card">
                    <LoginForm />
                </div>
            </div>
        </div>
    }
}
