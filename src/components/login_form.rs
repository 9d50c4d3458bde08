//! Login Form Component
//!
//! Email/password form checked against the seed credentials.

use leptos::prelude::*;

use crate::auth::{self, LoginError};
use crate::context::{AppContext, SeedData};
use crate::session::SessionService;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let service = use_context::<SessionService>().expect("SessionService should be provided");
    let seed = use_context::<SeedData>().expect("SeedData should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<LoginError>>(None);
    let (password_error, set_password_error) = signal::<Option<LoginError>>(None);
    let (login_error, set_login_error) = signal::<Option<LoginError>>(None);

    let submit_disabled = move || email.with(String::is_empty) || password.with(String::is_empty);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_login_error.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        let errors = auth::field_errors(&email_value, &password_value);
        set_email_error.set(errors.email.clone());
        set_password_error.set(errors.password.clone());
        if !errors.is_empty() {
            return;
        }

        let result = auth::authenticate(&seed.credentials, &email_value, &password_value)
            .and_then(|session| {
                service.set(&session).map_err(|e| {
                    log::error!("failed to persist session: {}", e);
                    LoginError::Storage
                })?;
                Ok(session)
            });

        match result {
            Ok(session) => ctx.sign_in(session),
            Err(e) => {
                log::info!("login rejected: {}", e);
                set_login_error.set(Some(e));
            }
        }
    };

    view! {
        <div class="form-container">
            <div class="form-header">
                <h2 class="title">"Login"</h2>
                <p class="subtitle">"Sign in to access your dashboard"</p>
            </div>

            <form class="form" novalidate=true on:submit=on_submit>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            if email_error.get_untracked().is_some() {
                                set_email_error.set(auth::validate_email(&email.get_untracked()).err());
                            }
                        }
                        on:blur=move |_| set_email_error.set(auth::validate_email(&email.get_untracked()).err())
                    />
                    {move || email_error.get().map(|e| view! { <span class="field-error">{e.to_string()}</span> })}
                </div>

                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            if password_error.get_untracked().is_some() {
                                set_password_error.set(auth::validate_password(&password.get_untracked()).err());
                            }
                        }
                        on:blur=move |_| set_password_error.set(auth::validate_password(&password.get_untracked()).err())
                    />
                    {move || password_error.get().map(|e| view! { <span class="field-error">{e.to_string()}</span> })}
                </div>

                {move || login_error.get().map(|e| view! { <div class="error-alert">{e.to_string()}</div> })}

                <button type="submit" class="btn btn-medium" disabled=submit_disabled>
                    "Login"
                </button>
            </form>

            <div class="divider"><span class="divider-text">"OR"</span></div>

            <div class="demo-section">
                <h4 class="demo-title">"Demo Credentials:"</h4>
                <p class="demo-credentials"><strong>"Editor:"</strong>" admin@example.com / Admin@123"</p>
                <p class="demo-credentials"><strong>"Viewer:"</strong>" viewer@example.com / Viewer@123"</p>
            </div>
        </div>
    }
}
