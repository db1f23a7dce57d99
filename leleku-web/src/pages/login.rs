//! Login screen.

use std::rc::Rc;

use dioxus::prelude::*;
use leleku_core::api::HttpMonitorApi;
use leleku_core::config::AppConfig;
use leleku_core::login::{submit, LoginField, LoginForm};
use leleku_core::session::{guard, Page};
use leleku_ui::components::{Card, ErrorDisplay};
use leleku_ui::session::CookieSession;

use crate::RouterNav;

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px;";

#[component]
pub fn Login() -> Element {
    let config = use_context::<AppConfig>();
    let nav = RouterNav(navigator());
    let api = use_hook(|| Rc::new(HttpMonitorApi::new(config.clone())));
    let mut form = use_signal(LoginForm::default);

    // Already signed in: go straight to the dashboard, no API call.
    use_effect(move || {
        guard(Page::Login, &CookieSession, &nav);
    });

    let on_input = move |name: &'static str| {
        move |evt: FormEvent| {
            if let Some(field) = LoginField::from_name(name) {
                form.write().update_field(field, evt.value());
            }
        }
    };

    let ttl = config.token_ttl();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(credentials) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = submit(api.as_ref(), &CookieSession, &nav, &credentials, ttl).await;
            form.write().finish(result);
        });
    };

    let submitting = form.read().submitting;
    let error = form.read().error.clone();

    rsx! {
        document::Title { "Login | Monitoring Kolam Lele Menggunakan Internet Of Things" }
        div {
            style: "display: flex; min-height: 100vh; flex-direction: column; align-items: center; justify-content: center; padding: 24px;",
            div {
                style: "width: 100%; max-width: 384px; display: flex; flex-direction: column; gap: 24px;",
                Card {
                    form {
                        method: "post",
                        onsubmit: on_submit,
                        style: "display: flex; flex-direction: column; gap: 24px;",
                        div {
                            style: "text-align: center;",
                            h1 { style: "margin: 0; font-size: 24px; font-weight: 700;", "Masuk" }
                            p {
                                style: "margin: 4px 0 0 0; color: #64748b;",
                                "Masuk ke akun anda menggunakan username dan password"
                            }
                        }
                        if let Some(message) = error {
                            ErrorDisplay { message }
                        }
                        div {
                            style: "display: grid; gap: 8px;",
                            label { r#for: "username", "Username" }
                            input {
                                r#type: "text",
                                id: "username",
                                name: "username",
                                placeholder: "Masukkan username anda...",
                                style: INPUT_STYLE,
                                disabled: submitting,
                                required: true,
                                oninput: on_input("username"),
                            }
                        }
                        div {
                            style: "display: grid; gap: 8px;",
                            label { r#for: "password", "Password" }
                            input {
                                r#type: "password",
                                id: "password",
                                name: "password",
                                placeholder: "Masukkan password anda...",
                                style: INPUT_STYLE,
                                disabled: submitting,
                                required: true,
                                oninput: on_input("password"),
                            }
                        }
                        button {
                            r#type: "submit",
                            style: "width: 100%; background: #2563eb; color: #ffffff; border: none; border-radius: 6px; padding: 10px; cursor: pointer;",
                            disabled: submitting,
                            "Masuk"
                        }
                    }
                }
                p {
                    style: "text-align: center; font-size: 12px; color: #64748b;",
                    "Sistem Monitoring Kolam Lele (PH Air dan Kekeruhan)."
                }
            }
        }
    }
}
