//! Email/password sign-in form.

use api::{AuthPhase, HttpDirectory};
use dioxus::prelude::*;
use store::Credentials;

use crate::icons::{FaArrowRight, FaEnvelope, FaLock, FaSpinner};
use crate::{use_session, Icon};

/// Login view.
///
/// `children` is rendered under the form (platform packages put the link to the
/// signup route there).
#[component]
pub fn LoginView(
    /// Called once the session has been stored.
    on_authenticated: EventHandler<()>,
    children: Element,
) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phase = use_signal(AuthPhase::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !phase.write().begin() {
            return;
        }
        let credentials = Credentials::new(email(), password());
        spawn(async move {
            let directory = HttpDirectory::new(&session.config().api.base_url);
            let result = api::login(&directory, &session.store(), &credentials).await;
            phase.write().finish(result);

            let user = phase.read().user().cloned();
            if let Some(user) = user {
                session.sign_in(user);
                on_authenticated.call(());
            }
        });
    };

    let submitting = phase.read().is_submitting();
    let error = phase.read().error().map(str::to_string);

    rsx! {
        div {
            class: "split-screen",

            div {
                class: "auth-hero auth-hero-login",
                div {
                    class: "auth-hero-text",
                    h2 { "Elevate Your Career" }
                    p {
                        "Join thousands of professionals finding their dream jobs every day. "
                        "Your next big opportunity is just a click away."
                    }
                }
            }

            div {
                class: "form-side",
                div {
                    class: "auth-content",

                    div {
                        class: "auth-header",
                        h1 { class: "auth-title", "Welcome Back" }
                        p { class: "auth-subtitle", "Please enter your details to sign in." }
                    }

                    form {
                        onsubmit: handle_login,

                        div {
                            class: "input-group",
                            label { class: "input-label", r#for: "login-email", "Email Address" }
                            div {
                                class: "input-with-icon",
                                span { class: "input-icon", Icon { icon: FaEnvelope, width: 14, height: 14 } }
                                input {
                                    id: "login-email",
                                    class: "input-field",
                                    r#type: "email",
                                    placeholder: "you@company.com",
                                    required: true,
                                    value: email(),
                                    oninput: move |evt: FormEvent| {
                                        email.set(evt.value());
                                        phase.write().edit();
                                    },
                                }
                            }
                        }

                        div {
                            class: "input-group",
                            label { class: "input-label", r#for: "login-password", "Password" }
                            div {
                                class: "input-with-icon",
                                span { class: "input-icon", Icon { icon: FaLock, width: 14, height: 14 } }
                                input {
                                    id: "login-password",
                                    class: "input-field",
                                    r#type: "password",
                                    placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                                    required: true,
                                    value: password(),
                                    oninput: move |evt: FormEvent| {
                                        password.set(evt.value());
                                        phase.write().edit();
                                    },
                                }
                            }
                        }

                        if let Some(err) = error {
                            p { class: "form-error", "{err}" }
                        }

                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: submitting,
                            if submitting {
                                span { class: "spin", Icon { icon: FaSpinner, width: 16, height: 16 } }
                            } else {
                                "Sign In"
                                Icon { icon: FaArrowRight, width: 14, height: 14 }
                            }
                        }
                    }

                    div {
                        class: "auth-footer",
                        {children}
                    }
                }
            }
        }
    }
}
