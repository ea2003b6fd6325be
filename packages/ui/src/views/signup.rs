//! Account creation form.

use api::{AuthPhase, HttpDirectory};
use dioxus::prelude::*;
use store::{NewUser, Role};

use crate::icons::{FaArrowRight, FaBriefcase, FaEnvelope, FaLock, FaMagnifyingGlass, FaSpinner, FaUser};
use crate::{use_session, Icon};

/// Two-way seeker/employer toggle.
#[component]
fn RoleToggle(role: Role, on_change: EventHandler<Role>) -> Element {
    let class_for = move |r: Role| if role == r { "btn btn-primary" } else { "btn btn-outline" };

    rsx! {
        div {
            class: "role-toggle",
            button {
                r#type: "button",
                class: class_for(Role::Seeker),
                onclick: move |_| on_change.call(Role::Seeker),
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                "{Role::Seeker.label()}"
            }
            button {
                r#type: "button",
                class: class_for(Role::Employer),
                onclick: move |_| on_change.call(Role::Employer),
                Icon { icon: FaBriefcase, width: 14, height: 14 }
                "{Role::Employer.label()}"
            }
        }
    }
}

/// Signup view.
///
/// `children` is rendered under the form (platform packages put the link to the
/// login route there).
#[component]
pub fn SignupView(
    /// Called once the new account's session has been stored.
    on_authenticated: EventHandler<()>,
    children: Element,
) -> Element {
    let mut session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut phase = use_signal(AuthPhase::default);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        if !phase.write().begin() {
            return;
        }
        let form = NewUser {
            name: name(),
            email: email(),
            password: password(),
            role: role(),
        };
        spawn(async move {
            let directory = HttpDirectory::new(&session.config().api.base_url);
            let result = api::signup(&directory, &session.store(), &form).await;
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
                class: "auth-hero auth-hero-signup",
                div {
                    class: "auth-hero-text",
                    h2 { "Start Your Journey" }
                    p {
                        "Connect with top employers and talented professionals. "
                        "Build the future you've always imagined."
                    }
                }
            }

            div {
                class: "form-side",
                div {
                    class: "auth-content",

                    div {
                        class: "auth-header",
                        h1 { class: "auth-title", "Create Account" }
                        p { class: "auth-subtitle", "Join us to find your next opportunity." }
                    }

                    form {
                        onsubmit: handle_signup,

                        div {
                            class: "input-group",
                            label { class: "input-label", r#for: "signup-name", "Full Name" }
                            div {
                                class: "input-with-icon",
                                span { class: "input-icon", Icon { icon: FaUser, width: 14, height: 14 } }
                                input {
                                    id: "signup-name",
                                    class: "input-field",
                                    r#type: "text",
                                    placeholder: "John Doe",
                                    required: true,
                                    value: name(),
                                    oninput: move |evt: FormEvent| {
                                        name.set(evt.value());
                                        phase.write().edit();
                                    },
                                }
                            }
                        }

                        div {
                            class: "input-group",
                            label { class: "input-label", r#for: "signup-email", "Email Address" }
                            div {
                                class: "input-with-icon",
                                span { class: "input-icon", Icon { icon: FaEnvelope, width: 14, height: 14 } }
                                input {
                                    id: "signup-email",
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
                            label { class: "input-label", r#for: "signup-password", "Password" }
                            div {
                                class: "input-with-icon",
                                span { class: "input-icon", Icon { icon: FaLock, width: 14, height: 14 } }
                                input {
                                    id: "signup-password",
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

                        div {
                            class: "input-group",
                            label { class: "input-label", "I am a..." }
                            RoleToggle {
                                role: role(),
                                on_change: move |r: Role| role.set(r),
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
                                "Create Account"
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
