use dioxus::prelude::*;
use store::ProfileEdit;

use crate::icons::{FaCamera, FaFloppyDisk};
use crate::timer::sleep;
use crate::{expire_after, use_session, Flash, Icon};

const SUCCESS_MESSAGE: &str = "Profile updated successfully!";

#[derive(Clone, Debug, PartialEq)]
enum SaveStatus {
    Saved,
    Failed(String),
}

/// Profile form. Edits stay local until saved into the session.
#[component]
pub fn ProfileTab() -> Element {
    let mut session = use_session();
    let mut form = use_signal(|| {
        session
            .user()
            .map(|user| ProfileEdit::from_record(&user))
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);
    let mut status = use_signal(Flash::<SaveStatus>::default);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);
        status.write().clear();
        let edit = form();
        spawn(async move {
            let config = session.config();
            sleep(config.profile.save_delay()).await;

            let result = api::save_profile(&session.store(), &edit).await;
            saving.set(false);
            match result {
                Ok(user) => {
                    session.update(user);
                    let generation = status.write().show(SaveStatus::Saved);
                    expire_after(config.profile.success_message_duration(), generation, move |g| {
                        status.write().expire(g)
                    })
                    .await;
                }
                Err(e) => {
                    tracing::error!("profile save failed: {e}");
                    status.write().show(SaveStatus::Failed(e.to_string()));
                }
            }
        });
    };

    let Some(user) = session.user() else {
        return rsx! {};
    };
    let edit = form();

    rsx! {
        div {
            class: "card profile-card",

            div {
                class: "profile-header",
                div {
                    class: "profile-avatar-wrap",
                    div { class: "avatar avatar-lg", "{user.initial()}" }
                    button {
                        r#type: "button",
                        class: "avatar-camera",
                        title: "Change photo",
                        Icon { icon: FaCamera, width: 14, height: 14 }
                    }
                }
                div {
                    h2 { class: "profile-name", "{user.name}" }
                    p { class: "profile-title", "{edit.title}" }
                }
            }

            form {
                onsubmit: handle_save,

                div {
                    class: "form-row",
                    div {
                        class: "input-group",
                        label { class: "input-label", r#for: "profile-name", "Full Name" }
                        input {
                            id: "profile-name",
                            class: "input-field",
                            r#type: "text",
                            required: true,
                            value: "{edit.name}",
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    div {
                        class: "input-group",
                        label { class: "input-label", r#for: "profile-email", "Email Address" }
                        input {
                            id: "profile-email",
                            class: "input-field input-readonly",
                            r#type: "email",
                            value: "{edit.email}",
                            disabled: true,
                        }
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "input-group",
                        label { class: "input-label", r#for: "profile-title", "Job Title" }
                        input {
                            id: "profile-title",
                            class: "input-field",
                            r#type: "text",
                            value: "{edit.title}",
                            oninput: move |evt: FormEvent| form.write().title = evt.value(),
                        }
                    }
                    div {
                        class: "input-group",
                        label { class: "input-label", r#for: "profile-location", "Location" }
                        input {
                            id: "profile-location",
                            class: "input-field",
                            r#type: "text",
                            value: "{edit.location}",
                            oninput: move |evt: FormEvent| form.write().location = evt.value(),
                        }
                    }
                }

                div {
                    class: "input-group",
                    label { class: "input-label", r#for: "profile-phone", "Phone" }
                    input {
                        id: "profile-phone",
                        class: "input-field",
                        r#type: "tel",
                        value: "{edit.phone}",
                        oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                    }
                }

                div {
                    class: "input-group",
                    label { class: "input-label", r#for: "profile-bio", "Bio" }
                    textarea {
                        id: "profile-bio",
                        class: "input-field",
                        rows: "4",
                        value: "{edit.bio}",
                        oninput: move |evt: FormEvent| form.write().bio = evt.value(),
                    }
                }

                div {
                    class: "form-actions",
                    {match status.read().message().cloned() {
                        Some(SaveStatus::Saved) => rsx! {
                            span { class: "save-status success", "{SUCCESS_MESSAGE}" }
                        },
                        Some(SaveStatus::Failed(message)) => rsx! {
                            span { class: "save-status error", "{message}" }
                        },
                        None => rsx! {},
                    }}
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
