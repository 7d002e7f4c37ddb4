//! Academy profile page: name and logo form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits the academy record the scoreboards belong to. The logo travels as a
//! raw browser file from `SelectImage` into page state and is only uploaded
//! here, as one multipart save together with the name.

#[cfg(test)]
#[path = "academy_test.rs"]
mod academy_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::select_image::SelectImage;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Academy, RawFile};
use crate::state::notices::NoticesState;

const NAME_REQUIRED: &str = "Por favor digite o nome da academia";

/// Trim the academy name and require it non-empty before any save.
fn validate_name_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NAME_REQUIRED);
    }
    Ok(trimmed.to_owned())
}

#[cfg(feature = "hydrate")]
async fn run_profile_request(
    academy_id: String,
    profile: RwSignal<Option<Academy>>,
    name: RwSignal<String>,
    picked: RwSignal<Option<RawFile>, LocalStorage>,
    load_error: RwSignal<Option<String>>,
) {
    match api::fetch_academy(&academy_id).await {
        Ok(result) => {
            name.set(result.name.clone());
            picked.set(None);
            load_error.set(None);
            profile.set(Some(result));
        }
        Err(error) => {
            log::error!("academy load failed: {error}");
            load_error.set(Some("Não foi possível carregar os dados da academia.".to_owned()));
        }
    }
}

#[cfg(feature = "hydrate")]
async fn run_profile_save(
    academy_id: String,
    name: String,
    logo: Option<RawFile>,
    busy: RwSignal<bool>,
    notices: RwSignal<NoticesState>,
    reload: impl Fn(),
) {
    let outcome = api::update_academy(&academy_id, &name, logo.as_ref()).await;
    busy.set(false);
    match outcome {
        Ok(()) => {
            notices.update(|n| {
                n.push_success("Os dados da academia foram atualizados com sucesso.".to_owned());
            });
            reload();
        }
        Err(error) => {
            log::error!("academy save failed: {error}");
            notices.update(|n| {
                n.push_error(error.message_or("Ocorreu um erro ao atualizar os dados da academia."));
            });
        }
    }
}

/// Academy profile page: loads the record named by the route parameter and
/// saves name plus optional new logo as one multipart request.
#[component]
pub fn AcademyPage() -> impl IntoView {
    let _notices = expect_context::<RwSignal<NoticesState>>();
    let params = use_params_map();

    let profile = RwSignal::new(None::<Academy>);
    let name = RwSignal::new(String::new());
    let name_error = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let loaded_for = RwSignal::new(None::<String>);
    // Files are thread-local browser objects, so the slot lives in local storage.
    let picked = RwSignal::new_local(None::<RawFile>);

    let academy_id = move || params.read().get("id").unwrap_or_default();

    let reload = move || {
        #[cfg(feature = "hydrate")]
        {
            let academy = params.read_untracked().get("id").unwrap_or_default();
            if academy.is_empty() {
                return;
            }
            leptos::task::spawn_local(run_profile_request(academy, profile, name, picked, load_error));
        }
    };

    // Reset and load whenever the academy in the route changes.
    Effect::new(move || {
        let academy = academy_id();
        if loaded_for.get_untracked().as_deref() == Some(academy.as_str()) {
            return;
        }
        loaded_for.set(Some(academy));
        profile.set(None);
        name.set(String::new());
        name_error.set(false);
        load_error.set(None);
        reload();
    });

    let on_select_file = Callback::new(move |file: Option<RawFile>| picked.set(file));

    let on_save = move |_| {
        if busy.get_untracked() {
            return;
        }
        match validate_name_input(&name.get_untracked()) {
            Err(_) => name_error.set(true),
            Ok(name_value) => {
                name_error.set(false);
                #[cfg(feature = "hydrate")]
                {
                    busy.set(true);
                    let academy = params.read_untracked().get("id").unwrap_or_default();
                    let logo = picked.get_untracked();
                    leptos::task::spawn_local(run_profile_save(
                        academy, name_value, logo, busy, _notices, reload,
                    ));
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = name_value;
                }
            }
        }
    };

    view! {
        <div class="academy-page">
            <header class="academy-page__header toolbar">
                <span class="toolbar__title">"Dados da academia"</span>
                <span class="toolbar__spacer"></span>
                <a
                    class="toolbar__scoreboards-link"
                    href=move || format!("/academies/{}/scoreboards", academy_id())
                >
                    "Placares"
                </a>
            </header>

            <Show when=move || load_error.get().is_some()>
                <p class="academy-page__error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || profile.get().is_some()
                fallback=move || {
                    view! { <p class="academy-page__loading">"Carregando dados da academia..."</p> }
                }
            >
                {move || {
                    profile
                        .get()
                        .map(|academy| {
                            view! {
                                <div class="academy-page__form">
                                    <label class="dialog__label">
                                        "Nome"
                                        <input
                                            class="dialog__input"
                                            type="text"
                                            prop:value=move || name.get()
                                            on:input=move |ev| name.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <Show when=move || name_error.get()>
                                        <p class="dialog__field-error">{NAME_REQUIRED}</p>
                                    </Show>

                                    <SelectImage
                                        name="logo".to_owned()
                                        initial_image_url=academy.logo_url.unwrap_or_default()
                                        on_select_file=on_select_file
                                    />

                                    <div class="academy-page__actions">
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || busy.get()
                                            on:click=on_save
                                        >
                                            {move || if busy.get() { "Salvando..." } else { "Salvar" }}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
