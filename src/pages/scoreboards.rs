//! Scoreboard management page: searchable table, editor modal, disable flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the route-level coordinator for an academy's scoreboard inventory.
//! The server owns all records; every mutation ends by reloading the current
//! page so the table always reflects server state, success or failure.
//!
//! TRADE-OFFS
//! ==========
//! Reloading after failed mutations costs a redundant request but removes any
//! chance of the table drifting from what the server actually holds.

#[cfg(test)]
#[path = "scoreboards_test.rs"]
mod scoreboards_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::api::PER_PAGE;
use crate::net::types::Scoreboard;
#[cfg(feature = "hydrate")]
use crate::net::types::ScoreboardPayload;
use crate::state::notices::NoticesState;
use crate::state::scoreboards::{Editor, Field, FormErrors, ScoreboardForm, ScoreboardsState};
use crate::util::pagination::{page_count, page_window};

/// Success notice for the editor's current mode.
#[cfg(any(test, feature = "hydrate"))]
fn save_success_text(editor: &Editor) -> &'static str {
    match editor {
        Editor::Editing(_) => "O placar foi atualizado com sucesso.",
        Editor::Closed | Editor::Creating => "O placar foi criado com sucesso.",
    }
}

/// Error notice for a failed save: the server's own message when it sent one,
/// else a fixed text for the editor's current mode.
#[cfg(any(test, feature = "hydrate"))]
fn save_error_text(editor: &Editor, error: &ApiError) -> String {
    let fallback = match editor {
        Editor::Editing(_) => "Ocorreu um erro ao atualizar o placar.",
        Editor::Closed | Editor::Creating => "Ocorreu um erro ao criar o placar.",
    };
    error.message_or(fallback)
}

#[cfg(feature = "hydrate")]
async fn run_list_request(
    academy_id: String,
    search: String,
    page: u64,
    ticket: u64,
    scoreboards: RwSignal<ScoreboardsState>,
) {
    match api::list_scoreboards(&academy_id, &search, page).await {
        Ok(result) => {
            scoreboards.update(|s| {
                s.apply_load(ticket, result);
            });
        }
        Err(error) => {
            log::error!("scoreboard list failed: {error}");
            scoreboards.update(|s| {
                s.fail_load(ticket, "Não foi possível carregar os placares.".to_owned());
            });
        }
    }
}

#[cfg(feature = "hydrate")]
async fn run_save_request(
    academy_id: String,
    payload: ScoreboardPayload,
    editor: RwSignal<Editor>,
    form: RwSignal<ScoreboardForm>,
    notices: RwSignal<NoticesState>,
    reload: impl Fn(),
) {
    let target = editor.get_untracked();
    if !target.is_open() {
        return;
    }
    let outcome = match target.target_id() {
        Some(id) => api::update_scoreboard(id, &payload).await,
        None => api::create_scoreboard(&academy_id, &payload).await,
    };
    match outcome {
        Ok(()) => {
            notices.update(|n| {
                n.push_success(save_success_text(&target).to_owned());
            });
            editor.set(Editor::Closed);
            form.update(ScoreboardForm::clear);
        }
        Err(error) => {
            log::error!("scoreboard save failed: {error}");
            notices.update(|n| {
                n.push_error(save_error_text(&target, &error));
            });
            // WHY: the editor stays open on failure so the entered values
            // survive for correction and resubmission.
        }
    }
    reload();
}

#[cfg(feature = "hydrate")]
async fn run_disable_request(scoreboard_id: String, notices: RwSignal<NoticesState>, reload: impl Fn()) {
    match api::disable_scoreboard(&scoreboard_id).await {
        Ok(()) => {
            notices.update(|n| {
                n.push_success("O placar foi desabilitado com sucesso.".to_owned());
            });
        }
        Err(error) => {
            log::error!("scoreboard disable failed: {error}");
            notices.update(|n| {
                n.push_error("Ocorreu um erro ao desabilitar o placar.".to_owned());
            });
        }
    }
    reload();
}

/// Scoreboard management page: searchable paginated table with register,
/// edit, and disable actions. Reads the academy id from the route parameter.
#[component]
pub fn ScoreboardsPage() -> impl IntoView {
    let _notices = expect_context::<RwSignal<NoticesState>>();
    let params = use_params_map();

    let scoreboards = RwSignal::new(ScoreboardsState::default());
    let editor = RwSignal::new(Editor::Closed);
    let form = RwSignal::new(ScoreboardForm::default());
    let form_errors = RwSignal::new(FormErrors::default());
    let confirming = RwSignal::new(None::<Scoreboard>);
    let search_input = RwSignal::new(String::new());
    let loaded_for = RwSignal::new(None::<String>);

    let academy_id = move || params.read().get("id").unwrap_or_default();

    let reload = move || {
        #[cfg(feature = "hydrate")]
        {
            let academy = params.read_untracked().get("id").unwrap_or_default();
            if academy.is_empty() {
                return;
            }
            let (search, page) = scoreboards.with_untracked(|s| (s.search.clone(), s.page));
            let mut ticket = 0;
            scoreboards.update(|s| ticket = s.begin_load());
            leptos::task::spawn_local(run_list_request(academy, search, page, ticket, scoreboards));
        }
    };

    // Reset and load whenever the academy in the route changes.
    Effect::new(move || {
        let academy = academy_id();
        if loaded_for.get_untracked().as_deref() == Some(academy.as_str()) {
            return;
        }
        loaded_for.set(Some(academy));
        scoreboards.update(ScoreboardsState::reset_for_academy);
        search_input.set(String::new());
        reload();
    });

    let run_search = move || {
        scoreboards.update(|s| s.reset_for_search(search_input.get_untracked()));
        reload();
    };

    let go_to_page = move |target: u64| {
        if scoreboards.with_untracked(|s| s.page) == target {
            return;
        }
        scoreboards.update(|s| s.page = target);
        reload();
    };

    let on_create = move |_| {
        form.set(ScoreboardForm::default());
        form_errors.set(FormErrors::default());
        editor.set(Editor::Creating);
    };

    let on_editor_cancel = Callback::new(move |_| {
        editor.set(Editor::Closed);
        form.update(ScoreboardForm::clear);
        form_errors.set(FormErrors::default());
    });

    let on_editor_submit = Callback::new(move |_| {
        match form.get_untracked().validate() {
            Err(errors) => form_errors.set(errors),
            Ok(payload) => {
                form_errors.set(FormErrors::default());
                #[cfg(feature = "hydrate")]
                {
                    let academy = params.read_untracked().get("id").unwrap_or_default();
                    leptos::task::spawn_local(run_save_request(academy, payload, editor, form, _notices, reload));
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = payload;
                }
            }
        }
    });

    let on_confirm_cancel = Callback::new(move |_| confirming.set(None));

    let on_confirm_disable = Callback::new(move |_| {
        let Some(record) = confirming.get_untracked() else {
            return;
        };
        confirming.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(run_disable_request(record.id, _notices, reload));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    });

    view! {
        <div class="scoreboards-page">
            <header class="scoreboards-page__header toolbar">
                <span class="toolbar__title">"Placares"</span>
                <a class="toolbar__academy-link" href=move || format!("/academies/{}", academy_id())>
                    "Dados da academia"
                </a>

                <span class="toolbar__spacer"></span>

                <input
                    class="toolbar__search"
                    type="text"
                    placeholder="Pesquisar placar"
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            run_search();
                        }
                    }
                />
                <button class="btn toolbar__search-submit" on:click=move |_| run_search()>
                    "Pesquisar"
                </button>
                <button class="btn btn--primary toolbar__register" on:click=on_create>
                    "Cadastrar placar"
                </button>
            </header>

            <Show when=move || scoreboards.get().error.is_some()>
                <p class="scoreboards-page__error">
                    {move || scoreboards.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || scoreboards.with(|s| !(s.loading && s.rows.is_empty()))
                fallback=move || view! { <p class="scoreboards-page__loading">"Carregando placares..."</p> }
            >
                <table class="scoreboards-page__table">
                    <thead>
                        <tr>
                            <th>"Descrição"</th>
                            <th>"Identificador único"</th>
                            <th>"Token estático"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            scoreboards
                                .get()
                                .rows
                                .into_iter()
                                .map(|record| {
                                    let edit_record = record.clone();
                                    let disable_record = record.clone();
                                    view! {
                                        <tr>
                                            <td>{record.description}</td>
                                            <td>{record.serial_number}</td>
                                            <td>{record.static_token}</td>
                                            <td class="scoreboards-page__actions">
                                                <button
                                                    class="btn btn--link"
                                                    on:click=move |_| {
                                                        form.set(ScoreboardForm::from_record(&edit_record));
                                                        form_errors.set(FormErrors::default());
                                                        editor.set(Editor::Editing(edit_record.clone()));
                                                    }
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn--link btn--danger"
                                                    on:click=move |_| confirming.set(Some(disable_record.clone()))
                                                >
                                                    "Desabilitar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || scoreboards.with(|s| !s.loading && s.rows.is_empty())>
                    <p class="scoreboards-page__empty">"Nenhum placar encontrado."</p>
                </Show>
            </Show>

            <div class="scoreboards-page__pager pager">
                <button
                    class="btn pager__nav"
                    disabled=move || scoreboards.get().page <= 1
                    on:click=move |_| {
                        let page = scoreboards.get_untracked().page;
                        if page > 1 {
                            go_to_page(page - 1);
                        }
                    }
                >
                    "‹"
                </button>
                {move || {
                    let current = scoreboards.get().page;
                    let count = page_count(scoreboards.get().total, PER_PAGE);
                    page_window(current, count)
                        .into_iter()
                        .map(|number| {
                            let class = if number == current {
                                "btn pager__page pager__page--current"
                            } else {
                                "btn pager__page"
                            };
                            view! {
                                <button class=class on:click=move |_| go_to_page(number)>
                                    {number}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="btn pager__nav"
                    disabled=move || {
                        scoreboards.with(|s| s.page >= page_count(s.total, PER_PAGE))
                    }
                    on:click=move |_| {
                        let (page, count) = scoreboards
                            .with_untracked(|s| (s.page, page_count(s.total, PER_PAGE)));
                        if page < count {
                            go_to_page(page + 1);
                        }
                    }
                >
                    "›"
                </button>
                <span class="pager__total">
                    {move || format!("{} registros", scoreboards.get().total)}
                </span>
            </div>

            <Show when=move || editor.get().is_open()>
                <ScoreboardDialog
                    editor=editor
                    form=form
                    errors=form_errors
                    on_cancel=on_editor_cancel
                    on_submit=on_editor_submit
                />
            </Show>
            <Show when=move || confirming.get().is_some()>
                <DisableConfirmDialog on_cancel=on_confirm_cancel on_confirm=on_confirm_disable/>
            </Show>
        </div>
    }
}

/// Modal dialog for registering or editing a scoreboard.
///
/// Validates the three required fields before handing control back through
/// `on_submit`; field-level messages render under the offending inputs.
#[component]
fn ScoreboardDialog(
    editor: RwSignal<Editor>,
    form: RwSignal<ScoreboardForm>,
    errors: RwSignal<FormErrors>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let enter_submit = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || editor.get().title()}</h2>

                <label class="dialog__label">
                    "Descrição"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Placar quadra 1"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        on:keydown=enter_submit
                    />
                </label>
                <Show when=move || errors.get().message_for(Field::Description).is_some()>
                    <p class="dialog__field-error">
                        {move || errors.get().message_for(Field::Description).unwrap_or_default()}
                    </p>
                </Show>

                <label class="dialog__label">
                    "Identificador único"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="1234"
                        prop:value=move || form.get().serial_number
                        on:input=move |ev| form.update(|f| f.serial_number = event_target_value(&ev))
                        on:keydown=enter_submit
                    />
                </label>
                <Show when=move || errors.get().message_for(Field::SerialNumber).is_some()>
                    <p class="dialog__field-error">
                        {move || errors.get().message_for(Field::SerialNumber).unwrap_or_default()}
                    </p>
                </Show>

                <label class="dialog__label">
                    "Token estático"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="1234"
                        prop:value=move || form.get().static_token
                        on:input=move |ev| form.update(|f| f.static_token = event_target_value(&ev))
                        on:keydown=enter_submit
                    />
                </label>
                <Show when=move || errors.get().message_for(Field::StaticToken).is_some()>
                    <p class="dialog__field-error">
                        {move || errors.get().message_for(Field::StaticToken).unwrap_or_default()}
                    </p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation prompt shown before a scoreboard is disabled.
#[component]
fn DisableConfirmDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <p class="dialog__danger">"Tem certeza?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Desabilitar"
                    </button>
                </div>
            </div>
        </div>
    }
}
