//! Corner stack rendering the transient notice queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push outcome notices into `NoticesState`; this host renders them and
//! owns their lifetime, aging the queue on a hydrate-only poll loop.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticesState};

/// Fixed-corner stack of operation notices. Entries expire after their
/// display window and can be dismissed early by click.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let notices_poll = notices;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(500)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if notices_poll.get_untracked().items.is_empty() {
                    continue;
                }
                notices_poll.update(NoticesState::tick);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="notice-host">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let kind_class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        let id = notice.id;
                        view! {
                            <div
                                class=kind_class
                                on:click=move |_| notices.update(|state| state.dismiss(id))
                            >
                                {notice.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
