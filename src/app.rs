//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_host::NoticeHost;
use crate::pages::{academy::AcademyPage, scoreboards::ScoreboardsPage};
use crate::state::notices::NoticesState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared notice queue and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let notices = RwSignal::new(NoticesState::default());
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/academy-console.css"/>
        <Title text="Console da academia"/>

        <NoticeHost/>
        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=(StaticSegment("academies"), ParamSegment("id")) view=AcademyPage/>
                <Route
                    path=(StaticSegment("academies"), ParamSegment("id"), StaticSegment("scoreboards"))
                    view=ScoreboardsPage
                />
            </Routes>
        </Router>
    }
}
