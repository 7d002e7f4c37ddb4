//! Picture-card file selector for single-image form fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selection is captured, never transmitted. The component tracks at most one
//! tile and hands the raw browser file to the owning form through a callback;
//! the form decides if and when anything is uploaded.

#[cfg(test)]
#[path = "select_image_test.rs"]
mod select_image_test;

use leptos::prelude::*;

use crate::net::types::RawFile;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Display metadata for the single tracked image tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTile {
    /// File name shown on the tile.
    pub name: String,
    /// Image source: the seeded remote URL or a local object URL.
    pub preview_url: String,
    pub status: TileStatus,
}

/// How the tile's image came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileStatus {
    /// Seeded from the record's already-uploaded image.
    Done,
    /// Fresh local pick, not submitted anywhere yet.
    Selected,
}

impl TileStatus {
    fn class_suffix(self) -> &'static str {
        match self {
            TileStatus::Done => "done",
            TileStatus::Selected => "selected",
        }
    }
}

impl FileTile {
    /// Synthetic tile representing the record's current image.
    pub fn seed(initial_image_url: String) -> Self {
        Self {
            name: "logo.png".to_owned(),
            preview_url: initial_image_url,
            status: TileStatus::Done,
        }
    }

    /// Tile for a freshly picked local file.
    #[cfg(any(test, feature = "hydrate"))]
    pub fn picked(name: String, preview_url: String) -> Self {
        Self {
            name,
            preview_url,
            status: TileStatus::Selected,
        }
    }
}

/// Selection reported to the owning form after a list change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    /// A tile survives, so the owner keeps whatever file it was handed.
    Kept,
    /// The list emptied; the owner is told the image is gone.
    Cleared,
}

/// Selection for the tile list as it now stands: `Cleared` exactly when the
/// list is empty.
fn selection_after(list: &[FileTile]) -> Selection {
    if list.is_empty() {
        Selection::Cleared
    } else {
        Selection::Kept
    }
}

/// Single-image picker: a plus trigger while the tile list is empty, the
/// current tile with a remove affordance otherwise.
///
/// `initial_image_url` seeds one synthetic already-uploaded tile named
/// `logo.png`. `on_select_file` fires on every list change: `None` when the
/// list empties, otherwise the raw file of the single tile. No network I/O
/// happens here.
#[component]
pub fn SelectImage(
    name: String,
    initial_image_url: String,
    on_select_file: Callback<Option<RawFile>>,
) -> impl IntoView {
    let tiles = RwSignal::new(vec![FileTile::seed(initial_image_url)]);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
            tiles.set(vec![FileTile::picked(file.name(), preview_url)]);
            on_select_file.run(Some(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_remove = move |_ev: leptos::ev::MouseEvent| {
        tiles.update(|list| {
            #[cfg(feature = "hydrate")]
            if let Some(tile) = list.pop() {
                // Seeded tiles hold server URLs; only local picks own an object URL.
                if tile.status == TileStatus::Selected {
                    let _ = web_sys::Url::revoke_object_url(&tile.preview_url);
                }
            }
            #[cfg(not(feature = "hydrate"))]
            list.pop();
        });
        if tiles.with_untracked(|list| selection_after(list)) == Selection::Cleared {
            on_select_file.run(None);
        }
    };

    view! {
        <div class="select-image">
            {move || {
                tiles
                    .get()
                    .into_iter()
                    .map(|tile| {
                        let preview = (!tile.preview_url.is_empty())
                            .then(|| {
                                view! {
                                    <img
                                        class="select-image__preview"
                                        src=tile.preview_url.clone()
                                        alt=tile.name.clone()
                                    />
                                }
                            });
                        view! {
                            <div class=format!(
                                "select-image__tile select-image__tile--{}",
                                tile.status.class_suffix(),
                            )>
                                {preview}
                                <span class="select-image__name">{tile.name}</span>
                                <button type="button" class="select-image__remove" on:click=on_remove>
                                    "Remover"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=move || tiles.with(Vec::is_empty)>
                <label class="select-image__trigger">
                    <span class="select-image__plus">"+"</span>
                    <span class="select-image__hint">"Selecionar imagem"</span>
                    <input
                        class="select-image__input"
                        type="file"
                        name=name.clone()
                        accept="image/*"
                        on:change=on_change
                    />
                </label>
            </Show>
        </div>
    }
}
