//! Drag-and-drop image picker and staged-image previews.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser `File`s are read into memory here, then handed to the page as
//! `NewImage`s. Previews use object URLs created from the original file and
//! released when the image leaves the stage.

use leptos::prelude::*;

use crate::state::images::{ImagePreview, NewImage};

/// Drop target that also opens the file picker on click.
#[component]
pub fn ImageDropzone(on_drop: Callback<Vec<NewImage>>) -> impl IntoView {
    let dragging = RwSignal::new(false);
    #[cfg(not(feature = "hydrate"))]
    let _ = on_drop;

    view! {
        <div class="bg-white border border-secondary p-5 text-center">
            <label
                class="dropzone"
                class:dropzone--active=move || dragging.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(false);
                    #[cfg(feature = "hydrate")]
                    {
                        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                            read_files(&files, on_drop);
                        }
                    }
                }
            >
                <input
                    class="dropzone__input"
                    type="file"
                    accept="image/*"
                    multiple=true
                    on:change=move |ev| {
                        #[cfg(feature = "hydrate")]
                        {
                            let input: web_sys::HtmlInputElement = event_target(&ev);
                            if let Some(files) = input.files() {
                                read_files(&files, on_drop);
                            }
                            input.set_value("");
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = ev;
                        }
                    }
                />
                <div class="text-secondary">"Drag & drop some files here, or click to select files"</div>
            </label>
        </div>
    }
}

/// Thumbnail grid with a remove button per staged image.
#[component]
pub fn ImagePreviews(images: Signal<Vec<ImagePreview>>, on_remove: Callback<u64>) -> impl IntoView {
    view! {
        <div class="showimages d-flex flex-wrap gap-3">
            <For
                each=move || images.get()
                key=|img| img.id
                children=move |img| {
                    let id = img.id;
                    view! {
                        <div class="position-relative">
                            <button
                                type="button"
                                class="btn-close btn-close-white position-absolute"
                                title="Remove image"
                                on:click=move |_| on_remove.run(id)
                            ></button>
                            <img
                                src=img.preview_url.unwrap_or_default()
                                alt=img.file_name
                                width="200"
                                height="200"
                            />
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn read_files(list: &web_sys::FileList, on_drop: Callback<Vec<NewImage>>) {
    let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
    if files.is_empty() {
        return;
    }
    leptos::task::spawn_local(async move {
        let mut staged = Vec::with_capacity(files.len());
        for file in &files {
            match read_file(file).await {
                Ok(image) => staged.push(image),
                Err(e) => leptos::logging::warn!("failed to read {}: {e}", file.name()),
            }
        }
        on_drop.run(staged);
    });
}

#[cfg(feature = "hydrate")]
async fn read_file(file: &web_sys::File) -> Result<NewImage, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview_url = web_sys::Url::create_object_url_with_blob(file).ok();
    Ok(NewImage { file_name: file.name(), mime_type: file.type_(), bytes, preview_url })
}
