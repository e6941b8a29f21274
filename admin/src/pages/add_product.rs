//! Add-product page: product fields, variant rows, image staging, submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reference lists load once on mount. Submit validates the form locally,
//! packages it as multipart, and posts it; the response status decides
//! between navigating to the product list and staying with an error toast.

#[cfg(test)]
#[path = "add_product_test.rs"]
mod add_product_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::attribute_row::AttributeRowEditor;
use crate::components::custom_input::CustomInput;
use crate::components::description_editor::DescriptionEditor;
use crate::components::image_dropzone::{ImageDropzone, ImagePreviews};
use crate::net::multipart::MultipartPayload;
use crate::net::types::CreateProductResponse;
use crate::state::catalog::CatalogState;
use crate::state::images::{NewImage, release_previews};
use crate::state::product::{FAILED_MESSAGE, ProductState, SubmitOutcome};
use crate::state::product_form::{Field, ProductForm};
use crate::state::toast::ToastState;

/// Fold a finished create-product call into request state and toasts.
///
/// Returns the route to navigate to, if any.
pub(crate) fn apply_submission(
    result: Result<CreateProductResponse, String>,
    product: &mut ProductState,
    toasts: &mut ToastState,
) -> Option<&'static str> {
    let outcome = match result {
        Ok(resp) => {
            let outcome = SubmitOutcome::from_status(resp.status);
            if outcome.is_success() {
                product.succeed(resp.body);
            } else {
                product.fail(format!("create product failed: {}", resp.status));
            }
            outcome
        }
        Err(e) => {
            product.fail(e);
            SubmitOutcome::Failed
        }
    };
    if outcome.is_success() {
        toasts.push_success(outcome.toast_text());
    } else {
        toasts.push_error(outcome.toast_text());
    }
    outcome.redirect()
}

/// Validate the form and package it; `None` means the form is not ready.
pub(crate) fn prepare_submission(form: &mut ProductForm) -> Option<Result<MultipartPayload, String>> {
    let draft = form.submit().ok()?;
    Some(MultipartPayload::from_draft(&draft))
}

#[cfg(feature = "hydrate")]
fn load_catalog(catalog: RwSignal<CatalogState>) {
    catalog.update(|c| c.loading = true);
    leptos::task::spawn_local(async move {
        let (categories, colors, sizes) = (
            crate::net::api::fetch_categories().await,
            crate::net::api::fetch_colors().await,
            crate::net::api::fetch_sizes().await,
        );
        catalog.update(|c| {
            match categories {
                Ok(rows) => c.categories = rows,
                Err(e) => c.record_error("categories", &e),
            }
            match colors {
                Ok(rows) => c.colors = rows,
                Err(e) => c.record_error("colors", &e),
            }
            match sizes {
                Ok(rows) => c.sizes = rows,
                Err(e) => c.record_error("sizes", &e),
            }
            c.loading = false;
        });
        if let Some(err) = catalog.get_untracked().error {
            leptos::logging::warn!("{err}");
        }
    });
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let product = expect_context::<RwSignal<ProductState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ProductForm::default());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    load_catalog(catalog);

    on_cleanup(move || {
        form.try_with_untracked(|f| release_previews(f.images.images()));
    });

    let field_value = move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let field_error = move |field: Field| Signal::derive(move || form.with(|f| f.visible_error(field)));
    let field_input = move |field: Field| Callback::new(move |v: String| form.update(|f| f.set_field(field, v)));
    let field_blur = move |field: Field| Callback::new(move |()| form.update(|f| f.blur(field)));

    let on_images = Callback::new(move |files: Vec<NewImage>| {
        let displaced = form.try_update(|f| f.images.stage(files)).unwrap_or_default();
        release_previews(&displaced);
    });
    let on_remove_image = Callback::new(move |id: u64| {
        if let Some(Some(removed)) = form.try_update(|f| f.images.remove(id)) {
            release_previews(std::slice::from_ref(&removed));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if product.with_untracked(|p| p.is_loading) {
            return;
        }
        let Some(Some(prepared)) = form.try_update(prepare_submission) else {
            return;
        };
        let payload = match prepared {
            Ok(payload) => payload,
            Err(e) => {
                leptos::logging::warn!("failed to encode product: {e}");
                toasts.update(|t| {
                    t.push_error(FAILED_MESSAGE);
                });
                return;
            }
        };
        if product.try_update(ProductState::begin) != Some(true) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_product(&payload).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("create product request failed: {e}");
                }
                let mut redirect = None;
                product.update(|p| toasts.update(|t| redirect = apply_submission(result, p, t)));
                if let Some(route) = redirect {
                    if let Some(released) = form.try_update(ProductForm::reset) {
                        release_previews(&released);
                    }
                    navigate(route, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate);
        }
    };

    view! {
        <div class="container">
            <h3 class="mb-4 title text-center">"Add Product"</h3>
            <Show when=move || catalog.with(|c| c.error.is_some())>
                <p class="error text-danger">{move || catalog.with(|c| c.error.clone().unwrap_or_default())}</p>
            </Show>
            <form class="d-flex gap-3 flex-column p-5" on:submit=on_submit>
                <CustomInput
                    label="Enter Product Title"
                    name="title"
                    value=field_value(Field::Title)
                    error=field_error(Field::Title)
                    on_input=field_input(Field::Title)
                    on_blur=field_blur(Field::Title)
                />

                <DescriptionEditor
                    value=field_value(Field::Description)
                    error=field_error(Field::Description)
                    on_input=field_input(Field::Description)
                    on_blur=field_blur(Field::Description)
                />

                <CustomInput
                    label="Enter Product Brand"
                    name="brand"
                    value=field_value(Field::Brand)
                    error=field_error(Field::Brand)
                    on_input=field_input(Field::Brand)
                    on_blur=field_blur(Field::Brand)
                />

                <div class="form-field">
                    <select
                        name="category"
                        class="form-select py-3 mb-3"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| f.set_field(Field::Category, event_target_value(&ev)))
                        on:blur=move |_| form.update(|f| f.blur(Field::Category))
                    >
                        <option value="">"Select Category"</option>
                        {move || {
                            catalog
                                .with(CatalogState::category_options)
                                .into_iter()
                                .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                                .collect_view()
                        }}
                    </select>
                    <div class="error text-danger">{move || form.with(|f| f.visible_error(Field::Category)).unwrap_or_default()}</div>
                </div>

                <ImageDropzone on_drop=on_images/>
                <ImagePreviews
                    images=Signal::derive(move || form.with(|f| f.images.previews()))
                    on_remove=on_remove_image
                />

                <For
                    each=move || 0..form.with(|f| f.attributes.len())
                    key=|idx| *idx
                    children=move |idx| view! { <AttributeRowEditor index=idx form=form catalog=catalog/> }
                />

                <button
                    type="button"
                    class="btn btn-primary btn-sm my-3"
                    on:click=move |_| form.update(|f| f.attributes.add())
                >
                    "Add attribute"
                </button>

                <button
                    class="btn btn-success btn-lg rounded-3 my-5"
                    type="submit"
                    disabled=move || product.with(|p| p.is_loading)
                >
                    {move || if product.with(|p| p.is_loading) { "Adding..." } else { "Add Product" }}
                </button>
            </form>
        </div>
    }
}
