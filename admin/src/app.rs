//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::add_product::AddProductPage;
use crate::state::{catalog::CatalogState, product::ProductState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = RwSignal::new(CatalogState::default());
    let product = RwSignal::new(ProductState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(catalog);
    provide_context(product);
    provide_context(toasts);

    view! {
        <Title text="Catalog Admin"/>

        <Router>
            <ToastStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/admin/product"/> }/>
                <Route path=(StaticSegment("admin"), StaticSegment("product")) view=AddProductPage/>
            </Routes>
        </Router>
    }
}
