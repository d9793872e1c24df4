use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod controller;
mod forms;
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod header;
    pub mod layout;
    pub mod stats;
    pub mod sticky_widget;
    pub mod testimonials;
}
mod pages {
    pub mod events;
    pub mod gallery;
    pub mod home;
    pub mod partnership;
    pub mod privacy;
    pub mod products;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use components::layout::Layout;
use pages::{
    events::Events, gallery::Gallery, home::Home, partnership::Partnership, privacy::Privacy,
    products::Products,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/products")]
    Products,
    #[at("/gallery")]
    Gallery,
    #[at("/events")]
    Events,
    #[at("/partnership")]
    Partnership,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    info!("Rendering {:?} page", route);
    let page = match route {
        Route::Home => html! { <Home /> },
        Route::Privacy => html! { <Privacy /> },
        Route::Products => html! { <Products /> },
        Route::Gallery => html! { <Gallery /> },
        Route::Events => html! { <Events /> },
        Route::Partnership => html! { <Partnership /> },
        Route::NotFound => html! {
            <section id="not-found" class="page">
                <div class="container">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
                </div>
            </section>
        },
    };
    html! { <Layout>{ page }</Layout> }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Networkth365 site");
    yew::Renderer::<App>::new().render();
}
