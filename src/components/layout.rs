use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::sticky_widget::StickyWidget;
use crate::controller::scheduler::BrowserScheduler;
use crate::controller::Controller;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Chrome shared by every page. Attaches the page controller once the page
/// is in the DOM and re-attaches it whenever the route changes.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home) | None);

    {
        use_effect_with_deps(
            move |_| {
                // Links like "/#contact" are scrolled to by the controller.
                if let Some(window) = web_sys::window() {
                    let hash = window.location().hash().unwrap_or_default();
                    if hash.len() <= 1 {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                let controller = Controller::attach(Rc::new(BrowserScheduler));
                move || drop(controller)
            },
            route,
        );
    }

    html! {
        <>
            <Header {on_home} />
            <main id="main">
                { for props.children.iter() }
            </main>
            <Footer />
            <StickyWidget />
        </>
    }
}
