use yew::prelude::*;
use yew_router::prelude::*;

use crate::controller::elements::{classes, ids};
use crate::Route;

/// Sections of the home page that get a link in the nav.
const HOME_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

const PAGES: &[(Route, &str)] = &[
    (Route::Products, "Products"),
    (Route::Gallery, "Gallery"),
    (Route::Events, "Events"),
    (Route::Partnership, "Partnership"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_home: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    // Off the home page the section links go back to it.
    let section_href = |id: &str| {
        if props.on_home {
            format!("#{}", id)
        } else {
            format!("/#{}", id)
        }
    };

    html! {
        <header id={ids::HEADER} class="header">
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes="logo">
                    {"Networkth365"}
                </Link<Route>>

                <button
                    id={ids::NAV_TOGGLE}
                    class="nav-toggle"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-controls={ids::NAV_MENU}
                    aria-expanded="false"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav id={ids::NAV_MENU} class="nav-menu" aria-label="Main">
                    <ul class="nav-list">
                        { for HOME_SECTIONS.iter().map(|&(id, label)| html! {
                            <li>
                                <a href={section_href(id)} class={classes::NAV_LINK}>{ label }</a>
                            </li>
                        }) }
                        { for PAGES.iter().map(|(route, label)| html! {
                            <li>
                                <Link<Route> to={route.clone()} classes={classes!(classes::NAV_LINK)}>{ *label }</Link<Route>>
                            </li>
                        }) }
                    </ul>
                    <a href={section_href("contact")} class="btn btn-primary nav-cta">{"Get a Quote"}</a>
                </nav>
            </div>
        </header>
    }
}
