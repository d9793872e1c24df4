use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::controller::elements::ids;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let mail_href = format!("mailto:{}", config::CONTACT_RECIPIENT);

    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="logo">{"Networkth365"}</Link<Route>>
                    <p>{"IT consulting, networking and managed services for small businesses."}</p>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    <Link<Route> to={Route::Products}>{"Products"}</Link<Route>>
                    <Link<Route> to={Route::Events}>{"Events"}</Link<Route>>
                    <Link<Route> to={Route::Partnership}>{"Partnership"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <a href={mail_href}>{ config::CONTACT_RECIPIENT }</a>
                </nav>
                <p class="footer-copy">
                    {"© "}<span id={ids::CURRENT_YEAR}></span>{" Networkth365. All rights reserved."}
                </p>
            </div>
        </footer>
    }
}
