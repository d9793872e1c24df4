use yew::prelude::*;

use crate::config;

#[function_component(Privacy)]
pub fn privacy() -> Html {
    html! {
        <section id="privacy" class="page legal">
            <div class="container">
                <h1>{"Privacy Policy"}</h1>
                <p class="legal-updated">{"Last updated: January 2025"}</p>

                <h2>{"What we collect"}</h2>
                <p>{"This site does not store anything you type. The contact forms build an email in your own mail app; nothing is sent to us until you press send there."}</p>

                <h2>{"Analytics"}</h2>
                <p>{"We use aggregate, anonymous page-view statistics to see which pages are useful. No advertising profiles are built from them."}</p>

                <h2>{"Email"}</h2>
                <p>{"Messages you send us are used only to answer your enquiry and are never sold or shared."}</p>

                <h2>{"Contact"}</h2>
                <p>
                    {"Questions about this policy? Write to "}
                    <a href={format!("mailto:{}", config::CONTACT_RECIPIENT)}>{ config::CONTACT_RECIPIENT }</a>
                    {"."}
                </p>
            </div>
        </section>
    }
}
