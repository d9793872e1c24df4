use yew::prelude::*;

const PRODUCTS: &[(&str, &str)] = &[
    ("Business firewalls", "Next-generation firewalls sized for offices of five to five hundred."),
    ("Managed Wi-Fi", "Access points with central management, guest networks and usage reports."),
    ("Backup appliances", "On-site backup with encrypted off-site replication and tested restores."),
    ("Microsoft 365", "Licensing, setup and migration for email, Teams and SharePoint."),
];

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <section id="products" class="page products">
            <div class="container">
                <div class="section-header animate-on-scroll">
                    <h1>{"Products"}</h1>
                    <p>{"Hardware and software we install, resell and support."}</p>
                </div>
                <div class="products-grid">
                    { for PRODUCTS.iter().map(|&(name, blurb)| html! {
                        <article class="product-card animate-on-scroll">
                            <h3>{ name }</h3>
                            <p>{ blurb }</p>
                            <a href="/#contact" class="btn btn-secondary">{"Ask for a quote"}</a>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
