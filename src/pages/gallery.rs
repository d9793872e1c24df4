use yew::prelude::*;

const PROJECTS: &[(&str, &str)] = &[
    ("server-room.jpg", "Server room rebuild for a regional law firm"),
    ("cabling.jpg", "Structured cabling in a new dental clinic"),
    ("wifi-survey.jpg", "Warehouse Wi-Fi survey and install"),
    ("office-network.jpg", "Two-site office network with VPN"),
    ("rack.jpg", "Rack and power redesign"),
    ("training.jpg", "Security awareness session for staff"),
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id="gallery" class="page gallery">
            <div class="container">
                <div class="section-header animate-on-scroll">
                    <h1>{"Gallery"}</h1>
                    <p>{"A few recent jobs."}</p>
                </div>
                <div class="gallery-grid">
                    { for PROJECTS.iter().map(|&(file, caption)| html! {
                        <figure class="gallery-item animate-on-scroll">
                            <img src={format!("/assets/gallery/{}", file)} alt={caption} loading="lazy" />
                            <figcaption>{ caption }</figcaption>
                        </figure>
                    }) }
                </div>
            </div>
        </section>
    }
}
