use yew::prelude::*;

const EVENTS: &[(&str, &str, &str)] = &[
    ("March", "Small Business Security Night", "A plain-language walk through the attacks hitting local businesses and how to stop them."),
    ("June", "Cloud Office Hours", "Bring your questions about moving files and email to the cloud."),
    ("October", "Cybersecurity Awareness Month Workshop", "Hands-on phishing and password training for your staff."),
];

#[function_component(Events)]
pub fn events() -> Html {
    html! {
        <section id="events" class="page events">
            <div class="container">
                <div class="section-header animate-on-scroll">
                    <h1>{"Events"}</h1>
                    <p>{"Free workshops and meetups we run through the year."}</p>
                </div>
                <ul class="events-list">
                    { for EVENTS.iter().map(|&(month, title, blurb)| html! {
                        <li class="event-card animate-on-scroll">
                            <span class="event-month">{ month }</span>
                            <h3>{ title }</h3>
                            <p>{ blurb }</p>
                        </li>
                    }) }
                </ul>
                <p class="events-cta">
                    {"Want one at your office? "}<a href="/#contact">{"Get in touch"}</a>{"."}
                </p>
            </div>
        </section>
    }
}
