use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::stats::Stats;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::Route;

const SERVICE_BLURBS: &[(&str, &str)] = &[
    ("managed-it", "Monitoring, patching and help desk support so your team can stay focused on the work that pays."),
    ("networking", "Structured cabling, Wi-Fi surveys and firewalls installed and documented properly."),
    ("security", "Backups, endpoint protection and staff training that keep small businesses off the breach list."),
    ("cloud", "Email, files and line-of-business apps moved to the cloud without a day of downtime."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <section id="home" class="hero">
                <div class="container hero-content">
                    <h1 class="animate-on-scroll">{"Reliable IT for growing businesses"}</h1>
                    <p class="hero-subtitle animate-on-scroll">
                        {"Networkth365 designs, secures and supports the technology your business runs on."}
                    </p>
                    <div class="hero-cta-group animate-on-scroll">
                        <a href="#contact" class="btn btn-primary">{"Get a free consultation"}</a>
                        <a href="#services" class="btn btn-secondary">{"Explore services"}</a>
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <div class="section-header animate-on-scroll">
                        <h2>{"What We Do"}</h2>
                        <p>{"One partner for the whole stack, from the cable in the wall to the apps in the cloud."}</p>
                    </div>
                    <div class="services-grid">
                        { for SERVICE_BLURBS.iter().map(|&(value, blurb)| html! {
                            <article class="service-card animate-on-scroll">
                                <h3>{ config::service_label(value).unwrap_or_default() }</h3>
                                <p>{ blurb }</p>
                            </article>
                        }) }
                    </div>
                    <p class="services-more animate-on-scroll">
                        <Link<Route> to={Route::Products}>{"See the hardware and software we resell"}</Link<Route>>
                    </p>
                </div>
            </section>

            <Stats />

            <section id="about" class="about">
                <div class="container about-inner">
                    <div class="about-text animate-on-scroll">
                        <h2>{"Local, responsive, accountable"}</h2>
                        <p>{"We started Networkth365 to give small offices the kind of IT support big companies take for granted. Every client gets a named engineer, written documentation of their setup and a straight answer when something breaks."}</p>
                        <a href="#contact" class="btn btn-secondary">{"Talk to an engineer"}</a>
                    </div>
                </div>
            </section>

            <Testimonials />

            <section id="contact" class="contact">
                <div class="container contact-inner">
                    <div class="contact-info animate-on-scroll">
                        <h2>{"Let's Talk"}</h2>
                        <p>{"Tell us what you need and we'll get back to you within one business day."}</p>
                    </div>
                    <ContactForm />
                </div>
            </section>
        </>
    }
}
