use yew::prelude::*;

use crate::controller::elements::{classes, ids};

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They rebuilt our office network over a weekend. Monday morning everything just worked.",
        name: "Maria Lopez",
        role: "Owner, Lopez Dental",
    },
    Testimonial {
        quote: "Our cloud move was painless. Clear plan, clear pricing, no surprises.",
        name: "David Chen",
        role: "Operations Lead, Brightline Logistics",
    },
    Testimonial {
        quote: "Fast answers every time we call. It feels like having an IT team in house.",
        name: "Priya Shah",
        role: "Director, Shah & Co. Accounting",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header animate-on-scroll">
                    <h2>{"What Our Clients Say"}</h2>
                </div>

                <div id={ids::TESTIMONIALS_SLIDER} class="testimonials-slider">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <blockquote class={classes!(classes::TESTIMONIAL_CARD, classes::ANIMATE_ON_SCROLL)}>
                            <p class="testimonial-quote">{ t.quote }</p>
                            <footer>
                                <cite class="testimonial-name">{ t.name }</cite>
                                <span class="testimonial-role">{ t.role }</span>
                            </footer>
                        </blockquote>
                    }) }
                </div>

                <div class="testimonials-nav">
                    <button id={ids::TESTIMONIALS_PREV} class="testimonials-arrow" type="button" aria-label="Previous testimonial">
                        {"‹"}
                    </button>
                    <div id={ids::TESTIMONIALS_DOTS} class="testimonials-dots">
                        { for (0..TESTIMONIALS.len()).map(|i| html! {
                            <button
                                class={classes!(classes::TESTIMONIAL_DOT, (i == 0).then_some(classes::ACTIVE))}
                                type="button"
                                aria-label={format!("Show testimonial {}", i + 1)}
                            />
                        }) }
                    </div>
                    <button id={ids::TESTIMONIALS_NEXT} class="testimonials-arrow" type="button" aria-label="Next testimonial">
                        {"›"}
                    </button>
                </div>
            </div>
        </section>
    }
}
