use yew::prelude::*;

use crate::controller::elements::ids;
use crate::forms::{error_slot_id, fields};

/// Quick-contact panel pinned to the corner of every page. Opening,
/// closing and submitting are handled by the page controller.
#[function_component(StickyWidget)]
pub fn sticky_widget() -> Html {
    html! {
        <div id={ids::STICKY_WIDGET} class="sticky-widget">
            <button
                id={ids::WIDGET_TOGGLE}
                class="sticky-widget-toggle"
                type="button"
                aria-label="Quick contact"
                aria-controls={ids::WIDGET_CONTENT}
                aria-expanded="false"
            >
                {"Talk to us"}
            </button>

            <div id={ids::WIDGET_CONTENT} class="sticky-widget-content">
                <h3>{"Need help fast?"}</h3>
                <p>{"Leave your name and number and we'll call you back."}</p>
                <form id={ids::WIDGET_FORM} class="widget-form" novalidate={true}>
                    <div class="form-group">
                        <input
                            type="text"
                            name={fields::WIDGET_NAME}
                            placeholder="Your name"
                            aria-label="Your name"
                            required={true}
                        />
                        <span id={error_slot_id(fields::WIDGET_NAME)} class="form-error"></span>
                    </div>
                    <div class="form-group">
                        <input
                            type="tel"
                            name={fields::WIDGET_PHONE}
                            placeholder="Phone number"
                            aria-label="Phone number"
                            required={true}
                        />
                        <span id={error_slot_id(fields::WIDGET_PHONE)} class="form-error"></span>
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">
                        <span class="btn-text">{"Request a call"}</span>
                    </button>
                </form>
                <div id={ids::WIDGET_SUCCESS} class="widget-success" role="status">
                    {"Thanks! We'll be in touch shortly."}
                </div>
            </div>
        </div>
    }
}
