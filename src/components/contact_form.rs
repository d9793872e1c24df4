use yew::prelude::*;

use crate::config;
use crate::controller::elements::ids;
use crate::forms::{error_slot_id, fields};

#[derive(Properties, PartialEq)]
struct FieldProps {
    name: &'static str,
    label: &'static str,
    #[prop_or("text")]
    kind: &'static str,
    #[prop_or_default]
    children: Children,
}

/// Label, control and the slot its error message goes into.
#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let id = format!("contact-{}", props.name);
    let control = if !props.children.is_empty() {
        html! { { for props.children.iter() } }
    } else {
        html! {
            <input id={id.clone()} type={props.kind} name={props.name} required={true} />
        }
    };

    html! {
        <div class="form-group">
            <label for={id}>{ props.label }</label>
            { control }
            <span id={error_slot_id(props.name)} class="form-error" aria-live="polite"></span>
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    html! {
        <div class="contact-form-wrapper">
            <form id={ids::CONTACT_FORM} class="contact-form" novalidate={true}>
                <div class="form-row">
                    <FormField name={fields::NAME} label="Full name" />
                    <FormField name={fields::EMAIL} label="Email" kind="email" />
                </div>
                <div class="form-row">
                    <FormField name={fields::PHONE} label="Phone" kind="tel" />
                    <FormField name={fields::SERVICE} label="Service">
                        <select id="contact-service" name={fields::SERVICE} required={true}>
                            <option value="" selected={true} disabled={true}>{"Select a service"}</option>
                            { for config::SERVICES.iter().map(|&(value, label)| html! {
                                <option value={value}>{ label }</option>
                            }) }
                        </select>
                    </FormField>
                </div>
                <FormField name={fields::MESSAGE} label="Message">
                    <textarea id="contact-message" name={fields::MESSAGE} rows="5" required={true} />
                </FormField>
                <button type="submit" class="btn btn-primary btn-block">
                    <span class="btn-text">{"Send Message"}</span>
                </button>
            </form>
            <div id={ids::FORM_SUCCESS} class="form-success" role="status">
                <h3>{"Message ready!"}</h3>
                <p>{"Your mail app should have opened with your message. Send it and we'll reply within one business day."}</p>
            </div>
        </div>
    }
}
