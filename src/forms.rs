pub mod dom;
pub mod mailto;
pub mod submit;
pub mod validate;

/// `name` attributes of the contact form fields.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SERVICE: &str = "service";
    pub const MESSAGE: &str = "message";

    pub const WIDGET_NAME: &str = "widget-name";
    pub const WIDGET_PHONE: &str = "widget-phone";
}

/// Id of the element that shows the error for the field called `name`.
pub fn error_slot_id(name: &str) -> String {
    format!("{}-error", name)
}
