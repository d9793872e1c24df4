use std::cell::Cell;
use std::rc::Rc;

use super::fields;
use super::mailto::{ContactMessage, MailDraft};
use super::validate::{validate_form, FieldError, FieldInput, Rules};
use crate::config;
use crate::controller::scheduler::Scheduler;

/// The side of a form the submission flow talks to.
pub trait FormHost {
    /// Every required field, in document order.
    fn required_fields(&self) -> Vec<FieldInput>;
    fn value(&self, name: &str) -> String;
    /// `None` clears any error shown for the field.
    fn show_field_error(&self, name: &str, error: Option<FieldError>);
    fn set_loading(&self, loading: bool);
    fn set_success_visible(&self, visible: bool);
    fn reset(&self);
    /// Hands the draft to the visitor's mail client. Nothing comes back.
    fn open_mail(&self, draft: &MailDraft);
}

/// Turns a `<select>` value into the label shown to the visitor.
pub type ServiceLookup = Rc<dyn Fn(&str) -> Option<String>>;

/// What happens once the simulated request finishes.
pub enum Completion {
    /// Compose a mail to the site owner from the contact fields.
    Mail { lookup: ServiceLookup },
    /// Close the panel holding the form when the confirmation goes away.
    ClosePanel { close: Rc<dyn Fn()> },
}

impl Completion {
    fn success_ms(&self) -> u32 {
        match self {
            Completion::Mail { .. } => config::CONTACT_SUCCESS_MS,
            Completion::ClosePanel { .. } => config::WIDGET_SUCCESS_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed. The errors are already on screen.
    Rejected,
    /// A previous submission has not finished yet.
    Busy,
    /// Accepted, completion is scheduled.
    Pending,
}

pub struct FormSubmission<H> {
    host: H,
    rules: Rules,
    completion: Completion,
    scheduler: Rc<dyn Scheduler>,
    in_flight: Cell<bool>,
}

impl<H: FormHost + 'static> FormSubmission<H> {
    pub fn new(
        host: H,
        rules: Rules,
        completion: Completion,
        scheduler: Rc<dyn Scheduler>,
    ) -> Rc<Self> {
        Rc::new(Self {
            host,
            rules,
            completion,
            scheduler,
            in_flight: Cell::new(false),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Checks every required field and paints the result onto the form.
    pub fn validate(&self) -> bool {
        let report = validate_form(&self.host.required_fields(), self.rules);
        for (name, result) in &report.results {
            self.host.show_field_error(name, result.err());
        }
        report.is_valid()
    }

    pub fn clear_error(&self, name: &str) {
        self.host.show_field_error(name, None);
    }

    pub fn submit(self: &Rc<Self>) -> SubmitOutcome {
        if self.in_flight.get() {
            return SubmitOutcome::Busy;
        }
        if !self.validate() {
            return SubmitOutcome::Rejected;
        }

        self.in_flight.set(true);
        self.host.set_loading(true);
        let this = self.clone();
        self.scheduler
            .after(config::SUBMIT_LATENCY_MS, Box::new(move || this.complete()));
        SubmitOutcome::Pending
    }

    fn complete(self: Rc<Self>) {
        self.host.set_loading(false);
        self.in_flight.set(false);

        if let Completion::Mail { lookup } = &self.completion {
            let draft = MailDraft::for_contact(&self.read_contact(lookup));
            log::info!("opening mail draft to {}", draft.to);
            self.host.open_mail(&draft);
        }

        self.host.set_success_visible(true);
        self.host.reset();

        let this = self.clone();
        self.scheduler.after(
            self.completion.success_ms(),
            Box::new(move || {
                this.host.set_success_visible(false);
                if let Completion::ClosePanel { close } = &this.completion {
                    close();
                }
            }),
        );
    }

    fn read_contact(&self, lookup: &ServiceLookup) -> ContactMessage {
        let service = self.host.value(fields::SERVICE);
        ContactMessage {
            name: self.host.value(fields::NAME),
            email: self.host.value(fields::EMAIL),
            phone: self.host.value(fields::PHONE),
            service: lookup(&service).unwrap_or(service),
            message: self.host.value(fields::MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::controller::scheduler::manual::ManualScheduler;
    use crate::forms::validate::FieldKind;

    #[derive(Default)]
    struct FakeForm {
        required: Vec<(&'static str, FieldKind)>,
        values: RefCell<HashMap<String, String>>,
        errors: RefCell<HashMap<String, FieldError>>,
        loading: Cell<bool>,
        success: Cell<bool>,
        mails: RefCell<Vec<MailDraft>>,
    }

    impl FakeForm {
        fn contact() -> Self {
            Self {
                required: vec![
                    (fields::NAME, FieldKind::Text),
                    (fields::EMAIL, FieldKind::Email),
                    (fields::PHONE, FieldKind::Tel),
                    (fields::MESSAGE, FieldKind::Text),
                ],
                ..Self::default()
            }
        }

        fn widget() -> Self {
            Self {
                required: vec![("widget-name", FieldKind::Text), ("widget-phone", FieldKind::Tel)],
                ..Self::default()
            }
        }

        fn fill(&self, name: &str, value: &str) {
            self.values.borrow_mut().insert(name.to_string(), value.to_string());
        }

        fn error(&self, name: &str) -> Option<FieldError> {
            self.errors.borrow().get(name).copied()
        }
    }

    impl FormHost for FakeForm {
        fn required_fields(&self) -> Vec<FieldInput> {
            self.required
                .iter()
                .map(|(name, kind)| FieldInput::new(*name, *kind, self.value(name)))
                .collect()
        }

        fn value(&self, name: &str) -> String {
            self.values.borrow().get(name).cloned().unwrap_or_default()
        }

        fn show_field_error(&self, name: &str, error: Option<FieldError>) {
            let mut errors = self.errors.borrow_mut();
            match error {
                Some(e) => errors.insert(name.to_string(), e),
                None => errors.remove(name),
            };
        }

        fn set_loading(&self, loading: bool) {
            self.loading.set(loading);
        }

        fn set_success_visible(&self, visible: bool) {
            self.success.set(visible);
        }

        fn reset(&self) {
            self.values.borrow_mut().clear();
        }

        fn open_mail(&self, draft: &MailDraft) {
            self.mails.borrow_mut().push(draft.clone());
        }
    }

    fn consulting_lookup() -> ServiceLookup {
        Rc::new(|value: &str| (value == "consulting").then(|| "Consulting".to_string()))
    }

    #[test]
    fn empty_contact_form_marks_every_required_field() {
        let clock = Rc::new(ManualScheduler::new());
        let form = FormSubmission::new(
            FakeForm::contact(),
            Rules::Full,
            Completion::Mail { lookup: consulting_lookup() },
            clock.clone(),
        );

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        for name in [fields::NAME, fields::EMAIL, fields::PHONE, fields::MESSAGE] {
            assert_eq!(form.host().error(name), Some(FieldError::EmptyField), "{}", name);
        }
        clock.advance(10_000);
        assert!(!form.host().success.get());
        assert!(form.host().mails.borrow().is_empty());

        form.host().fill(fields::NAME, "Jane");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.host().error(fields::NAME), None);
        assert_eq!(form.host().error(fields::EMAIL), Some(FieldError::EmptyField));
        assert_eq!(form.host().error(fields::MESSAGE), Some(FieldError::EmptyField));
    }

    #[test]
    fn valid_contact_form_hands_off_a_mail_after_the_delay() {
        let clock = Rc::new(ManualScheduler::new());
        let form = FormSubmission::new(
            FakeForm::contact(),
            Rules::Full,
            Completion::Mail { lookup: consulting_lookup() },
            clock.clone(),
        );
        let host = form.host();
        host.fill(fields::NAME, "Jane");
        host.fill(fields::EMAIL, "jane@x.com");
        host.fill(fields::PHONE, "5551234567");
        host.fill(fields::SERVICE, "consulting");
        host.fill(fields::MESSAGE, "Hello");

        assert_eq!(form.submit(), SubmitOutcome::Pending);
        assert!(host.loading.get());
        assert_eq!(form.submit(), SubmitOutcome::Busy);

        clock.advance(config::SUBMIT_LATENCY_MS - 1);
        assert!(host.mails.borrow().is_empty());

        clock.advance(1);
        assert!(!host.loading.get());
        let mails = host.mails.borrow();
        assert_eq!(mails.len(), 1);
        assert!(mails[0].body.contains("(555) 123-4567"));
        assert!(mails[0].body.contains("Consulting"));
        assert!(host.values.borrow().is_empty());
        assert!(host.success.get());

        clock.advance(config::CONTACT_SUCCESS_MS);
        assert!(!host.success.get());
    }

    #[test]
    fn format_errors_on_contact_form() {
        let clock = Rc::new(ManualScheduler::new());
        let form = FormSubmission::new(
            FakeForm::contact(),
            Rules::Full,
            Completion::Mail { lookup: consulting_lookup() },
            clock,
        );
        let host = form.host();
        host.fill(fields::NAME, "Jane");
        host.fill(fields::EMAIL, "jane");
        host.fill(fields::PHONE, "555123");
        host.fill(fields::MESSAGE, "Hi");

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(host.error(fields::EMAIL), Some(FieldError::InvalidEmail));
        assert_eq!(host.error(fields::PHONE), Some(FieldError::InvalidPhone));

        form.clear_error(fields::PHONE);
        assert_eq!(host.error(fields::PHONE), None);
        assert_eq!(host.error(fields::EMAIL), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn unknown_service_falls_back_to_raw_value() {
        let clock = Rc::new(ManualScheduler::new());
        let form = FormSubmission::new(
            FakeForm::contact(),
            Rules::Full,
            Completion::Mail { lookup: consulting_lookup() },
            clock.clone(),
        );
        let host = form.host();
        host.fill(fields::NAME, "Jo");
        host.fill(fields::EMAIL, "jo@x.io");
        host.fill(fields::PHONE, "(555) 987-6543");
        host.fill(fields::SERVICE, "audit");
        host.fill(fields::MESSAGE, "Hey");

        form.submit();
        clock.advance(config::SUBMIT_LATENCY_MS);
        assert!(host.mails.borrow()[0].body.contains("about audit."));
    }

    #[test]
    fn widget_form_checks_presence_only_and_closes_its_panel() {
        let clock = Rc::new(ManualScheduler::new());
        let closed = Rc::new(Cell::new(false));
        let close = {
            let closed = closed.clone();
            Rc::new(move || closed.set(true)) as Rc<dyn Fn()>
        };
        let form = FormSubmission::new(
            FakeForm::widget(),
            Rules::RequiredOnly,
            Completion::ClosePanel { close },
            clock.clone(),
        );
        let host = form.host();

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(host.error("widget-phone"), Some(FieldError::EmptyField));

        host.fill("widget-name", "Sam");
        host.fill("widget-phone", "12");
        assert_eq!(form.submit(), SubmitOutcome::Pending);

        clock.advance(config::SUBMIT_LATENCY_MS);
        assert!(host.success.get());
        assert!(host.mails.borrow().is_empty());
        assert!(host.values.borrow().is_empty());
        assert!(!closed.get());

        clock.advance(config::WIDGET_SUCCESS_MS);
        assert!(!host.success.get());
        assert!(closed.get());
    }
}
