use std::collections::BTreeSet;

use log::{debug, info};

use super::field::{FieldName, FormField};
use super::submission::{QuoteRequest, QuoteTransport};
use super::validation::validate_field;
use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    Submitting,
    Success,
}

impl ModalState {
    pub fn is_visible(self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

/// Title and description of the service card the modal was opened from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceContext {
    pub title: String,
    pub description: String,
}

impl ServiceContext {
    pub fn from_card(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or("Selected Service").trim().to_string(),
            description: description
                .unwrap_or("Please provide details below.")
                .trim()
                .to_string(),
        }
    }
}

/// Services ticked in the multi-select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceSelection(BTreeSet<String>);

impl ServiceSelection {
    pub fn set(&mut self, label: &str, checked: bool) {
        if checked {
            self.0.insert(label.to_string());
        } else {
            self.0.remove(label);
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn summary(&self) -> String {
        selection_summary(self.len())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

pub fn selection_summary(count: usize) -> String {
    match count {
        0 => "Select Services...".to_string(),
        1 => "1 Service Selected".to_string(),
        n => format!("{} Services Selected", n),
    }
}

/// Not clamped: goes negative when the value outgrows the limit.
pub fn remaining_characters(max_length: usize, value: &str) -> i64 {
    max_length as i64 - value.chars().count() as i64
}

pub fn counter_text(remaining: i64) -> String {
    format!("{} characters remaining", remaining)
}

/// Identifies one scheduled auto-dismiss. Only the most recent ticket is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoCloseTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Errors were recorded on the offending fields; the modal stays open.
    Invalid,
    /// The request was handed off and the success view is showing. The
    /// caller schedules `auto_close_elapsed(ticket)` after `delay_ms`.
    Accepted {
        request: QuoteRequest,
        ticket: AutoCloseTicket,
        delay_ms: u32,
    },
    /// Submit arrived while the modal was not accepting input.
    Ignored,
}

/// State of the quote modal: visibility, form values, per-field errors,
/// the service multi-select and the scroll lock it holds on the page.
#[derive(Clone, Debug)]
pub struct QuoteController {
    state: ModalState,
    context: Option<ServiceContext>,
    fields: [FormField; 5],
    services: ServiceSelection,
    services_expanded: bool,
    scroll_locked: bool,
    pending_auto_close: Option<AutoCloseTicket>,
    next_ticket: u64,
    form_generation: u64,
    message_max_length: usize,
}

impl Default for QuoteController {
    fn default() -> Self {
        Self::new(config::MESSAGE_MAX_LENGTH)
    }
}

impl QuoteController {
    pub fn new(message_max_length: usize) -> Self {
        Self {
            state: ModalState::Closed,
            context: None,
            fields: Default::default(),
            services: ServiceSelection::default(),
            services_expanded: false,
            scroll_locked: false,
            pending_auto_close: None,
            next_ticket: 0,
            form_generation: 0,
            message_max_length,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn context(&self) -> Option<&ServiceContext> {
        self.context.as_ref()
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[Self::slot(name)]
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[Self::slot(name)]
    }

    fn slot(name: FieldName) -> usize {
        match name {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::Phone => 2,
            FieldName::CountryCode => 3,
            FieldName::Message => 4,
        }
    }

    pub fn services(&self) -> &ServiceSelection {
        &self.services
    }

    pub fn services_expanded(&self) -> bool {
        self.services_expanded
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn pending_auto_close(&self) -> Option<AutoCloseTicket> {
        self.pending_auto_close
    }

    /// Changes every time the form is reset. Used as the form's render key so
    /// the browser drops control state the values no longer describe.
    pub fn form_generation(&self) -> u64 {
        self.form_generation
    }

    pub fn message_max_length(&self) -> usize {
        self.message_max_length
    }

    pub fn message_remaining(&self) -> i64 {
        remaining_characters(self.message_max_length, self.field(FieldName::Message).value())
    }

    pub fn open(&mut self, context: Option<ServiceContext>) {
        match &context {
            Some(ctx) => info!("Opening quote modal for {}", ctx.title),
            None => info!("Opening quote modal"),
        }
        if self.state != ModalState::Open {
            self.reset_form();
            self.pending_auto_close = None;
        }
        self.context = context;
        self.state = ModalState::Open;
        self.scroll_locked = true;
    }

    /// Returns false when the modal was already closed.
    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        info!("Closing quote modal");
        self.state = ModalState::Closed;
        self.context = None;
        self.scroll_locked = false;
        self.pending_auto_close = None;
        self.reset_form();
        true
    }

    fn reset_form(&mut self) {
        self.form_generation += 1;
        self.fields.iter_mut().for_each(FormField::reset);
        self.services.clear();
        self.services_expanded = false;
    }

    /// Live validation: store the new value and re-check that field alone.
    pub fn input(&mut self, name: FieldName, value: String) {
        let result = validate_field(name, &value);
        let field = self.field_mut(name);
        field.set_value(value);
        field.clear_error();
        if name != FieldName::Message {
            field.record(result);
        }
    }

    pub fn validate_form(&mut self) -> bool {
        self.fields.iter_mut().for_each(FormField::clear_error);
        let mut valid = true;
        for name in FieldName::REQUIRED {
            let field = self.field_mut(name);
            let result = validate_field(name, field.value());
            valid &= result.is_ok();
            field.record(result);
        }
        valid
    }

    pub fn submit(&mut self, transport: &dyn QuoteTransport) -> SubmitOutcome {
        if self.state != ModalState::Open {
            debug!("Ignoring submit in state {:?}", self.state);
            return SubmitOutcome::Ignored;
        }
        if !self.validate_form() {
            debug!("Quote form has errors");
            return SubmitOutcome::Invalid;
        }

        self.state = ModalState::Submitting;
        let request = self.request();
        transport.deliver(&request);

        self.state = ModalState::Success;
        self.services_expanded = false;
        self.next_ticket += 1;
        let ticket = AutoCloseTicket(self.next_ticket);
        self.pending_auto_close = Some(ticket);
        SubmitOutcome::Accepted {
            request,
            ticket,
            delay_ms: config::SUCCESS_DISMISS_MS,
        }
    }

    /// Called when a scheduled auto-dismiss fires. Stale tickets are ignored.
    pub fn auto_close_elapsed(&mut self, ticket: AutoCloseTicket) -> bool {
        if self.state != ModalState::Success || self.pending_auto_close != Some(ticket) {
            debug!("Dropping stale auto-close {:?}", ticket);
            return false;
        }
        self.close()
    }

    pub fn request(&self) -> QuoteRequest {
        let value = |name| self.field(name).value().trim().to_string();
        let message = value(FieldName::Message);
        QuoteRequest {
            name: value(FieldName::Name),
            email: value(FieldName::Email),
            phone: value(FieldName::Phone),
            country_code: value(FieldName::CountryCode),
            message: (!message.is_empty()).then_some(message),
            selected_services: self.services.labels(),
        }
    }

    pub fn set_service(&mut self, label: &str, checked: bool) {
        self.services.set(label, checked);
    }

    pub fn toggle_services(&mut self) {
        self.services_expanded = !self.services_expanded;
    }

    pub fn collapse_services(&mut self) {
        self.services_expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::quote::field::Validity;
    use crate::quote::validation::ValidationError;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<QuoteRequest>>);

    impl QuoteTransport for Recorder {
        fn deliver(&self, request: &QuoteRequest) {
            self.0.borrow_mut().push(request.clone());
        }
    }

    fn fill_valid(controller: &mut QuoteController) {
        controller.input(FieldName::Name, "Jane".to_string());
        controller.input(FieldName::Email, "jane@x.co".to_string());
        controller.input(FieldName::Phone, "5551234".to_string());
        controller.input(FieldName::CountryCode, "+1".to_string());
    }

    fn assert_pristine(controller: &QuoteController) {
        assert_eq!(controller.state(), ModalState::Closed);
        assert!(controller.context().is_none());
        assert!(!controller.scroll_locked());
        assert!(controller.services().is_empty());
        assert_eq!(controller.services().summary(), "Select Services...");
        assert!(!controller.services_expanded());
        for name in FieldName::ALL {
            let field = controller.field(name);
            assert_eq!(field.value(), "", "{name}");
            assert_eq!(field.validity(), Validity::Unset, "{name}");
            assert!(field.error().is_none(), "{name}");
        }
    }

    #[test]
    fn test_generic_open_has_no_header_and_locks_scroll() {
        let mut controller = QuoteController::default();
        controller.open(None);
        assert_eq!(controller.state(), ModalState::Open);
        assert!(controller.context().is_none());
        assert!(controller.scroll_locked());
    }

    #[test]
    fn test_card_context_defaults_and_trimming() {
        let ctx = ServiceContext::from_card(Some("  Web Development \n"), None);
        assert_eq!(ctx.title, "Web Development");
        assert_eq!(ctx.description, "Please provide details below.");
        let ctx = ServiceContext::from_card(None, Some(" Apps. "));
        assert_eq!(ctx.title, "Selected Service");
        assert_eq!(ctx.description, "Apps.");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = QuoteController::default();
        assert!(!controller.close());
        assert_pristine(&controller);

        controller.open(Some(ServiceContext::from_card(Some("Branding"), None)));
        fill_valid(&mut controller);
        controller.input(FieldName::Phone, "12x".to_string());
        controller.set_service("Branding", true);
        controller.toggle_services();

        assert!(controller.close());
        assert_pristine(&controller);
        assert!(!controller.close());
        assert_pristine(&controller);
    }

    #[test]
    fn test_reopen_shows_only_new_context() {
        let mut controller = QuoteController::default();
        controller.open(Some(ServiceContext::from_card(Some("Branding"), Some("Logos"))));
        controller.input(FieldName::Name, "Jane".to_string());
        controller.close();

        let second = ServiceContext::from_card(Some("Web Development"), Some("Sites"));
        controller.open(Some(second.clone()));
        assert_eq!(controller.context(), Some(&second));
        assert_eq!(controller.field(FieldName::Name).value(), "");
    }

    #[test]
    fn test_selection_summary() {
        assert_eq!(selection_summary(0), "Select Services...");
        assert_eq!(selection_summary(1), "1 Service Selected");
        assert_eq!(selection_summary(3), "3 Services Selected");

        let mut controller = QuoteController::default();
        controller.open(None);
        for label in ["Branding", "Web Development", "App Development"] {
            controller.set_service(label, true);
        }
        assert_eq!(controller.services().summary(), "3 Services Selected");
        controller.set_service("Branding", false);
        controller.set_service("Web Development", false);
        assert_eq!(controller.services().summary(), "1 Service Selected");
    }

    #[test]
    fn test_character_counter_goes_negative() {
        let mut controller = QuoteController::new(5);
        controller.open(None);
        assert_eq!(counter_text(controller.message_remaining()), "5 characters remaining");
        controller.input(FieldName::Message, "hey".to_string());
        assert_eq!(controller.message_remaining(), 2);
        controller.input(FieldName::Message, "hello world".to_string());
        assert_eq!(counter_text(controller.message_remaining()), "-6 characters remaining");
        assert_eq!(controller.field(FieldName::Message).validity(), Validity::Unset);
    }

    #[test]
    fn test_generic_submit_succeeds_then_auto_closes() {
        let transport = Recorder::default();
        let mut controller = QuoteController::default();
        controller.open(None);
        assert!(controller.context().is_none());
        fill_valid(&mut controller);

        assert!(controller.validate_form());
        let outcome = controller.submit(&transport);
        let ticket = match outcome {
            SubmitOutcome::Accepted { ticket, delay_ms, request } => {
                assert_eq!(delay_ms, 4_000);
                assert_eq!(request.name, "Jane");
                assert_eq!(request.message, None);
                ticket
            }
            other => panic!("expected acceptance, got {:?}", other),
        };
        assert_eq!(controller.state(), ModalState::Success);
        assert!(controller.scroll_locked());
        assert_eq!(transport.0.borrow().len(), 1);

        assert!(controller.auto_close_elapsed(ticket));
        assert_pristine(&controller);
    }

    #[test]
    fn test_submit_with_bad_phone_stays_open() {
        let transport = Recorder::default();
        let mut controller = QuoteController::default();
        controller.open(None);
        fill_valid(&mut controller);
        controller.input(FieldName::Phone, "55a123".to_string());

        assert!(!controller.validate_form());
        assert_eq!(controller.submit(&transport), SubmitOutcome::Invalid);
        assert_eq!(controller.state(), ModalState::Open);
        assert!(transport.0.borrow().is_empty());
        assert_eq!(
            controller.field(FieldName::Phone).error(),
            Some(&ValidationError::Format("Please enter numbers only."))
        );
        for name in [FieldName::Name, FieldName::Email, FieldName::CountryCode] {
            assert!(controller.field(name).error().is_none(), "{name}");
            assert_eq!(controller.field(name).validity(), Validity::Valid);
        }
    }

    #[test]
    fn test_empty_submit_flags_every_required_field() {
        let mut controller = QuoteController::default();
        controller.open(None);
        assert_eq!(controller.submit(&Recorder::default()), SubmitOutcome::Invalid);
        for name in FieldName::REQUIRED {
            let field = controller.field(name);
            assert_eq!(field.validity(), Validity::Invalid, "{name}");
            assert!(matches!(field.error(), Some(ValidationError::Required(_))));
        }
        assert_eq!(controller.field(FieldName::Message).validity(), Validity::Unset);
    }

    #[test]
    fn test_live_validation_touches_one_field() {
        let mut controller = QuoteController::default();
        controller.open(None);
        controller.input(FieldName::Email, "bad-email".to_string());

        assert_eq!(
            controller.field(FieldName::Email).error_message(),
            Some("Please enter a valid email address.")
        );
        for name in [FieldName::Name, FieldName::Phone, FieldName::CountryCode] {
            assert_eq!(controller.field(name).validity(), Validity::Unset, "{name}");
        }

        controller.input(FieldName::Email, "jane@x.co".to_string());
        assert_eq!(controller.field(FieldName::Email).validity(), Validity::Valid);
        assert!(controller.field(FieldName::Email).error().is_none());
    }

    #[test]
    fn test_manual_close_supersedes_auto_close() {
        let mut controller = QuoteController::default();
        controller.open(None);
        fill_valid(&mut controller);
        let SubmitOutcome::Accepted { ticket, .. } = controller.submit(&Recorder::default()) else {
            panic!("form should be valid");
        };

        assert!(controller.close());
        assert!(controller.pending_auto_close().is_none());

        controller.open(None);
        assert!(!controller.auto_close_elapsed(ticket));
        assert_eq!(controller.state(), ModalState::Open);
    }

    #[test]
    fn test_submit_ignored_outside_open() {
        let mut controller = QuoteController::default();
        assert_eq!(controller.submit(&Recorder::default()), SubmitOutcome::Ignored);

        controller.open(None);
        fill_valid(&mut controller);
        controller.submit(&Recorder::default());
        assert_eq!(controller.submit(&Recorder::default()), SubmitOutcome::Ignored);
        assert_eq!(controller.state(), ModalState::Success);
    }

    #[test]
    fn test_request_collects_optional_parts() {
        let mut controller = QuoteController::default();
        controller.open(None);
        fill_valid(&mut controller);
        controller.input(FieldName::Message, "  Need a site by June ".to_string());
        controller.set_service("Web Development", true);
        controller.set_service("Branding", true);

        let request = controller.request();
        assert_eq!(request.message.as_deref(), Some("Need a site by June"));
        assert_eq!(request.selected_services, vec!["Branding", "Web Development"]);
    }

    #[test]
    fn test_close_and_reopen_start_a_new_form() {
        let mut controller = QuoteController::default();
        controller.open(None);
        let first = controller.form_generation();
        controller.input(FieldName::CountryCode, "+1".to_string());
        controller.input(FieldName::Name, "Jane".to_string());
        assert_eq!(controller.form_generation(), first);

        controller.close();
        controller.open(None);
        assert_ne!(controller.form_generation(), first);
        assert_eq!(controller.field(FieldName::CountryCode).value(), "");

        let reopened = controller.form_generation();
        controller.open(Some(ServiceContext::from_card(Some("Branding"), None)));
        assert_eq!(controller.form_generation(), reopened);

        assert!(controller.close());
        assert_ne!(controller.form_generation(), reopened);
    }

    #[test]
    fn test_dropdown_toggle_and_collapse() {
        let mut controller = QuoteController::default();
        controller.open(None);
        controller.toggle_services();
        assert!(controller.services_expanded());
        controller.collapse_services();
        assert!(!controller.services_expanded());
    }
}
