use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::controller::{counter_text, AutoCloseTicket, ModalState, QuoteController, ServiceContext, SubmitOutcome};
use super::field::FieldName;
use super::submission::{ConsoleTransport, QuoteTransport};
use crate::content::{COUNTRY_CODES, SERVICES};
use crate::dom;

/// Handed to anything that can open the quote modal.
#[derive(Clone, PartialEq)]
pub struct QuoteTrigger(pub Callback<Option<ServiceContext>>);

impl QuoteTrigger {
    pub fn request(&self, context: Option<ServiceContext>) {
        self.0.emit(context);
    }
}

#[derive(Properties, PartialEq)]
pub struct QuoteModalProps {
    #[prop_or_default]
    pub children: Children,
}

pub enum QuoteModalMsg {
    Open(Option<ServiceContext>),
    Close,
    Escape,
    FieldInput(String, String),
    ServiceToggled(String, bool),
    ToggleServices,
    DocumentClick { inside_services: bool },
    Submit,
    AutoCloseElapsed(AutoCloseTicket),
}

pub struct QuoteModal {
    controller: QuoteController,
    transport: Box<dyn QuoteTransport>,
    trigger: QuoteTrigger,
    auto_close: Option<Timeout>,
    keydown: Option<Closure<dyn Fn(KeyboardEvent)>>,
    outside_click: Option<Closure<dyn Fn(MouseEvent)>>,
    applied_scroll_lock: bool,
    overlay: NodeRef,
}

impl Component for QuoteModal {
    type Message = QuoteModalMsg;
    type Properties = QuoteModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: QuoteController::default(),
            transport: Box::new(ConsoleTransport),
            trigger: QuoteTrigger(ctx.link().callback(QuoteModalMsg::Open)),
            auto_close: None,
            keydown: None,
            outside_click: None,
            applied_scroll_lock: false,
            overlay: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuoteModalMsg::Open(context) => {
                if self.controller.state() != ModalState::Open {
                    self.auto_close = None;
                }
                self.controller.open(context);
                true
            }
            QuoteModalMsg::Close | QuoteModalMsg::Escape => {
                // Dropping the timeout cancels a pending auto-dismiss.
                self.auto_close = None;
                self.controller.close()
            }
            QuoteModalMsg::FieldInput(name, value) => match name.parse::<FieldName>() {
                Ok(field) => {
                    self.controller.input(field, value);
                    true
                }
                Err(e) => {
                    debug!("Ignoring input: {}", e);
                    false
                }
            },
            QuoteModalMsg::ServiceToggled(label, checked) => {
                self.controller.set_service(&label, checked);
                true
            }
            QuoteModalMsg::ToggleServices => {
                self.controller.toggle_services();
                true
            }
            QuoteModalMsg::DocumentClick { inside_services } => {
                if inside_services || !self.controller.services_expanded() {
                    return false;
                }
                self.controller.collapse_services();
                true
            }
            QuoteModalMsg::Submit => match self.controller.submit(self.transport.as_ref()) {
                SubmitOutcome::Accepted { ticket, delay_ms, .. } => {
                    let link = ctx.link().clone();
                    self.auto_close = Some(Timeout::new(delay_ms, move || {
                        link.send_message(QuoteModalMsg::AutoCloseElapsed(ticket));
                    }));
                    true
                }
                SubmitOutcome::Invalid => true,
                SubmitOutcome::Ignored => false,
            },
            QuoteModalMsg::AutoCloseElapsed(ticket) => {
                if self.controller.pending_auto_close() == Some(ticket) {
                    self.auto_close = None;
                }
                self.controller.auto_close_elapsed(ticket)
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.listen(ctx);
        }
        let locked = self.controller.scroll_locked();
        if locked != self.applied_scroll_lock {
            dom::set_scroll_locked(locked);
            self.applied_scroll_lock = locked;
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            if let Some(keydown) = self.keydown.take() {
                let _ = window.remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
            }
            if let Some(click) = self.outside_click.take() {
                if let Some(document) = window.document() {
                    let _ = document.remove_event_listener_with_callback("click", click.as_ref().unchecked_ref());
                }
            }
        }
        if self.applied_scroll_lock {
            dom::set_scroll_locked(false);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let overlay = self.overlay.clone();
        let on_backdrop = ctx.link().batch_callback(move |e: MouseEvent| {
            dom::targets_node(e.target(), &overlay).then_some(QuoteModalMsg::Close)
        });

        html! {
            <ContextProvider<QuoteTrigger> context={self.trigger.clone()}>
                <style>
                    {r#"
                        .quote-overlay { display: none; }
                        .quote-overlay.active { display: flex; }
                        .checkbox-options { display: none; }
                        .checkbox-options.active { display: block; }
                    "#}
                </style>
                { for ctx.props().children.iter() }
                <div id="quoteOverlay" ref={self.overlay.clone()} class={classes!("quote-overlay", state.is_visible().then_some("active"))} onclick={on_backdrop}>
                    <div class="quote-modal" role="dialog" aria-modal="true">
                        <button id="closeQuote" class="close-quote" onclick={ctx.link().callback(|_| QuoteModalMsg::Close)}>
                            { "✕" }
                        </button>
                        <h3>{ "Get a Quote" }</h3>
                        if let Some(service) = self.controller.context() {
                            <div id="selectedProduct" class="selected-product">
                                <h4>{ &service.title }</h4>
                                <p>{ &service.description }</p>
                            </div>
                        }
                        if state == ModalState::Success {
                            <div class="success-message-quote">
                                <h4>{ "Thank you!" }</h4>
                                <p>{ "We got your request and will reach out on WhatsApp shortly." }</p>
                            </div>
                        } else {
                            { self.view_form(ctx) }
                        }
                    </div>
                </div>
            </ContextProvider<QuoteTrigger>>
        }
    }
}

impl QuoteModal {
    fn listen(&mut self, ctx: &Context<Self>) {
        let Some(window) = web_sys::window() else {
            warn!("No window, quote modal keyboard handling disabled");
            return;
        };

        let link = ctx.link().clone();
        let keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                link.send_message(QuoteModalMsg::Escape);
            }
        });
        if window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .is_ok()
        {
            self.keydown = Some(keydown);
        }

        let Some(document) = window.document() else { return };
        let link = ctx.link().clone();
        let click = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
            link.send_message(QuoteModalMsg::DocumentClick {
                inside_services: dom::target_within(e.target(), ".multi-select-container"),
            });
        });
        if document
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
            .is_ok()
        {
            self.outside_click = Some(click);
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_input = link.batch_callback(|e: InputEvent| {
            named_value(e.target()).map(|(name, value)| QuoteModalMsg::FieldInput(name, value))
        });
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            QuoteModalMsg::Submit
        });
        let country = self.controller.field(FieldName::CountryCode).value();
        let max_length = self.controller.message_max_length().to_string();

        html! {
            <form id="quoteForm" key={self.controller.form_generation().to_string()} oninput={on_input} onsubmit={on_submit}>
                { self.view_group(FieldName::Name, "Name", html! {
                    <input type="text" name="name" placeholder="Your name"
                        class={self.marker(FieldName::Name)}
                        value={self.value(FieldName::Name)} />
                }) }
                { self.view_group(FieldName::Email, "Email", html! {
                    <input type="text" name="email" inputmode="email" placeholder="you@example.com"
                        class={self.marker(FieldName::Email)}
                        value={self.value(FieldName::Email)} />
                }) }
                <div class="phone-row">
                    { self.view_group(FieldName::CountryCode, "Code", html! {
                        <select name="country_code" class={self.marker(FieldName::CountryCode)}>
                            <option value="" selected={country.is_empty()}>{ "Code" }</option>
                            { for COUNTRY_CODES.iter().map(|(code, label)| html! {
                                <option value={*code} selected={country == *code}>{ *label }</option>
                            }) }
                        </select>
                    }) }
                    { self.view_group(FieldName::Phone, "WhatsApp Number", html! {
                        <input type="tel" name="phone" inputmode="numeric" placeholder="5551234"
                            class={self.marker(FieldName::Phone)}
                            value={self.value(FieldName::Phone)} />
                    }) }
                </div>
                <div class="form-group">
                    <label>{ "Services" }</label>
                    { self.view_services(ctx) }
                </div>
                { self.view_group(FieldName::Message, "Message (optional)", html! {
                    <>
                        <textarea name="message" rows="4" maxlength={max_length}
                            value={self.value(FieldName::Message)} />
                        <div id="charCounterQuote" class="char-counter">
                            { counter_text(self.controller.message_remaining()) }
                        </div>
                    </>
                }) }
                <button type="submit" class="submit-quote">{ "Send Request" }</button>
            </form>
        }
    }

    fn view_services(&self, ctx: &Context<Self>) -> Html {
        let selection = self.controller.services();
        let expanded = self.controller.services_expanded();

        html! {
            <div class="multi-select-container">
                <div class="select-box" onclick={ctx.link().callback(|_| QuoteModalMsg::ToggleServices)}>
                    <span class={classes!("select-text", selection.is_empty().then_some("placeholder"))}>
                        { selection.summary() }
                    </span>
                </div>
                <div class={classes!("checkbox-options", expanded.then_some("active"))}>
                    { for SERVICES.iter().map(|service| {
                        let label = service.title;
                        let on_change = ctx.link().callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            QuoteModalMsg::ServiceToggled(label.to_string(), input.checked())
                        });
                        html! {
                            <label class="checkbox-option">
                                <input type="checkbox" name="services" value={label}
                                    checked={selection.contains(label)} onchange={on_change} />
                                { label }
                            </label>
                        }
                    }) }
                </div>
            </div>
        }
    }

    fn view_group(&self, field: FieldName, label: &'static str, control: Html) -> Html {
        let error = self.controller.field(field).error_message();
        let display = if error.is_some() { "display: block;" } else { "display: none;" };

        html! {
            <div class="form-group">
                <label>{ label }</label>
                { control }
                <div class="error-message-quote" style={display}>{ error.unwrap_or_default() }</div>
            </div>
        }
    }

    fn value(&self, field: FieldName) -> String {
        self.controller.field(field).value().to_string()
    }

    fn marker(&self, field: FieldName) -> Classes {
        classes!(self.controller.field(field).validity().marker())
    }
}

/// `name` and current value of the form control that fired an event.
/// Checkboxes are handled by their own change listeners.
fn named_value(target: Option<EventTarget>) -> Option<(String, String)> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        if input.type_() == "checkbox" {
            return None;
        }
        return Some((input.name(), input.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement, HtmlSelectElement};
    use yew::prelude::*;

    use super::QuoteModal;
    use crate::components::service_card::QuoteButton;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component]
    fn Page() -> Html {
        html! {
            <QuoteModal>
                <QuoteButton />
            </QuoteModal>
        }
    }

    fn mount() -> Element {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Page>::with_root(root.clone()).render();
        root
    }

    fn find<T: JsCast>(root: &Element, selector: &str) -> T {
        root.query_selector(selector).unwrap().unwrap().dyn_into::<T>().unwrap()
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    async fn click(root: &Element, selector: &str) {
        find::<HtmlElement>(root, selector).click();
        settle().await;
    }

    fn overlay_active(root: &Element) -> bool {
        find::<Element>(root, "#quoteOverlay").class_list().contains("active")
    }

    #[wasm_bindgen_test]
    async fn country_code_is_cleared_after_close_and_reopen() {
        let root = mount();
        settle().await;
        click(&root, ".get-quote-btn").await;

        let select: HtmlSelectElement = find(&root, "select[name=country_code]");
        select.set_value("+1");
        let init = EventInit::new();
        init.set_bubbles(true);
        select
            .dispatch_event(&Event::new_with_event_init_dict("input", &init).unwrap())
            .unwrap();
        settle().await;
        assert_eq!(select.value(), "+1");

        click(&root, "#closeQuote").await;
        assert!(!overlay_active(&root));
        click(&root, ".get-quote-btn").await;

        let select: HtmlSelectElement = find(&root, "select[name=country_code]");
        assert_eq!(select.value(), "");
    }

    #[wasm_bindgen_test]
    async fn backdrop_click_closes_but_dialog_click_does_not() {
        let root = mount();
        settle().await;
        click(&root, ".get-quote-btn").await;
        assert!(overlay_active(&root));

        click(&root, ".quote-modal h3").await;
        assert!(overlay_active(&root));

        click(&root, "#quoteOverlay").await;
        assert!(!overlay_active(&root));
    }
}
