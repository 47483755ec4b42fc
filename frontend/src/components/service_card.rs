use yew::prelude::*;

use crate::content::Service;
use crate::quote::{QuoteTrigger, ServiceContext};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let trigger = use_context::<QuoteTrigger>();
    let on_quote = {
        let title = props.title.clone();
        let description = props.description.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(trigger) = &trigger {
                trigger.request(Some(ServiceContext::from_card(Some(&*title), Some(&*description))));
            }
        })
    };

    html! {
        <div class="service-item">
            <h3 class="service-title">{ &*props.title }</h3>
            <p class="service-description">{ &*props.description }</p>
            <a href="#quote" class="get-quote-btn" onclick={on_quote}>{ "Get a Quote" }</a>
        </div>
    }
}

#[function_component(ServiceList)]
pub fn service_list() -> Html {
    html! {
        <div class="services-grid">
            { for crate::content::SERVICES.iter().map(|Service { title, description }| html! {
                <ServiceCard title={*title} description={*description} />
            }) }
        </div>
    }
}

/// "Get a quote" button not tied to any service card.
#[function_component(QuoteButton)]
pub fn quote_button() -> Html {
    let trigger = use_context::<QuoteTrigger>();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match &trigger {
            Some(trigger) => trigger.request(None),
            None => log::warn!("Quote button rendered outside the quote modal"),
        }
    });

    html! {
        <a href="#quote" class="get-quote-btn build-button" {onclick}>{ "Let's Build Something" }</a>
    }
}
