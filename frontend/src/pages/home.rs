use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::about_nav::AboutNavigation;
use crate::components::lightbox::LightboxGallery;
use crate::components::service_card::{QuoteButton, ServiceList};
use crate::config;
use crate::content::GALLERY;
use crate::dom;

/// Keeps `--text-scale` in step with the viewport, debounced on resize.
#[hook]
fn use_text_scale() {
    // The debounced callback runs once per render, so re-render after each run.
    let rerender = use_force_update();
    let debounce = use_debounce(
        move || {
            dom::apply_text_scale();
            rerender.force_update();
        },
        config::RESIZE_DEBOUNCE_MS,
    );

    use_effect_with_deps(
        |_| {
            dom::apply_text_scale();
            || ()
        },
        (),
    );

    use_event_with_window("resize", move |_: Event| debounce.run());
}

#[function_component(Home)]
pub fn home() -> Html {
    use_text_scale();

    html! {
        <main id="home">
            <section class="hero-section">
                <div class="hero-content">
                    <h1 class="main-heading">{ "The UnderGrads" }</h1>
                    <p class="hero-subtitle">
                        { "Websites, apps and brands for businesses that are just getting started." }
                    </p>
                    <QuoteButton />
                </div>
            </section>

            <section id="services" class="services-section">
                <h2>{ "What We Do" }</h2>
                <ServiceList />
            </section>

            <section id="work" class="work-section">
                <h2>{ "Recent Work" }</h2>
                <LightboxGallery images={GALLERY} />
            </section>

            <section id="about" class="about-section">
                <AboutNavigation />
            </section>
        </main>
    }
}
