use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AboutSection {
    About,
    Approach,
    Team,
}

impl AboutSection {
    pub const ALL: [AboutSection; 3] = [AboutSection::About, AboutSection::Approach, AboutSection::Team];

    pub fn key(self) -> &'static str {
        match self {
            AboutSection::About => "about",
            AboutSection::Approach => "approach",
            AboutSection::Team => "team",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    fn label(self) -> &'static str {
        match self {
            AboutSection::About => "About Us",
            AboutSection::Approach => "Our Approach",
            AboutSection::Team => "The Team",
        }
    }

    fn body(self) -> &'static str {
        match self {
            AboutSection::About => "We are a small studio of students and recent graduates building websites, apps and brands for businesses that are just getting started.",
            AboutSection::Approach => "Short feedback loops. We ship a first version quickly, show it to you, and iterate until it feels right.",
            AboutSection::Team => "Designers and developers who met in lecture halls and kept building together after hours.",
        }
    }
}

/// Tab named by the URL fragment, falling back to `About`.
fn initial_section() -> AboutSection {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .and_then(|hash| AboutSection::from_key(hash.trim_start_matches('#')))
        .unwrap_or(AboutSection::About)
}

/// Tabbed "about" block: one link and one content section per tab, exactly one active.
#[function_component(AboutNavigation)]
pub fn about_navigation() -> Html {
    let active = use_state(initial_section);

    html! {
        <div class="about-layout">
            <nav class="about-nav">
                { for AboutSection::ALL.into_iter().map(|section| {
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            active.set(section);
                        })
                    };
                    html! {
                        <a href={format!("#{}", section.key())}
                            class={classes!("about-nav-link", (*active == section).then_some("active"))}
                            data-section={section.key()}
                            {onclick}>
                            { section.label() }
                        </a>
                    }
                }) }
            </nav>
            <div class="about-main-content">
                { for AboutSection::ALL.into_iter().map(|section| html! {
                    <section
                        class={classes!("about-content-section", (*active == section).then_some("active"))}
                        data-content={section.key()}>
                        <h3>{ section.label() }</h3>
                        <p>{ section.body() }</p>
                    </section>
                }) }
            </div>
        </div>
    }
}
