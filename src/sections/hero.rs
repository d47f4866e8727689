use yew::prelude::*;

use crate::hooks::use_reduced_motion;
use crate::ui::button::{Button, ButtonVariant};
use crate::ui::container::Container;

/// Full-viewport opening section: gradient headline, subheading and the two
/// CTA buttons, with a staggered entrance unless reduced motion is on.
#[function_component(Hero)]
pub fn hero() -> Html {
    let reduced_motion = use_reduced_motion();
    let entrance = |order: &'static str| -> Classes {
        if reduced_motion {
            classes!()
        } else {
            classes!("fade-up", order)
        }
    };

    html! {
        <section class="hero" aria-label="Hero section">
            <div class="hero-backdrop" aria-hidden="true"></div>
            <Container class="hero-content">
                <h1 class={classes!("hero-title", entrance("delay-1"))}>
                    <span class="gradient-text">{"Secure Your Digital Future"}</span>
                </h1>
                <p class={classes!("hero-subtitle", entrance("delay-2"))}>
                    {"Advanced cybersecurity solutions powered by AI to protect your business from evolving threats"}
                </p>
                <div class={classes!("hero-cta-group", entrance("delay-3"))}>
                    <Button
                        variant={ButtonVariant::Gradient}
                        aria_label="Get started with our cybersecurity services"
                    >
                        {"Get Started"}
                    </Button>
                    <Button
                        variant={ButtonVariant::Outline}
                        aria_label="Learn more about our services"
                    >
                        {"Learn More"}
                    </Button>
                </div>
            </Container>
        </section>
    }
}
