use yew::prelude::*;

use crate::content::{self, ContentItem};
use crate::hooks::{use_in_view, use_reduced_motion};
use crate::icons::Icon;
use crate::ui::card::{Card, CardVariant};
use crate::ui::container::Container;
use crate::ui::heading::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    #[prop_or(content::FEATURES)]
    pub items: &'static [ContentItem],
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());
    let reduced_motion = use_reduced_motion();

    html! {
        <section id="features" class="section" ref={section_ref}>
            <Container>
                <SectionHeading
                    title="Our Features"
                    subtitle="Powerful capabilities to protect your digital assets"
                    centered=true
                />
                {
                    if props.items.is_empty() {
                        html! {
                            <div class="section-empty">
                                <p>{"No features available at the moment. Please check back later."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="features-grid">
                                { for props.items.iter().enumerate().map(|(index, feature)| {
                                    let stagger = (!reduced_motion)
                                        .then(|| format!("transition-delay: {}ms;", index * 100));
                                    html! {
                                        <div
                                            key={feature.id}
                                            class={classes!(
                                                "reveal",
                                                (visible || reduced_motion).then(|| "is-visible"),
                                                reduced_motion.then(|| "no-motion"),
                                            )}
                                            style={stagger}
                                        >
                                            <Card variant={CardVariant::Glass} class="feature-card">
                                                <div class="card-icon-badge small">
                                                    <Icon id={feature.icon} class="icon-md" />
                                                </div>
                                                <h3 class="card-title">{ feature.title }</h3>
                                                <p class="card-description">{ feature.description }</p>
                                            </Card>
                                        </div>
                                    }
                                })}
                            </div>
                        }
                    }
                }
            </Container>
        </section>
    }
}
