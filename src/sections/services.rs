use yew::prelude::*;

use crate::content::{self, ContentItem};
use crate::hooks::{use_in_view, use_reduced_motion};
use crate::icons::Icon;
use crate::ui::card::Card;
use crate::ui::container::Container;
use crate::ui::heading::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    #[prop_or(content::SERVICES)]
    pub items: &'static [ContentItem],
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());
    let reduced_motion = use_reduced_motion();

    html! {
        <section id="services" class="section" ref={section_ref}>
            <Container>
                <SectionHeading
                    title="Our Services"
                    subtitle="Comprehensive cybersecurity solutions tailored to your needs"
                    centered=true
                />
                {
                    if props.items.is_empty() {
                        html! {
                            <div class="section-empty">
                                <p>{"No services available at the moment. Please check back later."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="services-grid">
                                { for props.items.iter().enumerate().map(|(index, service)| {
                                    let stagger = (!reduced_motion)
                                        .then(|| format!("transition-delay: {}ms;", index * 100));
                                    html! {
                                        <div
                                            key={service.id}
                                            class={classes!(
                                                "reveal",
                                                (visible || reduced_motion).then(|| "is-visible"),
                                                reduced_motion.then(|| "no-motion"),
                                            )}
                                            style={stagger}
                                        >
                                            <Card hoverable=true class="service-card">
                                                <div class="card-icon-badge">
                                                    <Icon id={service.icon} class="icon-lg" />
                                                </div>
                                                <h3 class="card-title">{ service.title }</h3>
                                                <p class="card-description">{ service.description }</p>
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
