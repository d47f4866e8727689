use yew::prelude::*;

use crate::animations::counter::AnimatedCounter;
use crate::content::{self, ContentItem, Stat};
use crate::hooks::use_in_view;
use crate::icons::Icon;
use crate::ui::container::Container;
use crate::ui::heading::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    #[prop_or(content::ABOUT_FEATURES)]
    pub features: &'static [ContentItem],
    #[prop_or(content::ABOUT_STATS)]
    pub stats: &'static [Stat],
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());

    html! {
        <section id="about" class="section" ref={section_ref}>
            <Container>
                <div class="about-grid">
                    <div class="about-copy">
                        <SectionHeading
                            title="About Our Company"
                            subtitle="Leading the way in cybersecurity innovation"
                        />
                        <p class="about-description">
                            {"We are a team of dedicated cybersecurity professionals committed to \
                              protecting businesses from evolving digital threats. With cutting-edge \
                              technology and industry expertise, we deliver comprehensive security \
                              solutions that give you peace of mind."}
                        </p>
                        {
                            if props.features.is_empty() {
                                html! {
                                    <div class="section-empty">
                                        <p>{"No highlights available at the moment."}</p>
                                    </div>
                                }
                            } else {
                                html! {
                                    <div class="about-features">
                                        { for props.features.iter().map(|feature| html! {
                                            <div key={feature.id} class="about-feature">
                                                <div class="about-feature-icon">
                                                    <Icon id={feature.icon} class="icon-sm" />
                                                </div>
                                                <div>
                                                    <h4>{ feature.title }</h4>
                                                    <p>{ feature.description }</p>
                                                </div>
                                            </div>
                                        })}
                                    </div>
                                }
                            }
                        }
                        {
                            if props.stats.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <div class="about-stats">
                                        { for props.stats.iter().map(|stat| {
                                            let prefix = stat.prefix.unwrap_or("");
                                            let suffix = stat.suffix.unwrap_or("");
                                            html! {
                                                <div key={stat.id} class="about-stat">
                                                    <div class="about-stat-value">
                                                        {
                                                            if visible {
                                                                html! {
                                                                    <AnimatedCounter
                                                                        value={stat.value}
                                                                        prefix={prefix}
                                                                        suffix={suffix}
                                                                    />
                                                                }
                                                            } else {
                                                                html! {
                                                                    <span>{ format!("{prefix}0{suffix}") }</span>
                                                                }
                                                            }
                                                        }
                                                    </div>
                                                    <div class="about-stat-label">{ stat.label }</div>
                                                </div>
                                            }
                                        })}
                                    </div>
                                }
                            }
                        }
                    </div>
                    <div class="about-visual">
                        <img
                            src="/assets/about-cybersecurity.jpg"
                            alt="Cybersecurity team working on advanced security solutions"
                            loading="lazy"
                        />
                        <div class="about-visual-overlay" aria-hidden="true"></div>
                    </div>
                </div>
            </Container>
        </section>
    }
}
