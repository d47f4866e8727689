use yew::prelude::*;

use crate::animations::counter::AnimatedCounter;
use crate::content::{self, Stat};
use crate::hooks::use_in_view;
use crate::ui::container::Container;

/// Renders one stat figure: a static `0` placeholder until the section has
/// been seen (no layout shift), then the counting span.
fn stat_value(stat: &Stat, visible: bool) -> Html {
    let prefix = stat.prefix.unwrap_or("");
    let suffix = stat.suffix.unwrap_or("");
    if visible {
        html! {
            <AnimatedCounter
                value={stat.value}
                prefix={prefix}
                suffix={suffix}
                class="stat-number gradient-text"
            />
        }
    } else {
        html! {
            <span class="stat-number gradient-text">{ format!("{prefix}0{suffix}") }</span>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    #[prop_or(content::STATS)]
    pub items: &'static [Stat],
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());

    html! {
        <section id="stats" class="stats-section" ref={section_ref}>
            <div class="stats-backdrop" aria-hidden="true"></div>
            <Container class="stats-inner">
                {
                    if props.items.is_empty() {
                        html! {
                            <div class="section-empty">
                                <p>{"No statistics available at the moment. Please check back later."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="stats-grid">
                                { for props.items.iter().map(|stat| html! {
                                    <div key={stat.id} class="stat">
                                        <div class="stat-value">
                                            { stat_value(stat, visible) }
                                        </div>
                                        <p class="stat-label">{ stat.label }</p>
                                    </div>
                                })}
                            </div>
                        }
                    }
                }
            </Container>
        </section>
    }
}
