use yew::prelude::*;

use crate::content::{self, PricingPlan};
use crate::hooks::{use_in_view, use_reduced_motion};
use crate::icons::{Icon, IconId};
use crate::ui::button::{Button, ButtonVariant};
use crate::ui::card::{Card, CardVariant};
use crate::ui::container::Container;
use crate::ui::heading::SectionHeading;

fn plan_card(plan: &PricingPlan) -> Html {
    let variant = if plan.featured {
        CardVariant::Featured
    } else {
        CardVariant::Default
    };
    let cta_variant = if plan.featured {
        ButtonVariant::Gradient
    } else {
        ButtonVariant::Outline
    };

    html! {
        <article aria-label={format!("{} pricing plan", plan.name)}>
            {
                if plan.featured {
                    html! { <div class="pricing-badge">{"Most Popular"}</div> }
                } else {
                    html! {}
                }
            }
            <Card {variant} hoverable={!plan.featured} class="pricing-card">
                <h3 class="pricing-name">{ plan.name }</h3>
                <div class={classes!("pricing-price", plan.featured.then(|| "gradient-text"))}>
                    { format!("${}", plan.price) }
                </div>
                <p class="pricing-period">{ format!("per {}", plan.period) }</p>
                <p class="pricing-description">{ plan.description }</p>
                <ul class="pricing-features">
                    { for plan.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <Icon id={IconId::Check} class="icon-sm check" />
                            <span>{ *feature }</span>
                        </li>
                    })}
                </ul>
                <Button
                    variant={cta_variant}
                    class="full-width"
                    aria_label={format!(
                        "{} for {} plan at ${} per {}",
                        plan.cta_text, plan.name, plan.price, plan.period,
                    )}
                >
                    { plan.cta_text }
                </Button>
            </Card>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    #[prop_or(content::PRICING_PLANS)]
    pub plans: &'static [PricingPlan],
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone());
    let reduced_motion = use_reduced_motion();

    html! {
        <section id="pricing" class="section" ref={section_ref}>
            <Container>
                <SectionHeading
                    title="Pricing Plans"
                    subtitle="Choose the perfect plan for your security needs"
                    centered=true
                />
                {
                    if props.plans.is_empty() {
                        html! {
                            <div class="section-empty">
                                <p>{"No pricing plans available at the moment. Please check back later."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="pricing-grid">
                                { for props.plans.iter().enumerate().map(|(index, plan)| {
                                    let stagger = (!reduced_motion)
                                        .then(|| format!("transition-delay: {}ms;", index * 150));
                                    html! {
                                        <div
                                            key={plan.id}
                                            class={classes!(
                                                "reveal",
                                                "pricing-slot",
                                                plan.featured.then(|| "featured"),
                                                (visible || reduced_motion).then(|| "is-visible"),
                                                reduced_motion.then(|| "no-motion"),
                                            )}
                                            style={stagger}
                                        >
                                            { plan_card(plan) }
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
