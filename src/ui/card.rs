use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    /// Solid dark panel.
    #[default]
    Default,
    /// Glass morphism: translucent body with backdrop blur.
    Glass,
    /// Gradient border with a glow; used for the highlighted pricing plan.
    Featured,
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub hoverable: bool,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let hover = props.hoverable.then(|| "card-hover");

    // The featured variant needs a wrapper so the gradient can act as a
    // border around the inner panel.
    if props.variant == CardVariant::Featured {
        return html! {
            <div class={classes!("card", "card-featured", hover, props.class.clone())}>
                <div class="card-featured-inner">
                    { for props.children.iter() }
                </div>
            </div>
        };
    }

    let variant = match props.variant {
        CardVariant::Default => "card-default",
        CardVariant::Glass => "card-glass",
        CardVariant::Featured => unreachable!(),
    };

    html! {
        <div class={classes!("card", variant, hover, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
