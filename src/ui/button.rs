use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Blue-to-silver gradient fill.
    #[default]
    Gradient,
    /// Gradient border with gradient text on a transparent body.
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Gradient => "btn btn-gradient",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or("button")]
    pub kind: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.kind}
            class={classes!(props.variant.class(), props.class.clone())}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
