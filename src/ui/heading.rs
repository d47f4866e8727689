use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub centered: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!(
            "section-heading",
            props.centered.then(|| "centered"),
            props.class.clone(),
        )}>
            <h2 class="gradient-text">{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{ subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
