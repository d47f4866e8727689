use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::Carousel;
use crate::config;
use crate::content::{self, Testimonial};
use crate::icons::{Icon, IconId};
use crate::ui::container::Container;
use crate::ui::heading::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    #[prop_or(content::TESTIMONIALS)]
    pub items: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = use_state(|| Carousel::new(props.items.len(), true));

    // Keep the selection invariant if the slide set ever changes size.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |count: &usize| {
                if carousel.slide_count() != *count {
                    carousel.set(Carousel::new(*count, true));
                }
                || ()
            },
            props.items.len(),
        );
    }

    // Autoplay advances on a fixed cadence and keeps running through manual
    // navigation; a zero interval disables it for 0/1-slide sets.
    {
        let carousel = carousel.clone();
        let millis = if carousel.is_auto_playing() {
            config::AUTOPLAY_INTERVAL_MS
        } else {
            0
        };
        use_interval(
            move || {
                let mut next = (*carousel).clone();
                next.scroll_next();
                carousel.set(next);
            },
            millis,
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            let mut next = (*carousel).clone();
            next.scroll_prev();
            carousel.set(next);
        })
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            let mut next = (*carousel).clone();
            next.scroll_next();
            carousel.set(next);
        })
    };

    html! {
        <section id="testimonials" class="section">
            <Container>
                <SectionHeading
                    title="What Our Clients Say"
                    subtitle="Trusted by leading organizations worldwide"
                    centered=true
                />
                {
                    if carousel.is_empty() {
                        html! {
                            <div class="section-empty">
                                <p>{"No testimonials available at the moment. Please check back later."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <div
                                    class="carousel"
                                    role="region"
                                    aria-label="Customer testimonials carousel"
                                    aria-live="polite"
                                >
                                    <div class="carousel-viewport">
                                        <div
                                            class="carousel-track"
                                            style={format!("transform: translateX(-{}%);", carousel.scroll_offset())}
                                        >
                                            { for props.items.iter().map(|testimonial| html! {
                                                <div key={testimonial.id} class="carousel-slide">
                                                    <div class="testimonial-card">
                                                        <div class="testimonial-avatar" aria-hidden="true">
                                                            { testimonial.name.chars().next().unwrap_or('?').to_string() }
                                                        </div>
                                                        <blockquote class="testimonial-quote">
                                                            { format!("\u{201c}{}\u{201d}", testimonial.quote) }
                                                        </blockquote>
                                                        <p class="testimonial-name">{ testimonial.name }</p>
                                                        <p class="testimonial-role">
                                                            { format!("{} at {}", testimonial.role, testimonial.company) }
                                                        </p>
                                                    </div>
                                                </div>
                                            })}
                                        </div>
                                    </div>
                                    {
                                        if carousel.shows_controls() {
                                            html! {
                                                <>
                                                    <button
                                                        class="carousel-arrow prev"
                                                        onclick={on_prev}
                                                        aria-label="Previous testimonial"
                                                    >
                                                        <Icon id={IconId::ChevronLeft} />
                                                    </button>
                                                    <button
                                                        class="carousel-arrow next"
                                                        onclick={on_next}
                                                        aria-label="Next testimonial"
                                                    >
                                                        <Icon id={IconId::ChevronRight} />
                                                    </button>
                                                </>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                {
                                    if carousel.shows_controls() {
                                        html! {
                                            <div class="carousel-dots">
                                                { for carousel.snap_points().iter().enumerate().map(|(index, _)| {
                                                    let selected = carousel.selected_index() == Some(index);
                                                    let onclick = {
                                                        let carousel = carousel.clone();
                                                        Callback::from(move |_| {
                                                            let mut next = (*carousel).clone();
                                                            next.scroll_to(index);
                                                            carousel.set(next);
                                                        })
                                                    };
                                                    html! {
                                                        <button
                                                            key={index}
                                                            class={classes!("carousel-dot", selected.then(|| "active"))}
                                                            {onclick}
                                                            aria-label={format!("Go to testimonial {}", index + 1)}
                                                            aria-current={if selected { "true" } else { "false" }}
                                                        />
                                                    }
                                                })}
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </>
                        }
                    }
                }
            </Container>
        </section>
    }
}
