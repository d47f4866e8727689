use chrono::{Datelike, Utc};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::content::{self, FooterColumn, SocialLink};
use crate::icons::{Icon, IconId};
use crate::newsletter::SubscribeForm;
use crate::ui::container::Container;

/// Email capture with the simulated subscribe flow. Both timers live in hook
/// state so unmounting cancels them instead of leaking a write to a disposed
/// component.
#[function_component(NewsletterSignup)]
pub fn newsletter_signup() -> Html {
    let form = use_state(SubscribeForm::default);
    let pending = use_mut_ref(|| None::<Timeout>);
    let notice = use_mut_ref(|| None::<Timeout>);

    let oninput = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(&input.value());
            // the edit dismisses any success notice, so its timer is dead
            notice.borrow_mut().take();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let pending = pending.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut submitted = (*form).clone();
            if submitted.submit() {
                let mut resolved = submitted.clone();
                resolved.resolve();
                let mut expired = resolved.clone();
                expired.expire_success();

                let form = form.clone();
                let notice = notice.clone();
                *pending.borrow_mut() = Some(Timeout::new(config::SUBSCRIBE_DELAY_MS, move || {
                    form.set(resolved);
                    let form = form.clone();
                    *notice.borrow_mut() =
                        Some(Timeout::new(config::SUCCESS_NOTICE_MS, move || {
                            form.set(expired);
                        }));
                }));
            }
            form.set(submitted);
        })
    };

    let described_by = if form.error().is_some() {
        Some("newsletter-error")
    } else if form.is_success() {
        Some("newsletter-success")
    } else {
        None
    };

    html! {
        <div class="footer-newsletter">
            <h3>{"Newsletter"}</h3>
            <p class="footer-muted">{"Subscribe to get the latest security updates and news."}</p>
            <form {onsubmit}>
                <input
                    type="email"
                    value={form.email().to_owned()}
                    {oninput}
                    placeholder="Enter your email"
                    disabled={form.is_submitting()}
                    aria-label="Email address"
                    aria-invalid={if form.error().is_some() { "true" } else { "false" }}
                    aria-describedby={described_by}
                />
                {
                    if let Some(message) = form.error() {
                        html! { <p id="newsletter-error" class="form-error" role="alert">{ message }</p> }
                    } else if form.is_success() {
                        html! {
                            <p id="newsletter-success" class="form-success" role="status">
                                {"Successfully subscribed!"}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
                <button
                    type="submit"
                    class="btn btn-gradient full-width"
                    disabled={form.is_submitting()}
                    aria-label="Subscribe to newsletter"
                >
                    { if form.is_submitting() { "Subscribing..." } else { "Subscribe" } }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or(content::FOOTER_COLUMNS)]
    pub columns: &'static [FooterColumn],
    #[prop_or(content::SOCIAL_LINKS)]
    pub socials: &'static [SocialLink],
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer" role="contentinfo">
            <Container>
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <Icon id={IconId::Shield} class="icon-md brand" />
                            <span>{ config::SITE_NAME }</span>
                        </div>
                        <p class="footer-muted">{ config::TAGLINE }</p>
                        <div class="footer-socials">
                            { for props.socials.iter().map(|social| html! {
                                <a
                                    key={social.platform}
                                    href={social.href}
                                    aria-label={format!("Visit our {} page", social.platform)}
                                    class="footer-social"
                                >
                                    <Icon id={social.icon} class="icon-sm" />
                                </a>
                            })}
                        </div>
                    </div>
                    {
                        if props.columns.is_empty() {
                            html! { <p class="footer-muted">{"No links available."}</p> }
                        } else {
                            html! {
                                <>
                                    { for props.columns.iter().map(|column| html! {
                                        <nav key={column.title} class="footer-column" aria-label={column.title}>
                                            <h3>{ column.title }</h3>
                                            <ul>
                                                { for column.links.iter().map(|link| html! {
                                                    <li key={link.label}>
                                                        <a href={link.href}>{ link.label }</a>
                                                    </li>
                                                })}
                                            </ul>
                                        </nav>
                                    })}
                                </>
                            }
                        }
                    }
                    <NewsletterSignup />
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} {}. All rights reserved.", year, config::SITE_NAME) }</p>
                </div>
            </Container>
        </footer>
    }
}
