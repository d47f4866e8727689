use yew::prelude::*;

use crate::sections::about::About;
use crate::sections::features::Features;
use crate::sections::footer::Footer;
use crate::sections::hero::Hero;
use crate::sections::pricing::Pricing;
use crate::sections::services::Services;
use crate::sections::stats::Stats;
use crate::sections::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    * { margin: 0; padding: 0; box-sizing: border-box; }

                    body {
                        background: #0B0F19;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                        line-height: 1.5;
                    }

                    .container {
                        margin: 0 auto;
                        width: 100%;
                        max-width: 1200px;
                        padding: 0 1rem;
                    }

                    .gradient-text {
                        background: linear-gradient(45deg, #60a5fa, #22d3ee, #c084fc);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        color: transparent;
                    }

                    .section { padding: 5rem 0; position: relative; }

                    .section-heading { margin-bottom: 3rem; }
                    .section-heading.centered { text-align: center; }
                    .section-heading h2 { font-size: 2.5rem; font-weight: 700; }
                    .section-subtitle { margin-top: 1rem; font-size: 1.125rem; color: #cbd5e1; }

                    .section-empty { text-align: center; padding: 3rem 0; }
                    .section-empty p { color: #94a3b8; font-size: 1.125rem; }

                    /* buttons */
                    .btn {
                        padding: 0.75rem 1.5rem;
                        min-height: 44px;
                        border: none;
                        border-radius: 0.5rem;
                        font-size: 1rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease-in-out;
                    }
                    .btn:hover { transform: scale(1.05); }
                    .btn:disabled { opacity: 0.5; cursor: not-allowed; transform: none; }
                    .btn-gradient {
                        background: linear-gradient(90deg, #3b82f6, #9ca3af);
                        color: #fff;
                    }
                    .btn-gradient:hover { box-shadow: 0 0 20px rgba(59, 130, 246, 0.5); }
                    .btn-outline {
                        background: transparent;
                        border: 2px solid #3b82f6;
                        color: #60a5fa;
                    }
                    .btn-outline:hover { border-color: #22d3ee; color: #22d3ee; }
                    .full-width { width: 100%; }

                    /* cards */
                    .card { border-radius: 0.75rem; padding: 2rem; transition: all 0.3s ease-in-out; }
                    .card-default {
                        background: #121826;
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        box-shadow: 0 4px 16px rgba(59, 130, 246, 0.1);
                    }
                    .card-glass {
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(16px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .card-featured {
                        background: linear-gradient(90deg, #3b82f6, #9ca3af);
                        padding: 2px;
                        box-shadow: 0 0 30px rgba(59, 130, 246, 0.3);
                    }
                    .card-featured-inner {
                        background: #121826;
                        border-radius: 0.625rem;
                        padding: 2rem;
                        height: 100%;
                    }
                    .card-hover:hover {
                        transform: scale(1.05) translateY(-4px);
                        box-shadow: 0 0 30px rgba(59, 130, 246, 0.3);
                        border-color: rgba(59, 130, 246, 0.5);
                    }
                    .card-icon-badge {
                        display: inline-flex;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(34, 211, 238, 0.2));
                        border: 1px solid rgba(59, 130, 246, 0.3);
                        color: #60a5fa;
                    }
                    .card-icon-badge.small { padding: 0.75rem; margin-bottom: 1rem; }
                    .card-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
                    .card-description { color: #94a3b8; font-size: 0.95rem; }

                    .icon-lg { width: 48px; height: 48px; }
                    .icon-md { width: 32px; height: 32px; }
                    .icon-sm { width: 20px; height: 20px; }

                    /* reveal-on-scroll */
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                    }
                    .reveal.is-visible { opacity: 1; transform: translateY(0); }
                    .reveal.no-motion { transform: none; transition: none; }

                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .fade-up { opacity: 0; animation: fadeUp 0.8s ease-out forwards; }
                    .fade-up.delay-1 { animation-delay: 0.2s; }
                    .fade-up.delay-2 { animation-delay: 0.4s; }
                    .fade-up.delay-3 { animation-delay: 0.6s; }

                    /* hero */
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background:
                            linear-gradient(rgba(255, 255, 255, 0.04) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(255, 255, 255, 0.04) 1px, transparent 1px);
                        background-size: 50px 50px;
                        mask-image: radial-gradient(ellipse at center, black 40%, transparent 75%);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .hero-title { font-size: 3.5rem; font-weight: 700; max-width: 56rem; margin-bottom: 1.5rem; }
                    .hero-subtitle { font-size: 1.25rem; color: #cbd5e1; max-width: 600px; margin-bottom: 2.5rem; }
                    .hero-cta-group { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; }

                    /* grids */
                    .services-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .features-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                    .pricing-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; align-items: stretch; }

                    /* about */
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-description { color: #94a3b8; margin-bottom: 2rem; font-size: 1.05rem; }
                    .about-features { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2.5rem; }
                    .about-feature {
                        display: flex;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: rgba(18, 24, 38, 0.5);
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        transition: border-color 0.3s;
                    }
                    .about-feature:hover { border-color: rgba(34, 211, 238, 0.4); }
                    .about-feature-icon { color: #60a5fa; flex-shrink: 0; margin-top: 0.25rem; }
                    .about-feature h4 { margin-bottom: 0.25rem; font-weight: 500; }
                    .about-feature p { color: #94a3b8; font-size: 0.875rem; }
                    .about-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                    .about-stat { text-align: center; }
                    .about-stat-value { font-size: 2rem; font-weight: 700; margin-bottom: 0.5rem; }
                    .about-stat-label { font-size: 0.875rem; color: #94a3b8; }
                    .about-visual { position: relative; border-radius: 1rem; overflow: hidden; }
                    .about-visual img { display: block; width: 100%; aspect-ratio: 4 / 3; object-fit: cover; }
                    .about-visual-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(11, 15, 25, 0.2), transparent);
                    }

                    /* stats band */
                    .stats-section { position: relative; padding: 5rem 0; overflow: hidden; }
                    .stats-backdrop {
                        position: absolute;
                        inset: 0;
                        background:
                            linear-gradient(rgba(255, 255, 255, 0.05) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(255, 255, 255, 0.05) 1px, transparent 1px);
                        background-size: 50px 50px;
                        opacity: 0.4;
                    }
                    .stats-inner { position: relative; z-index: 1; }
                    .stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .stat { text-align: center; }
                    .stat-number { font-size: 3rem; font-weight: 700; }
                    .stat-label { margin-top: 0.75rem; color: #94a3b8; }

                    /* testimonials carousel */
                    .carousel { position: relative; }
                    .carousel-viewport { overflow: hidden; }
                    .carousel-track { display: flex; transition: transform 0.5s ease-in-out; }
                    .carousel-slide { flex: 0 0 100%; min-width: 0; padding: 0 0.5rem; }
                    .testimonial-card {
                        background: #121826;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        padding: 3rem;
                        text-align: center;
                    }
                    .testimonial-avatar {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #3b82f6, #9ca3af);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .testimonial-quote { font-style: italic; font-size: 1.125rem; margin-bottom: 1.5rem; }
                    .testimonial-name { font-weight: 600; }
                    .testimonial-role { color: #94a3b8; font-size: 0.875rem; }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #121826;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: all 0.3s;
                    }
                    .carousel-arrow:hover { background: linear-gradient(90deg, #3b82f6, #9ca3af); }
                    .carousel-arrow.prev { left: -1rem; }
                    .carousel-arrow.next { right: -1rem; }
                    .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
                    .carousel-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .carousel-dot:hover { background: rgba(255, 255, 255, 0.4); }
                    .carousel-dot.active { width: 2rem; background: linear-gradient(90deg, #3b82f6, #9ca3af); }

                    /* pricing */
                    .pricing-slot { position: relative; }
                    .pricing-slot.featured { transform: scale(1.05); }
                    .pricing-slot.featured.reveal { transform: scale(1.05) translateY(30px); }
                    .pricing-slot.featured.reveal.is-visible { transform: scale(1.05) translateY(0); }
                    .pricing-badge {
                        position: absolute;
                        top: -0.875rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: linear-gradient(90deg, #3b82f6, #9ca3af);
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        z-index: 1;
                    }
                    .pricing-card { display: flex; flex-direction: column; height: 100%; }
                    .pricing-name { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                    .pricing-price { font-size: 3rem; font-weight: 700; }
                    .pricing-period { color: #94a3b8; margin-bottom: 1rem; }
                    .pricing-description { color: #94a3b8; font-size: 0.875rem; margin-bottom: 2rem; }
                    .pricing-features { list-style: none; flex-grow: 1; margin-bottom: 2rem; }
                    .pricing-features li { display: flex; gap: 0.75rem; align-items: flex-start; margin-bottom: 1rem; }
                    .pricing-features .check { color: #3b82f6; flex-shrink: 0; margin-top: 0.125rem; }

                    /* footer */
                    .footer {
                        border-top: 1px solid transparent;
                        background:
                            linear-gradient(90deg, rgba(59, 130, 246, 0.2), rgba(34, 211, 238, 0.2), rgba(192, 132, 252, 0.2))
                            top / 100% 1px no-repeat;
                        padding: 4rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-logo .brand { color: #3b82f6; }
                    .footer-muted { color: #94a3b8; font-size: 0.875rem; margin-bottom: 1.5rem; }
                    .footer-socials { display: flex; gap: 1rem; }
                    .footer-social {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: #121826;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #94a3b8;
                        transition: all 0.3s;
                    }
                    .footer-social:hover {
                        border-color: rgba(59, 130, 246, 0.5);
                        color: #3b82f6;
                        box-shadow: 0 0 20px rgba(59, 130, 246, 0.3);
                    }
                    .footer-column h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; }
                    .footer-column ul { list-style: none; }
                    .footer-column li { margin-bottom: 0.75rem; }
                    .footer-column a { color: #94a3b8; font-size: 0.875rem; text-decoration: none; transition: color 0.3s; }
                    .footer-column a:hover { color: #3b82f6; }
                    .footer-newsletter h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; }
                    .footer-newsletter form { display: flex; flex-direction: column; gap: 0.75rem; }
                    .footer-newsletter input {
                        width: 100%;
                        padding: 0.625rem 1rem;
                        background: #121826;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                        color: #fff;
                        font-size: 0.875rem;
                    }
                    .footer-newsletter input:focus { outline: none; border-color: #3b82f6; }
                    .footer-newsletter input:disabled { opacity: 0.5; }
                    .form-error { color: #f87171; font-size: 0.75rem; }
                    .form-success { color: #4ade80; font-size: 0.75rem; }
                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                        color: #94a3b8;
                        font-size: 0.875rem;
                    }

                    @media (max-width: 950px) {
                        .hero-title { font-size: 2.5rem; }
                        .section-heading h2 { font-size: 2rem; }
                        .services-grid,
                        .features-grid,
                        .pricing-grid { grid-template-columns: 1fr; }
                        .about-grid { grid-template-columns: 1fr; gap: 2.5rem; }
                        .stats-grid { grid-template-columns: repeat(2, 1fr); }
                        .footer-grid { grid-template-columns: 1fr; }
                        .pricing-slot.featured,
                        .pricing-slot.featured.reveal.is-visible { transform: none; }
                        .carousel-arrow.prev { left: 0.25rem; }
                        .carousel-arrow.next { right: 0.25rem; }
                    }

                    @media (prefers-reduced-motion: reduce) {
                        .fade-up { animation: none; opacity: 1; }
                        .reveal { transition: none; transform: none; }
                        .carousel-track { transition: none; }
                        .btn:hover { transform: none; }
                        .card-hover:hover { transform: none; }
                    }
                "#}
            </style>

            <Hero />
            <Services />
            <About />
            <Features />
            <Stats />
            <Testimonials />
            <Pricing />
            <Footer />
        </div>
    }
}
