use yew::prelude::*;

use crate::components::{
    accordion::FaqAccordion,
    drag_scroll::BenefitsCards,
    filters::ProjectFilters,
    header::Header,
    marquee::Marquee,
    quiz::Quiz,
    reveal::RevealSection,
    tabs::TabsBlock,
    video::TestimonialVideo,
};

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "/assets/video/olga.mp4",
        "/assets/video/olga.webp",
        "Olga, two-room flat: \"Finished two days early.\"",
    ),
    (
        "/assets/video/dmitry.mp4",
        "/assets/video/dmitry.webp",
        "Dmitry, country house: \"The estimate never moved.\"",
    ),
    (
        "/assets/video/irina.mp4",
        "/assets/video/irina.webp",
        "Irina, studio: \"Photo reports every single evening.\"",
    ),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let testimonials = TESTIMONIALS.iter().map(|(src, poster, caption)| {
        html! { <TestimonialVideo src={*src} poster={*poster} caption={*caption} /> }
    });

    html! {
        <div class="landing-page" id="top">
            <Header />
            <section class="hero">
                <div class="hero-content">
                    <h1>{"Renovation with a fixed price and a fixed date"}</h1>
                    <p class="hero-subtitle">
                        {"Answer four questions and get an itemised estimate for your home."}
                    </p>
                    <a href="#quiz" class="hero-cta">{"Start the quiz"}</a>
                </div>
            </section>

            <Marquee />

            <RevealSection>
                <Quiz />
            </RevealSection>

            <RevealSection>
                <TabsBlock />
            </RevealSection>

            <RevealSection>
                <BenefitsCards />
            </RevealSection>

            <ProjectFilters />

            <RevealSection>
                <section id="reviews" class="testimonials">
                    <h2>{"What our clients say"}</h2>
                    <div class="testimonials-grid">{ for testimonials }</div>
                </section>
            </RevealSection>

            <RevealSection>
                <FaqAccordion />
            </RevealSection>

            <footer class="site-footer">
                <p>{"Brightline renovation · +7 (800) 000-00-00"}</p>
            </footer>
        </div>
    }
}
