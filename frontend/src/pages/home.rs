use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::pages::about::About;
use crate::pages::faq::Faq;
use crate::pages::services::Services;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <h1>{"Compassionate Care for"}</h1>
            <h1>{"Healing, Growth, and Well-Being"}</h1>
            <p class="hero-subtitle">
                {"Offering evidence-based individual and couples therapy in Los Angeles and virtually across California through personalized, mindful approaches"}
            </p>
            // plain anchor, the browser handles the jump to the form
            <a href="#contact" class="hero-cta">{"BOOK A FREE CONSULT"}</a>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    html! {
        <main class="landing-page">
            <Hero />
            <About />
            <Services />
            <Faq />
            <ContactForm />
        </main>
    }
}
