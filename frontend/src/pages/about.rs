use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-grid">
                <div class="about-text">
                    <h2>{"About Dr. Serena Blake"}</h2>
                    <p>
                        {"Dr. Serena Blake is a licensed clinical psychologist (PsyD) based in Los Angeles, CA, with eight years of experience and over 500 client sessions. She blends evidence-based approaches, like cognitive-behavioral therapy and mindfulness, with compassionate, personalized care to help you overcome anxiety, strengthen relationships, and heal from trauma."}
                    </p>
                    <p>
                        {"Whether you meet in her Maplewood Drive office or connect virtually via Zoom, Dr. Blake is committed to creating a safe, supportive space for you to thrive. Her approach combines clinical expertise with genuine warmth, ensuring each client feels heard, understood, and empowered on their healing journey."}
                    </p>
                    <div class="about-contact">
                        <p><strong>{"Location: "}</strong>{"1287 Maplewood Drive, Los Angeles, CA 90026"}</p>
                        <p><strong>{"Phone: "}</strong>{"(323) 555-0192"}</p>
                        <p><strong>{"Email: "}</strong>{"serena@blakepsychology.com"}</p>
                    </div>
                </div>
                <img
                    src="/images/headshot.jpg"
                    alt="Dr. Serena Blake, Clinical Psychologist"
                    width="500"
                    height="600"
                    class="about-image"
                />
            </div>
        </section>
    }
}
