use yew::prelude::*;

struct Offering {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    price: &'static str,
}

const OFFERINGS: &[Offering] = &[
    Offering {
        title: "Anxiety & Stress Management",
        description: "Learn effective coping strategies and evidence-based techniques to manage anxiety, reduce stress, and regain control over your daily life. Through personalized approaches including CBT and mindfulness practices, we'll work together to help you find calm and confidence.",
        image: "/images/first.jpg",
        price: "$200 / individual session",
    },
    Offering {
        title: "Relationship Counseling",
        description: "Strengthen your connection with your partner through improved communication, conflict resolution, and deeper understanding. Whether you're facing challenges or seeking to enhance your relationship, couples therapy provides tools for lasting positive change.",
        image: "/images/second.jpg",
        price: "$240 / couples session",
    },
    Offering {
        title: "Trauma Recovery",
        description: "Heal from past experiences in a safe, supportive environment using trauma-informed approaches. Together, we'll process difficult experiences at your pace, helping you reclaim your sense of safety, strength, and hope for the future.",
        image: "/images/third.jpg",
        price: "$200 / individual session",
    },
];

fn offering_card(offering: &Offering) -> Html {
    html! {
        <div class="service-card">
            <img src={offering.image} alt={offering.title} class="service-image" />
            <div class="service-content">
                <h3>{offering.title}</h3>
                <p>{offering.description}</p>
                <p class="service-price">{offering.price}</p>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <h2>{"Services & Specialties"}</h2>
            <p>{"Comprehensive psychological care tailored to your unique needs and goals"}</p>

            <div class="services-grid">
                { for OFFERINGS.iter().map(offering_card) }
            </div>

            <div class="office-hours">
                <h3>{"Office Hours"}</h3>
                <div class="office-hours-grid">
                    <div>
                        <h4>{"In-Person Sessions"}</h4>
                        <p>{"Tuesday & Thursday"}</p>
                        <p>{"10:00 AM – 6:00 PM"}</p>
                    </div>
                    <div>
                        <h4>{"Virtual Sessions (Zoom)"}</h4>
                        <p>{"Monday, Wednesday & Friday"}</p>
                        <p>{"1:00 PM – 5:00 PM"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offering_is_priced_per_session() {
        assert_eq!(OFFERINGS.len(), 3);
        for offering in OFFERINGS {
            assert!(offering.price.starts_with('$'), "{}", offering.title);
            assert!(offering.price.ends_with("session"), "{}", offering.title);
        }
    }
}
