use yew::prelude::*;
use web_sys::MouseEvent;

const FAQS: &[(&str, &str)] = &[
    (
        "Do you accept insurance?",
        "No, I do not accept insurance directly. However, I provide a detailed superbill that you can submit to your insurance company for potential reimbursement. Many clients find they can recover a portion of their session fees through their out-of-network benefits.",
    ),
    (
        "Are online sessions available?",
        "Yes, I offer virtual sessions via secure Zoom video calls on Mondays, Wednesdays, and Fridays from 1:00 PM to 5:00 PM. Online therapy can be just as effective as in-person sessions and offers greater flexibility for busy schedules.",
    ),
    (
        "What is your cancellation policy?",
        "I require 24-hour advance notice for cancellations or rescheduling. Appointments cancelled with less than 24 hours notice will be charged the full session fee. This policy helps ensure that appointment times remain available for all clients.",
    ),
    (
        "How long are therapy sessions?",
        "Individual therapy sessions are 50 minutes long, while couples sessions are 60 minutes. This allows adequate time to explore concerns, practice new skills, and process insights in a comfortable, unhurried environment.",
    ),
    (
        "How do I know if therapy is right for me?",
        "Therapy can benefit anyone seeking personal growth, better coping strategies, or support through life's challenges. I offer a free 15-minute consultation to discuss your concerns and determine if we're a good fit to work together.",
    ),
];

/// Only one answer is shown at a time; clicking the open one closes it.
fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.to_string()}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{props.answer.to_string()}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <p>{"Common questions about therapy and my practice"}</p>
            {
                for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_| open.set(toggle_open(*open, index)))
                    };
                    html! {
                        <FaqItem
                            question={*question}
                            answer={*answer}
                            is_open={*open == Some(index)}
                            {on_toggle}
                        />
                    }
                })
            }
        </section>
    }
}
