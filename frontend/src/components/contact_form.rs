use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use log::info;

use crate::contact::controller::SubmissionController;
use crate::contact::form::{ErrorMap, Field, FieldUpdate, FormState, Lifecycle};
use crate::contact::transport::{configured_transport, SubmitError};
use crate::contact::validators::REASON_MAX_LEN;

const REASON_HELP: &str = "Minimum 20 characters required";
const PREFERRED_TIME_HELP: &str = "Please specify days of the week and/or time ranges when you're available";

pub enum Msg {
    Update(FieldUpdate),
    Submit,
    Finished(Result<(), SubmitError>),
}

pub struct ContactForm {
    state: FormState,
    controller: SubmissionController,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::new(),
            controller: SubmissionController::new(configured_transport()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Update(update) => {
                self.state.apply(update);
                true
            }
            Msg::Submit => {
                match self.controller.start(&mut self.state) {
                    Ok(pending) => {
                        ctx.link().send_future(async move { Msg::Finished(pending.await) });
                    }
                    Err(rejected) => {
                        info!("Contact form not sent: {}", rejected);
                    }
                }
                true
            }
            Msg::Finished(outcome) => {
                if let Err(e) = &outcome {
                    gloo_console::error!("Contact form submission failed:", e.to_string());
                }
                self.state.finish_submit(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if *self.state.lifecycle() == Lifecycle::Submitted {
            return view_confirmation();
        }

        let data = self.state.data();
        let errors = self.state.errors();
        let submitting = *self.state.lifecycle() == Lifecycle::Submitting;

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_reason = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::Update(FieldUpdate::Reason(input.value()))
        });
        let on_agree = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Update(FieldUpdate::AgreeToContact(input.checked()))
        });

        html! {
            <section id="contact" class="contact-section">
                <style>
                {r#".contact-section {
                    padding: 4rem 1rem;
                    background: #fff;
                }
                .contact-container {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .contact-form .form-group {
                    margin-bottom: 1.5rem;
                }
                .contact-form label {
                    display: block;
                    font-weight: 500;
                    color: #44403c;
                    margin-bottom: 0.25rem;
                }
                .contact-form input[type="text"],
                .contact-form input[type="tel"],
                .contact-form input[type="email"],
                .contact-form textarea {
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #d6d3d1;
                    border-radius: 6px;
                }
                .contact-form .invalid {
                    border-color: #ef4444;
                }
                .field-error, .submit-error {
                    color: #dc2626;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                .field-help, .char-count {
                    color: #78716c;
                    font-size: 0.75rem;
                }
                .submit-button {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 50px;
                    background: #9CAF88;
                    color: white;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    background: #9ca3af;
                    cursor: not-allowed;
                }
                .confirmation {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 8px;
                    padding: 2rem;
                    text-align: center;
                    color: #166534;
                }"#}
                </style>
                <div class="contact-container">
                    <h2>{"Get Started Today"}</h2>
                    <p>{"Ready to begin your journey? Fill out the form below and I'll be in touch within 24 hours."}</p>

                    <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                        { text_input(ctx, &errors, Field::Name, "Full Name *", "text", "Enter your full name", &data.name, FieldUpdate::Name, None) }
                        { text_input(ctx, &errors, Field::Phone, "Phone Number *", "tel", "(555) 123-4567", &data.phone, FieldUpdate::Phone, None) }
                        { text_input(ctx, &errors, Field::Email, "Email Address *", "email", "your.email@example.com", &data.email, FieldUpdate::Email, None) }

                        <div class="form-group">
                            <label for="reason">{"What brings you here? *"}</label>
                            <textarea
                                id="reason"
                                rows="4"
                                class={classes!(errors.get(Field::Reason).is_some().then(|| "invalid"))}
                                placeholder="Please share what you're hoping to work on, any specific concerns, or questions you have about therapy."
                                value={data.reason.clone()}
                                oninput={on_reason}
                            />
                            { field_message(&errors, Field::Reason, Some(REASON_HELP)) }
                            <div class="char-count">{format!("{}/{}", data.reason.chars().count(), REASON_MAX_LEN)}</div>
                        </div>

                        { text_input(ctx, &errors, Field::PreferredTime, "Preferred time to reach you *", "text", "e.g., Weekday mornings, evenings after 6pm, weekends", &data.preferred_time, FieldUpdate::PreferredTime, Some(PREFERRED_TIME_HELP)) }

                        <div class="form-group consent">
                            <input
                                id="agreeToContact"
                                type="checkbox"
                                class={classes!(errors.get(Field::AgreeToContact).is_some().then(|| "invalid"))}
                                checked={data.agree_to_contact}
                                onchange={on_agree}
                            />
                            <label for="agreeToContact">
                                {"I agree to be contacted regarding my inquiry. I understand that this form is not secure and should not include sensitive health information. By submitting this form, I consent to receive communications about scheduling and therapy services. *"}
                            </label>
                            { field_error(&errors, Field::AgreeToContact) }
                        </div>

                        if let Lifecycle::Failed(reason) = self.state.lifecycle() {
                            <div class="submit-error" role="alert">
                                {reason.to_string()}
                                {" Your message has been kept, you can send it again."}
                            </div>
                        }

                        <button type="submit" class="submit-button" disabled={!self.state.can_submit()}>
                            { if submitting { "Sending Message..." } else { "Send Message" } }
                        </button>

                        <div class="field-help">
                            <p>{"All fields marked with * are required. Your information is kept confidential."}</p>
                            <p>{"Response time: Within 24 hours during business days."}</p>
                        </div>
                    </form>
                </div>
            </section>
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn text_input(
    ctx: &Context<ContactForm>,
    errors: &ErrorMap,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
    to_update: fn(String) -> FieldUpdate,
    help: Option<&'static str>,
) -> Html {
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Update(to_update(input.value()))
    });

    html! {
        <div class="form-group">
            <label for={field.key()}>{label}</label>
            <input
                id={field.key()}
                type={input_type}
                class={classes!(errors.get(field).is_some().then(|| "invalid"))}
                placeholder={placeholder}
                value={value.to_string()}
                {oninput}
            />
            { field_message(errors, field, help) }
        </div>
    }
}

/// The field's error when it has one, otherwise its help line if any.
fn field_message(errors: &ErrorMap, field: Field, help: Option<&'static str>) -> Html {
    match (errors.get(field), help) {
        (None, Some(help)) => html! { <div class="field-help">{help}</div> },
        _ => field_error(errors, field),
    }
}

fn field_error(errors: &ErrorMap, field: Field) -> Html {
    match errors.message(field) {
        Some(message) => html! {
            <div id={format!("{}-error", field.key())} class="field-error" role="alert">
                {message}
            </div>
        },
        None => html! {},
    }
}

fn view_confirmation() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <div class="contact-container">
                <div class="confirmation">
                    <h2>{"Thank You for Reaching Out"}</h2>
                    <p>
                        {"I've received your message and will get back to you within 24 hours. I look forward to speaking with you about how I can support your journey."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_line_shows_until_the_field_has_an_error() {
        let mut state = FormState::new();
        let shown = field_message(&state.errors(), Field::PreferredTime, Some(PREFERRED_TIME_HELP));
        assert!(shown == html! { <div class="field-help">{PREFERRED_TIME_HELP}</div> });

        state.apply(FieldUpdate::PreferredTime("soon".to_string()));
        let errors = state.errors();
        let shown = field_message(&errors, Field::PreferredTime, Some(PREFERRED_TIME_HELP));
        assert!(shown == field_error(&errors, Field::PreferredTime));
        assert!(shown != html! {});
    }

    #[test]
    fn fields_without_help_render_nothing_while_valid() {
        assert!(field_message(&ErrorMap::default(), Field::Name, None) == html! {});
    }
}
