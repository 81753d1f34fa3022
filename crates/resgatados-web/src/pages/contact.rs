//! Contact Page

use leptos::prelude::*;

use resgatados_core::{validate_form, ContactForm, FieldErrors};

use crate::api;
use crate::components::{FormStatus, Hero};

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (status, set_status) = signal(None::<Result<String, String>>);

    let field_error = move |field: &'static str| {
        errors.with(move |errors| errors.get(field).map(str::to_string))
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            subject: subject.get(),
            message: message.get(),
        };

        // Inline errors first; the server re-validates on receipt.
        if let Err(field_errors) = validate_form(&form) {
            set_errors.set(field_errors);
            return;
        }

        set_errors.set(FieldErrors::default());
        set_submitting.set(true);
        set_status.set(None);

        leptos::task::spawn_local(async move {
            match api::submit_contact(&form).await {
                Ok(ack) => {
                    set_status.set(Some(Ok(ack)));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(err) => set_status.set(Some(Err(err))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page contact">
            <Hero
                title="Entre em Contato"
                subtitle="Estamos aqui para ouvir você"
                image_url="https://images.unsplash.com/photo-1423666639041-f56000c27a9a?w=1600&q=80"
            />

            <section class="contact-grid">
                <div class="contact-info">
                    <h2>"Fale Conosco"</h2>
                    <div class="card">
                        <h3>"Endereço"</h3>
                        <p>"Rua Principal, 123" <br /> "Centro - Garopaba, SC" <br /> "CEP: 88495-000"</p>
                    </div>
                    <div class="card">
                        <h3>"Telefone"</h3>
                        <p>"(48) 99999-9999"</p>
                    </div>
                    <div class="card">
                        <h3>"E-mail"</h3>
                        <p>"contato@resgatados.org.br"</p>
                    </div>
                </div>

                <form class="contact-form" on:submit=submit>
                    <div class="field">
                        <label>"Nome"</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("name").map(|m| view! { <span class="field-error">{m}</span> })
                        }}
                    </div>

                    <div class="field">
                        <label>"E-mail"</label>
                        <input
                            type="text"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("email").map(|m| view! { <span class="field-error">{m}</span> })
                        }}
                    </div>

                    <div class="field">
                        <label>"Assunto"</label>
                        <input
                            type="text"
                            prop:value=move || subject.get()
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("subject")
                                .map(|m| view! { <span class="field-error">{m}</span> })
                        }}
                    </div>

                    <div class="field">
                        <label>"Mensagem"</label>
                        <textarea
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("message")
                                .map(|m| view! { <span class="field-error">{m}</span> })
                        }}
                    </div>

                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Enviando..." } else { "Enviar Mensagem" }}
                    </button>
                    <FormStatus status=status />
                </form>
            </section>
        </div>
    }
}
