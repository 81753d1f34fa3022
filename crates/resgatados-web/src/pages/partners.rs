//! Partners Page

use leptos::prelude::*;

use resgatados_core::{validate_form, FieldErrors, PartnerForm};

use crate::api;
use crate::components::{FormStatus, Hero};
use crate::content;

#[component]
pub fn PartnersPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
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

        let form = PartnerForm {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            message: message.get(),
        };

        if let Err(field_errors) = validate_form(&form) {
            set_errors.set(field_errors);
            return;
        }

        set_errors.set(FieldErrors::default());
        set_submitting.set(true);
        set_status.set(None);

        leptos::task::spawn_local(async move {
            match api::submit_partner_contact(&form).await {
                Ok(ack) => {
                    set_status.set(Some(Ok(ack)));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_phone.set(String::new());
                    set_message.set(String::new());
                }
                Err(err) => set_status.set(Some(Err(err))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page partners">
            <Hero
                title="Nossos Parceiros"
                subtitle="Juntos transformamos mais vidas"
                image_url="https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=1600&q=80"
            />

            <section class="partner-grid">
                <div class="grid">
                    {content::PARTNERS
                        .iter()
                        .map(|partner| {
                            view! {
                                <div class="card">
                                    <img src=partner.logo alt=partner.name />
                                    <span class="badge">{partner.kind.label()}</span>
                                    <h3>{partner.name}</h3>
                                    <p>{partner.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="partner-form">
                <h2>"Seja um Parceiro"</h2>
                <p class="subtitle">
                    "Igrejas, empresas e centros terapêuticos: junte-se a nós nessa missão"
                </p>

                <form on:submit=submit>
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
                        <label>"Telefone"</label>
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("phone").map(|m| view! { <span class="field-error">{m}</span> })
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
                        {move || if submitting.get() { "Enviando..." } else { "Enviar" }}
                    </button>
                    <FormStatus status=status />
                </form>
            </section>
        </div>
    }
}
