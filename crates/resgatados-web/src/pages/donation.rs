//! Donation Page
//!
//! Amount/frequency selection plus the two payment paths: a static PIX key
//! and the embedded Stripe checkout widget.

use leptos::prelude::*;

use resgatados_core::{DonationRequest, Frequency, PaymentMethod, PIX_KEY, PRESET_AMOUNTS};

use crate::api;
use crate::checkout::{parse_custom_amount, CheckoutPhase};
use crate::components::Hero;
use crate::stripe::{self, ElementsHandle, StripeHandle};

const INFO_CARDS: [(&str, &str); 3] = [
    ("Transparência", "Prestação de contas mensal"),
    ("Segurança", "Pagamento 100% seguro"),
    ("Impacto Real", "Vidas transformadas"),
];

#[component]
pub fn DonationPage() -> impl IntoView {
    let (frequency, set_frequency) = signal(Frequency::Once);
    let (preset, set_preset) = signal(50u32);
    let (custom, set_custom) = signal(String::new());
    let (method, set_method) = signal(PaymentMethod::Pix);
    let (pix_copied, set_pix_copied) = signal(false);

    let final_amount = Signal::derive(move || {
        custom.with(|input| parse_custom_amount(input)).unwrap_or_else(|| f64::from(preset.get()))
    });

    let donation = move || DonationRequest {
        amount: final_amount.get(),
        frequency: frequency.get(),
        payment_method: method.get(),
    };

    let copy_pix = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(PIX_KEY);
            set_pix_copied.set(true);
        }
    };

    view! {
        <div class="page donation">
            <Hero
                title="Contribuir"
                subtitle="Sua ajuda transforma vidas"
                image_url="https://images.unsplash.com/photo-1532629345422-7515f3d16bb6?w=1600&q=80"
            />

            <section class="donate-intro">
                <h2>"Faça Parte Dessa Transformação"</h2>
                <p class="subtitle">
                    "Cada doação representa esperança, acolhimento e uma nova chance para quem \
                     mais precisa"
                </p>
                <div class="info-cards">
                    {INFO_CARDS
                        .iter()
                        .map(|&(title, description)| {
                            view! {
                                <div class="card">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="donate-form card">
                <h2>"Escolha o Valor e Forma de Pagamento"</h2>

                <div class="field">
                    <label>"Frequência"</label>
                    <div class="options">
                        {Frequency::ALL
                            .iter()
                            .map(|&option| {
                                view! {
                                    <button
                                        type="button"
                                        class:selected=move || frequency.get() == option
                                        on:click=move |_| set_frequency.set(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="field">
                    <label>"Valor da Doação"</label>
                    <div class="options">
                        {PRESET_AMOUNTS
                            .iter()
                            .map(|&value| {
                                view! {
                                    <button
                                        type="button"
                                        class:selected=move || {
                                            preset.get() == value && custom.with(String::is_empty)
                                        }
                                        on:click=move |_| {
                                            set_preset.set(value);
                                            set_custom.set(String::new());
                                        }
                                    >
                                        {format!("R$ {value}")}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <input
                        type="number"
                        min="1"
                        step="0.01"
                        placeholder="Outro valor"
                        prop:value=move || custom.get()
                        on:input=move |ev| set_custom.set(event_target_value(&ev))
                    />
                </div>

                <div class="tabs">
                    <button
                        type="button"
                        class:active=move || method.get() == PaymentMethod::Pix
                        on:click=move |_| set_method.set(PaymentMethod::Pix)
                    >
                        {PaymentMethod::Pix.label()}
                    </button>
                    <button
                        type="button"
                        class:active=move || method.get() == PaymentMethod::Card
                        on:click=move |_| set_method.set(PaymentMethod::Card)
                    >
                        {PaymentMethod::Card.label()}
                    </button>
                </div>

                {move || match method.get() {
                    PaymentMethod::Pix => {
                        view! {
                            <div class="tab-pix">
                                <p>"Escaneie o QR Code ou copie a chave PIX"</p>
                                <div class="pix-key">
                                    <input value=PIX_KEY readonly=true />
                                    <button type="button" on:click=copy_pix>"Copiar"</button>
                                </div>
                                <Show when=move || pix_copied.get()>
                                    <p class="status status-ok">
                                        "Chave PIX copiada! Cole no seu aplicativo bancário para doar"
                                    </p>
                                </Show>
                            </div>
                        }
                            .into_any()
                    }
                    PaymentMethod::Card => {
                        view! {
                            <div class="tab-card">
                                <Show
                                    when=move || donation().meets_minimum()
                                    fallback=|| {
                                        view! {
                                            <p class="muted">
                                                "Por favor, selecione um valor para continuar"
                                            </p>
                                        }
                                    }
                                >
                                    <StripeCheckout amount=final_amount />
                                </Show>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Embedded card checkout. Requests a payment intent for the current amount,
/// mounts Stripe's Payment Element against the returned secret and drives the
/// confirmation flow. Degrades to PIX instructions whenever Stripe is not
/// usable.
#[component]
fn StripeCheckout(#[prop(into)] amount: Signal<f64>) -> impl IntoView {
    let (phase, set_phase) = signal(CheckoutPhase::Idle);

    // Set on teardown so late fetch resolutions never touch a dismissed widget.
    let disposed = StoredValue::new(false);
    // Monotonic fetch id; only the latest request may apply its result.
    let request_seq = StoredValue::new(0u32);
    let stripe_ctx = StoredValue::new_local(None::<(StripeHandle, ElementsHandle)>);

    on_cleanup(move || disposed.set_value(true));

    // Request an intent for the current amount; re-runs when it changes.
    Effect::new(move |_| {
        let amount = amount.get();

        if stripe::publishable_key().is_none() {
            set_phase.set(CheckoutPhase::Unavailable);
            return;
        }

        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        stripe_ctx.set_value(None);
        set_phase.set(CheckoutPhase::LoadingIntent);

        leptos::task::spawn_local(async move {
            let result = api::create_payment_intent(amount).await;
            if disposed.get_value() || request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(secret) => set_phase.set(phase.get_untracked().intent_ready(secret)),
                Err(_) => set_phase.set(CheckoutPhase::Unavailable),
            }
        });
    });

    // Mount the Payment Element once a secret is available. A retry after a
    // confirmation error keeps the already-mounted element.
    Effect::new(move |_| {
        let CheckoutPhase::Ready { client_secret } = phase.get() else {
            return;
        };
        if stripe_ctx.with_value(Option::is_some) {
            return;
        }
        let Some(key) = stripe::publishable_key() else {
            return;
        };

        match StripeHandle::new(key) {
            Some(handle) => {
                let elements = handle.elements(&client_secret);
                elements.mount_payment_element("#payment-element");
                stripe_ctx.set_value(Some((handle, elements)));
            }
            // Stripe.js itself failed to load; same degradation as no key.
            None => set_phase.set(CheckoutPhase::Unavailable),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = phase.get_untracked();
        if !current.can_submit() {
            return;
        }
        let Some((handle, elements)) = stripe_ctx.get_value() else {
            return;
        };

        set_phase.set(current.submit());

        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        let return_url = format!("{origin}/contribuir?success=true");

        leptos::task::spawn_local(async move {
            let result = handle.confirm_payment(&elements, &return_url).await;
            if disposed.get_value() {
                return;
            }
            match result {
                Ok(()) => set_phase.set(phase.get_untracked().confirmed()),
                Err(message) => set_phase.set(phase.get_untracked().confirm_failed(message)),
            }
        });
    };

    view! {
        <div class="stripe-checkout">
            {move || match phase.get() {
                CheckoutPhase::Idle | CheckoutPhase::LoadingIntent => {
                    view! { <div class="spinner" aria-label="Carregando"></div> }.into_any()
                }
                CheckoutPhase::Unavailable => {
                    view! {
                        <div class="checkout-fallback">
                            <p>"Pagamento com cartão temporariamente indisponível."</p>
                            <p>"Por favor, utilize a opção PIX para doar."</p>
                        </div>
                    }
                        .into_any()
                }
                CheckoutPhase::Redirected => {
                    view! { <p class="muted">"Redirecionando..."</p> }.into_any()
                }
                _ => ().into_any(),
            }}

            <form
                class="payment-form"
                class:hidden=move || phase.with(|p| p.client_secret().is_none())
                on:submit=on_submit
            >
                <div id="payment-element"></div>
                {move || {
                    phase
                        .with(|p| match p {
                            CheckoutPhase::Failed { message, .. } => Some(message.clone()),
                            _ => None,
                        })
                        .map(|message| view! { <p class="status status-error">{message}</p> })
                }}
                <button type="submit" disabled=move || phase.with(|p| !p.can_submit())>
                    {move || {
                        if phase.with(CheckoutPhase::is_processing) {
                            "Processando...".to_string()
                        } else {
                            format!("Doar R$ {:.2}", amount.get())
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
