//! UI Components

use leptos::prelude::*;

use resgatados_core::{validate_form, NewsletterForm};

const NAV_ITEMS: [(&str, &str); 6] = [
    ("/", "Início"),
    ("/sobre", "Sobre Nós"),
    ("/trabalhos", "Trabalhos Realizados"),
    ("/parceiros", "Parceiros"),
    ("/contato", "Contato"),
    ("/contribuir", "Contribuir"),
];

/// Top navigation bar
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a href="/" class="brand">"Resgatados para Resgatar"</a>
            <div class="nav-links">
                {NAV_ITEMS
                    .iter()
                    .map(|&(path, label)| view! { <a href=path>{label}</a> })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Page hero with title, optional subtitle and background image
#[component]
pub fn Hero(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] image_url: Option<&'static str>,
) -> impl IntoView {
    let image = image_url
        .unwrap_or("https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=1600&q=80");

    view! {
        <header class="hero" style=format!("background-image: url({image})")>
            <h1>{title}</h1>
            {subtitle.map(|text| view! { <p class="subtitle">{text}</p> })}
        </header>
    }
}

/// Inline status line shown under forms
#[component]
pub fn FormStatus(#[prop(into)] status: Signal<Option<Result<String, String>>>) -> impl IntoView {
    move || {
        status.get().map(|result| {
            let class = if result.is_ok() {
                "status status-ok"
            } else {
                "status status-error"
            };
            let message = match result {
                Ok(message) | Err(message) => message,
            };
            view! { <p class=class>{message}</p> }
        })
    }
}

/// Site footer: contact info, quick links, newsletter signup
#[component]
pub fn Footer() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(None::<Result<String, String>>);

    // Acknowledgment only; there is no newsletter endpoint yet.
    let subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = NewsletterForm { email: email.get() };
        match validate_form(&form) {
            Ok(()) => {
                set_status.set(Some(Ok(
                    "Inscrição realizada! Você receberá nossas novidades em breve.".into(),
                )));
                set_email.set(String::new());
            }
            Err(errors) => {
                let message = errors.first_message().unwrap_or("E-mail inválido").to_string();
                set_status.set(Some(Err(message)));
            }
        }
    };

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h3>"Resgatados para Resgatar"</h3>
                    <p>"Rua Principal, 123" <br /> "Garopaba - SC, 88495-000"</p>
                    <p>"(48) 99999-9999"</p>
                    <p>"contato@resgatados.org.br"</p>
                </div>

                <div>
                    <h3>"Links Rápidos"</h3>
                    <a href="/sobre">"Sobre Nós"</a>
                    <a href="/trabalhos">"Trabalhos Realizados"</a>
                    <a href="/parceiros">"Parceiros"</a>
                    <a href="/contribuir">"Contribuir"</a>
                </div>

                <div>
                    <h3>"Newsletter"</h3>
                    <form on:submit=subscribe>
                        <input
                            type="email"
                            placeholder="Seu e-mail"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <button type="submit">"Inscrever"</button>
                    </form>
                    <FormStatus status=status />
                </div>
            </div>
            <p class="copyright">"© 2024 Associação Resgatados para Resgatar"</p>
        </footer>
    }
}
