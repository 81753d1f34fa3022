//! Home Page

use leptos::prelude::*;

use crate::components::Hero;
use crate::content;

const VALUES: [(&str, &str); 4] = [
    ("Amor", "Agimos com compaixão e empatia"),
    ("Comunidade", "Construímos pontes de solidariedade"),
    ("Cuidado", "Acolhemos com dignidade"),
    ("Transformação", "Promovemos mudanças reais"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <Hero
                title="Resgatando vidas com fé, amor e propósito"
                subtitle="Levando esperança a quem mais precisa através do amor de Cristo"
            />

            <section class="intro">
                <h2>"Quem Somos"</h2>
                <p>
                    "A Associação Resgatados para Resgatar é uma entidade cristã sem fins \
                     lucrativos dedicada a resgatar pessoas em situação de rua e encaminhá-las \
                     para centros terapêuticos, oferecendo esperança, dignidade e um novo começo."
                </p>
                <div class="cta">
                    <a href="/parceiros" class="btn">"Seja um Parceiro"</a>
                    <a href="/contribuir" class="btn btn-primary">"Contribuir Agora"</a>
                </div>
            </section>

            <section class="values">
                {VALUES
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
            </section>

            <section class="latest-projects">
                <h2>"Últimos Trabalhos"</h2>
                <p class="subtitle">"Conheça algumas das vidas que foram transformadas"</p>
                <div class="grid">
                    {content::PROJECTS
                        .iter()
                        .take(3)
                        .map(|project| {
                            view! {
                                <article class="card">
                                    <img src=project.image alt=project.title />
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <a href="/trabalhos">"Ver Detalhes"</a>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials">
                <h2>"Vidas Transformadas"</h2>
                <div class="grid">
                    {content::TESTIMONIALS
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <blockquote class="card">
                                    {testimonial
                                        .image
                                        .map(|src| view! { <img src=src alt=testimonial.name /> })}
                                    <p>{testimonial.text}</p>
                                    <cite>{testimonial.name}</cite>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
