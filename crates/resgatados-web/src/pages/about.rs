//! About Page

use leptos::prelude::*;

use crate::components::Hero;
use crate::content;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about">
            <Hero
                title="Sobre Nós"
                subtitle="Conheça nossa história, missão e valores"
                image_url="https://images.unsplash.com/photo-1529070538774-1843cb3265df?w=1600&q=80"
            />

            <section class="history">
                <h2>"Nossa História"</h2>
                <p>
                    "Fundada em 2020 em Garopaba-SC, a Associação Resgatados para Resgatar \
                     nasceu do desejo de levar esperança e transformação para pessoas em situação \
                     de vulnerabilidade. Nossa jornada começou com um grupo de voluntários \
                     comprometidos em fazer a diferença na vida de quem mais precisa."
                </p>
                <p>
                    "Ao longo dos anos, já resgatamos e encaminhamos centenas de pessoas para \
                     centros terapêuticos, oferecendo não apenas abrigo, mas um caminho completo \
                     de restauração física, emocional e espiritual."
                </p>
            </section>

            <section class="mission">
                <div class="card">
                    <h3>"Missão"</h3>
                    <p>
                        "Resgatar pessoas em situação de rua e vulnerabilidade, oferecendo \
                         acolhimento, amor e encaminhamento para centros terapêuticos, promovendo \
                         restauração integral."
                    </p>
                </div>
                <div class="card">
                    <h3>"Visão"</h3>
                    <p>
                        "Ser referência em resgate e restauração de vidas, expandindo nossa \
                         atuação para alcançar cada vez mais pessoas que necessitam de esperança \
                         e recomeço."
                    </p>
                </div>
                <div class="card">
                    <h3>"Valores"</h3>
                    <ul>
                        <li>"Amor incondicional"</li>
                        <li>"Fé em Cristo"</li>
                        <li>"Dignidade humana"</li>
                        <li>"Transparência"</li>
                        <li>"Compromisso social"</li>
                    </ul>
                </div>
            </section>

            <section class="team">
                <h2>"Nossa Equipe"</h2>
                <p class="subtitle">"Pessoas comprometidas com a transformação de vidas"</p>
                <div class="grid">
                    {content::TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="card">
                                    <img src=member.image alt=member.name />
                                    <h3>{member.name}</h3>
                                    <p>{member.role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
