//! Projects Page

use leptos::prelude::*;

use resgatados_core::{filter_by_category, ProjectCategory};

use crate::components::Hero;
use crate::content;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<ProjectCategory>);
    let (expanded, set_expanded) = signal(None::<&'static str>);

    view! {
        <div class="page projects">
            <Hero
                title="Trabalhos Realizados"
                subtitle="Acompanhe nossas ações de resgate e transformação"
                image_url="https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=1600&q=80"
            />

            <section>
                <div class="filters">
                    <button
                        class:active=move || selected.get().is_none()
                        on:click=move |_| set_selected.set(None)
                    >
                        "Todos"
                    </button>
                    {ProjectCategory::ALL
                        .iter()
                        .map(|&category| {
                            view! {
                                <button
                                    class:active=move || selected.get() == Some(category)
                                    on:click=move |_| set_selected.set(Some(category))
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid">
                    {move || {
                        filter_by_category(&content::PROJECTS, selected.get())
                            .into_iter()
                            .map(|project| {
                                let id = project.id;
                                view! {
                                    <article class="card">
                                        <img src=project.image alt=project.title />
                                        <span class="badge">{project.category.label()}</span>
                                        <h3>{project.title}</h3>
                                        <p>{project.description}</p>
                                        <span class="date">{project.date}</span>
                                        <button
                                            class="link"
                                            on:click=move |_| {
                                                set_expanded
                                                    .update(|current| {
                                                        *current = if *current == Some(id) {
                                                            None
                                                        } else {
                                                            Some(id)
                                                        };
                                                    })
                                            }
                                        >
                                            {move || {
                                                if expanded.get() == Some(id) {
                                                    "Fechar"
                                                } else {
                                                    "Ver Detalhes"
                                                }
                                            }}
                                        </button>
                                        <Show when=move || expanded.get() == Some(id)>
                                            <p class="full-description">{project.full_description}</p>
                                        </Show>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
