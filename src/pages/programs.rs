//! Broadcast program grid with schedules.

use leptos::prelude::*;

use crate::net::cdn;
use crate::state::locale::Lang;

const PROGRAM_IMAGE_WIDTH: u32 = 480;

/// Programs page.
#[component]
pub fn ProgramsPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let programs = LocalResource::new(|| crate::net::api::fetch_published_programs());

    view! {
        <div class="list-page">
            <h1>{move || lang.get().pick("البرامج", "Programmes")}</h1>
            <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                {move || {
                    programs
                        .get()
                        .map(|list| {
                            view! {
                                <div class="list-page__grid">
                                    {list
                                        .into_iter()
                                        .map(|program| {
                                            let name = Signal::derive({
                                                let ar = program.name_ar.clone();
                                                let fr = program.name_fr.clone();
                                                move || lang.get().pick(&ar, &fr).to_owned()
                                            });
                                            let description = Signal::derive({
                                                let ar = program.description_ar.clone();
                                                let fr = program.description_fr.clone();
                                                move || lang.get().pick(&ar, &fr).to_owned()
                                            });
                                            view! {
                                                <section class="program-card">
                                                    {program
                                                        .cover_path
                                                        .map(|path| {
                                                            view! {
                                                                <img
                                                                    class="program-card__cover"
                                                                    src=cdn::image_url_sized(&path, PROGRAM_IMAGE_WIDTH)
                                                                    loading="lazy"
                                                                />
                                                            }
                                                        })}
                                                    <h2>{name}</h2>
                                                    <p class="program-card__schedule">{program.schedule}</p>
                                                    <p>{description}</p>
                                                </section>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
