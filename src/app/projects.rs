use leptos::prelude::*;

use super::{PageCtx, SectionHeader};
use crate::content::Project;
use crate::view_state::Section;

#[component]
pub fn Projects() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    view! {
        <section id=Section::Projects.anchor_id() class="bg-[#0a0a0f] px-[6%] py-[100px]">
            <div class="mx-auto max-w-[1100px]">
                <SectionHeader tag="What I've Built" title="Featured " accent="Projects" />
                <div class="grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-[26px]">
                    {ctx
                        .content
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    // accent color with a two-digit alpha suffix
    let tint = |alpha: &str| format!("{}{alpha}", project.color);
    view! {
        <div class="proj-hover relative overflow-hidden rounded-[20px] border border-white/[0.07] bg-white/[0.03] p-[30px]">
            <div
                class="mb-[18px] flex h-[50px] w-[50px] items-center justify-center rounded-[13px] text-[22px]"
                style:background=tint("22")
                style:color=project.color.clone()
            >
                {project.icon.clone()}
            </div>
            <h3 class="mb-2.5 text-[19px] font-extrabold tracking-[-0.5px] text-white">
                {project.title.clone()}
            </h3>
            <p class="mb-[18px] text-sm leading-[1.65] text-slate-400">
                {project.description.clone()}
            </p>
            <div class="flex flex-wrap gap-[7px]">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span
                                class="rounded-md border px-[9px] py-1 text-[11.5px] font-semibold"
                                style:border-color=tint("88")
                                style:color=project.color.clone()
                            >
                                {tech.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="absolute inset-x-0 bottom-0 h-[3px] rounded-b-[20px]"
                style:background=project.color.clone()
            />
        </div>
    }
}
