use leptos::prelude::*;

use super::{PageCtx, SectionHeader};
use crate::view_state::Section;

#[component]
pub fn Skills() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    view! {
        <section id=Section::Skills.anchor_id() class="bg-[#08080e] px-[6%] py-[100px]">
            <div class="mx-auto max-w-[1100px]">
                <SectionHeader tag="What I Know" title="Skills & " accent="Expertise" />
                <div class="grid grid-cols-[repeat(auto-fit,minmax(190px,1fr))] gap-[18px]">
                    {ctx
                        .content
                        .skills
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="card-hover rounded-2xl border border-white/[0.08] bg-white/[0.03] px-[22px] py-[26px]">
                                    <h3 class="mb-3.5 text-xs font-bold tracking-[2px] text-violet-400 uppercase">
                                        {group.category.clone()}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="rounded-[7px] bg-violet-400/10 px-[11px] py-[5px] text-[12.5px] font-medium text-violet-300">
                                                        {skill.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
