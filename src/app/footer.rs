use leptos::prelude::*;

use super::PageCtx;
use crate::view_state::Section;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    view! {
        <footer class="border-t border-white/[0.06] px-[5%] pt-12 pb-9 text-center">
            <div class="flex flex-wrap justify-center gap-1.5">
                {Section::ALL
                    .into_iter()
                    .map(move |section| {
                        view! {
                            <button
                                class="rounded-lg px-3.5 py-1.5 text-sm text-neutral-600 transition-colors hover:bg-violet-400/[0.07] hover:text-violet-400"
                                on:click=move |_| ctx.go_to(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="mt-5 text-neutral-500">
                "Designed & Built by "
                <span class="gradient-text">{ctx.content.owner.full_name()}</span>
            </p>
            <p class="mt-2 text-xs text-neutral-700">
                {format!("© {BUILD_YEAR} All Rights Reserved")}
            </p>
        </footer>
    }
}
