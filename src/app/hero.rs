use std::time::Duration;

use leptos::prelude::*;

use super::{timer::TimerSlot, PageCtx};
use crate::view_state::{Portfolio, Section};

/// Arrange the next typewriter step. Each step schedules the one after it,
/// with whatever delay the phase it lands in calls for.
fn schedule_typewriter(portfolio: RwSignal<Portfolio>, timer: TimerSlot, delay: Duration) {
    timer.schedule(delay, move || {
        let Some(next) = portfolio.try_update(|p| p.tick_typewriter()) else {
            return;
        };
        schedule_typewriter(portfolio, timer, next);
    });
}

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let owner = &ctx.content.owner;
    let contact = &ctx.content.contact;
    let typed_text = ctx.typed_text;

    let timer = TimerSlot::new();
    Effect::new(move |_| {
        let delay = ctx.portfolio.with_untracked(|p| p.typewriter_delay());
        schedule_typewriter(ctx.portfolio, timer, delay);
    });

    view! {
        <section
            id=Section::About.anchor_id()
            class="relative flex min-h-screen flex-wrap items-center justify-between gap-10 px-[6%] pt-[120px] pb-20"
        >
            <div class="pointer-events-none absolute inset-0 overflow-hidden">
                <div class="hero-grid absolute inset-0" />
                <div class="absolute top-[10%] right-[8%] h-[500px] w-[500px] rounded-full bg-[radial-gradient(circle,rgba(167,139,250,0.12)_0%,transparent_70%)] blur-[40px]" />
                <div class="absolute bottom-[10%] left-[5%] h-[400px] w-[400px] rounded-full bg-[radial-gradient(circle,rgba(96,165,250,0.09)_0%,transparent_70%)] blur-[40px]" />
            </div>
            <div class="fade-in relative z-[2] max-w-[640px] flex-[1_1_380px]">
                <p class="mb-3 text-sm font-semibold tracking-[3.5px] text-violet-400 uppercase">
                    {owner.greeting.clone()}
                </p>
                <h1 class="mb-1 text-[clamp(40px,7vw,78px)] leading-[1.05] font-black tracking-[-2px] text-white">
                    {owner.first_name.clone()}
                    <br />
                    <span class="gradient-text">{owner.last_name.clone()}</span>
                </h1>
                <div class="mb-6 flex h-9 items-center gap-0.5">
                    <span class="text-[21px] font-semibold text-slate-400">
                        {move || typed_text.get()}
                    </span>
                    <span class="animate-blink text-[22px] text-violet-400">"|"</span>
                </div>
                <p class="mb-9 max-w-[520px] text-[16.5px] leading-[1.75] text-slate-400">
                    {owner.bio.clone()}
                </p>
                <div class="mb-8 flex flex-wrap gap-3.5">
                    <button class="btn-primary" on:click=move |_| ctx.go_to(Section::Projects)>
                        "View Projects"
                    </button>
                    <button class="btn-outline" on:click=move |_| ctx.go_to(Section::Contact)>
                        "Contact Me"
                    </button>
                </div>
                <div class="flex flex-wrap gap-2.5">
                    <a href=contact.mailto() class="chip">
                        "📧 Email"
                    </a>
                    <a href=contact.linkedin.clone() target="_blank" rel="noreferrer" class="chip">
                        "💼 LinkedIn"
                    </a>
                    <span class="chip">"📍 " {owner.location.clone()}</span>
                </div>
            </div>
            <div class="relative flex min-h-[270px] flex-[1_1_240px] items-center justify-center">
                <div class="flex h-[200px] w-[200px] items-center justify-center rounded-full bg-gradient-to-br from-violet-600 to-blue-600 text-[62px] font-black text-white shadow-[0_0_80px_rgba(124,58,237,0.4)]">
                    {owner.initials.clone()}
                </div>
                <div class="animate-spin-slow absolute h-[260px] w-[260px] rounded-full border-[1.5px] border-violet-400/25" />
                <div class="animate-spin-slower absolute h-[320px] w-[320px] rounded-full border border-dashed border-blue-400/20" />
            </div>
        </section>
    }
}
