use leptos::prelude::*;

use super::{PageCtx, SectionHeader};
use crate::view_state::Section;

#[component]
pub fn ResumeSection() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    view! {
        <section id=Section::Resume.anchor_id() class="bg-[#08080e] px-[6%] py-[100px]">
            <div class="mx-auto max-w-[1100px]">
                <SectionHeader tag="Background" title="My " accent="Resume" />
                <div class="grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-12">
                    <Education />
                    <div>
                        <Certifications />
                        <ContactInfo />
                    </div>
                </div>
                <div class="mt-12 text-center">
                    <button class="btn-primary" on:click=move |_| ctx.go_to(Section::Contact)>
                        "Get In Touch →"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    view! {
        <div>
            <h3 class="mb-[22px] text-[17px] font-extrabold tracking-[-0.3px] text-white">
                "🎓 Education"
            </h3>
            {ctx
                .content
                .education
                .iter()
                .map(|entry| {
                    view! {
                        <div class="mb-[26px] flex gap-3.5">
                            <div class="mt-1 h-3 w-3 shrink-0 rounded-full bg-gradient-to-br from-violet-400 to-blue-400" />
                            <div>
                                <p class="mb-1 text-[14.5px] font-bold text-white">
                                    {entry.degree.clone()}
                                </p>
                                <p class="mb-[7px] text-[13px] text-slate-400">
                                    {entry.institution.clone()}
                                </p>
                                <span class="rounded-md bg-violet-400/15 px-2.5 py-[3px] text-[11.5px] font-semibold text-violet-300">
                                    {entry.score.clone()}
                                </span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    view! {
        <h3 class="mb-[22px] text-[17px] font-extrabold tracking-[-0.3px] text-white">
            "🏆 Certifications"
        </h3>
        {ctx
            .content
            .certifications
            .iter()
            .map(|cert| {
                view! {
                    <div class="mb-4 rounded-[13px] border border-white/[0.08] bg-white/[0.03] p-[22px]">
                        <p class="mb-[5px] text-[14.5px] font-bold text-white">{cert.title.clone()}</p>
                        <p class="mb-1 text-[12.5px] font-semibold text-violet-400">
                            {cert.issuer.clone()}
                        </p>
                        <p class="mb-[9px] font-mono text-[11.5px] text-neutral-600">
                            "Certificate ID: " {cert.credential_id.clone()}
                        </p>
                        <p class="text-[13px] leading-[1.6] text-slate-400">
                            {cert.description.clone()}
                        </p>
                    </div>
                }
            })
            .collect_view()}
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let contact = &ctx.content.contact;
    view! {
        <h3 class="mt-8 mb-[22px] text-[17px] font-extrabold tracking-[-0.3px] text-white">
            "📬 Contact"
        </h3>
        <div class="flex flex-col gap-[9px] text-[14.5px] text-slate-400">
            <p>"📞 " {contact.phone.clone()}</p>
            <p>"✉️ " {contact.email.clone()}</p>
            <p>"📍 " {ctx.content.owner.location.clone()}</p>
        </div>
    }
}
