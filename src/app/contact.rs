use leptos::prelude::*;

use super::{timer::TimerSlot, PageCtx, SectionHeader};
use crate::view_state::{Field, FormStatus, Section};

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let contact = &ctx.content.contact;
    view! {
        <section id=Section::Contact.anchor_id() class="bg-[#0a0a0f] px-[6%] py-[100px]">
            <div class="mx-auto max-w-[1100px]">
                <SectionHeader tag="Get In Touch" title="Let's " accent="Connect" />
                <div class="grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] items-start gap-14">
                    <div>
                        <p class="mb-[30px] text-base leading-[1.75] text-slate-400">
                            {contact.pitch.clone()}
                        </p>
                        <div class="flex flex-col gap-[13px]">
                            <a href=contact.mailto() class="contact-link">
                                "📧 " {contact.email.clone()}
                            </a>
                            <a href=contact.tel() class="contact-link">
                                "📞 " {contact.phone.clone()}
                            </a>
                            <a
                                href=contact.linkedin.clone()
                                target="_blank"
                                rel="noreferrer"
                                class="contact-link"
                            >
                                "💼 LinkedIn Profile"
                            </a>
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let portfolio = ctx.portfolio;
    let ack_timer = TimerSlot::new();
    let (error, set_error) = signal(None::<String>);

    let value_of = move |field: Field| {
        Memo::new(move |_| portfolio.with(|p| p.contact().get(field).to_string()))
    };
    let name = value_of(Field::Name);
    let email = value_of(Field::Email);
    let message = value_of(Field::Message);
    let sent = Memo::new(move |_| portfolio.with(|p| p.contact().status() == FormStatus::Sent));

    let edit = move |field: Field| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            portfolio.update(|p| p.set_contact_field(field, value));
        }
    };

    view! {
        <form
            class="flex flex-col gap-3.5"
            on:submit=move |ev| {
                ev.prevent_default();
                match portfolio.try_update(|p| p.submit_contact()) {
                    Some(Ok(ack)) => {
                        set_error.set(None);
                        ack_timer.schedule(ack, move || {
                            portfolio.maybe_update(|p| p.expire_contact_ack());
                        });
                    }
                    Some(Err(e)) => set_error.set(Some(e.to_string())),
                    None => {}
                }
            }
        >
            <Show when=move || sent.get()>
                <div class="rounded-[10px] border border-[#06d6a0]/30 bg-[#06d6a0]/[0.08] px-4 py-[13px] text-sm font-medium text-[#06d6a0]">
                    "✅ Message sent! I'll get back to you soon."
                </div>
            </Show>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="rounded-[10px] border border-red-400/30 bg-red-400/[0.08] px-4 py-[13px] text-sm font-medium text-red-400">
                                {e}
                            </div>
                        }
                    })
            }}
            <input
                class="form-input"
                placeholder="Your Name"
                required
                prop:value=move || name.get()
                on:input=edit(Field::Name)
            />
            <input
                class="form-input"
                type="email"
                placeholder="Your Email"
                required
                prop:value=move || email.get()
                on:input=edit(Field::Email)
            />
            <textarea
                class="form-input min-h-[120px] resize-y"
                placeholder="Your Message"
                required
                prop:value=move || message.get()
                on:input=edit(Field::Message)
            ></textarea>
            <button type="submit" class="btn-primary">
                "Send Message →"
            </button>
        </form>
    }
}
