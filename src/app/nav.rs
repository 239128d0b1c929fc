use leptos::{ev::MouseEvent, html, prelude::*};
use wasm_bindgen::JsCast;

use super::PageCtx;
use crate::view_state::Section;

/// Fixed top bar plus the mobile drawer and its backdrop.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let panel = NodeRef::<html::Div>::new();
    let burger = NodeRef::<html::Button>::new();

    // listen for outside clicks only while the drawer is open
    let listener = StoredValue::new(None::<WindowListenerHandle>);
    let detach = move || {
        if let Some(Some(handle)) = listener.try_update_value(Option::take) {
            handle.remove();
        }
    };
    Effect::new(move |_| {
        detach();
        if !ctx.menu_open.get() {
            return;
        }
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            // the burger toggles on click; closing here too would reopen it
            let inside = panel
                .get_untracked()
                .is_some_and(|el| contains_target(&el, &ev))
                || burger
                    .get_untracked()
                    .is_some_and(|el| contains_target(&el, &ev));
            ctx.portfolio.maybe_update(|p| p.pointer_down(inside));
        });
        listener.update_value(|pending| *pending = Some(handle));
    });
    on_cleanup(detach);

    let nav_class = move || {
        if ctx.scrolled.get() {
            "fixed inset-x-0 top-0 z-[200] flex items-center justify-between px-[5%] py-3 transition-all duration-300 bg-[#08080e]/90 backdrop-blur-xl border-b border-white/[0.07] shadow-[0_4px_40px_rgba(0,0,0,0.5)]"
        } else {
            "fixed inset-x-0 top-0 z-[200] flex items-center justify-between px-[5%] py-[18px] transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class=nav_class>
            <button
                class="text-[26px] font-black tracking-tight text-white"
                on:click=move |_| ctx.go_to(Section::About)
            >
                {ctx.content.owner.initials.clone()}
                <span class="text-violet-400">"."</span>
            </button>
            <PillNav />
            <div class="flex items-center gap-3">
                <a
                    href=ctx.content.contact.mailto()
                    class="nav-desktop rounded-full bg-gradient-to-br from-violet-600 to-blue-600 px-[22px] py-[9px] text-[13px] font-bold whitespace-nowrap text-white transition-transform hover:-translate-y-0.5"
                >
                    "Hire Me ✦"
                </a>
                <BurgerButton burger />
            </div>
        </nav>
        <MobileDrawer panel />
        <Show when=move || ctx.menu_open.get()>
            <div
                class="fixed inset-0 z-[180] bg-black/65 backdrop-blur-sm"
                on:click=move |_| ctx.close_menu()
            />
        </Show>
    }
}

fn contains_target(el: &web_sys::Node, ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| el.contains(Some(&node)))
}

#[component]
fn PillNav() -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let indicator = ctx.indicator;
    view! {
        <div class="nav-desktop flex-1 justify-center">
            <div class="relative flex items-center gap-0.5 rounded-full border border-white/[0.09] bg-white/5 p-[5px]">
                <span
                    class="absolute top-[5px] h-[calc(100%-10px)] rounded-full bg-gradient-to-br from-violet-600/75 to-blue-600/75 transition-[left,width] duration-300 ease-[cubic-bezier(.4,0,.2,1)]"
                    style:left=move || format!("{}px", indicator.get().offset)
                    style:width=move || format!("{}px", indicator.get().width)
                />
                {Section::ALL
                    .into_iter()
                    .map(move |section| {
                        let class = move || {
                            if ctx.active.get() == section {
                                "relative z-10 rounded-full px-[18px] py-2 text-sm font-semibold text-white transition-colors"
                            } else {
                                "relative z-10 rounded-full px-[18px] py-2 text-sm font-semibold text-[#777] transition-colors hover:text-neutral-300"
                            }
                        };
                        view! {
                            <button
                                node_ref=ctx.layout.nav_button(section)
                                class=class
                                on:click=move |_| ctx.go_to(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BurgerButton(burger: NodeRef<html::Button>) -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let open = ctx.menu_open;
    let bar = move |open_class: &'static str| {
        move || {
            if open.get() {
                format!("block h-0.5 w-5 origin-center rounded bg-neutral-300 transition duration-300 {open_class}")
            } else {
                "block h-0.5 w-5 origin-center rounded bg-neutral-300 transition duration-300".to_string()
            }
        }
    };
    view! {
        <button
            node_ref=burger
            class="nav-mobile h-[42px] w-[42px] flex-col items-center justify-center gap-[5px] rounded-[10px] border border-white/10 bg-white/5"
            aria-label="Menu"
            aria-expanded=move || open.get().to_string()
            on:click=move |_| {
                ctx.portfolio.maybe_update(|p| p.toggle_menu());
            }
        >
            <span class=bar("translate-y-[7px] rotate-45") />
            <span class=bar("opacity-0 scale-x-0") />
            <span class=bar("-translate-y-[7px] -rotate-45") />
        </button>
    }
}

#[component]
fn MobileDrawer(panel: NodeRef<html::Div>) -> impl IntoView {
    let ctx = expect_context::<PageCtx>();
    let open = ctx.menu_open;
    let contact = &ctx.content.contact;
    view! {
        <div
            node_ref=panel
            class=move || {
                if open.get() {
                    "fixed inset-y-0 right-0 z-[190] flex w-[min(320px,88vw)] flex-col border-l border-white/[0.07] bg-gradient-to-b from-[#0e0e1c] to-[#08080e] transition-transform duration-300 translate-x-0"
                } else {
                    "fixed inset-y-0 right-0 z-[190] flex w-[min(320px,88vw)] flex-col border-l border-white/[0.07] bg-gradient-to-b from-[#0e0e1c] to-[#08080e] transition-transform duration-300 translate-x-[110%]"
                }
            }
        >
            <div class="flex items-center justify-between border-b border-white/[0.06] px-7 py-5">
                <span class="text-2xl font-black text-white">
                    {ctx.content.owner.initials.clone()}
                    <span class="text-violet-400">"."</span>
                </span>
                <button
                    class="h-9 w-9 rounded-lg border border-white/10 bg-white/[0.07] text-sm text-neutral-400"
                    aria-label="Close menu"
                    on:click=move |_| ctx.close_menu()
                >
                    "✕"
                </button>
            </div>
            <div class="flex flex-1 flex-col gap-1 px-5 py-7">
                {Section::ALL
                    .into_iter()
                    .enumerate()
                    .map(move |(i, section)| {
                        let is_active = move || ctx.active.get() == section;
                        let class = move || {
                            let tone = if is_active() {
                                "text-white bg-violet-400/10"
                            } else {
                                "text-[#777]"
                            };
                            let slide = if open.get() {
                                "opacity-100 translate-x-0"
                            } else {
                                "opacity-0 translate-x-5"
                            };
                            format!(
                                "relative flex items-center gap-3.5 rounded-xl px-4 py-3.5 text-left text-[17px] font-semibold transition-all duration-300 {tone} {slide}"
                            )
                        };
                        view! {
                            <button
                                class=class
                                style:transition-delay=move || {
                                    if open.get() { format!("{}ms", i * 55) } else { "0ms".to_string() }
                                }
                                on:click=move |_| ctx.go_to(section)
                            >
                                <span class="min-w-5 text-[11px] font-bold tracking-wider text-violet-400">
                                    {format!("{:02}", i + 1)}
                                </span>
                                <span>{section.label()}</span>
                                <Show when=is_active>
                                    <span class="absolute right-4 h-[7px] w-[7px] rounded-full bg-gradient-to-br from-violet-400 to-blue-400" />
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-col gap-2 border-t border-white/[0.06] px-7 pt-5 pb-8">
                <p class="text-[13px] text-neutral-600">"📧 " {contact.email.clone()}</p>
                <p class="text-[13px] text-neutral-600">"📞 " {contact.phone.clone()}</p>
                <a
                    href=contact.mailto()
                    class="mt-3 block rounded-xl bg-gradient-to-br from-violet-600 to-blue-600 p-3 text-center text-sm font-bold text-white"
                >
                    "Hire Me ✦"
                </a>
            </div>
        </div>
    }
}
