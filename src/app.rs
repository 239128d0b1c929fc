mod contact;
mod footer;
mod hero;
mod layout;
mod nav;
mod projects;
mod resume;
mod skills;
mod timer;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::content::{content, PortfolioContent};
use crate::view_state::{Indicator, Portfolio, Section};

use contact::Contact;
use footer::Footer;
use hero::Hero;
use layout::{scroll_to, DomLayout};
use nav::NavBar;
use projects::Projects;
use resume::ResumeSection;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Sora:wght@400;500;600;700;800;900&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sora bg-[#08080e] text-[#e8e8f0]">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Shared by every component on the page.
#[derive(Clone, Copy)]
pub(crate) struct PageCtx {
    pub portfolio: RwSignal<Portfolio>,
    pub layout: DomLayout,
    pub content: &'static PortfolioContent,
    pub active: Memo<Section>,
    pub scrolled: Memo<bool>,
    pub menu_open: Memo<bool>,
    pub indicator: Memo<Indicator>,
    pub typed_text: Memo<String>,
}

impl PageCtx {
    fn new(content: &'static PortfolioContent, portfolio: Portfolio) -> Self {
        let portfolio = RwSignal::new(portfolio);
        Self {
            portfolio,
            layout: DomLayout::new(),
            content,
            active: Memo::new(move |_| portfolio.with(|p| p.state().active)),
            scrolled: Memo::new(move |_| portfolio.with(|p| p.state().scrolled)),
            menu_open: Memo::new(move |_| portfolio.with(|p| p.state().menu_open)),
            indicator: Memo::new(move |_| portfolio.with(|p| p.state().indicator)),
            typed_text: Memo::new(move |_| portfolio.with(|p| p.state().typed_text.clone())),
        }
    }

    pub fn go_to(&self, section: Section) {
        if let Some(cmd) = self.portfolio.try_update(|p| p.go_to(section)) {
            scroll_to(cmd);
        }
    }

    pub fn close_menu(&self) {
        self.portfolio.maybe_update(|p| p.close_menu());
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let loaded = content().map_err(|e| e.to_string()).and_then(|content| {
        Portfolio::new(content.phrases.clone())
            .map(|portfolio| (content, portfolio))
            .map_err(|e| e.to_string())
    });
    match loaded {
        Ok((content, portfolio)) => Either::Left(view! { <PortfolioPage content portfolio /> }),
        Err(e) => {
            log::error!("couldn't set up page: {e}");
            Either::Right(
                view! {
                    <Title text="Unavailable" />
                    <p class="p-8 text-center text-red-400">"This page couldn't be loaded: " {e}</p>
                },
            )
        }
    }
}

#[component]
fn PortfolioPage(content: &'static PortfolioContent, portfolio: Portfolio) -> impl IntoView {
    let ctx = PageCtx::new(content, portfolio);
    provide_context(ctx);

    let PageCtx {
        portfolio, layout, ..
    } = ctx;

    // one scroll-spy evaluation per animation frame, however many scroll events arrive
    let frame_pending = StoredValue::new(false);
    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
        if frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        request_animation_frame(move || {
            frame_pending.try_update_value(|pending| *pending = false);
            let scroll_y = window().scroll_y().unwrap_or_default();
            portfolio.maybe_update(|p| p.on_scroll(scroll_y, &layout));
        });
    });

    Effect::new(move |_| {
        ctx.active.track();
        ctx.scrolled.track();
        portfolio.maybe_update(|p| p.sync_indicator(&layout));
    });

    // button widths change with the viewport
    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| {
        portfolio.maybe_update(|p| p.sync_indicator(&layout));
    });

    view! {
        <Title text=content.owner.full_name() />
        <Meta name="description" content=content.owner.bio.clone() />
        <div class="min-h-screen overflow-x-hidden">
            <NavBar />
            <main>
                <Hero />
                <Skills />
                <Projects />
                <ResumeSection />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn SectionHeader(tag: &'static str, title: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="mb-[60px] text-center">
            <span class="text-[12.5px] font-semibold tracking-[3.5px] text-violet-400 uppercase">
                {tag}
            </span>
            <h2 class="mt-2.5 text-[clamp(30px,5vw,50px)] font-black tracking-[-1.5px] text-white">
                {title}
                <span class="gradient-text">{accent}</span>
            </h2>
        </div>
    }
}
