use serde_json::json;
use std::rc::Rc;
use std::time::Duration;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::PortfolioConfig;
use crate::content::{
    nav_href, Icon, Skill, BRAND, HERO_LEAD, HERO_TITLE, NAV_LABELS, PRIMARY_CTA, SECONDARY_CTA,
    SKILLS, SKILLS_BADGE, SKILLS_HEADING, SKILLS_LEAD, SOCIAL_LINKS,
};
use crate::decor::{generate_field_from_entropy, resolve_field, DecorMode, FloatingElement};
use crate::logging::{self, log_event, LogLevel};
use crate::presentation::{
    ActionSink, PresentationAction, PresentationController, PresentationState,
};
use crate::style::{
    cursor_style, floating_element_style, grid_style, nav_classes, nav_link_style, orb_style,
    reveal_classes, scroll_indicator_classes, skill_card_style, social_link_style,
};
use crate::web_host::WebHost;

const MOUNT_POINT_ID: &str = "app";

impl Reducible for PresentationState {
    type Action = PresentationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

/// Mirrors page pointer/scroll into view state for as long as the caller is mounted.
#[hook]
fn use_presentation(reveal_delay: Duration) -> UseReducerHandle<PresentationState> {
    let state = use_reducer(PresentationState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(reveal_delay, move |delay| {
            let sink: ActionSink = Rc::new(move |action| dispatcher.dispatch(action));
            let controller = WebHost::new()
                .and_then(|host| PresentationController::start(host, *delay, sink));

            if let Err(error) = &controller {
                log_event(
                    LogLevel::Warn,
                    "presentation_mount_failed",
                    json!({ "error": error.to_string() }),
                );
            }

            move || drop(controller)
        });
    }

    state
}

fn draw_decor(mode: DecorMode) -> Vec<FloatingElement> {
    let field = generate_field_from_entropy();
    log_event(
        LogLevel::Debug,
        "decor_generated",
        json!({ "mode": mode.as_str(), "elements": &field }),
    );
    field
}

#[hook]
fn use_decor_field(mode: DecorMode) -> Rc<Vec<FloatingElement>> {
    let cached = use_memo((), move |_| mode.is_memoized().then(|| Rc::new(draw_decor(mode))));

    resolve_field(mode, (*cached).clone(), || draw_decor(mode))
}

#[derive(Properties, PartialEq)]
struct StateProps {
    state: PresentationState,
}

#[function_component(CursorFollower)]
fn cursor_follower(props: &StateProps) -> Html {
    html! {
        <div
            class="fixed w-6 h-6 pointer-events-none z-50 mix-blend-difference transition-all duration-300 ease-out"
            style={cursor_style(&props.state)}
        >
            <div class="w-full h-full rounded-full bg-white animate-pulse" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BackdropProps {
    state: PresentationState,
    field: Rc<Vec<FloatingElement>>,
}

#[function_component(Backdrop)]
fn backdrop(props: &BackdropProps) -> Html {
    html! {
        <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
            <div class="orb absolute w-[800px] h-[800px] rounded-full opacity-30 blur-3xl transition-all duration-1000 ease-out" style={orb_style(&props.state)} />
            { for props.field.iter().map(|element| html! {
                <div
                    key={element.id}
                    class="absolute rounded-full bg-gradient-to-r from-purple-400/10 to-pink-400/10 blur-xl animate-float"
                    style={floating_element_style(element)}
                />
            }) }
            <div class="grid-overlay absolute inset-0 opacity-10 transition-opacity duration-1000" style={grid_style(&props.state)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    state: PresentationState,
    opaque_threshold: f64,
}

fn render_icon(icon: Icon, class: &'static str) -> Html {
    html! {
        <span class={format!("inline-flex items-center justify-center {class}")} aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let [entrance, backdrop] = nav_classes(&props.state, props.opaque_threshold);

    html! {
        <nav class={format!("fixed top-0 left-0 right-0 z-40 transition-all duration-700 {entrance} {backdrop}")}>
            <div class="max-w-7xl mx-auto px-6 py-6">
                <div class="flex justify-between items-center">
                    <div class="relative group">
                        <div class="text-3xl font-bold bg-gradient-to-r from-purple-400 via-pink-400 to-cyan-400 bg-clip-text text-transparent transition-all duration-300 group-hover:scale-105">
                            {BRAND}
                        </div>
                        <div class="absolute -inset-2 bg-gradient-to-r from-purple-600/20 to-pink-600/20 rounded-lg blur opacity-0 group-hover:opacity-100 transition-all duration-300" />
                    </div>
                    <div class="hidden md:flex space-x-8">
                        { for NAV_LABELS.iter().enumerate().map(|(index, label)| html! {
                            <a
                                key={*label}
                                href={nav_href(label)}
                                class="relative text-gray-300 hover:text-white transition-all duration-500 hover:scale-110 group px-4 py-2"
                                style={nav_link_style(&props.state, index)}
                            >
                                <span class="relative z-10">{*label}</span>
                                <div class="absolute inset-0 bg-gradient-to-r from-purple-600/20 to-pink-600/20 rounded-lg scale-0 group-hover:scale-100 transition-transform duration-300" />
                                <div class="absolute bottom-0 left-1/2 w-0 h-0.5 bg-gradient-to-r from-purple-400 to-pink-400 group-hover:w-full group-hover:left-0 transition-all duration-500" />
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero(props: &StateProps) -> Html {
    let reveal = reveal_classes(&props.state);
    let (lead_before, lead_highlight, lead_after) = HERO_LEAD;

    html! {
        <section id="home" class="relative min-h-screen flex items-center justify-center px-6 pt-20">
            <div class="max-w-6xl mx-auto text-center relative z-10">
                <div class="mb-8">
                    <div class={format!("transition-all duration-1200 delay-500 {reveal}")}>
                        <h1 class="text-6xl md:text-8xl lg:text-9xl font-black mb-4 leading-none relative">
                            <span class="inline-block animate-gradient-x bg-gradient-to-r from-purple-400 via-pink-400 via-cyan-400 to-purple-400 bg-clip-text text-transparent bg-300% font-extrabold">
                                {HERO_TITLE.0}
                            </span>
                            <div class="absolute -inset-4 bg-gradient-to-r from-purple-600/20 to-pink-600/20 blur-2xl opacity-50 animate-pulse" />
                        </h1>
                    </div>
                    <div class={format!("transition-all duration-1200 delay-700 {reveal}")}>
                        <h1 class="text-6xl md:text-8xl lg:text-9xl font-black text-white leading-none relative group">
                            <span class="inline-block transition-all duration-500 group-hover:scale-105">
                                {HERO_TITLE.1}
                            </span>
                            <div class="absolute inset-0 bg-gradient-to-r from-white/10 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 blur-xl" />
                        </h1>
                    </div>
                </div>

                <div class={format!("transition-all duration-1200 delay-900 {reveal}")}>
                    <p class="text-xl md:text-3xl text-gray-300 mb-12 max-w-4xl mx-auto leading-relaxed font-light">
                        {lead_before}
                        <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent font-semibold">
                            {lead_highlight}
                        </span>
                        {lead_after}
                    </p>
                </div>

                <div class={format!("transition-all duration-1200 delay-1100 {reveal}")}>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center mb-16">
                        <button type="button" class="cta-primary group relative px-10 py-5 rounded-2xl text-white font-bold text-lg transition-all duration-500 hover:scale-110 hover:shadow-2xl hover:shadow-purple-500/50 overflow-hidden bg-300% animate-gradient-x">
                            <span class="relative z-10 flex items-center justify-center gap-3">
                                {render_icon(Icon::Sparkles, "w-6 h-6 animate-spin")}
                                {PRIMARY_CTA}
                                {render_icon(Icon::ArrowRight, "w-6 h-6 group-hover:translate-x-2 transition-transform duration-300")}
                            </span>
                            <div class="cta-primary-hover absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 bg-300% animate-gradient-x" />
                            <div class="absolute inset-0 bg-white/20 scale-0 group-hover:scale-100 transition-transform duration-500 rounded-2xl" />
                        </button>
                        <button type="button" class="group relative px-10 py-5 border-2 border-white/30 rounded-2xl text-white font-bold text-lg transition-all duration-500 hover:scale-110 hover:bg-white/10 hover:border-white/60 backdrop-blur-xl overflow-hidden">
                            <span class="relative z-10 flex items-center justify-center gap-3">
                                {render_icon(Icon::Mail, "w-6 h-6 group-hover:rotate-12 transition-transform duration-300")}
                                {SECONDARY_CTA}
                            </span>
                            <div class="absolute inset-0 bg-gradient-to-r from-purple-600/20 to-pink-600/20 scale-0 group-hover:scale-100 transition-transform duration-500 rounded-2xl" />
                        </button>
                    </div>

                    <div class="flex justify-center space-x-8">
                        { for SOCIAL_LINKS.iter().enumerate().map(|(index, social)| html! {
                            <a
                                key={social.label}
                                href={social.href}
                                aria-label={social.label}
                                class={format!("group relative p-4 rounded-2xl bg-white/5 backdrop-blur-xl border border-white/20 text-gray-300 {} hover:scale-125 transition-all duration-500 hover:shadow-2xl hover:shadow-purple-500/25", social.hover_class)}
                                style={social_link_style(&props.state, index)}
                            >
                                {render_icon(social.icon, "w-7 h-7 group-hover:rotate-12 transition-transform duration-300")}
                                <div class="absolute inset-0 bg-gradient-to-r from-purple-600/20 to-pink-600/20 rounded-2xl scale-0 group-hover:scale-100 transition-transform duration-300" />
                                <div class="absolute -inset-2 bg-gradient-to-r from-purple-600/30 to-pink-600/30 rounded-2xl blur opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                            </a>
                        }) }
                    </div>
                </div>
            </div>

            <div class={format!("absolute bottom-8 left-1/2 -translate-x-1/2 transition-all duration-1200 delay-1500 {}", scroll_indicator_classes(&props.state))}>
                <div class="flex flex-col items-center space-y-2 animate-bounce">
                    {render_icon(Icon::MousePointer, "w-6 h-6 text-gray-400")}
                    {render_icon(Icon::ChevronDown, "w-8 h-8 text-gray-400")}
                    <div class="w-px h-16 bg-gradient-to-b from-gray-400 to-transparent" />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    state: PresentationState,
    skill: Skill,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let skill = props.skill;

    html! {
        <div
            class="group relative p-8 rounded-3xl bg-white/5 backdrop-blur-2xl border border-white/10 hover:bg-white/10 transition-all duration-700 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/20 overflow-hidden"
            style={skill_card_style(&props.state, skill.delay_ms)}
        >
            <div class={format!("absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-opacity duration-700 rounded-3xl", skill.gradient)} />
            <div class="relative mb-8">
                <div class={format!("w-20 h-20 rounded-2xl bg-gradient-to-r {} flex items-center justify-center text-white text-2xl font-bold group-hover:scale-110 group-hover:rotate-6 transition-all duration-500 shadow-2xl", skill.gradient)}>
                    {render_icon(skill.icon, "w-10 h-10")}
                </div>
                <div class={format!("absolute inset-0 w-20 h-20 rounded-2xl bg-gradient-to-r {} blur-xl opacity-50 group-hover:opacity-100 transition-opacity duration-500", skill.gradient)} />
            </div>
            <h3 class="text-2xl font-bold text-white mb-4 group-hover:text-transparent group-hover:bg-gradient-to-r group-hover:from-purple-400 group-hover:to-pink-400 group-hover:bg-clip-text transition-all duration-500">
                {skill.title}
            </h3>
            <p class="text-gray-300 leading-relaxed text-lg group-hover:text-gray-200 transition-colors duration-300">
                {skill.description}
            </p>
            <div class="absolute top-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity duration-500">
                <div class="w-2 h-2 rounded-full bg-gradient-to-r from-purple-400 to-pink-400 animate-pulse" />
            </div>
        </div>
    }
}

#[function_component(SkillsSection)]
fn skills_section(props: &StateProps) -> Html {
    html! {
        <section id="about" class="py-32 px-6 relative" aria-labelledby="skills-heading">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <div class="inline-flex items-center gap-2 px-6 py-3 rounded-full bg-white/5 backdrop-blur-xl border border-white/10 mb-8">
                        {render_icon(Icon::Star, "w-5 h-5 text-yellow-400")}
                        <span class="text-gray-300 font-medium">{SKILLS_BADGE}</span>
                    </div>
                    <h2 id="skills-heading" class="text-5xl md:text-7xl font-black text-white mb-6 leading-tight">
                        <span class="bg-gradient-to-r from-white via-purple-200 to-white bg-clip-text text-transparent">
                            {SKILLS_HEADING.0}
                        </span>
                        <br />
                        <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                            {SKILLS_HEADING.1}
                        </span>
                    </h2>
                    <p class="text-2xl text-gray-300 max-w-3xl mx-auto leading-relaxed font-light">{SKILLS_LEAD}</p>
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    { for SKILLS.iter().map(|skill| html! {
                        <SkillCard key={skill.title} state={props.state} skill={*skill} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: PortfolioConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config;
    let presentation = use_presentation(config.reveal_delay);
    let field = use_decor_field(config.decor_mode);
    let state = *presentation;

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-950 via-purple-950 to-slate-950 overflow-hidden relative">
            <CursorFollower state={state} />
            <Backdrop state={state} field={field} />
            <NavBar state={state} opaque_threshold={config.nav_opaque_threshold} />
            <main>
                <Hero state={state} />
                <SkillsSection state={state} />
            </main>
        </div>
    }
}

fn mount_point() -> Option<Element> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
}

pub fn run() {
    let root = mount_point().expect("missing #app mount point");
    let config = PortfolioConfig::from_lookup(|name| root.get_attribute(name));

    logging::init(config.log_level);
    log_event(
        LogLevel::Info,
        "app_start",
        json!({
            "reveal_delay_ms": config.reveal_delay.as_millis() as u64,
            "nav_opaque_threshold_px": config.nav_opaque_threshold,
            "decor_mode": config.decor_mode.as_str(),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
