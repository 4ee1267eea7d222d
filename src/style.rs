//! Pure projection from presentation state to inline styles and class lists.

use crate::decor::FloatingElement;
use crate::presentation::PresentationState;

const CURSOR_HALF_SIZE: f64 = 12.0;
const ORB_PARALLAX_DIVISOR: f64 = 8.0;
const ORB_HALF_SIZE: f64 = 400.0;
const GRID_PARALLAX_FACTOR: f64 = 0.5;
const NAV_LINK_DELAY_BASE_MS: u32 = 300;
const NAV_LINK_DELAY_STEP_MS: u32 = 100;
const SOCIAL_LINK_DELAY_BASE_MS: u32 = 1_300;
const SOCIAL_LINK_DELAY_STEP_MS: u32 = 150;

pub fn cursor_style(state: &PresentationState) -> String {
    let scale = if state.is_visible() { 1 } else { 0 };
    format!(
        "left: {:.2}px; top: {:.2}px; transform: scale({scale});",
        state.pointer.x - CURSOR_HALF_SIZE,
        state.pointer.y - CURSOR_HALF_SIZE,
    )
}

pub fn orb_style(state: &PresentationState) -> String {
    let scale = if state.is_visible() { "1" } else { "0.5" };
    format!(
        "left: {:.2}px; top: {:.2}px; transform: scale({scale});",
        state.pointer.x / ORB_PARALLAX_DIVISOR - ORB_HALF_SIZE,
        state.pointer.y / ORB_PARALLAX_DIVISOR - ORB_HALF_SIZE,
    )
}

pub fn grid_style(state: &PresentationState) -> String {
    format!(
        "transform: translateY({:.2}px);",
        state.scroll_offset * GRID_PARALLAX_FACTOR
    )
}

pub fn floating_element_style(element: &FloatingElement) -> String {
    format!(
        "width: {size:.2}px; height: {size:.2}px; left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        element.x,
        element.y,
        element.duration,
        element.delay,
        size = element.size,
    )
}

pub fn is_nav_opaque(state: &PresentationState, threshold: f64) -> bool {
    state.scroll_offset > threshold
}

pub fn nav_classes(state: &PresentationState, threshold: f64) -> [&'static str; 2] {
    let entrance = if state.is_visible() {
        "translate-y-0 opacity-100"
    } else {
        "-translate-y-full opacity-0"
    };
    let backdrop = if is_nav_opaque(state, threshold) {
        "bg-black/20 backdrop-blur-2xl border-b border-white/10"
    } else {
        "bg-transparent"
    };
    [entrance, backdrop]
}

pub fn reveal_classes(state: &PresentationState) -> &'static str {
    if state.is_visible() {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-20 opacity-0"
    }
}

pub fn scroll_indicator_classes(state: &PresentationState) -> &'static str {
    if state.is_visible() {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-10 opacity-0"
    }
}

/// `animation` stays `none` until the view is revealed so every entrance
/// starts from its first keyframe.
fn staggered_animation(state: &PresentationState, keyframes: &str, delay_ms: u32) -> String {
    let animation = if state.is_visible() {
        keyframes
    } else {
        "none"
    };
    format!("animation: {animation}; animation-delay: {delay_ms}ms;")
}

pub fn nav_link_style(state: &PresentationState, index: usize) -> String {
    let delay = NAV_LINK_DELAY_BASE_MS + NAV_LINK_DELAY_STEP_MS * index as u32;
    staggered_animation(state, "slideInDown 0.8s ease-out forwards", delay)
}

pub fn social_link_style(state: &PresentationState, index: usize) -> String {
    let delay = SOCIAL_LINK_DELAY_BASE_MS + SOCIAL_LINK_DELAY_STEP_MS * index as u32;
    staggered_animation(state, "bounceIn 0.8s ease-out forwards", delay)
}

pub fn skill_card_style(state: &PresentationState, delay_ms: u32) -> String {
    staggered_animation(state, "slideInUp 1s ease-out forwards", delay_ms)
}
