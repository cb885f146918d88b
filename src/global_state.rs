use crate::infrastructure::rendering::Legend;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub legend: RwSignal<Option<Legend>>,
    pub is_dragging: RwSignal<bool>,
    pub intel_text: RwSignal<Option<String>>,
    pub is_analyzing: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        legend: create_rw_signal(None),
        is_dragging: create_rw_signal(false),
        intel_text: create_rw_signal(None),
        is_analyzing: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub chart_legend => legend: Option<Legend>,
    pub chart_dragging => is_dragging: bool,
    pub intel_text => intel_text: Option<String>,
    pub is_analyzing => is_analyzing: bool,
}
