//! Style helpers shared across pages. Result panels are tinted by the
//! margin status the resolver reports.

use crate::domain::MarginStatus;

// ============================================
// MARGIN STATUS STYLES
// ============================================

pub fn status_panel(status: MarginStatus) -> &'static str {
    match status {
        MarginStatus::Negative => "rounded-xl border border-rose-500/40 bg-rose-500/10",
        MarginStatus::Low => "rounded-xl border border-amber-500/40 bg-amber-500/10",
        MarginStatus::Good => "rounded-xl border border-emerald-500/40 bg-emerald-500/10",
        MarginStatus::Excellent => "rounded-xl border border-cyan-400/40 bg-cyan-400/10",
    }
}

pub fn status_text(status: MarginStatus) -> &'static str {
    match status {
        MarginStatus::Negative => "text-rose-300",
        MarginStatus::Low => "text-amber-300",
        MarginStatus::Good => "text-emerald-300",
        MarginStatus::Excellent => "text-cyan-300",
    }
}

pub fn status_badge(status: MarginStatus) -> &'static str {
    match status {
        MarginStatus::Negative => "bg-rose-500/10 text-rose-300 border-rose-500/40",
        MarginStatus::Low => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        MarginStatus::Good => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        MarginStatus::Excellent => "bg-cyan-400/10 text-cyan-300 border-cyan-400/40",
    }
}

// ============================================
// FORM / PANEL STYLES
// ============================================

pub fn input_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-pink-500 focus:outline-none"
}

pub fn select_class() -> &'static str {
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-pink-500 focus:outline-none"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn section_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-pink-600 px-4 py-2 text-sm font-semibold text-white hover:bg-pink-500"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800"
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden"
}

pub fn table_header() -> &'static str {
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500"
}

pub fn table_divider() -> &'static str {
    "divide-y divide-slate-800"
}
