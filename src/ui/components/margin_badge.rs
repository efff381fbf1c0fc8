use dioxus::prelude::*;

use crate::domain::MarginStatus;
use crate::ui::theme;

#[component]
pub fn MarginBadge(status: MarginStatus) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {theme::status_badge(status)}",
            "{status.label()}"
        }
    }
}
