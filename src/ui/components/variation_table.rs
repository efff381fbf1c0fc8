use dioxus::prelude::*;

use super::margin_badge::MarginBadge;
use crate::domain::VariationQuote;
use crate::ui::{brl, theme};

#[component]
pub fn VariationTable(quotes: Vec<VariationQuote>, on_remove: EventHandler<String>) -> Element {
    let is_empty = quotes.is_empty();
    rsx! {
        div {
            class: "{theme::table_container()}",
            table {
                class: "min-w-full text-sm",
                thead {
                    class: "{theme::table_header()} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Variação" }
                        th { class: "px-4 py-3 font-medium text-right", "Custo Total" }
                        th { class: "px-4 py-3 font-medium text-right", "Preço Sugerido" }
                        th { class: "px-4 py-3 font-medium text-right", "Lucro" }
                        th { class: "px-4 py-3 font-medium text-right", "Margem" }
                        th { class: "px-4 py-3 font-medium text-center", "Status" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "{theme::table_divider()}",
                    for entry in quotes {
                        VariationRowView { entry, on_remove: on_remove.clone() }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-slate-500",
                                colspan: "7",
                                "Nenhuma variação cadastrada."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VariationRowView(entry: VariationQuote, on_remove: EventHandler<String>) -> Element {
    let remove_id = entry.id.clone();
    let total_cost = brl(entry.quote.total_cost);
    let suggested = brl(entry.quote.suggested_price);
    let net_revenue = brl(entry.quote.net_revenue);
    let margin = format!("{:.1}%", entry.quote.actual_margin_pct);
    rsx! {
        tr {
            class: "text-slate-300 transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-medium text-slate-200", "{entry.label}" }
            td { class: "px-4 py-3 text-right", "{total_cost}" }
            td { class: "px-4 py-3 text-right font-semibold", "{suggested}" }
            td { class: "px-4 py-3 text-right", "{net_revenue}" }
            td { class: "px-4 py-3 text-right", "{margin}" }
            td {
                class: "px-4 py-3 text-center",
                MarginBadge { status: entry.quote.status }
            }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Remover"
                }
            }
        }
    }
}
