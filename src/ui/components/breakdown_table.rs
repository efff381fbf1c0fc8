use dioxus::prelude::*;

use crate::domain::PriceQuote;
use crate::ui::brl;

/// One line of the fee/profit breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub amount: f64,
    pub deduction: bool,
}

/// Builds the display rows for a quote, skipping charges that are zero
/// (a Shopee quote has no gateway row, a site quote has no commission row).
pub fn breakdown_rows(quote: &PriceQuote) -> Vec<BreakdownRow> {
    let mut rows = vec![BreakdownRow {
        label: "Custo Total do Produto".to_string(),
        amount: quote.total_cost,
        deduction: true,
    }];

    if quote.commission > 0.0 {
        rows.push(BreakdownRow {
            label: format!("Taxa Marketplace ({:.0}%)", quote.commission_pct),
            amount: quote.commission,
            deduction: true,
        });
    }
    if quote.fixed_fee > 0.0 {
        rows.push(BreakdownRow {
            label: "Taxa Fixa".to_string(),
            amount: quote.fixed_fee,
            deduction: true,
        });
    }
    if quote.gateway_cost > 0.0 {
        rows.push(BreakdownRow {
            label: "Gateway de Pagamento".to_string(),
            amount: quote.gateway_cost,
            deduction: true,
        });
    }
    if quote.paid_traffic_cost > 0.0 {
        rows.push(BreakdownRow {
            label: "Tráfego Pago".to_string(),
            amount: quote.paid_traffic_cost,
            deduction: true,
        });
    }
    if quote.ads_cost_per_sale > 0.0 {
        rows.push(BreakdownRow {
            label: "Ads por Venda (CPA)".to_string(),
            amount: quote.ads_cost_per_sale,
            deduction: true,
        });
    }
    if quote.shipping_cost > 0.0 {
        rows.push(BreakdownRow {
            label: "Frete (Site)".to_string(),
            amount: quote.shipping_cost,
            deduction: true,
        });
    }

    rows.push(BreakdownRow {
        label: "Total de Taxas e Custos".to_string(),
        amount: quote.total_fees + quote.total_cost,
        deduction: true,
    });

    rows
}

#[component]
pub fn BreakdownTable(rows: Vec<BreakdownRow>) -> Element {
    let rendered: Vec<(String, String, bool)> = rows
        .into_iter()
        .map(|row| {
            let amount = if row.deduction {
                format!("- {}", brl(row.amount))
            } else {
                brl(row.amount)
            };
            (row.label, amount, row.deduction)
        })
        .collect();

    rsx! {
        div { class: "space-y-1",
            for (label, amount, deduction) in rendered {
                div {
                    class: "flex items-center justify-between border-b border-slate-800/60 py-2",
                    span { class: "text-sm text-slate-400", "{label}" }
                    if deduction {
                        span { class: "text-sm font-semibold text-rose-300", "{amount}" }
                    } else {
                        span { class: "text-sm font-semibold text-slate-200", "{amount}" }
                    }
                }
            }
        }
    }
}
