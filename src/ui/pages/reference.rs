use dioxus::prelude::*;

use crate::{
    domain::{fees, AdTier, MlCategory},
    ui::theme,
};

/// Price bands shown in the guidance table, with a sample cost inside each
/// band so the margin column always reflects `fees::recommended_margin_pct`.
const PRICE_BANDS: [(&str, f64); 5] = [
    ("até R$ 30", 20.0),
    ("R$ 30 a 50", 40.0),
    ("R$ 50 a 80", 65.0),
    ("R$ 80 a 150", 100.0),
    ("acima de R$ 150", 200.0),
];

fn tier_rate_range(tier: AdTier) -> (f64, f64) {
    MlCategory::ALL
        .iter()
        .map(|category| fees::ml_commission_pct(tier, *category))
        .fold((f64::INFINITY, 0.0), |(min, max), rate| {
            (min.min(rate), max.max(rate))
        })
}

#[component]
pub fn ReferencePage() -> Element {
    let (classico_min, classico_max) = tier_rate_range(AdTier::Classico);
    let (premium_min, premium_max) = tier_rate_range(AdTier::Premium);

    rsx! {
        div { class: "space-y-8",
            div {
                h1 { class: "text-2xl font-bold text-slate-100", "Tabelas de Referência" }
                p { class: "mt-1 text-sm text-slate-500",
                    "Margens recomendadas e comissões por canal, geradas da mesma tabela que a calculadora usa."
                }
            }

            section { class: "{theme::panel()} p-6 space-y-4",
                h2 { class: "{theme::section_title()}", "Margem Recomendada por Faixa de Preço" }
                div { class: "{theme::table_container()}",
                    table { class: "min-w-full text-sm",
                        thead {
                            class: "{theme::table_header()} text-left tracking-wide",
                            tr {
                                th { class: "px-4 py-3 font-medium", "Custo do Produto" }
                                th { class: "px-4 py-3 font-medium text-center", "Margem Recomendada" }
                            }
                        }
                        tbody {
                            class: "{theme::table_divider()}",
                            for (label, sample_cost) in PRICE_BANDS {
                                tr { class: "text-slate-300",
                                    td { class: "px-4 py-3", "{label}" }
                                    td { class: "px-4 py-3 text-center font-bold text-emerald-300",
                                        {format!("{:.0}%", fees::recommended_margin_pct(sample_cost))}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "{theme::panel()} p-6 space-y-4",
                h2 { class: "{theme::section_title()}", "Comissão Mercado Livre por Categoria" }
                p { class: "text-xs text-slate-500",
                    "Grátis: 0% em todas as categorias. Clássico: {classico_min:.0}% a {classico_max:.0}%. Premium: {premium_min:.0}% a {premium_max:.0}%."
                }
                div { class: "{theme::table_container()}",
                    table { class: "min-w-full text-sm",
                        thead {
                            class: "{theme::table_header()} text-left tracking-wide",
                            tr {
                                th { class: "px-4 py-3 font-medium", "Categoria" }
                                th { class: "px-4 py-3 font-medium text-center", "Clássico" }
                                th { class: "px-4 py-3 font-medium text-center", "Premium" }
                            }
                        }
                        tbody {
                            class: "{theme::table_divider()}",
                            for category in MlCategory::ALL {
                                tr { class: "text-slate-300",
                                    td { class: "px-4 py-3", "{category.name()}" }
                                    td { class: "px-4 py-3 text-center",
                                        {format!("{:.0}%", fees::ml_commission_pct(AdTier::Classico, category))}
                                    }
                                    td { class: "px-4 py-3 text-center",
                                        {format!("{:.0}%", fees::ml_commission_pct(AdTier::Premium, category))}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "grid gap-6 lg:grid-cols-2",
                div { class: "{theme::panel()} p-6 space-y-3",
                    h2 { class: "{theme::section_title()}", "Tarifa Fixa Mercado Livre" }
                    p { class: "text-xs text-slate-500",
                        "Válida para anúncios Clássico e Premium; o anúncio Grátis não paga tarifa fixa."
                    }
                    FeeLadder { brackets: fees::ML_FEE_BRACKETS.to_vec() }
                }
                div { class: "{theme::panel()} p-6 space-y-3",
                    h2 { class: "{theme::section_title()}", "Shopee" }
                    ul { class: "space-y-2 text-sm text-slate-300",
                        li {
                            {format!("Comissão base: {:.0}% (12% comissão + 2% transação)", fees::SHOPEE_BASE_PCT)}
                        }
                        li {
                            {format!("Programa de frete grátis: +{:.0}%", fees::SHOPEE_FREE_SHIPPING_PCT)}
                        }
                        li {
                            {format!("Teto da comissão: R$ {:.2} por item", fees::SHOPEE_COMMISSION_CAP)}
                        }
                    }
                    FeeLadder { brackets: fees::SHOPEE_FEE_BRACKETS.to_vec() }
                }
            }
        }
    }
}

#[component]
fn FeeLadder(brackets: Vec<fees::FeeBracket>) -> Element {
    let rows: Vec<(String, String)> = brackets
        .iter()
        .map(|bracket| {
            let range = if bracket.upper.is_infinite() {
                format!("a partir de R$ {:.2}", bracket.lower)
            } else {
                format!("R$ {:.2} a R$ {:.2}", bracket.lower, bracket.upper)
            };
            let fee = match bracket.fee {
                fees::BracketFee::Flat(value) if value == 0.0 => "isento".to_string(),
                fees::BracketFee::Flat(value) => format!("R$ {value:.2}"),
                fees::BracketFee::ShareOfPrice(share) => {
                    format!("{:.0}% do preço", share * 100.0)
                }
            };
            (range, fee)
        })
        .collect();

    rsx! {
        ul { class: "space-y-1 text-sm",
            for (range, fee) in rows {
                li { class: "flex items-center justify-between border-b border-slate-800/60 py-1.5",
                    span { class: "text-slate-400", "{range}" }
                    span { class: "font-semibold text-slate-200", "{fee}" }
                }
            }
        }
    }
}
