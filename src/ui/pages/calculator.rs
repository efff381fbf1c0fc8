use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        compute_pricing, fees, AdTier, AdsParams, AppState, Marketplace, MlCategory, PriceQuote,
        PricingInput, PricingResult, Variation,
    },
    ui::{
        brl,
        components::{
            breakdown_table::{breakdown_rows, BreakdownTable},
            kpi_card::KpiCard,
            margin_badge::MarginBadge,
            toast::{push_toast, ToastKind, ToastMessage},
            variation_table::VariationTable,
        },
        theme,
    },
    util::generate_id,
};

/// Unit counts for the profit projection table.
const PROJECTION_UNITS: [u32; 4] = [10, 50, 100, 500];

const MARKUP_CHOICES: [(&str, &str); 7] = [
    ("0", "0 (Automático / Margem Recomendada)"),
    ("1.3", "1.3x"),
    ("1.5", "1.5x"),
    ("1.8", "1.8x"),
    ("2", "2.0x"),
    ("2.5", "2.5x"),
    ("3", "3.0x"),
];

/// Missing or unparseable numeric input counts as zero; commas are accepted
/// as decimal separators.
fn parse_num(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse().unwrap_or(0.0)
}

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let prefs = state.with(|st| st.prefs.clone());
    let gateway = state.with(|st| st.gateway);
    let saved_variations = state.with(|st| st.variations.clone());

    // Marketplace defaults pulled apart so each control has its own signal.
    let (initial_key, initial_free, initial_extra, initial_tier, initial_category) =
        match &prefs.marketplace {
            Marketplace::Shopee {
                free_shipping_program,
                extra_commission_pct,
            } => (
                "shopee",
                *free_shipping_program,
                format!("{extra_commission_pct:.0}"),
                AdTier::default(),
                MlCategory::default(),
            ),
            Marketplace::MercadoLivre { tier, category } => {
                ("mercadolivre", false, "0".to_string(), *tier, *category)
            }
            Marketplace::TiktokShop { .. } => {
                ("tiktok", false, "0".to_string(), AdTier::default(), MlCategory::default())
            }
            Marketplace::DirectSite { .. } => {
                ("site", false, "0".to_string(), AdTier::default(), MlCategory::default())
            }
        };

    let mut product_name = use_signal(String::new);
    let mut cost_input = use_signal(String::new);
    let mut packaging_input = use_signal(|| format!("{:.2}", prefs.packaging_cost));
    let mut markup_input = use_signal(|| {
        if prefs.markup > 0.0 {
            format!("{}", prefs.markup)
        } else {
            "0".to_string()
        }
    });
    let mut manual_price_input = use_signal(String::new);

    let mut marketplace_key = use_signal(|| initial_key.to_string());
    let mut free_shipping = use_signal(|| initial_free);
    let mut extra_commission_input = use_signal(|| initial_extra.clone());
    let mut tier_key = use_signal(|| initial_tier.key().to_string());
    let mut category_key = use_signal(|| initial_category.key().to_string());
    let mut tiktok_commission_input = use_signal(|| "8".to_string());
    let mut site_shipping_input = use_signal(String::new);

    let mut paid_traffic_input = use_signal(String::new);
    let mut ads_enabled = use_signal(|| false);
    let mut cpc_input = use_signal(|| format!("{:.2}", fees::ml_category_cpc(initial_category)));
    let mut budget_input = use_signal(String::new);
    let mut sales_input = use_signal(String::new);

    let mut competitor_price_input = use_signal(String::new);
    let mut return_rate_input = use_signal(String::new);
    let mut batch_input = use_signal(|| "50".to_string());
    let mut reserve_input = use_signal(String::new);

    let mut variations_enabled = use_signal(|| !saved_variations.is_empty());
    let mut var_label_input = use_signal(String::new);
    let mut var_cost_input = use_signal(String::new);
    let mut var_markup_input = use_signal(|| "2".to_string());

    // Assemble the marketplace value from whatever the form currently says.
    let marketplace = match marketplace_key().as_str() {
        "shopee" => Marketplace::Shopee {
            free_shipping_program: free_shipping(),
            extra_commission_pct: parse_num(&extra_commission_input()),
        },
        "tiktok" => Marketplace::TiktokShop {
            commission_pct: parse_num(&tiktok_commission_input()),
        },
        "site" => Marketplace::DirectSite {
            shipping_cost: parse_num(&site_shipping_input()),
        },
        _ => Marketplace::MercadoLivre {
            tier: AdTier::from_key(&tier_key()).unwrap_or_default(),
            category: MlCategory::from_key(&category_key()).unwrap_or_default(),
        },
    };

    // Marketplaces settle payments themselves; the gateway only bites on the
    // seller's own site.
    let gateway_pct = if matches!(marketplace, Marketplace::DirectSite { .. }) {
        fees::gateway_fee_pct(&gateway)
    } else {
        0.0
    };

    let ads = if ads_enabled() {
        AdsParams {
            cpc: parse_num(&cpc_input()),
            daily_budget: parse_num(&budget_input()),
            sales_count: parse_num(&sales_input()),
        }
    } else {
        AdsParams::default()
    };

    let input = PricingInput {
        cost: parse_num(&cost_input()),
        packaging_cost: parse_num(&packaging_input()),
        markup: parse_num(&markup_input()),
        marketplace: marketplace.clone(),
        gateway_pct,
        paid_traffic_pct: parse_num(&paid_traffic_input()),
        ads,
        manual_price: parse_num(&manual_price_input()),
        competitor_price: parse_num(&competitor_price_input()),
        competitor_factor: prefs.competitor_factor,
        return_rate_pct: parse_num(&return_rate_input()),
        return_batch_size: parse_num(&batch_input()) as u32,
        emergency_reserve: parse_num(&reserve_input()),
        variations: if variations_enabled() {
            saved_variations.clone()
        } else {
            Vec::new()
        },
    };

    let result = compute_pricing(&input);
    let is_mercadolivre = marketplace_key() == "mercadolivre";
    let is_shopee = marketplace_key() == "shopee";
    let is_tiktok = marketplace_key() == "tiktok";
    let is_site = marketplace_key() == "site";
    let delivery_mode = marketplace.delivery_mode();
    let selected_tier = AdTier::from_key(&tier_key()).unwrap_or_default();
    let gateway_label = format!(
        "Gateway ({} · {})",
        gateway.provider.name(),
        gateway.method.name()
    );

    let on_marketplace_change = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            marketplace_key.set(evt.value());
            let chosen = match evt.value().as_str() {
                "shopee" => Marketplace::Shopee {
                    free_shipping_program: false,
                    extra_commission_pct: 0.0,
                },
                "tiktok" => Marketplace::TiktokShop { commission_pct: 8.0 },
                "site" => Marketplace::DirectSite { shipping_cost: 0.0 },
                _ => Marketplace::default(),
            };
            state.with_mut(|st| st.prefs.marketplace = chosen);
            persist_user_state(&state);
        }
    };

    let on_markup_change = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            markup_input.set(evt.value());
            state.with_mut(|st| st.prefs.markup = parse_num(&evt.value()));
            persist_user_state(&state);
        }
    };

    let on_packaging_change = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            packaging_input.set(evt.value());
            state.with_mut(|st| st.prefs.packaging_cost = parse_num(&evt.value()));
            persist_user_state(&state);
        }
    };

    let on_category_change = move |evt: FormEvent| {
        category_key.set(evt.value());
        if let Some(category) = MlCategory::from_key(&evt.value()) {
            cpc_input.set(format!("{:.2}", fees::ml_category_cpc(category)));
        }
    };

    let on_add_variation = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let label = var_label_input().trim().to_string();
            let cost = parse_num(&var_cost_input());
            let markup = parse_num(&var_markup_input());
            if label.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Dê um nome à variação.");
                return;
            }
            if cost <= 0.0 {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Informe um custo maior que zero para a variação.",
                );
                return;
            }
            state.with_mut(|st| {
                st.variations.push(Variation {
                    id: generate_id("var"),
                    label: label.clone(),
                    cost,
                    markup,
                })
            });
            persist_user_state(&state);
            var_label_input.set(String::new());
            var_cost_input.set(String::new());
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("Variação {label} adicionada."),
            );
        }
    };

    let on_remove_variation = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            state.with_mut(|st| st.variations.retain(|variation| variation.id != id));
            persist_user_state(&state);
            push_toast(toasts.clone(), ToastKind::Info, "Variação removida.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            div {
                h1 { class: "text-2xl font-bold text-slate-100", "Calculadora de Precificação" }
                p { class: "mt-1 text-sm text-slate-500",
                    "Taxas reais de Shopee, Mercado Livre e Tiktok Shop (tabelas 2024/2025)."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                // ---------------- input column ----------------
                div { class: "space-y-6",
                    section { class: "{theme::panel()} p-6 space-y-4",
                        h2 { class: "{theme::section_title()}", "Dados do Produto" }
                        div {
                            label { class: "{theme::label_class()}", "Nome do Produto" }
                            input {
                                class: "{theme::input_class()}",
                                value: product_name(),
                                oninput: move |evt| product_name.set(evt.value()),
                                placeholder: "Produto Teste",
                            }
                        }
                        div { class: "grid gap-4 sm:grid-cols-2",
                            div {
                                label { class: "{theme::label_class()}", "Preço de Custo (R$)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: cost_input(),
                                    oninput: move |evt| cost_input.set(evt.value()),
                                    placeholder: "0,00",
                                }
                            }
                            div {
                                label { class: "{theme::label_class()}", "Custo de Embalagem (R$)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: packaging_input(),
                                    oninput: on_packaging_change,
                                    placeholder: "2,00",
                                }
                            }
                        }
                        div { class: "grid gap-4 sm:grid-cols-2",
                            div {
                                label { class: "{theme::label_class()}", "Markup" }
                                select {
                                    class: "{theme::select_class()}",
                                    value: markup_input(),
                                    onchange: on_markup_change,
                                    for (value, label) in MARKUP_CHOICES {
                                        option { value: "{value}", "{label}" }
                                    }
                                }
                            }
                            div {
                                label { class: "{theme::label_class()}", "Preço de Venda Manual (R$)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: manual_price_input(),
                                    oninput: move |evt| manual_price_input.set(evt.value()),
                                    placeholder: "Opcional",
                                }
                            }
                        }
                    }

                    section { class: "{theme::panel()} p-6 space-y-4",
                        h2 { class: "{theme::section_title()}", "Canal de Venda" }
                        div { class: "grid gap-4 sm:grid-cols-2",
                            div {
                                label { class: "{theme::label_class()}", "Marketplace" }
                                select {
                                    class: "{theme::select_class()}",
                                    value: marketplace_key(),
                                    onchange: on_marketplace_change,
                                    option { value: "mercadolivre", "Mercado Livre" }
                                    option { value: "shopee", "Shopee" }
                                    option { value: "tiktok", "Tiktok Shop" }
                                    option { value: "site", "Site Próprio" }
                                }
                            }
                            div {
                                label { class: "{theme::label_class()}", "Modo de Entrega" }
                                input {
                                    class: "{theme::input_class()} opacity-60",
                                    value: "{delivery_mode}",
                                    disabled: true,
                                }
                            }
                        }

                        if is_mercadolivre {
                            div { class: "grid gap-4 sm:grid-cols-2",
                                div {
                                    label { class: "{theme::label_class()}", "Tipo de Anúncio" }
                                    select {
                                        class: "{theme::select_class()}",
                                        value: tier_key(),
                                        onchange: move |evt| tier_key.set(evt.value()),
                                        option { value: "gratis", "Grátis (0% - Sem visibilidade)" }
                                        option { value: "classico", "Clássico (12-16% - Visibilidade média)" }
                                        option { value: "premium", "Premium (17-19% - Máxima visibilidade + 12x sem juros)" }
                                    }
                                }
                                div {
                                    label { class: "{theme::label_class()}", "Categoria (Estimativa de CPC)" }
                                    select {
                                        class: "{theme::select_class()}",
                                        value: category_key(),
                                        onchange: on_category_change,
                                        for category in MlCategory::ALL {
                                            option {
                                                value: "{category.key()}",
                                                {format!("{} ({}%)", category.name(), fees::ml_commission_pct(selected_tier, category))}
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if is_shopee {
                            div { class: "grid gap-4 sm:grid-cols-2",
                                div { class: "flex items-center gap-2 pt-5",
                                    input {
                                        r#type: "checkbox",
                                        class: "h-4 w-4 cursor-pointer accent-pink-500",
                                        checked: free_shipping(),
                                        onclick: move |_| {
                                            let toggled = !free_shipping();
                                            free_shipping.set(toggled);
                                        },
                                    }
                                    label { class: "text-sm text-slate-300", "Programa de Frete Grátis (+6%)" }
                                }
                                div {
                                    label { class: "{theme::label_class()}", "Comissões Extras (%)" }
                                    input {
                                        class: "{theme::input_class()}",
                                        inputmode: "decimal",
                                        value: extra_commission_input(),
                                        oninput: move |evt| extra_commission_input.set(evt.value()),
                                        placeholder: "0",
                                    }
                                }
                            }
                        }

                        if is_tiktok {
                            div {
                                label { class: "{theme::label_class()}", "Comissão Tiktok (%)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: tiktok_commission_input(),
                                    oninput: move |evt| tiktok_commission_input.set(evt.value()),
                                    placeholder: "8",
                                }
                            }
                        }

                        if is_site {
                            div { class: "grid gap-4 sm:grid-cols-2",
                                div {
                                    label { class: "{theme::label_class()}", "Frete (R$)" }
                                    input {
                                        class: "{theme::input_class()}",
                                        inputmode: "decimal",
                                        value: site_shipping_input(),
                                        oninput: move |evt| site_shipping_input.set(evt.value()),
                                        placeholder: "15,00",
                                    }
                                }
                                div {
                                    label { class: "{theme::label_class()}", "{gateway_label}" }
                                    input {
                                        class: "{theme::input_class()} opacity-60",
                                        value: "{gateway_pct:.2}%",
                                        disabled: true,
                                    }
                                }
                            }
                        }
                    }

                    section { class: "{theme::panel()} p-6 space-y-4",
                        h2 { class: "{theme::section_title()}", "Tráfego Pago e Ads" }
                        div { class: "grid gap-4 sm:grid-cols-2",
                            div {
                                label { class: "{theme::label_class()}", "Tráfego Pago (% do preço)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: paid_traffic_input(),
                                    oninput: move |evt| paid_traffic_input.set(evt.value()),
                                    placeholder: "0",
                                }
                            }
                            div { class: "flex items-center gap-2 pt-5",
                                input {
                                    r#type: "checkbox",
                                    class: "h-4 w-4 cursor-pointer accent-pink-500",
                                    checked: ads_enabled(),
                                    onclick: move |_| {
                                        let toggled = !ads_enabled();
                                        ads_enabled.set(toggled);
                                    },
                                }
                                label { class: "text-sm text-slate-300", "Calcular Ads (CPA e Conversão)" }
                            }
                        }
                        if ads_enabled() {
                            div { class: "grid gap-4 sm:grid-cols-3",
                                div {
                                    label { class: "{theme::label_class()}", "CPC Médio (R$)" }
                                    input {
                                        class: "{theme::input_class()}",
                                        inputmode: "decimal",
                                        value: cpc_input(),
                                        oninput: move |evt| cpc_input.set(evt.value()),
                                        placeholder: "0.40",
                                    }
                                }
                                div {
                                    label { class: "{theme::label_class()}", "Orçamento Diário (R$)" }
                                    input {
                                        class: "{theme::input_class()}",
                                        inputmode: "decimal",
                                        value: budget_input(),
                                        oninput: move |evt| budget_input.set(evt.value()),
                                        placeholder: "10.00",
                                    }
                                }
                                div {
                                    label { class: "{theme::label_class()}", "Quantidade de Vendas" }
                                    input {
                                        class: "{theme::input_class()}",
                                        inputmode: "decimal",
                                        value: sales_input(),
                                        oninput: move |evt| sales_input.set(evt.value()),
                                        placeholder: "2",
                                    }
                                }
                            }
                        }
                    }

                    section { class: "{theme::panel()} p-6 space-y-4",
                        h2 { class: "{theme::section_title()}", "Concorrência e Devoluções" }
                        div { class: "grid gap-4 sm:grid-cols-2",
                            div {
                                label { class: "{theme::label_class()}", "Preço do Concorrente (R$)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: competitor_price_input(),
                                    oninput: move |evt| competitor_price_input.set(evt.value()),
                                    placeholder: "Opcional",
                                }
                            }
                            div {
                                label { class: "{theme::label_class()}", "Taxa de Devolução (%)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: return_rate_input(),
                                    oninput: move |evt| return_rate_input.set(evt.value()),
                                    placeholder: "0",
                                }
                            }
                            div {
                                label { class: "{theme::label_class()}", "Lote para Projeção (un)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "numeric",
                                    value: batch_input(),
                                    oninput: move |evt| batch_input.set(evt.value()),
                                    placeholder: "50",
                                }
                            }
                            div {
                                label { class: "{theme::label_class()}", "Reserva de Emergência (R$)" }
                                input {
                                    class: "{theme::input_class()}",
                                    inputmode: "decimal",
                                    value: reserve_input(),
                                    oninput: move |evt| reserve_input.set(evt.value()),
                                    placeholder: "Opcional",
                                }
                            }
                        }
                    }

                    section { class: "{theme::panel()} p-6 space-y-4",
                        div { class: "flex items-center gap-2",
                            input {
                                r#type: "checkbox",
                                class: "h-4 w-4 cursor-pointer accent-pink-500",
                                checked: variations_enabled(),
                                onclick: move |_| {
                                    let toggled = !variations_enabled();
                                    variations_enabled.set(toggled);
                                },
                            }
                            label { class: "text-sm font-semibold text-slate-300", "É produto com variação?" }
                        }
                        if variations_enabled() {
                            div { class: "flex flex-wrap items-end gap-3",
                                div { class: "flex-1 min-w-[120px]",
                                    label { class: "{theme::label_class()}", "Variação" }
                                    input {
                                        class: "{theme::input_class()}",
                                        value: var_label_input(),
                                        oninput: move |evt| var_label_input.set(evt.value()),
                                        placeholder: "Variação (ex: P)",
                                    }
                                }
                                div { class: "w-28",
                                    label { class: "{theme::label_class()}", "Custo (R$)" }
                                    input {
                                        class: "{theme::input_class()}",
                                        inputmode: "decimal",
                                        value: var_cost_input(),
                                        oninput: move |evt| var_cost_input.set(evt.value()),
                                        placeholder: "Custo (R$)",
                                    }
                                }
                                div { class: "w-24",
                                    label { class: "{theme::label_class()}", "Markup" }
                                    input {
                                        class: "{theme::input_class()}",
                                        inputmode: "decimal",
                                        value: var_markup_input(),
                                        oninput: move |evt| var_markup_input.set(evt.value()),
                                        placeholder: "Markup",
                                    }
                                }
                                button {
                                    class: "{theme::btn_primary()}",
                                    onclick: on_add_variation,
                                    "Adicionar Variação"
                                }
                            }
                        }
                    }
                }

                // ---------------- results column ----------------
                div { class: "space-y-6",
                    match result {
                        Some(pricing) => rsx! {
                            ResultsPanel {
                                pricing,
                                emergency_reserve: parse_num(&reserve_input()),
                                on_remove_variation,
                            }
                        },
                        None => rsx! {
                            section { class: "{theme::panel()} flex h-64 flex-col items-center justify-center p-6 text-center",
                                p { class: "text-4xl", "💰" }
                                p { class: "mt-4 text-sm text-slate-500",
                                    "Digite o preço de custo do seu produto para calcular a precificação ideal."
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ResultsPanel(
    pricing: PricingResult,
    emergency_reserve: f64,
    on_remove_variation: EventHandler<String>,
) -> Element {
    let product_quote = pricing.product.clone();
    let projection_quote = pricing.product.clone();
    let delta = pricing.price_delta;
    let variation_quotes = pricing.variations.clone();
    let has_variations = !variation_quotes.is_empty();

    rsx! {
        div { class: "space-y-6",
            if let Some(quote) = product_quote {
                ProductQuoteView { quote, delta }
            }

            SecondaryMetrics {
                pricing: pricing.clone(),
                emergency_reserve,
            }

            if let Some(quote) = projection_quote {
                ProfitProjection { quote }
            }

            if has_variations {
                section { class: "{theme::panel()} p-6 space-y-4 shadow-xl",
                    h2 { class: "{theme::section_title()}", "Resultados das Variações" }
                    VariationTable {
                        quotes: variation_quotes,
                        on_remove: on_remove_variation.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ProductQuoteView(quote: PriceQuote, delta: Option<crate::domain::PriceDelta>) -> Element {
    let rows = breakdown_rows(&quote);
    let has_manual = (quote.effective_price - quote.suggested_price).abs() > f64::EPSILON;
    let suggested_display = brl(quote.suggested_price);
    let effective_display = brl(quote.effective_price);
    let net_display = brl(quote.net_revenue);
    let margin_display = format!("{:.1}%", quote.actual_margin_pct);
    let recommended_line = format!(
        "Recomendada: {:.0}% para custo de {}",
        quote.recommended_margin_pct,
        brl(quote.total_cost)
    );
    let delta_row = delta.map(|delta| (delta.label(), brl(delta.magnitude())));

    rsx! {
        section { class: "{theme::panel()} p-6 space-y-4 shadow-xl",
            h2 { class: "{theme::section_title()}", "Resultado da Precificação" }

            div { class: "{theme::status_panel(quote.status)} p-5",
                div { class: "flex items-center justify-between",
                    p { class: "text-sm text-slate-400", "Preço de Venda Sugerido" }
                    MarginBadge { status: quote.status }
                }
                p { class: "mt-1 text-4xl font-bold {theme::status_text(quote.status)}",
                    "{suggested_display}"
                }
                p { class: "mt-2 text-xs text-slate-400", "{quote.tax_description}" }
            }

            if has_manual {
                div { class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2",
                    span { class: "text-sm text-slate-400", "Preço Manual em Uso" }
                    span { class: "text-sm font-semibold text-slate-200", "{effective_display}" }
                }
            }

            if let Some((delta_label, delta_value)) = delta_row {
                div { class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2",
                    span { class: "text-sm text-slate-400", "{delta_label}" }
                    span { class: "text-sm font-semibold text-slate-200", "{delta_value}" }
                }
            }

            BreakdownTable { rows }

            div { class: "grid gap-3 sm:grid-cols-2",
                div { class: "{theme::status_panel(quote.status)} px-4 py-3",
                    p { class: "text-xs font-semibold uppercase tracking-wide text-slate-400", "Lucro Líquido" }
                    p { class: "mt-1 text-2xl font-bold {theme::status_text(quote.status)}", "{net_display}" }
                }
                div { class: "{theme::status_panel(quote.status)} px-4 py-3",
                    p { class: "text-xs font-semibold uppercase tracking-wide text-slate-400", "Margem de Lucro" }
                    p { class: "mt-1 text-2xl font-bold {theme::status_text(quote.status)}",
                        "{margin_display}"
                    }
                    p { class: "mt-1 text-xs text-slate-500", "{recommended_line}" }
                }
            }
        }
    }
}

#[component]
fn SecondaryMetrics(pricing: PricingResult, emergency_reserve: f64) -> Element {
    let cpa = pricing
        .product
        .as_ref()
        .filter(|quote| quote.ads_cost_per_sale > 0.0)
        .map(|quote| quote.ads_cost_per_sale);
    let break_even = pricing.product.as_ref().map(|quote| quote.break_even_cpa);
    let reverse_conversion = pricing.reverse_conversion_pct;
    let competitor_value = pricing.competitor_value;
    let return_loss = pricing.return_loss;

    rsx! {
        section { class: "grid gap-4 sm:grid-cols-2",
            if let Some(value) = cpa {
                KpiCard {
                    title: "CPA (Custo por Aquisição)".to_string(),
                    value: brl(value),
                    description: Some("Orçamento diário dividido pelas vendas".to_string()),
                }
            }
            if let Some(value) = break_even {
                KpiCard {
                    title: "CPA Máximo (Break-even)".to_string(),
                    value: brl(value),
                    description: Some("Gasto por venda que zera o lucro".to_string()),
                }
            }
            if let Some(rate) = reverse_conversion {
                KpiCard {
                    title: "Conversão Necessária".to_string(),
                    value: format!("{rate:.1}%"),
                    description: Some("Calculada a partir de CPC, orçamento e vendas".to_string()),
                }
            }
            if let Some(value) = competitor_value {
                KpiCard {
                    title: "Valor Recomendado (Concorrência)".to_string(),
                    value: brl(value),
                    description: Some("Preço do concorrente × fator configurado".to_string()),
                }
            }
            if let Some(loss) = return_loss {
                KpiCard {
                    title: format!("Perda com Devoluções ({} un)", loss.expected_returns),
                    value: brl(loss.expected_loss),
                    description: Some(format!("Projeção para lote de {} unidades", loss.batch_size)),
                }
            }
            if emergency_reserve > 0.0 {
                KpiCard {
                    title: "Reserva de Emergência".to_string(),
                    value: brl(emergency_reserve),
                    description: Some("Valor informado; não entra na projeção de perdas".to_string()),
                }
            }
        }
    }
}

#[component]
fn ProfitProjection(quote: PriceQuote) -> Element {
    let rows: Vec<(u32, String, String)> = PROJECTION_UNITS
        .iter()
        .map(|&units| {
            (
                units,
                brl(quote.effective_price * units as f64),
                brl(quote.net_revenue * units as f64),
            )
        })
        .collect();

    rsx! {
        section { class: "{theme::panel()} p-6 space-y-3",
            h2 { class: "{theme::section_title()}", "Projeção de Lucro" }
            div { class: "{theme::table_container()}",
                table { class: "min-w-full text-sm",
                    thead {
                        class: "{theme::table_header()} text-left tracking-wide",
                        tr {
                            th { class: "px-4 py-2 font-medium", "Unidades Vendidas" }
                            th { class: "px-4 py-2 font-medium text-right", "Faturamento" }
                            th { class: "px-4 py-2 font-medium text-right", "Lucro Estimado" }
                        }
                    }
                    tbody {
                        class: "{theme::table_divider()}",
                        for (units, revenue, profit) in rows {
                            tr { class: "text-slate-300",
                                td { class: "px-4 py-2", "{units}" }
                                td { class: "px-4 py-2 text-right", "{revenue}" }
                                td { class: "px-4 py-2 text-right font-semibold", "{profit}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
