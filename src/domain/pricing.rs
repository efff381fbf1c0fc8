#![allow(dead_code)]

//! Suggested-price resolution and profit accounting.
//!
//! `compute_pricing` is a pure function of [`PricingInput`]; the UI calls it
//! on every input change and renders whatever comes back. Percentage charges
//! (commission, gateway, paid traffic) scale with the selling price and sit
//! in the closed-form denominator; absolute per-sale charges (fixed fee, ads
//! CPA, site shipping) sit in the numerator. The same ordering applies on
//! the manual-price path.

use super::entities::{
    AdsParams, MarginStatus, Marketplace, PriceDelta, PriceQuote, PricingInput, PricingResult,
    ReturnLossProjection, VariationQuote,
};
use super::fees::{self, BracketFee};

/// Multiplier applied to a competitor's price when the user has not set one.
pub const DEFAULT_COMPETITOR_FACTOR: f64 = 1.15;

/// Margin tolerance (percentage points) before a quote stops counting as
/// "on target".
pub const MARGIN_TOLERANCE_PP: f64 = 0.5;

pub fn compute_pricing(input: &PricingInput) -> Option<PricingResult> {
    if input.cost <= 0.0 && input.variations.is_empty() {
        return None;
    }

    let product = (input.cost > 0.0)
        .then(|| price_quote(input.cost, input.markup, input.manual_price, input));

    let variations: Vec<VariationQuote> = input
        .variations
        .iter()
        .filter(|variation| variation.cost > 0.0)
        .map(|variation| VariationQuote {
            id: variation.id.clone(),
            label: variation.label.clone(),
            quote: price_quote(variation.cost, variation.markup, 0.0, input),
        })
        .collect();

    let price_delta = product
        .as_ref()
        .and_then(|quote| price_delta(quote.suggested_price, input.manual_price));

    let return_loss = product.as_ref().and_then(|quote| {
        return_loss_projection(
            input.return_batch_size,
            input.return_rate_pct,
            quote.total_cost,
            quote.ads_cost_per_sale,
        )
    });

    let competitor_value = (input.competitor_price > 0.0).then(|| {
        let factor = if input.competitor_factor > 0.0 {
            input.competitor_factor
        } else {
            DEFAULT_COMPETITOR_FACTOR
        };
        input.competitor_price * factor
    });

    Some(PricingResult {
        product,
        variations,
        reverse_conversion_pct: reverse_conversion_rate(&input.ads),
        price_delta,
        competitor_value,
        return_loss,
    })
}

/// Price one item (the product itself or a variation) under the shared
/// marketplace settings. `manual_price` is 0 for variations.
pub fn price_quote(cost: f64, markup: f64, manual_price: f64, input: &PricingInput) -> PriceQuote {
    let marketplace = &input.marketplace;
    let total_cost = cost + input.packaging_cost.max(0.0);
    let recommended_margin_pct = fees::recommended_margin_pct(total_cost);

    let commission_pct = fees::commission_pct(marketplace);
    let gateway_pct = input.gateway_pct.max(0.0);
    let traffic_pct = input.paid_traffic_pct.max(0.0);
    let ads_cost_per_sale = ads_cost_per_sale(&input.ads);
    let shipping_cost = match marketplace {
        Marketplace::DirectSite { shipping_cost } => shipping_cost.max(0.0),
        _ => 0.0,
    };
    let per_sale_costs = ads_cost_per_sale + shipping_cost;

    let suggested_price = if markup > 0.0 {
        total_cost * markup
    } else {
        resolve_auto_price(
            marketplace,
            total_cost,
            per_sale_costs,
            commission_pct + gateway_pct + traffic_pct,
            recommended_margin_pct,
        )
    };

    let effective_price = if manual_price > 0.0 {
        manual_price
    } else {
        suggested_price
    };

    let fixed_fee = fees::fixed_fee_at(marketplace, effective_price);
    let commission = fees::commission_at(marketplace, effective_price);
    let gateway_cost = effective_price * gateway_pct / 100.0;
    let paid_traffic_cost = effective_price * traffic_pct / 100.0;

    let total_fees =
        commission + fixed_fee + gateway_cost + paid_traffic_cost + ads_cost_per_sale + shipping_cost;
    let net_revenue = effective_price - total_fees - total_cost;
    let actual_margin_pct = if effective_price > 0.0 {
        net_revenue / effective_price * 100.0
    } else {
        0.0
    };

    let status = classify_margin(net_revenue, actual_margin_pct, recommended_margin_pct);
    let tax_description = tax_description(marketplace, fixed_fee, gateway_pct, shipping_cost);

    PriceQuote {
        suggested_price,
        effective_price,
        total_cost,
        commission_pct,
        commission,
        fixed_fee,
        gateway_cost,
        paid_traffic_cost,
        ads_cost_per_sale,
        shipping_cost,
        total_fees,
        net_revenue,
        actual_margin_pct,
        recommended_margin_pct,
        break_even_cpa: net_revenue + ads_cost_per_sale,
        tax_description,
        status,
    }
}

/// Search the fixed-fee brackets for a price that hits the target margin.
///
/// The fixed fee is a step function of the price it produces, so each
/// bracket is tried in descending price order with its own fee plugged into
/// the closed form; the first candidate landing inside the bracket that
/// priced it wins. A degenerate denominator (fee percentages + target
/// ≥ 100%) or an empty match falls back to doubling the cost.
fn resolve_auto_price(
    marketplace: &Marketplace,
    total_cost: f64,
    per_sale_costs: f64,
    pct_load: f64,
    target_margin_pct: f64,
) -> f64 {
    let denominator = 1.0 - (pct_load + target_margin_pct) / 100.0;

    for bracket in fees::fee_brackets(marketplace) {
        let candidate = match bracket.fee {
            BracketFee::Flat(fee) => {
                if denominator <= 0.0 {
                    continue;
                }
                (total_cost + per_sale_costs + fee) / denominator
            }
            BracketFee::ShareOfPrice(share) => {
                let shared = denominator - share;
                if shared <= 0.0 {
                    continue;
                }
                (total_cost + per_sale_costs) / shared
            }
        };

        if candidate.is_finite() && candidate > 0.0 && bracket.contains(candidate) {
            return candidate;
        }
    }

    total_cost * 2.0
}

/// Per-sale ad spend implied by the campaign numbers.
pub fn ads_cost_per_sale(ads: &AdsParams) -> f64 {
    if ads.daily_budget > 0.0 && ads.sales_count > 0.0 {
        ads.daily_budget / ads.sales_count
    } else {
        0.0
    }
}

/// Back-solve the conversion rate from budget, CPC and observed sales.
pub fn reverse_conversion_rate(ads: &AdsParams) -> Option<f64> {
    if ads.cpc <= 0.0 || ads.daily_budget <= 0.0 || ads.sales_count <= 0.0 {
        return None;
    }
    let clicks = ads.daily_budget / ads.cpc;
    Some(ads.sales_count / clicks * 100.0)
}

/// `suggested − manual`: positive means the seller is undercutting the
/// suggestion (discount), negative means charging above it (surcharge).
pub fn price_delta(suggested_price: f64, manual_price: f64) -> Option<PriceDelta> {
    if manual_price <= 0.0 {
        return None;
    }
    let delta = suggested_price - manual_price;
    if delta < 0.0 {
        Some(PriceDelta::Surcharge(-delta))
    } else {
        Some(PriceDelta::Discount(delta))
    }
}

/// Expected loss from returns over a batch. The emergency reserve is kept
/// out of this on purpose: it is a cushion, not a per-unit cost.
pub fn return_loss_projection(
    batch_size: u32,
    return_rate_pct: f64,
    total_cost: f64,
    ads_cost_per_sale: f64,
) -> Option<ReturnLossProjection> {
    if batch_size == 0 || return_rate_pct <= 0.0 {
        return None;
    }
    let expected_returns = (batch_size as f64 * return_rate_pct / 100.0).round() as u32;
    Some(ReturnLossProjection {
        batch_size,
        expected_returns,
        expected_loss: expected_returns as f64 * (total_cost + ads_cost_per_sale),
    })
}

pub fn classify_margin(
    net_revenue: f64,
    actual_margin_pct: f64,
    recommended_margin_pct: f64,
) -> MarginStatus {
    if net_revenue < 0.0 {
        MarginStatus::Negative
    } else if actual_margin_pct < recommended_margin_pct - MARGIN_TOLERANCE_PP {
        MarginStatus::Low
    } else if actual_margin_pct > recommended_margin_pct + MARGIN_TOLERANCE_PP {
        MarginStatus::Excellent
    } else {
        MarginStatus::Good
    }
}

fn tax_description(
    marketplace: &Marketplace,
    fixed_fee: f64,
    gateway_pct: f64,
    shipping_cost: f64,
) -> String {
    match marketplace {
        Marketplace::Shopee {
            free_shipping_program,
            extra_commission_pct,
        } => {
            let mut parts = vec![format!("{}% comissão", fmt_pct(fees::SHOPEE_BASE_PCT))];
            if *free_shipping_program {
                parts.push(format!(
                    "{}% frete grátis",
                    fmt_pct(fees::SHOPEE_FREE_SHIPPING_PCT)
                ));
            }
            if *extra_commission_pct > 0.0 {
                parts.push(format!("{}% (Extra)", fmt_pct(*extra_commission_pct)));
            }
            if fixed_fee > 0.0 {
                parts.push(format!("R$ {fixed_fee:.2} (Tarifa Fixa Shopee)"));
            }
            parts.join(" + ")
        }
        Marketplace::MercadoLivre { tier, category } => {
            let rate = fees::ml_commission_pct(*tier, *category);
            let mut description = format!("{}% comissão", fmt_pct(rate));
            if fixed_fee > 0.0 {
                description.push_str(&format!(" + R$ {fixed_fee:.2} (Tarifa Fixa Mercado Livre)"));
            }
            description
        }
        Marketplace::TiktokShop { commission_pct } => {
            format!("{}% comissão (Tiktok Shop)", fmt_pct(commission_pct.max(0.0)))
        }
        Marketplace::DirectSite { .. } => {
            let mut parts = vec!["Sem comissão de marketplace".to_string()];
            if gateway_pct > 0.0 {
                parts.push(format!("{}% gateway", fmt_pct(gateway_pct)));
            }
            if shipping_cost > 0.0 {
                parts.push(format!("R$ {shipping_cost:.2} frete"));
            }
            parts.join(" + ")
        }
    }
}

/// Whole percentages print without a decimal point, everything else with one.
fn fmt_pct(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AdTier, MlCategory, Variation};

    fn shopee_input(cost: f64, packaging: f64, markup: f64) -> PricingInput {
        PricingInput {
            cost,
            packaging_cost: packaging,
            markup,
            marketplace: Marketplace::Shopee {
                free_shipping_program: false,
                extra_commission_pct: 0.0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn markup_mode_shopee_end_to_end() {
        let input = shopee_input(100.0, 2.0, 1.5);
        let result = compute_pricing(&input).unwrap();
        let quote = result.product.unwrap();

        assert!((quote.total_cost - 102.0).abs() < 1e-9);
        assert!((quote.suggested_price - 153.0).abs() < 1e-9);
        assert!((quote.fixed_fee - 4.0).abs() < 1e-9);
        assert!((quote.commission - 21.42).abs() < 1e-9);
        assert!((quote.net_revenue - 25.58).abs() < 1e-9);
        assert!((quote.actual_margin_pct - 16.72).abs() < 0.01);
    }

    #[test]
    fn low_price_shopee_fee_is_half_the_price() {
        let input = shopee_input(1.0, 2.0, 2.0);
        let quote = compute_pricing(&input).unwrap().product.unwrap();

        assert!((quote.total_cost - 3.0).abs() < 1e-9);
        assert!((quote.suggested_price - 6.0).abs() < 1e-9);
        assert!((quote.fixed_fee - 3.0).abs() < 1e-9);
    }

    #[test]
    fn auto_mode_hits_the_recommended_margin() {
        // Mercado Livre, clássico/eletrônicos: 12% commission, target 30%.
        let input = PricingInput {
            cost: 28.0,
            packaging_cost: 2.0,
            markup: 0.0,
            marketplace: Marketplace::MercadoLivre {
                tier: AdTier::Classico,
                category: MlCategory::Eletronicos,
            },
            ..Default::default()
        };
        let quote = compute_pricing(&input).unwrap().product.unwrap();

        assert_eq!(quote.recommended_margin_pct, 30.0);
        assert!(
            (quote.actual_margin_pct - quote.recommended_margin_pct).abs() < MARGIN_TOLERANCE_PP,
            "auto mode missed the target: {:.2}% vs {:.0}%",
            quote.actual_margin_pct,
            quote.recommended_margin_pct
        );
        // The winning bracket must be self-consistent with the price.
        assert_eq!(
            quote.fixed_fee,
            crate::domain::fees::fixed_fee_at(&input.marketplace, quote.suggested_price)
        );
        assert_eq!(quote.status, MarginStatus::Good);
    }

    #[test]
    fn auto_mode_on_shopee_lands_in_low_bracket_for_tiny_costs() {
        let input = shopee_input(0.4, 0.0, 0.0);
        let quote = compute_pricing(&input).unwrap().product.unwrap();

        assert!(quote.suggested_price < 8.0);
        assert!((quote.fixed_fee - quote.suggested_price * 0.5).abs() < 1e-9);
        assert!((quote.actual_margin_pct - 30.0).abs() < MARGIN_TOLERANCE_PP);
    }

    #[test]
    fn degenerate_denominator_falls_back_to_doubled_cost() {
        let input = PricingInput {
            cost: 10.0,
            markup: 0.0,
            marketplace: Marketplace::TiktokShop {
                commission_pct: 95.0,
            },
            ..Default::default()
        };
        let quote = compute_pricing(&input).unwrap().product.unwrap();
        assert!((quote.suggested_price - 20.0).abs() < 1e-9);
    }

    #[test]
    fn manual_price_drives_all_accounting() {
        let mut input = shopee_input(50.0, 2.0, 1.5);
        input.manual_price = 75.0;
        let quote = compute_pricing(&input).unwrap().product.unwrap();

        assert!((quote.suggested_price - 78.0).abs() < 1e-9);
        assert!((quote.effective_price - 75.0).abs() < 1e-9);
        assert!((quote.commission - 75.0 * 0.14).abs() < 1e-9);
        assert!((quote.net_revenue - (75.0 - 10.5 - 4.0 - 52.0)).abs() < 1e-9);
    }

    #[test]
    fn discount_and_surcharge_labels() {
        let mut input = PricingInput {
            cost: 100.0,
            packaging_cost: 10.0,
            markup: 1.5,
            marketplace: Marketplace::Shopee {
                free_shipping_program: false,
                extra_commission_pct: 0.0,
            },
            ..Default::default()
        };

        input.manual_price = 150.0;
        let delta = compute_pricing(&input).unwrap().price_delta.unwrap();
        assert_eq!(delta, PriceDelta::Discount(15.0));
        assert_eq!(delta.label(), "Desconto Aplicado");

        input.manual_price = 200.0;
        let delta = compute_pricing(&input).unwrap().price_delta.unwrap();
        assert!((delta.magnitude() - 35.0).abs() < 1e-9);
        assert!(matches!(delta, PriceDelta::Surcharge(_)));
        assert_eq!(delta.label(), "Acréscimo Aplicado");
    }

    #[test]
    fn shopee_commission_clamps_at_absolute_cap() {
        let input = shopee_input(1000.0, 0.0, 2.0);
        let quote = compute_pricing(&input).unwrap().product.unwrap();
        // 14% of 2000 would be 280.
        assert_eq!(quote.commission, 100.0);
    }

    #[test]
    fn reverse_conversion_rate_from_campaign_numbers() {
        let ads = AdsParams {
            cpc: 0.35,
            daily_budget: 20.0,
            sales_count: 2.0,
        };
        let rate = reverse_conversion_rate(&ads).unwrap();
        assert!((rate - 3.5).abs() < 0.01);
        assert!(reverse_conversion_rate(&AdsParams::default()).is_none());
    }

    #[test]
    fn break_even_cpa_is_pre_ads_net_revenue() {
        let mut input = shopee_input(100.0, 2.0, 1.5);
        let without_ads = compute_pricing(&input).unwrap().product.unwrap();

        input.ads = AdsParams {
            cpc: 0.40,
            daily_budget: 20.0,
            sales_count: 2.0,
        };
        let with_ads = compute_pricing(&input).unwrap().product.unwrap();

        assert!((with_ads.ads_cost_per_sale - 10.0).abs() < 1e-9);
        assert!((with_ads.net_revenue - (without_ads.net_revenue - 10.0)).abs() < 1e-9);
        assert!((with_ads.break_even_cpa - without_ads.net_revenue).abs() < 1e-9);
    }

    #[test]
    fn return_loss_excludes_the_emergency_reserve() {
        let mut input = shopee_input(100.0, 2.0, 1.5);
        input.return_rate_pct = 10.0;
        input.return_batch_size = 50;
        input.emergency_reserve = 10_000.0;

        let projection = compute_pricing(&input).unwrap().return_loss.unwrap();
        assert_eq!(projection.expected_returns, 5);
        assert!((projection.expected_loss - 5.0 * 102.0).abs() < 1e-9);
    }

    #[test]
    fn competitor_anchored_value_uses_factor_or_default() {
        let mut input = shopee_input(10.0, 0.0, 2.0);
        input.competitor_price = 100.0;
        let result = compute_pricing(&input).unwrap();
        assert!((result.competitor_value.unwrap() - 115.0).abs() < 1e-9);

        input.competitor_factor = 1.25;
        let result = compute_pricing(&input).unwrap();
        assert!((result.competitor_value.unwrap() - 125.0).abs() < 1e-9);
    }

    #[test]
    fn no_cost_and_no_variations_yields_nothing() {
        let input = PricingInput::default();
        assert!(compute_pricing(&input).is_none());
    }

    #[test]
    fn variations_are_priced_without_a_base_cost() {
        let input = PricingInput {
            packaging_cost: 10.0,
            marketplace: Marketplace::Shopee {
                free_shipping_program: false,
                extra_commission_pct: 0.0,
            },
            variations: vec![Variation {
                id: "var-1".to_string(),
                label: "Var A".to_string(),
                cost: 50.0,
                markup: 2.0,
            }],
            ..Default::default()
        };

        let result = compute_pricing(&input).unwrap();
        assert!(result.product.is_none());
        let variation = &result.variations[0];
        assert_eq!(variation.label, "Var A");
        assert!((variation.quote.total_cost - 60.0).abs() < 1e-9);
        assert!((variation.quote.suggested_price - 120.0).abs() < 1e-9);
    }

    #[test]
    fn margin_classification_thresholds() {
        assert_eq!(classify_margin(-1.0, -5.0, 25.0), MarginStatus::Negative);
        assert_eq!(classify_margin(5.0, 20.0, 25.0), MarginStatus::Low);
        assert_eq!(classify_margin(5.0, 24.8, 25.0), MarginStatus::Good);
        assert_eq!(classify_margin(5.0, 25.4, 25.0), MarginStatus::Good);
        assert_eq!(classify_margin(5.0, 28.0, 25.0), MarginStatus::Excellent);
    }

    #[test]
    fn direct_site_charges_gateway_and_shipping_only() {
        let input = PricingInput {
            cost: 50.0,
            markup: 1.5,
            marketplace: Marketplace::DirectSite {
                shipping_cost: 15.0,
            },
            gateway_pct: 4.98,
            ..Default::default()
        };
        let quote = compute_pricing(&input).unwrap().product.unwrap();

        assert_eq!(quote.commission, 0.0);
        assert_eq!(quote.fixed_fee, 0.0);
        assert!((quote.shipping_cost - 15.0).abs() < 1e-9);
        assert!((quote.gateway_cost - 75.0 * 0.0498).abs() < 1e-9);
        assert!(quote.tax_description.contains("gateway"));
    }

    #[test]
    fn tax_description_reads_like_the_marketplace_schedule() {
        let mut input = shopee_input(100.0, 2.0, 1.5);
        if let Marketplace::Shopee {
            free_shipping_program,
            extra_commission_pct,
        } = &mut input.marketplace
        {
            *free_shipping_program = true;
            *extra_commission_pct = 10.0;
        }
        let quote = compute_pricing(&input).unwrap().product.unwrap();
        assert_eq!(
            quote.tax_description,
            "14% comissão + 6% frete grátis + 10% (Extra) + R$ 4.00 (Tarifa Fixa Shopee)"
        );

        let ml = PricingInput {
            cost: 20.0,
            markup: 1.5,
            marketplace: Marketplace::MercadoLivre {
                tier: AdTier::Classico,
                category: MlCategory::Eletronicos,
            },
            ..Default::default()
        };
        let quote = compute_pricing(&ml).unwrap().product.unwrap();
        // Price 30 sits in the 29–50 bracket.
        assert_eq!(
            quote.tax_description,
            "12% comissão + R$ 6.50 (Tarifa Fixa Mercado Livre)"
        );
    }
}
