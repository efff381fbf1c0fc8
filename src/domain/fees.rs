#![allow(dead_code)]

//! Marketplace fee schedules and lookup helpers.
//!
//! Everything here is policy data: a snapshot of the commission tables the
//! marketplaces published for 2024/2025. Rates change without notice, so
//! they live in this one module and the resolver in `pricing.rs` never
//! hardcodes a percentage.

use super::entities::{
    AdTier, GatewayProvider, GatewaySettings, Marketplace, MlCategory, PaymentMethod,
};

/// 12% comissão + 2% taxa de transação.
pub const SHOPEE_BASE_PCT: f64 = 14.0;
/// Surcharge for sellers enrolled in the free-shipping program.
pub const SHOPEE_FREE_SHIPPING_PCT: f64 = 6.0;
/// The commission *amount* never exceeds this, whatever the rate.
pub const SHOPEE_COMMISSION_CAP: f64 = 100.0;
pub const SHOPEE_FIXED_FEE: f64 = 4.0;

/// Mercado Livre waives the fixed fee at and above this price.
pub const ML_FIXED_FEE_WAIVER: f64 = 79.0;

/// Commission rate for a Mercado Livre (tier, category) pair.
pub fn ml_commission_pct(tier: AdTier, category: MlCategory) -> f64 {
    use MlCategory::*;
    match tier {
        AdTier::Gratis => 0.0,
        AdTier::Classico => match category {
            Eletronicos | Celulares | Informatica | Livros => 12.0,
            Moda | Calcados | Relogios => 16.0,
            Casa | Moveis | Ferramentas | Automotivo => 13.0,
            Beleza | Esportes | Brinquedos | Pet => 14.0,
        },
        AdTier::Premium => match category {
            Eletronicos | Celulares | Informatica | Livros => 17.0,
            Moda | Calcados | Relogios | Beleza | Esportes | Brinquedos | Pet => 19.0,
            Casa | Moveis | Ferramentas | Automotivo => 18.0,
        },
    }
}

/// Typical cost-per-click for a category, used to prefill the ads form.
pub fn ml_category_cpc(category: MlCategory) -> f64 {
    use MlCategory::*;
    match category {
        Eletronicos | Celulares | Informatica => 0.40,
        Moda | Calcados | Relogios => 0.35,
        Casa | Moveis | Ferramentas => 0.30,
        Beleza | Esportes | Brinquedos | Pet => 0.32,
        Livros | Automotivo => 0.25,
    }
}

/// How a fixed fee behaves inside one price bracket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BracketFee {
    Flat(f64),
    /// Fee charged as a share of the selling price (low-price penalty).
    ShareOfPrice(f64),
}

/// Price bracket for the fixed-fee ladder. `lower` inclusive, `upper`
/// exclusive (`f64::INFINITY` for the top bracket).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeeBracket {
    pub lower: f64,
    pub upper: f64,
    pub fee: BracketFee,
}

impl FeeBracket {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower && price < self.upper
    }

    pub fn fee_at(&self, price: f64) -> f64 {
        match self.fee {
            BracketFee::Flat(fee) => fee,
            BracketFee::ShareOfPrice(share) => price * share,
        }
    }
}

/// Mercado Livre fixed-fee ladder, descending price order. Listings priced
/// below R$ 12,50 are charged half the price instead of a flat amount.
pub const ML_FEE_BRACKETS: [FeeBracket; 5] = [
    FeeBracket {
        lower: ML_FIXED_FEE_WAIVER,
        upper: f64::INFINITY,
        fee: BracketFee::Flat(0.0),
    },
    FeeBracket {
        lower: 50.0,
        upper: ML_FIXED_FEE_WAIVER,
        fee: BracketFee::Flat(6.75),
    },
    FeeBracket {
        lower: 29.0,
        upper: 50.0,
        fee: BracketFee::Flat(6.50),
    },
    FeeBracket {
        lower: 12.5,
        upper: 29.0,
        fee: BracketFee::Flat(6.25),
    },
    FeeBracket {
        lower: 0.0,
        upper: 12.5,
        fee: BracketFee::ShareOfPrice(0.5),
    },
];

/// Shopee: R$ 4,00 flat, except below R$ 8 where half the price applies.
pub const SHOPEE_FEE_BRACKETS: [FeeBracket; 2] = [
    FeeBracket {
        lower: 8.0,
        upper: f64::INFINITY,
        fee: BracketFee::Flat(SHOPEE_FIXED_FEE),
    },
    FeeBracket {
        lower: 0.0,
        upper: 8.0,
        fee: BracketFee::ShareOfPrice(0.5),
    },
];

/// Channels without a fixed per-sale fee.
pub const NO_FEE_BRACKETS: [FeeBracket; 1] = [FeeBracket {
    lower: 0.0,
    upper: f64::INFINITY,
    fee: BracketFee::Flat(0.0),
}];

/// Fixed-fee schedule for a marketplace, in descending price order (the
/// order the suggested-price search walks them in).
pub fn fee_brackets(marketplace: &Marketplace) -> &'static [FeeBracket] {
    match marketplace {
        Marketplace::Shopee { .. } => &SHOPEE_FEE_BRACKETS,
        Marketplace::MercadoLivre { tier, .. } => {
            if *tier == AdTier::Gratis {
                &NO_FEE_BRACKETS
            } else {
                &ML_FEE_BRACKETS
            }
        }
        Marketplace::TiktokShop { .. } | Marketplace::DirectSite { .. } => &NO_FEE_BRACKETS,
    }
}

/// Commission rate (percent of selling price) for a marketplace.
pub fn commission_pct(marketplace: &Marketplace) -> f64 {
    match marketplace {
        Marketplace::Shopee {
            free_shipping_program,
            extra_commission_pct,
        } => {
            let mut pct = SHOPEE_BASE_PCT;
            if *free_shipping_program {
                pct += SHOPEE_FREE_SHIPPING_PCT;
            }
            pct + extra_commission_pct.max(0.0)
        }
        Marketplace::MercadoLivre { tier, category } => ml_commission_pct(*tier, *category),
        Marketplace::TiktokShop { commission_pct } => commission_pct.max(0.0),
        Marketplace::DirectSite { .. } => 0.0,
    }
}

/// Commission amount at a concrete price. Shopee clamps the amount at
/// R$ 100 absolute; the other channels are uncapped.
pub fn commission_at(marketplace: &Marketplace, price: f64) -> f64 {
    let raw = price * commission_pct(marketplace) / 100.0;
    match marketplace {
        Marketplace::Shopee { .. } => raw.min(SHOPEE_COMMISSION_CAP),
        _ => raw,
    }
}

/// Fixed fee at a concrete price, resolved through the bracket ladder.
pub fn fixed_fee_at(marketplace: &Marketplace, price: f64) -> f64 {
    fee_brackets(marketplace)
        .iter()
        .find(|bracket| bracket.contains(price))
        .map(|bracket| bracket.fee_at(price))
        .unwrap_or(0.0)
}

/// Recommended margin (percent) by total cost band. Covers packaging and
/// operational overhead on top of the marketplace take.
pub fn recommended_margin_pct(total_cost: f64) -> f64 {
    if total_cost <= 30.0 {
        30.0
    } else if total_cost <= 50.0 {
        25.0
    } else if total_cost <= 80.0 {
        22.0
    } else if total_cost <= 150.0 {
        19.0
    } else {
        16.0
    }
}

/// Gateway fee (percent of the charged amount) per provider and method.
/// Credit card rates climb with the installment count the seller absorbs.
pub fn gateway_fee_pct(settings: &GatewaySettings) -> f64 {
    let base = match (settings.provider, settings.method) {
        (GatewayProvider::MercadoPago, PaymentMethod::Pix) => 0.99,
        (GatewayProvider::MercadoPago, PaymentMethod::Boleto) => 3.49,
        (GatewayProvider::MercadoPago, PaymentMethod::CreditCard) => 4.98,
        (GatewayProvider::PagSeguro, PaymentMethod::Pix) => 0.99,
        (GatewayProvider::PagSeguro, PaymentMethod::Boleto) => 3.99,
        (GatewayProvider::PagSeguro, PaymentMethod::CreditCard) => 4.99,
        (GatewayProvider::Stripe, PaymentMethod::Pix) => 1.19,
        (GatewayProvider::Stripe, PaymentMethod::Boleto) => 3.45,
        (GatewayProvider::Stripe, PaymentMethod::CreditCard) => 3.99,
    };

    if settings.method != PaymentMethod::CreditCard {
        return base;
    }

    match settings.installments {
        0 | 1 => base,
        2..=6 => base + 2.99,
        _ => base + 5.49,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_margin_steps() {
        assert_eq!(recommended_margin_pct(10.0), 30.0);
        assert_eq!(recommended_margin_pct(30.0), 30.0);
        assert_eq!(recommended_margin_pct(30.01), 25.0);
        assert_eq!(recommended_margin_pct(50.0), 25.0);
        assert_eq!(recommended_margin_pct(80.0), 22.0);
        assert_eq!(recommended_margin_pct(150.0), 19.0);
        assert_eq!(recommended_margin_pct(500.0), 16.0);
    }

    #[test]
    fn recommended_margin_never_increases_with_cost() {
        let mut previous = f64::INFINITY;
        let mut cost = 1.0;
        while cost < 400.0 {
            let margin = recommended_margin_pct(cost);
            assert!(margin <= previous, "margin rose at cost {cost}");
            previous = margin;
            cost += 0.5;
        }
    }

    #[test]
    fn shopee_fixed_fee_ladder() {
        let shopee = Marketplace::Shopee {
            free_shipping_program: false,
            extra_commission_pct: 0.0,
        };
        assert_eq!(fixed_fee_at(&shopee, 8.0), 4.0);
        assert_eq!(fixed_fee_at(&shopee, 153.0), 4.0);
        assert_eq!(fixed_fee_at(&shopee, 6.0), 3.0);
        assert_eq!(fixed_fee_at(&shopee, 7.99), 7.99 * 0.5);
    }

    #[test]
    fn ml_fixed_fee_ladder() {
        let ml = Marketplace::MercadoLivre {
            tier: AdTier::Classico,
            category: MlCategory::Eletronicos,
        };
        assert_eq!(fixed_fee_at(&ml, 45.0), 6.50);
        assert_eq!(fixed_fee_at(&ml, 12.0), 6.0);
        assert_eq!(fixed_fee_at(&ml, 79.0), 0.0);
        assert_eq!(fixed_fee_at(&ml, 20.0), 6.25);
        assert_eq!(fixed_fee_at(&ml, 60.0), 6.75);
    }

    #[test]
    fn ml_gratis_tier_has_no_fees() {
        let ml = Marketplace::MercadoLivre {
            tier: AdTier::Gratis,
            category: MlCategory::Moda,
        };
        assert_eq!(commission_pct(&ml), 0.0);
        assert_eq!(fixed_fee_at(&ml, 45.0), 0.0);
    }

    #[test]
    fn shopee_commission_amount_caps_at_100() {
        let shopee = Marketplace::Shopee {
            free_shipping_program: true,
            extra_commission_pct: 10.0,
        };
        // 30% of 2000 would be 600; the cap wins.
        assert_eq!(commission_at(&shopee, 2000.0), 100.0);
        // Below the cap the plain rate applies.
        assert!((commission_at(&shopee, 100.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn shopee_rate_composition() {
        let base = Marketplace::Shopee {
            free_shipping_program: false,
            extra_commission_pct: 0.0,
        };
        let full = Marketplace::Shopee {
            free_shipping_program: true,
            extra_commission_pct: 10.0,
        };
        assert_eq!(commission_pct(&base), 14.0);
        assert_eq!(commission_pct(&full), 30.0);
    }

    #[test]
    fn ml_commission_table_matches_published_rates() {
        assert_eq!(
            ml_commission_pct(AdTier::Classico, MlCategory::Eletronicos),
            12.0
        );
        assert_eq!(ml_commission_pct(AdTier::Classico, MlCategory::Moda), 16.0);
        assert_eq!(
            ml_commission_pct(AdTier::Premium, MlCategory::Eletronicos),
            17.0
        );
        assert_eq!(ml_commission_pct(AdTier::Premium, MlCategory::Casa), 18.0);
        for category in MlCategory::ALL {
            assert_eq!(ml_commission_pct(AdTier::Gratis, category), 0.0);
            assert!(
                ml_commission_pct(AdTier::Premium, category)
                    > ml_commission_pct(AdTier::Classico, category)
            );
        }
    }

    #[test]
    fn gateway_credit_card_installment_steps() {
        let mut settings = GatewaySettings {
            provider: GatewayProvider::MercadoPago,
            method: PaymentMethod::CreditCard,
            installments: 1,
        };
        let upfront = gateway_fee_pct(&settings);
        settings.installments = 6;
        assert!(gateway_fee_pct(&settings) > upfront);
        settings.installments = 12;
        assert!(gateway_fee_pct(&settings) > upfront + 2.99);
        settings.method = PaymentMethod::Pix;
        assert_eq!(gateway_fee_pct(&settings), 0.99);
    }
}
