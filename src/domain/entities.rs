#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Mercado Livre ad tier. Trades commission rate for listing visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdTier {
    Gratis,
    #[default]
    Classico,
    Premium,
}

impl AdTier {
    pub fn name(&self) -> &'static str {
        match self {
            AdTier::Gratis => "Grátis",
            AdTier::Classico => "Clássico",
            AdTier::Premium => "Premium",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AdTier::Gratis => "gratis",
            AdTier::Classico => "classico",
            AdTier::Premium => "premium",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.key() == key)
    }

    pub const ALL: [AdTier; 3] = [AdTier::Gratis, AdTier::Classico, AdTier::Premium];
}

/// Mercado Livre product category. A closed enum: the commission table in
/// `fees.rs` is total over these, so an unknown category cannot reach the
/// resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MlCategory {
    #[default]
    Eletronicos,
    Celulares,
    Informatica,
    Moda,
    Calcados,
    Relogios,
    Casa,
    Moveis,
    Beleza,
    Esportes,
    Brinquedos,
    Ferramentas,
    Pet,
    Livros,
    Automotivo,
}

impl MlCategory {
    pub fn name(&self) -> &'static str {
        match self {
            MlCategory::Eletronicos => "Eletrônicos",
            MlCategory::Celulares => "Celulares e Acessórios",
            MlCategory::Informatica => "Informática",
            MlCategory::Moda => "Moda e Acessórios",
            MlCategory::Calcados => "Calçados",
            MlCategory::Relogios => "Relógios",
            MlCategory::Casa => "Casa e Decoração",
            MlCategory::Moveis => "Móveis",
            MlCategory::Beleza => "Beleza e Cuidado Pessoal",
            MlCategory::Esportes => "Esportes e Fitness",
            MlCategory::Brinquedos => "Brinquedos",
            MlCategory::Ferramentas => "Ferramentas",
            MlCategory::Pet => "Pet Shop",
            MlCategory::Livros => "Livros",
            MlCategory::Automotivo => "Automotivo",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MlCategory::Eletronicos => "eletronicos",
            MlCategory::Celulares => "celulares",
            MlCategory::Informatica => "informatica",
            MlCategory::Moda => "moda",
            MlCategory::Calcados => "calcados",
            MlCategory::Relogios => "relogios",
            MlCategory::Casa => "casa",
            MlCategory::Moveis => "moveis",
            MlCategory::Beleza => "beleza",
            MlCategory::Esportes => "esportes",
            MlCategory::Brinquedos => "brinquedos",
            MlCategory::Ferramentas => "ferramentas",
            MlCategory::Pet => "pet",
            MlCategory::Livros => "livros",
            MlCategory::Automotivo => "automotivo",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub const ALL: [MlCategory; 15] = [
        MlCategory::Eletronicos,
        MlCategory::Celulares,
        MlCategory::Informatica,
        MlCategory::Moda,
        MlCategory::Calcados,
        MlCategory::Relogios,
        MlCategory::Casa,
        MlCategory::Moveis,
        MlCategory::Beleza,
        MlCategory::Esportes,
        MlCategory::Brinquedos,
        MlCategory::Ferramentas,
        MlCategory::Pet,
        MlCategory::Livros,
        MlCategory::Automotivo,
    ];
}

/// Sales channel plus the fee parameters that are specific to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Marketplace {
    Shopee {
        free_shipping_program: bool,
        extra_commission_pct: f64,
    },
    MercadoLivre {
        tier: AdTier,
        category: MlCategory,
    },
    /// Flat user-entered commission, no fixed fee.
    TiktokShop { commission_pct: f64 },
    /// Own website: no marketplace commission, only gateway + flat shipping.
    DirectSite { shipping_cost: f64 },
}

impl Default for Marketplace {
    fn default() -> Self {
        Marketplace::MercadoLivre {
            tier: AdTier::default(),
            category: MlCategory::default(),
        }
    }
}

impl Marketplace {
    pub fn label(&self) -> &'static str {
        match self {
            Marketplace::Shopee { .. } => "Shopee",
            Marketplace::MercadoLivre { .. } => "Mercado Livre",
            Marketplace::TiktokShop { .. } => "Tiktok Shop",
            Marketplace::DirectSite { .. } => "Site Próprio",
        }
    }

    /// Logistics channel tied to the marketplace. Display only.
    pub fn delivery_mode(&self) -> &'static str {
        match self {
            Marketplace::Shopee { .. } => "Shopee Envios",
            Marketplace::MercadoLivre { .. } => "Mercado Envios",
            Marketplace::TiktokShop { .. } => "Tiktokshop",
            Marketplace::DirectSite { .. } => "AliExpress Standard Shipping",
        }
    }
}

/// Paid-traffic campaign parameters (CPA and reverse conversion math).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdsParams {
    pub cpc: f64,
    pub daily_budget: f64,
    pub sales_count: f64,
}

/// One product variation priced under the shared marketplace settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: String,
    pub label: String,
    pub cost: f64,
    pub markup: f64,
}

/// Full set of user-supplied parameters for one pricing computation.
/// Missing/non-numeric form fields are coerced to 0 before they land here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricingInput {
    pub cost: f64,
    pub packaging_cost: f64,
    /// 0 = auto (target the recommended margin); otherwise a direct
    /// cost-to-price multiplier.
    pub markup: f64,
    pub marketplace: Marketplace,
    pub gateway_pct: f64,
    pub paid_traffic_pct: f64,
    pub ads: AdsParams,
    /// Manual selling price; > 0 overrides the suggested price for all
    /// profit accounting.
    pub manual_price: f64,
    pub competitor_price: f64,
    pub competitor_factor: f64,
    pub return_rate_pct: f64,
    pub return_batch_size: u32,
    pub emergency_reserve: f64,
    pub variations: Vec<Variation>,
}

/// Coarse classification of the realized margin against the recommended one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginStatus {
    Negative,
    Low,
    Good,
    Excellent,
}

impl MarginStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MarginStatus::Negative => "Prejuízo",
            MarginStatus::Low => "Margem Baixa",
            MarginStatus::Good => "Margem Boa",
            MarginStatus::Excellent => "Margem Excelente",
        }
    }
}

/// Resolved price plus the complete fee/profit breakdown at that price.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceQuote {
    pub suggested_price: f64,
    /// Manual price when one was entered, else the suggested price. All
    /// deductions below are accounted against this value.
    pub effective_price: f64,
    pub total_cost: f64,
    pub commission_pct: f64,
    pub commission: f64,
    pub fixed_fee: f64,
    pub gateway_cost: f64,
    pub paid_traffic_cost: f64,
    pub ads_cost_per_sale: f64,
    pub shipping_cost: f64,
    pub total_fees: f64,
    pub net_revenue: f64,
    pub actual_margin_pct: f64,
    pub recommended_margin_pct: f64,
    /// Maximum per-sale ad spend that still breaks even.
    pub break_even_cpa: f64,
    pub tax_description: String,
    pub status: MarginStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariationQuote {
    pub id: String,
    pub label: String,
    pub quote: PriceQuote,
}

/// Difference between the suggested and a manually entered price, with the
/// magnitude always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PriceDelta {
    Discount(f64),
    Surcharge(f64),
}

impl PriceDelta {
    pub fn label(&self) -> &'static str {
        match self {
            PriceDelta::Discount(_) => "Desconto Aplicado",
            PriceDelta::Surcharge(_) => "Acréscimo Aplicado",
        }
    }

    pub fn magnitude(&self) -> f64 {
        match self {
            PriceDelta::Discount(value) | PriceDelta::Surcharge(value) => *value,
        }
    }
}

/// Expected loss from returned units over a batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnLossProjection {
    pub batch_size: u32,
    pub expected_returns: u32,
    pub expected_loss: f64,
}

/// Everything the resolver produces for one input set.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingResult {
    /// Absent when the base cost is 0 (variations may still be priced).
    pub product: Option<PriceQuote>,
    pub variations: Vec<VariationQuote>,
    pub reverse_conversion_pct: Option<f64>,
    pub price_delta: Option<PriceDelta>,
    pub competitor_value: Option<f64>,
    pub return_loss: Option<ReturnLossProjection>,
}

/// Payment gateway provider for the own-site channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatewayProvider {
    #[default]
    MercadoPago,
    PagSeguro,
    Stripe,
}

impl GatewayProvider {
    pub fn name(&self) -> &'static str {
        match self {
            GatewayProvider::MercadoPago => "Mercado Pago",
            GatewayProvider::PagSeguro => "PagSeguro",
            GatewayProvider::Stripe => "Stripe",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            GatewayProvider::MercadoPago => "mercadopago",
            GatewayProvider::PagSeguro => "pagseguro",
            GatewayProvider::Stripe => "stripe",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.key() == key)
    }

    pub const ALL: [GatewayProvider; 3] = [
        GatewayProvider::MercadoPago,
        GatewayProvider::PagSeguro,
        GatewayProvider::Stripe,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Pix,
    Boleto,
    CreditCard,
}

impl PaymentMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Boleto => "Boleto",
            PaymentMethod::CreditCard => "Cartão de Crédito",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::Boleto => "boleto",
            PaymentMethod::CreditCard => "cartao",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.key() == key)
    }

    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Pix,
        PaymentMethod::Boleto,
        PaymentMethod::CreditCard,
    ];
}

/// Gateway selection; the resulting fee percentage comes from the lookup in
/// `fees.rs` and reaches the resolver as a plain percentage input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GatewaySettings {
    pub provider: GatewayProvider,
    pub method: PaymentMethod,
    /// Only meaningful for credit card.
    pub installments: u8,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            provider: GatewayProvider::MercadoPago,
            method: PaymentMethod::Pix,
            installments: 1,
        }
    }
}
