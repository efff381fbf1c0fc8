//! Pricing domain logic. Nothing in here knows about the UI.

pub mod app_state;
pub mod entities;
pub mod fees;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::{AppState, CalculatorPrefs, PersistedState};
#[allow(unused_imports)]
pub use entities::{
    AdTier, AdsParams, GatewayProvider, GatewaySettings, MarginStatus, Marketplace, MlCategory,
    PaymentMethod, PriceDelta, PriceQuote, PricingInput, PricingResult, ReturnLossProjection,
    Variation, VariationQuote,
};
#[allow(unused_imports)]
pub use pricing::{
    ads_cost_per_sale, classify_margin, compute_pricing, price_delta, price_quote,
    return_loss_projection, reverse_conversion_rate, DEFAULT_COMPETITOR_FACTOR,
};
