pub mod breakdown_table;
pub mod kpi_card;
pub mod margin_badge;
pub mod toast;
pub mod variation_table;
