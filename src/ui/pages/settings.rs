use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{fees, AppState, CalculatorPrefs, GatewayProvider, GatewaySettings, PaymentMethod},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{check_for_update, version_label, APP_REPO_URL},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let gateway = state.with(|st| st.gateway);
    let prefs = state.with(|st| st.prefs.clone());

    let mut provider_key = use_signal(|| gateway.provider.key().to_string());
    let mut method_key = use_signal(|| gateway.method.key().to_string());
    let mut installments_input = use_signal(|| gateway.installments.to_string());
    let mut factor_input = use_signal(|| format!("{:.2}", prefs.competitor_factor));

    let update_status = use_signal(|| None::<(String, &'static str)>);
    let update_line = update_status();

    // Live preview of the fee the current selection would cost.
    let preview = GatewaySettings {
        provider: GatewayProvider::from_key(&provider_key()).unwrap_or_default(),
        method: PaymentMethod::from_key(&method_key()).unwrap_or_default(),
        installments: installments_input().trim().parse().unwrap_or(1),
    };
    let preview_pct = fees::gateway_fee_pct(&preview);
    let is_credit = preview.method == PaymentMethod::CreditCard;

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            match parse_settings(provider_key(), method_key(), installments_input(), factor_input()) {
                Ok((gateway, factor)) => {
                    state.with_mut(|st| {
                        st.gateway = gateway;
                        st.prefs.competitor_factor = factor;
                    });
                    persist_user_state(&state);
                    push_toast(toasts.clone(), ToastKind::Success, "Configurações salvas.");
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let gateway = GatewaySettings::default();
            let prefs = CalculatorPrefs::default();
            provider_key.set(gateway.provider.key().to_string());
            method_key.set(gateway.method.key().to_string());
            installments_input.set(gateway.installments.to_string());
            factor_input.set(format!("{:.2}", prefs.competitor_factor));
            state.with_mut(|st| {
                st.gateway = gateway;
                st.prefs = prefs;
            });
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Configurações restauradas para o padrão.",
            );
        }
    };

    let on_check_update = move |_| {
        let mut status = update_status.clone();
        status.set(Some(("Verificando...".to_string(), "mt-3 text-sm text-slate-400")));
        spawn(async move {
            let line = match check_for_update().await {
                Ok(info) if info.update_available() => {
                    (info.to_string(), "mt-3 text-sm font-semibold text-amber-300")
                }
                Ok(info) => (info.to_string(), "mt-3 text-sm text-emerald-300"),
                Err(err) => (
                    format!("Falha ao verificar: {err}"),
                    "mt-3 text-sm text-rose-300",
                ),
            };
            status.set(Some(line));
        });
    };

    rsx! {
        div { class: "space-y-8",
            div {
                h1 { class: "text-2xl font-bold text-slate-100", "Configurações" }
                p { class: "mt-1 text-sm text-slate-500",
                    "Gateway de pagamento do site próprio e parâmetros de precificação."
                }
            }

            section { class: "{theme::panel()} p-6",
                h2 { class: "{theme::section_title()}", "Gateway de Pagamento" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    div {
                        label { class: "{theme::label_class()}", "Provedor" }
                        select {
                            class: "{theme::select_class()}",
                            value: provider_key(),
                            onchange: move |evt| provider_key.set(evt.value()),
                            for provider in GatewayProvider::ALL {
                                option { value: "{provider.key()}", "{provider.name()}" }
                            }
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Método" }
                        select {
                            class: "{theme::select_class()}",
                            value: method_key(),
                            onchange: move |evt| method_key.set(evt.value()),
                            for method in PaymentMethod::ALL {
                                option { value: "{method.key()}", "{method.name()}" }
                            }
                        }
                    }
                    if is_credit {
                        div {
                            label { class: "{theme::label_class()}", "Parcelas" }
                            input {
                                class: "{theme::input_class()}",
                                inputmode: "numeric",
                                value: installments_input(),
                                oninput: move |evt| installments_input.set(evt.value()),
                            }
                        }
                    }
                }
                p { class: "mt-4 text-sm text-slate-400",
                    "Taxa resultante: "
                    span { class: "font-semibold text-emerald-300", "{preview_pct:.2}%" }
                    " sobre o valor cobrado no site próprio."
                }
            }

            section { class: "{theme::panel()} p-6",
                h2 { class: "{theme::section_title()}", "Precificação" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "{theme::label_class()}", "Fator sobre preço do concorrente (1.10 a 1.25)" }
                        input {
                            class: "{theme::input_class()}",
                            inputmode: "decimal",
                            value: factor_input(),
                            oninput: move |evt| factor_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary()}", onclick: on_apply, "Salvar" }
                    button { class: "{theme::btn_secondary()}", onclick: on_reset, "Restaurar Padrão" }
                }
            }

            section { class: "{theme::panel()} p-6",
                h2 { class: "{theme::section_title()}", "Atualizações" }
                p { class: "mt-2 text-sm text-slate-400", "Versão instalada: {version_label()}" }
                div { class: "mt-3",
                    button { class: "{theme::btn_secondary()}", onclick: on_check_update, "Verificar Atualizações" }
                }
                if let Some((message, class)) = update_line {
                    p { class: "{class}", "{message}" }
                }
                p { class: "mt-4 text-xs text-slate-600",
                    "Código e releases em "
                    a {
                        href: APP_REPO_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        class: "text-pink-400 hover:text-pink-300",
                        "{APP_REPO_URL}"
                    }
                }
            }
        }
    }
}

fn parse_settings(
    provider_key: String,
    method_key: String,
    installments: String,
    factor: String,
) -> Result<(GatewaySettings, f64), String> {
    let provider = GatewayProvider::from_key(&provider_key)
        .ok_or_else(|| "Provedor de gateway desconhecido".to_string())?;
    let method = PaymentMethod::from_key(&method_key)
        .ok_or_else(|| "Método de pagamento desconhecido".to_string())?;
    let installments: u8 = installments
        .trim()
        .parse()
        .map_err(|_| "Parcelas deve ser um número entre 1 e 12".to_string())?;
    if !(1..=12).contains(&installments) {
        return Err("Parcelas deve estar entre 1 e 12".to_string());
    }
    let factor: f64 = factor
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| "Fator do concorrente deve ser numérico".to_string())?;
    if !(1.0..=2.0).contains(&factor) {
        return Err("Fator do concorrente deve estar entre 1.0 e 2.0".to_string());
    }

    Ok((
        GatewaySettings {
            provider,
            method,
            installments,
        },
        factor,
    ))
}

#[cfg(test)]
mod tests {
    use super::parse_settings;

    #[test]
    fn rejects_out_of_range_settings() {
        assert!(parse_settings(
            "mercadopago".into(),
            "cartao".into(),
            "13".into(),
            "1.15".into()
        )
        .is_err());
        assert!(parse_settings(
            "mercadopago".into(),
            "pix".into(),
            "1".into(),
            "0.5".into()
        )
        .is_err());
        assert!(parse_settings(
            "stripe".into(),
            "boleto".into(),
            "1".into(),
            "1,2".into()
        )
        .is_ok());
    }
}
