// Handlers for /pecuaria (basic margin) and /pecuaria-plus (feedlot).
use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use super::{views, AppState};
use crate::calculators::livestock::{self, FeedlotInput, LivestockInput};
use shared::utils::brazilian_format as fmt;

#[derive(Debug, Deserialize)]
pub struct PecuariaForm {
    pub cabecas: Option<String>,
    pub peso_entrada: Option<String>,
    pub peso_saida: Option<String>,
    pub preco_compra: Option<String>,
    pub preco_venda: Option<String>,
    pub custo_fixo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PecuariaPlusForm {
    pub cabecas: Option<String>,
    pub peso_entrada: Option<String>,
    pub peso_saida: Option<String>,
    pub preco_compra: Option<String>,
    pub preco_venda: Option<String>,
    pub custo_fixo: Option<String>,
    pub dias_cocho: Option<String>,
    pub custo_diario: Option<String>,
}

fn livestock_input(form: &PecuariaForm) -> LivestockInput {
    LivestockInput {
        head_count: fmt::parse_optional(form.cabecas.as_deref()),
        entry_weight: fmt::parse_optional(form.peso_entrada.as_deref()),
        exit_weight: fmt::parse_optional(form.peso_saida.as_deref()),
        buy_price_per_arroba: fmt::parse_optional(form.preco_compra.as_deref()),
        sell_price_per_arroba: fmt::parse_optional(form.preco_venda.as_deref()),
        flat_cost_per_head: fmt::parse_optional(form.custo_fixo.as_deref()),
    }
}

pub async fn form(State(state): State<AppState>) -> Html<String> {
    Html(views::pecuaria_page(&state.settings, None, false))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<PecuariaForm>,
) -> Html<String> {
    let result = livestock::calculate(livestock_input(&form));
    tracing::info!(route = "/pecuaria", computed = result.is_some(), "Processed livestock form");
    Html(views::pecuaria_page(&state.settings, result.as_ref(), true))
}

pub async fn feedlot_form(State(state): State<AppState>) -> Html<String> {
    Html(views::pecuaria_plus_page(&state.settings, None, false))
}

pub async fn feedlot_submit(
    State(state): State<AppState>,
    Form(form): Form<PecuariaPlusForm>,
) -> Html<String> {
    let input = FeedlotInput {
        livestock: LivestockInput {
            head_count: fmt::parse_optional(form.cabecas.as_deref()),
            entry_weight: fmt::parse_optional(form.peso_entrada.as_deref()),
            exit_weight: fmt::parse_optional(form.peso_saida.as_deref()),
            buy_price_per_arroba: fmt::parse_optional(form.preco_compra.as_deref()),
            sell_price_per_arroba: fmt::parse_optional(form.preco_venda.as_deref()),
            flat_cost_per_head: fmt::parse_optional(form.custo_fixo.as_deref()),
        },
        days_on_feed: fmt::parse_optional(form.dias_cocho.as_deref()),
        daily_cost: fmt::parse_optional(form.custo_diario.as_deref()),
    };
    let result = livestock::calculate_feedlot(input);
    tracing::info!(route = "/pecuaria-plus", computed = result.is_some(), "Processed feedlot form");
    Html(views::pecuaria_plus_page(&state.settings, result.as_ref(), true))
}
