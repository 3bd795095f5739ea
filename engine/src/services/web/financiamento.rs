// Handlers for /financiamento (fixed-installment loan).
use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use super::{views, AppState};
use crate::calculators::loan::{self, LoanInput};
use shared::utils::brazilian_format as fmt;

#[derive(Debug, Deserialize)]
pub struct FinanciamentoForm {
    pub valor: Option<String>,
    pub entrada: Option<String>,
    pub taxa: Option<String>,
    pub meses: Option<String>,
}

pub async fn form(State(state): State<AppState>) -> Html<String> {
    Html(views::financiamento_page(&state.settings, None, false))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<FinanciamentoForm>,
) -> Html<String> {
    let input = LoanInput {
        principal: fmt::parse_optional(form.valor.as_deref()),
        down_payment: fmt::parse_optional(form.entrada.as_deref()),
        monthly_rate: fmt::parse_percent_optional(form.taxa.as_deref()),
        months: fmt::parse_optional(form.meses.as_deref()),
    };
    let result = loan::calculate(input);
    tracing::info!(route = "/financiamento", computed = result.is_some(), "Processed loan form");
    Html(views::financiamento_page(&state.settings, result.as_ref(), true))
}
