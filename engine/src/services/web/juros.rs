// Handlers for /juros (compound interest with penalty).
use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use super::{views, AppState};
use crate::calculators::interest::{self, InterestInput};
use shared::utils::brazilian_format as fmt;

#[derive(Debug, Deserialize)]
pub struct JurosForm {
    pub valor: Option<String>,
    pub taxa: Option<String>,
    pub multa: Option<String>,
    pub meses: Option<String>,
}

pub async fn form(State(state): State<AppState>) -> Html<String> {
    Html(views::juros_page(&state.settings, None, false))
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<JurosForm>) -> Html<String> {
    let input = InterestInput {
        principal: fmt::parse_optional(form.valor.as_deref()),
        monthly_rate: fmt::parse_percent_optional(form.taxa.as_deref()),
        penalty_rate: fmt::parse_percent_optional(form.multa.as_deref()),
        months: fmt::parse_optional(form.meses.as_deref()),
    };
    let result = interest::calculate(input);
    tracing::info!(route = "/juros", computed = result.is_some(), "Processed interest form");
    Html(views::juros_page(&state.settings, result.as_ref(), true))
}
