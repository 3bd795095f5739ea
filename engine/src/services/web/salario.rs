// Handlers for /salario (INSS + IRRF withholding).
use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use super::{views, AppState};
use crate::calculators::payroll::{self, PayrollInput};
use shared::utils::brazilian_format as fmt;

#[derive(Debug, Deserialize)]
pub struct SalarioForm {
    pub salario_bruto: Option<String>,
    pub dependentes: Option<String>,
}

pub async fn form(State(state): State<AppState>) -> Html<String> {
    Html(views::salario_page(&state.settings, None, false))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SalarioForm>,
) -> Html<String> {
    let input = PayrollInput {
        gross_pay: fmt::parse_optional(form.salario_bruto.as_deref()),
        dependents: fmt::parse_optional(form.dependentes.as_deref()),
    };
    let result = payroll::calculate(input);
    tracing::info!(route = "/salario", computed = result.is_some(), "Processed payroll form");
    Html(views::salario_page(&state.settings, result.as_ref(), true))
}
