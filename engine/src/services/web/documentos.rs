// Handlers for /contrato and /recibo (document generators).
//
// No calculator runs here: the fields go through the document formatter,
// which never fails, so a submission always renders a populated document.
use axum::extract::{Form, State};
use axum::response::Html;
use chrono::Local;
use serde::Deserialize;

use super::{views, AppState};
use crate::documents::{self, ContractInput, ReceiptInput};
use shared::utils::brazilian_format as fmt;

#[derive(Debug, Deserialize)]
pub struct ContratoForm {
    pub contratante: Option<String>,
    pub contratante_doc: Option<String>,
    pub contratado: Option<String>,
    pub contratado_doc: Option<String>,
    pub servico: Option<String>,
    pub cidade: Option<String>,
    pub valor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReciboForm {
    pub pagador: Option<String>,
    pub pagador_doc: Option<String>,
    pub beneficiario: Option<String>,
    pub referente: Option<String>,
    pub cidade: Option<String>,
    pub valor: Option<String>,
}

pub async fn contract_form(State(state): State<AppState>) -> Html<String> {
    Html(views::contrato_page(&state.settings, None))
}

pub async fn contract_submit(
    State(state): State<AppState>,
    Form(form): Form<ContratoForm>,
) -> Html<String> {
    let input = ContractInput {
        contractor: form.contratante,
        contractor_doc: form.contratante_doc,
        contractee: form.contratado,
        contractee_doc: form.contratado_doc,
        service: form.servico,
        city: form.cidade,
        amount: fmt::parse_optional(form.valor.as_deref()),
    };
    let document = documents::build_contract(&input, Local::now().date_naive());
    tracing::info!(route = "/contrato", "Generated contract document");
    Html(views::contrato_page(&state.settings, Some(&document)))
}

pub async fn receipt_form(State(state): State<AppState>) -> Html<String> {
    Html(views::recibo_page(&state.settings, None))
}

pub async fn receipt_submit(
    State(state): State<AppState>,
    Form(form): Form<ReciboForm>,
) -> Html<String> {
    let input = ReceiptInput {
        payer: form.pagador,
        payer_doc: form.pagador_doc,
        beneficiary: form.beneficiario,
        reference: form.referente,
        city: form.cidade,
        amount: fmt::parse_optional(form.valor.as_deref()),
    };
    let document = documents::build_receipt(&input, Local::now().date_naive());
    tracing::info!(route = "/recibo", "Generated receipt document");
    Html(views::recibo_page(&state.settings, Some(&document)))
}
