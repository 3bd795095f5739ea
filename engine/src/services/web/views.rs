// Server-rendered HTML for every page: a shared layout plus one builder per
// route. Presentation only; every number shown here was computed by a
// calculator and formatted by shared::utils::brazilian_format.
use crate::config::settings::AppSettings;
use crate::documents::{ContractDocument, ReceiptDocument};
use chrono::{Datelike, Utc};
use shared::models::{FeedlotResult, InterestResult, LivestockResult, LoanResult, PayrollResult};
use shared::utils::brazilian_format as fmt;

/// Escapes user-entered text before it is embedded in markup.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn percent_display(fraction: f64) -> String {
    if !fraction.is_finite() {
        return fmt::PLACEHOLDER.to_string();
    }
    format!("{}%", fmt::format_decimal(fraction * 100.0, 2))
}

fn layout(settings: &AppSettings, title: &str, body: &str) -> String {
    let site = escape_html(&settings.site_name);
    let year = Utc::now().year();
    format!(
        r#"<!doctype html>
<html lang="pt-br">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title} • {site}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 860px; margin: 0 auto; padding: 0 1rem; }}
    nav a {{ margin-right: .75rem; }}
    label {{ display: block; margin-top: .5rem; }}
    table {{ border-collapse: collapse; margin-top: 1rem; }}
    td, th {{ border: 1px solid #ccc; padding: .3rem .6rem; text-align: left; }}
    .error {{ color: #a00; }}
    .small {{ font-size: .85rem; color: #555; }}
  </style>
</head>
<body>
  <header>
    <div><strong>{site}</strong> <span class="small">• ferramentas automáticas</span></div>
    <nav>
      <a href="/">Início</a>
      <a href="/juros">Juros</a>
      <a href="/pecuaria">Pecuária</a>
      <a href="/contrato">Contrato</a>
      <a href="/recibo">Recibo</a>
      <a href="/financiamento">Financiamento</a>
      <a href="/salario">Salário</a>
      <a href="/pecuaria-plus">Pecuária+</a>
    </nav>
    <hr />
  </header>
  <main>
{body}
  </main>
  <footer>
    <hr />
    <div class="small">© {year} {site}</div>
  </footer>
</body>
</html>"#,
        title = escape_html(title),
        site = site,
        year = year,
        body = body,
    )
}

fn text_input(label: &str, name: &str) -> String {
    format!(
        "    <label>{label} <input type=\"text\" name=\"{name}\" /></label>\n",
        label = label,
        name = name,
    )
}

fn form(action: &str, rows: &[String]) -> String {
    format!(
        "  <form method=\"post\" action=\"{action}\">\n{rows}    <button type=\"submit\">Calcular</button>\n  </form>\n",
        action = action,
        rows = rows.concat(),
    )
}

fn not_computable_note() -> &'static str {
    "  <p class=\"error\">Não foi possível calcular. Verifique os valores informados.</p>\n"
}

fn result_table(title: &str, rows: &[(String, String)]) -> String {
    let mut table = format!("  <h2>{}</h2>\n  <table>\n", escape_html(title));
    for (label, value) in rows {
        table.push_str(&format!(
            "    <tr><th>{}</th><td>{}</td></tr>\n",
            escape_html(label),
            escape_html(value),
        ));
    }
    table.push_str("  </table>\n");
    table
}

pub fn index_page(settings: &AppSettings) -> String {
    let body = "  <h1>Ferramentas</h1>\n  <ul>\n    <li><a href=\"/juros\">Juros compostos com multa</a></li>\n    <li><a href=\"/pecuaria\">Margem de engorda (pecuária)</a></li>\n    <li><a href=\"/pecuaria-plus\">Margem de confinamento (pecuária+)</a></li>\n    <li><a href=\"/financiamento\">Financiamento (parcela fixa)</a></li>\n    <li><a href=\"/salario\">Salário líquido (INSS e IRRF)</a></li>\n    <li><a href=\"/contrato\">Contrato de prestação de serviço</a></li>\n    <li><a href=\"/recibo\">Recibo de pagamento</a></li>\n  </ul>\n";
    layout(settings, "Início", body)
}

pub fn juros_page(
    settings: &AppSettings,
    result: Option<&InterestResult>,
    submitted: bool,
) -> String {
    let mut body = String::from("  <h1>Juros compostos com multa</h1>\n");
    body.push_str(&form(
        "/juros",
        &[
            text_input("Valor devido (R$)", "valor"),
            text_input("Taxa de juros (% ao mês)", "taxa"),
            text_input("Multa (%)", "multa"),
            text_input("Meses de atraso", "meses"),
        ],
    ));
    match result {
        Some(r) => body.push_str(&result_table(
            "Resultado",
            &[
                ("Valor original".to_string(), fmt::format_currency(r.principal)),
                ("Multa".to_string(), percent_display(r.penalty_rate)),
                (
                    "Valor com multa".to_string(),
                    fmt::format_currency(r.principal_with_penalty),
                ),
                ("Taxa".to_string(), fmt::format_percent_monthly(r.monthly_rate)),
                ("Meses".to_string(), r.months.to_string()),
                ("Total devido".to_string(), fmt::format_currency(r.total_owed)),
                (
                    "Juros e multa".to_string(),
                    fmt::format_currency(r.total_interest),
                ),
            ],
        )),
        None if submitted => body.push_str(not_computable_note()),
        None => {}
    }
    layout(settings, "Juros", &body)
}

pub fn pecuaria_page(
    settings: &AppSettings,
    result: Option<&LivestockResult>,
    submitted: bool,
) -> String {
    let mut body = String::from("  <h1>Margem de engorda</h1>\n");
    body.push_str(&form(
        "/pecuaria",
        &[
            text_input("Quantidade de cabeças", "cabecas"),
            text_input("Peso de entrada (kg)", "peso_entrada"),
            text_input("Peso de saída (kg)", "peso_saida"),
            text_input("Preço de compra (R$/@)", "preco_compra"),
            text_input("Preço de venda (R$/@)", "preco_venda"),
            text_input("Custo fixo por cabeça (R$, opcional)", "custo_fixo"),
        ],
    ));
    match result {
        Some(r) => body.push_str(&result_table(
            "Resultado",
            &[
                ("Cabeças".to_string(), r.head_count.to_string()),
                (
                    "Custo por cabeça".to_string(),
                    fmt::format_currency(r.per_head_cost),
                ),
                (
                    "Receita por cabeça".to_string(),
                    fmt::format_currency(r.per_head_revenue),
                ),
                (
                    "Lucro por cabeça".to_string(),
                    fmt::format_currency(r.per_head_profit),
                ),
                ("Custo total".to_string(), fmt::format_currency(r.total_cost)),
                (
                    "Receita total".to_string(),
                    fmt::format_currency(r.total_revenue),
                ),
                ("Lucro total".to_string(), fmt::format_currency(r.total_profit)),
            ],
        )),
        None if submitted => body.push_str(not_computable_note()),
        None => {}
    }
    layout(settings, "Pecuária", &body)
}

pub fn pecuaria_plus_page(
    settings: &AppSettings,
    result: Option<&FeedlotResult>,
    submitted: bool,
) -> String {
    let mut body = String::from("  <h1>Margem de confinamento</h1>\n");
    body.push_str(&form(
        "/pecuaria-plus",
        &[
            text_input("Quantidade de cabeças", "cabecas"),
            text_input("Peso de entrada (kg)", "peso_entrada"),
            text_input("Peso de saída (kg)", "peso_saida"),
            text_input("Preço de compra (R$/@)", "preco_compra"),
            text_input("Preço de venda (R$/@)", "preco_venda"),
            text_input("Custo fixo por cabeça (R$, opcional)", "custo_fixo"),
            text_input("Dias de cocho", "dias_cocho"),
            text_input("Custo diário por cabeça (R$, opcional)", "custo_diario"),
        ],
    ));
    match result {
        Some(r) => body.push_str(&result_table(
            "Resultado",
            &[
                ("Cabeças".to_string(), r.head_count.to_string()),
                ("Dias de cocho".to_string(), r.days_on_feed.to_string()),
                (
                    "Ganho de peso (kg)".to_string(),
                    fmt::format_decimal(r.weight_gain_kg, 1),
                ),
                (
                    "Ganho de peso (@)".to_string(),
                    fmt::format_decimal(r.weight_gain_arrobas, 2),
                ),
                (
                    "Custo por cabeça".to_string(),
                    fmt::format_currency(r.per_head_cost),
                ),
                (
                    "Receita por cabeça".to_string(),
                    fmt::format_currency(r.per_head_revenue),
                ),
                (
                    "Lucro por cabeça".to_string(),
                    fmt::format_currency(r.per_head_profit),
                ),
                (
                    "Preço de equilíbrio (R$/@)".to_string(),
                    fmt::format_currency(r.break_even_price),
                ),
                ("Custo total".to_string(), fmt::format_currency(r.total_cost)),
                (
                    "Receita total".to_string(),
                    fmt::format_currency(r.total_revenue),
                ),
                ("Lucro total".to_string(), fmt::format_currency(r.total_profit)),
            ],
        )),
        None if submitted => body.push_str(not_computable_note()),
        None => {}
    }
    layout(settings, "Pecuária+", &body)
}

pub fn financiamento_page(
    settings: &AppSettings,
    result: Option<&LoanResult>,
    submitted: bool,
) -> String {
    let mut body = String::from("  <h1>Financiamento com parcela fixa</h1>\n");
    body.push_str(&form(
        "/financiamento",
        &[
            text_input("Valor do bem (R$)", "valor"),
            text_input("Entrada (R$)", "entrada"),
            text_input("Taxa de juros (% ao mês)", "taxa"),
            text_input("Número de parcelas", "meses"),
        ],
    ));
    match result {
        Some(r) => body.push_str(&result_table(
            "Resultado",
            &[
                ("Valor do bem".to_string(), fmt::format_currency(r.principal)),
                ("Entrada".to_string(), fmt::format_currency(r.down_payment)),
                ("Taxa".to_string(), fmt::format_percent_monthly(r.monthly_rate)),
                ("Parcelas".to_string(), r.months.to_string()),
                (
                    "Valor da parcela".to_string(),
                    fmt::format_currency(r.installment),
                ),
                ("Total pago".to_string(), fmt::format_currency(r.total_paid)),
                (
                    "Total de juros".to_string(),
                    fmt::format_currency(r.total_interest),
                ),
            ],
        )),
        None if submitted => body.push_str(not_computable_note()),
        None => {}
    }
    layout(settings, "Financiamento", &body)
}

pub fn salario_page(
    settings: &AppSettings,
    result: Option<&PayrollResult>,
    submitted: bool,
) -> String {
    let mut body = String::from("  <h1>Salário líquido</h1>\n");
    body.push_str(&form(
        "/salario",
        &[
            text_input("Salário bruto (R$)", "salario_bruto"),
            text_input("Dependentes (opcional)", "dependentes"),
        ],
    ));
    match result {
        Some(r) => body.push_str(&result_table(
            "Resultado",
            &[
                (
                    "Salário bruto".to_string(),
                    fmt::format_currency(r.gross_pay),
                ),
                ("Dependentes".to_string(), r.dependents.to_string()),
                ("INSS".to_string(), fmt::format_currency(r.social_security)),
                (
                    "Base de cálculo do IRRF".to_string(),
                    fmt::format_currency(r.tax_base),
                ),
                ("IRRF".to_string(), fmt::format_currency(r.income_tax)),
                (
                    "Salário líquido".to_string(),
                    fmt::format_currency(r.net_pay),
                ),
            ],
        )),
        None if submitted => body.push_str(not_computable_note()),
        None => {}
    }
    layout(settings, "Salário", &body)
}

pub fn contrato_page(settings: &AppSettings, document: Option<&ContractDocument>) -> String {
    let mut body = String::from("  <h1>Contrato de prestação de serviço</h1>\n");
    body.push_str(&form(
        "/contrato",
        &[
            text_input("Contratante", "contratante"),
            text_input("CPF/CNPJ do contratante", "contratante_doc"),
            text_input("Contratado", "contratado"),
            text_input("CPF/CNPJ do contratado", "contratado_doc"),
            text_input("Serviço", "servico"),
            text_input("Cidade", "cidade"),
            text_input("Valor (R$)", "valor"),
        ],
    ));
    if let Some(doc) = document {
        body.push_str(&format!(
            "  <h2>Contrato</h2>\n  <p><strong>Contratante:</strong> {contractor} ({contractor_doc})</p>\n  <p><strong>Contratado:</strong> {contractee} ({contractee_doc})</p>\n  <p><strong>Objeto:</strong> {service}</p>\n  <p><strong>Valor:</strong> {amount}</p>\n  <p>{city}, {date}.</p>\n",
            contractor = escape_html(&doc.contractor),
            contractor_doc = escape_html(&doc.contractor_doc),
            contractee = escape_html(&doc.contractee),
            contractee_doc = escape_html(&doc.contractee_doc),
            service = escape_html(&doc.service),
            amount = escape_html(&doc.amount_display),
            city = escape_html(&doc.city),
            date = escape_html(&doc.issued_on),
        ));
    }
    layout(settings, "Contrato", &body)
}

pub fn recibo_page(settings: &AppSettings, document: Option<&ReceiptDocument>) -> String {
    let mut body = String::from("  <h1>Recibo de pagamento</h1>\n");
    body.push_str(&form(
        "/recibo",
        &[
            text_input("Pagador", "pagador"),
            text_input("CPF/CNPJ do pagador", "pagador_doc"),
            text_input("Beneficiário", "beneficiario"),
            text_input("Referente a", "referente"),
            text_input("Cidade", "cidade"),
            text_input("Valor (R$)", "valor"),
        ],
    ));
    if let Some(doc) = document {
        body.push_str(&format!(
            "  <h2>Recibo</h2>\n  <p>Recebi de <strong>{payer}</strong> ({payer_doc}) a importância de <strong>{amount}</strong>, referente a {reference}.</p>\n  <p><strong>Beneficiário:</strong> {beneficiary}</p>\n  <p>{city}, {date}.</p>\n",
            payer = escape_html(&doc.payer),
            payer_doc = escape_html(&doc.payer_doc),
            amount = escape_html(&doc.amount_display),
            reference = escape_html(&doc.reference),
            beneficiary = escape_html(&doc.beneficiary),
            city = escape_html(&doc.city),
            date = escape_html(&doc.issued_on),
        ));
    }
    layout(settings, "Recibo", &body)
}
