// Display-field assembly for the contract and receipt generators.
//
// Pure formatting, no business logic: free-text fields are trimmed (absent
// becomes empty), amounts go through the currency formatter (placeholder when
// not finite), and the emission date is stamped dd/mm/yyyy. This is the only
// time-dependent output in the system and it never reaches a calculator
// result. Building a document never fails.
use chrono::NaiveDate;
use shared::utils::brazilian_format as fmt;

#[derive(Debug, Clone, Default)]
pub struct ContractInput {
    pub contractor: Option<String>,
    pub contractor_doc: Option<String>,
    pub contractee: Option<String>,
    pub contractee_doc: Option<String>,
    pub service: Option<String>,
    pub city: Option<String>,
    /// Already parsed via brazilian_format; may be NaN.
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct ContractDocument {
    pub contractor: String,
    pub contractor_doc: String,
    pub contractee: String,
    pub contractee_doc: String,
    pub service: String,
    pub city: String,
    pub amount_display: String,
    pub issued_on: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReceiptInput {
    pub payer: Option<String>,
    pub payer_doc: Option<String>,
    pub beneficiary: Option<String>,
    pub reference: Option<String>,
    pub city: Option<String>,
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct ReceiptDocument {
    pub payer: String,
    pub payer_doc: String,
    pub beneficiary: String,
    pub reference: String,
    pub city: String,
    pub amount_display: String,
    pub issued_on: String,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn build_contract(input: &ContractInput, issued_on: NaiveDate) -> ContractDocument {
    ContractDocument {
        contractor: fmt::clean_text(input.contractor.as_deref()),
        contractor_doc: fmt::clean_text(input.contractor_doc.as_deref()),
        contractee: fmt::clean_text(input.contractee.as_deref()),
        contractee_doc: fmt::clean_text(input.contractee_doc.as_deref()),
        service: fmt::clean_text(input.service.as_deref()),
        city: fmt::clean_text(input.city.as_deref()),
        amount_display: fmt::format_currency(input.amount),
        issued_on: format_date(issued_on),
    }
}

pub fn build_receipt(input: &ReceiptInput, issued_on: NaiveDate) -> ReceiptDocument {
    ReceiptDocument {
        payer: fmt::clean_text(input.payer.as_deref()),
        payer_doc: fmt::clean_text(input.payer_doc.as_deref()),
        beneficiary: fmt::clean_text(input.beneficiary.as_deref()),
        reference: fmt::clean_text(input.reference.as_deref()),
        city: fmt::clean_text(input.city.as_deref()),
        amount_display: fmt::format_currency(input.amount),
        issued_on: format_date(issued_on),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_contract_trims_and_formats() {
        let input = ContractInput {
            contractor: Some("  Maria Souza ".to_string()),
            contractor_doc: Some("123.456.789-00".to_string()),
            contractee: None,
            contractee_doc: None,
            service: Some(" manutenção de cercas ".to_string()),
            city: Some("Uberaba".to_string()),
            amount: 2500.0,
        };
        let doc = build_contract(&input, a_date());
        assert_eq!(doc.contractor, "Maria Souza");
        assert_eq!(doc.contractee, "");
        assert_eq!(doc.service, "manutenção de cercas");
        assert_eq!(doc.amount_display, "R$ 2.500,00");
        assert_eq!(doc.issued_on, "15/03/2024");
    }

    #[test]
    fn test_receipt_unparsable_amount_gets_placeholder() {
        let input = ReceiptInput {
            payer: Some("José".to_string()),
            amount: f64::NAN,
            ..Default::default()
        };
        let doc = build_receipt(&input, a_date());
        assert_eq!(doc.amount_display, fmt::PLACEHOLDER);
        assert_eq!(doc.beneficiary, "");
    }
}
