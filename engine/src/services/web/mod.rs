// HTTP surface: one GET/POST pair per calculator page plus the document
// generators and a liveness endpoint. Handlers parse the form text at this
// boundary (brazilian_format), call exactly one calculator, and hand the
// outcome to the views unchanged. Calculation never fails a response; a
// not-computable outcome renders the form with an error note.
use crate::config::settings::AppSettings;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub mod documentos;
pub mod financiamento;
pub mod juros;
pub mod pecuaria;
pub mod salario;
pub mod views;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<AppSettings>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/juros", get(juros::form).post(juros::submit))
        .route("/pecuaria", get(pecuaria::form).post(pecuaria::submit))
        .route(
            "/pecuaria-plus",
            get(pecuaria::feedlot_form).post(pecuaria::feedlot_submit),
        )
        .route(
            "/financiamento",
            get(financiamento::form).post(financiamento::submit),
        )
        .route("/salario", get(salario::form).post(salario::submit))
        .route(
            "/contrato",
            get(documentos::contract_form).post(documentos::contract_submit),
        )
        .route(
            "/recibo",
            get(documentos::receipt_form).post(documentos::receipt_submit),
        )
        .route("/health", get(health))
        .with_state(state)
}

async fn index(axum::extract::State(state): axum::extract::State<AppState>) -> Html<String> {
    Html(views::index_page(&state.settings))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(AppState {
            settings: Arc::new(AppSettings::default()),
        })
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert_eq!(body, "{\"status\":\"ok\"}");
    }

    #[tokio::test]
    async fn test_get_renders_empty_form() {
        let response = test_router()
            .oneshot(Request::builder().uri("/juros").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("name=\"valor\""));
        assert!(!body.contains("Resultado"));
    }

    #[tokio::test]
    async fn test_post_juros_computes() {
        // 1.000,00 at 2% with 5% penalty over 3 months.
        let response = test_router()
            .oneshot(post_form(
                "/juros",
                "valor=1.000%2C00&taxa=2&multa=5&meses=3",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("R$ 1.050,00"));
        assert!(body.contains("R$ 1.114,27"));
    }

    #[tokio::test]
    async fn test_post_juros_unparsable_renders_note() {
        let response = test_router()
            .oneshot(post_form("/juros", "valor=abc&taxa=2&multa=5&meses=3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Não foi possível calcular"));
    }

    #[tokio::test]
    async fn test_post_financiamento_zero_rate() {
        let response = test_router()
            .oneshot(post_form(
                "/financiamento",
                "valor=1.200%2C00&entrada=0&taxa=0&meses=12",
            ))
            .await
            .unwrap();
        let body = body_string(response).await;
        assert!(body.contains("R$ 100,00"));
        assert!(body.contains("R$ 1.200,00"));
    }

    #[tokio::test]
    async fn test_post_salario() {
        let response = test_router()
            .oneshot(post_form("/salario", "salario_bruto=3.000%2C00&dependentes="))
            .await
            .unwrap();
        let body = body_string(response).await;
        // INSS for 3000.00: 1412*0.075 + (2666.68-1412)*0.09 + (3000-2666.68)*0.12
        assert!(body.contains("INSS"));
        assert!(body.contains("R$ 3.000,00"));
        assert!(body.contains("Salário líquido"));
    }

    #[tokio::test]
    async fn test_post_recibo_builds_document() {
        let response = test_router()
            .oneshot(post_form(
                "/recibo",
                "pagador=Jos%C3%A9&pagador_doc=000&beneficiario=Maria&referente=aluguel&cidade=Uberaba&valor=2.500%2C00",
            ))
            .await
            .unwrap();
        let body = body_string(response).await;
        assert!(body.contains("R$ 2.500,00"));
        assert!(body.contains("José"));
        assert!(body.contains("aluguel"));
    }
}
