//! Tests for the trace middleware.

use actix_web::{App, HttpResponse, test, web};
use uuid::Uuid;

use super::*;
use crate::inbound::http::ApiResult;

async fn call_with_trace<F, Fut, Res>(handler: F) -> (ServiceResponse, String)
where
    F: Fn() -> Fut + Clone + 'static,
    Fut: std::future::Future<Output = Res> + 'static,
    Res: actix_web::Responder + 'static,
{
    let app = test::init_service(App::new().wrap(Trace).route("/", web::get().to(handler))).await;
    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("header is ascii")
        .to_owned();
    (res, trace_id)
}

#[actix_web::test]
async fn adds_a_uuid_trace_header() {
    let (_res, trace_id) = call_with_trace(|| async { HttpResponse::Ok().finish() }).await;

    assert!(Uuid::parse_str(&trace_id).is_ok());
}

#[actix_web::test]
async fn each_request_gets_a_fresh_identifier() {
    let (_first, first) = call_with_trace(|| async { HttpResponse::Ok().finish() }).await;
    let (_second, second) = call_with_trace(|| async { HttpResponse::Ok().finish() }).await;

    assert_ne!(first, second);
}

#[actix_web::test]
async fn exposes_trace_id_in_handler() {
    let (res, trace_id) = call_with_trace(|| async {
        let id = TraceId::current().expect("trace id in scope");
        HttpResponse::Ok().body(id.to_string())
    })
    .await;

    let body = test::read_body(res).await;
    assert_eq!(std::str::from_utf8(&body).expect("utf8 body"), trace_id);
}

#[actix_web::test]
async fn propagates_trace_id_into_error_bodies() {
    let (res, trace_id) = call_with_trace(|| async {
        ApiResult::<HttpResponse>::Err(crate::domain::Error::internal("boom"))
    })
    .await;

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], trace_id.as_str());
    assert_eq!(body["message"], "Internal server error");
}
