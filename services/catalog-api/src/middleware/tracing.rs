
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, info_span, Instrument};

pub async fn trace(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().to_string();
    let request_id = req
        .headers()
        .get(super::request_id::REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let span = info_span!("http", %method, %uri, %request_id);
    async move {
        let res = next.run(req).await;
        debug!(status = res.status().as_u16(), "response");
        res
    }
    .instrument(span)
    .await
}
