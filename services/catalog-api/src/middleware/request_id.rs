
use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_id(mut req: Request, next: Next) -> Response {
    let rid = HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
    req.headers_mut().insert(REQUEST_ID_HEADER, rid.clone());
    let mut res = next.run(req).await;
    res.headers_mut().insert(REQUEST_ID_HEADER, rid);
    res
}
