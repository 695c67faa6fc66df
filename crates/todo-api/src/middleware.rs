//! ルータ前段のミドルウェア

use axum::{
    extract::Request,
    http::Uri,
    middleware::Next,
    response::Response,
};

/// リクエストログ（1 リクエスト 1 行）
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "request"
    );
    response
}

/// HTTP パラメータ汚染ガード
///
/// 同名のクエリパラメータが繰り返された場合、最後の値だけを残して
/// クエリ文字列を書き換える。本 API はクエリを読まないため純粋な防御層。
pub async fn dedupe_query_params(mut req: Request, next: Next) -> Response {
    if let Some(query) = req.uri().query() {
        if has_duplicate_keys(query) {
            tracing::warn!(query = %query, "duplicate query parameters dropped");

            let deduped = dedupe_query(query);
            let path = req.uri().path();
            let path_and_query = if deduped.is_empty() {
                path.to_string()
            } else {
                format!("{path}?{deduped}")
            };

            let mut parts = req.uri().clone().into_parts();
            // 元の URI から組み直すだけなので必ずパース可能
            parts.path_and_query = Some(path_and_query.parse().unwrap());
            *req.uri_mut() = Uri::from_parts(parts).unwrap();
        }
    }
    next.run(req).await
}

fn has_duplicate_keys(query: &str) -> bool {
    let mut seen: Vec<&str> = Vec::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let key = pair.split('=').next().unwrap_or(pair);
        if seen.contains(&key) {
            return true;
        }
        seen.push(key);
    }
    false
}

/// 各キーの最後の出現のみを残す（初出順は維持）
fn dedupe_query(query: &str) -> String {
    let mut kept: Vec<(&str, &str)> = Vec::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let key = pair.split('=').next().unwrap_or(pair);
        if let Some(slot) = kept.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = pair;
        } else {
            kept.push((key, pair));
        }
    }
    kept.iter()
        .map(|(_, pair)| *pair)
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_repeated_keys() {
        assert!(has_duplicate_keys("a=1&a=2"));
        assert!(has_duplicate_keys("a=1&b=2&a=3"));
        assert!(!has_duplicate_keys("a=1&b=2"));
        assert!(!has_duplicate_keys(""));
    }

    #[test]
    fn keeps_last_value_per_key() {
        assert_eq!(dedupe_query("a=1&a=2"), "a=2");
        assert_eq!(dedupe_query("a=1&b=2&a=3"), "a=3&b=2");
        assert_eq!(dedupe_query("flag&flag=x"), "flag=x");
    }
}
