// ============================================================================
// RESPONSE HANDLER - Clasificación de respuestas (lógica pura)
// ============================================================================
// Orden fijo: redirect -> status -> content-type
// ============================================================================

use crate::error::ApiError;
use crate::models::{AccountDetails, HttpReply, SubmitReply};
use crate::utils::{ACCOUNT_NOT_OK_MESSAGE, JSON_CONTENT_TYPE};

/// Clasificar la respuesta de /api/login o /api/signup
pub fn interpret_submit_reply(reply: HttpReply) -> Result<SubmitReply, ApiError> {
    // 1. Redirect: el navegador navega, no es error
    if reply.redirected {
        return Ok(SubmitReply::Redirect(reply.url));
    }

    // 2. Status
    if !reply.is_success() {
        let body = reply.body?;
        let text = if body.is_empty() {
            format!("HTTP error! Status: {}", reply.status)
        } else {
            body
        };
        return Err(ApiError::Request(text));
    }

    // 3. Content-type
    let is_json = reply
        .content_type
        .as_deref()
        .map(|ct| ct.contains(JSON_CONTENT_TYPE))
        .unwrap_or(false);
    let body = reply.body?;
    if is_json {
        let value = serde_json::from_str(&body)?;
        Ok(SubmitReply::Json(value))
    } else {
        Ok(SubmitReply::Text(body))
    }
}

/// Clasificar la respuesta de /api/account. El body de un error no se lee.
pub fn interpret_account_reply(reply: HttpReply) -> Result<AccountDetails, ApiError> {
    if !reply.is_success() {
        return Err(ApiError::Request(ACCOUNT_NOT_OK_MESSAGE.to_string()));
    }
    Ok(serde_json::from_str(&reply.body?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redirect_wins_over_everything() {
        let mut reply = HttpReply::redirect("https://app.test/home");
        reply.status = 500;
        reply.body = Ok("boom".to_string());
        assert_eq!(
            interpret_submit_reply(reply),
            Ok(SubmitReply::Redirect("https://app.test/home".to_string()))
        );
    }

    #[test]
    fn test_redirect_ignores_unreadable_body() {
        let mut reply = HttpReply::redirect("https://app.test/home");
        reply.body = Err(ApiError::Network("AbortError: The user aborted a request.".to_string()));
        assert_eq!(
            interpret_submit_reply(reply),
            Ok(SubmitReply::Redirect("https://app.test/home".to_string()))
        );
    }

    #[test]
    fn test_unreadable_error_body_surfaces_read_failure() {
        let reply = HttpReply::unreadable(500, ApiError::Network("TypeError: network error".to_string()));
        assert_eq!(
            interpret_submit_reply(reply),
            Err(ApiError::Network("TypeError: network error".to_string()))
        );
    }

    #[test]
    fn test_error_status_carries_body_text() {
        let reply = HttpReply::new(500, "bad credentials");
        assert_eq!(
            interpret_submit_reply(reply),
            Err(ApiError::Request("bad credentials".to_string()))
        );
    }

    #[test]
    fn test_error_status_without_body_uses_status_code() {
        let reply = HttpReply::new(401, "");
        assert_eq!(
            interpret_submit_reply(reply),
            Err(ApiError::Request("HTTP error! Status: 401".to_string()))
        );
    }

    #[test]
    fn test_error_status_ignores_json_content_type() {
        let reply = HttpReply::json(400, r#"{"message":"nope"}"#);
        assert_eq!(
            interpret_submit_reply(reply),
            Err(ApiError::Request(r#"{"message":"nope"}"#.to_string()))
        );
    }

    #[test]
    fn test_json_body_is_parsed() {
        let reply = HttpReply::json(200, r#"{"message":"welcome"}"#);
        assert_eq!(
            interpret_submit_reply(reply),
            Ok(SubmitReply::Json(json!({"message": "welcome"})))
        );
    }

    #[test]
    fn test_non_json_body_is_text() {
        let reply = HttpReply::new(200, r#"{"message":"welcome"}"#)
            .with_content_type("text/plain; charset=utf-8");
        assert_eq!(
            interpret_submit_reply(reply),
            Ok(SubmitReply::Text(r#"{"message":"welcome"}"#.to_string()))
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let reply = HttpReply::json(200, "{not json");
        assert!(matches!(interpret_submit_reply(reply), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_account_error_status_hides_body() {
        let reply = HttpReply::json(403, r#"{"error":"forbidden"}"#);
        assert_eq!(
            interpret_account_reply(reply),
            Err(ApiError::Request("Network response was not ok".to_string()))
        );
    }

    #[test]
    fn test_account_error_status_ignores_unread_body() {
        let reply = HttpReply::unreadable(403, ApiError::Network("unread".to_string()));
        assert_eq!(
            interpret_account_reply(reply),
            Err(ApiError::Request("Network response was not ok".to_string()))
        );
    }

    #[test]
    fn test_account_success_parses_without_content_type() {
        let reply = HttpReply::new(200, r#"{"username":"bob"}"#);
        let details = interpret_account_reply(reply).unwrap();
        assert_eq!(details.0, json!({"username": "bob"}));
    }
}
