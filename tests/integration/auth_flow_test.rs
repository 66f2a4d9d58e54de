//! End-to-end JWT flow: login, token use, rejection paths

mod common;

use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use biblio_auth::Claims;
use biblio_common::AuthMode;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::common::{
    authed_request, raw_auth_request, unauthed_request, TestApp, TEST_JWT_SECRET, TEST_PASSWORD,
    TEST_USERNAME,
};

const INVALID_TOKEN: &str = "Token inválido o ausente";

fn app() -> TestApp {
    TestApp::new(AuthMode::Jwt).unwrap()
}

mod test_login {
    use super::*;

    #[tokio::test]
    async fn test_valid_credentials_issue_token() {
        let app = app();
        let req = unauthed_request(
            Method::POST,
            "/api/auth/login",
            Some(json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD })),
        );

        let (status, body) = app.send(req).await;
        assert_eq!(status, StatusCode::OK);

        let token = body["token"].as_str().unwrap();
        assert_eq!(token.split('.').count(), 3);

        let expires_at = body["expires_at"].as_str().unwrap();
        assert!(expires_at.ends_with('Z'), "expires_at: {}", expires_at);

        let claims = app.codec().decode(token).unwrap();
        assert_eq!(claims.sub, TEST_USERNAME);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(
            chrono::DateTime::parse_from_rfc3339(expires_at)
                .unwrap()
                .timestamp(),
            claims.exp
        );
    }

    #[tokio::test]
    async fn test_each_configured_user_can_log_in() {
        let app = app();
        let token = app.login("ana", "clave_de_ana").await;

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/secret", &token))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"], "ana");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let app = app();

        let wrong = app
            .send(unauthed_request(
                Method::POST,
                "/api/auth/login",
                Some(json!({ "username": TEST_USERNAME, "password": "wrong_password" })),
            ))
            .await;
        let unknown = app
            .send(unauthed_request(
                Method::POST,
                "/api/auth/login",
                Some(json!({ "username": "nonexistent_user", "password": TEST_PASSWORD })),
            ))
            .await;

        assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.1, json!({ "error": "Credenciales inválidas" }));
        assert_eq!(wrong, unknown);
    }

    #[tokio::test]
    async fn test_missing_fields_and_bad_bodies_are_401() {
        let app = app();

        let bodies = [
            Some(json!({ "username": TEST_USERNAME })),
            Some(json!({ "password": TEST_PASSWORD })),
            Some(json!({})),
            Some(json!({ "username": 42, "password": TEST_PASSWORD })),
            None,
        ];

        for body in bodies {
            let (status, response) = app
                .send(unauthed_request(Method::POST, "/api/auth/login", body.clone()))
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "body: {:?}", body);
            assert_eq!(response["error"], "Credenciales inválidas");
        }
    }
}

mod test_protected_resource {
    use super::*;

    #[tokio::test]
    async fn test_secret_with_fresh_token() {
        let app = app();
        let token = app.login(TEST_USERNAME, TEST_PASSWORD).await;

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/secret", &token))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "¡Has accedido al secreto con JWT!",
                "secret": "La respuesta a la vida, el universo y todo lo demás es 42",
                "user": TEST_USERNAME,
            })
        );
    }

    #[tokio::test]
    async fn test_secret_without_header() {
        let app = app();
        let (status, body) = app
            .send(unauthed_request(Method::GET, "/api/secret", None))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], INVALID_TOKEN);
    }

    #[tokio::test]
    async fn test_secret_with_malformed_headers() {
        let app = app();
        let token = app.login(TEST_USERNAME, TEST_PASSWORD).await;

        let headers = [
            "Bearer garbage".to_string(),
            "Bearer ".to_string(),
            token.clone(),
            format!("bearer {}", token),
            format!("Basic {}", token),
        ];

        for header in headers {
            let (status, body) = app
                .send(raw_auth_request(Method::GET, "/api/secret", &header))
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "header: {}", header);
            assert_eq!(body["error"], INVALID_TOKEN);
        }
    }

    #[tokio::test]
    async fn test_secret_with_token_expired_an_hour_ago() {
        let app = app();
        let claims = Claims::new(
            TEST_USERNAME,
            Utc::now() - Duration::hours(2),
            Duration::hours(1),
        );
        let token = app.codec().encode(&claims).unwrap();

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/secret", &token))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Token expirado");
    }

    #[tokio::test]
    async fn test_token_stops_working_after_ttl() {
        let app = TestApp::with_config(biblio_common::Config {
            jwt_ttl_seconds: 1,
            ..app().config
        })
        .unwrap();
        let token = app.login(TEST_USERNAME, TEST_PASSWORD).await;

        tokio::time::sleep(std::time::Duration::from_millis(2100)).await;

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/secret", &token))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Token expirado");
    }

    #[tokio::test]
    async fn test_token_from_another_deployment_is_rejected() {
        let app = app();
        let other = TestApp::with_config(biblio_common::Config {
            jwt_secret: "a_different_secret".to_string(),
            ..app.config.clone()
        })
        .unwrap();
        let foreign = other.login(TEST_USERNAME, TEST_PASSWORD).await;

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/secret", &foreign))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], INVALID_TOKEN);
    }
}

mod test_tampering {
    use super::*;

    /// The flip is applied to the decoded MAC bytes, which keeps the token
    /// well-formed; edits to the base64 text are covered separately below.
    #[tokio::test]
    async fn test_flipped_signature_bit_is_rejected() {
        let app = app();
        let token = app.login(TEST_USERNAME, TEST_PASSWORD).await;
        let (signing_input, signature) = token.rsplit_once('.').unwrap();

        let mut sig = URL_SAFE_NO_PAD.decode(signature).unwrap();
        sig[0] ^= 0x01;
        let forged = format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(&sig));

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/secret", &forged))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], INVALID_TOKEN);
    }

    #[tokio::test]
    async fn test_edited_signature_text_is_rejected() {
        let app = app();
        let token = app.login(TEST_USERNAME, TEST_PASSWORD).await;
        let (signing_input, signature) = token.rsplit_once('.').unwrap();

        // Swap the last character, then splice a `.` into the segment
        let last = signature.chars().last().unwrap();
        let replacement = if last == 'A' { 'B' } else { 'A' };
        let swapped = format!(
            "{}.{}{}",
            signing_input,
            &signature[..signature.len() - 1],
            replacement
        );
        let dotted = format!("{}..{}", signing_input, &signature[1..]);

        for forged in [swapped, dotted] {
            let (status, body) = app
                .send(authed_request(Method::GET, "/api/secret", &forged))
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "token: {}", forged);
            assert_eq!(body["error"], INVALID_TOKEN);
        }
    }

    #[tokio::test]
    async fn test_rewritten_subject_is_rejected() {
        let app = app();
        let token = app.login(TEST_USERNAME, TEST_PASSWORD).await;
        let parts: Vec<&str> = token.split('.').collect();

        let mut payload: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
        payload["sub"] = json!("admin");
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
        let forged = format!("{}.{}.{}", parts[0], payload, parts[2]);

        let (status, _) = app
            .send(authed_request(Method::GET, "/api/secret", &forged))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_other_algorithm_with_same_secret_is_rejected() {
        let app = app();
        let claims = Claims::new(TEST_USERNAME, Utc::now(), Duration::hours(1));
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap();

        let (status, body) = app
            .send(authed_request(Method::GET, "/api/secret", &token))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], INVALID_TOKEN);
    }

    #[tokio::test]
    async fn test_unsigned_token_is_rejected() {
        let app = app();
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let now = Utc::now().timestamp();
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&json!({ "sub": TEST_USERNAME, "iat": now, "exp": now + 3600 }))
                .unwrap(),
        );
        let token = format!("{}.{}.", header, payload);

        let (status, _) = app
            .send(authed_request(Method::GET, "/api/secret", &token))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_public_endpoint_needs_no_token() {
    let app = app();
    let (status, body) = app
        .send(unauthed_request(Method::GET, "/api/public", None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Este es un endpoint público, cualquiera puede acceder"
    );
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let resp = tower::ServiceExt::oneshot(
        app.test_router(),
        unauthed_request(Method::GET, "/health", None),
    )
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
