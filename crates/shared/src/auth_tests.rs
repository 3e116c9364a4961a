use chrono::{Duration, Utc};
use rstest::rstest;

use crate::config::JwtSettings;
use crate::{Claims, JwtConfig, JwtError, JwtService, LoginRequest};

fn test_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expires_secs: 900,
    })
}

#[test]
fn claims_sets_expiration_and_iat() {
    let expires_at = Utc::now() + Duration::minutes(30);
    let before = Utc::now().timestamp();
    let claims = Claims::new("producer@studio.test", expires_at);
    let after = Utc::now().timestamp();

    assert_eq!(claims.email(), "producer@studio.test");
    assert!(claims.iat >= before);
    assert!(claims.iat <= after);
    assert_eq!(claims.exp, expires_at.timestamp());
}

#[test]
fn token_round_trips_email() {
    let service = test_service();
    let token = service
        .generate_access_token("line.producer@studio.test")
        .unwrap();

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.email(), "line.producer@studio.test");
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let other = JwtService::new(JwtConfig {
        secret: "another-secret".to_string(),
        access_token_expires_secs: 900,
    });
    let token = other.generate_access_token("a@b.test").unwrap();

    let result = test_service().validate_token(&token);
    assert!(matches!(result, Err(JwtError::DecodingError(_))));
}

#[test]
fn expired_token_is_reported_as_expired() {
    let service = JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expires_secs: -600,
    });
    let token = service.generate_access_token("late@studio.test").unwrap();

    assert!(matches!(
        service.validate_token(&token),
        Err(JwtError::Expired)
    ));
}

#[test]
fn garbage_token_is_rejected() {
    assert!(test_service().validate_token("invalid.token.here").is_err());
}

#[test]
fn sub_minute_expiry_survives_settings_conversion() {
    let settings = JwtSettings {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expiry_secs: 30,
    };
    let service = JwtService::new(JwtConfig::from(&settings));
    assert_eq!(service.access_token_expires_in(), 30);

    let token = service.generate_access_token("day.player@studio.test").unwrap();
    let claims = service.validate_token(&token).unwrap();
    assert!((29..=30).contains(&(claims.exp - claims.iat)));
}

#[test]
fn oversized_expiry_is_an_encoding_error() {
    let settings = JwtSettings {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expiry_secs: u64::MAX,
    };
    let config = JwtConfig::from(&settings);
    assert_eq!(config.access_token_expires_secs, i64::MAX);

    let result = JwtService::new(config).generate_access_token("a@b.test");
    assert!(matches!(result, Err(JwtError::EncodingError(_))));
}

#[test]
fn expires_in_is_in_seconds() {
    assert_eq!(test_service().access_token_expires_in(), 900);
}

#[rstest]
#[case("", "secret", Some("email is required"))]
#[case("   ", "secret", Some("email is required"))]
#[case("dp@studio.test", "", Some("password is required"))]
#[case("dp@studio.test", "secret", None)]
fn login_request_validation(
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: Option<&str>,
) {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    assert_eq!(request.validation_error(), expected);
}
