//! End-to-end token scenarios: known vectors, typed payloads and concurrent use

use jsonauth::{Algorithm, HmacSigner, JsonAuth, Signer, TokenConfig, TokenError};
use jsonauth_common::LoggingTransformer;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

const EXPECTED_TOKEN: &str = "eyJrZXkiOiJ2YWx1ZSIsImtleTIiOiJ2YWx1ZTIifQ.f7a4acea730f514c7d137e2ddc754b2e507e512412797e40fadc7bbec24c3f16a993300fcdc72718139e65e2e25cdf1f8f61674f18fdc76b73db89598bf7f675";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Session {
    sub: String,
    exp: i64,
    roles: Vec<String>,
}

#[test]
fn test_token_encoding() {
    LoggingTransformer::init_test();
    let auth = JsonAuth::new("1234").expect("key");

    let token = auth
        .encode(&json!({"key": "value", "key2": "value2"}))
        .expect("encode");
    assert_eq!(token, EXPECTED_TOKEN);
}

#[test]
fn test_token_decoding() {
    LoggingTransformer::init_test();
    let auth = JsonAuth::new("1234").expect("key");

    let decoded = auth.decode(EXPECTED_TOKEN).expect("decode");
    assert_eq!(
        serde_json::Value::Object(decoded),
        json!({"key": "value", "key2": "value2"})
    );
}

#[test]
fn test_decoding_with_wrong_key() {
    LoggingTransformer::init_test();
    let auth = JsonAuth::new("wrong").expect("key");

    let err = auth.decode(EXPECTED_TOKEN).unwrap_err();
    assert!(err.is_signature_mismatch());
    assert_eq!(err.to_string(), "Signature checking failed");
}

#[test]
fn test_struct_payload_round_trip() {
    let auth = JsonAuth::new(b"\x00\x01binary key".to_vec()).expect("key");
    let session = Session {
        sub: "user-42".into(),
        exp: 1_900_000_000,
        roles: vec!["reader".into(), "writer".into()],
    };

    let token = auth.encode(&session).expect("encode");
    let decoded: Session = auth.decode_as(&token).expect("decode");
    assert_eq!(decoded, session);

    // untyped view keeps declaration order
    let payload = auth.decode(&token).expect("decode");
    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(keys, ["sub", "exp", "roles"]);
}

#[test]
fn test_typed_decode_shape_mismatch() {
    let auth = JsonAuth::new("1234").expect("key");
    assert!(matches!(
        auth.decode_as::<Session>(EXPECTED_TOKEN),
        Err(TokenError::MalformedPayload(_))
    ));
}

#[test]
fn test_config_and_algorithm_names() {
    for (name, sig_len) in [("sha256", 64), ("sha384", 96), ("sha512", 128)] {
        let config = TokenConfig::builder()
            .with_algorithm_name(name)
            .expect("known algorithm")
            .with_secret("1234")
            .build()
            .expect("config");
        let auth = JsonAuth::from_config(config);
        assert_eq!(auth.algorithm().name(), name);

        let token = auth.encode(&json!({"n": 1})).expect("encode");
        let (_, signature) = token.split_once('.').expect("two segments");
        assert_eq!(signature.len(), sig_len);
        assert_eq!(auth.decode(&token).expect("decode")["n"], 1);
    }
}

#[test]
fn test_algorithms_do_not_cross_verify() {
    let sha256 = JsonAuth::with_signer(HmacSigner::new(Algorithm::Sha256, "k").expect("key"));
    let sha512 = JsonAuth::new("k").expect("key");

    let token = sha256.encode(&json!({"a": true})).expect("encode");
    assert!(sha256.verify(&token));
    assert!(!sha512.verify(&token));
}

#[test]
fn test_shared_signer_behind_arc() {
    let signer: Arc<dyn Signer> =
        Arc::new(HmacSigner::new(Algorithm::Sha512, "1234").expect("key"));
    let auth = JsonAuth::with_signer(Arc::clone(&signer));

    assert_eq!(
        auth.encode(&json!({"key": "value", "key2": "value2"}))
            .expect("encode"),
        EXPECTED_TOKEN
    );
}

#[test]
fn test_codec_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JsonAuth>();
    assert_send_sync::<HmacSigner>();
    assert_send_sync::<TokenConfig>();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_encode_decode() {
    LoggingTransformer::init_test();
    let auth = Arc::new(JsonAuth::new("1234").expect("key"));

    let mut handles = Vec::new();
    for task in 0..32u64 {
        let auth = Arc::clone(&auth);
        handles.push(tokio::spawn(async move {
            tokio::task::yield_now().await;
            let token = auth.encode(&json!({"task": task}))?;
            let payload = auth.decode(&token)?;
            let decoded = auth.decode(EXPECTED_TOKEN)?;
            Ok::<_, TokenError>((payload["task"].as_u64(), decoded.len()))
        }));
    }

    for (task, handle) in (0u64..).zip(handles) {
        let (value, known_len) = handle.await.expect("task panicked").expect("round trip");
        assert_eq!(value, Some(task));
        assert_eq!(known_len, 2);
    }
}
