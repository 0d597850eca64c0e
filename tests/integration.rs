use std::error::Error;
use std::thread;

use native_auth_bridge::{
    AuthError, BridgeConfig, LoginSession, NativeAuthenticator, NativeError,
    native_to_login_error,
};

// Backend double that fails every attempt with a fixed native diagnostic.
struct FailingBackend {
    error_string: Option<&'static str>,
    error_code: Option<i64>,
}

impl NativeAuthenticator for FailingBackend {
    fn authenticate(&self, service: &str, _: &str, _: &str) -> Result<(), NativeError> {
        Err(NativeError::new(
            format!("{} authentication failed", service),
            self.error_string.map(str::to_string),
            self.error_code,
        ))
    }
}

struct AcceptingBackend;

impl NativeAuthenticator for AcceptingBackend {
    fn authenticate(&self, _: &str, _: &str, _: &str) -> Result<(), NativeError> {
        Ok(())
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_failed_login_surfaces_composed_message() {
    init_logging();
    let config = BridgeConfig::default();
    let backend = FailingBackend {
        error_string: Some("Authentication failure"),
        error_code: Some(7),
    };

    let mut session = LoginSession::new();
    session.set_user("alice", &config).unwrap();
    let err = session.login("wrong", &backend, &config).unwrap_err();

    assert_eq!(
        err.to_string(),
        "login authentication failed: Authentication failure (7)"
    );
}

#[test]
fn test_cause_chain_reaches_native_error() {
    init_logging();
    let config = BridgeConfig::default();
    let backend = FailingBackend {
        error_string: None,
        error_code: Some(7),
    };

    let mut session = LoginSession::new();
    session.set_user("alice", &config).unwrap();
    let err = session.login("wrong", &backend, &config).unwrap_err();

    // AuthError -> LoginError -> NativeError, with the original diagnostic
    // fields intact at the end of the chain.
    let login = err.source().expect("auth error must have a source");
    let native = login
        .source()
        .expect("login error must have a source")
        .downcast_ref::<NativeError>()
        .expect("source must be the native error");
    assert_eq!(native.message(), "login authentication failed");
    assert_eq!(native.error_string(), None);
    assert_eq!(native.error_code(), Some(7));
}

#[test]
fn test_login_error_variant_exposes_typed_cause() {
    let config = BridgeConfig::default();
    let backend = FailingBackend {
        error_string: Some("bad password"),
        error_code: None,
    };

    let mut session = LoginSession::new();
    session.set_user("bob", &config).unwrap();
    match session.login("wrong", &backend, &config) {
        Err(AuthError::Login(login)) => {
            assert_eq!(login.message(), "login authentication failed: bad password");
            assert_eq!(login.native_cause().error_string(), Some("bad password"));
        }
        other => panic!("expected login failure, got {:?}", other.err()),
    }
}

#[test]
fn test_successful_login_then_logout() {
    init_logging();
    let config = BridgeConfig::default();

    let mut session = LoginSession::new();
    session.set_user("alice", &config).unwrap();
    session.login("secret", &AcceptingBackend, &config).unwrap();
    assert!(session.is_logged_in());

    session.logout();
    assert!(!session.is_logged_in());
    assert_eq!(session.username(), None);
}

#[test]
fn test_concurrent_translation_keeps_outputs_distinct() {
    // Each thread translates its own input; no output may pick up another
    // thread's diagnostics.
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let err = NativeError::new(
                    format!("auth failed {}", i),
                    Some(format!("detail {}", i)),
                    Some(i),
                );
                let login = native_to_login_error(err);
                (i, login)
            })
        })
        .collect();

    for handle in handles {
        let (i, login) = handle.join().unwrap();
        assert_eq!(
            login.message(),
            format!("auth failed {}: detail {} ({})", i, i, i)
        );
        assert_eq!(login.native_cause().error_code(), Some(i));
    }
}

#[test]
fn test_raw_boundary_round_trip() {
    // A raw failure with the absent-code sentinel formats without any code.
    let err = NativeError::from_raw(
        "auth failed".to_string(),
        Some("account locked".to_string()),
        -1,
    );
    let login = native_to_login_error(err);
    assert_eq!(login.message(), "auth failed: account locked");

    let err = NativeError::from_raw("auth failed".to_string(), None, 13);
    let login = native_to_login_error(err);
    assert_eq!(login.message(), "auth failed: 13");
}
