#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::mock::{Call, MockBackend};
    use crate::core::{
        Account, BackendError, LoginOutcome, MessageKind, PROFILE_TABLE, RegistrationForm,
        RegistrationOutcome, SessionCheck, SignUpResponse, USER_ROUTE, check_session,
        fetch_profile, follow_login_link, follow_register_link, register, sign_in,
    };

    fn ana() -> RegistrationForm {
        RegistrationForm {
            name: "Ana".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
            password: "secret123".to_string(),
        }
    }

    // ========================================================================
    // Session guard
    // ========================================================================

    #[tokio::test]
    async fn test_signed_in_user_is_redirected() {
        let backend = MockBackend::new().with_current_user(Account::new("u9"));

        let check = check_session(&backend).await;

        assert_eq!(check, SessionCheck::Redirecting(Account::new("u9")));
        assert_eq!(check.redirect_target(), Some(USER_ROUTE));
        assert!(!check.shows_content());
    }

    #[tokio::test]
    async fn test_anonymous_visitor_sees_form() {
        let backend = MockBackend::new();

        let check = check_session(&backend).await;

        assert_eq!(check, SessionCheck::Ready);
        assert_eq!(check.redirect_target(), None);
        assert!(check.shows_content());
        assert_eq!(backend.calls(), vec![Call::CurrentUser]);
    }

    #[tokio::test]
    async fn test_failed_session_check_shows_form() {
        let mut backend = MockBackend::new();
        backend.current_user = Err(BackendError::Network("Failed to fetch".to_string()));

        assert_eq!(check_session(&backend).await, SessionCheck::Ready);
    }

    #[test]
    fn test_initial_state_is_checking() {
        let check = SessionCheck::default();
        assert_eq!(check, SessionCheck::Checking);
        assert!(!check.shows_content());
        assert_eq!(check.redirect_target(), None);
    }

    // ========================================================================
    // Registration
    // ========================================================================

    #[tokio::test]
    async fn test_successful_registration() {
        let backend = MockBackend::new().with_sign_up_id("u1");

        let outcome = register(&backend, &ana()).await;

        assert_eq!(
            outcome,
            RegistrationOutcome::Registered {
                id: "u1".to_string()
            }
        );
        assert!(outcome.message().text.starts_with("✅"));
        assert_eq!(
            backend.inserts(),
            vec![(
                PROFILE_TABLE.to_string(),
                json!({"id": "u1", "nombre": "Ana", "correo": "a@b.com", "telefono": "555"})
            )]
        );
    }

    #[tokio::test]
    async fn test_sign_up_called_with_email_and_password() {
        let backend = MockBackend::new().with_sign_up_id("u1");

        register(&backend, &ana()).await;

        assert_eq!(
            backend.calls()[0],
            Call::SignUp {
                email: "a@b.com".to_string(),
                password: "secret123".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_sign_up_skips_insert() {
        let backend = MockBackend::new().with_sign_up_error("Email already registered");

        let outcome = register(&backend, &ana()).await;

        assert_eq!(outcome.message().text, "❌ Error: Email already registered");
        assert_eq!(outcome.message().kind, MessageKind::Error);
        assert!(backend.inserts().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_without_user_skips_insert() {
        let mut backend = MockBackend::new();
        backend.sign_up = Ok(SignUpResponse { user: None });

        let outcome = register(&backend, &ana()).await;

        assert_eq!(outcome, RegistrationOutcome::MissingId);
        assert!(outcome.message().text.starts_with("⚠️"));
        assert!(backend.inserts().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_with_empty_id_skips_insert() {
        let backend = MockBackend::new().with_sign_up_id("");

        let outcome = register(&backend, &ana()).await;

        assert_eq!(outcome, RegistrationOutcome::MissingId);
        assert!(backend.inserts().is_empty());
    }

    #[tokio::test]
    async fn test_failed_insert_reports_backend_message() {
        let backend = MockBackend::new()
            .with_sign_up_id("u2")
            .with_insert_error("duplicate key");

        let outcome = register(&backend, &ana()).await;
        let message = outcome.message();

        assert!(message.text.starts_with("⚠️"));
        assert!(message.text.contains("duplicate key"));
        assert_eq!(message.kind, MessageKind::Warning);
        // The account stays; no cleanup call follows the failed insert
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(backend.sign_up_count(), 1);
    }

    #[tokio::test]
    async fn test_insert_happens_after_sign_up() {
        let backend = MockBackend::new().with_sign_up_id("u1");

        register(&backend, &ana()).await;

        let calls = backend.calls();
        assert!(matches!(calls[0], Call::SignUp { .. }));
        assert!(matches!(calls[1], Call::Insert { .. }));
    }

    #[tokio::test]
    async fn test_optional_phone_is_sent_empty() {
        let backend = MockBackend::new().with_sign_up_id("u3");
        let mut form = ana();
        form.phone.clear();

        register(&backend, &form).await;

        assert_eq!(backend.inserts()[0].1["telefono"], json!(""));
    }

    #[tokio::test]
    async fn test_repeated_attempts_are_independent() {
        let backend = MockBackend::new().with_sign_up_error("Email already registered");

        register(&backend, &ana()).await;
        register(&backend, &ana()).await;

        assert_eq!(backend.sign_up_count(), 2);
        assert!(backend.inserts().is_empty());
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    // The link handlers only receive a navigator, so they cannot reach the
    // backend; these check the target path.
    #[test]
    fn test_login_link_targets_login_route() {
        let mut visited = Vec::new();

        follow_login_link(|path| visited.push(path));

        assert_eq!(visited, vec!["/login"]);
    }

    #[test]
    fn test_register_link_targets_register_route() {
        let mut visited = Vec::new();

        follow_register_link(|path| visited.push(path));

        assert_eq!(visited, vec!["/register"]);
    }

    // ========================================================================
    // Sign-in and profile lookup
    // ========================================================================

    #[tokio::test]
    async fn test_sign_in_success() {
        let mut backend = MockBackend::new();
        backend.sign_in = Ok(Account::new("u1").with_email("a@b.com"));

        let outcome = sign_in(&backend, "a@b.com", "secret123").await;

        assert!(matches!(outcome, LoginOutcome::SignedIn(ref a) if a.id == "u1"));
        assert!(outcome.message().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_failure() {
        let backend = MockBackend::new();

        let outcome = sign_in(&backend, "a@b.com", "wrong").await;

        assert_eq!(
            outcome.message().map(|m| m.text),
            Some("❌ Error: Invalid login credentials".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_profile_found() {
        let mut backend = MockBackend::new();
        backend.select = Ok(Some(
            json!({"id": "u1", "nombre": "Ana", "correo": "a@b.com", "telefono": "555"}),
        ));

        let profile = fetch_profile(&backend, "u1").await.unwrap().unwrap();

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.phone, "555");
        assert_eq!(
            backend.calls(),
            vec![Call::Select {
                table: PROFILE_TABLE.to_string(),
                id: "u1".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_fetch_profile_missing_row() {
        let backend = MockBackend::new();
        assert_eq!(fetch_profile(&backend, "u1").await, Ok(None));
    }

    #[tokio::test]
    async fn test_fetch_profile_malformed_row() {
        let mut backend = MockBackend::new();
        backend.select = Ok(Some(json!({"id": "u1"})));

        let err = fetch_profile(&backend, "u1").await.unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }
}
