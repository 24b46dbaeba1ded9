use crate::api::{
    ApiClient, ApiError, AuthResponse, LoginRequest, RegisterRequest, User,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

fn cached_user(api: &ApiClient) -> Option<User> {
    let raw = api.session().current_user()?;
    serde_json::from_str(&raw).ok()
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    let api = use_api_client();

    // Show the cached profile immediately, then confirm it with the server.
    if let Some(user) = cached_user(&api) {
        set_auth_state.update(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
        });
    }

    if api.session().access_token().is_some() {
        set_auth_state.update(|state| state.loading = true);
        let set_auth_for_check = set_auth_state;
        spawn_local(async move {
            match api.get_profile().await {
                Ok(user) => set_auth_for_check.update(|state| {
                    state.user = Some(user);
                    state.is_authenticated = true;
                    state.loading = false;
                }),
                Err(_) => set_auth_for_check.update(|state| {
                    state.user = None;
                    state.is_authenticated = false;
                    state.loading = false;
                }),
            }
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<AuthResponse, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api.login(request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = Some(response.user.clone());
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(response)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    api.logout().await;
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<AuthResponse, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<User, ApiError>> {
    let api = use_api_client();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { api.register(payload).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::{MemorySession, SessionStore};
    use httpmock::prelude::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        let logout_endpoint = server.mock(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(200)
                .json_body(serde_json::json!({ "msg": "Logged out" }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "access_token": "tok-1",
                "refresh_token": "ref-1",
                "user": {
                    "id": 1,
                    "username": "alice",
                    "email": "alice@example.com",
                    "role": "user",
                    "created_at": "2025-01-02T09:00:00"
                }
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let session = Arc::new(MemorySession::new());
        let api =
            ApiClient::new_with_base_url(format!("{}/api", server.base_url()), session.clone());

        login_request(
            LoginRequest {
                username: "alice".into(),
                password: "secret".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.user.as_ref().map(|u| u.id), Some(1));
        assert_eq!(session.access_token().as_deref(), Some("tok-1"));

        logout(&api, set_state).await;
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(session.access_token().is_none());
        logout_endpoint.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_unauthenticated() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401)
                .json_body(serde_json::json!({ "msg": "Bad username or password." }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let session = Arc::new(MemorySession::new());
        let api = ApiClient::new_with_base_url(format!("{}/api", server.base_url()), session);

        let err = login_request(
            LoginRequest {
                username: "alice".into(),
                password: "wrong".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, "UNAUTHORIZED");

        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
