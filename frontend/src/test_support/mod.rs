#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::types::User;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn sample_user() -> User {
        User {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            role: "user".into(),
            created_at: None,
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
