use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "window is not available".to_string())
}

/// The session store keeps credentials here; callers treat any failure as
/// "no persistence" and keep working in memory.
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "localStorage is not accessible".to_string())?
        .ok_or_else(|| "localStorage is disabled".to_string())
}
