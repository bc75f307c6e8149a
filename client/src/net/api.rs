//! REST API helpers for the inspection-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration. Create errors
//! carry the backend's validation message for inline display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DashboardStats, Inspection, InspectionDetail, NewInspection, User};

#[cfg(any(test, feature = "hydrate"))]
fn inspection_endpoint(id: &str) -> String {
    format!("/api/inspections/{id}")
}

/// Extend a bare `HH:MM` value to the `HH:MM:SS` shape the backend stores.
/// Values already carrying seconds pass through unchanged.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_inspection_time(time: &str) -> String {
    if time.matches(':').count() == 1 {
        format!("{time}:00")
    } else {
        time.to_owned()
    }
}

/// The backend wraps some payloads under a `responseData` field and returns
/// others bare; accept either shape. Boundary adapter, not business logic.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_response_data(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map) if map.contains_key("responseData") => {
            map.remove("responseData").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    }
}

/// Best-effort extraction of the backend's validation message.
#[cfg(any(test, feature = "hydrate"))]
fn backend_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|root| root.get("message")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| format!("request failed: {status}"))
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let value = resp.json::<serde_json::Value>().await.ok()?;
        serde_json::from_value(unwrap_response_data(value)).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's message if the HTTP request fails or the
/// credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(backend_error_message(status, &body));
        }
        let value = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| e.to_string())?;
        serde_json::from_value(unwrap_response_data(value)).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch aggregate counters from `/api/dashboard/stats`.
pub async fn fetch_dashboard_stats() -> Option<DashboardStats> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/dashboard/stats")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let value = resp.json::<serde_json::Value>().await.ok()?;
        serde_json::from_value(unwrap_response_data(value)).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch all inspection records. Returns an empty list on failure so the
/// dashboard still renders.
pub async fn fetch_inspections() -> Vec<Inspection> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get("/api/inspections")
            .send()
            .await
        else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        let Ok(value) = resp.json::<serde_json::Value>().await else {
            return Vec::new();
        };
        serde_json::from_value(unwrap_response_data(value)).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch one inspection's full detail from `/api/inspections/{id}`.
pub async fn fetch_inspection(id: &str) -> Option<InspectionDetail> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&inspection_endpoint(id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let value = resp.json::<serde_json::Value>().await.ok()?;
        serde_json::from_value(unwrap_response_data(value)).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Create an inspection record via `POST /api/inspections`. The `time`
/// field is normalized to `HH:MM:SS` before transmission.
///
/// # Errors
///
/// Returns the backend's validation message for inline display; the
/// submitting form stays open for correction and resubmission.
pub async fn create_inspection(new_inspection: &NewInspection) -> Result<Inspection, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut payload = new_inspection.clone();
        payload.time = normalize_inspection_time(&payload.time);
        let resp = gloo_net::http::Request::post("/api/inspections")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(backend_error_message(status, &body));
        }
        let value = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| e.to_string())?;
        serde_json::from_value(unwrap_response_data(value)).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_inspection;
        Err("not available on server".to_owned())
    }
}
