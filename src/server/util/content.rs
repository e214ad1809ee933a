use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::server::error::AppError;

pub const APPLICATION_XML: &str = "application/xml";

/// Response body format selected from the request's `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    #[default]
    Json,
    Xml,
}

impl ContentFormat {
    /// Picks the first JSON or XML media range listed in `Accept`.
    ///
    /// Quality values are not weighed. Wildcards, unknown media types and a missing
    /// header all fall back to JSON.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    ///
    /// # Returns
    /// - `ContentFormat` - Format to serialize the response body in
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get_all(header::ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .find_map(|range| {
                let media = range.split(';').next().unwrap_or_default().trim();

                match media.to_ascii_lowercase().as_str() {
                    "application/json" => Some(Self::Json),
                    "application/xml" | "text/xml" => Some(Self::Xml),
                    _ => None,
                }
            })
            .unwrap_or_default()
    }

    /// Serializes `body` into a response in this format.
    ///
    /// # Arguments
    /// - `status` - Response status code
    /// - `root` - Name of the XML root element, unused for JSON
    /// - `body` - Value to serialize
    ///
    /// # Returns
    /// - `Ok(Response)` - Serialized response with matching `Content-Type`
    /// - `Err(AppError::InternalError)` - XML serialization failed
    pub fn respond<T: Serialize>(
        self,
        status: StatusCode,
        root: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        match self {
            Self::Json => Ok((status, Json(body)).into_response()),
            Self::Xml => {
                let xml = quick_xml::se::to_string_with_root(root, body).map_err(|e| {
                    AppError::InternalError(format!("Failed to serialize XML response: {}", e))
                })?;

                Ok((
                    status,
                    [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_XML))],
                    xml,
                )
                    .into_response())
            }
        }
    }
}
