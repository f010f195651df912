use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use crate::{IpcError, Method};

/// JSON-RPC style error codes used on the wire
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request<P = serde_json::Value> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub method: Method,
    #[serde(default)]
    pub params: P,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<R = serde_json::Value> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<R>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl<P: Serialize> Request<P> {
    pub fn new(id: Option<u64>, method: Method, params: P) -> Self {
        Self { id, method, params }
    }

    /// Erase the params type for transmission
    pub fn into_untyped(self) -> Result<Request, IpcError> {
        Ok(Request {
            id: self.id,
            method: self.method,
            params: serde_json::to_value(&self.params)?,
        })
    }
}

impl<R> Response<R> {
    pub fn success(id: Option<u64>, result: R) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<u64>, code: i32, message: &str) -> Self {
        Self {
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.to_string(),
            }),
        }
    }

    /// Turn the response into the result or the RPC error it carries
    pub fn into_result(self) -> Result<R, IpcError> {
        if let Some(err) = self.error {
            return Err(IpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        self.result.ok_or(IpcError::NoResult)
    }
}

impl Response {
    /// Decode an untyped response into a typed result
    pub fn decode<R: DeserializeOwned>(self) -> Result<R, IpcError> {
        let value = self.into_result()?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CategorizeParams;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = Request::new(
            Some(7),
            Method::Categorize,
            CategorizeParams { text: "road broken".to_string() },
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, json!({"id": 7, "method": "categorize", "params": {"text": "road broken"}}));
    }

    #[test]
    fn test_request_params_default() {
        let request: Request = serde_json::from_str(r#"{"method": "ping"}"#).unwrap();
        assert_eq!(request.method, Method::Ping);
        assert!(request.id.is_none());
        assert!(request.params.is_null());
    }

    #[test]
    fn test_error_response_skips_result() {
        let response: Response = Response::error(Some(1), error_codes::INVALID_PARAMS, "text is required");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, json!({"id": 1, "error": {"code": -32602, "message": "text is required"}}));
    }

    #[test]
    fn test_into_result() {
        let ok: Response<String> = Response::success(None, "pong".to_string());
        assert_eq!(ok.into_result().unwrap(), "pong");

        let err: Response<String> = Response::error(None, error_codes::INTERNAL_ERROR, "boom");
        assert!(matches!(err.into_result(), Err(IpcError::Rpc { code: -32603, .. })));

        let empty: Response<String> = Response { id: None, result: None, error: None };
        assert!(matches!(empty.into_result(), Err(IpcError::NoResult)));
    }
}
