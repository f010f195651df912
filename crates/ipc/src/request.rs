use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PingParams;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusParams;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShutdownParams;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizeParams {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitParams {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummarizeParams {
    pub texts: Vec<String>,
}
