use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    // Meta
    Ping, Status, Shutdown,
    // Grievances
    Categorize, Submit, Summarize,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Ping => "ping",
            Method::Status => "status",
            Method::Shutdown => "shutdown",
            Method::Categorize => "categorize",
            Method::Submit => "submit",
            Method::Summarize => "summarize",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_as_str() {
        for method in [
            Method::Ping,
            Method::Status,
            Method::Shutdown,
            Method::Categorize,
            Method::Submit,
            Method::Summarize,
        ] {
            let wire = serde_json::to_value(method).unwrap();
            assert_eq!(wire, method.as_str());
        }
    }
}
