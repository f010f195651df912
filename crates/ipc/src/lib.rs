mod method;
mod request;
mod response;
mod protocol;
mod error;

pub use method::Method;
pub use request::*;
pub use response::*;
pub use protocol::{Request, Response, RpcError, error_codes};
pub use error::IpcError;
