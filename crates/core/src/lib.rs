pub mod config;
pub mod error;
pub mod grievance;
pub mod submission;
pub mod tables;
pub mod validation;

pub use config::{Config, DaemonConfig, SubmissionConfig, default_data_dir};
pub use error::{Error, Result};
pub use grievance::{Category, Sentiment, UrgencyLevel};
pub use submission::{GrievanceSubmission, TicketId};
pub use tables::{KeywordTables, SentimentLexicons, UrgencyTiers};
pub use validation::{
  ValidationError, ValidationResult, check_length, optional_string, require_string, require_string_array,
  require_string_range,
};
