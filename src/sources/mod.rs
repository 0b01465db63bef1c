pub mod interview_api;

pub use interview_api::InterviewApiClient;
