pub mod application_service;
pub mod job_catalog;
pub mod submission_service;
