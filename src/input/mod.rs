//! Input contracts from the resume and job sourcing collaborators

pub mod jobs;
pub mod resume;

pub use jobs::JobPosting;
pub use resume::{ResumeProfile, ResumeSections};
