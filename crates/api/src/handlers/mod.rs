pub mod announcement;
pub mod auth;
pub mod complaint;
pub mod dashboard;
pub mod payment;
pub mod room;
pub mod tenant;
