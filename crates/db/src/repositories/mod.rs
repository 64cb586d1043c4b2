//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod announcement_repo;
pub mod complaint_repo;
pub mod dashboard_repo;
pub mod payment_repo;
pub mod room_repo;
pub mod tenant_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use complaint_repo::ComplaintRepo;
pub use dashboard_repo::DashboardRepo;
pub use payment_repo::PaymentRepo;
pub use room_repo::RoomRepo;
pub use tenant_repo::TenantRepo;
pub use user_repo::UserRepo;
