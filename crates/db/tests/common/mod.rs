use chrono::{TimeZone, Utc};
use pgmanager_db::models::room::CreateRoom;
use pgmanager_db::models::tenant::CreateTenant;
use pgmanager_db::models::user::CreateUser;
use pgmanager_db::DbPool;

/// Fresh in-memory store with the schema applied.
pub async fn test_pool() -> DbPool {
    let pool = pgmanager_db::create_pool("sqlite::memory:").await.unwrap();
    pgmanager_db::run_migrations(&pool).await.unwrap();
    pool
}

pub fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        role: "tenant".to_string(),
        name: "Test User".to_string(),
        phone: None,
    }
}

pub fn new_room(number: &str, status: &str, rent: i64) -> CreateRoom {
    CreateRoom {
        number: number.to_string(),
        room_type: "single".to_string(),
        rent,
        status: Some(status.to_string()),
        amenities: vec!["WiFi".to_string(), "AC".to_string()],
    }
}

pub fn new_tenant(user_id: i64, room_id: i64) -> CreateTenant {
    CreateTenant {
        user_id,
        room_id,
        leave_date: None,
        emergency_contact: None,
        id_proof: None,
        is_active: None,
    }
}

pub fn due_date() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap()
}
