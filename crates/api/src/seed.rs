//! Demo data loaded into an empty store at startup.
//!
//! One admin, four rooms, two tenants with their accounts, and a handful of
//! payments, complaints, and announcements. Seeding is skipped when any user
//! already exists, so a file-backed store is only seeded once.

use chrono::{Duration, TimeZone, Utc};
use pgmanager_core::roles::{ROLE_ADMIN, ROLE_TENANT};
use pgmanager_db::models::announcement::CreateAnnouncement;
use pgmanager_db::models::complaint::CreateComplaint;
use pgmanager_db::models::payment::CreatePayment;
use pgmanager_db::models::room::CreateRoom;
use pgmanager_db::models::tenant::CreateTenant;
use pgmanager_db::models::user::CreateUser;
use pgmanager_db::repositories::{
    AnnouncementRepo, ComplaintRepo, PaymentRepo, RoomRepo, TenantRepo, UserRepo,
};
use pgmanager_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Load the demo data set if the store holds no users.
///
/// Returns `true` when data was inserted.
pub async fn seed_if_empty(pool: &DbPool) -> AppResult<bool> {
    if !UserRepo::list(pool).await?.is_empty() {
        tracing::info!("Store already populated, skipping seed");
        return Ok(false);
    }

    let admin_hash = hash("admin123")?;
    let tenant_hash = hash("tenant123")?;
    let now = Utc::now();

    // --- Users and rooms ---
    let admin = UserRepo::create(
        pool,
        &CreateUser {
            email: "admin@pgmanager.com".into(),
            password_hash: admin_hash,
            role: ROLE_ADMIN.into(),
            name: "Admin User".into(),
            phone: Some("+91 98765 43210".into()),
        },
    )
    .await?;

    let rooms: [(&str, &str, i64, &str, &[&str]); 4] = [
        (
            "101",
            "single",
            2500,
            "occupied",
            &["AC", "WiFi", "Attached Bathroom", "Study Table"],
        ),
        (
            "102",
            "double",
            3000,
            "vacant",
            &["WiFi", "Shared Bathroom", "Wardrobe"],
        ),
        (
            "103",
            "triple",
            2000,
            "occupied",
            &["WiFi", "Shared Bathroom", "Study Table"],
        ),
        (
            "201",
            "single",
            2800,
            "maintenance",
            &["AC", "WiFi", "Attached Bathroom", "Balcony"],
        ),
    ];
    let mut room_ids = Vec::with_capacity(rooms.len());
    for (number, room_type, rent, status, amenities) in rooms {
        let room = RoomRepo::create(
            pool,
            &CreateRoom {
                number: number.into(),
                room_type: room_type.into(),
                rent,
                status: Some(status.into()),
                amenities: strings(amenities),
            },
        )
        .await?;
        room_ids.push(room.id);
    }

    let john = UserRepo::create(
        pool,
        &CreateUser {
            email: "john@example.com".into(),
            password_hash: tenant_hash.clone(),
            role: ROLE_TENANT.into(),
            name: "John Doe".into(),
            phone: Some("+91 98765 43211".into()),
        },
    )
    .await?;

    let sarah = UserRepo::create(
        pool,
        &CreateUser {
            email: "sarah@example.com".into(),
            password_hash: tenant_hash,
            role: ROLE_TENANT.into(),
            name: "Sarah Wilson".into(),
            phone: Some("+91 98765 43212".into()),
        },
    )
    .await?;

    // --- Tenancies ---
    let mut tenant_ids = Vec::with_capacity(2);
    for (user_id, room_id, contact, id_proof, days_ago) in [
        (john.id, room_ids[0], "+91 98765 43213", "aadhar.jpg", 30),
        (sarah.id, room_ids[2], "+91 98765 43214", "passport.jpg", 15),
    ] {
        let tenant = TenantRepo::create(
            pool,
            &CreateTenant {
                user_id,
                room_id,
                leave_date: None,
                emergency_contact: Some(contact.into()),
                id_proof: Some(id_proof.into()),
                is_active: Some(true),
            },
        )
        .await?;
        TenantRepo::set_join_date(pool, tenant.id, now - Duration::days(days_ago)).await?;
        tenant_ids.push(tenant.id);
    }
    let (john_tenant, sarah_tenant) = (tenant_ids[0], tenant_ids[1]);

    // --- Payments ---
    let december = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).single();
    let november = Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).single();
    let (Some(december), Some(november)) = (december, november) else {
        return Err(AppError::InternalError("Invalid seed due date".into()));
    };

    let payments = [
        CreatePayment {
            tenant_id: john_tenant,
            amount: 2500,
            month: "2024-12".into(),
            status: Some("paid".into()),
            paid_at: Some(now - Duration::days(5)),
            due_date: december,
            payment_method: Some("upi".into()),
            transaction_id: Some("TXN123456789".into()),
        },
        CreatePayment {
            tenant_id: sarah_tenant,
            amount: 2000,
            month: "2024-12".into(),
            status: Some("pending".into()),
            paid_at: None,
            due_date: december,
            payment_method: None,
            transaction_id: None,
        },
        CreatePayment {
            tenant_id: john_tenant,
            amount: 2500,
            month: "2024-11".into(),
            status: Some("paid".into()),
            paid_at: Some(now - Duration::days(35)),
            due_date: november,
            payment_method: Some("bank_transfer".into()),
            transaction_id: Some("TXN987654321".into()),
        },
    ];
    for payment in &payments {
        PaymentRepo::create(pool, payment).await?;
    }

    // --- Complaints ---
    let complaints = [
        CreateComplaint {
            tenant_id: john_tenant,
            title: "AC not working properly".into(),
            description: "The air conditioning unit in room 101 is making strange noises \
                          and not cooling effectively. Please send maintenance to check."
                .into(),
            priority: Some("high".into()),
            status: Some("in_progress".into()),
            category: Some("maintenance".into()),
            admin_notes: Some("Technician scheduled for tomorrow morning".into()),
        },
        CreateComplaint {
            tenant_id: sarah_tenant,
            title: "WiFi connectivity issues".into(),
            description: "Internet connection is very slow and frequently disconnects in \
                          room 103. This is affecting my work from home."
                .into(),
            priority: Some("medium".into()),
            status: Some("open".into()),
            category: Some("utilities".into()),
            admin_notes: None,
        },
    ];
    for complaint in &complaints {
        ComplaintRepo::create(pool, complaint).await?;
    }

    // --- Announcements ---
    let announcements = [
        (
            "Monthly Maintenance Notice",
            "Dear residents, we will be conducting routine maintenance of the water pumps \
             and electrical systems on December 15th from 10 AM to 2 PM. Please plan \
             accordingly. Water supply will be restored by 3 PM.",
            "high",
        ),
        (
            "Holiday Celebration",
            "Join us for a festive celebration in the common area on December 25th at 6 PM. \
             Snacks and refreshments will be provided. Looking forward to celebrating together!",
            "normal",
        ),
        (
            "New House Rules",
            "Please note the updated house rules: 1) Quiet hours are from 10 PM to 7 AM, \
             2) No smoking in rooms or common areas, 3) Visitors must register at reception. \
             Thank you for your cooperation.",
            "normal",
        ),
    ];
    for (title, content, priority) in announcements {
        AnnouncementRepo::create(
            pool,
            &CreateAnnouncement {
                title: title.into(),
                content: content.into(),
                priority: Some(priority.into()),
                target_audience: Some("all".into()),
                is_active: Some(true),
                created_by: Some(admin.id),
            },
        )
        .await?;
    }

    tracing::info!(
        users = 3,
        rooms = room_ids.len(),
        tenants = tenant_ids.len(),
        payments = payments.len(),
        complaints = complaints.len(),
        announcements = 3,
        "Seeded demo data",
    );
    Ok(true)
}
