//! Read-time relational joins.
//!
//! The tables hold foreign keys, not embedded rows. These functions load the
//! base records and attach their related records by following those keys
//! through the repositories.
//!
//! A record whose required relation cannot be resolved is dropped from the
//! result entirely; it is never returned with an empty relation. Each drop
//! is logged at `debug` so orphaned rows stay discoverable.

use std::collections::HashMap;

use pgmanager_core::types::DbId;

use crate::models::complaint::{Complaint, ComplaintWithTenant};
use crate::models::payment::{Payment, PaymentWithTenant};
use crate::models::room::Room;
use crate::models::tenant::{Tenant, TenantWithUser, TenantWithUserAndRoom};
use crate::models::user::User;
use crate::repositories::{ComplaintRepo, PaymentRepo, RoomRepo, TenantRepo, UserRepo};
use crate::DbPool;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Every tenant with its user and room attached.
pub async fn tenants_with_relations(
    pool: &DbPool,
) -> Result<Vec<TenantWithUserAndRoom>, sqlx::Error> {
    let tenants = TenantRepo::list(pool).await?;
    let users = index_by_id(UserRepo::list(pool).await?, |u| u.id);
    let rooms = index_by_id(RoomRepo::list(pool).await?, |r| r.id);

    Ok(attach_users_and_rooms(tenants, &users, &rooms))
}

/// A single tenant with its user and room, or `None` if the tenant is
/// unknown or either relation is missing.
pub async fn tenant_with_relations(
    pool: &DbPool,
    id: DbId,
) -> Result<Option<TenantWithUserAndRoom>, sqlx::Error> {
    match TenantRepo::find_by_id(pool, id).await? {
        Some(tenant) => resolve_tenant(pool, tenant).await,
        None => Ok(None),
    }
}

/// The tenant record belonging to a user account, with relations attached.
pub async fn tenant_by_user_id(
    pool: &DbPool,
    user_id: DbId,
) -> Result<Option<TenantWithUserAndRoom>, sqlx::Error> {
    match TenantRepo::find_by_user_id(pool, user_id).await? {
        Some(tenant) => resolve_tenant(pool, tenant).await,
        None => Ok(None),
    }
}

/// Every payment with its tenant (and the tenant's user) attached.
pub async fn payments_with_tenant(pool: &DbPool) -> Result<Vec<PaymentWithTenant>, sqlx::Error> {
    let payments = PaymentRepo::list(pool).await?;
    let tenants = index_by_id(TenantRepo::list(pool).await?, |t| t.id);
    let users = index_by_id(UserRepo::list(pool).await?, |u| u.id);

    Ok(attach_tenants_to_payments(payments, &tenants, &users))
}

/// Every complaint with its tenant (and the tenant's user) attached.
pub async fn complaints_with_tenant(
    pool: &DbPool,
) -> Result<Vec<ComplaintWithTenant>, sqlx::Error> {
    let complaints = ComplaintRepo::list(pool).await?;
    let tenants = index_by_id(TenantRepo::list(pool).await?, |t| t.id);
    let users = index_by_id(UserRepo::list(pool).await?, |u| u.id);

    Ok(attach_tenants_to_complaints(complaints, &tenants, &users))
}

async fn resolve_tenant(
    pool: &DbPool,
    tenant: Tenant,
) -> Result<Option<TenantWithUserAndRoom>, sqlx::Error> {
    let user = UserRepo::find_by_id(pool, tenant.user_id).await?;
    let room = RoomRepo::find_by_id(pool, tenant.room_id).await?;
    Ok(join_user_and_room(tenant, user.as_ref(), room.as_ref()))
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Build an id-keyed lookup table from a loaded collection.
pub fn index_by_id<T>(rows: Vec<T>, id: impl Fn(&T) -> DbId) -> HashMap<DbId, T> {
    rows.into_iter().map(|row| (id(&row), row)).collect()
}

/// Attach users and rooms to tenants, dropping tenants with a dangling key.
pub fn attach_users_and_rooms(
    tenants: Vec<Tenant>,
    users: &HashMap<DbId, User>,
    rooms: &HashMap<DbId, Room>,
) -> Vec<TenantWithUserAndRoom> {
    tenants
        .into_iter()
        .filter_map(|tenant| {
            let user = users.get(&tenant.user_id);
            let room = rooms.get(&tenant.room_id);
            join_user_and_room(tenant, user, room)
        })
        .collect()
}

/// Attach tenants (with users) to payments, dropping unresolvable payments.
pub fn attach_tenants_to_payments(
    payments: Vec<Payment>,
    tenants: &HashMap<DbId, Tenant>,
    users: &HashMap<DbId, User>,
) -> Vec<PaymentWithTenant> {
    payments
        .into_iter()
        .filter_map(|payment| {
            let Some(tenant) = tenant_with_user(payment.tenant_id, tenants, users) else {
                tracing::debug!(
                    payment_id = payment.id,
                    tenant_id = payment.tenant_id,
                    "Dropping payment with unresolved tenant",
                );
                return None;
            };
            Some(PaymentWithTenant { payment, tenant })
        })
        .collect()
}

/// Attach tenants (with users) to complaints, dropping unresolvable complaints.
pub fn attach_tenants_to_complaints(
    complaints: Vec<Complaint>,
    tenants: &HashMap<DbId, Tenant>,
    users: &HashMap<DbId, User>,
) -> Vec<ComplaintWithTenant> {
    complaints
        .into_iter()
        .filter_map(|complaint| {
            let Some(tenant) = tenant_with_user(complaint.tenant_id, tenants, users) else {
                tracing::debug!(
                    complaint_id = complaint.id,
                    tenant_id = complaint.tenant_id,
                    "Dropping complaint with unresolved tenant",
                );
                return None;
            };
            Some(ComplaintWithTenant { complaint, tenant })
        })
        .collect()
}

fn join_user_and_room(
    tenant: Tenant,
    user: Option<&User>,
    room: Option<&Room>,
) -> Option<TenantWithUserAndRoom> {
    match (user, room) {
        (Some(user), Some(room)) => Some(TenantWithUserAndRoom {
            tenant,
            user: user.clone().into(),
            room: room.clone(),
        }),
        _ => {
            tracing::debug!(
                tenant_id = tenant.id,
                user_id = tenant.user_id,
                room_id = tenant.room_id,
                user_found = user.is_some(),
                room_found = room.is_some(),
                "Dropping tenant with dangling reference",
            );
            None
        }
    }
}

fn tenant_with_user(
    tenant_id: DbId,
    tenants: &HashMap<DbId, Tenant>,
    users: &HashMap<DbId, User>,
) -> Option<TenantWithUser> {
    let tenant = tenants.get(&tenant_id)?;
    let user = users.get(&tenant.user_id)?;
    Some(TenantWithUser {
        tenant: tenant.clone(),
        user: user.clone().into(),
    })
}
