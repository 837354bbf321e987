use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{self, BookingStatus, DamageStatus, UserRole};
use crate::schema::{bookings, damage_reports, equipments, profiles, room_equipments, rooms};

// Negative offsets and limits are a Postgres error; clamp instead of 500ing.
fn page_bounds(skip: i64, limit: i64) -> (i64, i64) {
    (skip.max(0), limit.max(0))
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

pub fn list_bookings(
    conn: &mut PgConnection,
    query: &models::BookingListQuery,
) -> Result<Vec<models::Booking>, ApiError> {
    let mut q = bookings::table.into_boxed();
    if let Some(status) = query.status {
        q = q.filter(bookings::status.eq(status));
    }
    if let Some(room_id) = query.room_id {
        q = q.filter(bookings::room_id.eq(room_id));
    }
    if let Some(user_id) = query.user_id {
        q = q.filter(bookings::user_id.eq(user_id));
    }
    let (skip, limit) = page_bounds(query.skip, query.limit);
    let rows = q
        .order(bookings::start_time.desc())
        .offset(skip)
        .limit(limit)
        .load(conn)?;
    Ok(rows)
}

pub fn get_booking(conn: &mut PgConnection, booking_id: Uuid) -> Result<models::Booking, ApiError> {
    bookings::table
        .find(booking_id)
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("booking"))
}

/// Creates a booking in PENDING status. The room row is locked for the whole
/// transaction, so the conflict check and the insert cannot race a concurrent
/// request for the same room.
pub fn create_booking(
    conn: &mut PgConnection,
    user_id: Uuid,
    form: &models::BookingCreate,
) -> Result<models::Booking, ApiError> {
    models::validate_booking_window(form.start_time, form.end_time)?;

    conn.transaction(|conn| {
        let room: models::Room = rooms::table
            .find(form.room_id)
            .for_update()
            .first(conn)
            .optional()?
            .ok_or(ApiError::NotFound("room"))?;

        if !room.is_available() {
            return Err(ApiError::RoomUnavailable);
        }

        // Half-open overlap: [a_start, a_end) intersects [b_start, b_end)
        // iff a_start < b_end AND b_start < a_end. Back-to-back slots pass.
        let conflict: Option<Uuid> = bookings::table
            .filter(bookings::room_id.eq(form.room_id))
            .filter(bookings::status.eq_any(BookingStatus::ACTIVE))
            .filter(bookings::start_time.lt(form.end_time))
            .filter(bookings::end_time.gt(form.start_time))
            .select(bookings::id)
            .first(conn)
            .optional()?;

        if conflict.is_some() {
            return Err(ApiError::BookingConflict);
        }

        let now = Utc::now();
        let new_booking = models::NewBooking {
            id: Uuid::new_v4(),
            room_id: form.room_id,
            user_id,
            start_time: form.start_time,
            end_time: form.end_time,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
            created_by: Some(user_id),
        };
        diesel::insert_into(bookings::table)
            .values(&new_booking)
            .execute(conn)?;

        let booking = bookings::table.find(new_booking.id).first(conn)?;
        Ok(booking)
    })
}

fn set_booking_status(
    conn: &mut PgConnection,
    booking_id: Uuid,
    new_status: BookingStatus,
) -> Result<models::Booking, ApiError> {
    diesel::update(bookings::table.find(booking_id))
        .set((
            bookings::status.eq(new_status),
            bookings::updated_at.eq(Utc::now()),
        ))
        .execute(conn)?;
    let booking = bookings::table.find(booking_id).first(conn)?;
    Ok(booking)
}

/// PENDING -> APPROVED. Conflicts are not re-checked here; the check at
/// creation time is trusted.
pub fn approve_booking(
    conn: &mut PgConnection,
    booking_id: Uuid,
) -> Result<models::Booking, ApiError> {
    conn.transaction(|conn| {
        let booking: models::Booking = bookings::table
            .find(booking_id)
            .for_update()
            .first(conn)
            .optional()?
            .ok_or(ApiError::NotFound("booking"))?;

        booking.status.validate_transition(BookingStatus::Approved)?;

        set_booking_status(conn, booking_id, BookingStatus::Approved)
    })
}

/// Rejects from any status, not only PENDING. Asymmetric with approve on
/// purpose; see DESIGN.md.
pub fn reject_booking(
    conn: &mut PgConnection,
    booking_id: Uuid,
) -> Result<models::Booking, ApiError> {
    conn.transaction(|conn| {
        let booking = get_booking(conn, booking_id)?;
        booking.status.validate_transition(BookingStatus::Rejected)?;
        set_booking_status(conn, booking_id, BookingStatus::Rejected)
    })
}

/// Cancels from any status.
pub fn cancel_booking(
    conn: &mut PgConnection,
    booking_id: Uuid,
) -> Result<models::Booking, ApiError> {
    conn.transaction(|conn| {
        let booking = get_booking(conn, booking_id)?;
        booking.status.validate_transition(BookingStatus::Cancelled)?;
        set_booking_status(conn, booking_id, BookingStatus::Cancelled)
    })
}

pub fn delete_booking(conn: &mut PgConnection, booking_id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(bookings::table.find(booking_id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("booking"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

pub fn list_rooms(
    conn: &mut PgConnection,
    query: &models::RoomListQuery,
) -> Result<Vec<models::Room>, ApiError> {
    let mut q = rooms::table.into_boxed();
    if let Some(status) = query.status {
        q = q.filter(rooms::status.eq(status));
    }
    let (skip, limit) = page_bounds(query.skip, query.limit);
    let rows = q.offset(skip).limit(limit).load(conn)?;
    Ok(rows)
}

pub fn list_available_rooms(conn: &mut PgConnection) -> Result<Vec<models::Room>, ApiError> {
    let rows = rooms::table.filter(rooms::status.eq(true)).load(conn)?;
    Ok(rows)
}

pub fn get_room(conn: &mut PgConnection, room_id: Uuid) -> Result<models::Room, ApiError> {
    rooms::table
        .find(room_id)
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("room"))
}

pub fn get_room_with_equipments(
    conn: &mut PgConnection,
    room_id: Uuid,
) -> Result<models::RoomWithEquipments, ApiError> {
    let room = get_room(conn, room_id)?;
    let equipments: Vec<models::EquipmentInRoom> = room_equipments::table
        .inner_join(equipments::table)
        .filter(room_equipments::room_id.eq(room_id))
        .select((equipments::id, equipments::name, room_equipments::quantity))
        .load(conn)?;
    Ok(models::RoomWithEquipments { room, equipments })
}

pub fn create_room(
    conn: &mut PgConnection,
    form: &models::RoomCreate,
) -> Result<models::Room, ApiError> {
    if form.capacity < 1 {
        return Err(ApiError::Validation("capacity must be at least 1".to_owned()));
    }
    let now = Utc::now();
    let new_room = models::NewRoom {
        id: Uuid::new_v4(),
        name: form.name.clone(),
        capacity: form.capacity,
        status: form.status,
        created_at: now,
        updated_at: now,
        created_by: None,
    };
    diesel::insert_into(rooms::table)
        .values(&new_room)
        .execute(conn)?;
    let room = rooms::table.find(new_room.id).first(conn)?;
    Ok(room)
}

pub fn update_room(
    conn: &mut PgConnection,
    room_id: Uuid,
    form: &models::RoomUpdate,
) -> Result<models::Room, ApiError> {
    if matches!(form.capacity, Some(c) if c < 1) {
        return Err(ApiError::Validation("capacity must be at least 1".to_owned()));
    }
    get_room(conn, room_id)?;
    diesel::update(rooms::table.find(room_id))
        .set((form, rooms::updated_at.eq(Utc::now())))
        .execute(conn)?;
    let room = rooms::table.find(room_id).first(conn)?;
    Ok(room)
}

/// The room owns its bookings, equipment links and damage reports; all of
/// them go in the same transaction. No FK cascades in the schema.
pub fn delete_room(conn: &mut PgConnection, room_id: Uuid) -> Result<(), ApiError> {
    conn.transaction(|conn| {
        get_room(conn, room_id)?;
        diesel::delete(bookings::table.filter(bookings::room_id.eq(room_id))).execute(conn)?;
        diesel::delete(room_equipments::table.filter(room_equipments::room_id.eq(room_id)))
            .execute(conn)?;
        diesel::delete(damage_reports::table.filter(damage_reports::room_id.eq(room_id)))
            .execute(conn)?;
        diesel::delete(rooms::table.find(room_id)).execute(conn)?;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Equipments
// ---------------------------------------------------------------------------

pub fn list_equipments(
    conn: &mut PgConnection,
    query: &models::PageQuery,
) -> Result<Vec<models::Equipment>, ApiError> {
    let (skip, limit) = page_bounds(query.skip, query.limit);
    let rows = equipments::table.offset(skip).limit(limit).load(conn)?;
    Ok(rows)
}

pub fn get_equipment(
    conn: &mut PgConnection,
    equipment_id: Uuid,
) -> Result<models::Equipment, ApiError> {
    equipments::table
        .find(equipment_id)
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("equipment"))
}

pub fn create_equipment(
    conn: &mut PgConnection,
    form: &models::EquipmentCreate,
) -> Result<models::Equipment, ApiError> {
    let now = Utc::now();
    let new_equipment = models::NewEquipment {
        id: Uuid::new_v4(),
        name: form.name.clone(),
        description: form.description.clone(),
        created_at: now,
        updated_at: now,
        created_by: None,
    };
    diesel::insert_into(equipments::table)
        .values(&new_equipment)
        .execute(conn)?;
    let equipment = equipments::table.find(new_equipment.id).first(conn)?;
    Ok(equipment)
}

pub fn update_equipment(
    conn: &mut PgConnection,
    equipment_id: Uuid,
    form: &models::EquipmentUpdate,
) -> Result<models::Equipment, ApiError> {
    get_equipment(conn, equipment_id)?;
    diesel::update(equipments::table.find(equipment_id))
        .set((form, equipments::updated_at.eq(Utc::now())))
        .execute(conn)?;
    let equipment = equipments::table.find(equipment_id).first(conn)?;
    Ok(equipment)
}

/// Deleting an equipment removes its room links and detaches it from damage
/// reports (the reports themselves stay).
pub fn delete_equipment(conn: &mut PgConnection, equipment_id: Uuid) -> Result<(), ApiError> {
    conn.transaction(|conn| {
        get_equipment(conn, equipment_id)?;
        diesel::delete(
            room_equipments::table.filter(room_equipments::equipment_id.eq(equipment_id)),
        )
        .execute(conn)?;
        diesel::update(
            damage_reports::table.filter(damage_reports::equipment_id.eq(equipment_id)),
        )
        .set(damage_reports::equipment_id.eq(None::<Uuid>))
        .execute(conn)?;
        diesel::delete(equipments::table.find(equipment_id)).execute(conn)?;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Room-equipment links
// ---------------------------------------------------------------------------

pub enum AdjustOutcome {
    Updated(models::RoomEquipment),
    Removed,
}

pub fn list_room_equipments(
    conn: &mut PgConnection,
    room_id: Uuid,
) -> Result<Vec<models::RoomEquipment>, ApiError> {
    let rows = room_equipments::table
        .filter(room_equipments::room_id.eq(room_id))
        .load(conn)?;
    Ok(rows)
}

fn get_room_equipment(
    conn: &mut PgConnection,
    link_id: Uuid,
) -> Result<models::RoomEquipment, ApiError> {
    room_equipments::table
        .find(link_id)
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("room equipment"))
}

/// Adds equipment to a room; if the pair already has a link, the quantity is
/// incremented instead of inserting a duplicate row.
pub fn add_equipment_to_room(
    conn: &mut PgConnection,
    form: &models::RoomEquipmentCreate,
) -> Result<models::RoomEquipment, ApiError> {
    if form.quantity < 1 {
        return Err(ApiError::Validation("quantity must be at least 1".to_owned()));
    }
    conn.transaction(|conn| {
        get_room(conn, form.room_id)?;
        get_equipment(conn, form.equipment_id)?;

        let existing: Option<models::RoomEquipment> = room_equipments::table
            .filter(room_equipments::room_id.eq(form.room_id))
            .filter(room_equipments::equipment_id.eq(form.equipment_id))
            .for_update()
            .first(conn)
            .optional()?;

        if let Some(link) = existing {
            diesel::update(room_equipments::table.find(link.id))
                .set(room_equipments::quantity.eq(link.quantity + form.quantity))
                .execute(conn)?;
            return get_room_equipment(conn, link.id);
        }

        let new_link = models::NewRoomEquipment {
            id: Uuid::new_v4(),
            room_id: form.room_id,
            equipment_id: form.equipment_id,
            quantity: form.quantity,
            created_at: Utc::now(),
            created_by: None,
        };
        diesel::insert_into(room_equipments::table)
            .values(&new_link)
            .execute(conn)?;
        get_room_equipment(conn, new_link.id)
    })
}

pub fn set_room_equipment_quantity(
    conn: &mut PgConnection,
    link_id: Uuid,
    quantity: i32,
) -> Result<models::RoomEquipment, ApiError> {
    if quantity < 1 {
        return Err(ApiError::Validation("quantity must be at least 1".to_owned()));
    }
    get_room_equipment(conn, link_id)?;
    diesel::update(room_equipments::table.find(link_id))
        .set(room_equipments::quantity.eq(quantity))
        .execute(conn)?;
    get_room_equipment(conn, link_id)
}

/// Adjusts the quantity by a signed amount. Going below zero is an error;
/// reaching exactly zero removes the link row.
pub fn adjust_room_equipment_quantity(
    conn: &mut PgConnection,
    link_id: Uuid,
    amount: i32,
) -> Result<AdjustOutcome, ApiError> {
    conn.transaction(|conn| {
        let link: models::RoomEquipment = room_equipments::table
            .find(link_id)
            .for_update()
            .first(conn)
            .optional()?
            .ok_or(ApiError::NotFound("room equipment"))?;

        let new_quantity = link.quantity + amount;
        if new_quantity < 0 {
            return Err(ApiError::Validation(format!(
                "cannot reduce by {}. Only {} available",
                amount.abs(),
                link.quantity
            )));
        }
        if new_quantity == 0 {
            diesel::delete(room_equipments::table.find(link_id)).execute(conn)?;
            return Ok(AdjustOutcome::Removed);
        }
        diesel::update(room_equipments::table.find(link_id))
            .set(room_equipments::quantity.eq(new_quantity))
            .execute(conn)?;
        get_room_equipment(conn, link_id).map(AdjustOutcome::Updated)
    })
}

pub fn remove_equipment_from_room(conn: &mut PgConnection, link_id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(room_equipments::table.find(link_id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("room equipment"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Damage reports
// ---------------------------------------------------------------------------

pub fn list_damage_reports(
    conn: &mut PgConnection,
    query: &models::DamageReportListQuery,
) -> Result<Vec<models::DamageReport>, ApiError> {
    let mut q = damage_reports::table.into_boxed();
    if let Some(status) = query.status {
        q = q.filter(damage_reports::status.eq(status));
    }
    if let Some(room_id) = query.room_id {
        q = q.filter(damage_reports::room_id.eq(room_id));
    }
    let (skip, limit) = page_bounds(query.skip, query.limit);
    let rows = q
        .order(damage_reports::created_at.desc())
        .offset(skip)
        .limit(limit)
        .load(conn)?;
    Ok(rows)
}

pub fn get_damage_report(
    conn: &mut PgConnection,
    report_id: Uuid,
) -> Result<models::DamageReport, ApiError> {
    damage_reports::table
        .find(report_id)
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("damage report"))
}

pub fn create_damage_report(
    conn: &mut PgConnection,
    reporter_id: Uuid,
    form: &models::DamageReportCreate,
) -> Result<models::DamageReport, ApiError> {
    if form.description.trim().is_empty() {
        return Err(ApiError::Validation("description must not be empty".to_owned()));
    }
    get_room(conn, form.room_id)?;
    if let Some(equipment_id) = form.equipment_id {
        get_equipment(conn, equipment_id)?;
    }

    let now = Utc::now();
    let new_report = models::NewDamageReport {
        id: Uuid::new_v4(),
        room_id: form.room_id,
        equipment_id: form.equipment_id,
        reporter_id,
        description: form.description.clone(),
        status: DamageStatus::Reported,
        created_at: now,
        updated_at: now,
        created_by: Some(reporter_id),
    };
    diesel::insert_into(damage_reports::table)
        .values(&new_report)
        .execute(conn)?;
    let report = damage_reports::table.find(new_report.id).first(conn)?;
    Ok(report)
}

pub fn update_damage_report(
    conn: &mut PgConnection,
    report_id: Uuid,
    form: &models::DamageReportUpdate,
) -> Result<models::DamageReport, ApiError> {
    if matches!(&form.description, Some(d) if d.trim().is_empty()) {
        return Err(ApiError::Validation("description must not be empty".to_owned()));
    }
    get_damage_report(conn, report_id)?;
    diesel::update(damage_reports::table.find(report_id))
        .set((form, damage_reports::updated_at.eq(Utc::now())))
        .execute(conn)?;
    get_damage_report(conn, report_id)
}

/// Status setters are unconditional; back-transitions are not rejected. The
/// intended lifecycle is reported -> in_progress -> resolved.
pub fn set_damage_report_status(
    conn: &mut PgConnection,
    report_id: Uuid,
    new_status: DamageStatus,
) -> Result<models::DamageReport, ApiError> {
    get_damage_report(conn, report_id)?;
    diesel::update(damage_reports::table.find(report_id))
        .set((
            damage_reports::status.eq(new_status),
            damage_reports::updated_at.eq(Utc::now()),
        ))
        .execute(conn)?;
    get_damage_report(conn, report_id)
}

pub fn delete_damage_report(conn: &mut PgConnection, report_id: Uuid) -> Result<(), ApiError> {
    let deleted = diesel::delete(damage_reports::table.find(report_id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("damage report"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Looks up the acting user's profile by the id minted by the external auth
/// provider and requires the admin role.
pub fn require_admin(
    conn: &mut PgConnection,
    auth_user_id: Uuid,
) -> Result<models::Profile, ApiError> {
    let profile: models::Profile = profiles::table
        .filter(profiles::auth_user_id.eq(auth_user_id))
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::Forbidden("acting user has no profile".to_owned()))?;
    if !profile.is_admin() {
        return Err(ApiError::Forbidden("admin privileges required".to_owned()));
    }
    Ok(profile)
}

pub fn list_profiles(
    conn: &mut PgConnection,
    acting: Uuid,
    query: &models::ProfileListQuery,
) -> Result<Vec<models::Profile>, ApiError> {
    require_admin(conn, acting)?;
    let mut q = profiles::table.into_boxed();
    if let Some(role) = query.role {
        q = q.filter(profiles::role.eq(role));
    }
    let (skip, limit) = page_bounds(query.skip, query.limit);
    let rows = q
        .order(profiles::created_at.desc())
        .offset(skip)
        .limit(limit)
        .load(conn)?;
    Ok(rows)
}

pub fn get_profile_summary(
    conn: &mut PgConnection,
    acting: Uuid,
) -> Result<models::ProfileSummary, ApiError> {
    require_admin(conn, acting)?;
    let total: i64 = profiles::table.count().get_result(conn)?;
    let admin: i64 = profiles::table
        .filter(profiles::role.eq(UserRole::Admin))
        .count()
        .get_result(conn)?;
    let teacher: i64 = profiles::table
        .filter(profiles::role.eq(UserRole::Teacher))
        .count()
        .get_result(conn)?;
    let student: i64 = profiles::table
        .filter(profiles::role.eq(UserRole::Student))
        .count()
        .get_result(conn)?;
    Ok(models::ProfileSummary {
        total,
        admin,
        teacher,
        student,
    })
}

pub fn get_profile(
    conn: &mut PgConnection,
    acting: Uuid,
    profile_id: Uuid,
) -> Result<models::Profile, ApiError> {
    require_admin(conn, acting)?;
    find_profile(conn, profile_id)
}

fn find_profile(conn: &mut PgConnection, profile_id: Uuid) -> Result<models::Profile, ApiError> {
    profiles::table
        .find(profile_id)
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("profile"))
}

pub fn get_profile_by_auth_user_id(
    conn: &mut PgConnection,
    auth_user_id: Uuid,
) -> Result<models::Profile, ApiError> {
    profiles::table
        .filter(profiles::auth_user_id.eq(auth_user_id))
        .first(conn)
        .optional()?
        .ok_or(ApiError::NotFound("profile"))
}

pub fn create_profile(
    conn: &mut PgConnection,
    form: &models::ProfileCreate,
) -> Result<models::Profile, ApiError> {
    let existing: Option<Uuid> = profiles::table
        .filter(profiles::auth_user_id.eq(form.auth_user_id))
        .select(profiles::id)
        .first(conn)
        .optional()?;
    if existing.is_some() {
        return Err(ApiError::AlreadyExists(
            "profile already exists for this user".to_owned(),
        ));
    }

    let now = Utc::now();
    let new_profile = models::NewProfile {
        id: Uuid::new_v4(),
        auth_user_id: form.auth_user_id,
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        role: form.role,
        created_at: now,
        updated_at: now,
    };
    diesel::insert_into(profiles::table)
        .values(&new_profile)
        .execute(conn)?;
    find_profile(conn, new_profile.id)
}

/// Self-service update. The role field is ignored: users cannot promote
/// themselves.
pub fn update_my_profile(
    conn: &mut PgConnection,
    auth_user_id: Uuid,
    form: &models::ProfileUpdate,
) -> Result<models::Profile, ApiError> {
    let me = get_profile_by_auth_user_id(conn, auth_user_id)?;
    let stripped = models::ProfileUpdate {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        role: None,
    };
    diesel::update(profiles::table.find(me.id))
        .set((&stripped, profiles::updated_at.eq(Utc::now())))
        .execute(conn)?;
    find_profile(conn, me.id)
}

pub fn update_profile(
    conn: &mut PgConnection,
    acting: Uuid,
    profile_id: Uuid,
    form: &models::ProfileUpdate,
) -> Result<models::Profile, ApiError> {
    let admin = require_admin(conn, acting)?;
    find_profile(conn, profile_id)?;
    diesel::update(profiles::table.find(profile_id))
        .set((
            form,
            profiles::updated_at.eq(Utc::now()),
            profiles::updated_by.eq(Some(admin.auth_user_id)),
        ))
        .execute(conn)?;
    find_profile(conn, profile_id)
}

pub fn change_profile_role(
    conn: &mut PgConnection,
    acting: Uuid,
    profile_id: Uuid,
    role: UserRole,
) -> Result<models::Profile, ApiError> {
    let admin = require_admin(conn, acting)?;
    let profile = find_profile(conn, profile_id)?;
    if profile.id == admin.id {
        return Err(ApiError::Validation("cannot change your own role".to_owned()));
    }
    diesel::update(profiles::table.find(profile_id))
        .set((
            profiles::role.eq(role),
            profiles::updated_at.eq(Utc::now()),
            profiles::updated_by.eq(Some(admin.auth_user_id)),
        ))
        .execute(conn)?;
    find_profile(conn, profile_id)
}

/// The profile owns its bookings; both go in one transaction. The identity
/// record at the auth provider is not touched here.
pub fn delete_profile(
    conn: &mut PgConnection,
    acting: Uuid,
    profile_id: Uuid,
) -> Result<(), ApiError> {
    conn.transaction(|conn| {
        let admin = require_admin(conn, acting)?;
        let profile = find_profile(conn, profile_id)?;
        if profile.id == admin.id {
            return Err(ApiError::Validation("cannot delete yourself".to_owned()));
        }
        diesel::delete(bookings::table.filter(bookings::user_id.eq(profile.id))).execute(conn)?;
        diesel::delete(profiles::table.find(profile.id)).execute(conn)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_clamps_negative_values() {
        assert_eq!(page_bounds(-5, -1), (0, 0));
        assert_eq!(page_bounds(-1, 100), (0, 100));
        assert_eq!(page_bounds(10, 50), (10, 50));
    }
}
