use crate::error::ApiError;
use crate::schema::{bookings, damage_reports, equipments, profiles, room_equipments, rooms};
use chrono::{DateTime, Utc};
use diesel::{
    deserialize::{self, FromSql},
    pg::{Pg, PgValue},
    serialize::{self, Output, ToSql},
    sql_types::Text,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Status enums, stored as Postgres enum types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = crate::schema::sql_types::BookingStatus)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    /// Pending is the only status with outgoing transitions.
    pub fn is_terminal(self) -> bool {
        self != BookingStatus::Pending
    }

    /// Statuses that count toward conflict detection.
    pub const ACTIVE: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Approved];

    /// Gate for status transitions. Approve requires PENDING; reject and
    /// cancel are accepted from any status, including terminal ones.
    pub fn validate_transition(self, new_status: BookingStatus) -> Result<(), ApiError> {
        match new_status {
            BookingStatus::Approved if self.is_terminal() => {
                Err(ApiError::InvalidState("booking is not pending".to_owned()))
            }
            _ => Ok(()),
        }
    }
}

impl ToSql<crate::schema::sql_types::BookingStatus, Pg> for BookingStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match *self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Cancelled => "cancelled",
        };
        <str as ToSql<Text, Pg>>::to_sql(s, out)
    }
}

impl FromSql<crate::schema::sql_types::BookingStatus, Pg> for BookingStatus {
    fn from_sql(bytes: PgValue) -> deserialize::Result<Self> {
        match <String as FromSql<Text, Pg>>::from_sql(bytes)?.as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "rejected" => Ok(BookingStatus::Rejected),
            "cancelled" => Ok(BookingStatus::Cancelled),
            s => Err(format!("Unrecognized booking status: {}", s).into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = crate::schema::sql_types::DamageStatus)]
#[serde(rename_all = "snake_case")]
pub enum DamageStatus {
    Reported,
    InProgress,
    Resolved,
}

impl ToSql<crate::schema::sql_types::DamageStatus, Pg> for DamageStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match *self {
            DamageStatus::Reported => "reported",
            DamageStatus::InProgress => "in_progress",
            DamageStatus::Resolved => "resolved",
        };
        <str as ToSql<Text, Pg>>::to_sql(s, out)
    }
}

impl FromSql<crate::schema::sql_types::DamageStatus, Pg> for DamageStatus {
    fn from_sql(bytes: PgValue) -> deserialize::Result<Self> {
        match <String as FromSql<Text, Pg>>::from_sql(bytes)?.as_str() {
            "reported" => Ok(DamageStatus::Reported),
            "in_progress" => Ok(DamageStatus::InProgress),
            "resolved" => Ok(DamageStatus::Resolved),
            s => Err(format!("Unrecognized damage status: {}", s).into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = crate::schema::sql_types::UserRole)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

impl ToSql<crate::schema::sql_types::UserRole, Pg> for UserRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match *self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        };
        <str as ToSql<Text, Pg>>::to_sql(s, out)
    }
}

impl FromSql<crate::schema::sql_types::UserRole, Pg> for UserRole {
    fn from_sql(bytes: PgValue) -> deserialize::Result<Self> {
        match <String as FromSql<Text, Pg>>::from_sql(bytes)?.as_str() {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            s => Err(format!("Unrecognized user role: {}", s).into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

pub const MIN_BOOKING_SECS: i64 = 30 * 60;
pub const MAX_BOOKING_SECS: i64 = 8 * 60 * 60;

/// Checks the booking window invariants: end after start, duration within
/// [30 minutes, 8 hours]. Both bounds are inclusive.
pub fn validate_booking_window(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<(), ApiError> {
    if end_time <= start_time {
        return Err(ApiError::InvalidDuration(
            "end_time must be after start_time".to_owned(),
        ));
    }
    let secs = (end_time - start_time).num_seconds();
    if secs < MIN_BOOKING_SECS {
        return Err(ApiError::InvalidDuration(
            "booking must be at least 30 minutes".to_owned(),
        ));
    }
    if secs > MAX_BOOKING_SECS {
        return Err(ApiError::InvalidDuration(
            "booking cannot exceed 8 hours".to_owned(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Queryable, Serialize)]
#[diesel(table_name = bookings)]
pub struct Booking {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
}

impl Booking {
    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == BookingStatus::Approved
    }

    pub fn is_rejected(&self) -> bool {
        self.status == BookingStatus::Rejected
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Only pending bookings may be edited by their owner.
    pub fn can_be_modified(&self) -> bool {
        self.is_pending()
    }

    /// Active bookings block the room for overlapping time ranges.
    pub fn is_active(&self) -> bool {
        self.is_pending() || self.is_approved()
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 3600.0
    }

    /// Half-open interval intersection on the same room. A booking that ends
    /// exactly when another starts does not overlap it.
    pub fn overlaps_with(&self, other: &Booking) -> bool {
        self.room_id == other.room_id
            && self.id != other.id
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreate {
    pub room_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
    pub room_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub fn default_limit() -> i64 {
    100
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Serialize)]
#[diesel(table_name = rooms)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = rooms)]
pub struct NewRoom {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomCreate {
    pub name: String,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    #[serde(default = "default_true")]
    pub status: bool,
}

fn default_capacity() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, AsChangeset)]
#[diesel(table_name = rooms)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RoomListQuery {
    pub status: Option<bool>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Queryable, Serialize)]
pub struct EquipmentInRoom {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct RoomWithEquipments {
    #[serde(flatten)]
    pub room: Room,
    pub equipments: Vec<EquipmentInRoom>,
}

// ---------------------------------------------------------------------------
// Equipments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Serialize)]
#[diesel(table_name = equipments)]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = equipments)]
pub struct NewEquipment {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, AsChangeset)]
#[diesel(table_name = equipments)]
pub struct EquipmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

// ---------------------------------------------------------------------------
// Room-equipment links
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Serialize)]
#[diesel(table_name = room_equipments)]
pub struct RoomEquipment {
    pub id: Uuid,
    pub room_id: Uuid,
    pub equipment_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = room_equipments)]
pub struct NewRoomEquipment {
    pub id: Uuid,
    pub room_id: Uuid,
    pub equipment_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomEquipmentCreate {
    pub room_id: Uuid,
    pub equipment_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomEquipmentSetQuantity {
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct AdjustQuery {
    pub amount: i32,
}

// ---------------------------------------------------------------------------
// Damage reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Serialize)]
#[diesel(table_name = damage_reports)]
pub struct DamageReport {
    pub id: Uuid,
    pub room_id: Uuid,
    pub equipment_id: Option<Uuid>,
    pub reporter_id: Uuid,
    pub description: String,
    pub status: DamageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = damage_reports)]
pub struct NewDamageReport {
    pub id: Uuid,
    pub room_id: Uuid,
    pub equipment_id: Option<Uuid>,
    pub reporter_id: Uuid,
    pub description: String,
    pub status: DamageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamageReportCreate {
    pub room_id: Uuid,
    pub equipment_id: Option<Uuid>,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, AsChangeset)]
#[diesel(table_name = damage_reports)]
pub struct DamageReportUpdate {
    pub description: Option<String>,
    pub status: Option<DamageStatus>,
}

#[derive(Debug, Deserialize)]
pub struct DamageReportListQuery {
    pub status: Option<DamageStatus>,
    pub room_id: Option<Uuid>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Serialize)]
#[diesel(table_name = profiles)]
pub struct Profile {
    pub id: Uuid,
    pub auth_user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_teacher(&self) -> bool {
        self.role == UserRole::Teacher
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    /// Admins and teachers book without waiting for approval.
    pub fn can_auto_approve_booking(&self) -> bool {
        self.is_admin() || self.is_teacher()
    }

    pub fn can_approve_bookings(&self) -> bool {
        self.is_admin()
    }

    pub fn can_manage_rooms(&self) -> bool {
        self.is_admin()
    }

    pub fn can_manage_damage_reports(&self) -> bool {
        self.is_admin()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub id: Uuid,
    pub auth_user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileCreate {
    pub auth_user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Student
}

#[derive(Debug, Clone, Deserialize, AsChangeset)]
#[diesel(table_name = profiles)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileListQuery {
    pub role: Option<UserRole>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub total: i64,
    pub admin: i64,
    pub teacher: i64,
    pub student: i64,
}

/// Acting user identity, minted by the external auth provider and passed
/// through as a query parameter.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ActingUser {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Reporter {
    pub reporter_id: Uuid,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoleQuery {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, hour, min, 0).unwrap()
    }

    fn booking(room_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            room_id,
            user_id: Uuid::new_v4(),
            start_time: start,
            end_time: end,
            status,
            created_at: at(8, 0),
            updated_at: at(8, 0),
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn window_rejects_end_before_start() {
        assert!(matches!(
            validate_booking_window(at(11, 0), at(10, 0)),
            Err(ApiError::InvalidDuration(_))
        ));
        assert!(matches!(
            validate_booking_window(at(11, 0), at(11, 0)),
            Err(ApiError::InvalidDuration(_))
        ));
    }

    #[test]
    fn window_rejects_twenty_minutes() {
        assert!(matches!(
            validate_booking_window(at(11, 0), at(11, 20)),
            Err(ApiError::InvalidDuration(_))
        ));
    }

    #[test]
    fn window_rejects_nine_hours() {
        assert!(matches!(
            validate_booking_window(at(9, 0), at(18, 0)),
            Err(ApiError::InvalidDuration(_))
        ));
    }

    #[test]
    fn window_accepts_both_bounds() {
        // 30 minutes and 8 hours exactly are both allowed.
        assert!(validate_booking_window(at(9, 0), at(9, 30)).is_ok());
        assert!(validate_booking_window(at(9, 0), at(17, 0)).is_ok());
        assert!(validate_booking_window(at(9, 0), at(11, 0)).is_ok());
    }

    #[test]
    fn overlap_iff_ranges_intersect() {
        let room = Uuid::new_v4();
        let a = booking(room, at(9, 0), at(11, 0), BookingStatus::Approved);

        let inside = booking(room, at(9, 30), at(10, 30), BookingStatus::Pending);
        let straddles_end = booking(room, at(10, 0), at(12, 0), BookingStatus::Pending);
        let straddles_start = booking(room, at(8, 0), at(9, 30), BookingStatus::Pending);
        let covers = booking(room, at(8, 0), at(12, 0), BookingStatus::Pending);
        let after = booking(room, at(12, 0), at(13, 0), BookingStatus::Pending);

        assert!(a.overlaps_with(&inside));
        assert!(inside.overlaps_with(&a));
        assert!(a.overlaps_with(&straddles_end));
        assert!(a.overlaps_with(&straddles_start));
        assert!(a.overlaps_with(&covers));
        assert!(!a.overlaps_with(&after));

        // The predicate is exactly a.start < b.end && b.start < a.end.
        for b in [&inside, &straddles_end, &straddles_start, &covers, &after] {
            assert_eq!(
                a.overlaps_with(b),
                a.start_time < b.end_time && b.start_time < a.end_time
            );
        }
    }

    #[test]
    fn back_to_back_bookings_do_not_overlap() {
        let room = Uuid::new_v4();
        let morning = booking(room, at(9, 0), at(10, 0), BookingStatus::Approved);
        let next = booking(room, at(10, 0), at(11, 0), BookingStatus::Pending);
        assert!(!morning.overlaps_with(&next));
        assert!(!next.overlaps_with(&morning));
    }

    #[test]
    fn overlap_requires_same_room_and_distinct_id() {
        let a = booking(Uuid::new_v4(), at(9, 0), at(11, 0), BookingStatus::Approved);
        let other_room = booking(Uuid::new_v4(), at(9, 0), at(11, 0), BookingStatus::Approved);
        assert!(!a.overlaps_with(&other_room));

        let mut same = a.clone();
        same.start_time = at(9, 30);
        assert!(!a.overlaps_with(&same));
    }

    #[test]
    fn status_predicates_track_status() {
        let room = Uuid::new_v4();
        let pending = booking(room, at(9, 0), at(10, 0), BookingStatus::Pending);
        assert!(pending.is_pending());
        assert!(pending.can_be_modified());
        assert!(pending.is_active());

        let approved = booking(room, at(9, 0), at(10, 0), BookingStatus::Approved);
        assert!(approved.is_approved());
        assert!(approved.is_active());
        assert!(!approved.can_be_modified());

        let rejected = booking(room, at(9, 0), at(10, 0), BookingStatus::Rejected);
        assert!(rejected.is_rejected());
        assert!(!rejected.is_active());

        let cancelled = booking(room, at(9, 0), at(10, 0), BookingStatus::Cancelled);
        assert!(cancelled.is_cancelled());
        assert!(!cancelled.is_active());
    }

    #[test]
    fn approve_transition_requires_pending() {
        assert!(BookingStatus::Pending
            .validate_transition(BookingStatus::Approved)
            .is_ok());
        for from in [
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
        ] {
            assert!(matches!(
                from.validate_transition(BookingStatus::Approved),
                Err(ApiError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn reject_and_cancel_are_permitted_from_any_status() {
        // Asymmetric with approve: reject after approve and a second cancel
        // both go through.
        assert!(BookingStatus::Approved
            .validate_transition(BookingStatus::Rejected)
            .is_ok());
        assert!(BookingStatus::Cancelled
            .validate_transition(BookingStatus::Cancelled)
            .is_ok());
        for from in [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
        ] {
            assert!(from.validate_transition(BookingStatus::Rejected).is_ok());
            assert!(from.validate_transition(BookingStatus::Cancelled).is_ok());
        }
    }

    #[test]
    fn pending_is_the_only_non_terminal_status() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(BookingStatus::Approved.is_terminal());
        assert!(BookingStatus::Rejected.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn duration_hours_is_seconds_over_3600() {
        let b = booking(Uuid::new_v4(), at(9, 0), at(11, 0), BookingStatus::Pending);
        assert_eq!(b.duration_hours(), 2.0);
        let half = booking(Uuid::new_v4(), at(9, 0), at(9, 30), BookingStatus::Pending);
        assert_eq!(half.duration_hours(), 0.5);
    }

    #[test]
    fn statuses_serialize_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&DamageStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"cancelled\"").unwrap(),
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn profile_role_predicates() {
        let mut profile = Profile {
            id: Uuid::new_v4(),
            auth_user_id: Uuid::new_v4(),
            first_name: "Jane".to_owned(),
            last_name: "Smith".to_owned(),
            role: UserRole::Student,
            created_at: at(8, 0),
            updated_at: at(8, 0),
            created_by: None,
            updated_by: None,
        };
        assert!(profile.is_student());
        assert!(!profile.can_auto_approve_booking());
        assert!(!profile.can_approve_bookings());

        profile.role = UserRole::Teacher;
        assert!(profile.is_teacher());
        assert!(profile.can_auto_approve_booking());
        assert!(!profile.can_manage_rooms());

        profile.role = UserRole::Admin;
        assert!(profile.is_admin());
        assert!(profile.can_approve_bookings());
        assert!(profile.can_manage_rooms());
        assert!(profile.can_manage_damage_reports());
        assert_eq!(profile.full_name(), "Jane Smith");
    }
}
