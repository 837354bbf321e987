pub mod bookings;
pub mod damage_reports;
pub mod equipments;
pub mod profiles;
pub mod room_equipments;
pub mod rooms;
