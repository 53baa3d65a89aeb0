pub mod messages;
pub mod status;
pub mod registration;
pub mod scan_panel;
pub mod vehicle_status;
#[cfg(feature = "spot-tracking")]
pub mod parking_lot;

pub use status::{update_status, update_status_by_id, StatusKind};
pub use registration::render_registration_result;
pub use scan_panel::{bind_scan_panel, reset_scan_panel, set_cancel_visible};
pub use vehicle_status::render_vehicle_status;
#[cfg(feature = "spot-tracking")]
pub use parking_lot::{render_parking_lot, render_parking_lot_error, render_parking_lot_loading};
