pub mod owner;
pub mod vehicle;
pub mod parking;
#[cfg(feature = "spot-tracking")]
pub mod spot;

pub use owner::{Owner, OwnerCreate};
pub use vehicle::{Vehicle, VehicleCreate, VehicleRegistrationResponse};
pub use parking::{ApiErrorBody, CheckInRequest, QrCodeRequest, VehicleStatusResponse};
#[cfg(feature = "spot-tracking")]
pub use spot::ParkingSpot;
