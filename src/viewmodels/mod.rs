pub mod flow_error;
pub mod scan_flow;
pub mod registration_viewmodel;
pub mod parking_viewmodel;

pub use flow_error::{FlowError, ValidationError};
pub use scan_flow::{FlowIds, ScanFlow};
pub use registration_viewmodel::{OwnerForm, RegistrationViewModel, VehicleForm};
pub use parking_viewmodel::{ParkingViewModel, Submission};
