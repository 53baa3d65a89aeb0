// Utils compartidos

pub mod qr_scanner_ffi;
pub mod format;

pub use format::*;
