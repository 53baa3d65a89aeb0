// ============================================================================
// DOM - Acceso a la página estática (index.html): lectura de inputs,
// regiones de estado, visibilidad y construcción de bloques de resultado
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::ElementBuilder;
pub use element::*;
pub use events::{on_click, on_click_id};
