pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod harmony;
pub mod profile;
pub mod recommend;
pub mod season;
pub mod tone;
pub mod tasks {
    pub mod files;
    pub mod loader;
}

pub use error::{Error, NoSkinDetected};
pub use tone::{ToneAnalysis, classify_fixed_color, classify_image, classify_skin_tone};
