mod analysis;
mod audio_asset;
mod chat;
mod locale;

pub use analysis::{AnalysisOutcome, CryAnalysis};
pub use audio_asset::{AudioAsset, EmptyAudio, FALLBACK_CONTENT_TYPE};
pub use chat::{ChatRole, ChatTurn};
pub use locale::Locale;
