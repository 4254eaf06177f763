mod classifier;
pub mod prompt;

pub use classifier::{IntentClassifier, MODEL, SAMPLING};
pub use prompt::{INTENT_LABELS, build_prompt, is_known_label};
