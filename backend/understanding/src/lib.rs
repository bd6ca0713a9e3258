pub mod frames;
pub mod mime;
pub mod mock;
pub mod prompt;
pub mod vision;

pub use frames::{FrameExtractor, DEFAULT_FRAME_COUNT};
pub use mime::{detect_mime_type, is_image, is_video};
pub use mock::MockDescriber;
pub use prompt::{full_inspection_prompt, inspection_prompt};
pub use vision::{describe_image, VisionProvider};
