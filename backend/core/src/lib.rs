pub mod error;
pub mod session;
pub mod traits;
pub mod types;

pub use error::RoomLensError;
pub use session::AnalysisSession;
pub use traits::{AmenityClassifier, FrameDescriber};
pub use types::{
    AmenityFinding, AmenityGroup, AmenityKey, AmenityStatus, GroupReport, HousekeepingReport,
};
