mod control_path;
mod cubic;
mod thickness;

pub use control_path::ControlPath;
pub use cubic::CubicSegment;
pub use thickness::ThicknessProfile;
