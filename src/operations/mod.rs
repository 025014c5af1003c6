mod make_continuous;
mod offset_segment;

pub use make_continuous::MakeContinuous;
pub use offset_segment::SegmentOffset2D;
