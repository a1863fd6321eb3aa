pub mod movie_card;
pub mod scrollable_row;
pub mod shrink_text;
pub mod skeleton;

pub use movie_card::MovieCard;
pub use scrollable_row::ScrollableRow;
pub use shrink_text::ShrinkText;
pub use skeleton::SliderSkeleton;
