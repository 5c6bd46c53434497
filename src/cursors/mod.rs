pub mod slice;
pub mod stream;
pub mod text;
pub mod tracked;

pub use slice::SliceCursor;
pub use stream::{StreamBuffer, StreamCursor};
pub use text::StrCursor;
pub use tracked::Tracked;
