pub mod drawer;
pub mod frame_gate;
pub mod progress;
pub mod reveal;
pub mod scrollspy;

pub use drawer::{DrawerAction, DrawerState};
pub use frame_gate::FrameGate;
pub use progress::scroll_progress;
pub use reveal::RevealGate;
pub use scrollspy::{NavLock, ScrollSpy, SectionMark, Viewport};
