pub mod clock;
pub mod engine;
pub mod keyframe;
pub mod loader;
pub mod poller;
pub mod schedule;
pub mod uniform;

pub use clock::{TimeBucket, TimeOfDay};
pub use engine::TimeOfDayColorEngine;
pub use keyframe::{ColorKeyframe, KeyframeTable};
pub use loader::load_keyframes_from_str;
pub use poller::SkyPoller;
pub use schedule::{ManualScheduler, Scheduler, TickCallback, TickHandle};
pub use uniform::SkyUniform;
