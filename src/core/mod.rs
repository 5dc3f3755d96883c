pub mod insight;
pub mod suggest;
pub mod task;
pub mod thought;
pub mod urgency;
