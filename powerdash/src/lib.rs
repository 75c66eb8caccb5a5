pub mod poller;
pub mod render;
pub mod util;
pub mod view;
