mod window_port;

pub use window_port::{WindowPort, WindowPortConfig};
