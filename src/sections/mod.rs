// Landing page sections

mod services;

pub use services::Services;
