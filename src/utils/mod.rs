pub mod environment;

pub use environment::default_projects_dir;
