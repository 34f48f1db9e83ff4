pub mod application {
    pub mod file_service;
}
pub mod cli {
    pub mod app;
    pub mod ui;
}
pub mod core {
    pub mod highlight;
}
pub mod domain {
    pub mod file;
    pub mod ports {
        pub mod config;
        pub mod fs;
        pub mod input;
    }
}
pub mod error;
pub mod infra {
    pub mod file_system;
    pub mod input;
}
pub mod tracing;
