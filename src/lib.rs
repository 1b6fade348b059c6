pub mod service {
    pub mod config_service;
    pub mod copy;
    pub mod report;
    pub mod scan;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod backup_facade;
    pub mod traits {
        pub mod i_backup;
    }
}

pub mod models {
    pub mod backup;
    pub mod copy;
    pub mod report;
    pub mod scan;
}

pub mod utils {
    pub mod utils;
}
