pub mod error;
pub mod money;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod catalog {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod checkout {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod relay {
    pub mod error_mapper;
    pub mod handler;
}
