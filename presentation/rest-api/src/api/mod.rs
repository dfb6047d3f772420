pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}

pub mod listing {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
