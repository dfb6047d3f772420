pub mod db;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod listing {
    pub mod entity;
    pub mod repository;
}
