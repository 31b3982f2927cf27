pub mod errors;
pub mod cart {
    pub mod repository;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
