pub mod articulos;
pub mod inventario;
pub mod locations;
pub mod roles;
pub mod ui;
pub mod usuarios;
