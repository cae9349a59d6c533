pub mod articulo;
pub mod inventario;
pub mod location;
pub mod rol;
pub mod usuario;
