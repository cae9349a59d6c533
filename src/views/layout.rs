use super::{escape, feedback, Role};

/// Sidebar menu entries per role: (label, href).
fn menu_items(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => &[
            ("Estadísticas", "/dashboard"),
            ("Inventario", "/inventario"),
            ("Pedidos", "/pedidos"),
            ("Notificaciones", "/notificaciones"),
            ("Usuarios", "/usuarios"),
            ("Artículos", "/articulos"),
            ("Ubicaciones", "/location"),
            ("Modelo IA", "/modelo-prediccion"),
        ],
        Role::Almacen => &[
            ("Inicio", "/dashboard"),
            ("Órdenes recibidas", "/ordenes"),
            ("Inventario", "/inventario"),
        ],
        Role::Cliente => &[("Estadísticas", "/dashboard")],
        Role::Dueno => &[
            ("Estadísticas", "/dashboard"),
            ("Inventario", "/inventario"),
            ("Órdenes recibidas", "/ordenes-Recibidas"),
            ("Pedir producto", "/pedir-producto"),
            ("Crear producto", "/crear-producto"),
            ("Recomendaciones IA", "/recomendaciones-IA"),
        ],
        Role::Proveedor => &[("Estadísticas", "/dashboard"), ("Órdenes", "/ordenes")],
        Role::Sucursal => &[
            ("Inicio", "/dashboard"),
            ("Órdenes", "/ordenes"),
            ("Inventario", "/inventario"),
        ],
        Role::SuperAdmin => &[
            ("Estadísticas", "/dashboard"),
            ("Inventario", "/inventario"),
            ("Pedidos", "/pedidos"),
            ("Notificaciones", "/notificaciones"),
            ("Usuarios", "/usuarios"),
            ("Artículos", "/articulos"),
            ("Ubicaciones", "/location"),
            ("Modelo IA", "/modelo-prediccion"),
            ("Asistente IA", "/asistente-ia"),
        ],
    }
}

/// Header bar with the menu toggle and the role caption.
pub fn navbar(role: Role, sidebar_active: bool) -> String {
    let toggle = if sidebar_active { "Cerrar menú" } else { "Abrir menú" };
    format!(
        concat!(
            "<header class=\"d-header\">",
            "<div class=\"d-header-left\">",
            "<button class=\"btn btn-sm btn-neutral\" data-action=\"toggle-sidebar\">{}</button>",
            "</div>",
            "<div class=\"d-header-right\"><span>Navbar {}</span></div>",
            "</header>",
        ),
        toggle,
        role.caption(),
    )
}

/// Role-specific sidebar with the navigation menu.
pub fn sidebar(role: Role, sidebar_active: bool) -> String {
    let class = if sidebar_active { "sidebar active" } else { "sidebar" };

    let mut items = String::new();
    for (label, href) in menu_items(role) {
        items.push_str(&format!("<li><a href=\"{}\">{}</a></li>", href, label));
    }

    format!(
        "<aside class=\"{}\"><nav class=\"sidebar-menu\"><ul>{}</ul></nav></aside>",
        class, items,
    )
}

/// Full dashboard shell for a role; an optional flash message renders as a toast.
pub fn dashboard(role: Role, sidebar_active: bool, flash: Option<&str>) -> String {
    let toast = flash
        .map(|mensaje| feedback::toast(mensaje, 3000))
        .unwrap_or_default();
    let logout_dialog = feedback::confirm("Cerrar sesión", "¿Seguro que deseas cerrar la sesión?");

    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"es\"><head><meta charset=\"utf-8\">",
            "<title>Sapatos - {}</title></head>",
            "<body>{}{}",
            "<main class=\"dashboard\"><h1>Bienvenido</h1></main>",
            "{}{}",
            "</body></html>",
        ),
        escape(role.caption()),
        navbar(role, sidebar_active),
        sidebar(role, sidebar_active),
        toast,
        logout_dialog,
    )
}
