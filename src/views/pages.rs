use super::feedback::{self, AlertKind};
use super::{escape, Role};

fn page(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"es\"><head><meta charset=\"utf-8\">",
            "<title>Sapatos - {}</title></head>",
            "<body>{}</body></html>",
        ),
        escape(title),
        body,
    )
}

/// Rendered 404 page.
pub fn not_found() -> String {
    page(
        "Página no encontrada",
        concat!(
            "<div class=\"card not-found\">",
            "<h1>Página no encontrada</h1>",
            "<p>Lo sentimos, la página que estás buscando no existe o ha sido movida.</p>",
            "<div class=\"actions\">",
            "<a class=\"btn btn-primary\" href=\"/dashboard\">Ir al Dashboard</a>",
            "<button class=\"btn btn-outline-secondary\" data-action=\"back\">Regresar</button>",
            "</div></div>",
        ),
    )
}

/// Notice shown when the account has no assigned location; the message is
/// role-specific with an explicit default for everything else.
pub fn location_not_assigned(role: Option<Role>) -> String {
    let mensaje = match role {
        Some(Role::Cliente) => {
            "Para ver las estadísticas, necesitas tener una ubicación asignada. Contacta al administrador."
        }
        Some(Role::Proveedor) => {
            "Para acceder a las estadísticas de tu zona, solicita que te asignen una ubicación."
        }
        Some(Role::Admin) => {
            "Tu cuenta de administrador necesita una ubicación asignada para filtrar las estadísticas."
        }
        Some(Role::Almacen)
        | Some(Role::Sucursal)
        | Some(Role::Dueno)
        | Some(Role::SuperAdmin)
        | None => "Tu cuenta necesita una ubicación asignada para ver las estadísticas.",
    };

    let aviso = feedback::alert(
        "Información",
        "Las estadísticas se filtran por ubicación para mostrar datos relevantes a tu zona de trabajo.",
        AlertKind::Information,
    );

    page(
        "Sin Ubicación Asignada",
        &format!(
            "<div class=\"card\"><h4>Sin Ubicación Asignada</h4><p>{}</p>{}</div>",
            mensaje, aviso,
        ),
    )
}

/// Statistics page for an account with an assigned location.
pub fn estadisticas(role: Role, ubicacion: &str) -> String {
    page(
        "Estadísticas",
        &format!(
            "<div class=\"card\"><h1>Estadísticas</h1><p>Ubicación: {}</p><p>Rol: {}</p></div>",
            escape(ubicacion),
            role.caption(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_page_has_title_and_actions() {
        let html = not_found();
        assert!(html.contains("Página no encontrada"));
        assert!(html.contains("la página que estás buscando no existe"));
        assert!(html.contains("Ir al Dashboard"));
        assert!(html.contains("Regresar"));
    }

    #[test]
    fn cliente_notice_points_to_administrator() {
        let html = location_not_assigned(Some(Role::Cliente));
        assert!(html.contains("Contacta al administrador"));
    }

    #[test]
    fn proveedor_and_admin_get_their_own_notices() {
        assert!(location_not_assigned(Some(Role::Proveedor))
            .contains("solicita que te asignen una ubicación"));
        assert!(location_not_assigned(Some(Role::Admin))
            .contains("cuenta de administrador"));
    }

    #[test]
    fn unrecognized_role_gets_default_notice() {
        let html = location_not_assigned(None);
        assert!(html.contains("Tu cuenta necesita una ubicación asignada"));
        assert!(!html.contains("Contacta al administrador"));
    }

    #[test]
    fn notice_embeds_filtering_explanation() {
        let html = location_not_assigned(Some(Role::Cliente));
        assert!(html.contains("Las estadísticas se filtran por ubicación"));
        assert!(html.contains("alert-info"));
    }

    #[test]
    fn estadisticas_shows_location() {
        let html = estadisticas(Role::Sucursal, "Almacén Centro");
        assert!(html.contains("Almacén Centro"));
        assert!(html.contains("Sucursal"));
    }
}
