/// Resuelve la unidad organizativa de un empleado contra los grupos cargados.
///
/// Los grupos se guardan en orden de carga; cuando más de un nombre aparece
/// dentro de la unidad organizativa gana el primero que se cargó.
pub struct GrupoResolver {
    grupos: Vec<(String, i32)>,
}

impl GrupoResolver {
    pub fn from_rows(rows: Vec<(i32, String)>) -> Self {
        Self {
            grupos: rows
                .into_iter()
                .map(|(grupo_id, nombre)| (nombre, grupo_id))
                .collect(),
        }
    }

    /// Primer grupo cuyo nombre aparece (sin distinguir mayúsculas) como
    /// substring de la unidad organizativa; `None` si ninguno aparece.
    pub fn resolve(&self, unidad_organizativa: &str) -> Option<i32> {
        let unidad = unidad_organizativa.to_uppercase();
        self.grupos
            .iter()
            .find(|(nombre, _)| unidad.contains(&nombre.to_uppercase()))
            .map(|(_, grupo_id)| *grupo_id)
    }

    pub fn len(&self) -> usize {
        self.grupos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grupos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> GrupoResolver {
        GrupoResolver::from_rows(vec![
            (1, "Linea 1".to_string()),
            (2, "Linea 1 Turno A".to_string()),
            (3, "Vulcanizado".to_string()),
        ])
    }

    #[test]
    fn test_resolve_substring_sin_distinguir_mayusculas() {
        let r = resolver();
        assert_eq!(r.resolve("PRODUCCION LINEA 1 TURNO A"), Some(1));
        assert_eq!(r.resolve("area de vulcanizado nocturno"), Some(3));
    }

    #[test]
    fn test_resolve_sin_coincidencia() {
        let r = resolver();
        assert_eq!(r.resolve("ADMINISTRACION"), None);
        assert_eq!(r.resolve(""), None);
    }

    #[test]
    fn test_resolve_gana_el_primero_cargado() {
        // "Linea 1" y "Linea 1 Turno A" aparecen ambos; gana el de menor orden de carga
        let r = resolver();
        assert_eq!(r.resolve("LINEA 1 TURNO A"), Some(1));
    }

    #[test]
    fn test_resolver_vacio() {
        let r = GrupoResolver::from_rows(vec![]);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.resolve("PRODUCCION LINEA 1"), None);
    }
}
