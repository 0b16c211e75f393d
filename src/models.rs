use csv::StringRecord;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

// Layout posicional del CSV de grupos ("personas por grupo")
const COL_NOMBRE_GRUPO: usize = 3;
const COL_MANNING: usize = 4;
const COL_PERSONAS_POR_DIA: usize = 5;
const COL_PERSONAS_POR_GRUPO: usize = 6;

/// Longitud máxima del IdentificadorSAP en el esquema
const SAP_ID_MAX_LEN: usize = 20;

/// Headers obligatorios del listado de sindicalizados
pub const EMPLEADO_REQUIRED_HEADERS: [&str; 9] = [
    "Nómina",
    "Nombre",
    "Alta",
    "Ce.coste",
    "Posición",
    "Unidad organizativa",
    "Encargado para registro de tie",
    "Regla ",
    "Turno",
];

/// Fila del CSV de grupos, leída por posición (las dos primeras filas son header)
#[derive(Debug, Clone, PartialEq)]
pub struct GrupoCsvRow {
    pub nombre: String,
    pub manning: f64,
    pub personas_por_dia: i32,
    pub personas_por_grupo: i32,
}

impl GrupoCsvRow {
    /// Devuelve `None` cuando la fila no trae nombre de grupo (columna 3 vacía o ausente)
    pub fn from_record(record: &StringRecord) -> Option<GrupoCsvRow> {
        let nombre = record.get(COL_NOMBRE_GRUPO)?.trim();
        if nombre.is_empty() {
            return None;
        }

        Some(GrupoCsvRow {
            nombre: nombre.to_string(),
            manning: parse_decimal_field(record.get(COL_MANNING), "Manning", nombre),
            personas_por_dia: parse_entero_field(
                record.get(COL_PERSONAS_POR_DIA),
                "PersonasPorDia",
                nombre,
            ),
            personas_por_grupo: parse_entero_field(
                record.get(COL_PERSONAS_POR_GRUPO),
                "PersonasPorGrupo",
                nombre,
            ),
        })
    }
}

/// Registro del listado de sindicalizados, leído por nombre de columna.
/// "Regla " lleva el espacio final tal cual viene en el export.
#[derive(Debug, Clone, Deserialize)]
pub struct EmpleadoCsvRow {
    #[serde(rename = "Nómina")]
    pub nomina: String,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Alta")]
    pub alta: String,
    #[serde(rename = "Ce.coste")]
    pub ce_coste: String,
    #[serde(rename = "Posición")]
    pub posicion: String,
    #[serde(rename = "Unidad organizativa")]
    pub unidad_organizativa: String,
    #[serde(rename = "Encargado para registro de tie")]
    pub encargado_registro: String,
    #[serde(rename = "Regla ")]
    pub regla: String,
    #[serde(rename = "Turno")]
    pub turno: String,
}

impl EmpleadoCsvRow {
    /// El export trae espacios sueltos en casi todos los campos
    pub fn normalized(mut self) -> Self {
        self.nomina = self.nomina.trim().to_string();
        self.nombre = self.nombre.trim().to_string();
        self.alta = self.alta.trim().to_string();
        self.ce_coste = self.ce_coste.trim().to_string();
        self.posicion = self.posicion.trim().to_string();
        self.unidad_organizativa = self.unidad_organizativa.trim().to_string();
        self.encargado_registro = self.encargado_registro.trim().to_string();
        self.regla = self.regla.trim().to_string();
        self.turno = self.turno.trim().to_string();
        self
    }
}

/// IdentificadorSAP derivado del nombre: espacios → '_', mayúsculas, máximo 20 caracteres
pub fn derive_identificador_sap(nombre: &str) -> String {
    nombre
        .replace(' ', "_")
        .to_uppercase()
        .chars()
        .take(SAP_ID_MAX_LEN)
        .collect()
}

fn parse_decimal_field(value: Option<&str>, campo: &str, grupo: &str) -> f64 {
    lazy_static! {
        static ref NUMERIC_RE: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
    }

    let v = value.unwrap_or("").trim();
    if v.is_empty() {
        return 0.0;
    }

    if NUMERIC_RE.is_match(v) {
        if let Ok(parsed) = v.parse::<f64>() {
            return parsed;
        }
    }

    eprintln!(
        "⚠️  Grupo '{}': valor no numérico para {}: '{}' (se usa 0)",
        grupo, campo, v
    );
    0.0
}

fn parse_entero_field(value: Option<&str>, campo: &str, grupo: &str) -> i32 {
    let v = value.unwrap_or("").trim();
    if v.is_empty() {
        return 0;
    }

    match v.parse::<i32>() {
        Ok(parsed) => parsed,
        Err(_) => {
            eprintln!(
                "⚠️  Grupo '{}': valor no numérico para {}: '{}' (se usa 0)",
                grupo, campo, v
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_derive_identificador_sap() {
        // Se trunca a 20 caracteres después de pasar a mayúsculas
        assert_eq!(
            derive_identificador_sap("Linea De Produccion Uno"),
            "LINEA_DE_PRODUCCION_"
        );
        assert_eq!(derive_identificador_sap("Linea 1"), "LINEA_1");
        assert_eq!(derive_identificador_sap("Vulcanización"), "VULCANIZACIÓN");
        assert_eq!(derive_identificador_sap(""), "");
    }

    #[test]
    fn test_grupo_row_completo() {
        let r = record(&["x", "y", "z", "Linea 1", "5", "10", "2"]);
        let row = GrupoCsvRow::from_record(&r).unwrap();
        assert_eq!(row.nombre, "Linea 1");
        assert_eq!(row.manning, 5.0);
        assert_eq!(row.personas_por_dia, 10);
        assert_eq!(row.personas_por_grupo, 2);
    }

    #[test]
    fn test_grupo_row_campos_vacios_usan_cero() {
        let r = record(&["", "", "", "Linea 2", "", "", ""]);
        let row = GrupoCsvRow::from_record(&r).unwrap();
        assert_eq!(row.manning, 0.0);
        assert_eq!(row.personas_por_dia, 0);
        assert_eq!(row.personas_por_grupo, 0);
    }

    #[test]
    fn test_grupo_row_columnas_faltantes_usan_cero() {
        // Fila corta: solo llega hasta el nombre
        let r = record(&["", "", "", "Linea 3"]);
        let row = GrupoCsvRow::from_record(&r).unwrap();
        assert_eq!(row.manning, 0.0);
        assert_eq!(row.personas_por_dia, 0);
    }

    #[test]
    fn test_grupo_row_sin_nombre_se_descarta() {
        assert!(GrupoCsvRow::from_record(&record(&["a", "b", "c", "   ", "5"])).is_none());
        assert!(GrupoCsvRow::from_record(&record(&["a", "b"])).is_none());
    }

    #[test]
    fn test_grupo_row_valores_no_numericos_usan_cero() {
        let r = record(&["", "", "", "Linea 4", "abc", "1.5", "x"]);
        let row = GrupoCsvRow::from_record(&r).unwrap();
        assert_eq!(row.manning, 0.0);
        // "1.5" no es un entero válido para PersonasPorDia
        assert_eq!(row.personas_por_dia, 0);
    }

    #[test]
    fn test_grupo_row_manning_decimal() {
        let r = record(&["", "", "", "Linea 5", "2.5", "8", "4"]);
        let row = GrupoCsvRow::from_record(&r).unwrap();
        assert_eq!(row.manning, 2.5);
    }

    #[test]
    fn test_empleado_row_deserializa_por_header() {
        let data = "\
Nómina,Nombre,Alta,Ce.coste,Posición,Unidad organizativa,Encargado para registro de tie,Regla ,Turno
12345, PEREZ JUAN ,1/4/2016,80805,OPERADOR,PRODUCCION LINEA 1 TURNO A,SUPERVISOR X,R1,A
";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let row: EmpleadoCsvRow = rdr.deserialize().next().unwrap().unwrap();
        let row = row.normalized();

        assert_eq!(row.nomina, "12345");
        assert_eq!(row.nombre, "PEREZ JUAN");
        assert_eq!(row.alta, "1/4/2016");
        assert_eq!(row.unidad_organizativa, "PRODUCCION LINEA 1 TURNO A");
        assert_eq!(row.regla, "R1");
        assert_eq!(row.turno, "A");
    }
}
