use std::error::Error;

use csv::ReaderBuilder;
use sqlx::PgConnection;

use crate::db;
use crate::file_utils::validate_file_exists;
use crate::models::{derive_identificador_sap, GrupoCsvRow};

/// El export "personas por grupo" trae dos filas de encabezado
const HEADER_ROWS: usize = 2;

/// Carga Áreas y Grupos desde el CSV de grupos.
///
/// Cada creación se confirma por statement, así una corrida interrumpida
/// conserva lo ya insertado y la siguiente corrida salta los nombres presentes.
pub async fn populate_groups(
    conn: &mut PgConnection,
    input_file: &str,
) -> Result<usize, Box<dyn Error>> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Carga de Áreas y Grupos                                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("📄 Input: {}", input_file);
    println!();

    validate_file_exists(input_file)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input_file)?;

    let mut rows_with_group = 0usize;
    let mut created = 0usize;

    for (i, result) in reader.records().enumerate() {
        if i < HEADER_ROWS {
            continue;
        }

        let record = result?;
        let row = match GrupoCsvRow::from_record(&record) {
            Some(row) => row,
            None => continue,
        };
        rows_with_group += 1;

        // Todos los grupos cuelgan del área fija de producción
        let area_id = match db::area_id_by_nombre(&mut *conn, db::AREA_PRODUCCION).await? {
            Some(area_id) => area_id,
            None => {
                let area_id = db::insert_area(&mut *conn, db::AREA_PRODUCCION, 0.0).await?;
                println!("✅ Created area: {} (ID: {})", db::AREA_PRODUCCION, area_id);
                area_id
            }
        };

        if db::grupo_id_by_nombre(&mut *conn, &row.nombre).await?.is_some() {
            continue;
        }

        let identificador_sap = derive_identificador_sap(&row.nombre);
        db::insert_grupo(
            &mut *conn,
            &row.nombre,
            area_id,
            &identificador_sap,
            row.manning,
            row.personas_por_dia,
            row.personas_por_grupo,
        )
        .await?;
        created += 1;
        println!("✅ Created group: {} (Manning: {})", row.nombre, row.manning);
    }

    println!();
    println!("📊 RESUMEN:");
    println!("  Filas con grupo: {}", rows_with_group);
    println!("  Grupos creados:  {}", created);
    println!();

    Ok(created)
}
